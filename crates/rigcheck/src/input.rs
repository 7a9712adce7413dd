//! Analysis input files
//!
//! ```yaml
//! cpu: i5-12400
//! gpu: rtx3060
//! ram_gb: 16
//! ram_speed: 3200MHz
//! storage: NVMe
//! resolution: 1440p
//! refresh: 165
//! budget: $400-700
//! games: [cyberpunk, valorant]
//! ```

use std::fs;
use std::path::Path;

use rigcheck_core::AnalysisBuilder;
use rigcheck_core::model::{AnalysisInput, BudgetBucket, Resolution, StorageType};
use serde::{Deserialize, Serialize};

use crate::error::LoadError;

/// On-disk shape of an analysis request; optional fields take builder defaults
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct InputFile {
    pub cpu: String,
    pub gpu: String,
    #[serde(default = "default_ram_gb")]
    pub ram_gb: u32,
    #[serde(default = "default_ram_speed")]
    pub ram_speed: String,
    #[serde(default = "default_storage")]
    pub storage: StorageType,
    #[serde(default = "default_resolution")]
    pub resolution: Resolution,
    #[serde(default = "default_refresh")]
    pub refresh: u32,
    #[serde(default = "default_budget")]
    pub budget: BudgetBucket,
    pub games: Vec<String>,
}

fn default_ram_gb() -> u32 {
    16
}

fn default_ram_speed() -> String {
    "3200MHz".to_string()
}

fn default_storage() -> StorageType {
    StorageType::Nvme
}

fn default_resolution() -> Resolution {
    Resolution::Fhd
}

fn default_refresh() -> u32 {
    144
}

fn default_budget() -> BudgetBucket {
    BudgetBucket::UpTo700
}

impl InputFile {
    /// Load from YAML string
    pub fn from_yaml(yaml: &str) -> Result<Self, serde_saphyr::Error> {
        serde_saphyr::from_str(yaml)
    }

    /// Every problem that would make the request meaningless
    #[must_use]
    pub fn problems(&self) -> Vec<String> {
        let mut problems = Vec::new();
        if self.ram_gb == 0 {
            problems.push("ram_gb must be positive".to_string());
        }
        if self.refresh == 0 {
            problems.push("refresh must be positive".to_string());
        }
        if self.games.iter().all(|g| g.trim().is_empty()) {
            problems.push("select at least one game".to_string());
        }
        problems
    }

    /// Validate and convert to the core input record
    pub fn into_input(self) -> Result<AnalysisInput, LoadError> {
        let problems = self.problems();
        if !problems.is_empty() {
            return Err(LoadError::Invalid(problems));
        }
        Ok(AnalysisBuilder::new()
            .cpu(self.cpu)
            .gpu(self.gpu)
            .ram(self.ram_gb, self.ram_speed)
            .storage(self.storage)
            .resolution(self.resolution)
            .refresh(self.refresh)
            .games(self.games.into_iter().filter(|g| !g.trim().is_empty()))
            .budget(self.budget)
            .build())
    }
}

/// Read, parse and validate an input file
pub fn load_input(path: &Path) -> Result<AnalysisInput, LoadError> {
    let content = fs::read_to_string(path)?;
    let input = InputFile::from_yaml(&content)?.into_input()?;
    tracing::debug!(
        path = %path.display(),
        cpu = %input.cpu_id,
        gpu = %input.gpu_id,
        games = input.games.len(),
        "loaded analysis input"
    );
    Ok(input)
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::tempdir;

    #[test]
    fn test_load_full_input() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("build.yaml");
        fs::write(
            &path,
            "cpu: i5-12400\n\
             gpu: rtx3060\n\
             ram_gb: 32\n\
             ram_speed: DDR4-3600\n\
             storage: SATA SSD\n\
             resolution: 1440p\n\
             refresh: 165\n\
             budget: $700-1200\n\
             games: [cyberpunk, valorant]\n",
        )
        .unwrap();

        let input = load_input(&path).unwrap();
        assert_eq!(input.cpu_id, "i5-12400");
        assert_eq!(input.ram_amount, 32);
        assert_eq!(input.ram_speed, "DDR4-3600");
        assert_eq!(input.storage_type, StorageType::SataSsd);
        assert_eq!(input.resolution, Resolution::Qhd);
        assert_eq!(input.refresh_rate, 165);
        assert_eq!(input.budget_bucket, BudgetBucket::UpTo1200);
        assert_eq!(input.games, ["cyberpunk", "valorant"]);
    }

    #[test]
    fn test_optional_fields_take_defaults() {
        let file = InputFile::from_yaml("cpu: a\ngpu: b\ngames: [cs2]\n").unwrap();
        let input = file.into_input().unwrap();
        assert_eq!(input.ram_amount, 16);
        assert_eq!(input.storage_type, StorageType::Nvme);
        assert_eq!(input.resolution, Resolution::Fhd);
        assert_eq!(input.refresh_rate, 144);
        assert_eq!(input.budget_bucket, BudgetBucket::UpTo700);
    }

    #[test]
    fn test_validation_collects_every_problem() {
        let file =
            InputFile::from_yaml("cpu: a\ngpu: b\nram_gb: 0\nrefresh: 0\ngames: []\n").unwrap();
        assert_eq!(file.problems().len(), 3);
        match file.into_input() {
            Err(LoadError::Invalid(problems)) => {
                assert!(problems.iter().any(|p| p.contains("ram_gb")));
                assert!(problems.iter().any(|p| p.contains("refresh")));
                assert!(problems.iter().any(|p| p.contains("game")));
            }
            other => panic!("expected validation error, got {other:?}"),
        }
    }

    #[test]
    fn test_blank_game_ids_are_dropped() {
        let file = InputFile::from_yaml("cpu: a\ngpu: b\ngames: ['', cs2, ' ']\n").unwrap();
        assert_eq!(file.into_input().unwrap().games, ["cs2"]);
    }

    #[test]
    fn test_missing_file_and_bad_yaml() {
        let dir = tempdir().unwrap();
        let missing = load_input(&dir.path().join("nope.yaml")).unwrap_err();
        assert!(matches!(missing, LoadError::Io(_)));

        let path = dir.path().join("bad.yaml");
        fs::write(&path, "cpu: [unterminated\n").unwrap();
        assert!(matches!(load_input(&path).unwrap_err(), LoadError::Parse(_)));
    }
}
