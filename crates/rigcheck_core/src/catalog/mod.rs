//! Catalog store
//!
//! Static component collections plus the curated benchmark table. A catalog is
//! validated and indexed once at construction and never mutated afterwards, so
//! a single instance can be shared by any number of concurrent analyses.

mod builtin;
mod curated;

use std::sync::LazyLock;

use rustc_hash::FxHashMap;
use serde::{Deserialize, Serialize};

pub use curated::{Anchor, CuratedSample, CuratedTable, QualityPreset};

use crate::error::{CatalogError, CatalogSection};
use crate::index::{gpu_index, relative_gpu_index};
use crate::model::{Cpu, GameProfile, Gpu, Monitor, RamKit, Resolution, StorageKit};

/// GPUs whose index is pinned relative to a reference card
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PerfOverrides {
    pub reference_gpu: String,
    pub multipliers: Vec<PerfMultiplier>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PerfMultiplier {
    pub gpu: String,
    pub multiplier: f64,
}

/// Raw catalog collections, as loaded from static data or a catalog file
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct CatalogData {
    pub cpus: Vec<Cpu>,
    pub gpus: Vec<Gpu>,
    pub games: Vec<GameProfile>,
    #[serde(default)]
    pub monitors: Vec<Monitor>,
    #[serde(default)]
    pub ram_kits: Vec<RamKit>,
    #[serde(default)]
    pub storage_kits: Vec<StorageKit>,
    #[serde(default)]
    pub curated: Vec<CuratedSample>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub perf_overrides: Option<PerfOverrides>,
}

static BUILTIN: LazyLock<Catalog> = LazyLock::new(|| {
    Catalog::new(builtin::catalog_data()).expect("built-in catalog data is valid")
});

/// Validated, indexed, read-only catalog
#[derive(Debug, Clone)]
pub struct Catalog {
    data: CatalogData,
    cpu_ids: FxHashMap<String, usize>,
    gpu_ids: FxHashMap<String, usize>,
    game_ids: FxHashMap<String, usize>,
    reference_gpu: Option<usize>,
    multipliers: FxHashMap<String, f64>,
    curated: CuratedTable,
}

impl Catalog {
    /// Validate the collections and build lookup maps and the anchor index
    pub fn new(data: CatalogData) -> Result<Self, CatalogError> {
        validate(&data)?;

        let cpu_ids = id_map(data.cpus.iter().map(|c| c.id.as_str()));
        let gpu_ids = id_map(data.gpus.iter().map(|g| g.id.as_str()));
        let game_ids = id_map(data.games.iter().map(|g| g.id.as_str()));

        let mut reference_gpu = None;
        let mut multipliers = FxHashMap::default();
        if let Some(overrides) = &data.perf_overrides {
            reference_gpu = gpu_ids.get(&overrides.reference_gpu).copied();
            for entry in &overrides.multipliers {
                multipliers.insert(entry.gpu.clone(), entry.multiplier);
            }
        }

        let mut catalog = Self {
            data,
            cpu_ids,
            gpu_ids,
            game_ids,
            reference_gpu,
            multipliers,
            curated: CuratedTable::default(),
        };

        let curated = CuratedTable::build(&catalog.data.curated, |gpu_id, resolution| {
            catalog
                .gpu(gpu_id)
                .map_or(0.0, |gpu| catalog.gpu_perf_index(gpu, resolution))
        });
        catalog.curated = curated;

        tracing::debug!(
            cpus = catalog.data.cpus.len(),
            gpus = catalog.data.gpus.len(),
            games = catalog.data.games.len(),
            curated_samples = catalog.data.curated.len(),
            "catalog constructed"
        );

        Ok(catalog)
    }

    /// The catalog compiled into the crate, built on first use
    #[must_use]
    pub fn builtin() -> &'static Catalog {
        &BUILTIN
    }

    #[must_use]
    pub fn data(&self) -> &CatalogData {
        &self.data
    }

    #[must_use]
    pub fn cpus(&self) -> &[Cpu] {
        &self.data.cpus
    }

    #[must_use]
    pub fn gpus(&self) -> &[Gpu] {
        &self.data.gpus
    }

    #[must_use]
    pub fn games(&self) -> &[GameProfile] {
        &self.data.games
    }

    #[must_use]
    pub fn monitors(&self) -> &[Monitor] {
        &self.data.monitors
    }

    #[must_use]
    pub fn ram_kits(&self) -> &[RamKit] {
        &self.data.ram_kits
    }

    #[must_use]
    pub fn storage_kits(&self) -> &[StorageKit] {
        &self.data.storage_kits
    }

    #[must_use]
    pub fn curated(&self) -> &CuratedTable {
        &self.curated
    }

    #[must_use]
    pub fn cpu(&self, id: &str) -> Option<&Cpu> {
        self.cpu_ids.get(id).map(|&i| &self.data.cpus[i])
    }

    #[must_use]
    pub fn gpu(&self, id: &str) -> Option<&Gpu> {
        self.gpu_ids.get(id).map(|&i| &self.data.gpus[i])
    }

    #[must_use]
    pub fn game(&self, id: &str) -> Option<&GameProfile> {
        self.game_ids.get(id).map(|&i| &self.data.games[i])
    }

    /// Fallback CPU when the requested id is unknown
    #[must_use]
    pub fn default_cpu(&self) -> &Cpu {
        &self.data.cpus[0]
    }

    /// Fallback GPU when the requested id is unknown
    #[must_use]
    pub fn default_gpu(&self) -> &Gpu {
        &self.data.gpus[0]
    }

    /// GPU index used by all throughput and interpolation math.
    ///
    /// Equals [`gpu_index`] of the GPU's own score unless the override table
    /// pins it relative to the reference GPU.
    #[must_use]
    pub fn gpu_perf_index(&self, gpu: &Gpu, resolution: Resolution) -> f64 {
        match (self.reference_gpu, self.multipliers.get(&gpu.id)) {
            (Some(reference), Some(&multiplier)) => relative_gpu_index(
                gpu_index(self.data.gpus[reference].score(resolution)),
                multiplier,
            ),
            _ => gpu_index(gpu.score(resolution)),
        }
    }
}

fn id_map<'a>(ids: impl Iterator<Item = &'a str>) -> FxHashMap<String, usize> {
    ids.enumerate().map(|(i, id)| (id.to_string(), i)).collect()
}

fn check_unique<'a>(
    section: CatalogSection,
    ids: impl Iterator<Item = &'a str>,
) -> Result<(), CatalogError> {
    let mut seen = rustc_hash::FxHashSet::default();
    for id in ids {
        if !seen.insert(id) {
            return Err(CatalogError::DuplicateId {
                section,
                id: id.to_string(),
            });
        }
    }
    Ok(())
}

fn check_range(
    section: CatalogSection,
    id: &str,
    field: &'static str,
    value: f64,
    min: f64,
    max: f64,
) -> Result<(), CatalogError> {
    if value.is_finite() && (min..=max).contains(&value) {
        Ok(())
    } else {
        Err(CatalogError::OutOfRange {
            section,
            id: id.to_string(),
            field,
            value,
        })
    }
}

fn check_price(section: CatalogSection, id: &str, price: f64) -> Result<(), CatalogError> {
    check_range(section, id, "price", price, 0.0, f64::MAX)
}

fn validate(data: &CatalogData) -> Result<(), CatalogError> {
    if data.cpus.is_empty() {
        return Err(CatalogError::Empty(CatalogSection::Cpus));
    }
    if data.gpus.is_empty() {
        return Err(CatalogError::Empty(CatalogSection::Gpus));
    }
    if data.games.is_empty() {
        return Err(CatalogError::Empty(CatalogSection::Games));
    }

    check_unique(CatalogSection::Cpus, data.cpus.iter().map(|c| c.id.as_str()))?;
    check_unique(CatalogSection::Gpus, data.gpus.iter().map(|g| g.id.as_str()))?;
    check_unique(CatalogSection::Games, data.games.iter().map(|g| g.id.as_str()))?;
    check_unique(
        CatalogSection::Monitors,
        data.monitors.iter().map(|m| m.id.as_str()),
    )?;
    check_unique(
        CatalogSection::RamKits,
        data.ram_kits.iter().map(|k| k.id.as_str()),
    )?;
    check_unique(
        CatalogSection::StorageKits,
        data.storage_kits.iter().map(|k| k.id.as_str()),
    )?;

    for cpu in &data.cpus {
        check_range(CatalogSection::Cpus, &cpu.id, "score", cpu.score, 0.0, 100.0)?;
        check_price(CatalogSection::Cpus, &cpu.id, cpu.price)?;
    }
    for gpu in &data.gpus {
        check_range(CatalogSection::Gpus, &gpu.id, "score_1080", gpu.score_1080, 0.0, 100.0)?;
        check_range(CatalogSection::Gpus, &gpu.id, "score_1440", gpu.score_1440, 0.0, 100.0)?;
        check_range(CatalogSection::Gpus, &gpu.id, "score_4k", gpu.score_4k, 0.0, 100.0)?;
        check_price(CatalogSection::Gpus, &gpu.id, gpu.price)?;
    }
    for game in &data.games {
        for (field, weight) in [("cpu_weight", game.cpu_weight), ("gpu_weight", game.gpu_weight)] {
            if let Some(weight) = weight {
                check_range(CatalogSection::Games, &game.id, field, weight, 0.0, 1.0)?;
            }
        }
    }
    for monitor in &data.monitors {
        check_price(CatalogSection::Monitors, &monitor.id, monitor.price)?;
    }
    for kit in &data.ram_kits {
        check_price(CatalogSection::RamKits, &kit.id, kit.price)?;
    }
    for kit in &data.storage_kits {
        check_price(CatalogSection::StorageKits, &kit.id, kit.price)?;
    }

    let known_gpu = |id: &str| data.gpus.iter().any(|g| g.id == id);
    for sample in &data.curated {
        if !known_gpu(&sample.gpu) {
            return Err(CatalogError::UnknownReference {
                section: CatalogSection::Curated,
                id: sample.gpu.clone(),
            });
        }
        if !data.games.iter().any(|g| g.id == sample.game) {
            return Err(CatalogError::UnknownReference {
                section: CatalogSection::Curated,
                id: sample.game.clone(),
            });
        }
        let id = format!("{}/{}", sample.gpu, sample.game);
        check_range(CatalogSection::Curated, &id, "fps", sample.fps, f64::MIN_POSITIVE, f64::MAX)?;
    }

    if let Some(overrides) = &data.perf_overrides {
        if !known_gpu(&overrides.reference_gpu) {
            return Err(CatalogError::UnknownReference {
                section: CatalogSection::PerfOverrides,
                id: overrides.reference_gpu.clone(),
            });
        }
        for entry in &overrides.multipliers {
            if !known_gpu(&entry.gpu) {
                return Err(CatalogError::UnknownReference {
                    section: CatalogSection::PerfOverrides,
                    id: entry.gpu.clone(),
                });
            }
            check_range(
                CatalogSection::PerfOverrides,
                &entry.gpu,
                "multiplier",
                entry.multiplier,
                f64::MIN_POSITIVE,
                f64::MAX,
            )?;
        }
    }

    Ok(())
}
