//! Catalog override files
//!
//! A catalog file holds the same collections as the built-in catalog. It
//! replaces the built-in data wholesale; nothing is merged.

use std::fs;
use std::path::Path;

use rigcheck_core::{Catalog, CatalogData};

use crate::error::LoadError;

/// Load from YAML string
pub fn catalog_from_yaml(yaml: &str) -> Result<Catalog, LoadError> {
    let data: CatalogData = serde_saphyr::from_str(yaml)?;
    Ok(Catalog::new(data)?)
}

/// Read and validate a catalog file
pub fn load_catalog(path: &Path) -> Result<Catalog, LoadError> {
    let content = fs::read_to_string(path)?;
    let catalog = catalog_from_yaml(&content)?;
    tracing::info!(
        path = %path.display(),
        cpus = catalog.cpus().len(),
        gpus = catalog.gpus().len(),
        games = catalog.games().len(),
        "loaded catalog file"
    );
    Ok(catalog)
}

/// The catalog at `path`, or the built-in one
pub fn resolve_catalog(path: Option<&Path>) -> Result<std::borrow::Cow<'static, Catalog>, LoadError> {
    match path {
        Some(path) => load_catalog(path).map(std::borrow::Cow::Owned),
        None => Ok(std::borrow::Cow::Borrowed(Catalog::builtin())),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rigcheck_core::CatalogError;
    use rigcheck_core::error::CatalogSection;
    use tempfile::tempdir;

    const MINIMAL: &str = "\
cpus:
  - id: cpu-a
    name: CPU A
    score: 60
    price: 150
    socket: AM5
    memory_type: DDR5
gpus:
  - id: gpu-a
    name: GPU A
    vram: 8
    score_1080: 60
    score_1440: 50
    score_4k: 35
    price: 300
games:
  - id: arena
    name: Arena
    category: ESPORTS
    target_fps: high
curated:
  - quality: low
    resolution: 1080p
    gpu: gpu-a
    game: arena
    fps: 240
";

    #[test]
    fn test_minimal_catalog_file() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("catalog.yaml");
        fs::write(&path, MINIMAL).unwrap();

        let catalog = load_catalog(&path).unwrap();
        assert_eq!(catalog.cpus().len(), 1);
        assert!(catalog.monitors().is_empty());
        assert!(catalog.curated().has_gpu("gpu-a"));
    }

    #[test]
    fn test_builtin_catalog_survives_yaml_round_trip() {
        let yaml = serde_saphyr::to_string(Catalog::builtin().data()).unwrap();
        let catalog = catalog_from_yaml(&yaml).unwrap();
        assert_eq!(catalog.gpus().len(), Catalog::builtin().gpus().len());
        assert_eq!(catalog.games().len(), Catalog::builtin().games().len());
    }

    #[test]
    fn test_invalid_catalog_reports_validation_error() {
        let broken = MINIMAL.replace("gpu: gpu-a", "gpu: gpu-missing");
        match catalog_from_yaml(&broken) {
            Err(LoadError::Catalog(CatalogError::UnknownReference { section, id })) => {
                assert_eq!(section, CatalogSection::Curated);
                assert_eq!(id, "gpu-missing");
            }
            other => panic!("expected unknown reference, got {other:?}"),
        }
    }

    #[test]
    fn test_no_path_uses_builtin() {
        let catalog = resolve_catalog(None).unwrap();
        assert!(std::ptr::eq(catalog.as_ref(), Catalog::builtin()));
    }
}
