use std::fmt;

/// Which catalog collection an entry belongs to
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CatalogSection {
    Cpus,
    Gpus,
    Games,
    Monitors,
    RamKits,
    StorageKits,
    Curated,
    PerfOverrides,
}

impl fmt::Display for CatalogSection {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            CatalogSection::Cpus => "cpus",
            CatalogSection::Gpus => "gpus",
            CatalogSection::Games => "games",
            CatalogSection::Monitors => "monitors",
            CatalogSection::RamKits => "ram_kits",
            CatalogSection::StorageKits => "storage_kits",
            CatalogSection::Curated => "curated",
            CatalogSection::PerfOverrides => "perf_overrides",
        };
        f.write_str(name)
    }
}

/// Errors raised while constructing a catalog
#[derive(Debug, Clone, PartialEq)]
pub enum CatalogError {
    /// A required collection has no entries
    Empty(CatalogSection),
    DuplicateId {
        section: CatalogSection,
        id: String,
    },
    /// A score, price or fps value lies outside its valid domain
    OutOfRange {
        section: CatalogSection,
        id: String,
        field: &'static str,
        value: f64,
    },
    /// An entry references a GPU or game that is not in the catalog
    UnknownReference {
        section: CatalogSection,
        id: String,
    },
}

impl fmt::Display for CatalogError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            CatalogError::Empty(section) => write!(f, "catalog section `{section}` is empty"),
            CatalogError::DuplicateId { section, id } => {
                write!(f, "duplicate id `{id}` in catalog section `{section}`")
            }
            CatalogError::OutOfRange {
                section,
                id,
                field,
                value,
            } => write!(
                f,
                "`{field}` of `{id}` in catalog section `{section}` is out of range ({value})"
            ),
            CatalogError::UnknownReference { section, id } => {
                write!(f, "catalog section `{section}` references unknown id `{id}`")
            }
        }
    }
}

impl std::error::Error for CatalogError {}

/// Errors that abort an analysis request
#[derive(Debug, Clone, PartialEq)]
pub enum AnalysisError {
    /// None of the requested game ids exist in the catalog
    NoKnownGames { requested: Vec<String> },
    Catalog(CatalogError),
}

impl fmt::Display for AnalysisError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            AnalysisError::NoKnownGames { requested } if requested.is_empty() => {
                write!(f, "select at least one game")
            }
            AnalysisError::NoKnownGames { requested } => write!(
                f,
                "select at least one known game (none of [{}] are in the catalog)",
                requested.join(", ")
            ),
            AnalysisError::Catalog(e) => write!(f, "{e}"),
        }
    }
}

impl std::error::Error for AnalysisError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            AnalysisError::Catalog(e) => Some(e),
            AnalysisError::NoKnownGames { .. } => None,
        }
    }
}

impl From<CatalogError> for AnalysisError {
    fn from(err: CatalogError) -> Self {
        AnalysisError::Catalog(err)
    }
}

pub type Result<T> = std::result::Result<T, AnalysisError>;
