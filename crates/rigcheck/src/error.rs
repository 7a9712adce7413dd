//! Errors raised while loading input and catalog files

use rigcheck_core::CatalogError;

#[derive(Debug)]
pub enum LoadError {
    Io(String),
    Parse(String),
    /// The file parsed but failed validation; one message per problem
    Invalid(Vec<String>),
    Catalog(CatalogError),
}

impl std::fmt::Display for LoadError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            LoadError::Io(msg) => write!(f, "IO error: {}", msg),
            LoadError::Parse(msg) => write!(f, "Parse error: {}", msg),
            LoadError::Invalid(problems) => write!(f, "Invalid input: {}", problems.join("; ")),
            LoadError::Catalog(err) => write!(f, "Invalid catalog: {}", err),
        }
    }
}

impl std::error::Error for LoadError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            LoadError::Catalog(err) => Some(err),
            _ => None,
        }
    }
}

impl From<std::io::Error> for LoadError {
    fn from(err: std::io::Error) -> Self {
        LoadError::Io(err.to_string())
    }
}

impl From<serde_saphyr::Error> for LoadError {
    fn from(err: serde_saphyr::Error) -> Self {
        LoadError::Parse(err.to_string())
    }
}

impl From<CatalogError> for LoadError {
    fn from(err: CatalogError) -> Self {
        LoadError::Catalog(err)
    }
}
