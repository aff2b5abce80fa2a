#[cfg(feature = "python")]
use pyo3::exceptions::PyRuntimeError;
#[cfg(feature = "python")]
use pyo3::PyErr;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum AtlasError {
    #[error("Column not found: {0}")]
    MissingColumn(String),

    #[error("Polars error: {0}")]
    Polars(#[from] polars::error::PolarsError),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("HTTP error: {0}")]
    Http(#[from] reqwest::Error),

    #[error("Archive error: {0}")]
    Archive(#[from] zip::result::ZipError),

    #[error("GeoJSON error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("Config error: {0}")]
    Config(#[from] toml::de::Error),

    #[error("Not found: {0}")]
    NotFound(String),

    #[error("InvalidData: {0}")]
    InvalidData(String),
}

#[cfg(feature = "python")]
impl From<AtlasError> for PyErr {
    fn from(err: AtlasError) -> PyErr {
        PyRuntimeError::new_err(err.to_string())
    }
}
