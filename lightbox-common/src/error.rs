use thiserror::Error;

/// Why a metadata or image fetch did not produce usable data
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum FetchError {
    #[error("Network error: {0}")]
    Network(String),
    #[error("Server returned status {0}")]
    Status(u16),
    #[error("Malformed response: {0}")]
    Malformed(String),
}
