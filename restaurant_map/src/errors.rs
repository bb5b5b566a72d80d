use std::path::PathBuf;
use thiserror::Error;

/// Why the dataset could not be turned into restaurant records.
#[derive(Debug, Error)]
pub enum LoadError {
    #[error("request to {url} failed: {source}")]
    Network {
        url: String,
        source: reqwest::Error,
    },
    #[error("{url} answered with HTTP {status}")]
    Status { url: String, status: u16 },
    #[error("could not read {}: {source}", path.display())]
    Io {
        path: PathBuf,
        source: std::io::Error,
    },
    #[error("dataset is not a valid restaurant list: {0}")]
    Parse(#[from] serde_json::Error),
}
