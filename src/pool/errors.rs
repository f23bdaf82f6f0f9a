use std::path::PathBuf;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum PoolError {
    #[error("I/O error on {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
    #[error("Invalid problem JSON: {0}")]
    Json(#[from] serde_json::Error),
}
