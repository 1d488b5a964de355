use std::path::PathBuf;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum GreetingError {
    #[error("failed to serialize greeting record: {0}")]
    Serialize(#[from] serde_json::Error),
    #[error("failed to write {}: {source}", .path.display())]
    Write {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
    #[error("failed to write banner: {0}")]
    Stdout(#[source] std::io::Error),
}
