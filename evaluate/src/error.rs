use std::path::PathBuf;

/// Invalid scoring configuration.
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("duplicate criterion key: {0}")]
    DuplicateCriterion(String),

    #[error("criterion #{index} has an empty key")]
    EmptyCriterionKey { index: usize },

    #[error("criterion {key} has invalid weight {weight}: must be finite and non-negative")]
    InvalidWeight { key: String, weight: f64 },
}

/// Failures reading stage artifacts or persisting scores.
#[derive(Debug, thiserror::Error)]
pub enum StoreError {
    #[error("io error on {path:?}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("malformed json in {path:?}: {source}")]
    Json {
        path: PathBuf,
        #[source]
        source: serde_json::Error,
    },
}

pub type StoreResult<T> = std::result::Result<T, StoreError>;
