use thiserror::Error;

#[derive(Error, Debug)]
pub enum EngineError {
    #[error("Malformed card record '{id}': {reason}")]
    MalformedRecord { id: String, reason: String },

    #[error("Document not found: {0}")]
    DocumentNotFound(String),

    #[error("Document store error: {0}")]
    Store(String),

    #[error("I/O error: {source}")]
    Io {
        #[from]
        source: std::io::Error,
    },

    #[error("Serialization error: {source}")]
    Serialization {
        #[from]
        source: serde_json::Error,
    },

    // Catch-all for anyhow errors coming from store implementations.
    #[error(transparent)]
    Anyhow(#[from] anyhow::Error),
}

pub type EngineResult<T> = Result<T, EngineError>;
