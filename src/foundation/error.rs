/// Convenience result type used throughout the crate.
pub type ConvertResult<T> = Result<T, ConvertError>;

/// Top-level error type for all converter APIs.
#[derive(thiserror::Error, Debug)]
pub enum ConvertError {
    /// Invalid run configuration, such as a classification pattern that fails to compile.
    #[error("configuration error: {0}")]
    Config(String),

    /// Structurally inconsistent input document, such as unbalanced section markers.
    #[error("document error: {0}")]
    Document(String),

    /// Failure while persisting or probing sprite assets.
    #[error("storage error: {0}")]
    Storage(String),

    /// Failure reported by the scene host while mutating the node tree.
    #[error("scene error: {0}")]
    Scene(String),

    /// Wrapped lower-level error (I/O, serialization, host callbacks).
    #[error(transparent)]
    Other(#[from] anyhow::Error),
}

impl ConvertError {
    pub fn config(msg: impl Into<String>) -> Self {
        Self::Config(msg.into())
    }

    pub fn document(msg: impl Into<String>) -> Self {
        Self::Document(msg.into())
    }

    pub fn storage(msg: impl Into<String>) -> Self {
        Self::Storage(msg.into())
    }

    pub fn scene(msg: impl Into<String>) -> Self {
        Self::Scene(msg.into())
    }
}

#[cfg(test)]
#[path = "../../tests/unit/foundation/error.rs"]
mod tests;
