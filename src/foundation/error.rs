/// Convenience result type used across chainview.
pub type ChainResult<T> = Result<T, ChainError>;

/// Top-level error taxonomy used by the chain viewer APIs.
#[derive(thiserror::Error, Debug)]
pub enum ChainError {
    /// Malformed chain specification or viewer options.
    #[error("validation error: {0}")]
    Validation(String),

    /// An interaction targeted a key that is not part of the initialized runtime state.
    #[error("unknown key: {0}")]
    UnknownKey(String),

    /// Failure while resolving or decoding image assets.
    #[error("asset error: {0}")]
    Asset(String),

    /// Failure while emitting or rasterizing a visual tree.
    #[error("render error: {0}")]
    Render(String),

    /// Errors when serializing or deserializing data structures.
    #[error("serialization error: {0}")]
    Serde(String),

    /// Wrapped lower-level error from dependencies or IO.
    #[error(transparent)]
    Other(#[from] anyhow::Error),
}

impl ChainError {
    /// Build a [`ChainError::Validation`] value.
    pub fn validation(msg: impl Into<String>) -> Self {
        Self::Validation(msg.into())
    }

    /// Build a [`ChainError::UnknownKey`] value.
    pub fn unknown_key(msg: impl Into<String>) -> Self {
        Self::UnknownKey(msg.into())
    }

    /// Build a [`ChainError::Asset`] value.
    pub fn asset(msg: impl Into<String>) -> Self {
        Self::Asset(msg.into())
    }

    /// Build a [`ChainError::Render`] value.
    pub fn render(msg: impl Into<String>) -> Self {
        Self::Render(msg.into())
    }

    /// Build a [`ChainError::Serde`] value.
    pub fn serde(msg: impl Into<String>) -> Self {
        Self::Serde(msg.into())
    }
}

#[cfg(test)]
#[path = "../../tests/unit/foundation/error.rs"]
mod tests;
