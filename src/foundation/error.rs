/// Result alias used by the IO-facing edges of the crate.
pub type PageResult<T> = Result<T, PageError>;

/// Crate error type.
///
/// The composition pipeline itself never fails; only page sources and option loading do.
#[derive(thiserror::Error, Debug)]
pub enum PageError {
    /// Configuration or input that cannot be used at all.
    #[error("validation error: {0}")]
    Validation(String),

    /// A page source could not produce a page.
    #[error("page source error: {0}")]
    Source(String),

    /// JSON (de)serialization failed.
    #[error("serialization error: {0}")]
    Serde(String),
}

impl PageError {
    /// Build a [`PageError::Validation`].
    pub fn validation(msg: impl Into<String>) -> Self {
        Self::Validation(msg.into())
    }

    /// Build a [`PageError::Source`].
    pub fn source(msg: impl Into<String>) -> Self {
        Self::Source(msg.into())
    }

    /// Build a [`PageError::Serde`].
    pub fn serde(msg: impl Into<String>) -> Self {
        Self::Serde(msg.into())
    }
}
