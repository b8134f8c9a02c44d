/// Convenience result type used across wavecraft.
pub type WaveResult<T> = Result<T, WaveError>;

/// Top-level error taxonomy used by the wave engine APIs.
///
/// Most of the engine never fails: color parsing yields `Option` and numeric inputs are clamped.
/// Errors surface only from explicit validation, config loading and the raster pipeline.
#[derive(thiserror::Error, Debug)]
pub enum WaveError {
    /// Invalid caller-provided parameters.
    #[error("validation error: {0}")]
    Validation(String),

    /// Errors when serializing or deserializing configs.
    #[error("serialization error: {0}")]
    Serde(String),

    /// Vector decode, surface allocation or raster encode failures.
    #[error("export error: {0}")]
    Export(String),

    /// Wrapped lower-level error from dependencies or IO.
    #[error(transparent)]
    Other(#[from] anyhow::Error),
}

impl WaveError {
    /// Build a [`WaveError::Validation`] value.
    pub fn validation(msg: impl Into<String>) -> Self {
        Self::Validation(msg.into())
    }

    /// Build a [`WaveError::Serde`] value.
    pub fn serde(msg: impl Into<String>) -> Self {
        Self::Serde(msg.into())
    }

    /// Build a [`WaveError::Export`] value.
    pub fn export(msg: impl Into<String>) -> Self {
        Self::Export(msg.into())
    }
}

#[cfg(test)]
#[path = "../../tests/unit/foundation/error.rs"]
mod tests;
