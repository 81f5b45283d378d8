/// Convenience result type used across Galaxia.
pub type GalaxiaResult<T> = Result<T, GalaxiaError>;

/// Error taxonomy shared by the calendar, scene and preview APIs.
#[derive(thiserror::Error, Debug)]
pub enum GalaxiaError {
    /// Invalid configuration or derived values out of range.
    #[error("validation error: {0}")]
    Validation(String),

    /// Malformed, missing or inconsistent calendar data.
    #[error("calendar error: {0}")]
    Calendar(String),

    /// Failures while writing or rasterizing a scene document.
    #[error("render error: {0}")]
    Render(String),

    /// Errors when serializing or deserializing JSON inputs.
    #[error("serialization error: {0}")]
    Serde(String),

    /// Wrapped lower-level error from dependencies or IO.
    #[error(transparent)]
    Other(#[from] anyhow::Error),
}

impl GalaxiaError {
    /// Build a [`GalaxiaError::Validation`] value.
    pub fn validation(msg: impl Into<String>) -> Self {
        Self::Validation(msg.into())
    }

    /// Build a [`GalaxiaError::Calendar`] value.
    pub fn calendar(msg: impl Into<String>) -> Self {
        Self::Calendar(msg.into())
    }

    /// Build a [`GalaxiaError::Render`] value.
    pub fn render(msg: impl Into<String>) -> Self {
        Self::Render(msg.into())
    }

    /// Build a [`GalaxiaError::Serde`] value.
    pub fn serde(msg: impl Into<String>) -> Self {
        Self::Serde(msg.into())
    }
}

impl From<serde_json::Error> for GalaxiaError {
    fn from(err: serde_json::Error) -> Self {
        Self::serde(err.to_string())
    }
}

#[cfg(test)]
#[path = "../../tests/unit/foundation/error.rs"]
mod tests;
