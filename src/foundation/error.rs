/// Convenience result type used across Memeforge.
pub type MemeforgeResult<T> = Result<T, MemeforgeError>;

/// Top-level error taxonomy used by engine APIs.
///
/// The pipeline short-circuits on the first error and returns it unchanged to
/// the caller; no partial images are produced and nothing is retried here.
#[derive(thiserror::Error, Debug)]
pub enum MemeforgeError {
    /// Caller-supplied parameter violates its contract (font size range,
    /// malformed template name).
    #[error("invalid parameter: {0}")]
    InvalidParameter(String),

    /// Font asset missing or unparsable; fatal for the request.
    #[error("font load error: {0}")]
    FontLoad(String),

    /// Template identifier does not resolve to an existing asset.
    #[error("template not found: {0}")]
    TemplateNotFound(String),

    /// Template asset exists but is not a valid image.
    #[error("template decode error: {0}")]
    TemplateDecode(String),

    /// Final bitmap failed to serialize.
    #[error("encode error: {0}")]
    Encode(String),

    /// Wrapped lower-level error from dependencies or IO.
    #[error(transparent)]
    Other(#[from] anyhow::Error),
}

impl MemeforgeError {
    /// Build a [`MemeforgeError::InvalidParameter`] value.
    pub fn invalid_parameter(msg: impl Into<String>) -> Self {
        Self::InvalidParameter(msg.into())
    }

    /// Build a [`MemeforgeError::FontLoad`] value.
    pub fn font_load(msg: impl Into<String>) -> Self {
        Self::FontLoad(msg.into())
    }

    /// Build a [`MemeforgeError::TemplateNotFound`] value.
    pub fn template_not_found(msg: impl Into<String>) -> Self {
        Self::TemplateNotFound(msg.into())
    }

    /// Build a [`MemeforgeError::TemplateDecode`] value.
    pub fn template_decode(msg: impl Into<String>) -> Self {
        Self::TemplateDecode(msg.into())
    }

    /// Build a [`MemeforgeError::Encode`] value.
    pub fn encode(msg: impl Into<String>) -> Self {
        Self::Encode(msg.into())
    }
}

#[cfg(test)]
#[path = "../../tests/unit/foundation/error.rs"]
mod tests;
