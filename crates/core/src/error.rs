//! Domain errors shared by the data-access crate and the web server.
//!
//! `Validation` carries text that is shown to the visitor as-is.

use crate::upload::UploadViolation;

#[derive(Debug, thiserror::Error)]
pub enum CoreError {
    #[error("{entity} {id} not found")]
    NotFound { entity: &'static str, id: String },

    /// Input broke a content rule. The message is visitor-facing.
    #[error("{0}")]
    Validation(String),

    #[error("Not authorized: {0}")]
    Unauthorized(String),
}

impl From<UploadViolation> for CoreError {
    fn from(violation: UploadViolation) -> Self {
        CoreError::Validation(violation.to_string())
    }
}
