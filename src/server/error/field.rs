use thiserror::Error;

/// Validation failure raised while constructing or mutating a domain model.
///
/// Identifies the invalid field, the model that owns it, and a human-readable
/// explanation. The explanation is what API consumers see in the 400 response body.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
#[error("Field: {field} on Model: {model} is invalid ({explanation})")]
pub struct FieldError {
    /// Name of the field which is invalid
    pub field: &'static str,
    /// Name of the model which holds the invalid field
    pub model: &'static str,
    /// Explanation of why the field is invalid
    pub explanation: String,
}

impl FieldError {
    pub fn new(field: &'static str, model: &'static str, explanation: impl Into<String>) -> Self {
        Self {
            field,
            model,
            explanation: explanation.into(),
        }
    }
}
