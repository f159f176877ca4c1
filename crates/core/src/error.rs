use crate::types::ThemeId;

#[derive(Debug, thiserror::Error)]
pub enum CoreError {
    #[error("Entity not found: {entity} with id {id}")]
    NotFound { entity: &'static str, id: ThemeId },

    #[error("Validation failed: {0}")]
    Validation(String),

    #[error("System theme '{id}' is immutable and cannot be modified or removed")]
    SystemThemeImmutable { id: ThemeId },

    #[error("Unauthorized: {0}")]
    Unauthorized(String),

    #[error("Forbidden: {0}")]
    Forbidden(String),
}
