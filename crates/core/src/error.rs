#[derive(Debug, thiserror::Error)]
pub enum CoreError {
    #[error("Entity not found: {entity} with id {id}")]
    NotFound { entity: &'static str, id: String },

    #[error("Validation failed: {0}")]
    Validation(String),

    #[error("Conflict: {0}")]
    Conflict(String),

    #[error("Internal error: {0}")]
    Internal(String),
}

impl CoreError {
    /// The message shown to the user in a flash banner.
    ///
    /// Validation and conflict errors carry text written for end users, so it
    /// is returned as-is. The other variants get a fixed, entity-specific
    /// message that never leaks internals.
    pub fn user_message(&self) -> String {
        match self {
            CoreError::NotFound { entity, .. } => {
                format!("The {} you requested does not exist", entity.to_lowercase())
            }
            CoreError::Validation(msg) | CoreError::Conflict(msg) => msg.clone(),
            CoreError::Internal(_) => "Something went wrong, please try again".to_string(),
        }
    }
}
