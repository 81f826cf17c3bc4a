use std::fmt;

use thiserror::Error;

/// Entities addressable by id at the HTTP boundary.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Entity {
    Camper,
    Activity,
    Signup,
}

impl Entity {
    pub fn as_str(self) -> &'static str {
        match self {
            Entity::Camper => "Camper",
            Entity::Activity => "Activity",
            Entity::Signup => "Signup",
        }
    }
}

impl fmt::Display for Entity {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Typed failure taxonomy for the service layer. The web layer decides which
/// wire shape each variant maps to; services only say what went wrong.
#[derive(Debug, Error)]
pub enum ServiceError {
    #[error("{entity} {id} not found")]
    NotFound { entity: Entity, id: i64 },

    #[error("validation failed for {field}: {reason}")]
    Validation { field: &'static str, reason: String },

    #[error("constraint violated: {detail}")]
    Constraint { detail: String },

    #[error(transparent)]
    Database(#[from] sqlx::Error),
}

impl ServiceError {
    pub fn not_found(entity: Entity, id: i64) -> Self {
        Self::NotFound { entity, id }
    }

    pub fn validation(field: &'static str, reason: impl Into<String>) -> Self {
        Self::Validation {
            field,
            reason: reason.into(),
        }
    }
}
