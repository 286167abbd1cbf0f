use thiserror::Error;

use crate::contract::model::{Role, ViewKey};

/// Errors that are safe to expose to callers of the module
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum PmsError {
    /// Deliberately identical for unknown email and wrong password.
    #[error("Invalid email or password")]
    InvalidCredentials,

    #[error("User with this email already exists")]
    Conflict { email: String },

    #[error("{message}")]
    Validation { message: String },

    #[error("{what} not found: {id}")]
    NotFound { what: &'static str, id: String },

    #[error("Not signed in")]
    Unauthenticated,

    #[error("View '{view}' is not available to role '{role}'")]
    Forbidden { view: ViewKey, role: Role },

    #[error("Internal error")]
    Internal,
}

impl PmsError {
    pub fn validation(message: impl Into<String>) -> Self {
        Self::Validation {
            message: message.into(),
        }
    }
}

impl From<crate::domain::error::DomainError> for PmsError {
    fn from(domain_error: crate::domain::error::DomainError) -> Self {
        use crate::domain::error::DomainError::*;
        match domain_error {
            InvalidCredentials => Self::InvalidCredentials,
            EmailAlreadyExists { email } => Self::Conflict { email },
            Validation { message } => Self::Validation { message },
            RecordNotFound { what, id } => Self::NotFound { what, id },
            Unauthenticated => Self::Unauthenticated,
            ViewForbidden { view, role } => Self::Forbidden { view, role },
            Storage { .. } => Self::Internal,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::error::DomainError;

    #[test]
    fn storage_failures_surface_as_internal() {
        let err = PmsError::from(DomainError::storage("disk full"));
        assert_eq!(err, PmsError::Internal);
        assert_eq!(err.to_string(), "Internal error");
    }

    #[test]
    fn caller_facing_errors_keep_their_details() {
        assert_eq!(
            PmsError::from(DomainError::email_already_exists("a@company.com")),
            PmsError::Conflict {
                email: "a@company.com".into()
            }
        );
        assert_eq!(
            PmsError::from(DomainError::view_forbidden(ViewKey::Users, Role::Employee)),
            PmsError::Forbidden {
                view: ViewKey::Users,
                role: Role::Employee
            }
        );
    }
}
