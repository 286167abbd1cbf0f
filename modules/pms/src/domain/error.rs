use thiserror::Error;

use crate::contract::model::{Role, ViewKey};

/// Domain-specific errors using thiserror
#[derive(Error, Debug)]
pub enum DomainError {
    /// Covers both unknown email and wrong password.
    #[error("Invalid email or password")]
    InvalidCredentials,

    #[error("User with this email already exists")]
    EmailAlreadyExists { email: String },

    /// Form validation; `message` is shown to the user as-is.
    #[error("{message}")]
    Validation { message: String },

    #[error("{what} not found: {id}")]
    RecordNotFound { what: &'static str, id: String },

    #[error("Not signed in")]
    Unauthenticated,

    #[error("View '{view}' is not available to role '{role}'")]
    ViewForbidden { view: ViewKey, role: Role },

    #[error("Session storage error: {message}")]
    Storage { message: String },
}

impl DomainError {
    pub fn email_already_exists(email: impl Into<String>) -> Self {
        Self::EmailAlreadyExists {
            email: email.into(),
        }
    }

    pub fn validation(message: impl Into<String>) -> Self {
        Self::Validation {
            message: message.into(),
        }
    }

    pub fn not_found(what: &'static str, id: impl Into<String>) -> Self {
        Self::RecordNotFound {
            what,
            id: id.into(),
        }
    }

    pub fn view_forbidden(view: ViewKey, role: Role) -> Self {
        Self::ViewForbidden { view, role }
    }

    pub fn storage(message: impl Into<String>) -> Self {
        Self::Storage {
            message: message.into(),
        }
    }
}
