use chrono::{DateTime, Utc};

use crate::contract::model::Role;

/// Session lifecycle events; transport-agnostic.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SessionEvent {
    LoggedIn {
        id: String,
        role: Role,
        at: DateTime<Utc>,
    },
    Registered {
        id: String,
        role: Role,
        at: DateTime<Utc>,
    },
    LoggedOut {
        id: String,
        at: DateTime<Utc>,
    },
}
