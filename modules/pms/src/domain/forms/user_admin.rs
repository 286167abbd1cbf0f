use tracing::{info, instrument};

use crate::contract::model::{ManagedUser, Role, UserStatus};
use crate::domain::error::DomainError;
use crate::domain::forms::{all_filled, FILL_ALL_FIELDS};
use crate::domain::users::ManagedUsers;

pub const NEVER_LOGGED_IN: &str = "Never";

/// "Add user" dialog of the administration screen.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct NewUserForm {
    pub name: String,
    pub email: String,
    pub role: Option<Role>,
    pub department: String,
}

impl NewUserForm {
    pub fn validate(&self) -> Result<Role, DomainError> {
        match self.role {
            Some(role) if all_filled(&[&self.name, &self.email, &self.department]) => Ok(role),
            _ => Err(DomainError::validation(FILL_ALL_FIELDS)),
        }
    }

    /// Adds the user as active and clears the dialog.
    #[instrument(name = "pms.users.add", skip_all, fields(email = %self.email))]
    pub fn submit<'u>(&mut self, users: &'u mut ManagedUsers) -> Result<&'u ManagedUser, DomainError> {
        let role = self.validate()?;
        let draft = std::mem::take(self);

        let user = users.add(ManagedUser {
            id: String::new(),
            name: draft.name.trim().to_string(),
            email: draft.email.trim().to_string(),
            role,
            department: draft.department,
            status: UserStatus::Active,
            last_login: NEVER_LOGGED_IN.to_string(),
        });
        info!(user_id = %user.id, "User added");
        Ok(user)
    }
}
