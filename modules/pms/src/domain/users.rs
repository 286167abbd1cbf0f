//! User administration table.

use tracing::{info, instrument};

use crate::contract::model::{ManagedUser, Role, UserStatus};
use crate::domain::error::DomainError;
use crate::domain::filter::{Choice, Filter, TextSearch};
use crate::domain::ids::IdGenerator;

pub const DEPARTMENTS: &[&str] = &[
    "Administration",
    "Engineering",
    "Sales",
    "Marketing",
    "Human Resources",
    "Finance",
    "Operations",
    "Customer Service",
];

/// Search over name and email, plus role and department selectors.
#[derive(Debug, Clone, Default)]
pub struct UserQuery {
    pub search: TextSearch,
    pub role: Choice<Role>,
    pub department: Choice<String>,
}

/// Result of a query, with the "showing N of M" counts.
#[derive(Debug)]
pub struct UserPage<'a> {
    pub users: Vec<&'a ManagedUser>,
    pub total: usize,
}

impl UserPage<'_> {
    pub fn shown(&self) -> usize {
        self.users.len()
    }
}

#[derive(Debug)]
pub struct ManagedUsers {
    users: Vec<ManagedUser>,
    ids: IdGenerator,
}

fn seed(id: &str, name: &str, role: Role, department: &str, status: UserStatus, last_login: &str) -> ManagedUser {
    let email = format!("{}@company.com", name.to_lowercase().replace(' ', "."));
    ManagedUser {
        id: id.to_string(),
        name: name.to_string(),
        email,
        role,
        department: department.to_string(),
        status,
        last_login: last_login.to_string(),
    }
}

impl ManagedUsers {
    pub fn new(users: Vec<ManagedUser>) -> Self {
        Self {
            users,
            ids: IdGenerator::new(),
        }
    }

    pub fn seeded() -> Self {
        Self::new(vec![
            seed("1", "John Doe", Role::Admin, "Administration", UserStatus::Active, "2024-01-15"),
            seed("2", "Jane Smith", Role::Supervisor, "Engineering", UserStatus::Active, "2024-01-14"),
            seed("3", "Bob Johnson", Role::Employee, "Engineering", UserStatus::Active, "2024-01-13"),
            seed("4", "Alice Brown", Role::Employee, "Sales", UserStatus::Inactive, "2024-01-10"),
        ])
    }

    pub fn all(&self) -> &[ManagedUser] {
        &self.users
    }

    pub fn len(&self) -> usize {
        self.users.len()
    }

    pub fn is_empty(&self) -> bool {
        self.users.is_empty()
    }

    /// Appends `user` under a fresh id.
    pub fn add(&mut self, mut user: ManagedUser) -> &ManagedUser {
        user.id = self.ids.next_id();
        self.users.push(user);
        &self.users[self.users.len() - 1]
    }

    #[instrument(name = "pms.users.toggle_status", skip(self))]
    pub fn toggle_status(&mut self, id: &str) -> Result<UserStatus, DomainError> {
        let user = self
            .users
            .iter_mut()
            .find(|u| u.id == id)
            .ok_or_else(|| DomainError::not_found("user", id))?;

        user.status = match user.status {
            UserStatus::Active => UserStatus::Inactive,
            UserStatus::Inactive => UserStatus::Active,
        };
        info!(status = %user.status, "User status changed");
        Ok(user.status)
    }

    #[instrument(name = "pms.users.delete", skip(self))]
    pub fn delete(&mut self, id: &str) -> Result<ManagedUser, DomainError> {
        let pos = self
            .users
            .iter()
            .position(|u| u.id == id)
            .ok_or_else(|| DomainError::not_found("user", id))?;
        let removed = self.users.remove(pos);
        info!(email = %removed.email, "User deleted");
        Ok(removed)
    }

    pub fn query(&self, query: &UserQuery) -> UserPage<'_> {
        let users = Filter::new()
            .and(|u: &ManagedUser| query.search.matches_any(&[u.name.as_str(), u.email.as_str()]))
            .and(|u: &ManagedUser| query.role.admits(&u.role))
            .and(|u: &ManagedUser| query.department.admits_str(&u.department))
            .apply(&self.users);

        UserPage {
            users,
            total: self.users.len(),
        }
    }
}
