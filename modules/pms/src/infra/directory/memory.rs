use async_trait::async_trait;
use parking_lot::RwLock;

use crate::contract::model::{Identity, Role};
use crate::domain::ports::IdentityDirectory;

/// Process-local identity directory. Registrations live until exit.
#[derive(Debug, Default)]
pub struct InMemoryDirectory {
    identities: RwLock<Vec<Identity>>,
}

fn demo(id: &str, name: &str, email: &str, role: Role, department: &str) -> Identity {
    Identity {
        id: id.to_string(),
        name: name.to_string(),
        email: email.to_string(),
        role,
        department: department.to_string(),
    }
}

impl InMemoryDirectory {
    pub fn new(identities: Vec<Identity>) -> Self {
        Self {
            identities: RwLock::new(identities),
        }
    }

    /// The three demo accounts.
    pub fn seeded() -> Self {
        Self::new(vec![
            demo("1", "John Doe", "admin@company.com", Role::Admin, "Administration"),
            demo(
                "2",
                "Jane Smith",
                "supervisor@company.com",
                Role::Supervisor,
                "Engineering",
            ),
            demo(
                "3",
                "Bob Johnson",
                "employee@company.com",
                Role::Employee,
                "Engineering",
            ),
        ])
    }

    pub fn len(&self) -> usize {
        self.identities.read().len()
    }

    pub fn is_empty(&self) -> bool {
        self.identities.read().is_empty()
    }
}

#[async_trait]
impl IdentityDirectory for InMemoryDirectory {
    async fn find_by_email(&self, email: &str) -> anyhow::Result<Option<Identity>> {
        Ok(self
            .identities
            .read()
            .iter()
            .find(|i| i.email == email)
            .cloned())
    }

    async fn email_exists(&self, email: &str) -> anyhow::Result<bool> {
        Ok(self.identities.read().iter().any(|i| i.email == email))
    }

    async fn insert_if_absent(&self, identity: Identity) -> anyhow::Result<bool> {
        let mut identities = self.identities.write();
        if identities.iter().any(|i| i.email == identity.email) {
            return Ok(false);
        }
        identities.push(identity);
        Ok(true)
    }
}
