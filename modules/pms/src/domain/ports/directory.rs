use async_trait::async_trait;

use crate::contract::model::Identity;

/// Port for the identities the session store may authenticate.
/// Object-safe and async-friendly via `async_trait`.
#[async_trait]
pub trait IdentityDirectory: Send + Sync {
    /// Exact email match.
    async fn find_by_email(&self, email: &str) -> anyhow::Result<Option<Identity>>;
    async fn email_exists(&self, email: &str) -> anyhow::Result<bool>;
    /// Stores `identity` unless its email is already taken, as one step.
    /// Returns `false` and stores nothing when the email exists.
    async fn insert_if_absent(&self, identity: Identity) -> anyhow::Result<bool>;
}
