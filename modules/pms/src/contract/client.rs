use async_trait::async_trait;

use crate::contract::model::{Identity, NavItem, RegisterData, Screen, ViewKey};

/// Public API of the pms module.
///
/// Failures carry a [`PmsError`](crate::contract::error::PmsError) inside the
/// `anyhow::Error`; callers that need to branch on it can downcast.
#[async_trait]
pub trait PmsApi: Send + Sync {
    /// Sign in; the same error for unknown email and wrong password.
    async fn login(&self, email: &str, password: &str) -> anyhow::Result<Identity>;

    /// Create an identity and sign it in.
    async fn register(&self, data: RegisterData) -> anyhow::Result<Identity>;

    async fn logout(&self);

    async fn current_user(&self) -> Option<Identity>;

    /// Role menu of the signed-in user.
    async fn menu(&self) -> anyhow::Result<Vec<NavItem>>;

    /// Switch the current view, subject to the signed-in role.
    async fn navigate(&self, view: ViewKey) -> anyhow::Result<Screen>;

    async fn current_view(&self) -> ViewKey;
}
