use std::sync::Arc;

use async_trait::async_trait;
use parking_lot::Mutex;

use crate::contract::{
    client::PmsApi,
    error::PmsError,
    model::{Identity, NavItem, RegisterData, Screen, ViewKey},
};
use crate::domain::{
    error::DomainError, navigation::menu_for_role, router::ViewRouter, session::SessionStore,
};

/// In-process implementation of [`PmsApi`] over the session store and router.
pub struct PmsLocalClient {
    session: Arc<SessionStore>,
    router: Mutex<ViewRouter>,
}

impl PmsLocalClient {
    pub fn new(session: Arc<SessionStore>) -> Self {
        Self {
            session,
            router: Mutex::new(ViewRouter::new()),
        }
    }
}

#[async_trait]
impl PmsApi for PmsLocalClient {
    async fn login(&self, email: &str, password: &str) -> anyhow::Result<Identity> {
        let identity = self
            .session
            .login(email, password)
            .await
            .map_err(map_domain_error)?;
        self.router.lock().reset();
        Ok(identity)
    }

    async fn register(&self, data: RegisterData) -> anyhow::Result<Identity> {
        let identity = self.session.register(data).await.map_err(map_domain_error)?;
        self.router.lock().reset();
        Ok(identity)
    }

    async fn logout(&self) {
        self.session.logout();
        self.router.lock().reset();
    }

    async fn current_user(&self) -> Option<Identity> {
        self.session.current().map(|identity| (*identity).clone())
    }

    async fn menu(&self) -> anyhow::Result<Vec<NavItem>> {
        let identity = self
            .session
            .current()
            .ok_or_else(|| map_domain_error(DomainError::Unauthenticated))?;
        Ok(menu_for_role(identity.role).to_vec())
    }

    async fn navigate(&self, view: ViewKey) -> anyhow::Result<Screen> {
        let identity = self.session.current();
        self.router
            .lock()
            .navigate(identity.as_deref(), view)
            .map_err(map_domain_error)
    }

    async fn current_view(&self) -> ViewKey {
        self.router.lock().current()
    }
}

fn map_domain_error(domain_error: DomainError) -> anyhow::Error {
    anyhow::Error::new(PmsError::from(domain_error))
}
