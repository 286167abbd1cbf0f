use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::Arc;
use std::time::Duration;

use arc_swap::ArcSwapOption;
use chrono::Utc;
use tracing::{debug, info, instrument, warn};

use crate::contract::model::{Identity, RegisterData};
use crate::domain::error::DomainError;
use crate::domain::events::SessionEvent;
use crate::domain::ids::IdGenerator;
use crate::domain::ports::{EventPublisher, IdentityDirectory, SessionStorage};

/// Placeholder credential check shared by every account. Not a security boundary.
pub const DEMO_PASSWORD: &str = "password123";

#[derive(Debug, Clone)]
pub struct SessionConfig {
    /// Simulated network round trip for login/register.
    pub auth_delay: Duration,
}

impl Default for SessionConfig {
    fn default() -> Self {
        Self {
            auth_delay: Duration::from_millis(1000),
        }
    }
}

/// Owns the signed-in identity and its lifecycle.
///
/// Lifecycle: `new` (loading) → `restore` (ready) → `login`/`register` →
/// `logout`. Every change of the in-memory identity is mirrored into the
/// persisted slot.
pub struct SessionStore {
    directory: Arc<dyn IdentityDirectory>,
    storage: Arc<dyn SessionStorage>,
    events: Arc<dyn EventPublisher<SessionEvent>>,
    config: SessionConfig,
    current: ArcSwapOption<Identity>,
    loading: AtomicBool,
    ids: IdGenerator,
}

/// Holds `is_loading` up for the duration of a round trip, on every exit path.
struct LoadingGuard<'a>(&'a AtomicBool);

impl<'a> LoadingGuard<'a> {
    fn start(flag: &'a AtomicBool) -> Self {
        flag.store(true, Ordering::SeqCst);
        Self(flag)
    }
}

impl Drop for LoadingGuard<'_> {
    fn drop(&mut self) {
        self.0.store(false, Ordering::SeqCst);
    }
}

impl SessionStore {
    pub fn new(
        directory: Arc<dyn IdentityDirectory>,
        storage: Arc<dyn SessionStorage>,
        events: Arc<dyn EventPublisher<SessionEvent>>,
        config: SessionConfig,
    ) -> Self {
        Self {
            directory,
            storage,
            events,
            config,
            current: ArcSwapOption::empty(),
            // loading until restore() has looked at the persisted slot
            loading: AtomicBool::new(true),
            ids: IdGenerator::new(),
        }
    }

    pub fn current(&self) -> Option<Arc<Identity>> {
        self.current.load_full()
    }

    pub fn is_authenticated(&self) -> bool {
        self.current.load().is_some()
    }

    pub fn is_loading(&self) -> bool {
        self.loading.load(Ordering::SeqCst)
    }

    /// Startup step: adopt the persisted identity, if any.
    /// An unreadable slot is cleared and treated as signed out.
    #[instrument(name = "pms.session.restore", skip(self))]
    pub fn restore(&self) -> Option<Arc<Identity>> {
        let restored = match self.storage.load() {
            Ok(found) => found,
            Err(e) => {
                warn!(error = %e, "Discarding unreadable session slot");
                if let Err(e) = self.storage.clear() {
                    warn!(error = %e, "Failed to clear unreadable session slot");
                }
                None
            }
        };

        match &restored {
            Some(identity) => debug!(user_id = %identity.id, "Restored session"),
            None => debug!("No stored session"),
        }

        self.current.store(restored.map(Arc::new));
        self.loading.store(false, Ordering::SeqCst);
        self.current()
    }

    #[instrument(name = "pms.session.login", skip(self, password), fields(email = %email))]
    pub async fn login(&self, email: &str, password: &str) -> Result<Identity, DomainError> {
        let _loading = LoadingGuard::start(&self.loading);
        self.simulate_round_trip().await;

        let found = self
            .directory
            .find_by_email(email)
            .await
            .map_err(|e| DomainError::storage(e.to_string()))?;

        // Same outcome for unknown email and wrong password.
        let identity = match found {
            Some(identity) if password == DEMO_PASSWORD => identity,
            _ => {
                info!("Login rejected");
                return Err(DomainError::InvalidCredentials);
            }
        };

        self.persist_and_set(&identity)?;
        self.events.publish(&SessionEvent::LoggedIn {
            id: identity.id.clone(),
            role: identity.role,
            at: Utc::now(),
        });

        info!(user_id = %identity.id, role = %identity.role, "Logged in");
        Ok(identity)
    }

    #[instrument(
        name = "pms.session.register",
        skip(self, data),
        fields(email = %data.email, role = %data.role)
    )]
    pub async fn register(&self, data: RegisterData) -> Result<Identity, DomainError> {
        let _loading = LoadingGuard::start(&self.loading);
        self.simulate_round_trip().await;

        if self
            .directory
            .email_exists(&data.email)
            .await
            .map_err(|e| DomainError::storage(e.to_string()))?
        {
            info!("Registration rejected: email taken");
            return Err(DomainError::email_already_exists(data.email));
        }

        let identity = Identity {
            id: self.ids.next_id(),
            name: data.name,
            email: data.email,
            role: data.role,
            department: data.department,
        };

        // The pre-check above is advisory; this insert decides.
        let inserted = self
            .directory
            .insert_if_absent(identity.clone())
            .await
            .map_err(|e| DomainError::storage(e.to_string()))?;
        if !inserted {
            info!("Registration rejected: email taken");
            return Err(DomainError::email_already_exists(identity.email));
        }

        self.persist_and_set(&identity)?;
        self.events.publish(&SessionEvent::Registered {
            id: identity.id.clone(),
            role: identity.role,
            at: Utc::now(),
        });

        info!(user_id = %identity.id, "Registered and logged in");
        Ok(identity)
    }

    /// Teardown step. The in-memory identity is always cleared; a failure to
    /// clear the persisted slot is only logged.
    #[instrument(name = "pms.session.logout", skip(self))]
    pub fn logout(&self) {
        let previous = self.current.swap(None);

        if let Err(e) = self.storage.clear() {
            warn!(error = %e, "Failed to clear session slot");
        }

        if let Some(previous) = previous {
            self.events.publish(&SessionEvent::LoggedOut {
                id: previous.id.clone(),
                at: Utc::now(),
            });
            info!(user_id = %previous.id, "Logged out");
        }
    }

    // Slot first: a failed write leaves the in-memory session untouched.
    fn persist_and_set(&self, identity: &Identity) -> Result<(), DomainError> {
        self.storage
            .save(identity)
            .map_err(|e| DomainError::storage(e.to_string()))?;
        self.current.store(Some(Arc::new(identity.clone())));
        Ok(())
    }

    async fn simulate_round_trip(&self) {
        if !self.config.auth_delay.is_zero() {
            tokio::time::sleep(self.config.auth_delay).await;
        }
    }
}
