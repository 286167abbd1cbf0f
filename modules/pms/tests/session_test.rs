//! Session lifecycle against in-memory adapters.

use std::sync::Arc;
use std::time::Duration;

use parking_lot::Mutex;
use pms::contract::model::{Identity, RegisterData, Role};
use pms::domain::error::DomainError;
use pms::domain::events::SessionEvent;
use pms::domain::ports::{EventPublisher, IdentityDirectory, SessionStorage};
use pms::domain::session::{SessionConfig, SessionStore, DEMO_PASSWORD};
use pms::infra::directory::InMemoryDirectory;
use pms::infra::storage::InMemorySessionStorage;

#[derive(Default)]
struct RecordingPublisher {
    events: Mutex<Vec<SessionEvent>>,
}

impl EventPublisher<SessionEvent> for RecordingPublisher {
    fn publish(&self, event: &SessionEvent) {
        self.events.lock().push(event.clone());
    }
}

/// Slot whose writes always fail.
struct ReadOnlySlot;

impl SessionStorage for ReadOnlySlot {
    fn load(&self) -> anyhow::Result<Option<Identity>> {
        Ok(None)
    }

    fn save(&self, _identity: &Identity) -> anyhow::Result<()> {
        anyhow::bail!("disk full")
    }

    fn clear(&self) -> anyhow::Result<()> {
        anyhow::bail!("read-only")
    }
}

/// Slot that saves and loads but refuses to clear.
#[derive(Default)]
struct NoClearSlot {
    inner: InMemorySessionStorage,
}

impl SessionStorage for NoClearSlot {
    fn load(&self) -> anyhow::Result<Option<Identity>> {
        self.inner.load()
    }

    fn save(&self, identity: &Identity) -> anyhow::Result<()> {
        self.inner.save(identity)
    }

    fn clear(&self) -> anyhow::Result<()> {
        anyhow::bail!("permission denied")
    }
}

/// Directory that yields to the scheduler before every call, so concurrent
/// registrations interleave between the email check and the insert.
struct YieldingDirectory {
    inner: InMemoryDirectory,
}

#[async_trait::async_trait]
impl IdentityDirectory for YieldingDirectory {
    async fn find_by_email(&self, email: &str) -> anyhow::Result<Option<Identity>> {
        tokio::task::yield_now().await;
        self.inner.find_by_email(email).await
    }

    async fn email_exists(&self, email: &str) -> anyhow::Result<bool> {
        tokio::task::yield_now().await;
        self.inner.email_exists(email).await
    }

    async fn insert_if_absent(&self, identity: Identity) -> anyhow::Result<bool> {
        tokio::task::yield_now().await;
        self.inner.insert_if_absent(identity).await
    }
}

fn store_with(
    storage: Arc<dyn SessionStorage>,
    delay: Duration,
) -> (Arc<SessionStore>, Arc<RecordingPublisher>) {
    let events = Arc::new(RecordingPublisher::default());
    let store = SessionStore::new(
        Arc::new(InMemoryDirectory::seeded()),
        storage,
        events.clone(),
        SessionConfig { auth_delay: delay },
    );
    (Arc::new(store), events)
}

fn registration(email: &str) -> RegisterData {
    RegisterData {
        name: "Carol Davis".into(),
        email: email.into(),
        password: "secret1".into(),
        role: Role::Supervisor,
        department: "Sales".into(),
    }
}

#[tokio::test]
async fn login_succeeds_only_with_demo_password() {
    let slot = Arc::new(InMemorySessionStorage::new());
    let (store, events) = store_with(slot.clone(), Duration::ZERO);
    store.restore();

    let err = store.login("admin@company.com", "wrong").await.unwrap_err();
    assert!(matches!(err, DomainError::InvalidCredentials));
    let err = store.login("nobody@company.com", DEMO_PASSWORD).await.unwrap_err();
    assert_eq!(err.to_string(), "Invalid email or password");
    assert!(!store.is_authenticated());
    assert!(slot.raw().is_none());

    let identity = store.login("admin@company.com", DEMO_PASSWORD).await.unwrap();
    assert_eq!(identity.name, "John Doe");
    assert_eq!(identity.role, Role::Admin);
    assert_eq!(store.current().as_deref(), Some(&identity));
    assert_eq!(slot.load().unwrap(), Some(identity));
    assert!(matches!(events.events.lock()[0], SessionEvent::LoggedIn { role: Role::Admin, .. }));
}

#[tokio::test]
async fn register_rejects_existing_email_and_signs_in_new_user() {
    let (store, events) = store_with(Arc::new(InMemorySessionStorage::new()), Duration::ZERO);
    store.restore();

    let err = store.register(registration("employee@company.com")).await.unwrap_err();
    assert_eq!(err.to_string(), "User with this email already exists");
    assert!(!store.is_authenticated());

    let identity = store.register(registration("carol@company.com")).await.unwrap();
    assert_eq!(identity.name, "Carol Davis");
    assert_eq!(identity.role, Role::Supervisor);
    assert_eq!(identity.department, "Sales");
    assert!(identity.id.parse::<i64>().is_ok());
    assert!(store.is_authenticated());

    // the new account can sign in again later
    store.logout();
    assert!(store.login("carol@company.com", DEMO_PASSWORD).await.is_ok());

    let kinds: Vec<&str> = events
        .events
        .lock()
        .iter()
        .map(|e| match e {
            SessionEvent::LoggedIn { .. } => "in",
            SessionEvent::Registered { .. } => "registered",
            SessionEvent::LoggedOut { .. } => "out",
        })
        .collect();
    assert_eq!(kinds, vec!["registered", "out", "in"]);
}

#[tokio::test]
async fn logout_clears_memory_and_slot() {
    let slot = Arc::new(InMemorySessionStorage::new());
    let (store, _) = store_with(slot.clone(), Duration::ZERO);
    store.restore();
    store.login("employee@company.com", DEMO_PASSWORD).await.unwrap();
    assert!(slot.raw().is_some());

    store.logout();
    assert!(store.current().is_none());
    assert!(slot.raw().is_none());
}

#[tokio::test]
async fn restore_adopts_persisted_identity() {
    let slot = Arc::new(InMemorySessionStorage::new());
    let (first, _) = store_with(slot.clone(), Duration::ZERO);
    first.restore();
    let identity = first.login("supervisor@company.com", DEMO_PASSWORD).await.unwrap();

    let (second, _) = store_with(slot, Duration::ZERO);
    assert!(second.is_loading());
    let restored = second.restore().unwrap();
    assert_eq!(*restored, identity);
    assert!(!second.is_loading());
}

#[tokio::test]
async fn corrupt_slot_is_cleared_and_treated_as_signed_out() {
    let slot = Arc::new(InMemorySessionStorage::with_raw("{\"id\": 42"));
    let (store, _) = store_with(slot.clone(), Duration::ZERO);

    assert!(store.restore().is_none());
    assert!(slot.raw().is_none());
    assert!(!store.is_loading());
}

#[tokio::test]
async fn failed_slot_write_aborts_login() {
    let (store, events) = store_with(Arc::new(ReadOnlySlot), Duration::ZERO);
    store.restore();

    let err = store.login("admin@company.com", DEMO_PASSWORD).await.unwrap_err();
    assert!(matches!(err, DomainError::Storage { .. }));
    assert!(!store.is_authenticated());
    assert!(events.events.lock().is_empty());
    assert!(!store.is_loading());
}

#[tokio::test]
async fn failed_slot_clear_still_logs_out() {
    let slot = Arc::new(NoClearSlot::default());
    let (store, events) = store_with(slot.clone(), Duration::ZERO);
    store.restore();
    store.login("admin@company.com", DEMO_PASSWORD).await.unwrap();

    store.logout();
    assert!(store.current().is_none());
    // the slot still holds the identity; only the in-memory session is gone
    assert!(slot.inner.raw().is_some());
    assert!(matches!(events.events.lock().last(), Some(SessionEvent::LoggedOut { .. })));
}

#[tokio::test]
async fn is_loading_during_round_trip() {
    let (store, _) = store_with(
        Arc::new(InMemorySessionStorage::new()),
        Duration::from_millis(300),
    );
    store.restore();
    assert!(!store.is_loading());

    let pending = {
        let store = store.clone();
        tokio::spawn(async move { store.login("admin@company.com", DEMO_PASSWORD).await })
    };

    tokio::time::sleep(Duration::from_millis(50)).await;
    assert!(store.is_loading());

    pending.await.unwrap().unwrap();
    assert!(!store.is_loading());
    assert!(store.is_authenticated());
}

#[tokio::test]
async fn concurrent_registrations_of_one_email_admit_only_one() {
    let directory = Arc::new(YieldingDirectory {
        inner: InMemoryDirectory::seeded(),
    });
    let store = SessionStore::new(
        directory.clone(),
        Arc::new(InMemorySessionStorage::new()),
        Arc::new(RecordingPublisher::default()),
        SessionConfig {
            auth_delay: Duration::ZERO,
        },
    );
    store.restore();

    let (first, second) = tokio::join!(
        store.register(registration("carol@company.com")),
        store.register(registration("carol@company.com")),
    );

    let outcomes = [first, second];
    assert_eq!(outcomes.iter().filter(|r| r.is_ok()).count(), 1);
    assert!(outcomes
        .iter()
        .any(|r| matches!(r, Err(DomainError::EmailAlreadyExists { .. }))));
    assert_eq!(directory.inner.len(), 4);
}
