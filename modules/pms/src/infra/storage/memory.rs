use parking_lot::Mutex;

use crate::contract::model::Identity;
use crate::domain::ports::SessionStorage;

/// Session slot held in memory as serialized JSON.
#[derive(Debug, Default)]
pub struct InMemorySessionStorage {
    slot: Mutex<Option<String>>,
}

impl InMemorySessionStorage {
    pub fn new() -> Self {
        Self::default()
    }

    /// Starts with `raw` in the slot, whether or not it parses.
    pub fn with_raw(raw: impl Into<String>) -> Self {
        Self {
            slot: Mutex::new(Some(raw.into())),
        }
    }

    pub fn raw(&self) -> Option<String> {
        self.slot.lock().clone()
    }
}

impl SessionStorage for InMemorySessionStorage {
    fn load(&self) -> anyhow::Result<Option<Identity>> {
        match self.slot.lock().as_deref() {
            Some(raw) => Ok(Some(serde_json::from_str(raw)?)),
            None => Ok(None),
        }
    }

    fn save(&self, identity: &Identity) -> anyhow::Result<()> {
        *self.slot.lock() = Some(serde_json::to_string(identity)?);
        Ok(())
    }

    fn clear(&self) -> anyhow::Result<()> {
        *self.slot.lock() = None;
        Ok(())
    }
}
