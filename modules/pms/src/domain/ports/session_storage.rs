use crate::contract::model::Identity;

/// The single persisted identity slot.
pub trait SessionStorage: Send + Sync {
    /// `Ok(None)` when the slot is empty; `Err` when it holds unreadable data.
    fn load(&self) -> anyhow::Result<Option<Identity>>;
    fn save(&self, identity: &Identity) -> anyhow::Result<()>;
    /// Clearing an empty slot is not an error.
    fn clear(&self) -> anyhow::Result<()>;
}
