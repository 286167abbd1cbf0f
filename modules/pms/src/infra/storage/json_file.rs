use std::fs;
use std::io::ErrorKind;
use std::path::{Path, PathBuf};

use anyhow::Context;
use tracing::debug;

use crate::contract::model::Identity;
use crate::domain::ports::SessionStorage;

/// Session slot kept as one JSON document on disk.
#[derive(Debug, Clone)]
pub struct JsonFileSessionStorage {
    path: PathBuf,
}

impl JsonFileSessionStorage {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }
}

impl SessionStorage for JsonFileSessionStorage {
    fn load(&self) -> anyhow::Result<Option<Identity>> {
        let raw = match fs::read_to_string(&self.path) {
            Ok(raw) => raw,
            Err(e) if e.kind() == ErrorKind::NotFound => return Ok(None),
            Err(e) => {
                return Err(e).with_context(|| format!("reading {}", self.path.display()));
            }
        };

        if raw.trim().is_empty() {
            return Ok(None);
        }

        let identity = serde_json::from_str(&raw)
            .with_context(|| format!("parsing session slot {}", self.path.display()))?;
        Ok(Some(identity))
    }

    fn save(&self, identity: &Identity) -> anyhow::Result<()> {
        if let Some(parent) = self.path.parent() {
            fs::create_dir_all(parent)
                .with_context(|| format!("creating {}", parent.display()))?;
        }
        let json = serde_json::to_string(identity)?;
        fs::write(&self.path, json).with_context(|| format!("writing {}", self.path.display()))?;
        debug!(path = %self.path.display(), "Session slot written");
        Ok(())
    }

    fn clear(&self) -> anyhow::Result<()> {
        match fs::remove_file(&self.path) {
            Ok(()) => Ok(()),
            Err(e) if e.kind() == ErrorKind::NotFound => Ok(()),
            Err(e) => Err(e).with_context(|| format!("removing {}", self.path.display())),
        }
    }
}
