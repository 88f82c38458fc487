//! Best-effort persistence of UI state between runs.

use crate::nav::View;
use haven_core::SortKey;
use serde::{Deserialize, Serialize};
use std::path::Path;

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PersistedState {
    pub active_view: View,
    pub sort_key: SortKey,
}

pub fn load(path: &Path) -> std::io::Result<Option<PersistedState>> {
    if !path.exists() {
        return Ok(None);
    }
    let contents = std::fs::read_to_string(path)?;
    Ok(serde_json::from_str(&contents).ok())
}

pub fn save(path: &Path, state: &PersistedState) -> std::io::Result<()> {
    if let Some(parent) = path.parent() {
        std::fs::create_dir_all(parent)?;
    }
    let contents = serde_json::to_string_pretty(state)
        .map_err(|e| std::io::Error::new(std::io::ErrorKind::Other, e))?;
    std::fs::write(path, contents)
}
