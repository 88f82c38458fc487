//! Fixture loading boundary.
//!
//! The dashboard consumes read-only snapshots produced outside this process:
//! a listing inventory and, optionally, the current swarm task. Both arrive
//! as JSON files. Records are validated once here; after that the engine
//! treats them as trusted immutable input.

use haven_core::{Property, SwarmTask, ValidationError};
use std::path::Path;

#[derive(Debug, thiserror::Error)]
pub enum FixtureError {
    #[error("Failed to read fixture {path}: {source}")]
    Io {
        path: String,
        source: std::io::Error,
    },
    #[error("Failed to parse fixture {path}: {source}")]
    Parse {
        path: String,
        source: serde_json::Error,
    },
    #[error(transparent)]
    Invalid(#[from] ValidationError),
}

/// Load and validate the listing inventory snapshot.
pub fn load_properties(path: &Path) -> Result<Vec<Property>, FixtureError> {
    let contents = std::fs::read_to_string(path).map_err(|source| FixtureError::Io {
        path: path.display().to_string(),
        source,
    })?;
    let properties: Vec<Property> =
        serde_json::from_str(&contents).map_err(|source| FixtureError::Parse {
            path: path.display().to_string(),
            source,
        })?;
    for property in &properties {
        property.validate()?;
    }
    Ok(properties)
}

/// Load the current swarm task snapshot, if a path is configured.
pub fn load_task(path: Option<&Path>) -> Result<Option<SwarmTask>, FixtureError> {
    let Some(path) = path else {
        return Ok(None);
    };
    let contents = std::fs::read_to_string(path).map_err(|source| FixtureError::Io {
        path: path.display().to_string(),
        source,
    })?;
    let task: SwarmTask =
        serde_json::from_str(&contents).map_err(|source| FixtureError::Parse {
            path: path.display().to_string(),
            source,
        })?;
    Ok(Some(task))
}
