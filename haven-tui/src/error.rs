//! Error types for the TUI.

use crate::config::ConfigError;
use crate::data::FixtureError;

#[derive(Debug, thiserror::Error)]
pub enum TuiError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
    #[error(transparent)]
    Config(#[from] ConfigError),
    #[error(transparent)]
    Fixture(#[from] FixtureError),
}
