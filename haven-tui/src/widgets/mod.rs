//! Reusable widget components.

pub mod detail;
pub mod filter;
pub mod progress;

pub use detail::{DetailField, DetailPanel};
pub use filter::{FilterBar, FilterOption};
pub use progress::ProgressBar;
