//! HAVEN Core - Listing and swarm-task types
//!
//! Pure data structures and derivation logic. The query engine and the
//! task-progress derivation are total functions over immutable snapshots;
//! nothing in this crate performs I/O or holds state between calls.

pub mod criteria;
pub mod enums;
pub mod error;
pub mod property;
pub mod query;
pub mod swarm;

pub use criteria::{price_bound, FilterCriteria};
pub use enums::{ListingStatus, PropertyType, SortKey, TaskStatus};
pub use error::{HavenError, HavenResult, ValidationError};
pub use property::Property;
pub use query::{query, QuerySummary};
pub use swarm::{Subtask, SwarmTask, TaskProgress};

/// Duration in milliseconds for task and subtask timings.
pub type DurationMs = i64;
