//! Enum types for HAVEN entities

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Category of a listed property.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum PropertyType {
    SingleFamily,
    Condo,
    Townhouse,
    MultiFamily,
    Land,
}

/// Market status of a listing.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum ListingStatus {
    Active,
    New,
    Pending,
    Sold,
}

/// Sort order applied to a filtered result set.
///
/// `Newest` orders by ascending days-on-market (a fresher listing has spent
/// fewer days on the market). `Beds` and `Sqft` order descending.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
#[serde(rename_all = "kebab-case")]
pub enum SortKey {
    #[default]
    PriceAsc,
    PriceDesc,
    Newest,
    Beds,
    Sqft,
}

impl SortKey {
    pub fn all() -> &'static [SortKey] {
        &[
            SortKey::PriceAsc,
            SortKey::PriceDesc,
            SortKey::Newest,
            SortKey::Beds,
            SortKey::Sqft,
        ]
    }

    /// Short label for the sort selector in the UI.
    pub fn label(&self) -> &'static str {
        match self {
            SortKey::PriceAsc => "Price ↑",
            SortKey::PriceDesc => "Price ↓",
            SortKey::Newest => "Newest",
            SortKey::Beds => "Beds",
            SortKey::Sqft => "Sqft",
        }
    }

    /// Next key in cycling order, wrapping at the end.
    pub fn next(&self) -> SortKey {
        let all = Self::all();
        let idx = all.iter().position(|k| k == self).unwrap_or(0);
        all[(idx + 1) % all.len()]
    }
}

/// Lifecycle status shared by swarm tasks and their subtasks.
///
/// Transitions are driven entirely by the external producer:
/// `Queued -> Running -> {Completed | Failed}`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
#[serde(rename_all = "kebab-case")]
pub enum TaskStatus {
    #[default]
    Queued,
    Running,
    Completed,
    Failed,
}

impl TaskStatus {
    /// Whether the status admits no further transitions.
    pub fn is_terminal(&self) -> bool {
        matches!(self, TaskStatus::Completed | TaskStatus::Failed)
    }

    /// Fixed display glyph per status. Exhaustive so a new variant is a
    /// compile error here rather than a runtime fallback.
    pub fn glyph(&self) -> &'static str {
        match self {
            TaskStatus::Queued => "○",
            TaskStatus::Running => "◐",
            TaskStatus::Completed => "●",
            TaskStatus::Failed => "✗",
        }
    }
}

// ============================================================================
// STRING CONVERSIONS
// ============================================================================

fn normalize_token(input: &str) -> String {
    input
        .chars()
        .filter(|c| !c.is_whitespace() && *c != '_' && *c != '-')
        .map(|c| c.to_ascii_lowercase())
        .collect()
}

impl fmt::Display for PropertyType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let value = match self {
            PropertyType::SingleFamily => "Single Family",
            PropertyType::Condo => "Condo",
            PropertyType::Townhouse => "Townhouse",
            PropertyType::MultiFamily => "Multi-Family",
            PropertyType::Land => "Land",
        };
        write!(f, "{}", value)
    }
}

impl FromStr for PropertyType {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match normalize_token(s).as_str() {
            "singlefamily" => Ok(PropertyType::SingleFamily),
            "condo" | "condominium" => Ok(PropertyType::Condo),
            "townhouse" | "townhome" => Ok(PropertyType::Townhouse),
            "multifamily" => Ok(PropertyType::MultiFamily),
            "land" => Ok(PropertyType::Land),
            _ => Err(format!("Invalid PropertyType: {}", s)),
        }
    }
}

impl fmt::Display for ListingStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let value = match self {
            ListingStatus::Active => "Active",
            ListingStatus::New => "New",
            ListingStatus::Pending => "Pending",
            ListingStatus::Sold => "Sold",
        };
        write!(f, "{}", value)
    }
}

impl FromStr for ListingStatus {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match normalize_token(s).as_str() {
            "active" => Ok(ListingStatus::Active),
            "new" => Ok(ListingStatus::New),
            "pending" => Ok(ListingStatus::Pending),
            "sold" => Ok(ListingStatus::Sold),
            _ => Err(format!("Invalid ListingStatus: {}", s)),
        }
    }
}

impl fmt::Display for SortKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let value = match self {
            SortKey::PriceAsc => "price-asc",
            SortKey::PriceDesc => "price-desc",
            SortKey::Newest => "newest",
            SortKey::Beds => "beds",
            SortKey::Sqft => "sqft",
        };
        write!(f, "{}", value)
    }
}

impl FromStr for SortKey {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match normalize_token(s).as_str() {
            "priceasc" => Ok(SortKey::PriceAsc),
            "pricedesc" => Ok(SortKey::PriceDesc),
            "newest" => Ok(SortKey::Newest),
            "beds" => Ok(SortKey::Beds),
            "sqft" => Ok(SortKey::Sqft),
            _ => Err(format!("Invalid SortKey: {}", s)),
        }
    }
}

impl fmt::Display for TaskStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let value = match self {
            TaskStatus::Queued => "Queued",
            TaskStatus::Running => "Running",
            TaskStatus::Completed => "Completed",
            TaskStatus::Failed => "Failed",
        };
        write!(f, "{}", value)
    }
}

impl FromStr for TaskStatus {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match normalize_token(s).as_str() {
            "queued" => Ok(TaskStatus::Queued),
            "running" => Ok(TaskStatus::Running),
            "completed" | "complete" => Ok(TaskStatus::Completed),
            "failed" | "failure" => Ok(TaskStatus::Failed),
            _ => Err(format!("Invalid TaskStatus: {}", s)),
        }
    }
}

// =============================================================================
// TESTS
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn property_type_round_trips_through_str() {
        for ty in [
            PropertyType::SingleFamily,
            PropertyType::Condo,
            PropertyType::Townhouse,
            PropertyType::MultiFamily,
            PropertyType::Land,
        ] {
            let parsed: PropertyType = ty.to_string().parse().unwrap();
            assert_eq!(parsed, ty);
        }
    }

    #[test]
    fn task_status_parse_is_case_and_separator_insensitive() {
        assert_eq!("RUNNING".parse::<TaskStatus>().unwrap(), TaskStatus::Running);
        assert_eq!("com_pleted".parse::<TaskStatus>().unwrap(), TaskStatus::Completed);
        assert!("done".parse::<TaskStatus>().is_err());
    }

    #[test]
    fn sort_key_cycle_visits_every_key() {
        let mut key = SortKey::PriceAsc;
        let mut seen = vec![key];
        for _ in 0..SortKey::all().len() - 1 {
            key = key.next();
            seen.push(key);
        }
        assert_eq!(seen.len(), SortKey::all().len());
        assert_eq!(key.next(), SortKey::PriceAsc);
    }

    #[test]
    fn kebab_case_wire_form() {
        let json = serde_json::to_string(&PropertyType::SingleFamily).unwrap();
        assert_eq!(json, "\"single-family\"");
        let json = serde_json::to_string(&SortKey::PriceDesc).unwrap();
        assert_eq!(json, "\"price-desc\"");
    }

    #[test]
    fn terminal_statuses() {
        assert!(!TaskStatus::Queued.is_terminal());
        assert!(!TaskStatus::Running.is_terminal());
        assert!(TaskStatus::Completed.is_terminal());
        assert!(TaskStatus::Failed.is_terminal());
    }
}
