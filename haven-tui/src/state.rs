//! Application state and derived view state.
//!
//! Every mutation that affects the result set funnels through
//! [`App::recompute`], which re-derives the filtered results, summary, and
//! task progress from the immutable snapshots in one synchronous pass. A
//! draw never observes a partially updated state.

use crate::config::TuiConfig;
use crate::nav::View;
use crate::notifications::{Notification, NotificationLevel};
use crate::theme::HearthglowTheme;
use haven_core::{
    price_bound, query, FilterCriteria, ListingStatus, Property, PropertyType, QuerySummary,
    SortKey, SwarmTask, TaskProgress,
};

#[derive(Debug, Clone)]
pub struct Modal {
    pub title: String,
    pub message: String,
}

/// Which price bound an entry session edits.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PriceField {
    Min,
    Max,
}

pub struct App {
    pub config: TuiConfig,
    pub theme: HearthglowTheme,
    pub active_view: View,

    /// Immutable listing snapshot loaded at startup (or on refresh).
    pub properties: Vec<Property>,
    /// Distinct cities in the inventory, sorted, for the city filter cycle.
    pub cities: Vec<String>,
    pub criteria: FilterCriteria,
    pub sort_key: SortKey,

    /// Derived: filtered + sorted results and their aggregates.
    pub results: Vec<Property>,
    pub summary: QuerySummary,
    pub selected: Option<usize>,

    /// Immutable task snapshot and its derived progress.
    pub task: Option<SwarmTask>,
    pub progress: TaskProgress,

    /// In-flight text search entry; None when not editing.
    pub search_input: Option<String>,
    /// In-flight price bound entry; None when not editing.
    pub price_input: Option<(PriceField, String)>,
    pub notifications: Vec<Notification>,
    pub modal: Option<Modal>,
}

impl App {
    pub fn new(config: TuiConfig, properties: Vec<Property>, task: Option<SwarmTask>) -> Self {
        let cities = distinct_cities(&properties);
        let mut app = Self {
            config,
            theme: HearthglowTheme::hearthglow(),
            active_view: View::PropertyBrowser,
            properties,
            cities,
            criteria: FilterCriteria::matches_all(),
            sort_key: SortKey::default(),
            results: Vec::new(),
            summary: QuerySummary::of(&[]),
            selected: None,
            task,
            progress: TaskProgress::default(),
            search_input: None,
            price_input: None,
            notifications: Vec::new(),
            modal: None,
        };
        app.recompute();
        app
    }

    /// Re-derive everything from the base snapshots. Atomic with respect to
    /// a single draw: all derived fields change together.
    pub fn recompute(&mut self) {
        self.results = query(&self.properties, &self.criteria, self.sort_key);
        self.summary = QuerySummary::of(&self.results);
        self.progress = TaskProgress::derive(self.task.as_ref());
        self.selected = match (self.selected, self.results.len()) {
            (_, 0) => None,
            (None, _) => Some(0),
            (Some(idx), len) => Some(idx.min(len - 1)),
        };
    }

    /// Swap in freshly loaded snapshots (refresh from disk).
    pub fn replace_data(&mut self, properties: Vec<Property>, task: Option<SwarmTask>) {
        self.cities = distinct_cities(&properties);
        self.properties = properties;
        self.task = task;
        self.recompute();
    }

    pub fn selected_property(&self) -> Option<&Property> {
        self.selected.and_then(|idx| self.results.get(idx))
    }

    pub fn select_next(&mut self) {
        if self.results.is_empty() {
            self.selected = None;
            return;
        }
        let last = self.results.len() - 1;
        self.selected = Some(match self.selected {
            Some(idx) if idx < last => idx + 1,
            Some(idx) => idx,
            None => 0,
        });
    }

    pub fn select_previous(&mut self) {
        if self.results.is_empty() {
            self.selected = None;
            return;
        }
        self.selected = Some(match self.selected {
            Some(idx) if idx > 0 => idx - 1,
            _ => 0,
        });
    }

    // --- filter mutations, each followed by an atomic recompute ---

    pub fn cycle_sort(&mut self) {
        self.sort_key = self.sort_key.next();
        self.recompute();
    }

    pub fn cycle_status(&mut self) {
        self.criteria.status = match self.criteria.status {
            None => Some(ListingStatus::Active),
            Some(ListingStatus::Active) => Some(ListingStatus::New),
            Some(ListingStatus::New) => Some(ListingStatus::Pending),
            Some(ListingStatus::Pending) => Some(ListingStatus::Sold),
            Some(ListingStatus::Sold) => None,
        };
        self.recompute();
    }

    pub fn cycle_type(&mut self) {
        self.criteria.property_type = match self.criteria.property_type {
            None => Some(PropertyType::SingleFamily),
            Some(PropertyType::SingleFamily) => Some(PropertyType::Condo),
            Some(PropertyType::Condo) => Some(PropertyType::Townhouse),
            Some(PropertyType::Townhouse) => Some(PropertyType::MultiFamily),
            Some(PropertyType::MultiFamily) => Some(PropertyType::Land),
            Some(PropertyType::Land) => None,
        };
        self.recompute();
    }

    pub fn cycle_city(&mut self) {
        self.criteria.city = match &self.criteria.city {
            None => self.cities.first().cloned(),
            Some(current) => {
                let idx = self.cities.iter().position(|c| c == current);
                match idx {
                    Some(i) if i + 1 < self.cities.len() => Some(self.cities[i + 1].clone()),
                    _ => None,
                }
            }
        };
        self.recompute();
    }

    pub fn raise_min_beds(&mut self) {
        self.criteria.min_beds = self.criteria.min_beds.saturating_add(1);
        self.recompute();
    }

    pub fn lower_min_beds(&mut self) {
        self.criteria.min_beds = self.criteria.min_beds.saturating_sub(1);
        self.recompute();
    }

    pub fn clear_filters(&mut self) {
        self.criteria = FilterCriteria::matches_all();
        self.recompute();
    }

    // --- search entry mode ---

    pub fn open_search(&mut self) {
        self.search_input = Some(self.criteria.query.clone());
    }

    pub fn push_search_char(&mut self, c: char) {
        if let Some(input) = &mut self.search_input {
            input.push(c);
        }
    }

    pub fn pop_search_char(&mut self) {
        if let Some(input) = &mut self.search_input {
            input.pop();
        }
    }

    pub fn commit_search(&mut self) {
        if let Some(input) = self.search_input.take() {
            self.criteria.query = input;
            self.recompute();
        }
    }

    pub fn cancel_search(&mut self) {
        self.search_input = None;
    }

    // --- price bound entry mode ---

    pub fn open_price_entry(&mut self, field: PriceField) {
        let current = match field {
            PriceField::Min => self.criteria.min_price,
            PriceField::Max => self.criteria.max_price,
        };
        let initial = current.map(|v| format!("{}", v)).unwrap_or_default();
        self.price_input = Some((field, initial));
    }

    pub fn push_price_char(&mut self, c: char) {
        if let Some((_, input)) = &mut self.price_input {
            input.push(c);
        }
    }

    pub fn pop_price_char(&mut self) {
        if let Some((_, input)) = &mut self.price_input {
            input.pop();
        }
    }

    /// Applies the entered bound. Malformed, negative, or blank input maps
    /// to `None` through [`price_bound`], i.e. it clears the filter rather
    /// than erroring.
    pub fn commit_price_entry(&mut self) {
        if let Some((field, input)) = self.price_input.take() {
            let bound = price_bound(&input);
            match field {
                PriceField::Min => self.criteria.min_price = bound,
                PriceField::Max => self.criteria.max_price = bound,
            }
            self.recompute();
        }
    }

    pub fn cancel_price_entry(&mut self) {
        self.price_input = None;
    }

    pub fn notify(&mut self, level: NotificationLevel, message: impl Into<String>) {
        self.notifications.push(Notification::new(level, message));
    }
}

fn distinct_cities(properties: &[Property]) -> Vec<String> {
    let mut cities: Vec<String> = properties.iter().map(|p| p.city.clone()).collect();
    cities.sort();
    cities.dedup();
    cities
}

// =============================================================================
// TESTS
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::ThemeConfig;
    use haven_test_utils::fixtures::{sample_properties, sample_task};

    fn test_config() -> TuiConfig {
        TuiConfig {
            listings_path: "fixtures/listings.json".into(),
            task_path: Some("fixtures/task.json".into()),
            refresh_interval_ms: 2_000,
            persistence_path: "tmp/haven-tui.json".into(),
            theme: ThemeConfig {
                name: "hearthglow".to_string(),
            },
        }
    }

    fn app() -> App {
        App::new(test_config(), sample_properties(), Some(sample_task()))
    }

    #[test]
    fn new_app_selects_first_result() {
        let app = app();
        assert_eq!(app.selected, Some(0));
        assert_eq!(app.summary.count, app.results.len());
    }

    #[test]
    fn selection_clamps_when_filter_shrinks_results() {
        let mut app = app();
        for _ in 0..app.results.len() {
            app.select_next();
        }
        let before = app.selected.unwrap();
        assert_eq!(before, app.results.len() - 1);

        // Narrow hard: only New listings remain.
        app.cycle_status();
        app.cycle_status();
        assert!(app.selected.map_or(true, |idx| idx < app.results.len()));
    }

    #[test]
    fn empty_results_clear_selection() {
        let mut app = app();
        app.criteria.query = "no such listing anywhere".to_string();
        app.recompute();
        assert!(app.results.is_empty());
        assert_eq!(app.selected, None);
        assert_eq!(app.summary.average_price, 0.0);
    }

    #[test]
    fn status_cycle_returns_to_unfiltered() {
        let mut app = app();
        let total = app.results.len();
        for _ in 0..5 {
            app.cycle_status();
        }
        assert_eq!(app.criteria.status, None);
        assert_eq!(app.results.len(), total);
    }

    #[test]
    fn city_cycle_walks_inventory_cities() {
        let mut app = app();
        let mut seen = Vec::new();
        app.cycle_city();
        while let Some(city) = app.criteria.city.clone() {
            seen.push(city);
            app.cycle_city();
        }
        assert_eq!(seen, app.cities);
    }

    #[test]
    fn search_commit_applies_query_atomically() {
        let mut app = app();
        app.open_search();
        for c in "richland".chars() {
            app.push_search_char(c);
        }
        app.commit_search();
        assert!(app.search_input.is_none());
        assert!(!app.results.is_empty());
        assert!(app
            .results
            .iter()
            .all(|p| p.city.to_lowercase().contains("richland")
                || p.address.to_lowercase().contains("richland")
                || p.description.to_lowercase().contains("richland")
                || p.features.iter().any(|f| f.to_lowercase().contains("richland"))));
    }

    #[test]
    fn search_cancel_keeps_previous_query() {
        let mut app = app();
        app.open_search();
        app.push_search_char('z');
        app.cancel_search();
        assert_eq!(app.criteria.query, "");
    }

    #[test]
    fn progress_derived_from_task_snapshot() {
        let app = app();
        assert_eq!(app.progress.total, 3);
        assert_eq!(app.progress.completed, 1);
        assert_eq!(app.progress.percent, 33);
        assert!(!app.progress.show_synthesis);
    }

    #[test]
    fn no_task_yields_empty_progress() {
        let app = App::new(test_config(), sample_properties(), None);
        assert_eq!(app.progress, TaskProgress::default());
    }

    #[test]
    fn price_entry_commit_applies_bound() {
        let mut app = app();
        app.open_price_entry(PriceField::Min);
        for c in "300000".chars() {
            app.push_price_char(c);
        }
        app.commit_price_entry();
        assert!(app.price_input.is_none());
        assert_eq!(app.criteria.min_price, Some(300_000.0));
        assert!(app.results.iter().all(|p| p.price >= 300_000.0));
    }

    #[test]
    fn malformed_price_entry_clears_bound() {
        let mut app = app();
        app.criteria.max_price = Some(400_000.0);
        app.recompute();

        app.open_price_entry(PriceField::Max);
        // Prefill comes from the current bound; replace it with junk.
        while app.price_input.as_ref().is_some_and(|(_, s)| !s.is_empty()) {
            app.pop_price_char();
        }
        for c in "not a number".chars() {
            app.push_price_char(c);
        }
        app.commit_price_entry();
        assert_eq!(app.criteria.max_price, None);
        assert_eq!(app.results.len(), app.properties.len());
    }

    #[test]
    fn price_entry_cancel_keeps_previous_bound() {
        let mut app = app();
        app.criteria.min_price = Some(250_000.0);
        app.recompute();

        app.open_price_entry(PriceField::Min);
        app.push_price_char('9');
        app.cancel_price_entry();
        assert_eq!(app.criteria.min_price, Some(250_000.0));
    }

    #[test]
    fn price_entry_prefills_current_bound() {
        let mut app = app();
        app.criteria.min_price = Some(250_000.0);
        app.open_price_entry(PriceField::Min);
        assert_eq!(
            app.price_input,
            Some((PriceField::Min, "250000".to_string()))
        );
    }

    #[test]
    fn min_beds_saturates_at_zero() {
        let mut app = app();
        app.lower_min_beds();
        assert_eq!(app.criteria.min_beds, 0);
        app.raise_min_beds();
        app.raise_min_beds();
        assert_eq!(app.criteria.min_beds, 2);
    }
}
