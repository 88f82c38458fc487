//! Navigation and view switching utilities.

use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum View {
    PropertyBrowser,
    SwarmMonitor,
}

impl View {
    pub fn title(&self) -> &'static str {
        match self {
            View::PropertyBrowser => "Properties",
            View::SwarmMonitor => "Swarm",
        }
    }

    pub fn all() -> &'static [View] {
        &[View::PropertyBrowser, View::SwarmMonitor]
    }

    pub fn index(&self) -> usize {
        Self::all().iter().position(|v| v == self).unwrap_or(0)
    }

    pub fn from_index(index: usize) -> Option<View> {
        Self::all().get(index).copied()
    }

    pub fn next(&self) -> View {
        let all = Self::all();
        all[(self.index() + 1) % all.len()]
    }

    pub fn previous(&self) -> View {
        let all = Self::all();
        let idx = self.index();
        all[if idx == 0 { all.len() - 1 } else { idx - 1 }]
    }
}
