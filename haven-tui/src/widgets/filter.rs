//! Filter bar summarizing the active query constraints.

use ratatui::{
    layout::Rect,
    style::Style,
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph},
    Frame,
};

#[derive(Debug, Clone)]
pub struct FilterOption {
    pub label: String,
    pub active: bool,
}

pub struct FilterBar<'a> {
    pub filters: &'a [FilterOption],
    pub active_style: Style,
    pub inactive_style: Style,
}

impl<'a> FilterBar<'a> {
    /// Renders the options separated by `│`, with a count of active
    /// constraints in the block title so a narrow terminal still shows
    /// whether the result set is filtered.
    pub fn render(&self, f: &mut Frame<'_>, area: Rect) {
        let active = self.filters.iter().filter(|o| o.active).count();
        let title = if active == 0 {
            "Filters".to_string()
        } else {
            format!("Filters ({} active)", active)
        };

        let mut spans: Vec<Span> = Vec::with_capacity(self.filters.len() * 2);
        for (i, option) in self.filters.iter().enumerate() {
            if i > 0 {
                spans.push(Span::styled(" │ ", self.inactive_style));
            }
            let style = if option.active {
                self.active_style
            } else {
                self.inactive_style
            };
            spans.push(Span::styled(option.label.clone(), style));
        }

        let paragraph = Paragraph::new(Line::from(spans))
            .block(Block::default().title(title).borders(Borders::ALL));
        f.render_widget(paragraph, area);
    }
}
