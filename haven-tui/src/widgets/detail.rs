//! Labelled field list for the detail panes.

use ratatui::{
    layout::Rect,
    style::Style,
    text::{Line, Span, Text},
    widgets::{Block, Borders, Paragraph, Wrap},
    Frame,
};

/// One row of a detail pane. `value_style` overrides the pane default so a
/// single field (listing status, synthesis result) can carry its own color.
pub struct DetailField {
    pub label: &'static str,
    pub value: String,
    pub value_style: Option<Style>,
}

impl DetailField {
    pub fn plain(label: &'static str, value: impl Into<String>) -> Self {
        Self {
            label,
            value: value.into(),
            value_style: None,
        }
    }

    pub fn styled(label: &'static str, value: impl Into<String>, style: Style) -> Self {
        Self {
            label,
            value: value.into(),
            value_style: Some(style),
        }
    }
}

pub struct DetailPanel<'a> {
    pub title: &'a str,
    pub fields: Vec<DetailField>,
    pub label_style: Style,
    pub value_style: Style,
}

impl<'a> DetailPanel<'a> {
    pub fn render(&self, f: &mut Frame<'_>, area: Rect) {
        let lines: Vec<Line> = self
            .fields
            .iter()
            .map(|field| {
                Line::from(vec![
                    Span::styled(format!("{}: ", field.label), self.label_style),
                    Span::styled(
                        field.value.clone(),
                        field.value_style.unwrap_or(self.value_style),
                    ),
                ])
            })
            .collect();

        let widget = Paragraph::new(Text::from(lines))
            .block(Block::default().title(self.title).borders(Borders::ALL))
            .wrap(Wrap { trim: true });

        f.render_widget(widget, area);
    }
}
