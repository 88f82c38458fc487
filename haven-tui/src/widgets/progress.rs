//! Progress gauge widget for task completion.

use ratatui::{
    layout::Rect,
    style::Style,
    widgets::{Block, Borders, Gauge},
    Frame,
};

pub struct ProgressBar {
    pub title: String,
    /// 0.0..=1.0; callers derive this from already-clamped percentages.
    pub ratio: f64,
    pub style: Style,
}

impl ProgressBar {
    pub fn render(&self, f: &mut Frame<'_>, area: Rect) {
        let gauge = Gauge::default()
            .block(
                Block::default()
                    .title(self.title.as_str())
                    .borders(Borders::ALL),
            )
            .gauge_style(self.style)
            .ratio(self.ratio.clamp(0.0, 1.0));
        f.render_widget(gauge, area);
    }
}
