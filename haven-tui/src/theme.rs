//! Hearthglow theme and color utilities.

use haven_core::{ListingStatus, TaskStatus};
use ratatui::style::Color;

#[derive(Debug, Clone)]
pub struct HearthglowTheme {
    pub bg: Color,
    pub bg_highlight: Color,
    pub primary: Color,
    pub primary_dim: Color,
    pub secondary: Color,
    pub success: Color,
    pub warning: Color,
    pub error: Color,
    pub info: Color,
    pub text: Color,
    pub text_dim: Color,
    pub border: Color,
    pub border_focus: Color,
}

impl HearthglowTheme {
    pub fn hearthglow() -> Self {
        Self {
            bg: Color::Rgb(18, 14, 12),
            bg_highlight: Color::Rgb(46, 36, 30),
            primary: Color::Rgb(255, 166, 77),
            primary_dim: Color::Rgb(153, 99, 46),
            secondary: Color::Rgb(122, 203, 255),
            success: Color::Rgb(120, 220, 120),
            warning: Color::Rgb(240, 200, 80),
            error: Color::Rgb(235, 90, 90),
            info: Color::Rgb(122, 203, 255),
            text: Color::Rgb(238, 232, 225),
            text_dim: Color::Rgb(140, 130, 120),
            border: Color::Rgb(90, 76, 66),
            border_focus: Color::Rgb(255, 166, 77),
        }
    }
}

pub fn listing_status_color(status: ListingStatus, theme: &HearthglowTheme) -> Color {
    match status {
        ListingStatus::Active => theme.success,
        ListingStatus::New => theme.info,
        ListingStatus::Pending => theme.warning,
        ListingStatus::Sold => theme.text_dim,
    }
}

pub fn task_status_color(status: TaskStatus, theme: &HearthglowTheme) -> Color {
    match status {
        TaskStatus::Queued => theme.text_dim,
        TaskStatus::Running => theme.primary,
        TaskStatus::Completed => theme.success,
        TaskStatus::Failed => theme.error,
    }
}

pub fn progress_color(percent: u8, theme: &HearthglowTheme) -> Color {
    if percent >= 100 {
        theme.success
    } else if percent >= 50 {
        theme.primary
    } else {
        theme.warning
    }
}
