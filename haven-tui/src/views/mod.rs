//! View rendering dispatch.

pub mod properties;
pub mod swarm;

use crate::nav::View;
use crate::notifications::NotificationLevel;
use crate::state::{App, PriceField};
use ratatui::{
    layout::{Constraint, Direction, Layout},
    style::Style,
    text::Span,
    widgets::{Block, Borders, Clear, Paragraph, Wrap},
    Frame,
};

pub fn render_view(f: &mut Frame<'_>, app: &App) {
    let layout = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(3),
            Constraint::Min(0),
            Constraint::Length(2),
        ])
        .split(f.size());

    render_header(f, app, layout[0]);

    match app.active_view {
        View::PropertyBrowser => properties::render(f, app, layout[1]),
        View::SwarmMonitor => swarm::render(f, app, layout[1]),
    }

    render_footer(f, app, layout[2]);

    if let Some(modal) = &app.modal {
        render_modal(f, app, &modal.title, &modal.message);
    }
}

fn render_header(f: &mut Frame<'_>, app: &App, area: ratatui::layout::Rect) {
    let tabs: Vec<String> = View::all()
        .iter()
        .map(|view| {
            if *view == app.active_view {
                format!("[{}]", view.title())
            } else {
                format!(" {} ", view.title())
            }
        })
        .collect();
    let title = format!("HAVEN | {}", tabs.join(" "));
    let block = Block::default().borders(Borders::ALL).title(Span::styled(
        title,
        Style::default().fg(app.theme.primary),
    ));
    f.render_widget(block, area);
}

fn render_footer(f: &mut Frame<'_>, app: &App, area: ratatui::layout::Rect) {
    let help = match app.active_view {
        View::PropertyBrowser => {
            "j/k move • / search • s sort • f status • t type • c city • p/P price • +/- beds • x clear • Tab view • q quit"
        }
        View::SwarmMonitor => "Tab view • r refresh • ? help • q quit",
    };
    let (text, style) = if let Some(input) = &app.search_input {
        (
            format!("Search: {}_  (Enter apply, Esc cancel)", input),
            Style::default().fg(app.theme.secondary),
        )
    } else if let Some((field, input)) = &app.price_input {
        let label = match field {
            PriceField::Min => "Min price",
            PriceField::Max => "Max price",
        };
        (
            format!(
                "{}: {}_  (Enter apply, Esc cancel; blank or invalid clears)",
                label, input
            ),
            Style::default().fg(app.theme.secondary),
        )
    } else if let Some(note) = app.notifications.last() {
        let label = match note.level {
            NotificationLevel::Info => "INFO",
            NotificationLevel::Warning => "WARN",
            NotificationLevel::Error => "ERROR",
            NotificationLevel::Success => "SUCCESS",
        };
        let color = match note.level {
            NotificationLevel::Info => app.theme.info,
            NotificationLevel::Warning => app.theme.warning,
            NotificationLevel::Error => app.theme.error,
            NotificationLevel::Success => app.theme.success,
        };
        (
            format!("{}: {}", label, note.message),
            Style::default().fg(color),
        )
    } else {
        (help.to_string(), Style::default().fg(app.theme.text_dim))
    };
    let footer = Paragraph::new(text)
        .block(Block::default().borders(Borders::ALL))
        .style(style);
    f.render_widget(footer, area);
}

fn render_modal(f: &mut Frame<'_>, app: &App, title: &str, message: &str) {
    let area = centered_rect(60, 40, f.size());
    f.render_widget(Clear, area);
    let paragraph = Paragraph::new(message)
        .wrap(Wrap { trim: true })
        .block(
            Block::default()
                .title(title)
                .borders(Borders::ALL)
                .border_style(Style::default().fg(app.theme.border_focus)),
        );
    f.render_widget(paragraph, area);
}

fn centered_rect(
    percent_x: u16,
    percent_y: u16,
    area: ratatui::layout::Rect,
) -> ratatui::layout::Rect {
    let vertical = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Percentage((100 - percent_y) / 2),
            Constraint::Percentage(percent_y),
            Constraint::Percentage((100 - percent_y) / 2),
        ])
        .split(area);
    Layout::default()
        .direction(Direction::Horizontal)
        .constraints([
            Constraint::Percentage((100 - percent_x) / 2),
            Constraint::Percentage(percent_x),
            Constraint::Percentage((100 - percent_x) / 2),
        ])
        .split(vertical[1])[1]
}
