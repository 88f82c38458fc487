//! Swarm task monitor view.

use crate::state::App;
use crate::theme::{progress_color, task_status_color};
use crate::widgets::{DetailField, DetailPanel, ProgressBar};
use haven_core::{SwarmTask, TaskStatus};
use ratatui::{
    layout::{Constraint, Direction, Layout, Rect},
    style::Style,
    text::{Line, Span},
    widgets::{Block, Borders, List, ListItem, Paragraph},
    Frame,
};

pub fn render(f: &mut Frame<'_>, app: &App, area: Rect) {
    let Some(task) = &app.task else {
        let empty = Paragraph::new("No active task. The swarm is idle.")
            .style(Style::default().fg(app.theme.text_dim))
            .block(Block::default().title("Swarm").borders(Borders::ALL));
        f.render_widget(empty, area);
        return;
    };

    let mut constraints = vec![
        Constraint::Length(3),
        Constraint::Length(3),
        Constraint::Min(0),
    ];
    if app.progress.show_synthesis {
        constraints.push(Constraint::Length(6));
    }
    let rows = Layout::default()
        .direction(Direction::Vertical)
        .constraints(constraints)
        .split(area);

    render_task_header(f, app, task, rows[0]);
    render_overall_progress(f, app, rows[1]);
    render_subtasks(f, app, task, rows[2]);
    if app.progress.show_synthesis {
        render_synthesis(f, app, task, rows[3]);
    }
}

fn render_task_header(f: &mut Frame<'_>, app: &App, task: &SwarmTask, area: Rect) {
    let columns = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([Constraint::Min(0), Constraint::Length(16)])
        .split(area);

    let query = Paragraph::new(task.query.clone())
        .style(Style::default().fg(app.theme.text))
        .block(Block::default().title("Task").borders(Borders::ALL));
    f.render_widget(query, columns[0]);

    let status = Paragraph::new(format!("{} {}", task.status.glyph(), task.status))
        .style(Style::default().fg(task_status_color(task.status, &app.theme)))
        .block(Block::default().title("Status").borders(Borders::ALL));
    f.render_widget(status, columns[1]);
}

fn render_overall_progress(f: &mut Frame<'_>, app: &App, area: Rect) {
    let progress = &app.progress;
    let bar = ProgressBar {
        title: format!("Progress {}/{}", progress.completed, progress.total),
        ratio: f64::from(progress.percent) / 100.0,
        style: Style::default().fg(progress_color(progress.percent, &app.theme)),
    };
    bar.render(f, area);
}

fn render_subtasks(f: &mut Frame<'_>, app: &App, task: &SwarmTask, area: Rect) {
    if task.subtasks.is_empty() {
        let empty = Paragraph::new("0/0 subtasks")
            .style(Style::default().fg(app.theme.text_dim))
            .block(Block::default().title("Subtasks").borders(Borders::ALL));
        f.render_widget(empty, area);
        return;
    }

    let items: Vec<ListItem> = task
        .subtasks
        .iter()
        .map(|s| {
            let color = task_status_color(s.status, &app.theme);
            let mut spans = vec![
                Span::styled(format!("{} ", s.status.glyph()), Style::default().fg(color)),
                Span::styled(
                    format!("{:<12}", s.agent_name),
                    Style::default().fg(app.theme.secondary),
                ),
                Span::raw(format!(" {}", s.description)),
            ];
            match s.status {
                TaskStatus::Running => {
                    spans.push(Span::styled(
                        format!("  {}%", (s.progress_ratio() * 100.0).round() as u8),
                        Style::default().fg(color),
                    ));
                }
                TaskStatus::Completed => {
                    if let Some(ms) = s.duration_ms {
                        spans.push(Span::styled(
                            format!("  {:.1}s", ms as f64 / 1_000.0),
                            Style::default().fg(app.theme.text_dim),
                        ));
                    }
                }
                TaskStatus::Queued | TaskStatus::Failed => {}
            }
            ListItem::new(Line::from(spans))
        })
        .collect();

    let list = List::new(items).block(Block::default().title("Subtasks").borders(Borders::ALL));
    f.render_widget(list, area);
}

fn render_synthesis(f: &mut Frame<'_>, app: &App, task: &SwarmTask, area: Rect) {
    // Guarded by the gating rule: only reached when the task completed and
    // a result is present.
    let mut fields = Vec::new();
    if let Some(result) = &task.synthesized_result {
        fields.push(DetailField::styled(
            "Result",
            result.clone(),
            Style::default().fg(app.theme.success),
        ));
    }
    if let Some(ms) = task.total_duration_ms {
        fields.push(DetailField::plain(
            "Total time",
            format!("{:.1}s", ms as f64 / 1_000.0),
        ));
    }
    let detail = DetailPanel {
        title: "Synthesis",
        fields,
        label_style: Style::default().fg(app.theme.primary),
        value_style: Style::default().fg(app.theme.text),
    };
    detail.render(f, area);
}
