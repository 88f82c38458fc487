//! Property browser view.

use crate::state::App;
use crate::theme::listing_status_color;
use crate::widgets::{DetailField, DetailPanel, FilterBar, FilterOption};
use ratatui::{
    layout::{Constraint, Direction, Layout, Rect},
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, List, ListItem, ListState, Paragraph},
    Frame,
};

pub fn render(f: &mut Frame<'_>, app: &App, area: Rect) {
    let rows = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(3),
            Constraint::Min(0),
            Constraint::Length(3),
        ])
        .split(area);

    render_filter_bar(f, app, rows[0]);

    let columns = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([Constraint::Percentage(60), Constraint::Percentage(40)])
        .split(rows[1]);

    render_results(f, app, columns[0]);
    render_detail_panel(f, app, columns[1]);
    render_summary(f, app, rows[2]);
}

fn render_filter_bar(f: &mut Frame<'_>, app: &App, area: Rect) {
    let criteria = &app.criteria;
    let filters = [
        FilterOption {
            label: if criteria.query.is_empty() {
                "search: —".to_string()
            } else {
                format!("search: \"{}\"", criteria.query)
            },
            active: !criteria.query.is_empty(),
        },
        FilterOption {
            label: format!("city: {}", criteria.city.as_deref().unwrap_or("all")),
            active: criteria.city.is_some(),
        },
        FilterOption {
            label: match criteria.property_type {
                Some(t) => format!("type: {}", t),
                None => "type: all".to_string(),
            },
            active: criteria.property_type.is_some(),
        },
        FilterOption {
            label: match criteria.status {
                Some(s) => format!("status: {}", s),
                None => "status: all".to_string(),
            },
            active: criteria.status.is_some(),
        },
        FilterOption {
            label: match (criteria.min_price, criteria.max_price) {
                (None, None) => "price: any".to_string(),
                (Some(min), None) => format!("price: ${:.0}+", min),
                (None, Some(max)) => format!("price: up to ${:.0}", max),
                (Some(min), Some(max)) => format!("price: ${:.0}-${:.0}", min, max),
            },
            active: criteria.min_price.is_some() || criteria.max_price.is_some(),
        },
        FilterOption {
            label: format!("beds: {}+", criteria.min_beds),
            active: criteria.min_beds > 0,
        },
        FilterOption {
            label: format!("sort: {}", app.sort_key.label()),
            active: true,
        },
    ];

    let bar = FilterBar {
        filters: &filters,
        active_style: Style::default()
            .fg(app.theme.primary)
            .add_modifier(Modifier::BOLD),
        inactive_style: Style::default().fg(app.theme.text_dim),
    };
    bar.render(f, area);
}

fn render_results(f: &mut Frame<'_>, app: &App, area: Rect) {
    if app.results.is_empty() {
        let empty = Paragraph::new("No listings match the current filters.")
            .style(Style::default().fg(app.theme.text_dim))
            .block(Block::default().title("Listings").borders(Borders::ALL));
        f.render_widget(empty, area);
        return;
    }

    let items: Vec<ListItem> = app
        .results
        .iter()
        .map(|p| {
            let status = Span::styled(
                format!("{:<8}", p.status.to_string()),
                Style::default().fg(listing_status_color(p.status, &app.theme)),
            );
            let line = Line::from(vec![
                status,
                Span::raw(format!(
                    " ${:>9.0}  {} bd  {:>5} sqft  {}, {}",
                    p.price, p.beds, p.sqft, p.address, p.city
                )),
            ]);
            ListItem::new(line)
        })
        .collect();

    let list = List::new(items)
        .block(Block::default().title("Listings").borders(Borders::ALL))
        .highlight_style(
            Style::default()
                .fg(app.theme.primary)
                .bg(app.theme.bg_highlight),
        );

    let mut state = ListState::default();
    state.select(app.selected);
    f.render_stateful_widget(list, area, &mut state);
}

fn render_detail_panel(f: &mut Frame<'_>, app: &App, area: Rect) {
    let mut fields = Vec::new();
    if let Some(p) = app.selected_property() {
        fields.push(DetailField::plain("ID", p.id.clone()));
        fields.push(DetailField::plain(
            "Address",
            format!("{}, {}", p.address, p.city),
        ));
        fields.push(DetailField::plain("Type", p.property_type.to_string()));
        fields.push(DetailField::styled(
            "Status",
            p.status.to_string(),
            Style::default().fg(listing_status_color(p.status, &app.theme)),
        ));
        fields.push(DetailField::plain("Price", format!("${:.0}", p.price)));
        fields.push(DetailField::plain("Beds", p.beds.to_string()));
        fields.push(DetailField::plain("Sqft", p.sqft.to_string()));
        fields.push(DetailField::plain(
            "Days on market",
            p.days_on_market.to_string(),
        ));
        fields.push(DetailField::plain("Description", p.description.clone()));
        if !p.features.is_empty() {
            fields.push(DetailField::plain("Features", p.features.join(", ")));
        }
    }

    let detail = DetailPanel {
        title: "Details",
        fields,
        label_style: Style::default().fg(app.theme.secondary),
        value_style: Style::default().fg(app.theme.text),
    };
    detail.render(f, area);
}

fn render_summary(f: &mut Frame<'_>, app: &App, area: Rect) {
    let text = format!(
        "{} listings • avg ${:.0}",
        app.summary.count, app.summary.average_price
    );
    let summary = Paragraph::new(text)
        .style(Style::default().fg(app.theme.text))
        .block(Block::default().title("Summary").borders(Borders::ALL));
    f.render_widget(summary, area);
}
