//! Sectors tab: sector/industry list with a detail pane.

use ratatui::{
    Frame,
    layout::{Constraint, Direction, Layout, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, List, ListItem, ListState, Paragraph, Wrap},
};

use crate::models::domain::DomainData;
use crate::tui::app::App;
use crate::util::format::{fit_width, format_pct, truncate};

use super::{note_area, opt_count, opt_magnitude};

/// Renders the Sectors tab.
pub fn render(frame: &mut Frame, area: Rect, app: &App) {
    let columns = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([Constraint::Length(34), Constraint::Min(30)])
        .split(area);

    render_list(frame, columns[0], app);
    render_detail(frame, columns[1], app);
}

fn render_list(frame: &mut Frame, area: Rect, app: &App) {
    let block = Block::default()
        .title(format!(" {} [s to switch] ", app.domain_kind.label()))
        .borders(Borders::ALL)
        .border_style(Style::default().fg(Color::Cyan));
    let inner = block.inner(area);
    frame.render_widget(block, area);
    let inner = note_area(frame, inner, app.current_domains());

    let Some(domains) = &app.current_domains().data else {
        return;
    };
    let items: Vec<ListItem> = domains
        .iter()
        .map(|domain| {
            ListItem::new(Line::from(vec![
                Span::raw(fit_width(display_name(domain), 22)),
                Span::styled(
                    format!(" {}", opt_magnitude(domain.overview.market_cap)),
                    Style::default().fg(Color::DarkGray),
                ),
            ]))
        })
        .collect();
    let list = List::new(items)
        .highlight_style(Style::default().bg(Color::DarkGray).add_modifier(Modifier::BOLD));
    let mut state = ListState::default().with_selected(Some(app.domain_index));
    frame.render_stateful_widget(list, inner, &mut state);
}

fn display_name(domain: &DomainData) -> &str {
    if domain.name.is_empty() {
        &domain.key
    } else {
        &domain.name
    }
}

fn render_detail(frame: &mut Frame, area: Rect, app: &App) {
    let selected = app
        .current_domains()
        .data
        .as_ref()
        .and_then(|domains| domains.get(app.domain_index));

    let title = selected.map_or_else(
        || " Overview ".to_string(),
        |domain| format!(" {} ", display_name(domain)),
    );
    let block = Block::default()
        .title(title)
        .borders(Borders::ALL)
        .border_style(Style::default().fg(Color::DarkGray));
    let inner = block.inner(area);
    frame.render_widget(block, area);

    let Some(domain) = selected else { return };
    let overview = &domain.overview;

    let mut lines = vec![
        Line::from(format!(
            "companies {}  industries {}  employees {}",
            opt_count(overview.companies_count),
            opt_count(overview.industries_count),
            opt_count(overview.employee_count),
        )),
        Line::from(format!(
            "market cap {}  weight {}",
            opt_magnitude(overview.market_cap),
            overview
                .market_weight
                .map_or_else(|| "N/A".to_string(), |w| format_pct(w * 100.0)),
        )),
    ];
    if let Some(description) = &overview.description {
        lines.push(Line::from(""));
        lines.push(Line::from(truncate(description, 400)));
    }
    if !domain.top_companies.is_empty() {
        lines.push(Line::from(""));
        lines.push(Line::styled(
            "Top companies",
            Style::default().add_modifier(Modifier::BOLD),
        ));
        for company in domain.top_companies.iter().take(8) {
            lines.push(Line::from(format!(
                "  {:<6} {} {}",
                company.symbol,
                truncate(&company.name, 28),
                company.rating.as_deref().unwrap_or(""),
            )));
        }
    }
    if !domain.research_reports.is_empty() {
        lines.push(Line::from(""));
        lines.push(Line::styled(
            "Research",
            Style::default().add_modifier(Modifier::BOLD),
        ));
        for report in domain.research_reports.iter().take(4) {
            lines.push(Line::from(format!(
                "  {} ({})",
                truncate(&report.title, 50),
                report.date
            )));
        }
    }
    frame.render_widget(Paragraph::new(lines).wrap(Wrap { trim: false }), inner);
}
