//! Markets tab: exchange open/closed board.

use ratatui::{
    Frame,
    layout::{Constraint, Direction, Layout, Rect},
    style::{Color, Modifier, Style},
    widgets::{Block, Borders, Cell, Paragraph, Row, Table},
};

use crate::tui::app::App;
use crate::util::format::format_timestamp;

use super::{note_area, opt_str};

/// Renders the Markets tab.
pub fn render(frame: &mut Frame, area: Rect, app: &App) {
    let rows = Layout::default()
        .direction(Direction::Vertical)
        .constraints([Constraint::Min(6), Constraint::Length(3)])
        .split(area);

    render_board(frame, rows[0], app);
    render_backend(frame, rows[1], app);
}

fn render_board(frame: &mut Frame, area: Rect, app: &App) {
    let timestamp = app
        .markets
        .data
        .as_ref()
        .map(|map| format_timestamp(&map.timestamp))
        .unwrap_or_default();
    let block = Block::default()
        .title(format!(" Exchanges {timestamp} "))
        .borders(Borders::ALL)
        .border_style(Style::default().fg(Color::DarkGray));
    let inner = block.inner(area);
    frame.render_widget(block, area);
    let inner = note_area(frame, inner, &app.markets);

    let Some(map) = &app.markets.data else { return };

    let header = Row::new(["Market", "Status", "Opens", "Closes", "Timezone"])
        .style(Style::default().add_modifier(Modifier::BOLD));
    let rows: Vec<Row> = map
        .markets
        .values()
        .map(|status| {
            let (label, color) = if status.is_open {
                ("OPEN", Color::Green)
            } else {
                ("CLOSED", Color::Red)
            };
            Row::new(vec![
                Cell::from(status.market.clone()),
                Cell::from(label).style(Style::default().fg(color)),
                Cell::from(opt_str(status.open_time.as_ref()).to_string()),
                Cell::from(opt_str(status.close_time.as_ref()).to_string()),
                Cell::from(opt_str(status.timezone.as_ref()).to_string()),
            ])
        })
        .collect();

    let table = Table::new(
        rows,
        [
            Constraint::Length(16),
            Constraint::Length(8),
            Constraint::Length(10),
            Constraint::Length(10),
            Constraint::Min(16),
        ],
    )
    .header(header);
    frame.render_widget(table, inner);
}

fn render_backend(frame: &mut Frame, area: Rect, app: &App) {
    let block = Block::default()
        .title(" Backend ")
        .borders(Borders::ALL)
        .border_style(Style::default().fg(Color::DarkGray));
    let inner = block.inner(area);
    frame.render_widget(block, area);

    let text = match (&app.health.data, &app.health.error) {
        (Some(status), _) => format!(
            "status: {}  (checked {})",
            status.status,
            format_timestamp(&status.timestamp)
        ),
        (None, Some(err)) => format!("unreachable: {err}"),
        (None, None) => "probing...".to_string(),
    };
    frame.render_widget(Paragraph::new(text), inner);
}
