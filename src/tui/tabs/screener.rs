//! Screener tab: condition editor, field catalog, and results.

use ratatui::{
    Frame,
    layout::{Constraint, Direction, Layout, Rect},
    style::{Color, Modifier, Style},
    text::Line,
    widgets::{Block, Borders, Cell, List, ListItem, ListState, Paragraph, Row, Table, Wrap},
};

use serde_json::Value;

use crate::tui::app::App;
use crate::util::format::{format_magnitude, truncate};

use super::note_area;

/// Renders the Screener tab.
pub fn render(frame: &mut Frame, area: Rect, app: &App) {
    let rows = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(8),
            Constraint::Length(7),
            Constraint::Min(5),
        ])
        .split(area);

    render_conditions(frame, rows[0], app);
    render_fields(frame, rows[1], app);
    render_results(frame, rows[2], app);
}

fn render_conditions(frame: &mut Frame, area: Rect, app: &App) {
    let block = Block::default()
        .title(format!(
            " Conditions ({}) [a:add e:edit d:del t:type r:fields Enter:run] ",
            app.screener.query_type.as_str()
        ))
        .borders(Borders::ALL)
        .border_style(Style::default().fg(Color::Cyan));
    let inner = block.inner(area);
    frame.render_widget(block, area);

    if app.screener.conditions.is_empty() {
        frame.render_widget(
            Paragraph::new("no conditions -- a to add, e.g. `marketCap > 1000000000`")
                .style(Style::default().fg(Color::DarkGray)),
            inner,
        );
        return;
    }
    let items: Vec<ListItem> = app
        .screener
        .conditions
        .iter()
        .map(|condition| ListItem::new(condition.to_string()))
        .collect();
    let list = List::new(items)
        .highlight_style(Style::default().bg(Color::DarkGray).add_modifier(Modifier::BOLD));
    let mut state = ListState::default().with_selected(Some(app.screener.selected));
    frame.render_stateful_widget(list, inner, &mut state);
}

fn render_fields(frame: &mut Frame, area: Rect, app: &App) {
    let block = Block::default()
        .title(" Available Fields ")
        .borders(Borders::ALL)
        .border_style(Style::default().fg(Color::DarkGray));
    let inner = block.inner(area);
    frame.render_widget(block, area);
    let inner = note_area(frame, inner, &app.screener.fields);

    let Some(catalog) = &app.screener.fields.data else {
        return;
    };
    let lines: Vec<Line> = catalog
        .fields
        .iter()
        .map(|(category, names)| {
            Line::from(format!("{category}: {}", truncate(&names.join(", "), 200)))
        })
        .collect();
    frame.render_widget(Paragraph::new(lines).wrap(Wrap { trim: true }), inner);
}

fn render_results(frame: &mut Frame, area: Rect, app: &App) {
    let count = app
        .screener
        .results
        .data
        .as_ref()
        .map_or(0, |found| found.count);
    let block = Block::default()
        .title(format!(" Results ({count}) "))
        .borders(Borders::ALL)
        .border_style(Style::default().fg(Color::DarkGray));
    let inner = block.inner(area);
    frame.render_widget(block, area);
    let inner = note_area(frame, inner, &app.screener.results);

    let Some(found) = &app.screener.results.data else {
        return;
    };
    let header = Row::new(["Symbol", "Name", "Mkt Cap", "Price"])
        .style(Style::default().add_modifier(Modifier::BOLD));
    let rows: Vec<Row> = found
        .results
        .iter()
        .map(|row| {
            Row::new(vec![
                Cell::from(field_str(row, &["symbol", "ticker"])),
                Cell::from(truncate(&field_str(row, &["shortName", "longName", "name"]), 32)),
                Cell::from(field_num(row, "marketCap").map_or_else(
                    || "N/A".to_string(),
                    format_magnitude,
                )),
                Cell::from(
                    field_num(row, "regularMarketPrice")
                        .map_or_else(|| "N/A".to_string(), |p| format!("{p:.2}")),
                ),
            ])
        })
        .collect();
    let table = Table::new(
        rows,
        [
            Constraint::Length(8),
            Constraint::Min(20),
            Constraint::Length(10),
            Constraint::Length(10),
        ],
    )
    .header(header);
    frame.render_widget(table, inner);
}

/// Result rows are loosely shaped; try a few known keys in order.
fn field_str(row: &serde_json::Map<String, Value>, keys: &[&str]) -> String {
    keys.iter()
        .find_map(|key| row.get(*key).and_then(Value::as_str))
        .unwrap_or("")
        .to_string()
}

fn field_num(row: &serde_json::Map<String, Value>, key: &str) -> Option<f64> {
    row.get(key).and_then(Value::as_f64)
}
