//! Per-tab layouts and rendering.

pub mod assistant;
pub mod company;
pub mod dashboard;
pub mod markets;
pub mod screener;
pub mod sectors;

use ratatui::{
    Frame,
    layout::{Constraint, Direction, Layout, Rect},
    style::{Color, Style},
    text::Line,
    widgets::Paragraph,
};

use crate::models::{Sentiment, SignalKind, Trend};
use crate::poll::Resource;
use crate::util::format::NA;

/// Renders a one-line fetch status inside a panel when there is something to
/// say, returning the remaining area. Errors show alongside whatever stale
/// data the panel still holds.
pub(crate) fn note_area<T>(frame: &mut Frame, area: Rect, resource: &Resource<T>) -> Rect {
    let note = if let Some(err) = &resource.error {
        Some(Line::styled(
            format!("! {err}"),
            Style::default().fg(Color::Red),
        ))
    } else if resource.loading && resource.data.is_none() {
        Some(Line::styled(
            "loading...".to_string(),
            Style::default().fg(Color::Yellow),
        ))
    } else {
        None
    };
    let Some(note) = note else { return area };
    if area.height < 2 {
        return area;
    }
    let rows = Layout::default()
        .direction(Direction::Vertical)
        .constraints([Constraint::Length(1), Constraint::Min(0)])
        .split(area);
    frame.render_widget(Paragraph::new(note), rows[0]);
    rows[1]
}

pub(crate) fn trend_color(trend: Trend) -> Color {
    match trend {
        Trend::Bullish => Color::Green,
        Trend::Bearish => Color::Red,
        Trend::Neutral => Color::Yellow,
    }
}

pub(crate) fn sentiment_color(sentiment: Sentiment) -> Color {
    match sentiment {
        Sentiment::Positive => Color::Green,
        Sentiment::Negative => Color::Red,
        Sentiment::Neutral => Color::DarkGray,
    }
}

pub(crate) fn signal_color(kind: SignalKind) -> Color {
    if kind.is_buy() {
        Color::Green
    } else if kind.is_sell() {
        Color::Red
    } else {
        Color::Yellow
    }
}

/// Green for gains, red for losses.
pub(crate) fn change_color(value: f64) -> Color {
    if value >= 0.0 { Color::Green } else { Color::Red }
}

pub(crate) fn opt_price(value: Option<f64>) -> String {
    value.map_or_else(|| NA.to_string(), crate::util::format::format_price)
}

pub(crate) fn opt_magnitude(value: Option<f64>) -> String {
    value.map_or_else(|| NA.to_string(), crate::util::format::format_magnitude)
}

pub(crate) fn opt_count(value: Option<i64>) -> String {
    opt_magnitude(value.map(|v| v as f64))
}

pub(crate) fn opt_pct(value: Option<f64>) -> String {
    value.map_or_else(|| NA.to_string(), crate::util::format::format_pct)
}

pub(crate) fn opt_str(value: Option<&String>) -> &str {
    value.map_or(NA, String::as_str)
}
