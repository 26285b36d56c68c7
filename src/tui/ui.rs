//! Main UI rendering coordinator.

use ratatui::{
    Frame,
    layout::{Constraint, Direction, Layout},
};

use super::app::{App, Tab};
use super::components::{status_bar, tab_bar};
use super::tabs::{assistant, company, dashboard, markets, screener, sectors};

/// Renders the entire application UI.
pub fn render(frame: &mut Frame, app: &App) {
    let layout = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(1), // Tab bar
            Constraint::Min(8),    // Active tab body
            Constraint::Length(1), // Status bar
        ])
        .split(frame.area());

    tab_bar::render(frame, layout[0], app);

    match app.current_tab() {
        Tab::Dashboard => dashboard::render(frame, layout[1], app),
        Tab::Markets => markets::render(frame, layout[1], app),
        Tab::Company => company::render(frame, layout[1], app),
        Tab::Sectors => sectors::render(frame, layout[1], app),
        Tab::Screener => screener::render(frame, layout[1], app),
        Tab::Assistant => assistant::render(frame, layout[1], app),
    }

    status_bar::render(frame, layout[2], app);
}
