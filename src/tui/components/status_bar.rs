//! Status bar component.
//!
//! One line at the bottom: backend health, the current input field while in
//! insert mode, transient flash messages, and the active tab position.

use ratatui::{
    Frame,
    layout::Rect,
    style::{Color, Style},
    text::{Line, Span},
    widgets::Paragraph,
};

use crate::tui::app::{App, FlashLevel, Mode, TABS};

/// Renders the status bar.
pub fn render(frame: &mut Frame, area: Rect, app: &App) {
    let healthy = app
        .health
        .data
        .as_ref()
        .is_some_and(|status| status.is_healthy());
    let backend_span = if healthy {
        Span::styled(" Backend Up ", Style::default().fg(Color::Green))
    } else if app.health.is_initial() {
        Span::styled(" Backend ? ", Style::default().fg(Color::DarkGray))
    } else {
        Span::styled(" Backend Down ", Style::default().fg(Color::Red))
    };

    let middle = if app.mode == Mode::Insert {
        // Poor man's cursor: a caret at the cursor position.
        let text = app.input.as_str();
        let caret_at = app.input.cursor.min(text.chars().count());
        let before: String = text.chars().take(caret_at).collect();
        let after: String = text.chars().skip(caret_at).collect();
        vec![
            Span::styled(" > ", Style::default().fg(Color::Yellow)),
            Span::raw(before),
            Span::styled("\u{2588}", Style::default().fg(Color::Yellow)),
            Span::raw(after),
        ]
    } else if let Some(flash) = &app.status {
        let color = match flash.level {
            FlashLevel::Info => Color::Cyan,
            FlashLevel::Error => Color::Red,
        };
        vec![Span::styled(
            format!(" {} ", flash.message),
            Style::default().fg(color),
        )]
    } else {
        vec![Span::styled(
            " q:quit  Tab/1-6:switch  r:refresh ",
            Style::default().fg(Color::DarkGray),
        )]
    };

    let tab_info = format!(" {}/{} ", app.active_tab + 1, TABS.len());

    let mut spans = vec![backend_span, Span::raw("\u{2502}")];
    spans.extend(middle);
    spans.push(Span::raw(format!(
        "{:>width$}",
        tab_info,
        width = area.width.saturating_sub(40) as usize
    )));

    let para = Paragraph::new(Line::from(spans)).style(Style::default().bg(Color::DarkGray));
    frame.render_widget(para, area);
}
