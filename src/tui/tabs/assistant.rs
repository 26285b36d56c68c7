//! Assistant tab: question/answer transcript.

use ratatui::{
    Frame,
    layout::{Constraint, Direction, Layout, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph, Wrap},
};

use crate::models::ChatRole;
use crate::tui::app::App;

/// Renders the Assistant tab.
pub fn render(frame: &mut Frame, area: Rect, app: &App) {
    let rows = Layout::default()
        .direction(Direction::Vertical)
        .constraints([Constraint::Min(5), Constraint::Length(1)])
        .split(area);

    render_transcript(frame, rows[0], app);

    let help = Paragraph::new(format!(
        " i:ask  u:quick question  context: {} ",
        app.company_ticker
    ))
    .style(Style::default().fg(Color::DarkGray));
    frame.render_widget(help, rows[1]);
}

fn render_transcript(frame: &mut Frame, area: Rect, app: &App) {
    let block = Block::default()
        .title(" Assistant ")
        .borders(Borders::ALL)
        .border_style(Style::default().fg(Color::Cyan));
    let inner = block.inner(area);
    frame.render_widget(block, area);

    let mut lines: Vec<Line> = Vec::new();
    for message in &app.chat.messages {
        let (prefix, color) = match message.role {
            ChatRole::User => ("you", Color::Cyan),
            ChatRole::Assistant => ("ai ", Color::Green),
            ChatRole::System => ("sys", Color::DarkGray),
        };
        lines.push(Line::from(vec![
            Span::styled(
                format!("[{}] {prefix}> ", message.timestamp),
                Style::default().fg(color).add_modifier(Modifier::BOLD),
            ),
            Span::raw(message.text.clone()),
        ]));
    }
    if app.chat.waiting {
        lines.push(Line::styled(
            "thinking...",
            Style::default().fg(Color::Yellow),
        ));
    }

    // Keep the tail visible once the transcript outgrows the pane.
    let height = inner.height as usize;
    let scroll = lines.len().saturating_sub(height) as u16;
    frame.render_widget(
        Paragraph::new(lines).wrap(Wrap { trim: false }).scroll((scroll, 0)),
        inner,
    );
}
