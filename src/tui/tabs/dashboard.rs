//! Dashboard tab: watchlist table, signals, and the news feed.

use ratatui::{
    Frame,
    layout::{Constraint, Direction, Layout, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Cell, List, ListItem, Paragraph, Row, Table},
};

use crate::tui::app::App;
use crate::util::format::{
    format_magnitude, format_price, format_signed_pct, format_timestamp, truncate,
};

use super::{change_color, note_area, sentiment_color, signal_color, trend_color};

/// At most this many headlines are rendered even when more arrive.
pub const MAX_NEWS_SHOWN: usize = 5;

/// Renders the Dashboard tab.
pub fn render(frame: &mut Frame, area: Rect, app: &App) {
    let news_height = if app.news_collapsed {
        3
    } else {
        MAX_NEWS_SHOWN as u16 + 2
    };
    let rows = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Min(6),
            Constraint::Length(7),
            Constraint::Length(news_height),
        ])
        .split(area);

    render_stocks(frame, rows[0], app);
    render_signals(frame, rows[1], app);
    render_news(frame, rows[2], app);
}

fn render_stocks(frame: &mut Frame, area: Rect, app: &App) {
    let timestamp = app
        .dashboard
        .data
        .as_ref()
        .map(|bundle| format_timestamp(&bundle.timestamp))
        .unwrap_or_default();
    let block = Block::default()
        .title(format!(" Watchlist {timestamp} "))
        .borders(Borders::ALL)
        .border_style(Style::default().fg(Color::DarkGray));
    let inner = block.inner(area);
    frame.render_widget(block, area);
    let inner = note_area(frame, inner, &app.dashboard);

    let Some(bundle) = &app.dashboard.data else {
        if !app.dashboard.loading {
            frame.render_widget(Paragraph::new("no data yet (press r)"), inner);
        }
        return;
    };

    let header = Row::new(["Ticker", "Price", "1D", "5D", "RSI", "MACD", "Trend", "Volume"])
        .style(Style::default().add_modifier(Modifier::BOLD));

    let rows: Vec<Row> = bundle
        .stocks
        .iter()
        .enumerate()
        .map(|(i, stock)| {
            let row = Row::new(vec![
                Cell::from(stock.ticker.clone()),
                Cell::from(format_price(stock.price)),
                Cell::from(format_signed_pct(stock.price_change_1d))
                    .style(Style::default().fg(change_color(stock.price_change_1d))),
                Cell::from(format_signed_pct(stock.price_change_5d))
                    .style(Style::default().fg(change_color(stock.price_change_5d))),
                Cell::from(format!("{:.1} {}", stock.rsi, truncate(&stock.rsi_status, 10))),
                Cell::from(format!("{:.2}", stock.macd)),
                Cell::from(stock.trend.label())
                    .style(Style::default().fg(trend_color(stock.trend))),
                Cell::from(format_magnitude(stock.volume as f64)),
            ]);
            if i == app.selected_stock {
                row.style(Style::default().bg(Color::DarkGray))
            } else {
                row
            }
        })
        .collect();

    let table = Table::new(
        rows,
        [
            Constraint::Length(8),
            Constraint::Length(10),
            Constraint::Length(8),
            Constraint::Length(8),
            Constraint::Length(16),
            Constraint::Length(8),
            Constraint::Length(8),
            Constraint::Length(9),
        ],
    )
    .header(header);
    frame.render_widget(table, inner);
}

fn render_signals(frame: &mut Frame, area: Rect, app: &App) {
    let block = Block::default()
        .title(" Signals ")
        .borders(Borders::ALL)
        .border_style(Style::default().fg(Color::DarkGray));
    let inner = block.inner(area);
    frame.render_widget(block, area);

    let Some(bundle) = &app.dashboard.data else {
        return;
    };
    let items: Vec<ListItem> = bundle
        .signals
        .iter()
        .map(|signal| {
            let reason = signal
                .reasoning
                .first()
                .map(|line| truncate(line, 70))
                .unwrap_or_default();
            ListItem::new(Line::from(vec![
                Span::styled(
                    format!("{:<6}", signal.ticker),
                    Style::default().add_modifier(Modifier::BOLD),
                ),
                Span::styled(
                    format!(" {:<11}", signal.signal.label()),
                    Style::default().fg(signal_color(signal.signal)),
                ),
                Span::raw(" "),
                Span::styled(reason, Style::default().fg(Color::Gray)),
            ]))
        })
        .collect();
    frame.render_widget(List::new(items), inner);
}

fn render_news(frame: &mut Frame, area: Rect, app: &App) {
    let total = app
        .dashboard
        .data
        .as_ref()
        .map_or(0, |bundle| bundle.news.len());
    let title = if app.news_collapsed {
        format!(" News ({total}) [n to expand] ")
    } else {
        format!(" News ({total}) ")
    };
    let block = Block::default()
        .title(title)
        .borders(Borders::ALL)
        .border_style(Style::default().fg(Color::DarkGray));
    let inner = block.inner(area);
    frame.render_widget(block, area);

    if app.news_collapsed {
        return;
    }
    let Some(bundle) = &app.dashboard.data else {
        return;
    };
    let items: Vec<ListItem> = bundle
        .news
        .iter()
        .take(MAX_NEWS_SHOWN)
        .map(|item| {
            ListItem::new(Line::from(vec![
                Span::styled(
                    format!("[{:<8}]", item.sentiment.label()),
                    Style::default().fg(sentiment_color(item.sentiment)),
                ),
                Span::raw(" "),
                Span::raw(truncate(&item.title, 80)),
                Span::styled(
                    format!("  ({})", item.source),
                    Style::default().fg(Color::DarkGray),
                ),
            ]))
        })
        .collect();
    frame.render_widget(List::new(items), inner);
}
