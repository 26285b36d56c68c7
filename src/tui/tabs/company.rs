//! Company tab: fast info, quote profile, volume analysis, and ownership.

use ratatui::{
    Frame,
    layout::{Constraint, Direction, Layout, Rect},
    style::{Color, Modifier, Style},
    text::Line,
    widgets::{Block, Borders, Cell, Paragraph, Row, Table, Wrap},
};

use crate::models::ownership::HolderRow;
use crate::tui::app::App;
use crate::util::format::{NA, format_timestamp, truncate};

use super::{change_color, note_area, opt_count, opt_magnitude, opt_pct, opt_price, opt_str};

/// Renders the Company tab.
pub fn render(frame: &mut Frame, area: Rect, app: &App) {
    let rows = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(11),
            Constraint::Length(7),
            Constraint::Min(6),
        ])
        .split(area);

    let top = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([Constraint::Percentage(50), Constraint::Percentage(50)])
        .split(rows[0]);
    render_fast_info(frame, top[0], app);
    render_profile(frame, top[1], app);

    render_volume(frame, rows[1], app);
    render_ownership(frame, rows[2], app);
}

fn render_fast_info(frame: &mut Frame, area: Rect, app: &App) {
    let block = Block::default()
        .title(format!(" {} [t to change] ", app.company_ticker))
        .borders(Borders::ALL)
        .border_style(Style::default().fg(Color::Cyan));
    let inner = block.inner(area);
    frame.render_widget(block, area);
    let inner = note_area(frame, inner, &app.fast_info);

    let Some(info) = &app.fast_info.data else {
        return;
    };
    let lines = vec![
        Line::from(format!(
            "{} on {}  ({})",
            opt_str(info.quote_type.as_ref()),
            opt_str(info.exchange.as_ref()),
            opt_str(info.currency.as_ref()),
        )),
        Line::from(format!(
            "last {}  prev close {}  open {}",
            opt_price(info.last_price),
            opt_price(info.previous_close),
            opt_price(info.open_price),
        )),
        Line::from(format!(
            "day {} - {}",
            opt_price(info.day_low),
            opt_price(info.day_high),
        )),
        Line::from(format!(
            "52wk {} - {}  change {}",
            opt_price(info.year_low),
            opt_price(info.year_high),
            opt_pct(info.year_change.map(|c| c * 100.0)),
        )),
        Line::from(format!("market cap {}", opt_magnitude(info.market_cap))),
        Line::from(format!(
            "volume {}  10d avg {}  3mo avg {}",
            opt_count(info.last_volume),
            opt_count(info.ten_day_average_volume),
            opt_count(info.three_month_average_volume),
        )),
        Line::from(format!(
            "50d avg {}  200d avg {}",
            opt_price(info.fifty_day_average),
            opt_price(info.two_hundred_day_average),
        )),
    ];
    frame.render_widget(Paragraph::new(lines), inner);
}

fn render_profile(frame: &mut Frame, area: Rect, app: &App) {
    let block = Block::default()
        .title(" Profile ")
        .borders(Borders::ALL)
        .border_style(Style::default().fg(Color::DarkGray));
    let inner = block.inner(area);
    frame.render_widget(block, area);
    let inner = note_area(frame, inner, &app.quote);

    let Some(quote) = &app.quote.data else { return };
    let mut lines = Vec::new();
    if let Some(name) = quote.info_str("longName") {
        lines.push(Line::styled(
            name.to_string(),
            Style::default().add_modifier(Modifier::BOLD),
        ));
    }
    let sector = quote.info_str("sector").unwrap_or(NA);
    let industry = quote.info_str("industry").unwrap_or(NA);
    lines.push(Line::from(format!("{sector} / {industry}")));
    if let Some(pe) = quote.info_num("trailingPE") {
        lines.push(Line::from(format!("trailing P/E {pe:.2}")));
    }
    if let Some(summary) = quote.summary() {
        lines.push(Line::from(""));
        lines.push(Line::from(summary.to_string()));
    }
    frame.render_widget(Paragraph::new(lines).wrap(Wrap { trim: true }), inner);
}

fn render_volume(frame: &mut Frame, area: Rect, app: &App) {
    let block = Block::default()
        .title(" Volume Analysis ")
        .borders(Borders::ALL)
        .border_style(Style::default().fg(Color::DarkGray));
    let inner = block.inner(area);
    frame.render_widget(block, area);
    let inner = note_area(frame, inner, &app.volume);

    let Some(report) = &app.volume.data else { return };
    let analysis = &report.volume_analysis;
    let ratio = analysis
        .volume_ratio
        .map_or_else(|| NA.to_string(), |r| format!("{r:.2}x"));
    let change = analysis.price_change_pct.unwrap_or(0.0);
    let lines = vec![
        Line::styled(
            report.volume_signal.clone(),
            Style::default().add_modifier(Modifier::BOLD),
        ),
        Line::from(format!(
            "volume {}  20d avg {}  ratio {ratio}",
            opt_count(analysis.current_volume),
            opt_count(analysis.avg_volume_20d),
        )),
        Line::styled(
            format!("price change {}", opt_pct(analysis.price_change_pct)),
            Style::default().fg(change_color(change)),
        ),
        Line::from(format!(
            "{}  {}  conviction: {}",
            opt_str(analysis.vo_signal.as_ref()),
            opt_str(analysis.pv_relationship.as_ref()),
            opt_str(analysis.conviction.as_ref()),
        )),
    ];
    frame.render_widget(Paragraph::new(lines), inner);
}

fn render_ownership(frame: &mut Frame, area: Rect, app: &App) {
    let timestamp = app
        .ownership
        .data
        .as_ref()
        .map(|record| format_timestamp(&record.last_updated))
        .unwrap_or_default();
    let block = Block::default()
        .title(format!(" Ownership {timestamp} "))
        .borders(Borders::ALL)
        .border_style(Style::default().fg(Color::DarkGray));
    let inner = block.inner(area);
    frame.render_widget(block, area);
    let inner = note_area(frame, inner, &app.ownership);

    let Some(record) = &app.ownership.data else {
        return;
    };
    let halves = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([Constraint::Percentage(50), Constraint::Percentage(50)])
        .split(inner);
    render_holders(frame, halves[0], "Institutional", &record.institutional_holders);
    render_holders(frame, halves[1], "Mutual Funds", &record.mutual_fund_holders);
}

fn render_holders(frame: &mut Frame, area: Rect, title: &str, holders: &[HolderRow]) {
    let header = Row::new([title, "Shares", "Value"])
        .style(Style::default().add_modifier(Modifier::BOLD));
    let rows: Vec<Row> = holders
        .iter()
        .map(|row| {
            Row::new(vec![
                Cell::from(truncate(&row.holder, 28)),
                Cell::from(opt_magnitude(row.shares)),
                Cell::from(opt_magnitude(row.value)),
            ])
        })
        .collect();
    let table = Table::new(
        rows,
        [
            Constraint::Min(20),
            Constraint::Length(9),
            Constraint::Length(9),
        ],
    )
    .header(header);
    frame.render_widget(table, area);
}
