mod common;

use ratatui::{Terminal, backend::TestBackend};

use marketdeck::tui::{App, Message, render};

fn screen_text(app: &App) -> String {
    let backend = TestBackend::new(110, 32);
    let mut terminal = Terminal::new(backend).unwrap();
    terminal.draw(|frame| render(frame, app)).unwrap();
    let buffer = terminal.backend().buffer();
    let mut text = String::new();
    for y in 0..buffer.area.height {
        for x in 0..buffer.area.width {
            text.push_str(buffer.cell((x, y)).unwrap().symbol());
        }
        text.push('\n');
    }
    text
}

fn app_with_dashboard() -> App {
    let mut app = App::new(vec!["AAPL".to_string(), "MSFT".to_string()]);
    let bundle = serde_json::from_str(common::DASHBOARD_JSON).unwrap();
    app.handle_message(Message::Dashboard {
        seq: 1,
        result: Ok(bundle),
    });
    app
}

#[test]
fn dashboard_shows_stocks_signals_and_news() {
    let app = app_with_dashboard();
    let text = screen_text(&app);

    assert!(text.contains("AAPL"));
    assert!(text.contains("MSFT"));
    assert!(text.contains("$182.50"));
    assert!(text.contains("+1.25%"));
    assert!(text.contains("-0.40%"));
    assert_eq!(text.matches("STRONG BUY").count(), 1);
    assert!(text.contains("Apple unveils new chip line"));
    assert!(text.contains("News (3)"));
}

#[test]
fn news_panel_caps_at_five_items() {
    let mut app = App::new(vec!["AAPL".to_string()]);
    let mut value: serde_json::Value = serde_json::from_str(common::DASHBOARD_JSON).unwrap();
    value["news"] = serde_json::json!(
        (0..7)
            .map(|i| serde_json::json!({"title": format!("headline number {i}")}))
            .collect::<Vec<_>>()
    );
    let bundle = serde_json::from_value(value).unwrap();
    app.handle_message(Message::Dashboard {
        seq: 1,
        result: Ok(bundle),
    });
    let text = screen_text(&app);

    assert!(text.contains("News (7)"));
    for i in 0..5 {
        assert!(text.contains(&format!("headline number {i}")));
    }
    assert!(!text.contains("headline number 5"));
    assert!(!text.contains("headline number 6"));
}

#[test]
fn collapsed_news_hides_headlines() {
    let mut app = app_with_dashboard();
    app.news_collapsed = true;
    let text = screen_text(&app);

    assert!(text.contains("News (3)"));
    assert!(!text.contains("Apple unveils new chip line"));
}

#[test]
fn dashboard_error_shows_alongside_stale_data() {
    let mut app = app_with_dashboard();
    app.handle_message(Message::Dashboard {
        seq: 2,
        result: Err("connection refused".to_string()),
    });
    let text = screen_text(&app);

    // Last good data stays up, the failure is visible next to it.
    assert!(text.contains("AAPL"));
    assert!(text.contains("connection refused"));
}

#[test]
fn markets_tab_renders_open_and_closed() {
    let mut app = app_with_dashboard();
    app.active_tab = 1;
    let map = serde_json::from_str(common::MARKET_STATUS_JSON).unwrap();
    app.handle_message(Message::Markets {
        seq: 1,
        result: Ok(map),
    });
    let text = screen_text(&app);

    assert!(text.contains("NYSE"));
    assert!(text.contains("OPEN"));
    assert!(text.contains("LSE"));
    assert!(text.contains("CLOSED"));
}

#[test]
fn empty_dashboard_renders_placeholder() {
    let app = App::new(Vec::new());
    let text = screen_text(&app);
    assert!(text.contains("no data yet"));
}
