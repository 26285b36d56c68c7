mod common;

use marketdeck::models::{
    AskResponse, DashboardBundle, MarketStatusMap, NewsFeed, OwnershipRecord, Sentiment, Signal,
    SignalKind, Trend,
};

#[test]
fn deserialize_dashboard_bundle() {
    let bundle: DashboardBundle = serde_json::from_str(common::DASHBOARD_JSON).unwrap();

    assert_eq!(bundle.stocks.len(), 2);
    let aapl = &bundle.stocks[0];
    assert_eq!(aapl.ticker, "AAPL");
    assert_eq!(aapl.price, 182.50);
    assert_eq!(aapl.trend, Trend::Bullish);
    assert_eq!(aapl.rsi_status, "NEUTRAL");
    assert_eq!(bundle.stocks[1].trend, Trend::Bearish);

    assert_eq!(bundle.news.len(), 3);
    assert_eq!(bundle.news[0].sentiment, Sentiment::Positive);
    assert_eq!(bundle.news[1].sentiment, Sentiment::Negative);
    assert_eq!(bundle.news[2].sentiment, Sentiment::Neutral);

    assert_eq!(bundle.signals.len(), 1);
    assert_eq!(bundle.signals[0].signal, SignalKind::StrongBuy);
    assert!(bundle.signals[0].signal.is_buy());
}

#[test]
fn unknown_trend_falls_back_to_neutral() {
    let json = r#"{"ticker": "X", "price": 1.0, "trend": "SIDEWAYS"}"#;
    let quote: marketdeck::models::StockQuote = serde_json::from_str(json).unwrap();
    assert_eq!(quote.trend, Trend::Neutral);
}

#[test]
fn trend_accepts_lowercase_alias() {
    let json = r#"{"ticker": "X", "price": 1.0, "trend": "bullish"}"#;
    let quote: marketdeck::models::StockQuote = serde_json::from_str(json).unwrap();
    assert_eq!(quote.trend, Trend::Bullish);
}

#[test]
fn unknown_signal_falls_back_to_hold() {
    let json = r#"{"ticker": "AAPL", "signal": "ACCUMULATE"}"#;
    let signal: Signal = serde_json::from_str(json).unwrap();
    assert_eq!(signal.signal, SignalKind::Hold);
    assert!(!signal.signal.is_buy());
    assert!(!signal.signal.is_sell());
}

#[test]
fn news_feed_accepts_both_wire_shapes() {
    let bare = r#"[{"title": "headline"}]"#;
    let wrapped = r#"{"news": [{"title": "headline"}, {"title": "second"}]}"#;

    let feed: NewsFeed = serde_json::from_str(bare).unwrap();
    assert_eq!(feed.into_items().len(), 1);

    let feed: NewsFeed = serde_json::from_str(wrapped).unwrap();
    let items = feed.into_items();
    assert_eq!(items.len(), 2);
    assert_eq!(items[1].title, "second");
}

#[test]
fn market_status_keeps_stable_order() {
    let map: MarketStatusMap = serde_json::from_str(common::MARKET_STATUS_JSON).unwrap();
    let names: Vec<&String> = map.markets.keys().collect();
    assert_eq!(names, ["LSE", "NYSE"]);
    assert!(map.markets["NYSE"].is_open);
    assert!(!map.markets["LSE"].is_open);
}

#[test]
fn ownership_reads_provider_cased_columns() {
    let record: OwnershipRecord = serde_json::from_str(common::OWNERSHIP_JSON).unwrap();
    assert_eq!(record.symbol, "AAPL");
    assert_eq!(record.institutional_holders.len(), 1);
    let top = &record.institutional_holders[0];
    assert_eq!(top.holder, "Vanguard Group");
    assert_eq!(top.shares, Some(1_310_000_000.0));
    assert_eq!(top.date_reported.as_deref(), Some("2026-06-30"));
}

#[test]
fn ask_reply_with_error_flag() {
    let json = r#"{
        "question": "Should I buy?",
        "answer": "Sorry, something went wrong.",
        "error": true
    }"#;
    let reply: AskResponse = serde_json::from_str(json).unwrap();
    assert_eq!(reply.error, Some(true));
    assert!(reply.ticker.is_none());
    assert!(reply.context.is_none());
}

#[test]
fn ask_reply_normal_shape() {
    let json = r#"{
        "question": "Should I buy?",
        "ticker": "AAPL",
        "answer": "Indicators lean bullish.",
        "context": {"price": 182.5},
        "timestamp": "2026-08-21T16:00:00"
    }"#;
    let reply: AskResponse = serde_json::from_str(json).unwrap();
    assert_eq!(reply.ticker.as_deref(), Some("AAPL"));
    assert!(reply.context.is_some());
    assert_eq!(reply.error, None);
}
