//! Shared test fixtures: canned backend payloads.
//!
//! Not every test binary uses every fixture.
#![allow(dead_code)]

/// A `/dashboard` payload with two stocks, three news items, one signal.
pub const DASHBOARD_JSON: &str = r#"{
    "stocks": [
        {
            "ticker": "AAPL",
            "price": 182.50,
            "price_change_1d": 1.25,
            "price_change_5d": -0.68,
            "rsi": 67.2,
            "rsi_status": "NEUTRAL",
            "macd": 1.85,
            "macd_signal": 1.60,
            "ema20": 180.10,
            "bollinger_high": 188.00,
            "bollinger_low": 175.50,
            "atr": 3.42,
            "trend": "BULLISH",
            "volume": 58234100,
            "last_updated": "2026-08-21T15:59:00.000000"
        },
        {
            "ticker": "MSFT",
            "price": 411.20,
            "price_change_1d": -0.40,
            "price_change_5d": 2.10,
            "rsi": 71.8,
            "rsi_status": "OVERBOUGHT",
            "macd": -0.52,
            "macd_signal": -0.31,
            "ema20": 408.90,
            "bollinger_high": 420.00,
            "bollinger_low": 398.20,
            "atr": 5.10,
            "trend": "BEARISH",
            "volume": 21500000,
            "last_updated": "2026-08-21T15:59:00.000000"
        }
    ],
    "news": [
        {
            "title": "Apple unveils new chip line",
            "url": "https://example.com/a",
            "source": "Newswire",
            "published_at": "2026-08-21T12:00:00",
            "content": "",
            "sentiment": "positive",
            "confidence": 0.91
        },
        {
            "title": "Tech stocks slip on rate fears",
            "url": "https://example.com/b",
            "source": "Business Daily",
            "published_at": "2026-08-21T11:30:00",
            "content": "",
            "sentiment": "negative",
            "confidence": 0.77
        },
        {
            "title": "Quarterly earnings season opens",
            "url": "https://example.com/c",
            "source": "Markets Desk",
            "published_at": "2026-08-21T10:00:00",
            "content": "",
            "sentiment": "neutral",
            "confidence": 0.50
        }
    ],
    "signals": [
        {
            "ticker": "AAPL",
            "signal": "STRONG_BUY",
            "signals": ["RSI_NEUTRAL", "MACD_CROSS"],
            "reasoning": ["MACD crossed above signal line", "Price above EMA20"],
            "generated_at": "2026-08-21T15:59:30.000000"
        }
    ],
    "timestamp": "2026-08-21T16:00:00.000000"
}"#;

/// A `/market/status` payload with one open and one closed exchange.
pub const MARKET_STATUS_JSON: &str = r#"{
    "markets": {
        "NYSE": {
            "market": "NYSE",
            "is_open": true,
            "open_time": "09:30",
            "close_time": "16:00",
            "timezone": "America/New_York",
            "last_updated": "2026-08-21T15:00:00"
        },
        "LSE": {
            "market": "LSE",
            "is_open": false,
            "open_time": "08:00",
            "close_time": "16:30",
            "timezone": "Europe/London",
            "last_updated": "2026-08-21T15:00:00"
        }
    },
    "timestamp": "2026-08-21T15:00:00.000000"
}"#;

/// An `/ownership/{ticker}` payload with provider-cased holder columns.
pub const OWNERSHIP_JSON: &str = r#"{
    "symbol": "AAPL",
    "institutional_holders": [
        {"Holder": "Vanguard Group", "Shares": 1310000000.0, "Value": 239000000000.0, "Date Reported": "2026-06-30"}
    ],
    "mutual_fund_holders": [
        {"Holder": "Vanguard Index Fund", "Shares": 440000000.0, "Value": 80000000000.0, "Date Reported": "2026-06-30"}
    ],
    "major_holders_breakdown": {"insidersPercentHeld": 0.02},
    "insider_transactions": [],
    "insider_roster": [],
    "last_updated": "2026-08-21T15:00:00"
}"#;
