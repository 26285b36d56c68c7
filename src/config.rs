//! Application configuration loaded from environment variables.
//!
//! Everything is optional and falls back to local-development defaults:
//! - `MARKETDECK_API_URL` — base URL of the dashboard backend
//! - `MARKETDECK_TICKERS` — comma-separated watchlist
//! - `MARKETDECK_REFRESH_SECS` — dashboard poll cadence in seconds
//!
//! Configuration is read exactly once at startup; there is no other
//! environment-driven behavior.

use crate::api::normalize_ticker;

/// Default backend address used when `MARKETDECK_API_URL` is unset.
const DEFAULT_API_URL: &str = "http://127.0.0.1:8000";

/// Default watchlist, matching the backend's own default ticker set.
const DEFAULT_TICKERS: &str = "AAPL,MSFT,GOOGL,AMZN,TSLA";

/// Default dashboard refresh cadence.
const DEFAULT_REFRESH_SECS: u64 = 30;

/// Top-level application configuration.
#[derive(Clone, Debug)]
pub struct AppConfig {
    /// Base URL of the dashboard backend, no trailing slash.
    pub api_url: String,
    /// Normalized watchlist tickers.
    pub tickers: Vec<String>,
    /// Seconds between dashboard refreshes.
    pub refresh_secs: u64,
}

/// Loads the application configuration from environment variables.
///
/// Empty variables are treated as absent. Tickers are normalized (quotes
/// stripped, uppercased) and empty entries dropped.
///
/// # Errors
///
/// Returns [`DeckError::Config`](crate::DeckError::Config) if
/// `MARKETDECK_REFRESH_SECS` is set but not a positive integer.
pub fn fetch_config() -> crate::Result<AppConfig> {
    let api_url = non_empty_var("MARKETDECK_API_URL")
        .unwrap_or_else(|| DEFAULT_API_URL.to_string())
        .trim_end_matches('/')
        .to_string();

    let raw_tickers =
        non_empty_var("MARKETDECK_TICKERS").unwrap_or_else(|| DEFAULT_TICKERS.to_string());
    let tickers: Vec<String> = raw_tickers
        .split(',')
        .map(normalize_ticker)
        .filter(|t| !t.is_empty())
        .collect();

    let refresh_secs = match non_empty_var("MARKETDECK_REFRESH_SECS") {
        Some(raw) => raw.parse::<u64>().ok().filter(|&s| s > 0).ok_or_else(|| {
            crate::DeckError::Config(format!(
                "MARKETDECK_REFRESH_SECS must be a positive integer, got {raw:?}"
            ))
        })?,
        None => DEFAULT_REFRESH_SECS,
    };

    Ok(AppConfig {
        api_url,
        tickers,
        refresh_secs,
    })
}

/// Returns the value of an environment variable if it exists and is non-empty.
fn non_empty_var(name: &str) -> Option<String> {
    std::env::var(name).ok().filter(|s| !s.is_empty())
}

#[cfg(test)]
mod tests {
    use super::*;

    /// Serializes env-mutating tests; the process environment is global.
    static ENV_LOCK: std::sync::Mutex<()> = std::sync::Mutex::new(());

    /// Helper that temporarily sets env vars, runs `f`, then restores originals.
    fn with_env<F: FnOnce()>(vars: &[(&str, Option<&str>)], f: F) {
        let _guard = ENV_LOCK.lock().unwrap_or_else(|poisoned| poisoned.into_inner());
        let originals: Vec<(&str, Option<String>)> = vars
            .iter()
            .map(|(k, _)| (*k, std::env::var(k).ok()))
            .collect();

        for (k, v) in vars {
            // SAFETY: ENV_LOCK keeps env mutation single-threaded.
            unsafe {
                match v {
                    Some(val) => std::env::set_var(k, val),
                    None => std::env::remove_var(k),
                }
            }
        }

        f();

        for (k, original) in originals {
            // SAFETY: restoring original values under the same lock.
            unsafe {
                match original {
                    Some(val) => std::env::set_var(k, val),
                    None => std::env::remove_var(k),
                }
            }
        }
    }

    #[test]
    fn defaults_without_env_vars() {
        with_env(
            &[
                ("MARKETDECK_API_URL", None),
                ("MARKETDECK_TICKERS", None),
                ("MARKETDECK_REFRESH_SECS", None),
            ],
            || {
                let config = fetch_config().unwrap();
                assert_eq!(config.api_url, DEFAULT_API_URL);
                assert_eq!(config.tickers, ["AAPL", "MSFT", "GOOGL", "AMZN", "TSLA"]);
                assert_eq!(config.refresh_secs, DEFAULT_REFRESH_SECS);
            },
        );
    }

    #[test]
    fn custom_url_loses_trailing_slash() {
        with_env(
            &[("MARKETDECK_API_URL", Some("http://deck.example.com:9000/"))],
            || {
                let config = fetch_config().unwrap();
                assert_eq!(config.api_url, "http://deck.example.com:9000");
            },
        );
    }

    #[test]
    fn tickers_are_normalized_and_empties_dropped() {
        with_env(
            &[("MARKETDECK_TICKERS", Some(" aapl, 'msft' ,,\"nvda\""))],
            || {
                let config = fetch_config().unwrap();
                assert_eq!(config.tickers, ["AAPL", "MSFT", "NVDA"]);
            },
        );
    }

    #[test]
    fn rejects_non_numeric_refresh() {
        with_env(&[("MARKETDECK_REFRESH_SECS", Some("soon"))], || {
            let err = fetch_config().unwrap_err();
            assert!(err.to_string().contains("MARKETDECK_REFRESH_SECS"));
        });
    }

    #[test]
    fn rejects_zero_refresh() {
        with_env(&[("MARKETDECK_REFRESH_SECS", Some("0"))], || {
            assert!(fetch_config().is_err());
        });
    }

    #[test]
    fn empty_values_treated_as_absent() {
        with_env(
            &[
                ("MARKETDECK_API_URL", Some("")),
                ("MARKETDECK_TICKERS", Some("")),
                ("MARKETDECK_REFRESH_SECS", Some("")),
            ],
            || {
                let config = fetch_config().unwrap();
                assert_eq!(config.api_url, DEFAULT_API_URL);
                assert_eq!(config.refresh_secs, DEFAULT_REFRESH_SECS);
            },
        );
    }
}
