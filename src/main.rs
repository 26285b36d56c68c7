use std::sync::Arc;
use std::time::Duration;

use tokio::sync::mpsc;
use tracing::{error, info};

use marketdeck::api::ApiClient;
use marketdeck::config::{AppConfig, fetch_config};
use marketdeck::fetch;
use marketdeck::models::DownloadRequest;
use marketdeck::poll::Sequence;
use marketdeck::tui::{self, Action, App, Message};
use marketdeck::{DeckError, Result};

/// Cadence of the market-status poller, independent of the dashboard one.
const MARKETS_REFRESH: Duration = Duration::from_secs(60);

#[tokio::main]
async fn main() -> Result<()> {
    init_logging()?;

    let config = fetch_config()?;
    info!(api_url = %config.api_url, tickers = ?config.tickers, "starting");

    let mut terminal = tui::setup_terminal()?;
    let result = run(&mut terminal, config).await;
    tui::restore_terminal(&mut terminal)?;

    if let Err(err) = &result {
        error!(error = %err, "exited with error");
        eprintln!("error: {err}");
    }
    result
}

/// Logs go to a file; stdout belongs to the TUI. `RUST_LOG` filters as
/// usual, defaulting to info.
fn init_logging() -> Result<()> {
    let log_file = std::fs::File::create("marketdeck.log")
        .map_err(|e| DeckError::Io(format!("failed to create log file: {e}")))?;
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("info")),
        )
        .with_writer(Arc::new(log_file))
        .with_ansi(false)
        .init();
    Ok(())
}

async fn run(terminal: &mut tui::Tui, config: AppConfig) -> Result<()> {
    let api = Arc::new(ApiClient::new(config.api_url.clone())?);
    let seq = Sequence::new();
    let (tx, mut rx) = mpsc::unbounded_channel::<Message>();

    tui::event::spawn_event_reader(tx.clone());
    let _ticker = {
        let tx = tx.clone();
        marketdeck::poll::spawn_interval(Duration::from_secs(1), move || {
            let tx = tx.clone();
            async move {
                let _ = tx.send(Message::Tick);
            }
        })
    };

    let refresh = Duration::from_secs(config.refresh_secs);
    let mut dashboard_poll = fetch::spawn_dashboard_poll(
        api.clone(),
        config.tickers.clone(),
        refresh,
        seq.clone(),
        tx.clone(),
    );
    let mut markets_poll =
        fetch::spawn_markets_poll(api.clone(), MARKETS_REFRESH, seq.clone(), tx.clone());

    let mut app = App::new(config.tickers.clone());

    loop {
        let Some(message) = rx.recv().await else {
            break;
        };
        let action = app.handle_message(message);

        if let Some(action) = action {
            match action {
                Action::Quit => break,
                Action::RefreshDashboard => {
                    // Restarting the poller fires an immediate fetch and
                    // resets the cadence from now.
                    if let Some(mut old) = dashboard_poll.take() {
                        old.stop();
                    }
                    dashboard_poll = fetch::spawn_dashboard_poll(
                        api.clone(),
                        config.tickers.clone(),
                        refresh,
                        seq.clone(),
                        tx.clone(),
                    );
                }
                Action::RefreshMarkets => {
                    markets_poll.stop();
                    markets_poll = fetch::spawn_markets_poll(
                        api.clone(),
                        MARKETS_REFRESH,
                        seq.clone(),
                        tx.clone(),
                    );
                }
                Action::LoadCompany(ticker) => {
                    fetch::fetch_company(api.clone(), ticker, &seq, tx.clone());
                }
                Action::LoadDomains => {
                    fetch::fetch_domains(api.clone(), &seq, tx.clone());
                }
                Action::LoadScreenerFields => {
                    fetch::fetch_screener_fields(
                        api.clone(),
                        app.screener.query_type,
                        &seq,
                        tx.clone(),
                    );
                }
                Action::RunScreener => {
                    fetch::run_screener(
                        api.clone(),
                        app.screener.query_type,
                        app.screener_query(),
                        &seq,
                        tx.clone(),
                    );
                }
                Action::Ask(question) => {
                    fetch::ask_assistant(
                        api.clone(),
                        question,
                        app.company_ticker.clone(),
                        tx.clone(),
                    );
                }
                Action::StartDownload => {
                    let request = DownloadRequest {
                        tickers: config.tickers.clone(),
                        ..Default::default()
                    };
                    fetch::start_download(api.clone(), request, &seq, tx.clone());
                    app.flash_info("download started");
                }
            }
        }

        terminal
            .draw(|frame| tui::render(frame, &app))
            .map_err(|e| DeckError::Io(e.to_string()))?;

        if app.should_quit {
            break;
        }
    }

    Ok(())
}
