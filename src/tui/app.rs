//! Application state for the TUI.

use std::time::{Duration, Instant};

use crossterm::event::{Event as CrosstermEvent, KeyCode, KeyEvent, KeyEventKind};
use tracing::debug;

use crate::api::normalize_ticker;
use crate::models::assistant::{ChatMessage, FALLBACK_APOLOGY, QUICK_QUESTIONS, fill_template};
use crate::models::domain::{DomainData, DomainKind};
use crate::models::{
    Condition, DashboardBundle, DownloadResult, FastInfo, FieldCatalog, HealthStatus,
    MarketStatusMap, OwnershipRecord, QueryType, QuoteDetail, ScreenerResult, VolumeReport,
    build_query,
};
use crate::poll::Resource;
use crate::tui::event::{Action, FetchTarget, Message};
use crate::tui::input::TextInput;

/// How long a status flash stays visible.
const STATUS_FLASH_TTL: Duration = Duration::from_secs(5);

/// The fixed tab set, in display order.
pub const TABS: &[Tab] = &[
    Tab::Dashboard,
    Tab::Markets,
    Tab::Company,
    Tab::Sectors,
    Tab::Screener,
    Tab::Assistant,
];

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Tab {
    Dashboard,
    Markets,
    Company,
    Sectors,
    Screener,
    Assistant,
}

impl Tab {
    pub fn title(&self) -> &'static str {
        match self {
            Tab::Dashboard => "Dashboard",
            Tab::Markets => "Markets",
            Tab::Company => "Company",
            Tab::Sectors => "Sectors",
            Tab::Screener => "Screener",
            Tab::Assistant => "Assistant",
        }
    }
}

/// Input mode. Insert routes keystrokes into the text field.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum Mode {
    #[default]
    Normal,
    Insert,
}

/// What the text field is editing while in insert mode.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum InputTarget {
    #[default]
    Ticker,
    Condition,
    Question,
}

/// Severity of a status flash.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum FlashLevel {
    Info,
    Error,
}

/// Transient status-bar message; cleared after [`STATUS_FLASH_TTL`].
#[derive(Clone, Debug)]
pub struct StatusFlash {
    pub message: String,
    pub level: FlashLevel,
    pub at: Instant,
}

/// Screener tab state: the catalog plus an editable condition list.
#[derive(Debug, Default)]
pub struct ScreenerState {
    pub query_type: QueryType,
    pub conditions: Vec<Condition>,
    /// Index of the selected condition, if any exist.
    pub selected: usize,
    /// When set, the next committed condition replaces `selected` instead of
    /// appending.
    pub editing: bool,
    pub fields: Resource<FieldCatalog>,
    pub results: Resource<ScreenerResult>,
}

impl ScreenerState {
    pub fn selected_condition(&self) -> Option<&Condition> {
        self.conditions.get(self.selected)
    }

    fn commit(&mut self, condition: Condition) {
        if self.editing && self.selected < self.conditions.len() {
            self.conditions[self.selected] = condition;
        } else {
            self.conditions.push(condition);
            self.selected = self.conditions.len() - 1;
        }
        self.editing = false;
    }

    fn remove_selected(&mut self) -> bool {
        if self.selected >= self.conditions.len() {
            return false;
        }
        self.conditions.remove(self.selected);
        if self.selected > 0 && self.selected >= self.conditions.len() {
            self.selected -= 1;
        }
        true
    }
}

/// Assistant tab state: an append-only transcript.
#[derive(Debug, Default)]
pub struct ChatState {
    pub messages: Vec<ChatMessage>,
    /// Cursor into [`QUICK_QUESTIONS`] for the template picker.
    pub quick_index: usize,
    pub waiting: bool,
}

/// Central application state container.
pub struct App {
    pub active_tab: usize,
    pub mode: Mode,
    pub input: TextInput,
    pub input_target: InputTarget,

    /// Configured watchlist, already normalized.
    pub tickers: Vec<String>,

    // -- Polled resources --
    pub dashboard: Resource<DashboardBundle>,
    pub markets: Resource<MarketStatusMap>,
    pub health: Resource<HealthStatus>,

    // -- Company tab --
    pub company_ticker: String,
    pub fast_info: Resource<FastInfo>,
    pub ownership: Resource<OwnershipRecord>,
    pub quote: Resource<QuoteDetail>,
    pub volume: Resource<VolumeReport>,

    // -- Sectors tab --
    pub domain_kind: DomainKind,
    pub domain_index: usize,
    pub sectors: Resource<Vec<DomainData>>,
    pub industries: Resource<Vec<DomainData>>,

    pub screener: ScreenerState,
    pub chat: ChatState,
    pub download: Resource<DownloadResult>,

    // -- Dashboard tab --
    pub selected_stock: usize,
    pub news_collapsed: bool,

    pub status: Option<StatusFlash>,
    pub should_quit: bool,
}

impl App {
    pub fn new(tickers: Vec<String>) -> Self {
        let company_ticker = tickers.first().cloned().unwrap_or_default();
        Self {
            active_tab: 0,
            mode: Mode::Normal,
            input: TextInput::new(),
            input_target: InputTarget::default(),
            tickers,
            dashboard: Resource::default(),
            markets: Resource::default(),
            health: Resource::default(),
            company_ticker,
            fast_info: Resource::default(),
            ownership: Resource::default(),
            quote: Resource::default(),
            volume: Resource::default(),
            domain_kind: DomainKind::Sector,
            domain_index: 0,
            sectors: Resource::default(),
            industries: Resource::default(),
            screener: ScreenerState::default(),
            chat: ChatState::default(),
            download: Resource::default(),
            selected_stock: 0,
            news_collapsed: false,
            status: None,
            should_quit: false,
        }
    }

    pub fn current_tab(&self) -> Tab {
        TABS[self.active_tab]
    }

    pub fn flash_info(&mut self, message: impl Into<String>) {
        self.status = Some(StatusFlash {
            message: message.into(),
            level: FlashLevel::Info,
            at: Instant::now(),
        });
    }

    pub fn flash_error(&mut self, message: impl Into<String>) {
        self.status = Some(StatusFlash {
            message: message.into(),
            level: FlashLevel::Error,
            at: Instant::now(),
        });
    }

    /// The domain list currently shown by the Sectors tab.
    pub fn current_domains(&self) -> &Resource<Vec<DomainData>> {
        match self.domain_kind {
            DomainKind::Sector => &self.sectors,
            DomainKind::Industry => &self.industries,
        }
    }

    /// Applies one inbound message and returns the side effect to perform.
    pub fn handle_message(&mut self, message: Message) -> Option<Action> {
        match message {
            Message::Input(CrosstermEvent::Key(key)) if key.kind == KeyEventKind::Press => {
                return self.handle_key(key);
            }
            Message::Input(_) => {}
            Message::Tick => {
                if let Some(flash) = &self.status
                    && flash.at.elapsed() >= STATUS_FLASH_TTL
                {
                    self.status = None;
                }
            }
            Message::FetchStarted { target, seq } => self.fetch_started(target, seq),
            Message::Dashboard { seq, result } => {
                self.dashboard.resolve(seq, result);
                self.clamp_dashboard_selection();
            }
            Message::Markets { seq, result } => {
                self.markets.resolve(seq, result);
            }
            Message::Health { seq, result } => {
                self.health.resolve(seq, result);
            }
            Message::FastInfo {
                seq,
                ticker,
                result,
            } => {
                if ticker == self.company_ticker {
                    self.fast_info.resolve(seq, result);
                }
            }
            Message::Ownership {
                seq,
                ticker,
                result,
            } => {
                if ticker == self.company_ticker {
                    self.ownership.resolve(seq, result);
                }
            }
            Message::Quote {
                seq,
                ticker,
                result,
            } => {
                if ticker == self.company_ticker {
                    self.quote.resolve(seq, result);
                }
            }
            Message::Volume {
                seq,
                ticker,
                result,
            } => {
                if ticker == self.company_ticker {
                    self.volume.resolve(seq, result);
                }
            }
            Message::Sectors { seq, result } => {
                self.sectors.resolve(seq, result);
                self.clamp_domain_selection();
            }
            Message::Industries { seq, result } => {
                self.industries.resolve(seq, result);
                self.clamp_domain_selection();
            }
            Message::ScreenerFields {
                seq,
                query_type,
                result,
            } => {
                // A catalog for the other query type arrived after a toggle.
                if query_type == self.screener.query_type {
                    self.screener.fields.resolve(seq, result);
                }
            }
            Message::ScreenerResults { seq, result } => {
                if self.screener.results.resolve(seq, result)
                    && self.screener.results.error.is_none()
                    && let Some(found) = &self.screener.results.data
                {
                    self.flash_info(format!("screen matched {} row(s)", found.count));
                }
            }
            Message::Download { seq, result } => {
                if self.download.resolve(seq, result) {
                    match (&self.download.data, &self.download.error) {
                        (Some(done), None) => self.flash_info(done.summary()),
                        (_, Some(err)) => self.flash_error(format!("download failed: {err}")),
                        _ => {}
                    }
                }
            }
            Message::AssistantReply { result } => {
                self.chat.waiting = false;
                // Backend-side failures still carry an apology in `answer`.
                let text = match result {
                    Ok(reply) => reply.answer,
                    Err(err) => {
                        debug!(error = %err, "assistant request failed");
                        FALLBACK_APOLOGY.to_string()
                    }
                };
                self.chat.messages.push(ChatMessage::assistant(text));
            }
        }
        None
    }

    fn fetch_started(&mut self, target: FetchTarget, seq: u64) {
        match target {
            FetchTarget::Dashboard => self.dashboard.begin(seq),
            FetchTarget::Markets => self.markets.begin(seq),
            FetchTarget::Health => self.health.begin(seq),
            FetchTarget::FastInfo => self.fast_info.begin(seq),
            FetchTarget::Ownership => self.ownership.begin(seq),
            FetchTarget::Quote => self.quote.begin(seq),
            FetchTarget::Volume => self.volume.begin(seq),
            FetchTarget::Sectors => self.sectors.begin(seq),
            FetchTarget::Industries => self.industries.begin(seq),
            FetchTarget::ScreenerFields => self.screener.fields.begin(seq),
            FetchTarget::ScreenerResults => self.screener.results.begin(seq),
            FetchTarget::Download => self.download.begin(seq),
        }
    }

    fn handle_key(&mut self, key: KeyEvent) -> Option<Action> {
        match self.mode {
            Mode::Insert => self.handle_insert_key(key),
            Mode::Normal => self.handle_normal_key(key),
        }
    }

    fn handle_insert_key(&mut self, key: KeyEvent) -> Option<Action> {
        match key.code {
            KeyCode::Esc => {
                self.input.take();
                self.screener.editing = false;
                self.mode = Mode::Normal;
            }
            KeyCode::Enter => return self.commit_input(),
            KeyCode::Char(c) => self.input.insert(c),
            KeyCode::Backspace => self.input.backspace(),
            KeyCode::Delete => self.input.delete(),
            KeyCode::Left => self.input.move_left(),
            KeyCode::Right => self.input.move_right(),
            KeyCode::Home => self.input.move_home(),
            KeyCode::End => self.input.move_end(),
            _ => {}
        }
        None
    }

    fn commit_input(&mut self) -> Option<Action> {
        let raw = self.input.take();
        self.mode = Mode::Normal;
        match self.input_target {
            InputTarget::Ticker => {
                let ticker = normalize_ticker(&raw);
                if ticker.is_empty() {
                    // Nothing to look up, so nothing is fetched.
                    self.flash_error("ticker required");
                    return None;
                }
                return Some(self.switch_company(ticker));
            }
            InputTarget::Condition => match Condition::parse(&raw) {
                Ok(condition) => self.screener.commit(condition),
                Err(reason) => {
                    self.screener.editing = false;
                    self.flash_error(reason);
                }
            },
            InputTarget::Question => {
                let question = raw.trim().to_string();
                if question.is_empty() {
                    return None;
                }
                self.chat.messages.push(ChatMessage::user(question.clone()));
                self.chat.waiting = true;
                return Some(Action::Ask(question));
            }
        }
        None
    }

    /// Points the Company tab at a new ticker and requests its data. The old
    /// symbol's panels are cleared so stale data is never shown under a new
    /// heading.
    fn switch_company(&mut self, ticker: String) -> Action {
        if ticker != self.company_ticker {
            self.company_ticker = ticker.clone();
            self.fast_info.clear();
            self.ownership.clear();
            self.quote.clear();
            self.volume.clear();
            self.chat
                .messages
                .push(ChatMessage::system(format!("context switched to {ticker}")));
        }
        Action::LoadCompany(ticker)
    }

    fn handle_normal_key(&mut self, key: KeyEvent) -> Option<Action> {
        // Global bindings first.
        match key.code {
            KeyCode::Char('q') => {
                self.should_quit = true;
                return Some(Action::Quit);
            }
            KeyCode::Tab => {
                self.active_tab = (self.active_tab + 1) % TABS.len();
                return self.tab_entered();
            }
            KeyCode::BackTab => {
                self.active_tab = (self.active_tab + TABS.len() - 1) % TABS.len();
                return self.tab_entered();
            }
            KeyCode::Char(c @ '1'..='6') => {
                self.active_tab = (c as usize) - ('1' as usize);
                return self.tab_entered();
            }
            _ => {}
        }

        match self.current_tab() {
            Tab::Dashboard => self.dashboard_key(key),
            Tab::Markets => match key.code {
                KeyCode::Char('r') => Some(Action::RefreshMarkets),
                _ => None,
            },
            Tab::Company => self.company_key(key),
            Tab::Sectors => self.sectors_key(key),
            Tab::Screener => self.screener_key(key),
            Tab::Assistant => self.assistant_key(key),
        }
    }

    /// Lazily loads a tab's data the first time it is opened.
    fn tab_entered(&mut self) -> Option<Action> {
        match self.current_tab() {
            Tab::Company if self.fast_info.is_initial() && !self.company_ticker.is_empty() => {
                Some(Action::LoadCompany(self.company_ticker.clone()))
            }
            Tab::Sectors if self.sectors.is_initial() => Some(Action::LoadDomains),
            Tab::Screener if self.screener.fields.is_initial() => {
                Some(Action::LoadScreenerFields)
            }
            _ => None,
        }
    }

    fn dashboard_key(&mut self, key: KeyEvent) -> Option<Action> {
        let stocks = self
            .dashboard
            .data
            .as_ref()
            .map_or(0, |bundle| bundle.stocks.len());
        match key.code {
            KeyCode::Char('j') | KeyCode::Down if stocks > 0 => {
                self.selected_stock = (self.selected_stock + 1) % stocks;
            }
            KeyCode::Char('k') | KeyCode::Up if stocks > 0 => {
                self.selected_stock = (self.selected_stock + stocks - 1) % stocks;
            }
            KeyCode::Char('n') => self.news_collapsed = !self.news_collapsed,
            KeyCode::Char('r') => return Some(Action::RefreshDashboard),
            KeyCode::Char('d') => return Some(Action::StartDownload),
            KeyCode::Enter => {
                if let Some(bundle) = &self.dashboard.data
                    && let Some(stock) = bundle.stocks.get(self.selected_stock)
                {
                    let ticker = stock.ticker.clone();
                    self.active_tab = TABS.iter().position(|t| *t == Tab::Company)?;
                    return Some(self.switch_company(ticker));
                }
            }
            _ => {}
        }
        None
    }

    fn company_key(&mut self, key: KeyEvent) -> Option<Action> {
        match key.code {
            KeyCode::Char('t') => {
                self.mode = Mode::Insert;
                self.input_target = InputTarget::Ticker;
                self.input.set(self.company_ticker.clone());
            }
            KeyCode::Char('r') if !self.company_ticker.is_empty() => {
                return Some(Action::LoadCompany(self.company_ticker.clone()));
            }
            _ => {}
        }
        None
    }

    fn sectors_key(&mut self, key: KeyEvent) -> Option<Action> {
        let shown = self
            .current_domains()
            .data
            .as_ref()
            .map_or(0, |list| list.len());
        match key.code {
            KeyCode::Char('s') => {
                self.domain_kind.toggle();
                self.domain_index = 0;
            }
            KeyCode::Char('j') | KeyCode::Down if shown > 0 => {
                self.domain_index = (self.domain_index + 1) % shown;
            }
            KeyCode::Char('k') | KeyCode::Up if shown > 0 => {
                self.domain_index = (self.domain_index + shown - 1) % shown;
            }
            KeyCode::Char('r') => return Some(Action::LoadDomains),
            _ => {}
        }
        None
    }

    fn screener_key(&mut self, key: KeyEvent) -> Option<Action> {
        match key.code {
            KeyCode::Char('a') => {
                self.mode = Mode::Insert;
                self.input_target = InputTarget::Condition;
            }
            KeyCode::Char('e') => {
                if let Some(condition) = self.screener.selected_condition() {
                    self.input.set(condition.to_string());
                    self.screener.editing = true;
                    self.mode = Mode::Insert;
                    self.input_target = InputTarget::Condition;
                }
            }
            KeyCode::Char('d') => {
                if !self.screener.remove_selected() {
                    self.flash_error("no condition selected");
                }
            }
            KeyCode::Char('j') | KeyCode::Down if !self.screener.conditions.is_empty() => {
                self.screener.selected =
                    (self.screener.selected + 1) % self.screener.conditions.len();
            }
            KeyCode::Char('k') | KeyCode::Up if !self.screener.conditions.is_empty() => {
                let len = self.screener.conditions.len();
                self.screener.selected = (self.screener.selected + len - 1) % len;
            }
            KeyCode::Char('r') => return Some(Action::LoadScreenerFields),
            KeyCode::Char('t') => {
                self.screener.query_type.toggle();
                self.screener.fields = Resource::default();
                self.screener.results = Resource::default();
                return Some(Action::LoadScreenerFields);
            }
            KeyCode::Enter => {
                if self.screener.conditions.is_empty() {
                    self.flash_error("add a condition first");
                } else {
                    return Some(Action::RunScreener);
                }
            }
            _ => {}
        }
        None
    }

    fn assistant_key(&mut self, key: KeyEvent) -> Option<Action> {
        match key.code {
            KeyCode::Char('i') => {
                self.mode = Mode::Insert;
                self.input_target = InputTarget::Question;
            }
            KeyCode::Char('u') => {
                // Cycle a quick-question template into the input field.
                let template = QUICK_QUESTIONS[self.chat.quick_index];
                self.chat.quick_index = (self.chat.quick_index + 1) % QUICK_QUESTIONS.len();
                self.input
                    .set(fill_template(template, &self.company_ticker));
                self.mode = Mode::Insert;
                self.input_target = InputTarget::Question;
            }
            _ => {}
        }
        None
    }

    /// Builds the expression for the current condition list.
    pub fn screener_query(&self) -> serde_json::Value {
        build_query(&self.screener.conditions)
    }

    fn clamp_dashboard_selection(&mut self) {
        let stocks = self
            .dashboard
            .data
            .as_ref()
            .map_or(0, |bundle| bundle.stocks.len());
        if stocks == 0 {
            self.selected_stock = 0;
        } else if self.selected_stock >= stocks {
            self.selected_stock = stocks - 1;
        }
    }

    fn clamp_domain_selection(&mut self) {
        let shown = self
            .current_domains()
            .data
            .as_ref()
            .map_or(0, |list| list.len());
        if shown == 0 {
            self.domain_index = 0;
        } else if self.domain_index >= shown {
            self.domain_index = shown - 1;
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crossterm::event::{KeyEvent, KeyModifiers};
    use crate::models::StockQuote;

    fn key(code: KeyCode) -> Message {
        Message::Input(CrosstermEvent::Key(KeyEvent::new(
            code,
            KeyModifiers::NONE,
        )))
    }

    fn app() -> App {
        App::new(vec!["AAPL".to_string(), "MSFT".to_string()])
    }

    #[test]
    fn quit_key_sets_flag() {
        let mut app = app();
        let action = app.handle_message(key(KeyCode::Char('q')));
        assert!(app.should_quit);
        assert_eq!(action, Some(Action::Quit));
    }

    #[test]
    fn tab_cycles_forward_and_back() {
        let mut app = app();
        app.handle_message(key(KeyCode::Tab));
        assert_eq!(app.current_tab(), Tab::Markets);
        app.handle_message(key(KeyCode::BackTab));
        assert_eq!(app.current_tab(), Tab::Dashboard);
        app.handle_message(key(KeyCode::BackTab));
        assert_eq!(app.current_tab(), Tab::Assistant);
    }

    #[test]
    fn empty_ticker_commit_fetches_nothing() {
        let mut app = app();
        app.handle_message(key(KeyCode::Char('3')));
        app.handle_message(key(KeyCode::Char('t')));
        // Wipe the prefilled ticker and submit empty.
        app.input.take();
        let action = app.handle_message(key(KeyCode::Enter));
        assert_eq!(action, None);
        assert!(app.status.is_some());
        assert_eq!(app.company_ticker, "AAPL");
    }

    #[test]
    fn ticker_commit_normalizes_and_clears_panels() {
        let mut app = app();
        app.fast_info.begin(1);
        app.fast_info.resolve(1, Ok(FastInfo::default()));
        app.handle_message(key(KeyCode::Char('3')));
        app.handle_message(key(KeyCode::Char('t')));
        app.input.set("'tsla' ");
        let action = app.handle_message(key(KeyCode::Enter));
        assert_eq!(action, Some(Action::LoadCompany("TSLA".to_string())));
        assert_eq!(app.company_ticker, "TSLA");
        assert!(app.fast_info.data.is_none());
        // Switching context leaves a note in the transcript.
        assert!(app.chat.messages.iter().any(|m| m.text.contains("TSLA")));
    }

    #[test]
    fn company_reply_for_old_ticker_is_ignored() {
        let mut app = app();
        app.company_ticker = "TSLA".to_string();
        app.handle_message(Message::FastInfo {
            seq: 1,
            ticker: "AAPL".to_string(),
            result: Ok(FastInfo::default()),
        });
        assert!(app.fast_info.data.is_none());
    }

    #[test]
    fn screener_conditions_add_edit_remove() {
        let mut app = app();
        app.handle_message(key(KeyCode::Char('5')));
        app.handle_message(key(KeyCode::Char('a')));
        app.input.set("marketCap > 1000000000");
        app.handle_message(key(KeyCode::Enter));
        assert_eq!(app.screener.conditions.len(), 1);

        app.handle_message(key(KeyCode::Char('a')));
        app.input.set("trailingPE btwn 5 20");
        app.handle_message(key(KeyCode::Enter));
        assert_eq!(app.screener.conditions.len(), 2);
        assert_eq!(app.screener.selected, 1);

        app.handle_message(key(KeyCode::Char('e')));
        app.input.set("trailingPE btwn 5 30");
        app.handle_message(key(KeyCode::Enter));
        assert_eq!(app.screener.conditions.len(), 2);
        assert_eq!(app.screener.conditions[1].to_string(), "trailingPE btwn 5 30");

        app.handle_message(key(KeyCode::Char('d')));
        assert_eq!(app.screener.conditions.len(), 1);
        assert_eq!(app.screener.selected, 0);
    }

    #[test]
    fn add_then_remove_restores_prior_list() {
        let mut app = app();
        app.handle_message(key(KeyCode::Char('5')));
        app.handle_message(key(KeyCode::Char('a')));
        app.input.set("marketCap > 10");
        app.handle_message(key(KeyCode::Enter));
        let before = app.screener.conditions.clone();

        app.handle_message(key(KeyCode::Char('a')));
        app.input.set("trailingPE < 30");
        app.handle_message(key(KeyCode::Enter));
        app.handle_message(key(KeyCode::Char('d')));
        assert_eq!(app.screener.conditions, before);
    }

    #[test]
    fn screener_run_requires_conditions() {
        let mut app = app();
        app.handle_message(key(KeyCode::Char('5')));
        // Entering the tab asks for the catalog, but Enter with no
        // conditions must not execute.
        let action = app.handle_message(key(KeyCode::Enter));
        assert_eq!(action, None);
        assert!(app.status.is_some());
    }

    #[test]
    fn invalid_condition_flashes_error() {
        let mut app = app();
        app.handle_message(key(KeyCode::Char('5')));
        app.handle_message(key(KeyCode::Char('a')));
        app.input.set("marketCap ~ 5");
        app.handle_message(key(KeyCode::Enter));
        assert!(app.screener.conditions.is_empty());
        assert!(matches!(
            app.status.as_ref().map(|f| f.level),
            Some(FlashLevel::Error)
        ));
    }

    #[test]
    fn question_commit_appends_and_asks() {
        let mut app = app();
        app.handle_message(key(KeyCode::Char('6')));
        app.handle_message(key(KeyCode::Char('i')));
        app.input.set("What about AAPL?");
        let action = app.handle_message(key(KeyCode::Enter));
        assert_eq!(action, Some(Action::Ask("What about AAPL?".to_string())));
        assert_eq!(app.chat.messages.len(), 1);
        assert!(app.chat.waiting);
    }

    #[test]
    fn failed_ask_appends_apology() {
        let mut app = app();
        app.chat.waiting = true;
        app.handle_message(Message::AssistantReply {
            result: Err("connection refused".to_string()),
        });
        assert!(!app.chat.waiting);
        assert_eq!(app.chat.messages.last().unwrap().text, FALLBACK_APOLOGY);
    }

    #[test]
    fn dashboard_selection_clamps_after_shrink() {
        let mut app = app();
        let bundle = DashboardBundle {
            stocks: vec![StockQuote::default(), StockQuote::default()],
            ..Default::default()
        };
        app.dashboard.begin(1);
        app.handle_message(Message::Dashboard {
            seq: 1,
            result: Ok(bundle),
        });
        app.selected_stock = 1;
        let one = DashboardBundle {
            stocks: vec![StockQuote::default()],
            ..Default::default()
        };
        app.handle_message(Message::Dashboard {
            seq: 2,
            result: Ok(one),
        });
        assert_eq!(app.selected_stock, 0);
    }

    #[test]
    fn stale_fields_for_other_query_type_dropped() {
        let mut app = app();
        app.screener.query_type = QueryType::Fund;
        app.handle_message(Message::ScreenerFields {
            seq: 1,
            query_type: QueryType::Equity,
            result: Ok(FieldCatalog::default()),
        });
        assert!(app.screener.fields.data.is_none());
    }
}
