// services/paymind-tui/src/state.rs
//
// Dashboard state management. All key handling lives here so it can be
// driven from tests without a terminal.

use chrono::{DateTime, Local};
use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};
use paykit::pages::chat::ChatSession;
use paykit::pages::dashboard::{Loaded, PaymentDraft, PaymentModal};
use paykit::pages::login::{connect_wallet, LoginForm};
use paykit::pages::profile;
use paykit::pages::transactions::TransactionsModel;
use paykit::router::{resolve, Resolution, Route, SessionGuard};
use paykit::session::AppStore;
use paykit::storage::KeyValueStore;
use paykit::types::{DashboardStats, Transaction, UserProfile};
use tracing::{info, warn};

use crate::worker::{Command, Update};

const MAX_ACTIVITY: usize = 100;

/// Gate answer taken from the in-memory session, so drawing a frame never
/// reads the profile file.
struct SignedIn(bool);

impl SessionGuard for SignedIn {
    fn is_authenticated(&self) -> bool {
        self.0
    }
}

#[derive(Debug, Clone)]
pub struct LogEntry {
    pub timestamp: DateTime<Local>,
    pub level: String, // INFO, WARN, ERROR
    pub message: String,
}

/// Focused input of the send-payment form.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum DraftField {
    #[default]
    Recipient,
    Amount,
    Note,
}

impl DraftField {
    pub fn next(self) -> Self {
        match self {
            DraftField::Recipient => DraftField::Amount,
            DraftField::Amount => DraftField::Note,
            DraftField::Note => DraftField::Recipient,
        }
    }
}

pub struct TuiState<S> {
    store: AppStore<S>,
    route: Route,
    recent_limit: usize,

    // Login screen
    pub login: LoginForm,

    // Dashboard tab
    pub stats: Option<Loaded<DashboardStats>>,
    pub recent: Option<Loaded<Vec<Transaction>>>,
    pub draft: PaymentDraft,
    pub payment: PaymentModal,
    pub field: DraftField,

    // Transactions tab
    pub transactions: TransactionsModel,

    // Chat tab
    pub chat: ChatSession,
    pub chat_input: String,

    // Activity log
    pub activity_log: Vec<LogEntry>,

    pub should_quit: bool,
}

impl<S: KeyValueStore> TuiState<S> {
    pub fn new(store: AppStore<S>, recent_limit: usize) -> Self {
        Self {
            store,
            route: Route::Dashboard,
            recent_limit,
            login: LoginForm::default(),
            stats: None,
            recent: None,
            draft: PaymentDraft::default(),
            payment: PaymentModal::default(),
            field: DraftField::default(),
            transactions: TransactionsModel::from_fixtures(),
            chat: ChatSession::new(),
            chat_input: String::new(),
            activity_log: Vec::new(),
            should_quit: false,
        }
    }

    /// What is actually on screen: the requested tab, or the login screen
    /// when the session gate is closed.
    pub fn screen(&self) -> Route {
        match resolve(self.route.path(), &SignedIn(self.store.is_signed_in())) {
            Resolution::Render(route) | Resolution::Redirect(route) => route,
        }
    }

    pub fn profile(&self) -> UserProfile {
        self.store.profile()
    }

    /// Commands to issue on start-up, as if the current screen had just been
    /// mounted. The persisted session is re-checked here and nowhere else.
    pub fn mount(&mut self) -> Vec<Command> {
        self.store.reload();
        self.enter(self.route)
    }

    pub fn add_log(&mut self, level: &str, message: &str) {
        self.activity_log.push(LogEntry {
            timestamp: Local::now(),
            level: level.to_string(),
            message: message.to_string(),
        });
        if self.activity_log.len() > MAX_ACTIVITY {
            self.activity_log.remove(0);
        }
    }

    pub fn handle_key(&mut self, key: KeyEvent) -> Vec<Command> {
        if key.modifiers.contains(KeyModifiers::CONTROL) && key.code == KeyCode::Char('c') {
            self.should_quit = true;
            return Vec::new();
        }

        match self.screen() {
            Route::Login | Route::Landing => self.handle_login_key(key),
            Route::Dashboard if self.payment.open => self.handle_payment_key(key),
            Route::Chat => self.handle_chat_key(key),
            route => self.handle_tab_key(route, key),
        }
    }

    /// Results are applied whenever they arrive, even if the user has moved
    /// to another tab in the meantime.
    pub fn apply(&mut self, update: Update) {
        match update {
            Update::Stats(loaded) => {
                if loaded.is_fallback() {
                    self.add_log("WARN", "Dashboard stats unavailable, showing fallback values");
                }
                self.stats = Some(loaded);
            }
            Update::Recent(loaded) => {
                if loaded.is_fallback() {
                    self.add_log("WARN", "Recent transactions unavailable, showing sample data");
                }
                self.recent = Some(loaded);
            }
            Update::Payment { outcome, refreshed } => {
                if self.payment.finish(&outcome) {
                    self.add_log("INFO", "Payment sent");
                    if let Some(stats) = refreshed {
                        self.stats = Some(Loaded::live(stats));
                    }
                } else if let Some(err) = self.payment.error.clone() {
                    self.add_log("ERROR", &err);
                }
            }
            Update::ChatReply(reply) => {
                if let Err(e) = &reply {
                    warn!("Chat request failed: {}", e);
                }
                self.chat.complete(reply);
            }
        }
    }

    fn enter(&mut self, route: Route) -> Vec<Command> {
        self.route = route;
        match self.screen() {
            Route::Dashboard => {
                self.stats = None;
                self.recent = None;
                vec![Command::LoadStats, Command::LoadRecent { limit: self.recent_limit }]
            }
            _ => Vec::new(),
        }
    }

    fn cycle_tab(&mut self, forward: bool) -> Vec<Command> {
        let tabs = Route::SIDEBAR;
        let idx = tabs.iter().position(|r| *r == self.route).unwrap_or(0);
        let next = if forward {
            (idx + 1) % tabs.len()
        } else {
            (idx + tabs.len() - 1) % tabs.len()
        };
        self.enter(tabs[next])
    }

    fn handle_login_key(&mut self, key: KeyEvent) -> Vec<Command> {
        if key.modifiers.contains(KeyModifiers::CONTROL) && key.code == KeyCode::Char('w') {
            return match connect_wallet(&mut self.store) {
                Some(route) => {
                    self.add_log("INFO", "Demo wallet connected");
                    self.enter(route)
                }
                None => Vec::new(),
            };
        }

        match key.code {
            KeyCode::Esc => self.should_quit = true,
            KeyCode::Backspace => {
                self.login.email.pop();
            }
            KeyCode::Char(c) => self.login.email.push(c),
            KeyCode::Enter => {
                if let Some(route) = self.login.submit(&mut self.store) {
                    let email = self.login.email.clone();
                    self.add_log("INFO", &format!("Signed in as {}", email));
                    self.login = LoginForm::default();
                    return self.enter(route);
                }
            }
            _ => {}
        }
        Vec::new()
    }

    fn handle_tab_key(&mut self, route: Route, key: KeyEvent) -> Vec<Command> {
        match key.code {
            KeyCode::Char('q') | KeyCode::Esc => self.should_quit = true,
            KeyCode::Tab => return self.cycle_tab(true),
            KeyCode::BackTab => return self.cycle_tab(false),
            KeyCode::Char(c @ '1'..='4') => {
                let idx = c as usize - '1' as usize;
                return self.enter(Route::SIDEBAR[idx]);
            }
            KeyCode::Char('x') => return self.logout(),
            KeyCode::Char(c) => return self.handle_page_key(route, c),
            _ => {}
        }
        Vec::new()
    }

    fn handle_page_key(&mut self, route: Route, c: char) -> Vec<Command> {
        match (route, c) {
            (Route::Dashboard, 'p') => {
                self.payment.open();
                self.field = DraftField::Recipient;
            }
            (Route::Dashboard, 'r') => return self.enter(Route::Dashboard),
            (Route::Transactions, 's') => self.transactions.cycle_status_filter(),
            (Route::Transactions, 't') => self.transactions.cycle_type_filter(),
            (Route::Profile, 'n') => {
                let result = profile::toggle_notifications(&mut self.store);
                self.record_profile_change(result);
            }
            (Route::Profile, 'l') => {
                let language = profile::next_language(&self.store.profile().language);
                let result = profile::change_language(&mut self.store, language);
                self.record_profile_change(result);
            }
            (Route::Profile, 'd') => return self.logout(),
            _ => {}
        }
        Vec::new()
    }

    fn handle_payment_key(&mut self, key: KeyEvent) -> Vec<Command> {
        if self.payment.succeeded {
            if matches!(key.code, KeyCode::Enter | KeyCode::Esc) {
                self.payment.acknowledge();
            }
            return Vec::new();
        }

        // Fields are frozen while the request is in flight
        if self.payment.submitting {
            return Vec::new();
        }

        match key.code {
            KeyCode::Esc => self.payment.cancel(),
            KeyCode::Tab => self.field = self.field.next(),
            KeyCode::Backspace => {
                self.field_mut().pop();
            }
            KeyCode::Char(c) => self.field_mut().push(c),
            KeyCode::Enter => {
                if self.payment.begin_submit() {
                    return vec![Command::SendPayment(self.draft.clone())];
                }
            }
            _ => {}
        }
        Vec::new()
    }

    fn handle_chat_key(&mut self, key: KeyEvent) -> Vec<Command> {
        match key.code {
            KeyCode::Esc => self.should_quit = true,
            KeyCode::Tab => return self.cycle_tab(true),
            KeyCode::BackTab => return self.cycle_tab(false),
            KeyCode::Backspace => {
                self.chat_input.pop();
            }
            KeyCode::Char(c) => self.chat_input.push(c),
            KeyCode::Enter => {
                if let Some(pending) = self.chat.begin(&self.chat_input) {
                    self.chat_input.clear();
                    return vec![Command::Chat(pending)];
                }
            }
            _ => {}
        }
        Vec::new()
    }

    fn field_mut(&mut self) -> &mut String {
        match self.field {
            DraftField::Recipient => &mut self.draft.recipient,
            DraftField::Amount => &mut self.draft.amount,
            DraftField::Note => &mut self.draft.note,
        }
    }

    fn record_profile_change(&mut self, result: paykit::Result<UserProfile>) {
        match result {
            Ok(profile) => info!(
                "Profile updated (notifications: {}, language: {})",
                profile.notifications, profile.language
            ),
            Err(e) => self.add_log("ERROR", &format!("Profile update failed: {}", e)),
        }
    }

    fn logout(&mut self) -> Vec<Command> {
        match profile::disconnect(&mut self.store) {
            Ok(route) => {
                self.add_log("INFO", "Wallet disconnected");
                self.enter(route)
            }
            Err(e) => {
                self.add_log("ERROR", &format!("Logout failed: {}", e));
                Vec::new()
            }
        }
    }
}
