// services/paymind-tui/src/main.rs
//
// PayMind terminal dashboard
// Sign in, check balances, send USDC and talk to the payment assistant
//
// Run with: cargo run --bin paymind-tui -- --demo

use std::fs::OpenOptions;
use std::io::stdout;
use std::path::PathBuf;
use std::sync::{Arc, Mutex};
use std::time::Duration;

use anyhow::{Context, Result};
use clap::Parser;
use crossterm::{
    event::{self, Event, KeyEventKind},
    terminal::{disable_raw_mode, enable_raw_mode, EnterAlternateScreen, LeaveAlternateScreen},
    ExecutableCommand,
};
use paykit::api::ApiClient;
use paykit::chat::{BackendResponder, KeywordResponder};
use paykit::config::{load_config, ObservabilityConfig, PayMindConfig};
use paykit::mock::MockBackend;
use paykit::session::AppStore;
use paykit::storage::{FileStore, KeyValueStore, ProfileStore};
use ratatui::prelude::*;
use tokio::sync::mpsc::{self, UnboundedReceiver};
use tracing::info;
use tracing_subscriber::EnvFilter;

mod state;
mod ui;
mod worker;

use state::TuiState;
use worker::{SharedBackend, SharedResponder, Update, Worker};

#[derive(Parser, Debug)]
#[command(name = "paymind-tui")]
#[command(about = "Terminal dashboard for PayMind USDC payments")]
#[command(version = "0.1.0")]
struct Args {
    /// Run on built-in sample data and the keyword assistant (no backend required)
    #[arg(long, short)]
    demo: bool,

    /// PayMind backend base URL (overrides the config file)
    #[arg(long)]
    api_url: Option<String>,

    /// YAML config file; PAYMIND__* environment variables are layered on top
    #[arg(long, default_value = "paymind.yaml")]
    config: String,

    /// Where the signed-in profile is kept between runs
    #[arg(long, default_value = "paymind-profile.json")]
    profile_path: PathBuf,

    /// Redraw interval in milliseconds
    #[arg(long, default_value = "100")]
    refresh_ms: u64,
}

fn main() -> Result<()> {
    let args = Args::parse();
    let config = resolve_config(&args)?;
    init_tracing(&config.observability)?;

    let runtime = tokio::runtime::Runtime::new().context("failed to start async runtime")?;
    let (tx, rx) = mpsc::unbounded_channel();

    let client = &config.client;
    let (backend, responder): (SharedBackend, SharedResponder) = if client.offline {
        (Arc::new(MockBackend::new()), Arc::new(KeywordResponder))
    } else {
        let api = ApiClient::from_config(client);
        (Arc::new(api.clone()), Arc::new(BackendResponder::new(api)))
    };
    let worker = Worker::new(backend, responder, runtime.handle().clone(), tx);

    let store = AppStore::new(ProfileStore::with_key(
        FileStore::new(&args.profile_path),
        &client.storage_key,
    ));
    let state = TuiState::new(store, client.recent_limit);

    let mode = if client.offline { "DEMO" } else { "LIVE" };
    info!(
        "Starting in {} mode (backend {}, profile {})",
        mode,
        client.api_base_url,
        args.profile_path.display()
    );

    // Setup terminal
    enable_raw_mode()?;
    stdout().execute(EnterAlternateScreen)?;
    let mut terminal = Terminal::new(CrosstermBackend::new(stdout()))?;

    let result = run_app(&mut terminal, state, &worker, rx, mode, args.refresh_ms);

    // Restore terminal
    disable_raw_mode()?;
    stdout().execute(LeaveAlternateScreen)?;

    result
}

fn resolve_config(args: &Args) -> Result<PayMindConfig> {
    let mut config = load_config(&args.config)
        .with_context(|| format!("failed to load config from {}", args.config))?;
    if args.demo {
        config.client.offline = true;
    }
    if let Some(url) = &args.api_url {
        config.client.api_base_url = url.trim_end_matches('/').to_string();
    }
    Ok(config)
}

/// stdout belongs to the terminal UI, so events go to a file.
fn init_tracing(observability: &ObservabilityConfig) -> Result<()> {
    let file = OpenOptions::new()
        .create(true)
        .append(true)
        .open(&observability.log_file)
        .with_context(|| format!("failed to open log file {}", observability.log_file))?;

    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| {
        EnvFilter::new(format!(
            "paymind_tui={0},paykit={0}",
            observability.log_level
        ))
    });

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(Mutex::new(file))
        .with_ansi(false)
        .init();

    Ok(())
}

fn run_app<B: Backend, S: KeyValueStore>(
    terminal: &mut Terminal<B>,
    mut state: TuiState<S>,
    worker: &Worker,
    mut updates: UnboundedReceiver<Update>,
    mode: &str,
    refresh_ms: u64,
) -> Result<()> {
    let tick_rate = Duration::from_millis(refresh_ms);

    if mode == "DEMO" {
        state.add_log("INFO", "PayMind started in DEMO mode");
    } else {
        state.add_log("INFO", "PayMind started - connecting to backend");
    }
    for command in state.mount() {
        worker.dispatch(command);
    }

    loop {
        // Apply whatever the worker finished since the last frame
        while let Ok(update) = updates.try_recv() {
            state.apply(update);
        }

        terminal.draw(|frame| ui::draw_ui(frame, &state, mode))?;

        if event::poll(tick_rate)? {
            if let Event::Key(key) = event::read()? {
                if key.kind == KeyEventKind::Press {
                    for command in state.handle_key(key) {
                        worker.dispatch(command);
                    }
                }
            }
        }

        if state.should_quit {
            info!("Exiting");
            return Ok(());
        }
    }
}
