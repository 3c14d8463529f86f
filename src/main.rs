//! Interactive terminal shell and entry point.
//!
//! A thin layer between the terminal and the dexview library: it reads
//! commands line by line, maps them to library events, executes the returned
//! actions and prints a fresh frame whenever the handler asks for one.
//!
//! # Architecture
//!
//! ```text
//! ┌──────────────────────────┐
//! │      Main Thread         │
//! │  stdin lines → Events    │  ← UI state, event handling
//! │          │               │
//! │          │ mpsc          │
//! │          ▼               │
//! │  ┌────────────────────┐  │
//! │  │ dexview-fetch      │  │  ← GraphQL requests, cache
//! │  │ (worker thread)    │  │
//! │  └────────────────────┘  │
//! └──────────────────────────┘
//! ```
//!
//! # Commands
//!
//! - `search <text>` (or `/ <text>`): filter by name, number or id
//! - `type <Tag|All>`, `sort <numberAsc|numberDesc|nameAsc|nameDesc>`,
//!   `view <grid|list>`: edit the view state
//! - `open <n|name>`, `close`: detail overlay
//! - `go <location>`, `back`, `forward`: navigation
//! - `more`, `reload`, `nav`, `theme`, `quit`

#![allow(clippy::multiple_crate_versions)]

use std::io::{self, BufRead, Write};
use std::path::PathBuf;
use std::sync::mpsc::{self, Receiver, RecvTimeoutError};
use std::thread;
use std::time::{Duration, Instant};

use clap::Parser;

use dexview::source::HttpTransport;
use dexview::view::{History, Location, SortKey, TypeFilter, ViewChange, ViewMode};
use dexview::worker::{WorkerMessage, WorkerThread};
use dexview::{handle_event, initialize, ui, Action, AppState, Config, DexError, Event, Result};

/// How long the input loop waits for a line before polling the worker.
const POLL_INTERVAL: Duration = Duration::from_millis(50);

#[derive(Debug, Parser)]
#[command(name = "dexview", version, about = "Browse the Pokédex from your terminal")]
struct Cli {
    /// Starting location, e.g. `/pokemon/Pikachu?type=Electric&view=list`.
    #[arg(default_value = "/pokemon")]
    location: String,

    /// Path to a TOML config file.
    #[arg(short, long)]
    config: Option<PathBuf>,

    /// GraphQL endpoint (overrides config and environment).
    #[arg(long)]
    endpoint: Option<String>,

    /// Starting theme: dark or light.
    #[arg(long)]
    theme: Option<String>,

    /// Frame width in columns.
    #[arg(long, default_value_t = 100)]
    width: usize,

    /// Print one frame after the initial fetches settle, then exit.
    #[arg(long)]
    once: bool,
}

impl Cli {
    fn config(&self) -> Result<Config> {
        let mut config = match &self.config {
            Some(path) => Config::load(path)?,
            None => Config::default(),
        }
        .with_env_overrides();

        if let Some(endpoint) = &self.endpoint {
            config.endpoint.clone_from(endpoint);
        }
        if let Some(theme) = &self.theme {
            config.theme.clone_from(theme);
        }
        Ok(config.normalized())
    }
}

/// Shell state: the library state plus the pieces only a terminal needs.
struct Shell {
    app: AppState,
    worker: WorkerThread,
    history: History,
    width: usize,
}

impl Shell {
    fn new(config: &Config, location: Location, width: usize) -> Result<Self> {
        let transport = HttpTransport::new(config.endpoint.clone(), config.request_timeout())?;
        let worker = WorkerThread::spawn(transport)?;
        Ok(Self {
            app: initialize(config, location.clone()),
            worker,
            history: History::new(location),
            width,
        })
    }

    /// Runs one event through the handler and executes its actions.
    ///
    /// Returns `false` once the shell should exit.
    fn dispatch(&mut self, event: &Event) -> Result<bool> {
        let (render, actions) = handle_event(&mut self.app, event)?;
        let mut keep_running = true;
        for action in &actions {
            keep_running &= self.execute_action(action)?;
        }
        if render && keep_running {
            self.render();
        }
        Ok(keep_running)
    }

    fn execute_action(&mut self, action: &Action) -> Result<bool> {
        match action {
            Action::Exit => return Ok(false),
            Action::PostToWorker(message) => self.post_worker_message(message.clone())?,
            Action::Navigate { location, replace } => {
                tracing::debug!(%location, replace, "recording navigation");
                self.history.record(location.clone(), *replace);
            }
            Action::Return { location } => {
                tracing::debug!(%location, "leaving detail");
                self.history.leave(location.clone());
            }
        }
        Ok(true)
    }

    fn post_worker_message(&self, message: WorkerMessage) -> Result<()> {
        tracing::trace!(?message, "posting to worker");
        self.worker.post(message)
    }

    /// Applies every response the worker has ready.
    fn drain_worker(&mut self) -> Result<()> {
        while let Some(response) = self.worker.try_recv() {
            self.dispatch(&Event::WorkerResponse(response))?;
        }
        Ok(())
    }

    fn render(&self) {
        let frame = ui::render(&self.app, self.width);
        let mut stdout = io::stdout().lock();
        // Clear screen, cursor home.
        let _ = write!(stdout, "\u{1b}[2J\u{1b}[H{frame}> ");
        let _ = stdout.flush();
    }

    fn prompt_error(message: &str) {
        let mut stdout = io::stdout().lock();
        let _ = write!(stdout, "{message}\n> ");
        let _ = stdout.flush();
    }

    /// Handles one input line. Returns `false` once the shell should exit.
    fn handle_line(&mut self, line: &str) -> Result<bool> {
        match self.map_command(line) {
            Ok(Some(event)) => self.dispatch(&event),
            Ok(None) => Ok(true),
            Err(message) => {
                Self::prompt_error(&message);
                Ok(true)
            }
        }
    }

    /// Maps a command line to an event.
    ///
    /// History moves are resolved here because history lives in the shell.
    fn map_command(&mut self, line: &str) -> std::result::Result<Option<Event>, String> {
        let line = line.trim();
        let (command, arg) = line.split_once(char::is_whitespace).unwrap_or((line, ""));
        let arg = arg.trim();

        let event = match command {
            "" => return Ok(None),
            "search" | "/" => Event::SetQuery(arg.to_string()),
            "type" => TypeFilter::parse(arg)
                .map(|filter| Event::ChangeView(ViewChange::Type(filter)))
                .ok_or_else(|| format!("unknown type `{arg}`"))?,
            "sort" => SortKey::parse(arg)
                .map(|key| Event::ChangeView(ViewChange::Sort(key)))
                .ok_or_else(|| format!("unknown sort `{arg}`"))?,
            "view" => ViewMode::parse(arg)
                .map(|mode| Event::ChangeView(ViewChange::Mode(mode)))
                .ok_or_else(|| format!("unknown view `{arg}`"))?,
            "open" => match arg.parse::<usize>() {
                Ok(index) => Event::OpenIndex(index),
                Err(_) => Event::OpenItem(arg.to_string()),
            },
            "close" => Event::CloseDetail,
            "more" => Event::LoadMore,
            "reload" => Event::Reload,
            "nav" => Event::ToggleNav,
            "theme" => Event::ToggleTheme,
            "go" => {
                let location = Location::parse(arg);
                if !location.is_list() {
                    return Err(format!("no such page `{arg}`"));
                }
                self.history.push(location.clone());
                Event::Navigate(location)
            }
            "back" => Event::Navigate(self.history.back().cloned().ok_or("no earlier page")?),
            "forward" => Event::Navigate(self.history.forward().cloned().ok_or("no later page")?),
            "quit" | "q" | "exit" => Event::Quit,
            other => return Err(format!("unknown command `{other}`")),
        };
        Ok(Some(event))
    }

    fn run(mut self, lines: &Receiver<String>) -> Result<()> {
        if !self.dispatch(&Event::Start)? {
            return self.worker.stop();
        }
        loop {
            match lines.recv_timeout(POLL_INTERVAL) {
                Ok(line) => {
                    if !self.handle_line(&line)? {
                        break;
                    }
                }
                Err(RecvTimeoutError::Timeout) => {}
                Err(RecvTimeoutError::Disconnected) => break,
            }
            self.drain_worker()?;
        }
        self.worker.stop()
    }

    /// Starts, waits for the initial fetches to settle and prints one frame.
    fn run_once(mut self, timeout: Duration) -> Result<()> {
        let (_, actions) = handle_event(&mut self.app, &Event::Start)?;
        for action in &actions {
            self.execute_action(action)?;
        }

        let deadline = Instant::now() + timeout;
        while self.app.collection.is_loading() || self.app.detail.is_loading() {
            let remaining = deadline.saturating_duration_since(Instant::now());
            if remaining.is_zero() {
                tracing::warn!("timed out waiting for initial fetches");
                break;
            }
            if let Some(response) = self.worker.recv_timeout(remaining) {
                handle_event(&mut self.app, &Event::WorkerResponse(response))?;
            }
        }

        let frame = ui::render(&self.app, self.width);
        let mut stdout = io::stdout().lock();
        writeln!(stdout, "{frame}")?;
        drop(stdout);
        self.worker.stop()
    }
}

/// Forwards stdin lines to the main loop so it can keep polling the worker.
fn spawn_stdin_reader() -> Result<Receiver<String>> {
    let (tx, rx) = mpsc::channel();
    thread::Builder::new()
        .name("dexview-stdin".to_string())
        .spawn(move || {
            for line in io::stdin().lock().lines() {
                let Ok(line) = line else { break };
                if tx.send(line).is_err() {
                    break;
                }
            }
        })?;
    Ok(rx)
}

fn main() -> std::result::Result<(), DexError> {
    let cli = Cli::parse();
    let config = cli.config()?;
    dexview::observability::init_tracing(&config);

    let location = Location::parse(&cli.location);
    tracing::info!(endpoint = %config.endpoint, %location, "dexview starting");

    let shell = Shell::new(&config, location, cli.width)?;
    if cli.once {
        shell.run_once(config.request_timeout())
    } else {
        shell.run(&spawn_stdin_reader()?)
    }
}
