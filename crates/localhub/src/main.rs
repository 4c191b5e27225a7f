use anyhow::Result;
use localhub::actions::{Action, BootstrapAction, GlobalAction};
use localhub::domain_models::BootstrapPhase;
use localhub::{build_store, logger, views, Store};
use localhub_config::AppConfig;
use localhub_store::{FilePreferenceStore, MemoryPreferenceStore, PreferenceStore};
use ratatui::{
    backend::CrosstermBackend,
    crossterm::{
        event::{self, Event, KeyEventKind},
        execute,
        terminal::{disable_raw_mode, enable_raw_mode, EnterAlternateScreen, LeaveAlternateScreen},
    },
    Terminal,
};
use std::io;
use std::sync::Arc;
use std::time::{Duration, Instant};

/// Spinner frame interval while the splash is visible
const TICK_INTERVAL: Duration = Duration::from_millis(150);
const POLL_INTERVAL: Duration = Duration::from_millis(50);

fn open_preferences(config: &AppConfig) -> Arc<dyn PreferenceStore> {
    let path = match &config.store_file {
        Some(path) => Ok(path.clone()),
        None => localhub_config::preference_store_path(),
    };

    match path {
        Ok(path) => {
            log::info!("Using preference file {:?}", path);
            Arc::new(FilePreferenceStore::new(path))
        }
        Err(e) => {
            log::warn!("No preference file available, keeping flags in memory: {:#}", e);
            Arc::new(MemoryPreferenceStore::new())
        }
    }
}

#[tokio::main]
async fn main() -> Result<()> {
    let log_file = logger::init()?;
    log::info!("Starting localhub (log file {:?})", log_file);

    let config = AppConfig::load();
    let preferences = open_preferences(&config);
    let mut store = build_store(&config, preferences);

    // Setup terminal
    enable_raw_mode()?;
    let mut stdout = io::stdout();
    execute!(stdout, EnterAlternateScreen)?;
    let backend = CrosstermBackend::new(stdout);
    let mut terminal = Terminal::new(backend)?;

    store.dispatch(Action::Bootstrap(BootstrapAction::Start)).await;

    let result = run_app(&mut terminal, &mut store).await;

    // Restore terminal
    disable_raw_mode()?;
    execute!(terminal.backend_mut(), LeaveAlternateScreen)?;
    terminal.show_cursor()?;

    if let Err(err) = &result {
        log::error!("Exiting with error: {:#}", err);
    }

    log::info!("Exiting localhub");
    result
}

async fn run_app(
    terminal: &mut Terminal<CrosstermBackend<io::Stdout>>,
    store: &mut Store,
) -> Result<()> {
    let mut last_tick = Instant::now();

    loop {
        store.process_pending().await;

        terminal.draw(|frame| {
            let area = frame.area();
            views::render(store.state(), area, frame);
        })?;

        if !store.state().running {
            break;
        }

        if event::poll(POLL_INTERVAL)? {
            if let Event::Key(key) = event::read()? {
                // Only process key press events (ignore key release)
                if key.kind == KeyEventKind::Press {
                    store
                        .dispatch(Action::Global(GlobalAction::KeyPressed(key)))
                        .await;
                }
            }
        }

        if store.state().bootstrap.phase == BootstrapPhase::Splashing
            && last_tick.elapsed() >= TICK_INTERVAL
        {
            store.dispatch(Action::Global(GlobalAction::Tick)).await;
            last_tick = Instant::now();
        }
    }

    Ok(())
}
