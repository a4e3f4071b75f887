// src/main.rs

use color_eyre::eyre::{Result, WrapErr};
use crossterm::{
    ExecutableCommand,
    event::{
        self, DisableMouseCapture, EnableMouseCapture, Event, KeyCode, KeyEvent, KeyEventKind,
        KeyModifiers,
    },
    terminal::{EnterAlternateScreen, LeaveAlternateScreen, disable_raw_mode, enable_raw_mode},
};
use ratatui::prelude::*;
use std::io::stdout;
use std::time::Duration;
use tokio::sync::mpsc;
use tracing::{debug, info};

use xssorcist::app::App;
use xssorcist::config::Config;
use xssorcist::core::backend::Backend;
use xssorcist::core::error::ScanError;
use xssorcist::core::export::{DiskDownloader, ExportClient, ExportStatus};
use xssorcist::core::models::VulnerabilityReport;
use xssorcist::{logging, ui};

/// Results coming back from background tasks.
enum AppEvent {
    ScanFinished(u64, Result<VulnerabilityReport, ScanError>),
    ExportFinished(ExportStatus),
}

/// Handles shared by every background task.
struct Services {
    backend: Backend,
    exporter: ExportClient<DiskDownloader>,
    tx: mpsc::Sender<AppEvent>,
}

#[tokio::main]
async fn main() -> Result<()> {
    color_eyre::install()?;
    let log_path = logging::initialize_logging()?;

    let config = Config::from_env().wrap_err("invalid configuration")?;
    let backend = Backend::new(&config)?;
    let exporter = ExportClient::new(backend.clone(), DiskDownloader::from_user_dirs());
    info!(backend = %config.backend_url, log = %log_path.display(), "XSSorcist starting.");

    let (tx, mut rx) = mpsc::channel(8);
    let services = Services { backend, exporter, tx };

    // --- Setup ---
    stdout().execute(EnterAlternateScreen)?;
    stdout().execute(EnableMouseCapture)?;
    enable_raw_mode()?;
    let mut terminal = Terminal::new(CrosstermBackend::new(stdout()))?;
    terminal.clear()?;

    let mut app = App::new();
    let run_result = run(&mut terminal, &mut app, &services, &mut rx).await;

    // --- Restore Terminal ---
    stdout().execute(LeaveAlternateScreen)?;
    stdout().execute(DisableMouseCapture)?;
    disable_raw_mode()?;
    info!("XSSorcist exiting.");
    run_result
}

async fn run<B: ratatui::backend::Backend>(
    terminal: &mut Terminal<B>,
    app: &mut App,
    services: &Services,
    rx: &mut mpsc::Receiver<AppEvent>,
) -> Result<()> {
    while !app.should_quit {
        terminal.draw(|frame| ui::render(app, frame))?;

        if event::poll(Duration::from_millis(100))? {
            if let Event::Key(key) = event::read()? {
                if key.kind == KeyEventKind::Press {
                    handle_key(app, key, services);
                }
            }
        }

        while let Ok(event) = rx.try_recv() {
            match event {
                AppEvent::ScanFinished(id, outcome) => app.on_scan_finished(id, outcome),
                AppEvent::ExportFinished(status) => app.on_export_finished(status),
            }
        }
        app.on_tick();
    }
    Ok(())
}

fn handle_key(app: &mut App, key: KeyEvent, services: &Services) {
    let ctrl = key.modifiers.contains(KeyModifiers::CONTROL);
    match key.code {
        KeyCode::Esc => app.quit(),
        KeyCode::Char('c') if ctrl => app.quit(),
        KeyCode::Char('d') if ctrl => start_export(app, services),
        KeyCode::Char('n') if ctrl => app.reset(),
        KeyCode::Up => app.scroll_up(),
        KeyCode::Down => app.scroll_down(),
        // Input is frozen while a scan is running, like the disabled scan button.
        _ if app.scan.is_loading() => {}
        KeyCode::Enter => start_scan(app, services),
        KeyCode::Char(c) if !ctrl => app.input.push(c),
        KeyCode::Backspace => {
            app.input.pop();
        }
        _ => {}
    }
}

fn start_scan(app: &mut App, services: &Services) {
    let Some(ticket) = app.submit() else {
        return;
    };
    let backend = services.backend.clone();
    let tx = services.tx.clone();
    tokio::spawn(async move {
        let outcome = backend.fetch_report(&ticket.target).await;
        if tx
            .send(AppEvent::ScanFinished(ticket.id, outcome))
            .await
            .is_err()
        {
            debug!(request = ticket.id, "UI gone, dropping scan result.");
        }
    });
}

fn start_export(app: &mut App, services: &Services) {
    let Some((report, url)) = app.request_export() else {
        return;
    };
    let exporter = services.exporter.clone();
    let tx = services.tx.clone();
    tokio::spawn(async move {
        let status = exporter.export_report(Some(&report), &url).await;
        if tx.send(AppEvent::ExportFinished(status)).await.is_err() {
            debug!("UI gone, dropping export result.");
        }
    });
}
