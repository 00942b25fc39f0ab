//! Launch Scholar - the Launch Scholar site as a terminal application
//!
//! A Ratatui-based single-page site: hero, about, philosophy, services
//! and a contact form with validation and a simulated (or HTTP) send.

mod app;
mod config;
mod content;
mod platform;
mod state;
mod transport;
mod ui;
mod validation;

use anyhow::Result;
use app::App;
use config::SiteConfig;
use crossterm::event::{self, Event, KeyEventKind};
use ratatui::{backend::Backend, Terminal};
use std::fs::{self, File};
use std::io;
use std::sync::Mutex;
use std::time::Duration;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};
use ui::TerminalSession;

#[tokio::main]
async fn main() -> Result<()> {
    init_logging();

    let config = SiteConfig::load()?;
    let transport = transport::from_config(&config)?;
    let mut app = App::new(&config, transport);
    app.apply_launch_args(std::env::args().skip(1))?;

    let mut session = TerminalSession::start()?;
    let result = run_app(&mut session.terminal, &mut app).await;

    // Restore the terminal before reporting anything
    drop(session);

    if let Err(err) = result {
        tracing::error!(error = ?err, "exiting with error");
        eprintln!("Error: {err:?}");
        std::process::exit(1);
    }

    Ok(())
}

/// Logs go to a file; the terminal belongs to the UI
fn init_logging() {
    let filter = tracing_subscriber::EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| "launch_scholar=info".into());

    let log_file = SiteConfig::log_path().and_then(|path| {
        if let Some(dir) = path.parent() {
            fs::create_dir_all(dir).ok()?;
        }
        File::create(path).ok()
    });

    let registry = tracing_subscriber::registry().with(filter);
    match log_file {
        Some(file) => registry
            .with(
                tracing_subscriber::fmt::layer()
                    .with_ansi(false)
                    .with_writer(Mutex::new(file)),
            )
            .init(),
        None => registry
            .with(tracing_subscriber::fmt::layer().with_writer(io::sink))
            .init(),
    }
}

async fn run_app<B: Backend>(terminal: &mut Terminal<B>, app: &mut App) -> Result<()> {
    loop {
        let term_size = terminal.size()?;
        app.update_layout(term_size.width, term_size.height);

        // Smooth scroll, delayed reveal and finished submissions
        app.tick();

        terminal.draw(|frame| ui::draw(frame, app))?;

        // Faster polling while something is moving (16ms = ~60fps)
        let poll_duration = if app.is_animating() {
            Duration::from_millis(16)
        } else {
            Duration::from_millis(100)
        };

        if event::poll(poll_duration)? {
            match event::read()? {
                Event::Key(key) if key.kind == KeyEventKind::Press => app.handle_key(key),
                Event::Mouse(mouse) => app.handle_mouse(mouse),
                Event::Resize(_width, _height) => {
                    // Layout is recomputed at the top of the next iteration
                }
                _ => {}
            }
        }

        if app.should_quit() {
            tracing::info!("quit requested");
            return Ok(());
        }
    }
}
