mod app;
mod choice;
mod config;
mod error;
mod events;
mod log;
mod picker;
mod tui;

use anyhow::Result;
use crossterm::{
    event::{DisableMouseCapture, EnableMouseCapture, EventStream},
    execute,
    terminal::{disable_raw_mode, enable_raw_mode, EnterAlternateScreen, LeaveAlternateScreen},
};
use futures::StreamExt;
use ratatui::prelude::*;
use serde_json::Value;
use std::io::stdout;
use std::path::PathBuf;
use tokio::sync::mpsc;

use app::App;
use choice::Choice;
use config::Config;
use error::SelectorError;
use events::EventHandler;
use tui::components::SelectorLayout;

#[tokio::main]
async fn main() -> Result<()> {
    // Initialize logging and panic hook
    if let Ok(log_path) = log::init() {
        log::log(&format!("Log file: {}", log_path.display()));
        log::install_panic_hook();
    }

    // Parse CLI arguments
    let args: Vec<String> = std::env::args().collect();
    let mut config_override: Option<PathBuf> = None;

    let mut i = 1;
    while i < args.len() {
        match args[i].as_str() {
            "--config" | "-c" => {
                if i + 1 < args.len() {
                    config_override = Some(PathBuf::from(&args[i + 1]));
                    i += 2;
                    continue;
                } else {
                    eprintln!("Warning: --config requires a path argument");
                }
            }
            _ => {
                // Unknown flag, ignore
            }
        }
        i += 1;
    }

    // Load choices with precedence: CLI > env var > default path
    let config = Config::load(config_override.as_deref());
    log::log(&format!("Loaded {} choices", config.choices.len()));

    let mut app = App::new(config, config_override);

    // Setup terminal
    enable_raw_mode().map_err(|e| SelectorError::Terminal(e.to_string()))?;
    let mut stdout = stdout();
    execute!(stdout, EnterAlternateScreen, EnableMouseCapture)?;
    let backend = CrosstermBackend::new(stdout);
    let mut terminal = Terminal::new(backend)?;

    // Run the app
    let result = run_app(&mut terminal, &mut app).await;

    // Restore terminal
    disable_raw_mode()?;
    execute!(terminal.backend_mut(), DisableMouseCapture, LeaveAlternateScreen)?;
    terminal.show_cursor()?;

    result?;

    if let Some(value) = app.result() {
        log::log(&format!("Confirmed: {}", value));
        println!("{}", serde_json::to_string(value)?);
    }

    Ok(())
}

async fn run_app<B: Backend>(terminal: &mut Terminal<B>, app: &mut App) -> error::Result<()>
where
    SelectorError: From<B::Error>,
{
    // Selection changes reported by the selector listener
    let (select_tx, mut select_rx) = mpsc::unbounded_channel::<Choice<Value>>();
    app.selector.on_select(move |choice: &Choice<Value>| {
        let _ = select_tx.send(choice.clone());
    });

    let mut event_stream = EventStream::new();

    loop {
        // Render, then bind the selector arrows to the fresh geometry
        let mut layout = SelectorLayout::default();
        terminal.draw(|frame| layout = tui::ui::render(frame, app))?;
        app.bind(&layout);

        tokio::select! {
            maybe_event = event_stream.next() => {
                match maybe_event {
                    Some(Ok(event)) => {
                        let action = EventHandler::handle_event(&app.interactions, &event);
                        if action != events::Action::None {
                            log::log_event(&format!("{:?}", action));
                        }
                        app.apply(action);
                    }
                    Some(Err(e)) => return Err(e.into()),
                    None => break,
                }
            }

            Some(choice) = select_rx.recv() => {
                app.record_selection(&choice);
            }
        }

        if app.should_quit {
            break;
        }
    }

    Ok(())
}
