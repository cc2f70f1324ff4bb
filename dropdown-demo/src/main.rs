mod app;
mod error;
mod paths;
mod picker;

use std::fs::{self, File};
use std::time::Duration;

use crossterm::event::EventStream;
use dropdom::{Event, FocusState, Terminal};
use dropdown::{DropdownConfig, EventContext};
use futures::StreamExt;
use log::{debug, error, info};
use simplelog::{Config, LevelFilter, WriteLogger};
use tokio::time::MissedTickBehavior;

use app::{App, Flow};
use error::DemoError;

const TICK: Duration = Duration::from_millis(80);

#[tokio::main]
async fn main() {
    if let Err(e) = run().await {
        eprintln!("Error: {}", e);
    }
}

async fn run() -> Result<(), DemoError> {
    init_logging()?;
    let config = load_config()?;

    let mut app = App::new(config);
    app.mount();

    let mut term = Terminal::new()?;
    let mut focus = FocusState::new();
    let mut events = EventStream::new();
    let mut ticker = tokio::time::interval(TICK);
    ticker.set_missed_tick_behavior(MissedTickBehavior::Skip);

    let mut root = app.element();
    let mut layout = term.render(&root, focus.focused())?.clone();

    loop {
        let raw = tokio::select! {
            Some(result) = events.next() => match result {
                Ok(event) => vec![event],
                Err(e) => {
                    error!("Event stream error: {}", e);
                    continue;
                }
            },
            _ = ticker.tick(), if app.is_animating() => {
                app.tick();
                Vec::new()
            }
            else => break,
        };

        let cx = EventContext {
            root: &root,
            layout: &layout,
            viewport: layout.bounds(),
        };
        // Pointer movement that changes nothing does not need a frame.
        let mut redraw = false;
        for event in focus.process_events(&raw, &root, &layout) {
            debug!("Event: {:?}", event);
            redraw |= !matches!(event, Event::MouseMove { .. });
            if app.handle(&event, &cx, &mut focus) == Flow::Quit {
                info!("Quit requested");
                return Ok(());
            }
        }

        if !(app.take_dirty() || redraw) {
            continue;
        }
        root = app.element();
        let lost = focus.sync(&root);
        if !lost.is_empty() {
            let cx = EventContext {
                root: &root,
                layout: &layout,
                viewport: layout.bounds(),
            };
            for event in &lost {
                app.handle(event, &cx, &mut focus);
            }
            root = app.element();
        }
        layout = term.render(&root, focus.focused())?.clone();
    }

    Ok(())
}

fn init_logging() -> Result<(), DemoError> {
    let path = paths::log_file().unwrap_or_else(|| "dropdown-demo.log".into());
    if let Some(dir) = path.parent() {
        fs::create_dir_all(dir)?;
    }
    let log_file = File::create(&path)?;
    WriteLogger::init(LevelFilter::Debug, Config::default(), log_file)?;
    info!("Logging to {}", path.display());
    Ok(())
}

fn load_config() -> Result<DropdownConfig, DemoError> {
    match paths::config_file() {
        Some(path) => Ok(DropdownConfig::load_or_default(path)?),
        None => {
            info!("No config directory, using defaults");
            Ok(DropdownConfig::default())
        }
    }
}
