use crate::config::Config;
use crate::fetch::CatalogClient;
use crate::ui::app::App;
use crate::ui::events::{AppEvent, EventHandler};
use crate::ui::input::handle_key;
use crate::ui::render::draw;
use crate::ui::terminal_guard::setup_terminal;
use std::io;
use std::sync::mpsc::Sender;
use std::time::Duration;
use tokio::runtime::Handle;

/// Runs the interactive catalog until the user quits.
///
/// The fetch is spawned on `runtime` and reports back through the event
/// queue, so the UI keeps drawing while it is in flight.
pub fn run(config: &Config, runtime: &Handle) -> io::Result<()> {
    let (mut terminal, guard) = setup_terminal()?;
    let tick_rate = Duration::from_millis(250);
    let mut app = App::new(config.display.clone());
    let events = EventHandler::new(tick_rate);

    spawn_fetch(config, runtime, events.sender());

    if let Ok((cols, rows)) = crossterm::terminal::size() {
        app.on_resize(cols, rows);
    }

    loop {
        terminal.draw(|frame| draw(frame, &app))?;
        if app.should_quit() {
            break;
        }

        match events.next(tick_rate) {
            Ok(AppEvent::Input(key)) => handle_key(&mut app, key),
            Ok(AppEvent::Tick) => app.on_tick(),
            Ok(AppEvent::Resize(cols, rows)) => app.on_resize(cols, rows),
            Ok(AppEvent::CatalogLoaded(result)) => app.on_catalog_loaded(result),
            Err(std::sync::mpsc::RecvTimeoutError::Timeout) => {}
            Err(std::sync::mpsc::RecvTimeoutError::Disconnected) => break,
        }
    }

    drop(guard);
    Ok(())
}

fn spawn_fetch(config: &Config, runtime: &Handle, tx: Sender<AppEvent>) {
    let client = match CatalogClient::new(&config.source) {
        Ok(client) => client,
        Err(err) => {
            tracing::error!("{}", err);
            let _ = tx.send(AppEvent::CatalogLoaded(Err(err)));
            return;
        }
    };

    runtime.spawn(async move {
        let result = client.fetch_catalog().await;
        let _ = tx.send(AppEvent::CatalogLoaded(result));
    });
}
