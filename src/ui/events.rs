use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::mpsc::{self, Receiver};
use std::sync::Arc;
use std::thread;
use std::time::{Duration, Instant};

use crossterm::event::{self, Event, KeyEvent};

use crate::catalog::Book;
use crate::fetch::FetchError;

pub enum AppEvent {
    Input(KeyEvent),
    Tick,
    Resize(u16, u16),
    /// The startup fetch resolved. Sent exactly once.
    CatalogLoaded(Result<Vec<Book>, FetchError>),
}

/// Merges terminal input, ticks and background results into one queue.
pub struct EventHandler {
    rx: Receiver<AppEvent>,
    tx: mpsc::Sender<AppEvent>,
    stop: Arc<AtomicBool>,
}

impl EventHandler {
    pub fn new(tick_rate: Duration) -> Self {
        let (tx, rx) = mpsc::channel();
        let event_tx = tx.clone();
        let stop = Arc::new(AtomicBool::new(false));
        let stop_flag = Arc::clone(&stop);

        thread::Builder::new()
            .name("terminal-input".to_string())
            .spawn(move || {
                let mut last_tick = Instant::now();
                while !stop_flag.load(Ordering::Relaxed) {
                    // Short poll so the stop flag is noticed quickly.
                    let timeout = tick_rate
                        .saturating_sub(last_tick.elapsed())
                        .min(Duration::from_millis(50));

                    match event::poll(timeout) {
                        Ok(true) => match event::read() {
                            Ok(Event::Key(key)) => {
                                if event_tx.send(AppEvent::Input(key)).is_err() {
                                    break;
                                }
                            }
                            Ok(Event::Resize(cols, rows)) => {
                                let _ = event_tx.send(AppEvent::Resize(cols, rows));
                            }
                            Ok(_) => {}
                            Err(err) => {
                                tracing::error!("Terminal read failed: {}", err);
                                break;
                            }
                        },
                        Ok(false) => {}
                        Err(err) => {
                            tracing::error!("Terminal poll failed: {}", err);
                            break;
                        }
                    }

                    if last_tick.elapsed() >= tick_rate {
                        if event_tx.send(AppEvent::Tick).is_err() {
                            break;
                        }
                        last_tick = Instant::now();
                    }
                }
            })
            .map_err(|err| tracing::error!("Failed to spawn input thread: {}", err))
            .ok();

        Self { rx, tx, stop }
    }

    pub fn next(&self, timeout: Duration) -> Result<AppEvent, mpsc::RecvTimeoutError> {
        self.rx.recv_timeout(timeout)
    }

    pub fn sender(&self) -> mpsc::Sender<AppEvent> {
        self.tx.clone()
    }
}

impl Drop for EventHandler {
    fn drop(&mut self) {
        self.stop.store(true, Ordering::Relaxed);
    }
}
