//! Merged driver event source.
//!
//! Bridges blocking terminal input and async OS signal handling into one
//! channel the sync frame loop drains between frames.

use std::time::Duration;

use anyhow::{Context, Result};
use crossterm::event::{self, Event};
use tokio::runtime::{Builder, Runtime};
use tokio::sync::mpsc;

use crate::map::handle_event;
use crate::types::DriverEvent;

/// How long the key reader blocks before re-checking whether anyone is still
/// listening.
const POLL_INTERVAL: Duration = Duration::from_millis(50);

/// Receiving end of the merged event channel.
///
/// When started with [`EventSource::start`] it owns a small tokio runtime
/// running the key reader and the signal watcher.
pub struct EventSource {
    rt: Option<Runtime>,
    rx: mpsc::UnboundedReceiver<DriverEvent>,
}

impl EventSource {
    /// Start listening to the terminal and to interrupt/terminate signals.
    pub fn start() -> Result<Self> {
        let rt = Builder::new_multi_thread()
            .worker_threads(1)
            .thread_name("cube-input")
            .enable_all()
            .build()
            .context("start input runtime")?;

        let (tx, rx) = mpsc::unbounded_channel::<DriverEvent>();
        let key_tx = tx.clone();
        rt.spawn_blocking(move || read_terminal_events(key_tx));
        rt.spawn(async move {
            if wait_for_shutdown_signal().await {
                let _ = tx.send(DriverEvent::Quit);
            }
        });

        Ok(Self { rt: Some(rt), rx })
    }

    /// An event source with no listeners attached; events come only from the
    /// returned sender.
    pub fn manual() -> (mpsc::UnboundedSender<DriverEvent>, Self) {
        let (tx, rx) = mpsc::unbounded_channel::<DriverEvent>();
        (tx, Self { rt: None, rx })
    }

    /// Next pending event, without blocking.
    pub fn try_recv(&mut self) -> Option<DriverEvent> {
        self.rx.try_recv().ok()
    }

    /// Wait for the next event. `None` once every sender is gone.
    pub async fn recv(&mut self) -> Option<DriverEvent> {
        self.rx.recv().await
    }
}

impl Drop for EventSource {
    fn drop(&mut self) {
        // The key reader notices the closed channel within one poll interval.
        if let Some(rt) = self.rt.take() {
            rt.shutdown_background();
        }
    }
}

/// Map `event` and send it if it means something to the driver.
///
/// Returns `false` once the receiver is gone.
pub fn forward_event(event: &Event, tx: &mpsc::UnboundedSender<DriverEvent>) -> bool {
    match handle_event(event) {
        Some(ev) => tx.send(ev).is_ok(),
        None => !tx.is_closed(),
    }
}

fn read_terminal_events(tx: mpsc::UnboundedSender<DriverEvent>) {
    while !tx.is_closed() {
        match event::poll(POLL_INTERVAL) {
            Ok(true) => {}
            Ok(false) => continue,
            // Terminal input is gone; signals still reach the driver.
            Err(_) => return,
        }
        let Ok(ev) = event::read() else {
            return;
        };
        if !forward_event(&ev, &tx) {
            return;
        }
    }
}

/// Resolves `true` on SIGINT (or SIGTERM on unix), `false` if no handler
/// could be installed.
async fn wait_for_shutdown_signal() -> bool {
    #[cfg(unix)]
    {
        use tokio::signal::unix::{signal, SignalKind};

        match signal(SignalKind::terminate()) {
            Ok(mut terminate) => tokio::select! {
                res = tokio::signal::ctrl_c() => res.is_ok(),
                _ = terminate.recv() => true,
            },
            Err(_) => tokio::signal::ctrl_c().await.is_ok(),
        }
    }

    #[cfg(not(unix))]
    {
        tokio::signal::ctrl_c().await.is_ok()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crossterm::event::{KeyCode, KeyEvent};

    #[test]
    fn manual_source_drains_in_order() {
        let (tx, mut source) = EventSource::manual();
        tx.send(DriverEvent::TogglePause).unwrap();
        tx.send(DriverEvent::Quit).unwrap();
        assert_eq!(source.try_recv(), Some(DriverEvent::TogglePause));
        assert_eq!(source.try_recv(), Some(DriverEvent::Quit));
        assert_eq!(source.try_recv(), None);
    }

    #[test]
    fn forward_skips_unmapped_events() {
        let (tx, mut source) = EventSource::manual();
        assert!(forward_event(&Event::Key(KeyEvent::from(KeyCode::Char('x'))), &tx));
        assert!(forward_event(&Event::Key(KeyEvent::from(KeyCode::Char('p'))), &tx));
        assert_eq!(source.try_recv(), Some(DriverEvent::TogglePause));
        assert_eq!(source.try_recv(), None);
    }

    #[test]
    fn forward_reports_closed_receiver() {
        let (tx, source) = EventSource::manual();
        drop(source);
        assert!(!forward_event(&Event::Key(KeyEvent::from(KeyCode::Char('q'))), &tx));
        assert!(!forward_event(&Event::Key(KeyEvent::from(KeyCode::Char('x'))), &tx));
    }
}
