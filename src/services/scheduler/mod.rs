//! Fixed-cadence timers for embedders.
//!
//! A `RepeatingTimer` owns one worker thread that fires a callback every
//! interval until cancelled. Cancellation is synchronous: once `cancel`
//! (or drop) returns, the callback will not fire again, so a replacement
//! timer can be spawned without the two overlapping.

use std::sync::mpsc::{self, RecvTimeoutError, Sender};
use std::thread::{self, JoinHandle};
use std::time::Duration;

pub struct RepeatingTimer {
    cancel_tx: Sender<()>,
    handle: Option<JoinHandle<()>>,
}

impl RepeatingTimer {
    /// Fire `callback` every `interval` until cancelled. The first firing
    /// happens one full interval after spawn, matching a UI timer that
    /// starts counting when armed.
    pub fn spawn<F>(interval: Duration, mut callback: F) -> Self
    where
        F: FnMut() + Send + 'static,
    {
        let (cancel_tx, cancel_rx) = mpsc::channel();

        let handle = thread::spawn(move || loop {
            match cancel_rx.recv_timeout(interval) {
                Err(RecvTimeoutError::Timeout) => callback(),
                Ok(()) | Err(RecvTimeoutError::Disconnected) => break,
            }
        });

        Self {
            cancel_tx,
            handle: Some(handle),
        }
    }

    /// Stop the timer and wait for the worker thread to finish.
    pub fn cancel(mut self) {
        self.stop();
    }

    fn stop(&mut self) {
        let _ = self.cancel_tx.send(());
        if let Some(handle) = self.handle.take() {
            let _ = handle.join();
        }
    }
}

impl Drop for RepeatingTimer {
    fn drop(&mut self) {
        self.stop();
    }
}
