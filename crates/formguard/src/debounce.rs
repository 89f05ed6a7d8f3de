//! Trailing-edge debounce built on a cancellable tokio task

use std::time::Duration;

use tokio::runtime::Handle;
use tokio::task::JoinHandle;
use tokio::time::{sleep_until, Instant};

/// Identifies one scheduled run
///
/// A ticket is only honoured while it is the latest one issued; any later
/// `schedule` or `cancel` invalidates it.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Ticket(u64);

/// A resettable deferred task
///
/// Each `schedule` aborts the pending task and starts the quiet period over, so
/// only the last call in a burst fires. Dropping the debouncer aborts whatever
/// is pending.
#[derive(Debug)]
pub struct Debouncer {
    timeout: Duration,
    generation: u64,
    pending: Option<JoinHandle<()>>,
}

impl Debouncer {
    pub fn new(timeout: Duration) -> Self {
        Self {
            timeout,
            generation: 0,
            pending: None,
        }
    }

    pub fn timeout(&self) -> Duration {
        self.timeout
    }

    /// Schedules `on_fire` after the quiet period, replacing any pending run
    ///
    /// `on_fire` receives its ticket and must call [`complete`](Self::complete)
    /// before acting, so a run that lost a race with `cancel` does nothing.
    pub fn schedule<F>(&mut self, runtime: &Handle, on_fire: F) -> Ticket
    where
        F: FnOnce(Ticket) + Send + 'static,
    {
        self.cancel();

        let ticket = Ticket(self.generation);
        let deadline = Instant::now() + self.timeout;
        self.pending = Some(runtime.spawn(async move {
            sleep_until(deadline).await;
            on_fire(ticket);
        }));

        ticket
    }

    /// Drops the pending run, if any. Returns whether one was pending.
    pub fn cancel(&mut self) -> bool {
        self.generation = self.generation.wrapping_add(1);
        match self.pending.take() {
            Some(handle) => {
                handle.abort();
                true
            }
            None => false,
        }
    }

    /// Claims a firing ticket; true only for the latest scheduled run
    pub fn complete(&mut self, ticket: Ticket) -> bool {
        if ticket.0 != self.generation || self.pending.is_none() {
            return false;
        }
        self.pending = None;
        self.generation = self.generation.wrapping_add(1);
        true
    }

    pub fn is_pending(&self) -> bool {
        self.pending.is_some()
    }
}

impl Drop for Debouncer {
    fn drop(&mut self) {
        if let Some(handle) = self.pending.take() {
            handle.abort();
        }
    }
}
