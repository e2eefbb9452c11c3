//! Copying secrets to the clipboard with a timed auto-clear.
//!
//! `ClipboardGuard::copy` writes a secret and queues a clear for
//! `CLIPBOARD_CLEAR_DELAY` later. Nothing runs in the background: the
//! owner calls `run_due` (or `wait_and_clear`) from its own loop. When a
//! queued clear fires it only wipes the clipboard if
//!
//! - no later `copy` went through this guard, and
//! - the clipboard still holds the copied value.
//!
//! So a later copy, or anything the user copied in the meantime, is left
//! alone. Pending clears are never cancelled; they just find nothing to do.

pub mod backend;

use std::collections::VecDeque;
use std::time::{Duration, Instant};

use tracing::{debug, info};
use zeroize::Zeroizing;

use crate::errors::Result;

pub use backend::{ClipboardBackend, MemoryClipboard, SystemClipboard};

/// How long a copied secret stays on the clipboard.
pub const CLIPBOARD_CLEAR_DELAY: Duration = Duration::from_secs(10);

/// What a fired clear did.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ClearOutcome {
    /// The secret was still there and has been wiped.
    Cleared,
    /// A later copy through this guard owns the clipboard now.
    Superseded,
    /// The clipboard holds something else; left untouched.
    Replaced,
}

struct PendingClear {
    value: Zeroizing<String>,
    generation: u64,
    due: Instant,
}

pub struct ClipboardGuard<B: ClipboardBackend> {
    backend: B,
    delay: Duration,
    generation: u64,
    pending: VecDeque<PendingClear>,
}

impl<B: ClipboardBackend> ClipboardGuard<B> {
    pub fn new(backend: B) -> Self {
        Self::with_delay(backend, CLIPBOARD_CLEAR_DELAY)
    }

    pub fn with_delay(backend: B, delay: Duration) -> Self {
        Self {
            backend,
            delay,
            generation: 0,
            pending: VecDeque::new(),
        }
    }

    /// Put `secret` on the clipboard and schedule its clear.
    ///
    /// Returns when the clear becomes due.
    pub fn copy(&mut self, secret: &str) -> Result<Instant> {
        self.copy_at(secret, Instant::now())
    }

    /// Like `copy`, with an explicit notion of "now".
    pub fn copy_at(&mut self, secret: &str, now: Instant) -> Result<Instant> {
        self.backend.set_text(secret)?;

        self.generation += 1;
        let due = now + self.delay;
        self.pending.push_back(PendingClear {
            value: Zeroizing::new(secret.to_string()),
            generation: self.generation,
            due,
        });

        info!(
            generation = self.generation,
            delay_secs = self.delay.as_secs(),
            "secret copied to clipboard"
        );
        Ok(due)
    }

    /// Fire every clear that is due at `now`, oldest first.
    pub fn run_due(&mut self, now: Instant) -> Result<Vec<ClearOutcome>> {
        let mut outcomes = Vec::new();

        while self.pending.front().is_some_and(|task| task.due <= now) {
            let Some(task) = self.pending.pop_front() else {
                break;
            };
            outcomes.push(self.fire(&task)?);
        }

        Ok(outcomes)
    }

    /// Block until every pending clear is due, then fire them.
    pub fn wait_and_clear(&mut self) -> Result<Vec<ClearOutcome>> {
        if let Some(last) = self.pending.back().map(|task| task.due) {
            let now = Instant::now();
            if last > now {
                std::thread::sleep(last - now);
            }
        }
        self.run_due(Instant::now())
    }

    /// When the next queued clear is due, if any.
    pub fn next_due(&self) -> Option<Instant> {
        self.pending.front().map(|task| task.due)
    }

    pub fn pending(&self) -> usize {
        self.pending.len()
    }

    pub fn delay(&self) -> Duration {
        self.delay
    }

    pub fn backend(&self) -> &B {
        &self.backend
    }

    pub fn backend_mut(&mut self) -> &mut B {
        &mut self.backend
    }

    fn fire(&mut self, task: &PendingClear) -> Result<ClearOutcome> {
        if task.generation != self.generation {
            debug!(generation = task.generation, "clipboard clear superseded");
            return Ok(ClearOutcome::Superseded);
        }

        let current = self.backend.get_text()?.map(Zeroizing::new);
        if current.as_deref().map(String::as_str) != Some(task.value.as_str()) {
            debug!(generation = task.generation, "clipboard changed, not clearing");
            return Ok(ClearOutcome::Replaced);
        }

        self.backend.clear()?;
        info!(generation = task.generation, "clipboard cleared");
        Ok(ClearOutcome::Cleared)
    }
}
