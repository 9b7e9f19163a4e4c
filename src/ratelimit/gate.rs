//! Fixed-window permit gate.
//!
//! The gate admits at most `limit` operations per window. Permits are
//! consumed on [`PermitGate::acquire`] and never released by callers; a
//! background task restores capacity to the full limit on a fixed cadence
//! that is independent of acquisitions. This limits *calls per window*, not
//! concurrency, and accepts the usual fixed-window boundary behavior: up to
//! `2 * limit` calls can straddle two adjacent windows.

use std::sync::Arc;
use std::time::Duration;
use tokio::sync::Semaphore;
use tokio::task::JoinHandle;
use tokio::time::MissedTickBehavior;
use tracing::{debug, trace};

use crate::error::{CrptError, Result};

use super::window::TimeWindow;

/// An admission gate that allows at most `limit` acquisitions per window.
///
/// The gate is thread-safe; any number of tasks may call `acquire`
/// concurrently. Waiting tasks block only themselves, never the
/// replenishment schedule.
pub struct PermitGate {
    /// Available permits; consumed on acquire, topped up by the replenisher
    semaphore: Arc<Semaphore>,
    /// Maximum admissions per window
    limit: usize,
    /// Background task restoring capacity once per window
    replenisher: JoinHandle<()>,
}

impl PermitGate {
    /// Create a new permit gate admitting `limit` operations per
    /// `duration` units of `window`.
    ///
    /// Fails with [`CrptError::InvalidArgument`] if `limit` or `duration`
    /// is zero; no background task is started in that case.
    pub fn new(window: TimeWindow, duration: u64, limit: usize) -> Result<Self> {
        if limit == 0 {
            return Err(CrptError::InvalidArgument(
                "request limit must be positive".to_string(),
            ));
        }
        if duration == 0 {
            return Err(CrptError::InvalidArgument(
                "window duration must be positive".to_string(),
            ));
        }

        let period = Duration::from_secs(window.duration().as_secs().saturating_mul(duration));
        let semaphore = Arc::new(Semaphore::new(limit));

        debug!(
            limit = limit,
            period_secs = period.as_secs(),
            "Starting permit replenisher"
        );
        let replenisher = tokio::spawn(replenish(Arc::clone(&semaphore), limit, period));

        Ok(Self {
            semaphore,
            limit,
            replenisher,
        })
    }

    /// Create a gate with a window of a single `window` unit.
    pub fn per(window: TimeWindow, limit: usize) -> Result<Self> {
        Self::new(window, 1, limit)
    }

    /// Wait until a permit is available and consume it.
    ///
    /// Suspends the calling task while the current window's quota is
    /// exhausted. The permit is not returned by the caller; capacity comes
    /// back only when the replenisher fires. Dropping the returned future
    /// while waiting consumes nothing.
    ///
    /// # Errors
    ///
    /// Returns [`CrptError::Interrupted`] if the gate was shut down while
    /// waiting (or before the call).
    pub async fn acquire(&self) -> Result<()> {
        let permit = self
            .semaphore
            .acquire()
            .await
            .map_err(|_| CrptError::Interrupted)?;

        // Consume the permit for the rest of the window.
        permit.forget();
        trace!(
            remaining = self.semaphore.available_permits(),
            "Acquired a permit"
        );
        Ok(())
    }

    /// Get the number of permits currently available.
    pub fn available_permits(&self) -> usize {
        self.semaphore.available_permits()
    }

    /// Get the maximum admissions per window.
    pub fn limit(&self) -> usize {
        self.limit
    }

    /// Shut the gate down.
    ///
    /// Cancels the replenishment task and fails all current and future
    /// `acquire` calls with [`CrptError::Interrupted`].
    pub fn shutdown(&self) {
        debug!("Shutting down permit gate");
        self.semaphore.close();
        self.replenisher.abort();
    }
}

impl Drop for PermitGate {
    fn drop(&mut self) {
        // The replenisher must not outlive the gate.
        self.replenisher.abort();
    }
}

/// Restore capacity to `limit` once per `period`.
///
/// Tops up rather than adds: permits consumed in the previous window are
/// restored, and available permits never exceed `limit`.
async fn replenish(semaphore: Arc<Semaphore>, limit: usize, period: Duration) {
    let mut interval = tokio::time::interval(period);
    interval.set_missed_tick_behavior(MissedTickBehavior::Delay);
    // The first tick completes immediately; skip it so the first top-up
    // happens one full period after construction.
    interval.tick().await;

    loop {
        interval.tick().await;
        let consumed = limit.saturating_sub(semaphore.available_permits());
        if consumed > 0 {
            semaphore.add_permits(consumed);
            debug!(restored = consumed, "Replenished permits");
        }
    }
}
