//! Rate limiting for the interactive path, owned by each caller.

use std::time::{Duration, Instant};

use box_types::FormParameters;

/// Holds back rapid parameter edits so only the settled value is rebuilt.
///
/// The first edit after an idle spell is released at once. Later edits wait
/// for `quiet_period` without another submission, but never longer than
/// `max_wait` after the first held edit. Time is supplied by the caller.
#[derive(Debug, Clone)]
pub struct PreviewDebouncer {
    quiet_period: Duration,
    max_wait: Duration,
    pending: Option<FormParameters>,
    last_submit: Option<Instant>,
    held_since: Option<Instant>,
    last_release: Option<Instant>,
}

impl Default for PreviewDebouncer {
    fn default() -> Self {
        Self::new(Duration::from_millis(30), Duration::from_millis(150))
    }
}

impl PreviewDebouncer {
    pub fn new(quiet_period: Duration, max_wait: Duration) -> Self {
        Self {
            quiet_period,
            max_wait: max_wait.max(quiet_period),
            pending: None,
            last_submit: None,
            held_since: None,
            last_release: None,
        }
    }

    /// Record the latest parameters, replacing any still held.
    pub fn submit(&mut self, params: FormParameters, now: Instant) {
        self.pending = Some(params);
        self.last_submit = Some(now);
        self.held_since.get_or_insert(now);
    }

    /// The parameters to rebuild now, if any are due.
    pub fn poll(&mut self, now: Instant) -> Option<FormParameters> {
        let last_submit = self.last_submit?;
        let held_since = self.held_since?;
        self.pending.as_ref()?;

        let idle_before = self
            .last_release
            .map_or(true, |t| held_since.saturating_duration_since(t) >= self.quiet_period);
        let leading = idle_before && held_since == last_submit;
        let settled = now.saturating_duration_since(last_submit) >= self.quiet_period;
        let overdue = now.saturating_duration_since(held_since) >= self.max_wait;

        if leading || settled || overdue {
            self.release(now)
        } else {
            None
        }
    }

    /// Release whatever is held regardless of timing.
    pub fn flush(&mut self, now: Instant) -> Option<FormParameters> {
        self.release(now)
    }

    pub fn has_pending(&self) -> bool {
        self.pending.is_some()
    }

    fn release(&mut self, now: Instant) -> Option<FormParameters> {
        let params = self.pending.take()?;
        self.held_since = None;
        self.last_release = Some(now);
        Some(params)
    }
}
