//! Polled-resource state machine and timer plumbing.
//!
//! Every remote resource the UI shows is tracked by a [`Resource`]: the last
//! successfully decoded value, the last error, and whether a fetch is in
//! flight. Fetches are numbered by a shared [`Sequence`]; a result only
//! lands if no newer fetch for the same resource has started since, so a
//! slow old response can never overwrite a fresh one.

use std::sync::Arc;
use std::sync::atomic::{AtomicU64, Ordering};
use std::time::Duration;

use tokio::task::JoinHandle;

/// State of one remote resource.
///
/// `data` survives errors: once a value has been shown it stays on screen
/// until a newer fetch succeeds, with the error displayed alongside.
#[derive(Debug)]
pub struct Resource<T> {
    pub data: Option<T>,
    pub error: Option<String>,
    pub loading: bool,
    /// Sequence number of the newest fetch started for this resource.
    issued: u64,
    /// Sequence number of the newest result that landed.
    applied: u64,
}

impl<T> Default for Resource<T> {
    fn default() -> Self {
        Self {
            data: None,
            error: None,
            loading: false,
            issued: 0,
            applied: 0,
        }
    }
}

impl<T> Resource<T> {
    /// Records that fetch `seq` has started. Newest fetch wins; an older
    /// `begin` arriving out of order is ignored.
    pub fn begin(&mut self, seq: u64) {
        if seq > self.issued {
            self.issued = seq;
            self.loading = true;
        }
    }

    /// Applies the result of fetch `seq`. Returns `false` when the result is
    /// stale (a newer result already landed) and was dropped.
    pub fn resolve(&mut self, seq: u64, result: Result<T, String>) -> bool {
        if seq <= self.applied {
            return false;
        }
        self.applied = seq;
        match result {
            Ok(value) => {
                self.data = Some(value);
                self.error = None;
            }
            // Keep the last good data on screen.
            Err(message) => self.error = Some(message),
        }
        if seq >= self.issued {
            self.loading = false;
        }
        true
    }

    /// Drops state so the next render shows the loading placeholder instead
    /// of another resource's data. In-flight results for the old identity
    /// still carry older sequence numbers and are rejected by `resolve`.
    pub fn clear(&mut self) {
        self.data = None;
        self.error = None;
        self.loading = false;
    }

    /// True until the first result (of either kind) has landed.
    pub fn is_initial(&self) -> bool {
        self.data.is_none() && self.error.is_none()
    }
}

/// Monotonic fetch counter shared between the UI task and fetch tasks.
#[derive(Clone, Debug, Default)]
pub struct Sequence(Arc<AtomicU64>);

impl Sequence {
    pub fn new() -> Self {
        Self::default()
    }

    /// Returns the next sequence number, starting from 1.
    pub fn next(&self) -> u64 {
        self.0.fetch_add(1, Ordering::Relaxed) + 1
    }
}

/// Handle to a background polling task. Dropping or stopping the handle
/// aborts the task, so a replaced poller cannot keep ticking.
#[derive(Debug)]
pub struct PollHandle {
    task: Option<JoinHandle<()>>,
}

impl PollHandle {
    pub fn stop(&mut self) {
        if let Some(task) = self.task.take() {
            task.abort();
        }
    }
}

impl Drop for PollHandle {
    fn drop(&mut self) {
        self.stop();
    }
}

/// Spawns a task that invokes `tick` immediately and then every `period`.
///
/// Ticks that fall due while a previous `tick` future is still running are
/// delayed, not stacked.
pub fn spawn_interval<F, Fut>(period: Duration, mut tick: F) -> PollHandle
where
    F: FnMut() -> Fut + Send + 'static,
    Fut: Future<Output = ()> + Send,
{
    let task = tokio::spawn(async move {
        let mut interval = tokio::time::interval(period);
        interval.set_missed_tick_behavior(tokio::time::MissedTickBehavior::Delay);
        loop {
            interval.tick().await;
            tick().await;
        }
    });
    PollHandle { task: Some(task) }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::sync::atomic::AtomicUsize;

    #[test]
    fn error_keeps_last_good_data() {
        let mut resource = Resource::<u32>::default();
        resource.begin(1);
        assert!(resource.resolve(1, Ok(7)));
        resource.begin(2);
        assert!(resource.resolve(2, Err("timeout".into())));
        assert_eq!(resource.data, Some(7));
        assert_eq!(resource.error.as_deref(), Some("timeout"));
        assert!(!resource.loading);
    }

    #[test]
    fn stale_result_is_dropped() {
        let mut resource = Resource::<u32>::default();
        resource.begin(1);
        resource.begin(2);
        assert!(resource.resolve(2, Ok(20)));
        // The older fetch finishes afterwards.
        assert!(!resource.resolve(1, Ok(10)));
        assert_eq!(resource.data, Some(20));
    }

    #[test]
    fn success_clears_previous_error() {
        let mut resource = Resource::<u32>::default();
        resource.begin(1);
        resource.resolve(1, Err("boom".into()));
        resource.begin(2);
        resource.resolve(2, Ok(3));
        assert_eq!(resource.data, Some(3));
        assert!(resource.error.is_none());
    }

    #[test]
    fn loading_holds_while_newer_fetch_in_flight() {
        let mut resource = Resource::<u32>::default();
        resource.begin(1);
        resource.begin(2);
        assert!(resource.resolve(1, Ok(1)));
        // Result 1 landed but fetch 2 is still out.
        assert!(resource.loading);
        assert!(resource.resolve(2, Ok(2)));
        assert!(!resource.loading);
    }

    #[test]
    fn sequence_is_monotonic() {
        let seq = Sequence::new();
        assert_eq!(seq.next(), 1);
        assert_eq!(seq.next(), 2);
        let clone = seq.clone();
        assert_eq!(clone.next(), 3);
    }

    #[tokio::test(start_paused = true)]
    async fn interval_fires_immediately_then_periodically() {
        let count = Arc::new(AtomicUsize::new(0));
        let seen = count.clone();
        let _handle = spawn_interval(Duration::from_secs(30), move || {
            let seen = seen.clone();
            async move {
                seen.fetch_add(1, Ordering::SeqCst);
            }
        });
        tokio::time::sleep(Duration::from_millis(1)).await;
        assert_eq!(count.load(Ordering::SeqCst), 1);
        tokio::time::sleep(Duration::from_secs(31)).await;
        assert_eq!(count.load(Ordering::SeqCst), 2);
    }

    #[tokio::test(start_paused = true)]
    async fn stopped_poll_never_ticks_again() {
        let count = Arc::new(AtomicUsize::new(0));
        let seen = count.clone();
        let mut handle = spawn_interval(Duration::from_secs(5), move || {
            let seen = seen.clone();
            async move {
                seen.fetch_add(1, Ordering::SeqCst);
            }
        });
        tokio::time::sleep(Duration::from_millis(1)).await;
        handle.stop();
        let before = count.load(Ordering::SeqCst);
        tokio::time::sleep(Duration::from_secs(60)).await;
        assert_eq!(count.load(Ordering::SeqCst), before);
    }
}
