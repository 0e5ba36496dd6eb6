//! Resolver core combining the debounce timer with the staleness guard.
//!
//! The resolver drives one lookup session through the lifecycle
//! `Idle -> Debouncing -> InFlight -> {Applied | Ignored | Failed} -> Idle`:
//!
//! - every qualifying input change (re)arms the debounce timer
//! - at expiry the gate is re-checked against the *current* input, a
//!   sequence ticket is taken, and the fetch runs as a detached task
//! - a completed fetch mutates session state only when the resolver is
//!   still open and its ticket is still the freshest dispatch
//!
//! Cancellation is advisory: rescheduling or tearing down aborts only the
//! timer, never an in-flight fetch. Stale results are discarded on arrival.

use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::Arc;
use std::time::Duration;

use async_trait::async_trait;
use log::debug;

use super::delay::DebouncedDelay;
use super::sequence::SequenceGuard;
use crate::errors::LookupError;

/// Default quiet period before a query is dispatched.
pub const DEFAULT_DEBOUNCE: Duration = Duration::from_millis(300);

/// Default minimum trimmed input length before any query is issued.
pub const DEFAULT_MIN_QUERY_LEN: usize = 2;

/// Tuning knobs for a resolver instance.
#[derive(Clone, Debug)]
pub struct ResolverConfig {
    /// Quiet period between the last input change and dispatch.
    pub debounce: Duration,

    /// Minimum trimmed character count before a query is dispatched.
    pub min_query_len: usize,
}

impl Default for ResolverConfig {
    fn default() -> Self {
        Self {
            debounce: DEFAULT_DEBOUNCE,
            min_query_len: DEFAULT_MIN_QUERY_LEN,
        }
    }
}

/// One lookup call site: supplies query building, fetching, and result
/// application over form state it owns.
///
/// All methods other than `fetch` are synchronous snapshots/mutations of
/// that state; `fetch` is the only suspension point besides the timer.
#[async_trait]
pub trait LookupSession: Send + Sync + 'static {
    /// Query snapshot dispatched over the network boundary.
    type Query: Clone + Send + Sync + 'static;

    /// Fetched payload applied back onto form state.
    type Output: Send + 'static;

    /// Raw text the minimum-length gate is checked against.
    fn query_text(&self) -> String;

    /// Snapshot the full query from current form state.
    fn build_query(&self) -> Self::Query;

    /// Toggle the "searching" indicator on form state.
    fn set_searching(&self, searching: bool);

    /// Issue the network call for a dispatched query.
    async fn fetch(&self, query: &Self::Query) -> Result<Self::Output, LookupError>;

    /// Apply a fresh result to form state.
    ///
    /// Only called after the staleness guard has passed; the session is
    /// still responsible for any call-site-specific re-validation (e.g.
    /// comparing the live input against the dispatched query text).
    fn apply(&self, query: &Self::Query, output: Self::Output);
}

fn gate_met(text: &str, min_query_len: usize) -> bool {
    text.trim().chars().count() >= min_query_len
}

/// Debounced lookup resolver bound to one [`LookupSession`].
///
/// Owns the pending-timer handle, the sequence counter, and the teardown
/// flag; none of these are shared across resolver instances.
pub struct LookupResolver<S: LookupSession> {
    session: Arc<S>,
    config: ResolverConfig,
    guard: Arc<SequenceGuard>,
    delay: DebouncedDelay,
    closed: Arc<AtomicBool>,
}

impl<S: LookupSession> LookupResolver<S> {
    pub fn new(session: Arc<S>) -> Self {
        Self::with_config(session, ResolverConfig::default())
    }

    pub fn with_config(session: Arc<S>, config: ResolverConfig) -> Self {
        Self {
            session,
            config,
            guard: Arc::new(SequenceGuard::new()),
            delay: DebouncedDelay::new(),
            closed: Arc::new(AtomicBool::new(false)),
        }
    }

    pub fn config(&self) -> &ResolverConfig {
        &self.config
    }

    /// Notify the resolver that a watched input changed.
    ///
    /// Sub-gate input cancels the timer and clears the searching flag with
    /// no network call; qualifying input restarts the debounce timer with
    /// the latest combined query.
    pub fn notify_input(&mut self) {
        if self.closed.load(Ordering::SeqCst) {
            return;
        }

        if !gate_met(&self.session.query_text(), self.config.min_query_len) {
            self.delay.cancel();
            self.session.set_searching(false);
            return;
        }

        // The indicator covers the debounce window plus the in-flight window.
        self.session.set_searching(true);

        let session = Arc::clone(&self.session);
        let guard = Arc::clone(&self.guard);
        let closed = Arc::clone(&self.closed);
        let min_query_len = self.config.min_query_len;

        self.delay.schedule(self.config.debounce, async move {
            // The input may have shrunk below the gate while the timer was armed.
            if !gate_met(&session.query_text(), min_query_len) {
                session.set_searching(false);
                return;
            }

            let query = session.build_query();
            let seq = guard.issue();

            // Detached, so a later keystroke aborts only the timer and the
            // fetch is dropped on arrival instead of at the transport layer.
            tokio::spawn(async move {
                let outcome = session.fetch(&query).await;

                if closed.load(Ordering::SeqCst) || !guard.is_current(seq) {
                    debug!("lookup response {} superseded; dropped", seq);
                    return;
                }

                session.set_searching(false);
                match outcome {
                    Ok(output) => session.apply(&query, output),
                    Err(err) => {
                        // Lookups are assistive; failures only clear the indicator.
                        debug!("lookup {} failed, leaving form untouched: {}", seq, err);
                    }
                }
            });
        });
    }

    /// Cancel the timer and stale every outstanding dispatch.
    ///
    /// Used by terminal actions such as picking a search result.
    pub fn invalidate(&mut self) {
        self.delay.cancel();
        self.guard.invalidate();
        self.session.set_searching(false);
    }

    /// Tear the resolver down: hard-cancel the timer and flag any in-flight
    /// fetch so its resolution performs no state mutation.
    pub fn close(&mut self) {
        self.closed.store(true, Ordering::SeqCst);
        self.delay.cancel();
    }

    pub fn is_closed(&self) -> bool {
        self.closed.load(Ordering::SeqCst)
    }

    /// Whether the debounce timer is currently armed.
    pub fn is_debouncing(&self) -> bool {
        self.delay.is_pending()
    }
}

impl<S: LookupSession> Drop for LookupResolver<S> {
    fn drop(&mut self) {
        self.close();
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::VecDeque;
    use std::sync::Mutex;

    const DEBOUNCE_MS: u64 = 300;

    /// Session echoing each dispatched query, with scripted per-call
    /// latencies and failures.
    struct EchoSession {
        text: Mutex<String>,
        searching: Mutex<bool>,
        fetched: Mutex<Vec<String>>,
        applied: Mutex<Vec<String>>,
        latencies: Mutex<VecDeque<Duration>>,
        fail_next: Mutex<bool>,
    }

    impl EchoSession {
        fn new() -> Arc<Self> {
            Arc::new(Self {
                text: Mutex::new(String::new()),
                searching: Mutex::new(false),
                fetched: Mutex::new(Vec::new()),
                applied: Mutex::new(Vec::new()),
                latencies: Mutex::new(VecDeque::new()),
                fail_next: Mutex::new(false),
            })
        }

        fn set_text(&self, text: &str) {
            *self.text.lock().unwrap() = text.to_string();
        }

        fn push_latency(&self, latency: Duration) {
            self.latencies.lock().unwrap().push_back(latency);
        }

        fn fetched(&self) -> Vec<String> {
            self.fetched.lock().unwrap().clone()
        }

        fn applied(&self) -> Vec<String> {
            self.applied.lock().unwrap().clone()
        }

        fn is_searching(&self) -> bool {
            *self.searching.lock().unwrap()
        }
    }

    #[async_trait]
    impl LookupSession for EchoSession {
        type Query = String;
        type Output = String;

        fn query_text(&self) -> String {
            self.text.lock().unwrap().clone()
        }

        fn build_query(&self) -> String {
            self.text.lock().unwrap().trim().to_string()
        }

        fn set_searching(&self, searching: bool) {
            *self.searching.lock().unwrap() = searching;
        }

        async fn fetch(&self, query: &String) -> Result<String, LookupError> {
            self.fetched.lock().unwrap().push(query.clone());
            let latency = self
                .latencies
                .lock()
                .unwrap()
                .pop_front()
                .unwrap_or(Duration::ZERO);
            if !latency.is_zero() {
                tokio::time::sleep(latency).await;
            }
            if *self.fail_next.lock().unwrap() {
                return Err(LookupError::Timeout);
            }
            Ok(format!("resolved:{}", query))
        }

        fn apply(&self, _query: &String, output: String) {
            self.applied.lock().unwrap().push(output);
        }
    }

    async fn settle(ms: u64) {
        tokio::time::sleep(Duration::from_millis(ms)).await;
    }

    fn resolver(session: &Arc<EchoSession>) -> LookupResolver<EchoSession> {
        LookupResolver::with_config(
            Arc::clone(session),
            ResolverConfig {
                debounce: Duration::from_millis(DEBOUNCE_MS),
                min_query_len: 2,
            },
        )
    }

    #[tokio::test(start_paused = true)]
    async fn test_rapid_input_coalesces_to_one_dispatch() {
        let session = EchoSession::new();
        let mut resolver = resolver(&session);

        for text in ["RE", "REL", "RELIANCE"] {
            session.set_text(text);
            resolver.notify_input();
            settle(50).await;
        }
        settle(DEBOUNCE_MS + 50).await;

        assert_eq!(session.fetched(), vec!["RELIANCE"]);
        assert_eq!(session.applied(), vec!["resolved:RELIANCE"]);
        assert!(!session.is_searching());
    }

    #[tokio::test(start_paused = true)]
    async fn test_sub_gate_input_never_dispatches() {
        let session = EchoSession::new();
        let mut resolver = resolver(&session);

        for text in ["", "R", " R "] {
            session.set_text(text);
            resolver.notify_input();
            settle(DEBOUNCE_MS + 50).await;
        }

        assert!(session.fetched().is_empty());
        assert!(!session.is_searching());
    }

    #[tokio::test(start_paused = true)]
    async fn test_gate_rechecked_at_timer_expiry() {
        let session = EchoSession::new();
        let mut resolver = resolver(&session);

        session.set_text("REL");
        resolver.notify_input();
        assert!(session.is_searching());

        // Input shrinks below the gate while the timer is armed, without a
        // further notification reaching the resolver.
        session.set_text("R");
        settle(DEBOUNCE_MS + 50).await;

        assert!(session.fetched().is_empty());
        assert!(!session.is_searching());
    }

    #[tokio::test(start_paused = true)]
    async fn test_stale_response_is_ignored() {
        let session = EchoSession::new();
        let mut resolver = resolver(&session);

        // First dispatch is slow, second is fast.
        session.push_latency(Duration::from_millis(500));
        session.push_latency(Duration::from_millis(10));

        session.set_text("REL");
        resolver.notify_input();
        settle(DEBOUNCE_MS + 10).await;

        session.set_text("RELIANCE");
        resolver.notify_input();
        settle(DEBOUNCE_MS + 50).await;

        // Let the slow first response finally arrive.
        settle(600).await;

        assert_eq!(session.fetched(), vec!["REL", "RELIANCE"]);
        assert_eq!(session.applied(), vec!["resolved:RELIANCE"]);
    }

    #[tokio::test(start_paused = true)]
    async fn test_failure_is_swallowed_and_clears_indicator() {
        let session = EchoSession::new();
        let mut resolver = resolver(&session);
        *session.fail_next.lock().unwrap() = true;

        session.set_text("REL");
        resolver.notify_input();
        settle(DEBOUNCE_MS + 50).await;

        assert_eq!(session.fetched(), vec!["REL"]);
        assert!(session.applied().is_empty());
        assert!(!session.is_searching());
    }

    #[tokio::test(start_paused = true)]
    async fn test_close_with_timer_pending_suppresses_dispatch() {
        let session = EchoSession::new();
        let mut resolver = resolver(&session);

        session.set_text("REL");
        resolver.notify_input();
        resolver.close();
        settle(DEBOUNCE_MS + 100).await;

        assert!(session.fetched().is_empty());
        assert!(resolver.is_closed());
    }

    #[tokio::test(start_paused = true)]
    async fn test_close_with_fetch_in_flight_suppresses_apply() {
        let session = EchoSession::new();
        let mut resolver = resolver(&session);
        session.push_latency(Duration::from_millis(200));

        session.set_text("REL");
        resolver.notify_input();
        settle(DEBOUNCE_MS + 10).await;
        assert_eq!(session.fetched(), vec!["REL"]);

        resolver.close();
        settle(300).await;

        assert!(session.applied().is_empty());
    }

    #[tokio::test(start_paused = true)]
    async fn test_invalidate_stales_in_flight_dispatch() {
        let session = EchoSession::new();
        let mut resolver = resolver(&session);
        session.push_latency(Duration::from_millis(200));

        session.set_text("REL");
        resolver.notify_input();
        settle(DEBOUNCE_MS + 10).await;

        resolver.invalidate();
        settle(300).await;

        assert!(session.applied().is_empty());
        assert!(!session.is_searching());
    }

    #[tokio::test(start_paused = true)]
    async fn test_input_after_close_is_a_no_op() {
        let session = EchoSession::new();
        let mut resolver = resolver(&session);

        resolver.close();
        session.set_text("RELIANCE");
        resolver.notify_input();
        settle(DEBOUNCE_MS + 50).await;

        assert!(session.fetched().is_empty());
        assert!(!session.is_searching());
    }
}
