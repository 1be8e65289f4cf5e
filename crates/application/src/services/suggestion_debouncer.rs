//! Debounced location suggestions
//!
//! Keystrokes arrive through [`SuggestionDebouncer::input_changed`]. Only the
//! last query inside the delay window reaches the geocoding port, and results
//! are published on the receiver returned by [`SuggestionDebouncer::new`].
//! Picking a suggestion rewrites the input once; that echo is swallowed so it
//! does not trigger another lookup.

use std::sync::atomic::{AtomicBool, Ordering};
use std::time::Duration;

use domain::entities::LocationSuggestion;
use parking_lot::Mutex;
use tokio::sync::mpsc;
use tokio::task::JoinHandle;
use tracing::{debug, warn};

use crate::services::location_search_service::LocationSearchService;

/// Default quiet period before a lookup fires
pub const DEFAULT_DEBOUNCE: Duration = Duration::from_millis(500);

const UPDATE_CHANNEL_CAPACITY: usize = 16;

/// Suggestions resolved for one query
#[derive(Debug, Clone, PartialEq)]
pub struct SuggestionUpdate {
    pub query: String,
    pub suggestions: Vec<LocationSuggestion>,
}

/// Cancels stale lookups and suppresses the echo of a selection
#[derive(Debug)]
pub struct SuggestionDebouncer {
    search: LocationSearchService,
    delay: Duration,
    updates: mpsc::Sender<SuggestionUpdate>,
    pending: Mutex<Option<JoinHandle<()>>>,
    suppress_next: AtomicBool,
}

impl SuggestionDebouncer {
    /// Create a debouncer and the receiver its updates arrive on
    pub fn new(
        search: LocationSearchService,
        delay: Duration,
    ) -> (Self, mpsc::Receiver<SuggestionUpdate>) {
        let (updates, receiver) = mpsc::channel(UPDATE_CHANNEL_CAPACITY);
        let debouncer = Self {
            search,
            delay,
            updates,
            pending: Mutex::new(None),
            suppress_next: AtomicBool::new(false),
        };
        (debouncer, receiver)
    }

    pub const fn delay(&self) -> Duration {
        self.delay
    }

    /// Register new input text
    ///
    /// Must be called from within a Tokio runtime.
    pub fn input_changed(&self, query: &str) {
        if self.suppress_next.swap(false, Ordering::AcqRel) {
            debug!("Input echo after selection suppressed");
            return;
        }

        let mut pending = self.pending.lock();
        if let Some(task) = pending.take() {
            task.abort();
        }

        let query = query.trim().to_string();
        if query.is_empty() {
            return;
        }

        let search = self.search.clone();
        let updates = self.updates.clone();
        let delay = self.delay;
        *pending = Some(tokio::spawn(async move {
            tokio::time::sleep(delay).await;
            match search.search(&query).await {
                Ok(suggestions) => {
                    if updates
                        .send(SuggestionUpdate { query, suggestions })
                        .await
                        .is_err()
                    {
                        debug!("Suggestion receiver dropped");
                    }
                },
                Err(e) => warn!(error = %e, "Suggestion lookup failed"),
            }
        }));
    }

    /// A suggestion was picked; the next input change is its echo
    pub fn suggestion_selected(&self) {
        self.cancel();
        self.suppress_next.store(true, Ordering::Release);
    }

    /// Abort any scheduled lookup
    pub fn cancel(&self) {
        if let Some(task) = self.pending.lock().take() {
            task.abort();
        }
    }
}

impl Drop for SuggestionDebouncer {
    fn drop(&mut self) {
        self.cancel();
    }
}

#[cfg(test)]
mod tests {
    use std::sync::Arc;

    use super::*;
    use crate::error::ApplicationError;
    use crate::ports::MockGeocodingPort;

    const DELAY: Duration = Duration::from_millis(500);

    fn suggestion(name: &str) -> LocationSuggestion {
        LocationSuggestion {
            name: name.to_string(),
            country: "FR".to_string(),
            state: None,
            lat: 48.8566,
            lon: 2.3522,
        }
    }

    fn debouncer(mock: MockGeocodingPort) -> (SuggestionDebouncer, mpsc::Receiver<SuggestionUpdate>) {
        SuggestionDebouncer::new(LocationSearchService::new(Arc::new(mock)), DELAY)
    }

    async fn nothing_published(rx: &mut mpsc::Receiver<SuggestionUpdate>) -> bool {
        tokio::time::timeout(DELAY * 4, rx.recv()).await.is_err()
    }

    #[tokio::test(start_paused = true)]
    async fn last_keystroke_in_window_wins() {
        let mut mock = MockGeocodingPort::new();
        mock.expect_is_configured().return_const(true);
        mock.expect_search()
            .withf(|query, _| query == "Par")
            .times(1)
            .returning(|_, _| Ok(vec![suggestion("Paris")]));

        let (debouncer, mut rx) = debouncer(mock);
        debouncer.input_changed("P");
        tokio::time::sleep(Duration::from_millis(100)).await;
        debouncer.input_changed("Pa");
        tokio::time::sleep(Duration::from_millis(100)).await;
        debouncer.input_changed("Par");

        let update = rx.recv().await.unwrap();
        assert_eq!(update.query, "Par");
        assert_eq!(update.suggestions[0].name, "Paris");
        assert!(nothing_published(&mut rx).await);
    }

    #[tokio::test(start_paused = true)]
    async fn separate_windows_each_publish() {
        let mut mock = MockGeocodingPort::new();
        mock.expect_is_configured().return_const(true);
        mock.expect_search()
            .times(2)
            .returning(|query, _| Ok(vec![suggestion(query)]));

        let (debouncer, mut rx) = debouncer(mock);
        debouncer.input_changed("Lyon");
        assert_eq!(rx.recv().await.unwrap().query, "Lyon");
        debouncer.input_changed("Lille");
        assert_eq!(rx.recv().await.unwrap().query, "Lille");
    }

    #[tokio::test(start_paused = true)]
    async fn selection_suppresses_exactly_one_change() {
        let mut mock = MockGeocodingPort::new();
        mock.expect_is_configured().return_const(true);
        mock.expect_search()
            .withf(|query, _| query == "Paris, FR!")
            .times(1)
            .returning(|query, _| Ok(vec![suggestion(query)]));

        let (debouncer, mut rx) = debouncer(mock);
        debouncer.suggestion_selected();
        debouncer.input_changed("Paris, FR");
        assert!(nothing_published(&mut rx).await);

        debouncer.input_changed("Paris, FR!");
        assert_eq!(rx.recv().await.unwrap().query, "Paris, FR!");
    }

    #[tokio::test(start_paused = true)]
    async fn selection_cancels_pending_lookup() {
        let mut mock = MockGeocodingPort::new();
        mock.expect_is_configured().return_const(true);
        mock.expect_search().times(0);

        let (debouncer, mut rx) = debouncer(mock);
        debouncer.input_changed("Pari");
        tokio::time::sleep(Duration::from_millis(200)).await;
        debouncer.suggestion_selected();
        assert!(nothing_published(&mut rx).await);
    }

    #[tokio::test(start_paused = true)]
    async fn blank_input_cancels_without_scheduling() {
        let mut mock = MockGeocodingPort::new();
        mock.expect_is_configured().times(0);
        mock.expect_search().times(0);

        let (debouncer, mut rx) = debouncer(mock);
        debouncer.input_changed("Ber");
        debouncer.input_changed("   ");
        assert!(nothing_published(&mut rx).await);
    }

    #[tokio::test(start_paused = true)]
    async fn lookup_errors_publish_nothing() {
        let mut mock = MockGeocodingPort::new();
        mock.expect_is_configured().return_const(true);
        mock.expect_search()
            .times(1)
            .returning(|_, _| Err(ApplicationError::ExternalService("status 500".to_string())));

        let (debouncer, mut rx) = debouncer(mock);
        debouncer.input_changed("Rome");
        assert!(nothing_published(&mut rx).await);
    }
}
