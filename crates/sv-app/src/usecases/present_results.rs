use std::sync::Arc;

use anyhow::{Context, Result};
use sv_core::ids::EntryId;
use sv_core::ports::{ClipboardPort, NotificationPort, ResultViewPort, UrlOpenerPort};
use sv_core::{Notification, ResponseError, ResultCard, ResultSet};
use tokio::task::JoinHandle;
use tokio_util::sync::CancellationToken;

use super::thumbnail_pipeline::{DeliveryOutcome, ThumbnailDelivery, ThumbnailPipeline, ViewGate};
use crate::deps::PresenterDeps;

/// What a presentation session ended up showing.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PresentationState {
    /// The payload decoded to zero entries.
    NoResults,
    /// The payload was unusable; the user was notified once.
    Malformed,
    Showing { entries: usize },
}

/// Result of an interaction handler.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ActionOutcome {
    Opened { url: String },
    Copied { title: String },
    /// Nothing to do: no link on the entry, or the session is closed.
    NoOp,
}

/// Presentation coordinator.
///
/// Renders cards in display order, starts one thumbnail fetch per entry
/// without waiting for it, and hands back a [`PresentationSession`] that
/// carries the interaction handlers for the rendered entries.
pub struct ResultsPresenter {
    deps: PresenterDeps,
    pipeline: ThumbnailPipeline,
}

impl ResultsPresenter {
    pub fn new(deps: PresenterDeps) -> Self {
        let pipeline = ThumbnailPipeline::new(deps.fetcher.clone());
        Self { deps, pipeline }
    }

    /// Present a decode outcome on `view`.
    ///
    /// Must be called from within a Tokio runtime; thumbnail fetches are
    /// spawned onto it.
    #[tracing::instrument(name = "usecase.results.present", skip_all)]
    pub fn present(
        &self,
        decoded: Result<ResultSet, ResponseError>,
        view: Arc<dyn ResultViewPort>,
    ) -> PresentationSession {
        let token = CancellationToken::new();
        let gate = ViewGate::new(&view);

        let results = match decoded {
            Ok(results) => results,
            Err(err) => {
                let ResponseError::MalformedResponse { reason } = err;
                tracing::warn!(%reason, "nothing to present, response is malformed");
                self.deps
                    .notifier
                    .notify(Notification::MalformedResponse { reason });
                view.show_no_results();
                return self.session(
                    PresentationState::Malformed,
                    ResultSet::empty(),
                    Vec::new(),
                    view,
                    gate,
                    token,
                    Vec::new(),
                );
            }
        };

        if results.is_empty() {
            tracing::info!("search returned no results");
            view.show_no_results();
            return self.session(
                PresentationState::NoResults,
                results,
                Vec::new(),
                view,
                gate,
                token,
                Vec::new(),
            );
        }

        let mut cards = Vec::with_capacity(results.len());
        let mut tasks = Vec::with_capacity(results.len());

        for (id, entry) in results.iter() {
            let card = ResultCard::from_entry(id, entry);
            view.render_card(&card);

            let delivery = ThumbnailDelivery::new(id, &gate, token.clone());
            tasks.push(
                self.pipeline
                    .launch(entry.thumbnail_url().map(str::to_string), delivery),
            );
            cards.push(card);
        }

        tracing::info!(entries = cards.len(), "presented results");
        let state = PresentationState::Showing {
            entries: cards.len(),
        };
        self.session(state, results, cards, view, gate, token, tasks)
    }

    fn session(
        &self,
        state: PresentationState,
        results: ResultSet,
        cards: Vec<ResultCard>,
        view: Arc<dyn ResultViewPort>,
        gate: ViewGate,
        token: CancellationToken,
        tasks: Vec<JoinHandle<DeliveryOutcome>>,
    ) -> PresentationSession {
        PresentationSession {
            state,
            results,
            cards,
            view: Some(view),
            gate,
            token,
            tasks,
            clipboard: self.deps.clipboard.clone(),
            url_opener: self.deps.url_opener.clone(),
            notifier: self.deps.notifier.clone(),
        }
    }
}

/// One presented result list.
///
/// Owns the result set and the view for as long as it lives. Closing or
/// dropping the session cancels its token: thumbnail results that arrive
/// afterwards are discarded.
pub struct PresentationSession {
    state: PresentationState,
    results: ResultSet,
    cards: Vec<ResultCard>,
    view: Option<Arc<dyn ResultViewPort>>,
    gate: ViewGate,
    token: CancellationToken,
    tasks: Vec<JoinHandle<DeliveryOutcome>>,
    clipboard: Arc<dyn ClipboardPort>,
    url_opener: Arc<dyn UrlOpenerPort>,
    notifier: Arc<dyn NotificationPort>,
}

impl PresentationSession {
    pub fn state(&self) -> PresentationState {
        self.state
    }

    pub fn results(&self) -> &ResultSet {
        &self.results
    }

    pub fn cards(&self) -> &[ResultCard] {
        &self.cards
    }

    pub fn card(&self, id: EntryId) -> Option<&ResultCard> {
        self.cards.get(id.position())
    }

    pub fn is_closed(&self) -> bool {
        self.token.is_cancelled()
    }

    /// Primary action: open the entry's first external URL.
    #[tracing::instrument(name = "usecase.results.primary_action", skip(self))]
    pub fn primary_action(&self, id: EntryId) -> Result<ActionOutcome> {
        if self.is_closed() {
            return Ok(ActionOutcome::NoOp);
        }
        let card = self.require_card(id)?;
        let Some(url) = card.primary_url.as_deref() else {
            tracing::debug!("entry has no external url");
            return Ok(ActionOutcome::NoOp);
        };

        self.url_opener
            .open_url(url)
            .with_context(|| format!("Failed to open {url}"))?;
        Ok(ActionOutcome::Opened {
            url: url.to_string(),
        })
    }

    /// Secondary action: copy the resolved title and confirm it.
    ///
    /// An empty title is copied as an empty string.
    #[tracing::instrument(name = "usecase.results.secondary_action", skip(self))]
    pub fn secondary_action(&self, id: EntryId) -> Result<ActionOutcome> {
        if self.is_closed() {
            return Ok(ActionOutcome::NoOp);
        }
        let card = self.require_card(id)?;

        self.clipboard
            .write_text(&card.title)
            .context("Failed to copy title to clipboard")?;
        self.notifier.notify(Notification::TitleCopied {
            title: card.title.clone(),
        });
        Ok(ActionOutcome::Copied {
            title: card.title.clone(),
        })
    }

    /// Wait until every fetch task has finished and return how many
    /// thumbnails reached the view.
    pub async fn wait_for_thumbnails(&mut self) -> usize {
        let mut delivered = 0;
        for task in std::mem::take(&mut self.tasks) {
            match task.await {
                Ok(DeliveryOutcome::Delivered) => delivered += 1,
                Ok(DeliveryOutcome::Discarded) => {}
                Err(err) => tracing::warn!(error = %err, "thumbnail task did not finish"),
            }
        }
        delivered
    }

    /// End the session. Pending fetches finish on their own; their results
    /// are dropped.
    ///
    /// Blocks until a thumbnail update already running on the view has
    /// returned, so the view is never written to after this.
    pub fn close(&mut self) {
        if !self.token.is_cancelled() {
            tracing::debug!("closing presentation session");
        }
        self.token.cancel();
        self.gate.close();
        self.view = None;
    }

    fn require_card(&self, id: EntryId) -> Result<&ResultCard> {
        self.card(id)
            .with_context(|| format!("No result entry with id {id}"))
    }
}

impl Drop for PresentationSession {
    fn drop(&mut self) {
        self.token.cancel();
        self.gate.close();
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use async_trait::async_trait;
    use std::sync::atomic::{AtomicBool, Ordering};
    use std::sync::Mutex;
    use std::time::Duration;
    use sv_core::ports::ThumbnailFetcherPort;
    use sv_core::{decode_results_str, FetchError, Thumbnail, ThumbnailState};

    mockall::mock! {
        pub Clipboard {}
        impl ClipboardPort for Clipboard {
            fn write_text(&self, text: &str) -> anyhow::Result<()>;
        }
    }

    mockall::mock! {
        pub Opener {}
        impl UrlOpenerPort for Opener {
            fn open_url(&self, url: &str) -> anyhow::Result<()>;
        }
    }

    struct OkFetcher;

    #[async_trait]
    impl ThumbnailFetcherPort for OkFetcher {
        async fn fetch(&self, _url: &str) -> Result<Thumbnail, FetchError> {
            Ok(Thumbnail::new(1, 1, vec![1u8, 2, 3, 4]))
        }
    }

    #[derive(Default)]
    struct RecordingNotifier {
        notifications: Mutex<Vec<Notification>>,
    }

    impl NotificationPort for RecordingNotifier {
        fn notify(&self, notification: Notification) {
            self.notifications.lock().unwrap().push(notification);
        }
    }

    #[derive(Debug, Clone, PartialEq)]
    enum ViewEvent {
        NoResults,
        Card(EntryId, String),
        Thumbnail(EntryId, bool),
    }

    #[derive(Default)]
    struct RecordingView {
        events: Mutex<Vec<ViewEvent>>,
    }

    impl ResultViewPort for RecordingView {
        fn show_no_results(&self) {
            self.events.lock().unwrap().push(ViewEvent::NoResults);
        }
        fn render_card(&self, card: &ResultCard) {
            self.events
                .lock()
                .unwrap()
                .push(ViewEvent::Card(card.id, card.title.clone()));
        }
        fn update_thumbnail(&self, id: EntryId, state: &ThumbnailState) {
            self.events
                .lock()
                .unwrap()
                .push(ViewEvent::Thumbnail(id, matches!(state, ThumbnailState::Loaded(_))));
        }
    }

    const SCENARIO: &str = r#"{"results":[{"header":{"indexId":1,"similarity":"95%","thumbnailUrl":"https://x/a.jpg"},"data":{"title":"Foo","externalUrls":["https://src/1"]}}]}"#;

    fn presenter(
        clipboard: MockClipboard,
        opener: MockOpener,
    ) -> (ResultsPresenter, Arc<RecordingNotifier>) {
        let notifier = Arc::new(RecordingNotifier::default());
        let presenter = ResultsPresenter::new(PresenterDeps {
            fetcher: Arc::new(OkFetcher),
            clipboard: Arc::new(clipboard),
            url_opener: Arc::new(opener),
            notifier: notifier.clone(),
        });
        (presenter, notifier)
    }

    #[tokio::test]
    async fn test_scenario_primary_and_secondary_actions() {
        let mut clipboard = MockClipboard::new();
        clipboard
            .expect_write_text()
            .withf(|text: &str| text == "Foo")
            .times(1)
            .returning(|_| Ok(()));
        let mut opener = MockOpener::new();
        opener
            .expect_open_url()
            .withf(|url: &str| url == "https://src/1")
            .times(1)
            .returning(|_| Ok(()));
        let (presenter, notifier) = presenter(clipboard, opener);
        let view = Arc::new(RecordingView::default());

        let mut session = presenter.present(decode_results_str(SCENARIO), view.clone());

        assert_eq!(session.state(), PresentationState::Showing { entries: 1 });
        assert_eq!(session.cards()[0].title, "Foo");
        assert_eq!(
            session.primary_action(EntryId::new(0)).unwrap(),
            ActionOutcome::Opened {
                url: "https://src/1".to_string()
            }
        );
        assert_eq!(
            session.secondary_action(EntryId::new(0)).unwrap(),
            ActionOutcome::Copied {
                title: "Foo".to_string()
            }
        );
        assert_eq!(
            notifier.notifications.lock().unwrap().as_slice(),
            &[Notification::TitleCopied {
                title: "Foo".to_string()
            }]
        );

        assert_eq!(session.wait_for_thumbnails().await, 1);
        let events = view.events.lock().unwrap().clone();
        assert_eq!(
            events,
            vec![
                ViewEvent::Card(EntryId::new(0), "Foo".to_string()),
                ViewEvent::Thumbnail(EntryId::new(0), true),
            ]
        );
    }

    #[tokio::test]
    async fn test_empty_results_show_no_results_state() {
        let (presenter, notifier) = presenter(MockClipboard::new(), MockOpener::new());
        let view = Arc::new(RecordingView::default());

        let session = presenter.present(decode_results_str(r#"{"results":[]}"#), view.clone());

        assert_eq!(session.state(), PresentationState::NoResults);
        assert!(session.cards().is_empty());
        assert_eq!(*view.events.lock().unwrap(), vec![ViewEvent::NoResults]);
        assert!(notifier.notifications.lock().unwrap().is_empty());
    }

    #[tokio::test]
    async fn test_malformed_response_notifies_once_without_render() {
        let (presenter, notifier) = presenter(MockClipboard::new(), MockOpener::new());
        let view = Arc::new(RecordingView::default());

        let session = presenter.present(decode_results_str("not json"), view.clone());

        assert_eq!(session.state(), PresentationState::Malformed);
        assert_eq!(*view.events.lock().unwrap(), vec![ViewEvent::NoResults]);
        let notifications = notifier.notifications.lock().unwrap();
        assert_eq!(notifications.len(), 1);
        assert!(matches!(
            notifications[0],
            Notification::MalformedResponse { .. }
        ));
    }

    #[tokio::test]
    async fn test_entry_without_link_or_title_degrades() {
        let mut clipboard = MockClipboard::new();
        clipboard
            .expect_write_text()
            .withf(|text: &str| text.is_empty())
            .times(1)
            .returning(|_| Ok(()));
        let mut opener = MockOpener::new();
        opener.expect_open_url().never();
        let (presenter, _) = presenter(clipboard, opener);

        let session = presenter.present(
            decode_results_str(r#"{"results":[{"header":{"indexId":5}}]}"#),
            Arc::new(RecordingView::default()),
        );

        assert_eq!(
            session.primary_action(EntryId::new(0)).unwrap(),
            ActionOutcome::NoOp
        );
        assert_eq!(
            session.secondary_action(EntryId::new(0)).unwrap(),
            ActionOutcome::Copied {
                title: String::new()
            }
        );
    }

    #[tokio::test]
    async fn test_unknown_entry_and_platform_failure_are_errors() {
        let mut clipboard = MockClipboard::new();
        clipboard
            .expect_write_text()
            .returning(|_| Err(anyhow::anyhow!("clipboard busy")));
        let (presenter, notifier) = presenter(clipboard, MockOpener::new());

        let session = presenter.present(
            decode_results_str(SCENARIO),
            Arc::new(RecordingView::default()),
        );

        assert!(session.primary_action(EntryId::new(7)).is_err());
        assert!(session.secondary_action(EntryId::new(0)).is_err());
        assert!(notifier.notifications.lock().unwrap().is_empty());
    }

    #[tokio::test]
    async fn test_closed_session_ignores_actions() {
        let mut opener = MockOpener::new();
        opener.expect_open_url().never();
        let (presenter, _) = presenter(MockClipboard::new(), opener);

        let mut session = presenter.present(
            decode_results_str(SCENARIO),
            Arc::new(RecordingView::default()),
        );
        session.close();

        assert!(session.is_closed());
        assert_eq!(
            session.primary_action(EntryId::new(0)).unwrap(),
            ActionOutcome::NoOp
        );
        assert_eq!(session.wait_for_thumbnails().await, 0);
    }

    #[derive(Default)]
    struct SlowView {
        started: AtomicBool,
        finished: AtomicBool,
    }

    impl ResultViewPort for SlowView {
        fn show_no_results(&self) {}
        fn render_card(&self, _card: &ResultCard) {}
        fn update_thumbnail(&self, _id: EntryId, _state: &ThumbnailState) {
            self.started.store(true, Ordering::SeqCst);
            std::thread::sleep(Duration::from_millis(200));
            self.finished.store(true, Ordering::SeqCst);
        }
    }

    #[tokio::test(flavor = "multi_thread", worker_threads = 2)]
    async fn test_close_waits_for_thumbnail_update_in_progress() {
        let (presenter, _) = presenter(MockClipboard::new(), MockOpener::new());
        let view = Arc::new(SlowView::default());

        let mut session = presenter.present(decode_results_str(SCENARIO), view.clone());
        while !view.started.load(Ordering::SeqCst) {
            tokio::time::sleep(Duration::from_millis(1)).await;
        }
        session.close();

        assert!(view.finished.load(Ordering::SeqCst));
        assert_eq!(session.wait_for_thumbnails().await, 1);
    }
}
