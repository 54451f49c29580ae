use std::sync::{Arc, PoisonError, RwLock, Weak};

use sv_core::ids::EntryId;
use sv_core::ports::{ResultViewPort, ThumbnailFetcherPort};
use sv_core::{FetchError, ThumbnailState};
use tokio::task::JoinHandle;
use tokio_util::sync::CancellationToken;
use tracing::Instrument;

/// What happened to a fetch result.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DeliveryOutcome {
    /// The view received the terminal state.
    Delivered,
    /// The session ended or the view is gone; the result was dropped.
    Discarded,
}

/// Session-wide handle to the view that thumbnail deliveries write to.
///
/// Deliveries hold the read lock for the whole check-then-update step;
/// [`close`](Self::close) takes the write lock. Once `close` returns, no
/// delivery is running and none will start.
#[derive(Clone)]
pub struct ViewGate {
    view: Arc<RwLock<Option<Weak<dyn ResultViewPort>>>>,
}

impl ViewGate {
    pub fn new(view: &Arc<dyn ResultViewPort>) -> Self {
        Self {
            view: Arc::new(RwLock::new(Some(Arc::downgrade(view)))),
        }
    }

    /// Detach the view, waiting for deliveries already in progress.
    pub fn close(&self) {
        let mut view = self.view.write().unwrap_or_else(PoisonError::into_inner);
        *view = None;
    }

    fn deliver(&self, id: EntryId, state: &ThumbnailState) -> DeliveryOutcome {
        let Ok(guard) = self.view.read() else {
            return DeliveryOutcome::Discarded;
        };
        let Some(view) = guard.as_ref().and_then(Weak::upgrade) else {
            tracing::debug!(entry = %id, "view detached, dropping thumbnail result");
            return DeliveryOutcome::Discarded;
        };
        view.update_thumbnail(id, state);
        DeliveryOutcome::Delivered
    }
}

/// Single-use delivery slot for one entry's thumbnail.
///
/// [`complete`](Self::complete) consumes the slot, so a fetch can deliver at
/// most once. The session token is checked right before delivery and the
/// view is reached through the session's [`ViewGate`]: results arriving
/// after the session ended are dropped without touching the view.
pub struct ThumbnailDelivery {
    id: EntryId,
    gate: ViewGate,
    token: CancellationToken,
}

impl ThumbnailDelivery {
    pub fn new(id: EntryId, gate: &ViewGate, token: CancellationToken) -> Self {
        Self {
            id,
            gate: gate.clone(),
            token,
        }
    }

    pub fn id(&self) -> EntryId {
        self.id
    }

    pub fn complete(self, state: ThumbnailState) -> DeliveryOutcome {
        if self.token.is_cancelled() {
            tracing::debug!(entry = %self.id, "session closed, dropping thumbnail result");
            return DeliveryOutcome::Discarded;
        }
        self.gate.deliver(self.id, &state)
    }
}

/// Launches one independent thumbnail fetch per entry.
///
/// Fetches are not batched, deduplicated or retried. A failure is reported
/// to that entry's slot only.
#[derive(Clone)]
pub struct ThumbnailPipeline {
    fetcher: Arc<dyn ThumbnailFetcherPort>,
}

impl ThumbnailPipeline {
    pub fn new(fetcher: Arc<dyn ThumbnailFetcherPort>) -> Self {
        Self { fetcher }
    }

    /// Spawn the fetch task for one entry. Must be called from within a
    /// Tokio runtime.
    pub fn launch(
        &self,
        url: Option<String>,
        delivery: ThumbnailDelivery,
    ) -> JoinHandle<DeliveryOutcome> {
        let fetcher = self.fetcher.clone();
        let span = tracing::debug_span!("usecase.thumbnail.fetch", entry = %delivery.id());
        tokio::spawn(run_fetch(fetcher, url, delivery).instrument(span))
    }
}

async fn run_fetch(
    fetcher: Arc<dyn ThumbnailFetcherPort>,
    url: Option<String>,
    delivery: ThumbnailDelivery,
) -> DeliveryOutcome {
    let Some(url) = url else {
        tracing::warn!(entry = %delivery.id(), "entry has no thumbnail url");
        return delivery.complete(ThumbnailState::Failed(FetchError::InvalidUrl {
            url: String::new(),
            reason: "entry has no thumbnail url".to_string(),
        }));
    };

    let token = delivery.token.clone();
    let result = tokio::select! {
        biased;
        _ = token.cancelled() => {
            tracing::debug!(%url, "session closed before thumbnail arrived");
            return DeliveryOutcome::Discarded;
        }
        result = fetcher.fetch(&url) => result,
    };

    match &result {
        Ok(thumbnail) => tracing::debug!(
            %url,
            width = thumbnail.width,
            height = thumbnail.height,
            "thumbnail loaded"
        ),
        Err(err) => tracing::warn!(%url, error = %err, "thumbnail unavailable"),
    }

    delivery.complete(result.into())
}
