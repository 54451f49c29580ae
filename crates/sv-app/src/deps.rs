//! # Presenter Dependencies
//!
//! Dependency grouping for [`ResultsPresenter`](crate::ResultsPresenter)
//! construction. Just parameter grouping: no build steps, no defaults.

use std::sync::Arc;
use sv_core::ports::*;

/// Capabilities injected into the presenter.
///
/// All dependencies are required. The rendering view is not part of this
/// group because it belongs to a single presentation session.
#[derive(Clone)]
pub struct PresenterDeps {
    pub fetcher: Arc<dyn ThumbnailFetcherPort>,
    pub clipboard: Arc<dyn ClipboardPort>,
    pub url_opener: Arc<dyn UrlOpenerPort>,
    pub notifier: Arc<dyn NotificationPort>,
}
