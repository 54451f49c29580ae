//! # Dependency Wiring
//!
//! Builds the concrete adapters and groups them into [`PresenterDeps`].
//! This is the only place that knows which implementation backs each port.

use std::sync::Arc;

use sv_app::{PresenterDeps, ResultsPresenter};
use sv_core::config::ViewerConfig;
use sv_core::ports::{ClipboardPort, NotificationPort, UrlOpenerPort};
use sv_infra::HttpThumbnailFetcher;
use sv_platform::{
    has_desktop_session, ArboardClipboard, InMemoryClipboard, LogNotifier, PrintUrlOpener,
    SystemUrlOpener,
};

use crate::terminal::TerminalNotifier;

/// Wire the presenter with system adapters.
///
/// Headless sessions are not fatal: without a system clipboard copies go
/// to a process-local clipboard, and without a desktop session links are
/// printed instead of opened. With `quiet`, notifications go to the log
/// instead of stderr.
///
/// # Errors
///
/// Returns error if the HTTP client cannot be built.
pub fn build_presenter(config: &ViewerConfig, quiet: bool) -> anyhow::Result<ResultsPresenter> {
    let fetcher = HttpThumbnailFetcher::from_config(&config.thumbnail)?;

    Ok(ResultsPresenter::new(PresenterDeps {
        fetcher: Arc::new(fetcher),
        clipboard: system_clipboard(),
        url_opener: url_opener(has_desktop_session()),
        notifier: notifier(quiet),
    }))
}

fn url_opener(desktop_session: bool) -> Arc<dyn UrlOpenerPort> {
    if desktop_session {
        Arc::new(SystemUrlOpener::new())
    } else {
        tracing::info!("no desktop session, links will be printed");
        Arc::new(PrintUrlOpener::stdout())
    }
}

fn notifier(quiet: bool) -> Arc<dyn NotificationPort> {
    if quiet {
        Arc::new(LogNotifier::new())
    } else {
        Arc::new(TerminalNotifier::stderr())
    }
}

fn system_clipboard() -> Arc<dyn ClipboardPort> {
    match ArboardClipboard::new() {
        Ok(clipboard) => Arc::new(clipboard),
        Err(err) => {
            tracing::warn!(error = %err, "system clipboard unavailable, using in-memory clipboard");
            Arc::new(InMemoryClipboard::new())
        }
    }
}
