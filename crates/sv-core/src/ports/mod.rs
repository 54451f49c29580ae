//! Port interfaces for the application layer
//!
//! Ports define the contract between the use cases in `sv-app` and the
//! infrastructure/platform implementations. The core never touches the
//! network, the clipboard or the screen directly; it is handed these
//! capabilities instead, which keeps it testable without a real platform.

mod clipboard;
mod notification;
mod result_view;
mod thumbnail_fetcher;
mod url_opener;

pub use clipboard::ClipboardPort;
pub use notification::NotificationPort;
pub use result_view::ResultViewPort;
pub use thumbnail_fetcher::ThumbnailFetcherPort;
pub use url_opener::UrlOpenerPort;
