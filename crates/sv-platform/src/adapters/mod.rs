//! # Platform Adapters
//!
//! - `clipboard` - System clipboard (arboard) and an in-memory fallback for
//!   headless sessions
//! - `opener` - Default system handler for external URLs, and a printing
//!   fallback when there is no desktop session
//! - `notifier` - Notifications written to the log

pub mod clipboard;
pub mod notifier;
pub mod opener;

pub use clipboard::{ArboardClipboard, InMemoryClipboard};
pub use notifier::LogNotifier;
pub use opener::{has_desktop_session, PrintUrlOpener, SystemUrlOpener};
