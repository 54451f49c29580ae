//! # sv-platform
//!
//! Platform-specific implementations for SauceView.
//!
//! This crate contains the adapters that touch the operating system: the
//! system clipboard, the default URL handler and the log.

pub mod adapters;

pub use adapters::{
    has_desktop_session, ArboardClipboard, InMemoryClipboard, LogNotifier, PrintUrlOpener,
    SystemUrlOpener,
};
