//! # Terminal Adapters
//!
//! - `view` - Plain-text [`ResultViewPort`](sv_core::ports::ResultViewPort)
//!   writing cards and thumbnail updates as lines
//! - `notifier` - Transient notifications on stderr

pub mod notifier;
pub mod view;

pub use notifier::TerminalNotifier;
pub use view::TerminalResultView;
