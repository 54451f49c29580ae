//! Business logic use cases
//!
//! raw payload
//!         ↓
//! DecodeResultsUseCase      → ResultSet | MalformedResponse
//!         ↓
//! ResultsPresenter::present → PresentationSession
//!         ├── cards rendered in order (metadata resolver)
//!         └── ThumbnailPipeline: one task per entry → view slot
//!         ↓
//! PresentationSession::{primary_action, secondary_action}

pub mod decode_results;
pub mod present_results;
pub mod thumbnail_pipeline;

pub use decode_results::DecodeResultsUseCase;
pub use present_results::{ActionOutcome, PresentationSession, PresentationState, ResultsPresenter};
pub use thumbnail_pipeline::{DeliveryOutcome, ThumbnailDelivery, ThumbnailPipeline, ViewGate};
