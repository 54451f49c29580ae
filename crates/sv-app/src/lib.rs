//! SauceView Application Orchestration Layer
//!
//! This crate contains the use cases that turn a raw search response into a
//! presented, interactive result list.

pub mod deps;
pub mod usecases;

pub use deps::PresenterDeps;
pub use usecases::{
    ActionOutcome, DecodeResultsUseCase, DeliveryOutcome, PresentationSession, PresentationState,
    ResultsPresenter, ThumbnailDelivery, ThumbnailPipeline, ViewGate,
};
