//! Client-side orchestration for a social-content generation backend:
//! sequential per-platform drafting with failure isolation, an image
//! sub-pipeline seeded by the first successful draft, publish coordination
//! with per-platform attachment rules, and backend health polling.

pub mod blog;
pub mod client;
pub mod config;
pub mod engine;
pub mod health;
pub mod platform;

pub use client::{Backend, HttpBackend, TransportError};
pub use config::Config;
pub use engine::{
    ContentMap, Draft, GenerationRequest, ImageArtifact, Orchestrator, PublishError,
    PublishOptions, Publisher, RequestError, Session,
};
pub use health::{Availability, HealthMonitor, HealthSnapshot};
pub use platform::{Platform, Tone};
