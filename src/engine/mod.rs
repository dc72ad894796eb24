//! Public façade for the generation workflow.

pub mod image;
pub mod orchestrator;
pub mod publish;
pub mod session;
pub mod types;


pub use orchestrator::Orchestrator;
pub use publish::{PublishError, PublishOptions, Publisher};
pub use session::{CycleToken, Session};
pub use types::{ContentMap, Draft, GenerationRequest, ImageArtifact, RequestError};
