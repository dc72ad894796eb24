//! Typed transport layer over the backend HTTP contract.

pub mod http;
pub mod types;

#[cfg(test)]
pub(crate) mod stub;

pub use http::HttpBackend;

use crate::platform::Platform;
use async_trait::async_trait;
use std::collections::BTreeMap;
use thiserror::Error;
use types::{
    BlogPost, DeleteAck, GenerateRequest, GenerateResponse, HealthResponse,
    ImageGenerateResponse, ImagePromptResponse, PlatformReadiness, PostRequest, PostResult,
};

/// Transport failures. A non-success status keeps the raw response body as
/// the message; everything below HTTP (DNS, refused connection, timeout)
/// surfaces as `Network`.
#[derive(Debug, Error)]
pub enum TransportError {
    #[error("backend returned {status}: {message}")]
    Status { status: u16, message: String },
    #[error("request failed: {0}")]
    Network(#[from] reqwest::Error),
}

pub type TransportResult<T> = Result<T, TransportError>;

/// The backend contract, one method per endpoint. The HTTP implementation is
/// an explicitly constructed value injected into whatever needs it; tests
/// swap in a scripted stub.
#[async_trait]
pub trait Backend: Send + Sync {
    async fn generate(&self, request: &GenerateRequest) -> TransportResult<GenerateResponse>;

    async fn image_prompt(
        &self,
        content: &str,
        platform: Platform,
    ) -> TransportResult<ImagePromptResponse>;

    async fn render_image(&self, prompt: &str) -> TransportResult<ImageGenerateResponse>;

    async fn post(&self, platform: Platform, request: &PostRequest)
        -> TransportResult<PostResult>;

    async fn health(&self) -> TransportResult<HealthResponse>;

    async fn platforms(&self) -> TransportResult<BTreeMap<String, PlatformReadiness>>;

    async fn model_start(&self) -> TransportResult<()>;

    async fn model_stop(&self) -> TransportResult<()>;

    async fn blog_posts(&self) -> TransportResult<Vec<BlogPost>>;

    async fn blog_post_by_slug(&self, slug: &str) -> TransportResult<BlogPost>;

    async fn delete_blog_post(&self, id: &str) -> TransportResult<DeleteAck>;

    /// Resolve a backend-relative url (image links come back as `/images/…`)
    /// into something fetchable. The default is a pass-through for backends
    /// that already hand out absolute urls.
    fn resolve_url(&self, relative: &str) -> String {
        relative.to_string()
    }
}
