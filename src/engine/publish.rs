//! Publishes a finalized draft to one destination platform.

use super::session::Session;
use crate::client::{types as wire, Backend, TransportError};
use crate::platform::{ImageAttachment, Platform};
use std::sync::Arc;
use thiserror::Error;
use tracing::warn;

#[derive(Debug, Error)]
pub enum PublishError {
    #[error(transparent)]
    Transport(#[from] TransportError),
    #[error("publish to {platform} rejected: {message}")]
    Rejected { platform: Platform, message: String },
}

/// Caller-supplied extras; only the blog platform reads them today.
#[derive(Debug, Clone, Default)]
pub struct PublishOptions {
    pub title: Option<String>,
    pub tags: Option<Vec<String>>,
}

pub struct Publisher {
    backend: Arc<dyn Backend>,
    session: Session,
}

impl Publisher {
    pub fn new(backend: Arc<dyn Backend>, session: Session) -> Self {
        Self { backend, session }
    }

    /// Submit `content` to `platform`, attaching the session's image artifact
    /// according to the platform's fixed rule. A `success:false` reply is an
    /// error; nothing is retried here.
    pub async fn publish(
        &self,
        platform: Platform,
        content: &str,
        options: PublishOptions,
    ) -> Result<wire::PostResult, PublishError> {
        if let Some(limit) = platform.char_limit() {
            let length = content.chars().count();
            if length > limit {
                warn!(%platform, length, limit, "content over platform limit, destination will truncate");
            }
        }

        let mut request = wire::PostRequest {
            content: content.to_string(),
            title: options.title,
            tags: options.tags,
            ..Default::default()
        };
        if let Some(artifact) = self.session.artifact() {
            match platform.image_attachment() {
                ImageAttachment::None => {}
                ImageAttachment::LocalPath => request.image_path = Some(artifact.path),
                ImageAttachment::RemoteUrl => request.image_url = Some(artifact.url),
            }
        }

        let result = self.backend.post(platform, &request).await?;
        if !result.success {
            let message = result
                .error
                .clone()
                .unwrap_or_else(|| "post failed".to_string());
            return Err(PublishError::Rejected { platform, message });
        }
        Ok(result)
    }
}
