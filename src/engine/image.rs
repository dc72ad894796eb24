//! Derive-prompt → render sub-pipeline for the cycle image.

use super::types::ImageArtifact;
use crate::client::{Backend, TransportResult};
use crate::platform::Platform;
use std::sync::Arc;

pub struct ImagePipeline {
    backend: Arc<dyn Backend>,
}

impl ImagePipeline {
    pub fn new(backend: Arc<dyn Backend>) -> Self {
        Self { backend }
    }

    /// Full pipeline for a fresh cycle: derive a prompt from the seed draft,
    /// then render. The render call is not issued until derivation completes.
    pub async fn derive_and_render(
        &self,
        content: &str,
        platform: Platform,
    ) -> TransportResult<ImageArtifact> {
        let prompt = self
            .backend
            .image_prompt(content, platform)
            .await?
            .image_prompt;
        self.render(prompt).await
    }

    /// Re-render from a caller-supplied prompt, bypassing derivation. The
    /// prompt is used exactly as edited.
    pub async fn regenerate(&self, prompt: &str) -> TransportResult<ImageArtifact> {
        self.render(prompt.to_string()).await
    }

    async fn render(&self, prompt: String) -> TransportResult<ImageArtifact> {
        let reply = self.backend.render_image(&prompt).await?;
        Ok(ImageArtifact {
            prompt,
            path: reply.image_path,
            url: reply.image_url,
        })
    }
}
