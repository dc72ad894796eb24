//! Drives one generation cycle: sequential per-platform calls, partial
//! failure isolation, image pipeline hand-off.

use super::image::ImagePipeline;
use super::session::Session;
use super::types::{ContentMap, Draft, GenerationRequest, ImageArtifact};
use crate::client::{types as wire, Backend};
use crate::platform::Platform;
use std::sync::Arc;
use tracing::{debug, info, warn};
use uuid::Uuid;

pub struct Orchestrator {
    backend: Arc<dyn Backend>,
    session: Session,
    image: ImagePipeline,
}

impl Orchestrator {
    pub fn new(backend: Arc<dyn Backend>, session: Session) -> Self {
        let image = ImagePipeline::new(Arc::clone(&backend));
        Self {
            backend,
            session,
            image,
        }
    }

    /// Run one generation cycle. Platforms are generated strictly in priority
    /// order; a failure becomes that platform's entry and the batch carries
    /// on. The returned map's key set always equals the requested set. The
    /// first successful draft seeds the image pipeline, which fires at most
    /// once and never fails the cycle.
    pub async fn generate(&self, request: &GenerationRequest) -> ContentMap {
        let token = self.session.begin_cycle();
        let cycle = Uuid::new_v4();
        info!(
            %cycle,
            topic = request.topic(),
            platforms = ?request.platforms(),
            "generation cycle started"
        );

        let mut drafts = ContentMap::new();
        let mut seed: Option<(Platform, String)> = None;

        for &platform in request.platforms() {
            let draft = self.generate_one(request, platform).await;
            if seed.is_none() {
                if let Draft::Ready(text) = &draft {
                    seed = Some((platform, text.clone()));
                }
            }
            if !self.session.record_draft(token, platform, draft.clone()) {
                debug!(%cycle, %platform, "cycle superseded, draft dropped");
            }
            drafts.insert(platform, draft);
        }

        match seed {
            Some((platform, content)) => {
                match self.image.derive_and_render(&content, platform).await {
                    Ok(artifact) => {
                        self.session.set_artifact(token, artifact);
                    }
                    Err(err) => warn!(%cycle, error = %err, "image pipeline failed"),
                }
            }
            None => debug!(%cycle, "no successful draft, image pipeline skipped"),
        }

        info!(%cycle, drafts = drafts.len(), "generation cycle finished");
        drafts
    }

    async fn generate_one(&self, request: &GenerationRequest, platform: Platform) -> Draft {
        let call = wire::GenerateRequest {
            topic: request.topic().to_string(),
            platform,
            tone: request.tone().to_string(),
            word_count: request.word_count(),
            auto_post: false,
        };
        match self.backend.generate(&call).await {
            Ok(reply) => match reply.content.get(platform.wire_id()) {
                Some(text) => Draft::classify(text.clone()),
                None => Draft::Failed(format!("backend returned no {platform} content")),
            },
            Err(err) => {
                warn!(%platform, error = %err, "platform generation failed");
                Draft::Failed(err.to_string())
            }
        }
    }

    /// Re-render the cycle image from a caller-edited prompt. Derivation is
    /// skipped; the prompt goes out exactly as supplied. Failure leaves the
    /// previous artifact in place.
    pub async fn regenerate_image(&self, prompt: &str) -> Option<ImageArtifact> {
        match self.image.regenerate(prompt).await {
            Ok(artifact) => {
                self.session
                    .set_artifact(self.session.token(), artifact.clone());
                Some(artifact)
            }
            Err(err) => {
                warn!(error = %err, "image regeneration failed");
                None
            }
        }
    }

    pub fn session(&self) -> &Session {
        &self.session
    }
}
