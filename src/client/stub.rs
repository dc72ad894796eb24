//! Scripted backend stub: records every call so tests can assert ordering
//! and payloads without a live server.

use super::types::{
    BlogPost, DeleteAck, GenerateRequest, GenerateResponse, HealthResponse,
    ImageGenerateResponse, ImagePromptResponse, PlatformReadiness, PostRequest, PostResult,
};
use super::{Backend, TransportError, TransportResult};
use crate::platform::Platform;
use async_trait::async_trait;
use std::collections::{BTreeMap, VecDeque};
use std::sync::Mutex;

#[derive(Debug, Clone, PartialEq, Eq)]
pub(crate) enum Call {
    Generate(Platform),
    ImagePrompt { content: String, platform: Platform },
    RenderImage { prompt: String },
    Post { platform: Platform, request: PostRequest },
    Health,
    ModelStart,
    ModelStop,
}

/// Scripted health probe outcome: a reachable backend reply or a transport
/// failure message.
pub(crate) type HealthStep = Result<HealthResponse, String>;

#[derive(Default)]
pub(crate) struct StubBackend {
    calls: Mutex<Vec<Call>>,
    drafts: BTreeMap<Platform, Result<String, String>>,
    derived_prompt: String,
    fail_image_prompt: bool,
    fail_render: bool,
    post_rejections: BTreeMap<Platform, String>,
    health_script: Mutex<VecDeque<HealthStep>>,
    fail_model_toggle: bool,
}

impl StubBackend {
    pub fn new() -> Self {
        Self {
            derived_prompt: "a quiet riverbank at dawn".to_string(),
            ..Default::default()
        }
    }

    pub fn draft(mut self, platform: Platform, text: &str) -> Self {
        self.drafts.insert(platform, Ok(text.to_string()));
        self
    }

    pub fn failing(mut self, platform: Platform, message: &str) -> Self {
        self.drafts.insert(platform, Err(message.to_string()));
        self
    }

    pub fn derived_prompt(mut self, prompt: &str) -> Self {
        self.derived_prompt = prompt.to_string();
        self
    }

    pub fn fail_image_prompt(mut self) -> Self {
        self.fail_image_prompt = true;
        self
    }

    pub fn fail_render(mut self) -> Self {
        self.fail_render = true;
        self
    }

    pub fn rejecting_post(mut self, platform: Platform, message: &str) -> Self {
        self.post_rejections.insert(platform, message.to_string());
        self
    }

    pub fn health_steps(self, steps: Vec<HealthStep>) -> Self {
        *self.health_script.lock().unwrap() = steps.into();
        self
    }

    pub fn fail_model_toggle(mut self) -> Self {
        self.fail_model_toggle = true;
        self
    }

    pub fn recorded(&self) -> Vec<Call> {
        self.calls.lock().unwrap().clone()
    }

    fn record(&self, call: Call) {
        self.calls.lock().unwrap().push(call);
    }

    fn server_error(message: &str) -> TransportError {
        TransportError::Status {
            status: 500,
            message: message.to_string(),
        }
    }
}

#[async_trait]
impl Backend for StubBackend {
    async fn generate(&self, request: &GenerateRequest) -> TransportResult<GenerateResponse> {
        self.record(Call::Generate(request.platform));
        match self.drafts.get(&request.platform) {
            Some(Ok(text)) => {
                let mut content = BTreeMap::new();
                content.insert(request.platform.wire_id().to_string(), text.clone());
                Ok(GenerateResponse {
                    content,
                    posted: BTreeMap::new(),
                })
            }
            Some(Err(message)) => Err(Self::server_error(message)),
            None => Err(Self::server_error("no draft scripted")),
        }
    }

    async fn image_prompt(
        &self,
        content: &str,
        platform: Platform,
    ) -> TransportResult<ImagePromptResponse> {
        self.record(Call::ImagePrompt {
            content: content.to_string(),
            platform,
        });
        if self.fail_image_prompt {
            return Err(Self::server_error("prompt derivation failed"));
        }
        Ok(ImagePromptResponse {
            image_prompt: self.derived_prompt.clone(),
        })
    }

    async fn render_image(&self, prompt: &str) -> TransportResult<ImageGenerateResponse> {
        self.record(Call::RenderImage {
            prompt: prompt.to_string(),
        });
        if self.fail_render {
            return Err(Self::server_error("image generation failed"));
        }
        Ok(ImageGenerateResponse {
            image_path: "/srv/images/stub.png".to_string(),
            image_url: "/images/stub.png".to_string(),
            filename: "stub.png".to_string(),
        })
    }

    async fn post(
        &self,
        platform: Platform,
        request: &PostRequest,
    ) -> TransportResult<PostResult> {
        self.record(Call::Post {
            platform,
            request: request.clone(),
        });
        if let Some(message) = self.post_rejections.get(&platform) {
            return Ok(PostResult {
                success: false,
                platform: Some(platform.wire_id().to_string()),
                post_id: None,
                url: None,
                error: Some(message.clone()),
            });
        }
        Ok(PostResult {
            success: true,
            platform: Some(platform.wire_id().to_string()),
            post_id: Some("stub-1".to_string()),
            url: None,
            error: None,
        })
    }

    async fn health(&self) -> TransportResult<HealthResponse> {
        self.record(Call::Health);
        match self.health_script.lock().unwrap().pop_front() {
            Some(Ok(reply)) => Ok(reply),
            Some(Err(message)) => Err(Self::server_error(&message)),
            None => Err(Self::server_error("no health step scripted")),
        }
    }

    async fn platforms(&self) -> TransportResult<BTreeMap<String, PlatformReadiness>> {
        Ok(BTreeMap::new())
    }

    async fn model_start(&self) -> TransportResult<()> {
        self.record(Call::ModelStart);
        if self.fail_model_toggle {
            return Err(Self::server_error("model start failed"));
        }
        Ok(())
    }

    async fn model_stop(&self) -> TransportResult<()> {
        self.record(Call::ModelStop);
        if self.fail_model_toggle {
            return Err(Self::server_error("model stop failed"));
        }
        Ok(())
    }

    async fn blog_posts(&self) -> TransportResult<Vec<BlogPost>> {
        Ok(Vec::new())
    }

    async fn blog_post_by_slug(&self, _slug: &str) -> TransportResult<BlogPost> {
        Err(TransportError::Status {
            status: 404,
            message: "not found".to_string(),
        })
    }

    async fn delete_blog_post(&self, _id: &str) -> TransportResult<DeleteAck> {
        Ok(DeleteAck { success: true })
    }
}

/// A healthy backend reply for health-poller tests.
pub(crate) fn healthy_reply() -> HealthResponse {
    HealthResponse {
        status: "ok".to_string(),
        model_server: "ok".to_string(),
        platforms: vec!["microblog".to_string(), "blog".to_string()],
        image_generation: true,
    }
}
