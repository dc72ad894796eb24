//! reqwest implementation of the backend contract.

use super::types::{
    BlogPost, DeleteAck, GenerateRequest, GenerateResponse, HealthResponse,
    ImageGenerateRequest, ImageGenerateResponse, ImagePromptRequest, ImagePromptResponse,
    PlatformReadiness, PostRequest, PostResult,
};
use super::{Backend, TransportError, TransportResult};
use crate::config::Config;
use crate::platform::Platform;
use async_trait::async_trait;
use reqwest::Client;
use serde::de::DeserializeOwned;
use serde::Serialize;
use std::collections::BTreeMap;
use std::time::Duration;
use url::Url;

const REQUEST_TIMEOUT: Duration = Duration::from_secs(30);

pub struct HttpBackend {
    client: Client,
    origin: Url,
}

impl HttpBackend {
    pub fn new(config: &Config) -> TransportResult<Self> {
        let client = Client::builder().timeout(REQUEST_TIMEOUT).build()?;
        Ok(Self {
            client,
            origin: config.origin.clone(),
        })
    }

    fn endpoint(&self, path: &str) -> String {
        format!("{}{}", self.origin.as_str().trim_end_matches('/'), path)
    }

    async fn get_json<T: DeserializeOwned>(&self, path: &str) -> TransportResult<T> {
        let response = self.client.get(self.endpoint(path)).send().await?;
        decode(response).await
    }

    async fn post_json<B, T>(&self, path: &str, body: &B) -> TransportResult<T>
    where
        B: Serialize + ?Sized,
        T: DeserializeOwned,
    {
        let response = self.client.post(self.endpoint(path)).json(body).send().await?;
        decode(response).await
    }

    /// POST with no body, succeeding on any 2xx acknowledgement.
    async fn post_ack(&self, path: &str) -> TransportResult<()> {
        let response = self.client.post(self.endpoint(path)).send().await?;
        check_status(response).await?;
        Ok(())
    }
}

/// Reject non-success statuses, keeping the raw body as the error message.
async fn check_status(response: reqwest::Response) -> TransportResult<reqwest::Response> {
    let status = response.status();
    if status.is_success() {
        return Ok(response);
    }
    let message = response
        .text()
        .await
        .unwrap_or_else(|_| String::new());
    let message = if message.trim().is_empty() {
        format!("API error: {}", status.as_u16())
    } else {
        message
    };
    Err(TransportError::Status {
        status: status.as_u16(),
        message,
    })
}

async fn decode<T: DeserializeOwned>(response: reqwest::Response) -> TransportResult<T> {
    let response = check_status(response).await?;
    Ok(response.json::<T>().await?)
}

#[async_trait]
impl Backend for HttpBackend {
    async fn generate(&self, request: &GenerateRequest) -> TransportResult<GenerateResponse> {
        self.post_json("/generate", request).await
    }

    async fn image_prompt(
        &self,
        content: &str,
        platform: Platform,
    ) -> TransportResult<ImagePromptResponse> {
        let body = ImagePromptRequest {
            content: content.to_string(),
            platform,
        };
        self.post_json("/generate-image-prompt", &body).await
    }

    async fn render_image(&self, prompt: &str) -> TransportResult<ImageGenerateResponse> {
        let body = ImageGenerateRequest {
            prompt: prompt.to_string(),
        };
        self.post_json("/generate-image", &body).await
    }

    async fn post(
        &self,
        platform: Platform,
        request: &PostRequest,
    ) -> TransportResult<PostResult> {
        self.post_json(&format!("/post/{}", platform.wire_id()), request)
            .await
    }

    async fn health(&self) -> TransportResult<HealthResponse> {
        self.get_json("/health").await
    }

    async fn platforms(&self) -> TransportResult<BTreeMap<String, PlatformReadiness>> {
        self.get_json("/platforms").await
    }

    async fn model_start(&self) -> TransportResult<()> {
        self.post_ack("/model/start").await
    }

    async fn model_stop(&self) -> TransportResult<()> {
        self.post_ack("/model/stop").await
    }

    async fn blog_posts(&self) -> TransportResult<Vec<BlogPost>> {
        self.get_json("/api/blog/posts").await
    }

    async fn blog_post_by_slug(&self, slug: &str) -> TransportResult<BlogPost> {
        self.get_json(&format!("/api/blog/posts/{slug}")).await
    }

    async fn delete_blog_post(&self, id: &str) -> TransportResult<DeleteAck> {
        let response = self
            .client
            .delete(self.endpoint(&format!("/api/blog/posts/{id}")))
            .send()
            .await?;
        decode(response).await
    }

    fn resolve_url(&self, relative: &str) -> String {
        match self.origin.join(relative) {
            Ok(url) => url.to_string(),
            Err(_) => format!("{}{}", self.origin.as_str().trim_end_matches('/'), relative),
        }
    }
}
