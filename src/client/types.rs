//! Wire types mirroring the backend HTTP contract.

use crate::platform::Platform;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

/// Body for `POST /generate`. The orchestrator always asks for a single
/// platform per call; `auto_post` stays off so publishing remains a separate,
/// user-driven step.
#[derive(Serialize, Debug, Clone, PartialEq, Eq)]
pub struct GenerateRequest {
    pub topic: String,
    pub platform: Platform,
    pub tone: String,
    pub word_count: u32,
    pub auto_post: bool,
}

#[derive(Deserialize, Debug, Clone, PartialEq)]
pub struct GenerateResponse {
    #[serde(default)]
    pub content: BTreeMap<String, String>,
    #[serde(default)]
    pub posted: BTreeMap<String, PostResult>,
}

/// Terminal outcome of one publish attempt.
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq, Eq)]
pub struct PostResult {
    pub success: bool,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub platform: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub post_id: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub url: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub error: Option<String>,
}

/// Body for `POST /post/{platform}`.
#[derive(Serialize, Debug, Clone, Default, PartialEq, Eq)]
pub struct PostRequest {
    pub content: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub title: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub image_path: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub image_url: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub tags: Option<Vec<String>>,
}

#[derive(Serialize, Debug, Clone, PartialEq, Eq)]
pub struct ImagePromptRequest {
    pub content: String,
    pub platform: Platform,
}

#[derive(Deserialize, Debug, Clone, PartialEq, Eq)]
pub struct ImagePromptResponse {
    pub image_prompt: String,
}

#[derive(Serialize, Debug, Clone, PartialEq, Eq)]
pub struct ImageGenerateRequest {
    pub prompt: String,
}

#[derive(Deserialize, Debug, Clone, PartialEq, Eq)]
pub struct ImageGenerateResponse {
    pub image_path: String,
    /// Backend-relative; resolve against the configured origin before fetching.
    pub image_url: String,
    pub filename: String,
}

#[derive(Deserialize, Debug, Clone, PartialEq, Eq)]
pub struct HealthResponse {
    pub status: String,
    pub model_server: String,
    #[serde(default)]
    pub platforms: Vec<String>,
    #[serde(default)]
    pub image_generation: bool,
}

/// Per-platform credential state from `GET /platforms`.
#[derive(Deserialize, Debug, Clone, PartialEq, Eq)]
pub struct PlatformReadiness {
    pub configured: bool,
    pub valid: bool,
    #[serde(default)]
    pub error: Option<String>,
}

/// Published blog record. Creation happens via `POST /post/blog`; this type
/// only flows back from the read endpoints.
#[derive(Deserialize, Debug, Clone, PartialEq)]
pub struct BlogPost {
    pub id: String,
    pub title: String,
    pub slug: String,
    pub content: String,
    pub excerpt: String,
    #[serde(default)]
    pub tags: Vec<String>,
    #[serde(default)]
    pub image_url: Option<String>,
    pub status: String,
    #[serde(default)]
    pub published_at: Option<DateTime<Utc>>,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

#[derive(Deserialize, Debug, Clone, PartialEq, Eq)]
pub struct DeleteAck {
    pub success: bool,
}
