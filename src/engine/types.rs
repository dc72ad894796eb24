//! Shared structs for the generation workflow.

use crate::platform::{Platform, Tone};
use std::collections::BTreeMap;
use thiserror::Error;

pub const MIN_WORD_COUNT: u32 = 200;
pub const MAX_WORD_COUNT: u32 = 2000;

#[derive(Debug, Error, PartialEq, Eq)]
pub enum RequestError {
    #[error("word count {0} outside {MIN_WORD_COUNT}..={MAX_WORD_COUNT}")]
    WordCountOutOfRange(u32),
    #[error("no platforms requested")]
    EmptyPlatforms,
    #[error("topic is empty")]
    EmptyTopic,
}

/// Input to one generation cycle. Validated on construction and immutable
/// afterwards; platforms are normalised into priority order with duplicates
/// collapsed.
#[derive(Debug, Clone)]
pub struct GenerationRequest {
    topic: String,
    platforms: Vec<Platform>,
    tone: Tone,
    word_count: u32,
}

impl GenerationRequest {
    pub fn new(
        topic: impl Into<String>,
        platforms: &[Platform],
        tone: Tone,
        word_count: u32,
    ) -> Result<Self, RequestError> {
        let topic = topic.into();
        if topic.trim().is_empty() {
            return Err(RequestError::EmptyTopic);
        }
        if platforms.is_empty() {
            return Err(RequestError::EmptyPlatforms);
        }
        if !(MIN_WORD_COUNT..=MAX_WORD_COUNT).contains(&word_count) {
            return Err(RequestError::WordCountOutOfRange(word_count));
        }
        let platforms = Platform::ALL
            .iter()
            .copied()
            .filter(|candidate| platforms.contains(candidate))
            .collect();
        Ok(Self {
            topic,
            platforms,
            tone,
            word_count,
        })
    }

    pub fn topic(&self) -> &str {
        &self.topic
    }

    /// Requested platforms in generation priority order.
    pub fn platforms(&self) -> &[Platform] {
        &self.platforms
    }

    pub fn tone(&self) -> Tone {
        self.tone
    }

    pub fn word_count(&self) -> u32 {
        self.word_count
    }
}

/// Outcome of one platform's generation attempt.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Draft {
    Ready(String),
    Failed(String),
}

impl Draft {
    pub fn is_ready(&self) -> bool {
        matches!(self, Draft::Ready(_))
    }

    pub fn content(&self) -> Option<&str> {
        match self {
            Draft::Ready(text) => Some(text),
            Draft::Failed(_) => None,
        }
    }

    /// Classify text coming back from the backend. Its combined-generation
    /// path encodes per-platform failures as "[ERROR: …]" sentinels; those
    /// become `Failed` here so nothing downstream string-matches content.
    pub fn classify(text: String) -> Self {
        match text.strip_prefix("[ERROR") {
            Some(rest) => {
                let message = rest
                    .trim_start_matches(':')
                    .trim_end_matches(']')
                    .trim()
                    .to_string();
                if message.is_empty() {
                    Draft::Failed("generation failed".to_string())
                } else {
                    Draft::Failed(message)
                }
            }
            None => Draft::Ready(text),
        }
    }
}

/// Per-platform drafts for the current cycle. Keys iterate in generation
/// priority order; after a cycle completes the key set equals the requested
/// platform set exactly.
pub type ContentMap = BTreeMap<Platform, Draft>;

/// Image produced for the current cycle. `url` is backend-relative and gets
/// resolved against the configured origin at display time; `path` is an
/// opaque storage handle the caption platform uploads from.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ImageArtifact {
    pub prompt: String,
    pub path: String,
    pub url: String,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn word_count_bounds_are_enforced() {
        let err = GenerationRequest::new("topic", &[Platform::Blog], Tone::Casual, 199);
        assert_eq!(err.unwrap_err(), RequestError::WordCountOutOfRange(199));
        let err = GenerationRequest::new("topic", &[Platform::Blog], Tone::Casual, 2001);
        assert_eq!(err.unwrap_err(), RequestError::WordCountOutOfRange(2001));
        assert!(GenerationRequest::new("topic", &[Platform::Blog], Tone::Casual, 200).is_ok());
        assert!(GenerationRequest::new("topic", &[Platform::Blog], Tone::Casual, 2000).is_ok());
    }

    #[test]
    fn empty_inputs_are_rejected() {
        let err = GenerationRequest::new("  ", &[Platform::Blog], Tone::Casual, 500);
        assert_eq!(err.unwrap_err(), RequestError::EmptyTopic);
        let err = GenerationRequest::new("topic", &[], Tone::Casual, 500);
        assert_eq!(err.unwrap_err(), RequestError::EmptyPlatforms);
    }

    #[test]
    fn platforms_normalise_to_priority_order() {
        let request = GenerationRequest::new(
            "topic",
            &[Platform::Blog, Platform::Microblog, Platform::Blog],
            Tone::Casual,
            500,
        )
        .unwrap();
        assert_eq!(request.platforms(), &[Platform::Microblog, Platform::Blog]);
    }

    #[test]
    fn sentinel_text_classifies_as_failed() {
        assert_eq!(
            Draft::classify("[ERROR: model timed out]".to_string()),
            Draft::Failed("model timed out".to_string())
        );
        assert_eq!(
            Draft::classify("[ERROR]".to_string()),
            Draft::Failed("generation failed".to_string())
        );
        assert_eq!(
            Draft::classify("A real draft".to_string()),
            Draft::Ready("A real draft".to_string())
        );
    }
}
