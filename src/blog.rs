//! Read/delete surface for published blog posts. Creation is not here —
//! posts come into existence through the publish coordinator.

use crate::client::{
    types::{BlogPost, DeleteAck},
    Backend, TransportResult,
};
use std::sync::Arc;

pub struct BlogReader {
    backend: Arc<dyn Backend>,
}

impl BlogReader {
    pub fn new(backend: Arc<dyn Backend>) -> Self {
        Self { backend }
    }

    pub async fn posts(&self) -> TransportResult<Vec<BlogPost>> {
        self.backend.blog_posts().await
    }

    pub async fn post_by_slug(&self, slug: &str) -> TransportResult<BlogPost> {
        self.backend.blog_post_by_slug(slug).await
    }

    pub async fn delete(&self, id: &str) -> TransportResult<DeleteAck> {
        self.backend.delete_blog_post(id).await
    }
}

/// One-line listing form: date, status, slug, title.
pub fn summary_line(post: &BlogPost) -> String {
    let date = post
        .published_at
        .unwrap_or(post.created_at)
        .format("%Y-%m-%d");
    format!("{date}  [{}]  {}  — {}", post.status, post.slug, post.title)
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::{TimeZone, Utc};

    fn post() -> BlogPost {
        BlogPost {
            id: "p1".into(),
            title: "Opening Day".into(),
            slug: "opening-day".into(),
            content: "body".into(),
            excerpt: "body".into(),
            tags: vec![],
            image_url: None,
            status: "published".into(),
            published_at: None,
            created_at: Utc.with_ymd_and_hms(2026, 8, 1, 9, 0, 0).unwrap(),
            updated_at: Utc.with_ymd_and_hms(2026, 8, 1, 9, 0, 0).unwrap(),
        }
    }

    #[test]
    fn summary_falls_back_to_created_date() {
        let line = summary_line(&post());
        assert!(line.starts_with("2026-08-01"));
        assert!(line.contains("opening-day"));
    }

    #[test]
    fn summary_prefers_published_date() {
        let mut post = post();
        post.published_at = Some(Utc.with_ymd_and_hms(2026, 8, 2, 10, 0, 0).unwrap());
        assert!(summary_line(&post).starts_with("2026-08-02"));
    }
}
