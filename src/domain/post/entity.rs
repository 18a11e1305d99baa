// src/domain/post/entity.rs
use crate::domain::errors::{DomainError, DomainResult};
use crate::domain::post::value_objects::{
    PostContent, PostId, PostSlug, PostStatus, PostSummary, PostTitle,
};
use chrono::{DateTime, Utc};

/// A stored post. Identity and timestamps always come from the store.
#[derive(Debug, Clone)]
pub struct Post {
    pub id: PostId,
    pub title: PostTitle,
    pub slug: PostSlug,
    pub content_md: PostContent,
    pub content_html: String,
    pub summary: Option<PostSummary>,
    pub status: PostStatus,
    pub published_at: Option<DateTime<Utc>>,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl Post {
    pub fn is_published(&self) -> bool {
        self.status == PostStatus::Published
    }

    /// Rejects records whose publication timestamp disagrees with their status.
    pub fn ensure_consistent(self) -> DomainResult<Self> {
        if self.is_published() != self.published_at.is_some() {
            return Err(DomainError::persistence(format!(
                "post {} has status `{}` but published_at is {}",
                self.id,
                self.status,
                if self.published_at.is_some() { "set" } else { "unset" }
            )));
        }
        Ok(self)
    }
}

/// A post that has not been handed to the store yet.
#[derive(Debug, Clone)]
pub struct NewPost {
    pub title: PostTitle,
    pub slug: PostSlug,
    pub content_md: PostContent,
    pub content_html: String,
    pub summary: Option<PostSummary>,
    pub status: PostStatus,
    pub published_at: Option<DateTime<Utc>>,
}

impl NewPost {
    /// `content_html` must be the rendering of `content_md`.
    pub fn draft(
        title: PostTitle,
        slug: PostSlug,
        content_md: PostContent,
        content_html: String,
        summary: Option<PostSummary>,
    ) -> Self {
        Self {
            title,
            slug,
            content_md,
            content_html,
            summary,
            status: PostStatus::Draft,
            published_at: None,
        }
    }

    pub fn publish(&mut self, now: DateTime<Utc>) {
        self.status = PostStatus::Published;
        self.published_at = Some(now);
    }
}
