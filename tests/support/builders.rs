// tests/support/builders.rs
use chrono::{DateTime, Utc};

use inkpost::application::commands::posts::CreatePostCommand;
use inkpost::domain::post::*;

use super::mocks::fixed_now;

/// Builds already-stored posts for seeding repositories.
pub struct PostBuilder {
    id: i64,
    title: String,
    slug: String,
    content_md: String,
    published_at: Option<DateTime<Utc>>,
    created_at: DateTime<Utc>,
}

impl Default for PostBuilder {
    fn default() -> Self {
        Self::new()
    }
}

impl PostBuilder {
    pub fn new() -> Self {
        Self {
            id: 1,
            title: "Test Post".into(),
            slug: "test-post".into(),
            content_md: "Test *body*".into(),
            published_at: None,
            created_at: fixed_now(),
        }
    }

    pub fn id(mut self, id: i64) -> Self {
        self.id = id;
        self.slug = format!("test-post-{id}");
        self
    }

    pub fn slug(mut self, slug: impl Into<String>) -> Self {
        self.slug = slug.into();
        self
    }

    pub fn published_at(mut self, at: DateTime<Utc>) -> Self {
        self.published_at = Some(at);
        self
    }

    pub fn created_at(mut self, at: DateTime<Utc>) -> Self {
        self.created_at = at;
        self
    }

    pub fn build(self) -> Post {
        Post {
            id: PostId::new(self.id).unwrap(),
            title: PostTitle::new(self.title).unwrap(),
            slug: PostSlug::new(self.slug).unwrap(),
            content_md: PostContent::new(self.content_md).unwrap(),
            content_html: "<p>Test <em>body</em></p>\n".into(),
            summary: None,
            status: if self.published_at.is_some() {
                PostStatus::Published
            } else {
                PostStatus::Draft
            },
            published_at: self.published_at,
            created_at: self.created_at,
            updated_at: self.created_at,
        }
    }
}

pub fn create_command(slug: &str, publish: bool) -> CreatePostCommand {
    CreatePostCommand::builder()
        .title(format!("Post {slug}"))
        .slug(slug)
        .content_md("# Heading\n\nSome *markdown* body.")
        .summary("short summary")
        .publish(publish)
        .build()
        .unwrap()
}
