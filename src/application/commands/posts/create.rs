// src/application/commands/posts/create.rs
use super::PostCommandService;
use crate::{
    application::{dto::PostDto, error::ApplicationResult},
    domain::post::{NewPost, PostContent, PostSlug, PostSummary, PostTitle},
};

pub struct CreatePostCommand {
    pub title: String,
    pub slug: String,
    pub content_md: String,
    pub summary: Option<String>,
    pub publish: bool,
}

impl CreatePostCommand {
    pub fn builder() -> CreatePostCommandBuilder {
        CreatePostCommandBuilder::default()
    }
}

#[derive(Default)]
pub struct CreatePostCommandBuilder {
    title: Option<String>,
    slug: Option<String>,
    content_md: Option<String>,
    summary: Option<String>,
    publish: bool,
}

impl CreatePostCommandBuilder {
    pub fn title(mut self, title: impl Into<String>) -> Self {
        self.title = Some(title.into());
        self
    }

    pub fn slug(mut self, slug: impl Into<String>) -> Self {
        self.slug = Some(slug.into());
        self
    }

    pub fn content_md(mut self, content_md: impl Into<String>) -> Self {
        self.content_md = Some(content_md.into());
        self
    }

    pub fn summary(mut self, summary: impl Into<String>) -> Self {
        self.summary = Some(summary.into());
        self
    }

    pub fn publish(mut self, publish: bool) -> Self {
        self.publish = publish;
        self
    }

    pub fn build(self) -> Result<CreatePostCommand, &'static str> {
        Ok(CreatePostCommand {
            title: self.title.ok_or("title is required")?,
            slug: self.slug.ok_or("slug is required")?,
            content_md: self.content_md.ok_or("content_md is required")?,
            summary: self.summary,
            publish: self.publish,
        })
    }
}

impl PostCommandService {
    /// Renders, builds and stores a new post.
    ///
    /// Nothing reaches the store unless validation and rendering succeed, and
    /// a failed insert leaves no post behind.
    pub async fn create_post(&self, command: CreatePostCommand) -> ApplicationResult<PostDto> {
        let title = PostTitle::new(command.title)?;
        let slug = PostSlug::new(command.slug)?;
        let content_md = PostContent::new(command.content_md)?;
        let summary = PostSummary::parse(command.summary);

        let content_html = self.renderer.render_to_html(content_md.as_str())?;

        let mut new_post = NewPost::draft(title, slug, content_md, content_html, summary);
        if command.publish {
            new_post.publish(self.clock.now());
        }

        let created = self.repo.insert(new_post).await?;
        tracing::info!(
            post_id = %created.id,
            slug = %created.slug,
            status = %created.status,
            "post created"
        );
        Ok(created.into())
    }
}
