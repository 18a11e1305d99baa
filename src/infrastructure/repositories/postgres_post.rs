// src/infrastructure/repositories/postgres_post.rs
use super::map_sqlx;
use crate::domain::errors::{DomainError, DomainResult};
use crate::domain::post::{
    NewPost, Post, PostContent, PostId, PostRepository, PostSlug, PostStatus, PostSummary,
    PostTitle,
};
use async_trait::async_trait;
use chrono::{DateTime, Utc};
use sqlx::{FromRow, PgPool};

const POST_COLUMNS: &str = "id, title, slug, content_md, content_html, summary, status, \
     published_at, created_at, updated_at";

#[derive(Clone)]
pub struct PostgresPostRepository {
    pool: PgPool,
}

impl PostgresPostRepository {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

#[derive(Debug, FromRow)]
struct PostRow {
    id: i64,
    title: String,
    slug: String,
    content_md: String,
    content_html: String,
    summary: Option<String>,
    status: String,
    published_at: Option<DateTime<Utc>>,
    created_at: DateTime<Utc>,
    updated_at: DateTime<Utc>,
}

impl TryFrom<PostRow> for Post {
    type Error = DomainError;

    fn try_from(row: PostRow) -> Result<Self, Self::Error> {
        let status = row.status.parse::<PostStatus>().map_err(corrupt_row)?;

        Post {
            id: PostId::new(row.id).map_err(corrupt_row)?,
            title: PostTitle::new(row.title).map_err(corrupt_row)?,
            slug: PostSlug::new(row.slug).map_err(corrupt_row)?,
            content_md: PostContent::new(row.content_md).map_err(corrupt_row)?,
            content_html: row.content_html,
            summary: PostSummary::parse(row.summary),
            status,
            published_at: row.published_at,
            created_at: row.created_at,
            updated_at: row.updated_at,
        }
        .ensure_consistent()
    }
}

fn corrupt_row(err: DomainError) -> DomainError {
    DomainError::persistence(format!("stored post is invalid: {err}"))
}

#[async_trait]
impl PostRepository for PostgresPostRepository {
    async fn insert(&self, post: NewPost) -> DomainResult<Post> {
        let NewPost {
            title,
            slug,
            content_md,
            content_html,
            summary,
            status,
            published_at,
        } = post;

        let sql = format!(
            "INSERT INTO posts (title, slug, content_md, content_html, summary, status, published_at)
             VALUES ($1, $2, $3, $4, $5, $6, $7)
             RETURNING {POST_COLUMNS}"
        );

        let row = sqlx::query_as::<_, PostRow>(&sql)
            .bind(title.as_str())
            .bind(slug.as_str())
            .bind(content_md.as_str())
            .bind(content_html)
            .bind(summary.as_ref().map(PostSummary::as_str))
            .bind(status.as_str())
            .bind(published_at)
            .fetch_one(&self.pool)
            .await
            .map_err(map_sqlx)?;

        Post::try_from(row)
    }

    async fn find_by_id(&self, id: PostId) -> DomainResult<Post> {
        let sql = format!("SELECT {POST_COLUMNS} FROM posts WHERE id = $1");
        let row = sqlx::query_as::<_, PostRow>(&sql)
            .bind(i64::from(id))
            .fetch_optional(&self.pool)
            .await
            .map_err(map_sqlx)?
            .ok_or_else(|| DomainError::not_found(format!("post {id} not found")))?;

        Post::try_from(row)
    }

    async fn find_by_slug(&self, slug: &PostSlug) -> DomainResult<Post> {
        let sql = format!("SELECT {POST_COLUMNS} FROM posts WHERE slug = $1");
        let row = sqlx::query_as::<_, PostRow>(&sql)
            .bind(slug.as_str())
            .fetch_optional(&self.pool)
            .await
            .map_err(map_sqlx)?
            .ok_or_else(|| DomainError::not_found(format!("post `{slug}` not found")))?;

        Post::try_from(row)
    }

    async fn list_recent(&self, limit: u32) -> DomainResult<Vec<Post>> {
        let sql = format!(
            "SELECT {POST_COLUMNS} FROM posts
             ORDER BY published_at DESC NULLS LAST, created_at DESC, id DESC
             LIMIT $1"
        );
        let rows = sqlx::query_as::<_, PostRow>(&sql)
            .bind(i64::from(limit))
            .fetch_all(&self.pool)
            .await
            .map_err(map_sqlx)?;

        rows.into_iter().map(Post::try_from).collect()
    }
}
