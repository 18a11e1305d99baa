use crate::domain::errors::DomainResult;
use crate::domain::post::entity::{NewPost, Post};
use crate::domain::post::value_objects::{PostId, PostSlug};
use async_trait::async_trait;

/// Persistence port for posts.
///
/// Implementations own identity, timestamps and slug uniqueness. Lookups that
/// miss return `DomainError::NotFound`; a duplicate slug on insert returns
/// `DomainError::Conflict`.
#[async_trait]
pub trait PostRepository: Send + Sync {
    async fn insert(&self, post: NewPost) -> DomainResult<Post>;
    async fn find_by_id(&self, id: PostId) -> DomainResult<Post>;
    async fn find_by_slug(&self, slug: &PostSlug) -> DomainResult<Post>;
    /// At most `limit` posts, in `compare_recency` order.
    async fn list_recent(&self, limit: u32) -> DomainResult<Vec<Post>>;
}
