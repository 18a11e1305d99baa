use super::PostQueryService;
use crate::{
    application::{dto::PostDto, error::ApplicationResult},
    domain::{errors::DomainError, post::PostSlug},
};

pub struct GetPostBySlugQuery {
    pub slug: String,
}

impl PostQueryService {
    pub async fn get_post_by_slug(&self, query: GetPostBySlugQuery) -> ApplicationResult<PostDto> {
        // A slug that fails validation can never have been stored.
        let slug = PostSlug::new(query.slug)
            .map_err(|_| DomainError::not_found("post not found"))?;
        let post = self.repo.find_by_slug(&slug).await?;
        Ok(post.into())
    }
}
