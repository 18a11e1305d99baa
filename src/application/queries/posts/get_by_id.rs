use super::PostQueryService;
use crate::{
    application::{dto::PostDto, error::ApplicationResult},
    domain::{errors::DomainError, post::PostId},
};

pub struct GetPostByIdQuery {
    pub id: i64,
}

impl PostQueryService {
    pub async fn get_post_by_id(&self, query: GetPostByIdQuery) -> ApplicationResult<PostDto> {
        let id = PostId::new(query.id).map_err(|_| DomainError::not_found("post not found"))?;
        let post = self.repo.find_by_id(id).await?;
        Ok(post.into())
    }
}
