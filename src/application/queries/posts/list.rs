use super::PostQueryService;
use crate::application::{dto::PostDto, error::ApplicationResult};

pub const DEFAULT_LIMIT: u32 = 10;
pub const MAX_LIMIT: u32 = 100;

pub struct ListRecentPostsQuery {
    pub limit: i64,
}

/// Non-positive limits fall back to the default; large ones are capped.
pub fn normalize_limit(limit: i64) -> u32 {
    if limit <= 0 {
        DEFAULT_LIMIT
    } else {
        u32::try_from(limit).map_or(MAX_LIMIT, |limit| limit.min(MAX_LIMIT))
    }
}

impl PostQueryService {
    pub async fn list_recent_posts(
        &self,
        query: ListRecentPostsQuery,
    ) -> ApplicationResult<Vec<PostDto>> {
        let limit = normalize_limit(query.limit);
        let records = self.repo.list_recent(limit).await?;
        Ok(records.into_iter().map(Into::into).collect())
    }
}
