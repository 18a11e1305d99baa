mod get_by_id;
mod get_by_slug;
mod list;
mod service;

pub use get_by_id::GetPostByIdQuery;
pub use get_by_slug::GetPostBySlugQuery;
pub use list::{DEFAULT_LIMIT, ListRecentPostsQuery, MAX_LIMIT, normalize_limit};
pub use service::PostQueryService;
