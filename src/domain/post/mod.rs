pub mod entity;
pub mod ordering;
pub mod repository;
pub mod value_objects;

pub use entity::{NewPost, Post};
pub use ordering::{compare_recency, sort_by_recency};
pub use repository::PostRepository;
pub use value_objects::{PostContent, PostId, PostSlug, PostStatus, PostSummary, PostTitle};
