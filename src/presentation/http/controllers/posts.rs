// src/presentation/http/controllers/posts.rs
use crate::application::{
    commands::posts::CreatePostCommand,
    dto::PostDto,
    queries::posts::{GetPostByIdQuery, GetPostBySlugQuery, ListRecentPostsQuery},
};
use crate::domain::errors::DomainError;
use crate::presentation::http::error::{ErrorResponse, HttpError, HttpResult, IntoHttpResult};
use crate::presentation::http::extractors::JsonBody;
use crate::presentation::http::state::HttpState;
use axum::{
    Extension, Json,
    extract::{Path, Query},
    http::StatusCode,
};
use serde::{Deserialize, Serialize};
use utoipa::{IntoParams, ToSchema};

#[derive(Debug, Deserialize, IntoParams)]
#[into_params(parameter_in = Query)]
pub struct ListPostsParams {
    /// Maximum number of posts; missing, unparsable or non-positive means 10.
    #[param(value_type = Option<i64>)]
    #[serde(default)]
    pub limit: Option<String>,
}

impl ListPostsParams {
    fn limit(&self) -> i64 {
        self.limit
            .as_deref()
            .and_then(|raw| raw.trim().parse::<i64>().ok())
            .unwrap_or(0)
    }
}

#[derive(Debug, Serialize, Deserialize, ToSchema)]
pub struct CreatePostRequest {
    pub title: String,
    pub slug: String,
    pub content_md: String,
    #[serde(default)]
    pub summary: Option<String>,
    #[serde(default)]
    pub publish: bool,
}

#[utoipa::path(
    get,
    path = "/",
    params(ListPostsParams),
    responses(
        (status = 200, description = "Recent posts, published first.", body = [PostDto]),
        (status = 500, description = "Store failure.", body = ErrorResponse)
    ),
    tag = "Posts"
)]
pub async fn list_recent_posts(
    Extension(state): Extension<HttpState>,
    Query(params): Query<ListPostsParams>,
) -> HttpResult<Json<Vec<PostDto>>> {
    state
        .services
        .post_queries
        .list_recent_posts(ListRecentPostsQuery {
            limit: params.limit(),
        })
        .await
        .into_http()
        .map(Json)
}

#[utoipa::path(
    get,
    path = "/posts/{slug}",
    params(("slug" = String, Path, description = "Post slug")),
    responses(
        (status = 200, description = "The post.", body = PostDto),
        (status = 404, description = "No post has this slug.", body = ErrorResponse)
    ),
    tag = "Posts"
)]
pub async fn get_post_by_slug(
    Extension(state): Extension<HttpState>,
    Path(slug): Path<String>,
) -> HttpResult<Json<PostDto>> {
    state
        .services
        .post_queries
        .get_post_by_slug(GetPostBySlugQuery { slug })
        .await
        .into_http()
        .map(Json)
}

#[utoipa::path(
    get,
    path = "/admin/posts/{id}",
    params(("id" = i64, Path, description = "Post identifier")),
    responses(
        (status = 200, description = "The post.", body = PostDto),
        (status = 404, description = "No post has this id.", body = ErrorResponse)
    ),
    tag = "Admin"
)]
pub async fn get_post_by_id(
    Extension(state): Extension<HttpState>,
    Path(id): Path<String>,
) -> HttpResult<Json<PostDto>> {
    // Non-numeric ids can never match a stored post.
    let id = id
        .parse::<i64>()
        .map_err(|_| HttpError::from_error(DomainError::not_found("post not found").into()))?;

    state
        .services
        .post_queries
        .get_post_by_id(GetPostByIdQuery { id })
        .await
        .into_http()
        .map(Json)
}

#[utoipa::path(
    post,
    path = "/admin/posts",
    request_body = CreatePostRequest,
    responses(
        (status = 201, description = "Post created.", body = PostDto),
        (status = 400, description = "Invalid input.", body = ErrorResponse),
        (status = 409, description = "Slug already taken.", body = ErrorResponse),
        (status = 422, description = "Markdown could not be rendered.", body = ErrorResponse)
    ),
    tag = "Admin"
)]
pub async fn create_post(
    Extension(state): Extension<HttpState>,
    JsonBody(payload): JsonBody<CreatePostRequest>,
) -> HttpResult<(StatusCode, Json<PostDto>)> {
    let command = CreatePostCommand {
        title: payload.title,
        slug: payload.slug,
        content_md: payload.content_md,
        summary: payload.summary,
        publish: payload.publish,
    };

    state
        .services
        .post_commands
        .create_post(command)
        .await
        .into_http()
        .map(|post| (StatusCode::CREATED, Json(post)))
}
