// src/presentation/http/controllers/posts.rs
//
// Public blog surface: anyone, anonymous visitors included, may list
// published posts and read one by slug.
use crate::application::{
    dto::{PaginatedResult, PostDto},
    queries::posts::{GetPublishedPostBySlugQuery, ListPublishedPostsQuery},
};
use crate::presentation::http::error::{HttpResult, IntoHttpResult};
use crate::presentation::http::state::HttpState;
use axum::{
    Extension, Json,
    extract::{Path, Query},
};
use serde::Deserialize;

#[derive(Debug, Deserialize)]
pub struct PageParams {
    #[serde(default)]
    pub page: u32,
    #[serde(default)]
    pub page_size: u32,
}

pub async fn list_posts(
    Extension(state): Extension<HttpState>,
    Query(params): Query<PageParams>,
) -> HttpResult<Json<PaginatedResult<PostDto>>> {
    state
        .services
        .post_queries
        .list_published_posts(ListPublishedPostsQuery {
            page: params.page,
            page_size: params.page_size,
        })
        .await
        .into_http()
        .map(Json)
}

pub async fn get_post_by_slug(
    Extension(state): Extension<HttpState>,
    Path(slug): Path<String>,
) -> HttpResult<Json<PostDto>> {
    state
        .services
        .post_queries
        .get_published_post_by_slug(GetPublishedPostBySlugQuery { slug })
        .await
        .into_http()
        .map(Json)
}
