// src/presentation/http/controllers/admin.rs
//
// Admin-gated mutations and the dashboard listing. Post fields arrive as
// multipart form data so the optional image file can ride along.
use crate::application::{
    commands::posts::{CreatePostCommand, DeletePostCommand, UpdatePostCommand},
    dto::{PaginatedResult, PostDto},
    error::ApplicationError,
    ports::media::MediaBlob,
    queries::posts::ListAllPostsQuery,
};
use crate::presentation::http::controllers::posts::PageParams;
use crate::presentation::http::error::{HttpError, HttpResult, IntoHttpResult};
use crate::presentation::http::extractors::Authenticated;
use crate::presentation::http::state::HttpState;
use axum::{
    Extension, Json,
    extract::{Multipart, Path, Query},
    http::StatusCode,
};
use chrono::{DateTime, Utc};

#[derive(Debug, Default)]
struct PostForm {
    title: Option<String>,
    content: Option<String>,
    category: Option<String>,
    published_at: Option<DateTime<Utc>>,
    image: Option<MediaBlob>,
}

impl PostForm {
    async fn read(mut multipart: Multipart) -> Result<Self, HttpError> {
        let mut form = Self::default();

        while let Some(field) = multipart.next_field().await.map_err(|err| {
            HttpError::from_error(ApplicationError::validation(format!(
                "malformed multipart body: {err}"
            )))
        })? {
            let Some(name) = field.name().map(str::to_owned) else {
                continue;
            };

            match name.as_str() {
                "title" => form.title = Some(Self::text(field).await?),
                "content" => form.content = Some(Self::text(field).await?),
                "category" => form.category = Some(Self::text(field).await?),
                "published_at" => {
                    let raw = Self::text(field).await?;
                    if !raw.trim().is_empty() {
                        form.published_at = Some(Self::parse_timestamp(raw.trim())?);
                    }
                }
                "image" => {
                    let file_name = field.file_name().map(str::to_owned);
                    let content_type = field.content_type().map(str::to_owned);
                    let bytes = field.bytes().await.map_err(|err| {
                        HttpError::from_error(ApplicationError::validation(format!(
                            "failed to read image upload: {err}"
                        )))
                    })?;
                    // Browsers submit an empty file part when nothing was picked.
                    if !bytes.is_empty() {
                        let mut blob = MediaBlob::new(bytes);
                        if let Some(file_name) = file_name {
                            blob = blob.with_file_name(file_name);
                        }
                        if let Some(content_type) = content_type {
                            blob = blob.with_content_type(content_type);
                        }
                        form.image = Some(blob);
                    }
                }
                _ => {}
            }
        }

        Ok(form)
    }

    async fn text(field: axum::extract::multipart::Field<'_>) -> Result<String, HttpError> {
        field.text().await.map_err(|err| {
            HttpError::from_error(ApplicationError::validation(format!(
                "malformed multipart field: {err}"
            )))
        })
    }

    fn parse_timestamp(raw: &str) -> Result<DateTime<Utc>, HttpError> {
        DateTime::parse_from_rfc3339(raw)
            .map(|at| at.with_timezone(&Utc))
            .map_err(|_| {
                HttpError::from_error(ApplicationError::validation(
                    "published_at must be an RFC 3339 timestamp",
                ))
            })
    }

    fn required(value: Option<String>, name: &str) -> Result<String, HttpError> {
        value.ok_or_else(|| {
            HttpError::from_error(ApplicationError::validation(format!("{name} is required")))
        })
    }
}

pub async fn create_post(
    Extension(state): Extension<HttpState>,
    Authenticated(identity): Authenticated,
    multipart: Multipart,
) -> HttpResult<(StatusCode, Json<PostDto>)> {
    let form = PostForm::read(multipart).await?;

    let command = CreatePostCommand {
        title: PostForm::required(form.title, "title")?,
        content: PostForm::required(form.content, "content")?,
        category: PostForm::required(form.category, "category")?,
        published_at: form.published_at,
        image: form.image,
    };

    let created = state
        .services
        .post_commands
        .create_post(&identity, command)
        .await
        .into_http()?;

    Ok((StatusCode::CREATED, Json(created)))
}

pub async fn update_post(
    Extension(state): Extension<HttpState>,
    Authenticated(identity): Authenticated,
    Path(id): Path<i64>,
    multipart: Multipart,
) -> HttpResult<Json<PostDto>> {
    let form = PostForm::read(multipart).await?;

    let command = UpdatePostCommand {
        id,
        title: PostForm::required(form.title, "title")?,
        content: PostForm::required(form.content, "content")?,
        category: PostForm::required(form.category, "category")?,
        published_at: form.published_at,
        image: form.image,
    };

    state
        .services
        .post_commands
        .update_post(&identity, command)
        .await
        .into_http()
        .map(Json)
}

pub async fn delete_post(
    Extension(state): Extension<HttpState>,
    Authenticated(identity): Authenticated,
    Path(id): Path<i64>,
) -> HttpResult<StatusCode> {
    state
        .services
        .post_commands
        .delete_post(&identity, DeletePostCommand { id })
        .await
        .into_http()?;

    Ok(StatusCode::NO_CONTENT)
}

pub async fn list_all_posts(
    Extension(state): Extension<HttpState>,
    Authenticated(identity): Authenticated,
    Query(params): Query<PageParams>,
) -> HttpResult<Json<PaginatedResult<PostDto>>> {
    state
        .services
        .post_queries
        .list_all_posts(
            &identity,
            ListAllPostsQuery {
                page: params.page,
                page_size: params.page_size,
            },
        )
        .await
        .into_http()
        .map(Json)
}
