// src/application/commands/posts/create.rs
use super::{PostCommandService, authorize::ensure_allowed};
use crate::{
    application::{
        dto::PostDto,
        error::ApplicationResult,
        ports::media::MediaBlob,
    },
    domain::{
        identity::Identity,
        post::{NewPost, PostAction, PostCategory, PostContent, PostSlug, PostTitle},
    },
};
use chrono::{DateTime, Utc};

pub struct CreatePostCommand {
    pub title: String,
    pub content: String,
    pub category: String,
    pub published_at: Option<DateTime<Utc>>,
    pub image: Option<MediaBlob>,
}

impl PostCommandService {
    /// Create a post.
    ///
    /// Side-effect order is fixed: the image blob is made durable before any
    /// record exists (a storage failure aborts the whole create), then the
    /// record is inserted with a disambiguated slug. A slug collision gets
    /// exactly one automatic retry with a fresh disambiguator; if the insert
    /// still fails, the already-stored blob is cleaned up best-effort.
    pub async fn create_post(
        &self,
        actor: &Identity,
        command: CreatePostCommand,
    ) -> ApplicationResult<PostDto> {
        ensure_allowed(&self.policy, Some(actor), PostAction::Create)?;

        let title = PostTitle::new(command.title)?;
        let content = PostContent::new(command.content)?;
        let category = PostCategory::new(command.category)?;

        let now = self.clock.now();
        // Omitted publication date means immediate publish.
        let published_at = command.published_at.unwrap_or(now);

        let image = match command.image {
            Some(blob) => Some(self.media.store(blob).await?),
            None => None,
        };

        let slug = self
            .slug_service
            .candidate_for_create(&title, now.timestamp())?;

        let attempt = self
            .insert(&title, &content, &category, slug, image.as_deref(), published_at, actor, now)
            .await;

        let result = match attempt {
            Err(err) if err.is_conflict() => {
                tracing::debug!(error = %err, "slug collision on create, retrying once");
                let slug = self
                    .slug_service
                    .candidate_for_create(&title, now.timestamp_millis())?;
                self.insert(&title, &content, &category, slug, image.as_deref(), published_at, actor, now)
                    .await
            }
            other => other,
        };

        match result {
            Ok(dto) => Ok(dto),
            Err(err) => {
                if let Some(path) = &image {
                    self.discard_media(path).await;
                }
                Err(err)
            }
        }
    }

    #[allow(clippy::too_many_arguments)]
    async fn insert(
        &self,
        title: &PostTitle,
        content: &PostContent,
        category: &PostCategory,
        slug: PostSlug,
        image: Option<&str>,
        published_at: DateTime<Utc>,
        actor: &Identity,
        now: DateTime<Utc>,
    ) -> ApplicationResult<PostDto> {
        let new_post = NewPost {
            title: title.clone(),
            slug,
            content: content.clone(),
            category: category.clone(),
            image: image.map(str::to_owned),
            published_at: Some(published_at),
            author_id: Some(actor.id),
            created_at: now,
            updated_at: now,
        };

        let created = self.write_repo.insert(new_post).await?;
        Ok(created.into())
    }
}
