// src/application/commands/posts/update.rs
use super::{PostCommandService, authorize::ensure_allowed};
use crate::{
    application::{
        dto::PostDto,
        error::{ApplicationError, ApplicationResult},
        ports::media::MediaBlob,
    },
    domain::{
        identity::Identity,
        post::{PostAction, PostCategory, PostContent, PostId, PostTitle, PostUpdate},
    },
};
use chrono::{DateTime, Utc};

/// Full-record update: the required fields must all be supplied again, the
/// publication date and the replacement image are optional.
pub struct UpdatePostCommand {
    pub id: i64,
    pub title: String,
    pub content: String,
    pub category: String,
    pub published_at: Option<DateTime<Utc>>,
    pub image: Option<MediaBlob>,
}

impl PostCommandService {
    /// Update a post.
    ///
    /// A replacement image is stored before the record is touched; the old
    /// blob is removed only after the database update committed, and a
    /// failure of that removal does not fail the update. A title change
    /// regenerates the slug without a disambiguator, so a collision with
    /// another post surfaces as a conflict and leaves the record unchanged.
    pub async fn update_post(
        &self,
        actor: &Identity,
        command: UpdatePostCommand,
    ) -> ApplicationResult<PostDto> {
        let id = PostId::new(command.id)?;
        let post = self
            .read_repo
            .find_by_id(id)
            .await?
            .ok_or_else(|| ApplicationError::not_found("post not found"))?;

        ensure_allowed(&self.policy, Some(actor), PostAction::Update)?;

        let title = PostTitle::new(command.title)?;
        let content = PostContent::new(command.content)?;
        let category = PostCategory::new(command.category)?;

        let now = self.clock.now();
        let mut update = PostUpdate::new(id, now)
            .with_content(content)
            .with_category(category);

        if title != post.title {
            let slug = self.slug_service.from_title(&title)?;
            update = update.with_slug(slug);
        }
        update = update.with_title(title);

        if let Some(published_at) = command.published_at {
            update = update.with_published_at(published_at);
        }

        let new_image = match command.image {
            Some(blob) => Some(self.media.store(blob).await?),
            None => None,
        };
        if let Some(path) = &new_image {
            update = update.with_image(path.clone());
        }

        match self.write_repo.update(update).await {
            Ok(updated) => {
                self.cleanup_replaced_image(post.image.as_deref(), new_image.as_deref())
                    .await;
                Ok(updated.into())
            }
            Err(err) => {
                // The record kept its old image reference, so the blob that
                // just got stored is the orphan.
                if let Some(path) = &new_image {
                    self.discard_media(path).await;
                }
                Err(err.into())
            }
        }
    }

    async fn cleanup_replaced_image(&self, old: Option<&str>, new: Option<&str>) {
        if let (Some(old), Some(new)) = (old, new) {
            if old != new {
                self.discard_media(old).await;
            }
        }
    }
}
