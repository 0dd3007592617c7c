// src/application/commands/posts/delete.rs
use super::{PostCommandService, authorize::ensure_allowed};
use crate::{
    application::error::{ApplicationError, ApplicationResult},
    domain::{
        identity::Identity,
        post::{PostAction, PostId},
    },
};

pub struct DeletePostCommand {
    pub id: i64,
}

impl PostCommandService {
    /// Delete a post. The record goes first; its image blob is removed
    /// afterwards best-effort, and a blob-removal failure is not surfaced.
    pub async fn delete_post(
        &self,
        actor: &Identity,
        command: DeletePostCommand,
    ) -> ApplicationResult<()> {
        let id = PostId::new(command.id)?;
        let post = self
            .read_repo
            .find_by_id(id)
            .await?
            .ok_or_else(|| ApplicationError::not_found("post not found"))?;

        ensure_allowed(&self.policy, Some(actor), PostAction::Delete)?;

        self.write_repo.delete(id).await?;

        if let Some(image) = &post.image {
            self.discard_media(image).await;
        }

        Ok(())
    }
}
