// src/application/commands/posts/service.rs
use std::sync::Arc;

use crate::{
    application::ports::{media::MediaStore, time::Clock},
    domain::post::{PostPolicy, PostReadRepository, PostWriteRepository, services::PostSlugService},
};

pub struct PostCommandService {
    pub(super) write_repo: Arc<dyn PostWriteRepository>,
    pub(super) read_repo: Arc<dyn PostReadRepository>,
    pub(super) media: Arc<dyn MediaStore>,
    pub(super) slug_service: Arc<PostSlugService>,
    pub(super) policy: PostPolicy,
    pub(super) clock: Arc<dyn Clock>,
}

impl PostCommandService {
    pub fn new(
        write_repo: Arc<dyn PostWriteRepository>,
        read_repo: Arc<dyn PostReadRepository>,
        media: Arc<dyn MediaStore>,
        slug_service: Arc<PostSlugService>,
        clock: Arc<dyn Clock>,
    ) -> Self {
        Self {
            write_repo,
            read_repo,
            media,
            slug_service,
            policy: PostPolicy,
            clock,
        }
    }

    /// Best-effort blob removal. Cleanup failures must never undo or block
    /// the record mutation they follow, so they are logged and swallowed.
    pub(super) async fn discard_media(&self, path: &str) {
        if let Err(err) = self.media.delete(path).await {
            tracing::warn!(path, error = %err, "failed to remove superseded media blob");
        }
    }
}
