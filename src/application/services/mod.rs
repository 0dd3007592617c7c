// src/application/services/mod.rs
use std::sync::Arc;

use crate::{
    application::{
        commands::posts::PostCommandService,
        ports::{media::MediaStore, time::Clock, util::SlugGenerator},
        queries::posts::PostQueryService,
    },
    domain::post::{PostReadRepository, PostWriteRepository, services::PostSlugService},
};

pub struct ApplicationServices {
    pub post_commands: Arc<PostCommandService>,
    pub post_queries: Arc<PostQueryService>,
}

impl ApplicationServices {
    pub fn new(
        post_write_repo: Arc<dyn PostWriteRepository>,
        post_read_repo: Arc<dyn PostReadRepository>,
        media_store: Arc<dyn MediaStore>,
        clock: Arc<dyn Clock>,
        slugger: Arc<dyn SlugGenerator>,
    ) -> Self {
        let slug_service = Arc::new(PostSlugService::new(slugger));

        let post_commands = Arc::new(PostCommandService::new(
            Arc::clone(&post_write_repo),
            Arc::clone(&post_read_repo),
            Arc::clone(&media_store),
            slug_service,
            Arc::clone(&clock),
        ));

        let post_queries = Arc::new(PostQueryService::new(
            Arc::clone(&post_read_repo),
            Arc::clone(&clock),
        ));

        Self {
            post_commands,
            post_queries,
        }
    }
}
