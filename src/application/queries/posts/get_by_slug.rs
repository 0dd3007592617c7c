// src/application/queries/posts/get_by_slug.rs
use super::PostQueryService;
use crate::{
    application::{
        dto::PostDto,
        error::{ApplicationError, ApplicationResult},
    },
    domain::post::PostSlug,
};

pub struct GetPublishedPostBySlugQuery {
    pub slug: String,
}

impl PostQueryService {
    /// Public detail lookup. Drafts and scheduled posts are indistinguishable
    /// from missing ones.
    pub async fn get_published_post_by_slug(
        &self,
        query: GetPublishedPostBySlugQuery,
    ) -> ApplicationResult<PostDto> {
        let slug = PostSlug::new(query.slug)?;
        let now = self.clock.now();

        let post = self
            .read_repo
            .find_published_by_slug(&slug, now)
            .await?
            .ok_or_else(|| ApplicationError::not_found("post not found"))?;

        Ok(post.into())
    }
}
