// src/application/queries/posts/list.rs
use super::PostQueryService;
use crate::{
    application::{
        dto::{PaginatedResult, PostDto},
        error::{ApplicationError, ApplicationResult},
    },
    domain::identity::Identity,
};

/// Public listing defaults match the blog front page: ten posts per page.
const PUBLIC_PAGE_SIZE: u32 = 10;
/// The admin dashboard shows a denser listing.
const ADMIN_PAGE_SIZE: u32 = 20;

pub struct ListPublishedPostsQuery {
    pub page: u32,
    pub page_size: u32,
}

pub struct ListAllPostsQuery {
    pub page: u32,
    pub page_size: u32,
}

impl PostQueryService {
    /// Public listing: published posts only, newest publication first.
    pub async fn list_published_posts(
        &self,
        query: ListPublishedPostsQuery,
    ) -> ApplicationResult<PaginatedResult<PostDto>> {
        let page = self.normalize_page(query.page, query.page_size, PUBLIC_PAGE_SIZE);
        let now = self.clock.now();

        let (posts, total) = self.read_repo.list_published(now, page).await?;
        let items = posts.into_iter().map(Into::into).collect();
        Ok(PaginatedResult::new(items, total, page.page, page.page_size))
    }

    /// Admin listing: every post regardless of publication state, newest
    /// record first. The dashboard itself is admin-only.
    pub async fn list_all_posts(
        &self,
        actor: &Identity,
        query: ListAllPostsQuery,
    ) -> ApplicationResult<PaginatedResult<PostDto>> {
        if !actor.is_admin() {
            return Err(ApplicationError::forbidden(
                "admin access required for the post dashboard",
            ));
        }

        let page = self.normalize_page(query.page, query.page_size, ADMIN_PAGE_SIZE);
        let (posts, total) = self.read_repo.list_all(page).await?;
        let items = posts.into_iter().map(Into::into).collect();
        Ok(PaginatedResult::new(items, total, page.page, page.page_size))
    }
}
