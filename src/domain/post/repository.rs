use crate::domain::errors::DomainResult;
use crate::domain::post::entity::{NewPost, Post, PostUpdate};
use crate::domain::post::value_objects::{PostId, PostSlug};
use async_trait::async_trait;
use chrono::{DateTime, Utc};

/// One-based offset pagination window.
#[derive(Debug, Clone, Copy)]
pub struct PageRequest {
    pub page: u32,
    pub page_size: u32,
}

impl PageRequest {
    pub fn new(page: u32, page_size: u32) -> Self {
        Self {
            page: page.max(1),
            page_size: page_size.max(1),
        }
    }

    pub fn offset(&self) -> i64 {
        i64::from(self.page - 1) * i64::from(self.page_size)
    }

    pub fn limit(&self) -> i64 {
        i64::from(self.page_size)
    }
}

#[async_trait]
pub trait PostWriteRepository: Send + Sync {
    async fn insert(&self, post: NewPost) -> DomainResult<Post>;
    async fn update(&self, update: PostUpdate) -> DomainResult<Post>;
    async fn delete(&self, id: PostId) -> DomainResult<()>;
}

#[async_trait]
pub trait PostReadRepository: Send + Sync {
    async fn find_by_id(&self, id: PostId) -> DomainResult<Option<Post>>;

    /// Public detail lookup: only matches posts whose publication timestamp
    /// has passed.
    async fn find_published_by_slug(
        &self,
        slug: &PostSlug,
        now: DateTime<Utc>,
    ) -> DomainResult<Option<Post>>;

    /// Public listing ordered by `published_at DESC, id DESC`. Returns the
    /// page plus the total number of published posts.
    async fn list_published(
        &self,
        now: DateTime<Utc>,
        page: PageRequest,
    ) -> DomainResult<(Vec<Post>, u64)>;

    /// Administrative listing without the publication filter, newest first.
    async fn list_all(&self, page: PageRequest) -> DomainResult<(Vec<Post>, u64)>;
}
