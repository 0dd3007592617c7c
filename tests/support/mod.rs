// tests/support/mod.rs
// In-memory collaborators shared by the integration test binaries. Individual
// test crates use different subsets, so dead_code warnings are allowed here.
#![allow(dead_code)]

use std::collections::HashMap;
use std::sync::{
    Arc, Mutex,
    atomic::{AtomicU64, Ordering},
};

use async_trait::async_trait;
use bytes::Bytes;
use chrono::{DateTime, TimeZone, Utc};
use once_cell::sync::Lazy;

use inkpost::application::error::{ApplicationError, ApplicationResult};
use inkpost::application::ports::media::{MediaBlob, MediaStore};
use inkpost::application::ports::time::Clock;
use inkpost::application::services::ApplicationServices;
use inkpost::domain::errors::{DomainError, DomainResult};
use inkpost::domain::identity::{Identity, Role, UserId};
use inkpost::domain::post::{
    NewPost, PageRequest, Post, PostId, PostReadRepository, PostSlug, PostUpdate,
    PostWriteRepository,
};
use inkpost::infrastructure::util::DefaultSlugGenerator;

pub fn admin() -> Identity {
    Identity {
        id: UserId::new(1).unwrap(),
        role: Role::Admin,
    }
}

pub fn regular_user() -> Identity {
    Identity {
        id: UserId::new(2).unwrap(),
        role: Role::User,
    }
}

/// A deterministic clock pinned to a known instant.
pub struct FixedClock(pub DateTime<Utc>);

impl Clock for FixedClock {
    fn now(&self) -> DateTime<Utc> {
        self.0
    }
}

static FIXED_INSTANT: Lazy<DateTime<Utc>> =
    Lazy::new(|| Utc.with_ymd_and_hms(2024, 5, 10, 12, 0, 0).unwrap());

pub fn fixed_instant() -> DateTime<Utc> {
    *FIXED_INSTANT
}

#[derive(Default)]
pub struct InMemoryPostRepo {
    posts: Mutex<HashMap<i64, Post>>,
    next_id: AtomicU64,
}

impl InMemoryPostRepo {
    pub fn new() -> Arc<Self> {
        Arc::new(Self {
            posts: Mutex::new(HashMap::new()),
            next_id: AtomicU64::new(1),
        })
    }

    pub fn get(&self, id: i64) -> Option<Post> {
        self.posts.lock().unwrap().get(&id).cloned()
    }

    pub fn len(&self) -> usize {
        self.posts.lock().unwrap().len()
    }

    fn slug_taken(posts: &HashMap<i64, Post>, slug: &str, ignore_id: Option<i64>) -> bool {
        posts.values().any(|post| {
            post.slug.as_str() == slug && ignore_id.is_none_or(|id| i64::from(post.id) != id)
        })
    }
}

#[async_trait]
impl PostWriteRepository for InMemoryPostRepo {
    async fn insert(&self, post: NewPost) -> DomainResult<Post> {
        let mut posts = self.posts.lock().unwrap();
        if Self::slug_taken(&posts, post.slug.as_str(), None) {
            return Err(DomainError::Conflict("slug already exists".into()));
        }

        let id = self.next_id.fetch_add(1, Ordering::SeqCst) as i64;
        let stored = Post {
            id: PostId::new(id)?,
            title: post.title,
            slug: post.slug,
            content: post.content,
            category: post.category,
            image: post.image,
            published_at: post.published_at,
            author_id: post.author_id,
            created_at: post.created_at,
            updated_at: post.updated_at,
        };
        posts.insert(id, stored.clone());
        Ok(stored)
    }

    async fn update(&self, update: PostUpdate) -> DomainResult<Post> {
        let mut posts = self.posts.lock().unwrap();
        let id = i64::from(update.id);

        if let Some(slug) = &update.slug {
            if Self::slug_taken(&posts, slug.as_str(), Some(id)) {
                return Err(DomainError::Conflict("slug already exists".into()));
            }
        }

        let post = posts
            .get_mut(&id)
            .ok_or_else(|| DomainError::NotFound("post not found".into()))?;

        if let Some(title) = update.title {
            post.title = title;
        }
        if let Some(slug) = update.slug {
            post.slug = slug;
        }
        if let Some(content) = update.content {
            post.content = content;
        }
        if let Some(category) = update.category {
            post.category = category;
        }
        if let Some(image) = update.image {
            post.image = Some(image);
        }
        if let Some(published_at) = update.published_at {
            post.published_at = Some(published_at);
        }
        post.updated_at = update.updated_at;

        Ok(post.clone())
    }

    async fn delete(&self, id: PostId) -> DomainResult<()> {
        let mut posts = self.posts.lock().unwrap();
        posts
            .remove(&i64::from(id))
            .map(|_| ())
            .ok_or_else(|| DomainError::NotFound("post not found".into()))
    }
}

#[async_trait]
impl PostReadRepository for InMemoryPostRepo {
    async fn find_by_id(&self, id: PostId) -> DomainResult<Option<Post>> {
        Ok(self.posts.lock().unwrap().get(&i64::from(id)).cloned())
    }

    async fn find_published_by_slug(
        &self,
        slug: &PostSlug,
        now: DateTime<Utc>,
    ) -> DomainResult<Option<Post>> {
        Ok(self
            .posts
            .lock()
            .unwrap()
            .values()
            .find(|post| post.slug == *slug && post.is_published(now))
            .cloned())
    }

    async fn list_published(
        &self,
        now: DateTime<Utc>,
        page: PageRequest,
    ) -> DomainResult<(Vec<Post>, u64)> {
        let posts = self.posts.lock().unwrap();
        let mut published: Vec<Post> = posts
            .values()
            .filter(|post| post.is_published(now))
            .cloned()
            .collect();
        published.sort_by(|a, b| {
            b.published_at
                .cmp(&a.published_at)
                .then(i64::from(b.id).cmp(&i64::from(a.id)))
        });

        let total = published.len() as u64;
        let items = published
            .into_iter()
            .skip(page.offset() as usize)
            .take(page.limit() as usize)
            .collect();
        Ok((items, total))
    }

    async fn list_all(&self, page: PageRequest) -> DomainResult<(Vec<Post>, u64)> {
        let posts = self.posts.lock().unwrap();
        let mut all: Vec<Post> = posts.values().cloned().collect();
        all.sort_by(|a, b| i64::from(b.id).cmp(&i64::from(a.id)));

        let total = all.len() as u64;
        let items = all
            .into_iter()
            .skip(page.offset() as usize)
            .take(page.limit() as usize)
            .collect();
        Ok((items, total))
    }
}

/// In-memory blob store with switchable failure modes for store and delete.
#[derive(Default)]
pub struct InMemoryMediaStore {
    counter: AtomicU64,
    pub stored: Mutex<Vec<String>>,
    pub deleted: Mutex<Vec<String>>,
    pub fail_store: Mutex<bool>,
    pub fail_delete: Mutex<bool>,
}

impl InMemoryMediaStore {
    pub fn new() -> Arc<Self> {
        Arc::new(Self::default())
    }

    pub fn set_fail_store(&self, fail: bool) {
        *self.fail_store.lock().unwrap() = fail;
    }

    pub fn set_fail_delete(&self, fail: bool) {
        *self.fail_delete.lock().unwrap() = fail;
    }

    pub fn stored_paths(&self) -> Vec<String> {
        self.stored.lock().unwrap().clone()
    }

    pub fn deleted_paths(&self) -> Vec<String> {
        self.deleted.lock().unwrap().clone()
    }
}

#[async_trait]
impl MediaStore for InMemoryMediaStore {
    async fn store(&self, _blob: MediaBlob) -> ApplicationResult<String> {
        if *self.fail_store.lock().unwrap() {
            return Err(ApplicationError::storage("disk full"));
        }
        let path = format!("posts/blob-{}", self.counter.fetch_add(1, Ordering::SeqCst));
        self.stored.lock().unwrap().push(path.clone());
        Ok(path)
    }

    async fn delete(&self, path: &str) -> ApplicationResult<()> {
        if *self.fail_delete.lock().unwrap() {
            return Err(ApplicationError::storage("permission denied"));
        }
        self.deleted.lock().unwrap().push(path.to_string());
        Ok(())
    }
}

pub struct TestContext {
    pub services: ApplicationServices,
    pub repo: Arc<InMemoryPostRepo>,
    pub media: Arc<InMemoryMediaStore>,
}

pub fn context_at(now: DateTime<Utc>) -> TestContext {
    let repo = InMemoryPostRepo::new();
    let media = InMemoryMediaStore::new();
    let services = ApplicationServices::new(
        Arc::clone(&repo) as Arc<dyn PostWriteRepository>,
        Arc::clone(&repo) as Arc<dyn PostReadRepository>,
        Arc::clone(&media) as Arc<dyn MediaStore>,
        Arc::new(FixedClock(now)),
        Arc::new(DefaultSlugGenerator),
    );
    TestContext {
        services,
        repo,
        media,
    }
}

pub fn context() -> TestContext {
    context_at(fixed_instant())
}

/// Rebuild the services over the same repository and media store but with a
/// clock pinned to a different instant.
pub fn reclock(ctx: &TestContext, now: DateTime<Utc>) -> TestContext {
    let services = ApplicationServices::new(
        Arc::clone(&ctx.repo) as Arc<dyn PostWriteRepository>,
        Arc::clone(&ctx.repo) as Arc<dyn PostReadRepository>,
        Arc::clone(&ctx.media) as Arc<dyn MediaStore>,
        Arc::new(FixedClock(now)),
        Arc::new(DefaultSlugGenerator),
    );
    TestContext {
        services,
        repo: Arc::clone(&ctx.repo),
        media: Arc::clone(&ctx.media),
    }
}

pub fn image_blob(name: &str) -> MediaBlob {
    MediaBlob::new(Bytes::from_static(b"fake-image-bytes")).with_file_name(name.to_string())
}
