// src/infrastructure/repositories/postgres_post.rs
use super::map_sqlx;
use crate::domain::errors::{DomainError, DomainResult};
use crate::domain::identity::UserId;
use crate::domain::post::{
    NewPost, PageRequest, Post, PostCategory, PostContent, PostId, PostReadRepository, PostSlug,
    PostTitle, PostUpdate, PostWriteRepository,
};
use async_trait::async_trait;
use chrono::{DateTime, Utc};
use sqlx::{FromRow, PgPool, Postgres, QueryBuilder, Row};

const POST_COLUMNS: &str =
    "id, title, slug, content, category, image, published_at, author_id, created_at, updated_at";

#[derive(Clone)]
pub struct PostgresPostWriteRepository {
    pool: PgPool,
}

impl PostgresPostWriteRepository {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

#[derive(Clone)]
pub struct PostgresPostReadRepository {
    pool: PgPool,
}

impl PostgresPostReadRepository {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

#[derive(Debug, FromRow)]
struct PostRow {
    id: i64,
    title: String,
    slug: String,
    content: String,
    category: String,
    image: Option<String>,
    published_at: Option<DateTime<Utc>>,
    author_id: Option<i64>,
    created_at: DateTime<Utc>,
    updated_at: DateTime<Utc>,
}

impl TryFrom<PostRow> for Post {
    type Error = DomainError;

    fn try_from(row: PostRow) -> Result<Self, Self::Error> {
        Ok(Post {
            id: PostId::new(row.id)?,
            title: PostTitle::new(row.title)?,
            slug: PostSlug::new(row.slug)?,
            content: PostContent::new(row.content)?,
            category: PostCategory::new(row.category)?,
            image: row.image,
            published_at: row.published_at,
            author_id: row.author_id.map(UserId::new).transpose()?,
            created_at: row.created_at,
            updated_at: row.updated_at,
        })
    }
}

#[async_trait]
impl PostWriteRepository for PostgresPostWriteRepository {
    async fn insert(&self, post: NewPost) -> DomainResult<Post> {
        let NewPost {
            title,
            slug,
            content,
            category,
            image,
            published_at,
            author_id,
            created_at,
            updated_at,
        } = post;

        let row = sqlx::query_as::<_, PostRow>(
            "INSERT INTO posts (title, slug, content, category, image, published_at, author_id, created_at, updated_at)
             VALUES ($1, $2, $3, $4, $5, $6, $7, $8, $9)
             RETURNING id, title, slug, content, category, image, published_at, author_id, created_at, updated_at",
        )
        .bind(title.as_str())
        .bind(slug.as_str())
        .bind(content.as_str())
        .bind(category.as_str())
        .bind(image)
        .bind(published_at)
        .bind(author_id.map(i64::from))
        .bind(created_at)
        .bind(updated_at)
        .fetch_one(&self.pool)
        .await
        .map_err(map_sqlx)?;

        Post::try_from(row)
    }

    async fn update(&self, update: PostUpdate) -> DomainResult<Post> {
        let PostUpdate {
            id,
            title,
            slug,
            content,
            category,
            image,
            published_at,
            updated_at,
        } = update;

        let mut builder: QueryBuilder<Postgres> =
            QueryBuilder::new("UPDATE posts SET updated_at = ");
        builder.push_bind(updated_at);

        if let Some(title) = title {
            let title_str: String = title.into();
            builder.push(", title = ");
            builder.push_bind(title_str);
        }

        if let Some(slug) = slug {
            let slug_str: String = slug.into();
            builder.push(", slug = ");
            builder.push_bind(slug_str);
        }

        if let Some(content) = content {
            let content_str: String = content.into();
            builder.push(", content = ");
            builder.push_bind(content_str);
        }

        if let Some(category) = category {
            let category_str: String = category.into();
            builder.push(", category = ");
            builder.push_bind(category_str);
        }

        if let Some(image) = image {
            builder.push(", image = ");
            builder.push_bind(image);
        }

        if let Some(published_at) = published_at {
            builder.push(", published_at = ");
            builder.push_bind(published_at);
        }

        builder.push(" WHERE id = ");
        builder.push_bind(i64::from(id));
        builder.push(
            " RETURNING id, title, slug, content, category, image, published_at, author_id, created_at, updated_at",
        );

        let maybe_row = builder
            .build_query_as::<PostRow>()
            .fetch_optional(&self.pool)
            .await
            .map_err(map_sqlx)?;

        let row = maybe_row.ok_or_else(|| DomainError::NotFound("post not found".into()))?;

        Post::try_from(row)
    }

    async fn delete(&self, id: PostId) -> DomainResult<()> {
        let result = sqlx::query("DELETE FROM posts WHERE id = $1")
            .bind(i64::from(id))
            .execute(&self.pool)
            .await
            .map_err(map_sqlx)?;
        if result.rows_affected() == 0 {
            return Err(DomainError::NotFound("post not found".into()));
        }
        Ok(())
    }
}

impl PostgresPostReadRepository {
    fn rows_to_posts(rows: Vec<PostRow>) -> DomainResult<Vec<Post>> {
        rows.into_iter().map(Post::try_from).collect()
    }
}

#[async_trait]
impl PostReadRepository for PostgresPostReadRepository {
    async fn find_by_id(&self, id: PostId) -> DomainResult<Option<Post>> {
        let row = sqlx::query_as::<_, PostRow>(&format!(
            "SELECT {POST_COLUMNS} FROM posts WHERE id = $1"
        ))
        .bind(i64::from(id))
        .fetch_optional(&self.pool)
        .await
        .map_err(map_sqlx)?;

        row.map(Post::try_from).transpose()
    }

    async fn find_published_by_slug(
        &self,
        slug: &PostSlug,
        now: DateTime<Utc>,
    ) -> DomainResult<Option<Post>> {
        let row = sqlx::query_as::<_, PostRow>(&format!(
            "SELECT {POST_COLUMNS} FROM posts
             WHERE slug = $1 AND published_at IS NOT NULL AND published_at <= $2"
        ))
        .bind(slug.as_str())
        .bind(now)
        .fetch_optional(&self.pool)
        .await
        .map_err(map_sqlx)?;

        row.map(Post::try_from).transpose()
    }

    async fn list_published(
        &self,
        now: DateTime<Utc>,
        page: PageRequest,
    ) -> DomainResult<(Vec<Post>, u64)> {
        let rows = sqlx::query_as::<_, PostRow>(&format!(
            "SELECT {POST_COLUMNS} FROM posts
             WHERE published_at IS NOT NULL AND published_at <= $1
             ORDER BY published_at DESC, id DESC
             LIMIT $2 OFFSET $3"
        ))
        .bind(now)
        .bind(page.limit())
        .bind(page.offset())
        .fetch_all(&self.pool)
        .await
        .map_err(map_sqlx)?;

        let total: i64 = sqlx::query(
            "SELECT COUNT(*) AS count FROM posts
             WHERE published_at IS NOT NULL AND published_at <= $1",
        )
        .bind(now)
        .fetch_one(&self.pool)
        .await
        .map_err(map_sqlx)?
        .try_get("count")
        .map_err(map_sqlx)?;

        Ok((Self::rows_to_posts(rows)?, total.max(0) as u64))
    }

    async fn list_all(&self, page: PageRequest) -> DomainResult<(Vec<Post>, u64)> {
        let rows = sqlx::query_as::<_, PostRow>(&format!(
            "SELECT {POST_COLUMNS} FROM posts
             ORDER BY id DESC
             LIMIT $1 OFFSET $2"
        ))
        .bind(page.limit())
        .bind(page.offset())
        .fetch_all(&self.pool)
        .await
        .map_err(map_sqlx)?;

        let total: i64 = sqlx::query("SELECT COUNT(*) AS count FROM posts")
            .fetch_one(&self.pool)
            .await
            .map_err(map_sqlx)?
            .try_get("count")
            .map_err(map_sqlx)?;

        Ok((Self::rows_to_posts(rows)?, total.max(0) as u64))
    }
}
