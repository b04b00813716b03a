use crate::domain::errors::{DomainError, DomainResult};
use crate::domain::identity::UserId;
use crate::domain::post::{
    NewPost, Post, PostBody, PostId, PostReadRepository, PostTitle, PostUpdate,
    PostWriteRepository,
};
use async_trait::async_trait;
use chrono::{DateTime, Utc};
use sqlx::{FromRow, SqlitePool};
use std::sync::Arc;

use super::error::map_sqlx;

const POST_COLUMNS: &str = "id, author_id, title, body, created_at, published_at, views";

#[derive(Clone)]
pub struct SqlitePostWriteRepository {
    pool: Arc<SqlitePool>,
}

impl SqlitePostWriteRepository {
    pub fn new(pool: Arc<SqlitePool>) -> Self {
        Self { pool }
    }
}

#[derive(Clone)]
pub struct SqlitePostReadRepository {
    pool: Arc<SqlitePool>,
}

impl SqlitePostReadRepository {
    pub fn new(pool: Arc<SqlitePool>) -> Self {
        Self { pool }
    }
}

#[derive(Debug, FromRow)]
struct PostRow {
    id: i64,
    author_id: i64,
    title: String,
    body: String,
    created_at: DateTime<Utc>,
    published_at: Option<DateTime<Utc>>,
    views: i64,
}

impl TryFrom<PostRow> for Post {
    type Error = DomainError;

    fn try_from(row: PostRow) -> Result<Self, Self::Error> {
        Ok(Post {
            id: PostId::new(row.id)?,
            author_id: UserId::new(row.author_id)?,
            title: PostTitle::new(row.title)?,
            body: PostBody::new(row.body)?,
            created_at: row.created_at,
            published_at: row.published_at,
            views: row.views,
        })
    }
}

#[async_trait]
impl PostWriteRepository for SqlitePostWriteRepository {
    async fn insert(&self, post: NewPost) -> DomainResult<Post> {
        let NewPost {
            author_id,
            title,
            body,
            created_at,
            published_at,
        } = post;

        let row = sqlx::query_as::<_, PostRow>(
            "INSERT INTO posts (author_id, title, body, created_at, published_at) \
             VALUES (?, ?, ?, ?, ?) \
             RETURNING id, author_id, title, body, created_at, published_at, views",
        )
        .bind(i64::from(author_id))
        .bind(title.as_str())
        .bind(body.as_str())
        .bind(created_at)
        .bind(published_at)
        .fetch_one(&*self.pool)
        .await
        .map_err(map_sqlx)?;

        Post::try_from(row)
    }

    async fn update(&self, update: PostUpdate) -> DomainResult<Post> {
        let PostUpdate {
            id,
            title,
            body,
            published_at,
        } = update;

        let row = sqlx::query_as::<_, PostRow>(
            "UPDATE posts SET \
               title = COALESCE(?, title), \
               body = COALESCE(?, body), \
               published_at = COALESCE(?, published_at) \
             WHERE id = ? \
             RETURNING id, author_id, title, body, created_at, published_at, views",
        )
        .bind(title.as_ref().map(PostTitle::as_str))
        .bind(body.as_ref().map(PostBody::as_str))
        .bind(published_at)
        .bind(i64::from(id))
        .fetch_one(&*self.pool)
        .await
        .map_err(map_sqlx)?;

        Post::try_from(row)
    }

    async fn record_view(&self, id: PostId) -> DomainResult<Post> {
        let row = sqlx::query_as::<_, PostRow>(
            "UPDATE posts SET views = views + 1 WHERE id = ? \
             RETURNING id, author_id, title, body, created_at, published_at, views",
        )
        .bind(i64::from(id))
        .fetch_one(&*self.pool)
        .await
        .map_err(map_sqlx)?;

        Post::try_from(row)
    }

    async fn delete(&self, id: PostId) -> DomainResult<()> {
        sqlx::query("DELETE FROM posts WHERE id = ?")
            .bind(i64::from(id))
            .execute(&*self.pool)
            .await
            .map_err(map_sqlx)?;
        Ok(())
    }
}

#[async_trait]
impl PostReadRepository for SqlitePostReadRepository {
    async fn find_by_id(&self, id: PostId) -> DomainResult<Option<Post>> {
        let row = sqlx::query_as::<_, PostRow>(&format!(
            "SELECT {POST_COLUMNS} FROM posts WHERE id = ?"
        ))
        .bind(i64::from(id))
        .fetch_optional(&*self.pool)
        .await
        .map_err(map_sqlx)?;

        row.map(Post::try_from).transpose()
    }

    async fn list_published(&self) -> DomainResult<Vec<Post>> {
        let rows = sqlx::query_as::<_, PostRow>(&format!(
            "SELECT {POST_COLUMNS} FROM posts \
             WHERE published_at IS NOT NULL \
             ORDER BY published_at DESC"
        ))
        .fetch_all(&*self.pool)
        .await
        .map_err(map_sqlx)?;

        rows.into_iter().map(Post::try_from).collect()
    }

    async fn list_drafts(&self) -> DomainResult<Vec<Post>> {
        let rows = sqlx::query_as::<_, PostRow>(&format!(
            "SELECT {POST_COLUMNS} FROM posts \
             WHERE published_at IS NULL \
             ORDER BY created_at ASC"
        ))
        .fetch_all(&*self.pool)
        .await
        .map_err(map_sqlx)?;

        rows.into_iter().map(Post::try_from).collect()
    }
}
