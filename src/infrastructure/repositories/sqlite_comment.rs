use crate::domain::comment::{
    Comment, CommentAuthor, CommentBody, CommentId, CommentReadRepository,
    CommentWriteRepository, NewComment,
};
use crate::domain::errors::{DomainError, DomainResult};
use crate::domain::post::PostId;
use async_trait::async_trait;
use chrono::{DateTime, Utc};
use sqlx::{FromRow, SqlitePool};
use std::sync::Arc;

use super::error::map_sqlx;

#[derive(Clone)]
pub struct SqliteCommentWriteRepository {
    pool: Arc<SqlitePool>,
}

impl SqliteCommentWriteRepository {
    pub fn new(pool: Arc<SqlitePool>) -> Self {
        Self { pool }
    }
}

#[derive(Clone)]
pub struct SqliteCommentReadRepository {
    pool: Arc<SqlitePool>,
}

impl SqliteCommentReadRepository {
    pub fn new(pool: Arc<SqlitePool>) -> Self {
        Self { pool }
    }
}

#[derive(Debug, FromRow)]
struct CommentRow {
    id: i64,
    post_id: i64,
    author: String,
    body: String,
    created_at: DateTime<Utc>,
    approved: i64,
}

impl TryFrom<CommentRow> for Comment {
    type Error = DomainError;

    fn try_from(row: CommentRow) -> Result<Self, Self::Error> {
        Ok(Comment {
            id: CommentId::new(row.id)?,
            post_id: PostId::new(row.post_id)?,
            author: CommentAuthor::new(row.author)?,
            body: CommentBody::new(row.body)?,
            created_at: row.created_at,
            approved: row.approved != 0,
        })
    }
}

#[async_trait]
impl CommentWriteRepository for SqliteCommentWriteRepository {
    async fn insert(&self, comment: NewComment) -> DomainResult<Comment> {
        let NewComment {
            post_id,
            author,
            body,
            created_at,
        } = comment;

        let row = sqlx::query_as::<_, CommentRow>(
            "INSERT INTO comments (post_id, author, body, created_at, approved) \
             VALUES (?, ?, ?, ?, 0) \
             RETURNING id, post_id, author, body, created_at, approved",
        )
        .bind(i64::from(post_id))
        .bind(author.as_str())
        .bind(body.as_str())
        .bind(created_at)
        .fetch_one(&*self.pool)
        .await
        .map_err(map_sqlx)?;

        Comment::try_from(row)
    }

    async fn set_approved(&self, id: CommentId) -> DomainResult<Comment> {
        let row = sqlx::query_as::<_, CommentRow>(
            "UPDATE comments SET approved = 1 WHERE id = ? \
             RETURNING id, post_id, author, body, created_at, approved",
        )
        .bind(i64::from(id))
        .fetch_one(&*self.pool)
        .await
        .map_err(map_sqlx)?;

        Comment::try_from(row)
    }

    async fn delete(&self, id: CommentId) -> DomainResult<()> {
        sqlx::query("DELETE FROM comments WHERE id = ?")
            .bind(i64::from(id))
            .execute(&*self.pool)
            .await
            .map_err(map_sqlx)?;
        Ok(())
    }
}

#[async_trait]
impl CommentReadRepository for SqliteCommentReadRepository {
    async fn find_by_id(&self, id: CommentId) -> DomainResult<Option<Comment>> {
        let row = sqlx::query_as::<_, CommentRow>(
            "SELECT id, post_id, author, body, created_at, approved \
             FROM comments WHERE id = ?",
        )
        .bind(i64::from(id))
        .fetch_optional(&*self.pool)
        .await
        .map_err(map_sqlx)?;

        row.map(Comment::try_from).transpose()
    }

    async fn list_approved(&self, post_id: PostId) -> DomainResult<Vec<Comment>> {
        let rows = sqlx::query_as::<_, CommentRow>(
            "SELECT id, post_id, author, body, created_at, approved \
             FROM comments WHERE post_id = ? AND approved = 1 \
             ORDER BY created_at ASC",
        )
        .bind(i64::from(post_id))
        .fetch_all(&*self.pool)
        .await
        .map_err(map_sqlx)?;

        rows.into_iter().map(Comment::try_from).collect()
    }
}
