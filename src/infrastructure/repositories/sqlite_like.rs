use crate::domain::errors::DomainResult;
use crate::domain::identity::UserId;
use crate::domain::post::{LikeRepository, PostId};
use async_trait::async_trait;
use sqlx::SqlitePool;
use std::sync::Arc;

use super::error::map_sqlx;

/// `(post_id, user_id)` rows with a composite primary key; the store, not
/// the application, enforces that a user likes a post at most once.
#[derive(Clone)]
pub struct SqliteLikeRepository {
    pool: Arc<SqlitePool>,
}

impl SqliteLikeRepository {
    pub fn new(pool: Arc<SqlitePool>) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl LikeRepository for SqliteLikeRepository {
    async fn is_liked(&self, post_id: PostId, user_id: UserId) -> DomainResult<bool> {
        let count: i64 = sqlx::query_scalar(
            "SELECT COUNT(1) FROM post_likes WHERE post_id = ? AND user_id = ?",
        )
        .bind(i64::from(post_id))
        .bind(i64::from(user_id))
        .fetch_one(&*self.pool)
        .await
        .map_err(map_sqlx)?;

        Ok(count > 0)
    }

    async fn add(&self, post_id: PostId, user_id: UserId) -> DomainResult<()> {
        // OR IGNORE keeps a racing double-insert from failing; membership is
        // the only thing that matters.
        sqlx::query("INSERT OR IGNORE INTO post_likes (post_id, user_id) VALUES (?, ?)")
            .bind(i64::from(post_id))
            .bind(i64::from(user_id))
            .execute(&*self.pool)
            .await
            .map_err(map_sqlx)?;
        Ok(())
    }

    async fn remove(&self, post_id: PostId, user_id: UserId) -> DomainResult<()> {
        sqlx::query("DELETE FROM post_likes WHERE post_id = ? AND user_id = ?")
            .bind(i64::from(post_id))
            .bind(i64::from(user_id))
            .execute(&*self.pool)
            .await
            .map_err(map_sqlx)?;
        Ok(())
    }

    async fn count(&self, post_id: PostId) -> DomainResult<i64> {
        let count: i64 = sqlx::query_scalar("SELECT COUNT(1) FROM post_likes WHERE post_id = ?")
            .bind(i64::from(post_id))
            .fetch_one(&*self.pool)
            .await
            .map_err(map_sqlx)?;

        Ok(count)
    }
}
