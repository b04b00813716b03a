use crate::domain::comment::Comment;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use super::serde_time;

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CommentDto {
    pub id: i64,
    pub post_id: i64,
    pub author: String,
    pub body: String,
    #[serde(with = "serde_time")]
    pub created_at: DateTime<Utc>,
    pub approved: bool,
}

impl From<Comment> for CommentDto {
    fn from(comment: Comment) -> Self {
        Self {
            id: comment.id.into(),
            post_id: comment.post_id.into(),
            author: comment.author.into(),
            body: comment.body.into(),
            created_at: comment.created_at,
            approved: comment.approved,
        }
    }
}
