// src/domain/comment/entity.rs
use crate::domain::comment::value_objects::{CommentAuthor, CommentBody, CommentId};
use crate::domain::post::value_objects::PostId;
use chrono::{DateTime, Utc};

#[derive(Debug, Clone)]
pub struct Comment {
    pub id: CommentId,
    pub post_id: PostId,
    pub author: CommentAuthor,
    pub body: CommentBody,
    pub created_at: DateTime<Utc>,
    pub approved: bool,
}

impl Comment {
    /// Marks the comment visible. There is no reverse transition; approving
    /// an already-approved comment is a no-op.
    pub fn approve(&mut self) {
        self.approved = true;
    }
}

#[derive(Debug, Clone)]
pub struct NewComment {
    pub post_id: PostId,
    pub author: CommentAuthor,
    pub body: CommentBody,
    pub created_at: DateTime<Utc>,
}
