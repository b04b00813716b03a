use crate::domain::post::Post;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use super::serde_time;

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PostDto {
    pub id: i64,
    pub author_id: i64,
    pub title: String,
    pub body: String,
    #[serde(with = "serde_time")]
    pub created_at: DateTime<Utc>,
    #[serde(default, with = "serde_time::option")]
    pub published_at: Option<DateTime<Utc>>,
    pub views: i64,
    pub like_count: i64,
}

impl PostDto {
    pub fn from_post(post: Post, like_count: i64) -> Self {
        Self {
            id: post.id.into(),
            author_id: post.author_id.into(),
            title: post.title.into(),
            body: post.body.into(),
            created_at: post.created_at,
            published_at: post.published_at,
            views: post.views,
            like_count,
        }
    }

    pub fn is_published(&self) -> bool {
        self.published_at.is_some()
    }
}

/// Detail view of a post: the post plus whether the calling identity
/// currently likes it. Producing one bumps the view counter.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PostDetailDto {
    #[serde(flatten)]
    pub post: PostDto,
    pub liked_by_caller: bool,
}
