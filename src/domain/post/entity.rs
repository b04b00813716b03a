// src/domain/post/entity.rs
use crate::domain::identity::UserId;
use crate::domain::post::value_objects::{PostBody, PostId, PostTitle};
use chrono::{DateTime, Utc};

#[derive(Debug, Clone)]
pub struct Post {
    pub id: PostId,
    pub author_id: UserId,
    pub title: PostTitle,
    pub body: PostBody,
    pub created_at: DateTime<Utc>,
    pub published_at: Option<DateTime<Utc>>,
    pub views: i64,
}

impl Post {
    /// Stamps the post as published. Re-publishing is allowed and simply
    /// refreshes the timestamp; the state stays Published.
    pub fn publish(&mut self, now: DateTime<Utc>) {
        self.published_at = Some(now);
    }

    pub fn is_published(&self) -> bool {
        self.published_at.is_some()
    }

    pub fn set_content(&mut self, title: PostTitle, body: PostBody) {
        self.title = title;
        self.body = body;
    }
}

#[derive(Debug, Clone)]
pub struct NewPost {
    pub author_id: UserId,
    pub title: PostTitle,
    pub body: PostBody,
    pub created_at: DateTime<Utc>,
    pub published_at: Option<DateTime<Utc>>,
}

#[derive(Debug, Clone)]
pub struct PostUpdate {
    pub id: PostId,
    pub title: Option<PostTitle>,
    pub body: Option<PostBody>,
    pub published_at: Option<DateTime<Utc>>,
}

impl PostUpdate {
    pub fn new(id: PostId) -> Self {
        Self {
            id,
            title: None,
            body: None,
            published_at: None,
        }
    }

    pub fn with_title(mut self, title: PostTitle) -> Self {
        self.title = Some(title);
        self
    }

    pub fn with_body(mut self, body: PostBody) -> Self {
        self.body = Some(body);
        self
    }

    pub fn with_published_at(mut self, published_at: DateTime<Utc>) -> Self {
        self.published_at = Some(published_at);
        self
    }
}
