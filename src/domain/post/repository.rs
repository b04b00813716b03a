use crate::domain::errors::DomainResult;
use crate::domain::identity::UserId;
use crate::domain::post::entity::{NewPost, Post, PostUpdate};
use crate::domain::post::value_objects::PostId;
use async_trait::async_trait;

#[async_trait]
pub trait PostWriteRepository: Send + Sync {
    async fn insert(&self, post: NewPost) -> DomainResult<Post>;
    async fn update(&self, update: PostUpdate) -> DomainResult<Post>;
    /// Single-statement `views = views + 1`; last write wins under races.
    async fn record_view(&self, id: PostId) -> DomainResult<Post>;
    async fn delete(&self, id: PostId) -> DomainResult<()>;
}

#[async_trait]
pub trait PostReadRepository: Send + Sync {
    async fn find_by_id(&self, id: PostId) -> DomainResult<Option<Post>>;
    /// Published posts only, most recently published first.
    async fn list_published(&self) -> DomainResult<Vec<Post>>;
    /// Drafts of every author, oldest first.
    async fn list_drafts(&self) -> DomainResult<Vec<Post>>;
}

/// Set-valued (post, user) relation; uniqueness is the store's concern.
#[async_trait]
pub trait LikeRepository: Send + Sync {
    async fn is_liked(&self, post_id: PostId, user_id: UserId) -> DomainResult<bool>;
    async fn add(&self, post_id: PostId, user_id: UserId) -> DomainResult<()>;
    async fn remove(&self, post_id: PostId, user_id: UserId) -> DomainResult<()>;
    async fn count(&self, post_id: PostId) -> DomainResult<i64>;
}
