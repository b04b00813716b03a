use crate::domain::comment::entity::{Comment, NewComment};
use crate::domain::comment::value_objects::CommentId;
use crate::domain::errors::DomainResult;
use crate::domain::post::value_objects::PostId;
use async_trait::async_trait;

#[async_trait]
pub trait CommentWriteRepository: Send + Sync {
    async fn insert(&self, comment: NewComment) -> DomainResult<Comment>;
    /// Flips `approved` on and returns the stored row; `NotFound` when the
    /// id does not exist.
    async fn set_approved(&self, id: CommentId) -> DomainResult<Comment>;
    async fn delete(&self, id: CommentId) -> DomainResult<()>;
}

#[async_trait]
pub trait CommentReadRepository: Send + Sync {
    async fn find_by_id(&self, id: CommentId) -> DomainResult<Option<Comment>>;
    /// Approved comments of the post, oldest first. Unapproved comments stay
    /// in storage but never leave through this query.
    async fn list_approved(&self, post_id: PostId) -> DomainResult<Vec<Comment>>;
}
