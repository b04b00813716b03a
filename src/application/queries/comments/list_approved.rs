// src/application/queries/comments/list_approved.rs
use super::CommentQueryService;
use crate::{
    application::{dto::CommentDto, error::ApplicationResult},
    domain::post::PostId,
};

pub struct ListApprovedCommentsQuery {
    pub post_id: i64,
}

impl CommentQueryService {
    /// Approved comments of the post, oldest first. Unapproved comments stay
    /// hidden; they exist in storage until approved or removed.
    pub async fn list_approved(
        &self,
        query: ListApprovedCommentsQuery,
    ) -> ApplicationResult<Vec<CommentDto>> {
        let post_id = PostId::new(query.post_id)?;
        let comments = self.read_repo.list_approved(post_id).await?;
        Ok(comments.into_iter().map(Into::into).collect())
    }
}
