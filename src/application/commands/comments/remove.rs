// src/application/commands/comments/remove.rs
use super::CommentCommandService;
use crate::{
    application::{
        commands::guard::require_login,
        dto::AuthenticatedUser,
        error::{ApplicationError, ApplicationResult},
    },
    domain::{comment::CommentId, post::PostId},
};

pub struct RemoveCommentCommand {
    pub id: i64,
}

impl CommentCommandService {
    /// Deletes the comment and hands back the owning post id so the caller
    /// can navigate back to the post. Works on approved and unapproved
    /// comments alike.
    pub async fn remove_comment(
        &self,
        actor: Option<&AuthenticatedUser>,
        command: RemoveCommentCommand,
    ) -> ApplicationResult<PostId> {
        require_login(actor)?;

        let id = CommentId::new(command.id)?;
        let comment = self
            .read_repo
            .find_by_id(id)
            .await?
            .ok_or_else(|| ApplicationError::not_found("comment not found"))?;

        self.write_repo.delete(id).await?;
        tracing::info!(comment_id = i64::from(id), "comment removed");
        Ok(comment.post_id)
    }
}
