// src/application/commands/comments/approve.rs
use super::CommentCommandService;
use crate::{
    application::{
        commands::guard::require_login,
        dto::{AuthenticatedUser, CommentDto},
        error::{ApplicationError, ApplicationResult},
    },
    domain::comment::CommentId,
};

pub struct ApproveCommentCommand {
    pub id: i64,
}

impl CommentCommandService {
    /// Marks the comment visible. Idempotent: approving an already approved
    /// comment succeeds and leaves it approved. There is no un-approve.
    pub async fn approve_comment(
        &self,
        actor: Option<&AuthenticatedUser>,
        command: ApproveCommentCommand,
    ) -> ApplicationResult<CommentDto> {
        require_login(actor)?;

        let id = CommentId::new(command.id)?;
        self.read_repo
            .find_by_id(id)
            .await?
            .ok_or_else(|| ApplicationError::not_found("comment not found"))?;

        let approved = self.write_repo.set_approved(id).await?;
        tracing::info!(comment_id = i64::from(id), "comment approved");
        Ok(approved.into())
    }
}
