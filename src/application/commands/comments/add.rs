// src/application/commands/comments/add.rs
use super::CommentCommandService;
use crate::{
    application::{
        commands::guard::require_login,
        dto::{AuthenticatedUser, CommentDto},
        error::{ApplicationError, ApplicationResult},
    },
    domain::{
        comment::{CommentAuthor, CommentBody, NewComment},
        post::PostId,
    },
};

pub struct AddCommentCommand {
    pub post_id: i64,
    pub author: String,
    pub body: String,
}

impl CommentCommandService {
    /// Creates an unapproved comment on the post. The caller must be logged
    /// in, but `author` is taken verbatim as a display label and is not
    /// matched against the caller identity.
    pub async fn add_comment(
        &self,
        actor: Option<&AuthenticatedUser>,
        command: AddCommentCommand,
    ) -> ApplicationResult<CommentDto> {
        require_login(actor)?;

        let post_id = PostId::new(command.post_id)?;
        self.post_read_repo
            .find_by_id(post_id)
            .await?
            .ok_or_else(|| ApplicationError::not_found("post not found"))?;

        let author = CommentAuthor::new(command.author)?;
        let body = CommentBody::new(command.body)?;

        let new_comment = NewComment {
            post_id,
            author,
            body,
            created_at: self.clock.now(),
        };

        let created = self.write_repo.insert(new_comment).await?;
        tracing::debug!(
            comment_id = i64::from(created.id),
            post_id = i64::from(post_id),
            "comment added, awaiting approval"
        );
        Ok(created.into())
    }
}
