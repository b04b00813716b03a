// src/application/commands/posts/delete.rs
use super::PostCommandService;
use crate::{
    application::{
        commands::guard::require_login,
        dto::AuthenticatedUser,
        error::{ApplicationError, ApplicationResult},
    },
    domain::post::PostId,
};

pub struct DeletePostCommand {
    pub id: i64,
}

impl PostCommandService {
    /// Deletes the post; its comments and likes go with it (FK cascade).
    pub async fn delete_post(
        &self,
        actor: Option<&AuthenticatedUser>,
        command: DeletePostCommand,
    ) -> ApplicationResult<()> {
        require_login(actor)?;

        let id = PostId::new(command.id)?;
        self.read_repo
            .find_by_id(id)
            .await?
            .ok_or_else(|| ApplicationError::not_found("post not found"))?;

        self.write_repo.delete(id).await?;
        tracing::info!(post_id = i64::from(id), "post deleted with comments and likes");
        Ok(())
    }
}
