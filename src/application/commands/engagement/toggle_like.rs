// src/application/commands/engagement/toggle_like.rs
use super::EngagementService;
use crate::{
    application::{
        commands::guard::require_login,
        dto::{AuthenticatedUser, PostDto},
        error::{ApplicationError, ApplicationResult},
    },
    domain::post::PostId,
};

pub struct ToggleLikeCommand {
    pub post_id: i64,
}

impl EngagementService {
    /// One operation, state-dependent effect: liked becomes unliked and the
    /// other way round. Calling it twice restores the original membership.
    pub async fn toggle_like(
        &self,
        actor: Option<&AuthenticatedUser>,
        command: ToggleLikeCommand,
    ) -> ApplicationResult<PostDto> {
        let actor = require_login(actor)?;

        let post_id = PostId::new(command.post_id)?;
        let post = self
            .post_read_repo
            .find_by_id(post_id)
            .await?
            .ok_or_else(|| ApplicationError::not_found("post not found"))?;

        if self.like_repo.is_liked(post_id, actor.id).await? {
            self.like_repo.remove(post_id, actor.id).await?;
            tracing::debug!(
                post_id = i64::from(post_id),
                user_id = i64::from(actor.id),
                "like removed"
            );
        } else {
            self.like_repo.add(post_id, actor.id).await?;
            tracing::debug!(
                post_id = i64::from(post_id),
                user_id = i64::from(actor.id),
                "like added"
            );
        }

        let like_count = self.like_repo.count(post_id).await?;
        Ok(PostDto::from_post(post, like_count))
    }
}
