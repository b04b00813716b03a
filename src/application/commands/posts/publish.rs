// src/application/commands/posts/publish.rs
use super::PostCommandService;
use crate::{
    application::{
        commands::guard::require_login,
        dto::{AuthenticatedUser, PostDto},
        error::{ApplicationError, ApplicationResult},
    },
    domain::post::{PostId, PostUpdate},
};

pub struct PublishPostCommand {
    pub id: i64,
}

impl PostCommandService {
    /// Stamps `published_at` with the current time. Publishing an already
    /// published post refreshes the timestamp rather than erroring; the post
    /// stays published either way.
    pub async fn publish_post(
        &self,
        actor: Option<&AuthenticatedUser>,
        command: PublishPostCommand,
    ) -> ApplicationResult<PostDto> {
        require_login(actor)?;

        let id = PostId::new(command.id)?;
        let mut post = self
            .read_repo
            .find_by_id(id)
            .await?
            .ok_or_else(|| ApplicationError::not_found("post not found"))?;

        let now = self.clock.now();
        post.publish(now);

        let update = PostUpdate::new(id).with_published_at(now);
        let updated = self.write_repo.update(update).await?;
        tracing::info!(post_id = i64::from(id), "post published");

        let like_count = self.like_repo.count(updated.id).await?;
        Ok(PostDto::from_post(updated, like_count))
    }
}
