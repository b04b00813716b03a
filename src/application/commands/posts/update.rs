// src/application/commands/posts/update.rs
use super::PostCommandService;
use crate::{
    application::{
        commands::guard::require_login,
        dto::{AuthenticatedUser, PostDto},
        error::{ApplicationError, ApplicationResult},
    },
    domain::post::{PostBody, PostId, PostTitle, PostUpdate},
};

pub struct UpdatePostCommand {
    pub id: i64,
    pub title: Option<String>,
    pub body: Option<String>,
}

impl PostCommandService {
    /// Partial edit of title and body. Author, creation time, publish state
    /// and the view counter are untouchable through this path. Login-gated
    /// only; the caller does not have to be the author.
    pub async fn update_post(
        &self,
        actor: Option<&AuthenticatedUser>,
        command: UpdatePostCommand,
    ) -> ApplicationResult<PostDto> {
        require_login(actor)?;

        let id = PostId::new(command.id)?;
        let post = self
            .read_repo
            .find_by_id(id)
            .await?
            .ok_or_else(|| ApplicationError::not_found("post not found"))?;

        let title_opt = command.title.map(PostTitle::new).transpose()?;
        let body_opt = command.body.map(PostBody::new).transpose()?;

        if title_opt.is_none() && body_opt.is_none() {
            let like_count = self.like_repo.count(post.id).await?;
            return Ok(PostDto::from_post(post, like_count));
        }

        let mut update = PostUpdate::new(id);
        if let Some(title) = title_opt {
            update = update.with_title(title);
        }
        if let Some(body) = body_opt {
            update = update.with_body(body);
        }

        let updated = self.write_repo.update(update).await?;
        let like_count = self.like_repo.count(updated.id).await?;
        Ok(PostDto::from_post(updated, like_count))
    }
}
