// src/application/commands/posts/create.rs
use super::PostCommandService;
use crate::{
    application::{
        commands::guard::require_login,
        dto::{AuthenticatedUser, PostDto},
        error::ApplicationResult,
    },
    domain::post::{NewPost, PostBody, PostTitle},
};

pub struct CreatePostCommand {
    pub title: String,
    pub body: String,
}

impl CreatePostCommand {
    pub fn builder() -> CreatePostCommandBuilder {
        CreatePostCommandBuilder::default()
    }
}

#[derive(Default)]
pub struct CreatePostCommandBuilder {
    title: Option<String>,
    body: Option<String>,
}

impl CreatePostCommandBuilder {
    pub fn title(mut self, title: impl Into<String>) -> Self {
        self.title = Some(title.into());
        self
    }

    pub fn body(mut self, body: impl Into<String>) -> Self {
        self.body = Some(body.into());
        self
    }

    pub fn build(self) -> Result<CreatePostCommand, &'static str> {
        Ok(CreatePostCommand {
            title: self.title.ok_or("title is required")?,
            body: self.body.ok_or("body is required")?,
        })
    }
}

impl PostCommandService {
    /// Creates a draft. The author is always the acting caller; any author
    /// supplied by the outside world is ignored.
    pub async fn create_post(
        &self,
        actor: Option<&AuthenticatedUser>,
        command: CreatePostCommand,
    ) -> ApplicationResult<PostDto> {
        let actor = require_login(actor)?;

        let title = PostTitle::new(command.title)?;
        let body = PostBody::new(command.body)?;
        let now = self.clock.now();

        let new_post = NewPost {
            author_id: actor.id,
            title,
            body,
            created_at: now,
            published_at: None,
        };

        let created = self.write_repo.insert(new_post).await?;
        tracing::debug!(post_id = i64::from(created.id), "draft created");
        Ok(PostDto::from_post(created, 0))
    }
}
