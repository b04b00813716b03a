// src/application/queries/posts/list_drafts.rs
use super::PostQueryService;
use crate::application::{
    commands::guard::require_login,
    dto::{AuthenticatedUser, PostDto},
    error::ApplicationResult,
};

impl PostQueryService {
    /// Drafts of every author, oldest first. Login-gated, but not filtered
    /// by author: any logged-in caller sees all drafts.
    pub async fn list_drafts(
        &self,
        actor: Option<&AuthenticatedUser>,
    ) -> ApplicationResult<Vec<PostDto>> {
        require_login(actor)?;

        let posts = self.read_repo.list_drafts().await?;
        let mut items = Vec::with_capacity(posts.len());
        for post in posts {
            items.push(self.with_like_count(post).await?);
        }
        Ok(items)
    }
}
