// src/application/queries/posts/list_published.rs
use super::PostQueryService;
use crate::application::{dto::PostDto, error::ApplicationResult};

impl PostQueryService {
    /// Public listing: published posts only, most recently published first.
    /// Drafts never appear here.
    pub async fn list_published(&self) -> ApplicationResult<Vec<PostDto>> {
        let posts = self.read_repo.list_published().await?;
        let mut items = Vec::with_capacity(posts.len());
        for post in posts {
            items.push(self.with_like_count(post).await?);
        }
        Ok(items)
    }
}
