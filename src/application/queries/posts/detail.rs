// src/application/queries/posts/detail.rs
use super::PostQueryService;
use crate::{
    application::{
        dto::{AuthenticatedUser, PostDetailDto},
        error::{ApplicationError, ApplicationResult},
    },
    domain::post::PostId,
};

pub struct GetPostDetailQuery {
    pub id: i64,
}

impl PostQueryService {
    /// Detail read with a side effect: every call bumps the view counter by
    /// one, repeat visits and the author's own included. The fetch and the
    /// increment are two explicit steps so a no-increment read path stays
    /// possible (see `get_post_by_id`).
    pub async fn get_post_detail(
        &self,
        actor: Option<&AuthenticatedUser>,
        query: GetPostDetailQuery,
    ) -> ApplicationResult<PostDetailDto> {
        let id = PostId::new(query.id)?;
        self.read_repo
            .find_by_id(id)
            .await?
            .ok_or_else(|| ApplicationError::not_found("post not found"))?;

        let post = self.write_repo.record_view(id).await?;

        let liked_by_caller = match actor {
            Some(user) => self.like_repo.is_liked(id, user.id).await?,
            None => false,
        };

        let post = self.with_like_count(post).await?;
        Ok(PostDetailDto {
            post,
            liked_by_caller,
        })
    }
}
