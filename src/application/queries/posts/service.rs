// src/application/queries/posts/service.rs
use std::sync::Arc;

use crate::{
    application::{dto::PostDto, error::ApplicationResult},
    domain::post::{LikeRepository, Post, PostReadRepository, PostWriteRepository},
};

pub struct PostQueryService {
    pub(super) read_repo: Arc<dyn PostReadRepository>,
    // Needed for the view-counter side effect of the detail query.
    pub(super) write_repo: Arc<dyn PostWriteRepository>,
    pub(super) like_repo: Arc<dyn LikeRepository>,
}

impl PostQueryService {
    pub fn new(
        read_repo: Arc<dyn PostReadRepository>,
        write_repo: Arc<dyn PostWriteRepository>,
        like_repo: Arc<dyn LikeRepository>,
    ) -> Self {
        Self {
            read_repo,
            write_repo,
            like_repo,
        }
    }

    pub(super) async fn with_like_count(&self, post: Post) -> ApplicationResult<PostDto> {
        let like_count = self.like_repo.count(post.id).await?;
        Ok(PostDto::from_post(post, like_count))
    }
}
