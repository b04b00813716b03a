// src/application/services/mod.rs
use std::sync::Arc;

use crate::{
    application::{
        commands::{
            comments::CommentCommandService, engagement::EngagementService,
            posts::PostCommandService,
        },
        ports::time::Clock,
        queries::{comments::CommentQueryService, posts::PostQueryService},
    },
    domain::{
        comment::{CommentReadRepository, CommentWriteRepository},
        post::{LikeRepository, PostReadRepository, PostWriteRepository},
    },
};

/// Everything the embedding host needs, wired once from the repositories and
/// the clock.
pub struct ApplicationServices {
    pub post_commands: Arc<PostCommandService>,
    pub post_queries: Arc<PostQueryService>,
    pub engagement: Arc<EngagementService>,
    pub comment_commands: Arc<CommentCommandService>,
    pub comment_queries: Arc<CommentQueryService>,
}

impl ApplicationServices {
    pub fn new(
        post_write_repo: Arc<dyn PostWriteRepository>,
        post_read_repo: Arc<dyn PostReadRepository>,
        like_repo: Arc<dyn LikeRepository>,
        comment_write_repo: Arc<dyn CommentWriteRepository>,
        comment_read_repo: Arc<dyn CommentReadRepository>,
        clock: Arc<dyn Clock>,
    ) -> Self {
        let post_commands = Arc::new(PostCommandService::new(
            Arc::clone(&post_write_repo),
            Arc::clone(&post_read_repo),
            Arc::clone(&like_repo),
            Arc::clone(&clock),
        ));

        let post_queries = Arc::new(PostQueryService::new(
            Arc::clone(&post_read_repo),
            Arc::clone(&post_write_repo),
            Arc::clone(&like_repo),
        ));

        let engagement = Arc::new(EngagementService::new(
            Arc::clone(&like_repo),
            Arc::clone(&post_read_repo),
        ));

        let comment_commands = Arc::new(CommentCommandService::new(
            Arc::clone(&comment_write_repo),
            Arc::clone(&comment_read_repo),
            Arc::clone(&post_read_repo),
            Arc::clone(&clock),
        ));

        let comment_queries = Arc::new(CommentQueryService::new(Arc::clone(&comment_read_repo)));

        Self {
            post_commands,
            post_queries,
            engagement,
            comment_commands,
            comment_queries,
        }
    }
}
