// src/application/commands/engagement/service.rs
use std::sync::Arc;

use crate::domain::post::{LikeRepository, PostReadRepository};

pub struct EngagementService {
    pub(super) like_repo: Arc<dyn LikeRepository>,
    pub(super) post_read_repo: Arc<dyn PostReadRepository>,
}

impl EngagementService {
    pub fn new(
        like_repo: Arc<dyn LikeRepository>,
        post_read_repo: Arc<dyn PostReadRepository>,
    ) -> Self {
        Self {
            like_repo,
            post_read_repo,
        }
    }
}
