// src/application/queries/comments/service.rs
use std::sync::Arc;

use crate::domain::comment::CommentReadRepository;

pub struct CommentQueryService {
    pub(super) read_repo: Arc<dyn CommentReadRepository>,
}

impl CommentQueryService {
    pub fn new(read_repo: Arc<dyn CommentReadRepository>) -> Self {
        Self { read_repo }
    }
}
