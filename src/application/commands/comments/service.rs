// src/application/commands/comments/service.rs
use std::sync::Arc;

use crate::{
    application::ports::time::Clock,
    domain::{
        comment::{CommentReadRepository, CommentWriteRepository},
        post::PostReadRepository,
    },
};

pub struct CommentCommandService {
    pub(super) write_repo: Arc<dyn CommentWriteRepository>,
    pub(super) read_repo: Arc<dyn CommentReadRepository>,
    pub(super) post_read_repo: Arc<dyn PostReadRepository>,
    pub(super) clock: Arc<dyn Clock>,
}

impl CommentCommandService {
    pub fn new(
        write_repo: Arc<dyn CommentWriteRepository>,
        read_repo: Arc<dyn CommentReadRepository>,
        post_read_repo: Arc<dyn PostReadRepository>,
        clock: Arc<dyn Clock>,
    ) -> Self {
        Self {
            write_repo,
            read_repo,
            post_read_repo,
            clock,
        }
    }
}
