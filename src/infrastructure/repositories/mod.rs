pub mod error;
pub mod sqlite_comment;
pub mod sqlite_like;
pub mod sqlite_post;

pub use sqlite_comment::{SqliteCommentReadRepository, SqliteCommentWriteRepository};
pub use sqlite_like::SqliteLikeRepository;
pub use sqlite_post::{SqlitePostReadRepository, SqlitePostWriteRepository};
