pub mod auth;
pub mod comments;
pub mod posts;
pub mod serde_time;

pub use auth::AuthenticatedUser;
pub use comments::CommentDto;
pub use posts::{PostDetailDto, PostDto};
