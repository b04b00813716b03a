pub mod entity;
pub mod repository;
pub mod value_objects;

pub use entity::{NewPost, Post, PostUpdate};
pub use repository::{LikeRepository, PostReadRepository, PostWriteRepository};
pub use value_objects::{PostBody, PostId, PostTitle};
