pub mod comments;
pub mod engagement;
pub mod posts;

pub(crate) mod guard;
