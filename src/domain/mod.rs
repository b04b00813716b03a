pub mod comment;
pub mod errors;
pub mod identity;
pub mod post;
