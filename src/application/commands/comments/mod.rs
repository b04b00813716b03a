// src/application/commands/comments/mod.rs
mod add;
mod approve;
mod remove;
mod service;

pub use add::AddCommentCommand;
pub use approve::ApproveCommentCommand;
pub use remove::RemoveCommentCommand;
pub use service::CommentCommandService;
