mod list_approved;
mod service;

pub use list_approved::ListApprovedCommentsQuery;
pub use service::CommentQueryService;
