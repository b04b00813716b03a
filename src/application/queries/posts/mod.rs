mod detail;
mod get_by_id;
mod list_drafts;
mod list_published;
mod service;

pub use detail::GetPostDetailQuery;
pub use get_by_id::GetPostByIdQuery;
pub use service::PostQueryService;
