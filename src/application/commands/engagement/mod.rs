// src/application/commands/engagement/mod.rs
mod service;
mod toggle_like;

pub use service::EngagementService;
pub use toggle_like::ToggleLikeCommand;
