// src/application/commands/guard.rs
use crate::application::{
    dto::AuthenticatedUser,
    error::{ApplicationError, ApplicationResult},
};

/// The single gate in front of every mutation: the caller must be logged in.
/// There are deliberately no ownership checks on top of this; any
/// authenticated caller may mutate any post or comment.
pub(crate) fn require_login(
    actor: Option<&AuthenticatedUser>,
) -> ApplicationResult<&AuthenticatedUser> {
    actor.ok_or_else(|| ApplicationError::unauthenticated("login required"))
}
