use crate::domain::identity::UserId;

/// The caller as handed over by the host's identity provider. Authentication
/// itself happens outside this crate; by the time a service sees this value
/// the caller is logged in.
#[derive(Debug, Clone, Copy)]
pub struct AuthenticatedUser {
    pub id: UserId,
}

impl AuthenticatedUser {
    pub fn new(id: UserId) -> Self {
        Self { id }
    }
}
