//! The calling user's identity.
//!
//! Stores never look up a session themselves; the caller resolves the
//! identity once and passes it into every owner-scoped operation.

use crate::error::CoreError;
use crate::types::UserId;

/// A resolved, authenticated caller.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Identity {
    pub user_id: UserId,
}

impl Identity {
    pub fn new(user_id: UserId) -> Self {
        Self { user_id }
    }

    /// Turn the session's user id (if any) into an identity.
    ///
    /// Returns [`CoreError::Unauthorized`] when there is no session.
    pub fn resolve(session_user: Option<UserId>) -> Result<Self, CoreError> {
        session_user
            .map(Self::new)
            .ok_or_else(|| CoreError::Unauthorized("no active session".to_string()))
    }
}
