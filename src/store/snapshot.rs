//! Immutable composite state.

use super::auth::AuthState;
use super::message::MessageState;
use std::sync::Arc;

/// The full store state at one point in time.
///
/// Slices are reference counted. A dispatch that only touches one slice builds
/// a new snapshot sharing the other slice's allocation, so unchanged slices
/// keep pointer identity across snapshots.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct StoreSnapshot {
    pub auth: Arc<AuthState>,
    pub message: Arc<MessageState>,
}

impl StoreSnapshot {
    /// Session slice selector.
    #[must_use]
    pub fn auth(&self) -> &AuthState {
        &self.auth
    }

    /// Message slice selector.
    #[must_use]
    pub fn messages(&self) -> &MessageState {
        &self.message
    }
}
