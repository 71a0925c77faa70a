//! Reducer abstraction shared by the store slices.
//!
//! A reducer is a pure function `(state, action) -> state'`. Returning `None`
//! means the action leaves the slice untouched, which lets the store keep the
//! previous slice allocation and skip building a new snapshot.

/// Pure reduction over one slice of the store.
///
/// Implementations must be total: every state accepts every action of the
/// slice's vocabulary, answering `None` when nothing changes.
///
/// # Examples
///
/// ```
/// use staff_portal::store::{AuthAction, AuthReducer, AuthState, Reducer};
///
/// let next = AuthReducer.reduce(&AuthState::Anonymous, &AuthAction::LoginRequested);
/// assert_eq!(next, Some(AuthState::Authenticating));
///
/// // Logging out while anonymous changes nothing.
/// assert_eq!(AuthReducer.reduce(&AuthState::Anonymous, &AuthAction::Logout), None);
/// ```
pub trait Reducer {
    /// The slice state this reducer owns.
    type State: Clone + PartialEq;

    /// The closed set of actions this slice responds to.
    type Action;

    /// Computes the next state, or `None` when `action` is a no-op for `state`.
    fn reduce(&self, state: &Self::State, action: &Self::Action) -> Option<Self::State>;
}
