//! Session slice: authentication status and the signed-in user.
//!
//! # State Machine
//!
//! ```text
//! Anonymous ──LoginRequested──▶ Authenticating ──LoginSucceeded──▶ Authenticated
//!     ▲                              │                                  │
//!     │                        LoginFailed                           Logout
//!     │                              ▼                                  │
//!     │                           Failed ──LoginRequested──▶ Authenticating
//!     └──────────────────────────────────────────────────────────────────┘
//! ```
//!
//! Only [`AuthState::Authenticated`] carries a [`User`], so "user present iff
//! authenticated" holds for every value of the type.

use super::reducer::Reducer;
use crate::domain::User;
use std::fmt;

/// Coarse status of the session, without payloads.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum AuthStatus {
    Anonymous,
    Authenticating,
    Authenticated,
    Failed,
}

impl fmt::Display for AuthStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let label = match self {
            Self::Anonymous => "anonymous",
            Self::Authenticating => "authenticating",
            Self::Authenticated => "authenticated",
            Self::Failed => "failed",
        };
        f.write_str(label)
    }
}

/// Session slice state.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub enum AuthState {
    /// Nobody is signed in.
    #[default]
    Anonymous,
    /// A sign-in request is in flight.
    Authenticating,
    /// A user is signed in.
    Authenticated(User),
    /// The last sign-in attempt was rejected.
    Failed {
        /// Reason reported by the authentication service.
        reason: String,
    },
}

impl AuthState {
    #[must_use]
    pub const fn status(&self) -> AuthStatus {
        match self {
            Self::Anonymous => AuthStatus::Anonymous,
            Self::Authenticating => AuthStatus::Authenticating,
            Self::Authenticated(_) => AuthStatus::Authenticated,
            Self::Failed { .. } => AuthStatus::Failed,
        }
    }

    /// The signed-in user, present exactly when the status is authenticated.
    #[must_use]
    pub const fn user(&self) -> Option<&User> {
        match self {
            Self::Authenticated(user) => Some(user),
            _ => None,
        }
    }

    #[must_use]
    pub const fn is_authenticated(&self) -> bool {
        matches!(self, Self::Authenticated(_))
    }
}

/// Actions understood by the session slice.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum AuthAction {
    /// A sign-in request was sent.
    LoginRequested,
    /// The authentication service accepted the credentials.
    LoginSucceeded(User),
    /// The authentication service rejected the credentials.
    LoginFailed {
        reason: String,
    },
    /// The user signed out.
    Logout,
    /// The session token was renewed.
    TokenRefreshed {
        access_token: String,
    },
}

/// Reducer for [`AuthState`].
#[derive(Debug, Clone, Copy, Default)]
pub struct AuthReducer;

impl Reducer for AuthReducer {
    type State = AuthState;
    type Action = AuthAction;

    fn reduce(&self, state: &AuthState, action: &AuthAction) -> Option<AuthState> {
        match (state, action) {
            (AuthState::Anonymous | AuthState::Failed { .. }, AuthAction::LoginRequested) => {
                Some(AuthState::Authenticating)
            }
            (_, AuthAction::LoginSucceeded(user)) => {
                if state.user() == Some(user) {
                    None
                } else {
                    Some(AuthState::Authenticated(user.clone()))
                }
            }
            // A late failure must not sign out an established session.
            (AuthState::Authenticated(_), AuthAction::LoginFailed { .. }) => None,
            (AuthState::Failed { reason: current }, AuthAction::LoginFailed { reason })
                if current == reason =>
            {
                None
            }
            (_, AuthAction::LoginFailed { reason }) => Some(AuthState::Failed {
                reason: reason.clone(),
            }),
            (AuthState::Anonymous, AuthAction::Logout) => None,
            (_, AuthAction::Logout) => Some(AuthState::Anonymous),
            (AuthState::Authenticated(user), AuthAction::TokenRefreshed { access_token }) => {
                if user.access_token.as_deref() == Some(access_token.as_str()) {
                    return None;
                }
                let mut user = user.clone();
                user.access_token = Some(access_token.clone());
                Some(AuthState::Authenticated(user))
            }
            (
                AuthState::Authenticating | AuthState::Authenticated(_),
                AuthAction::LoginRequested,
            )
            | (_, AuthAction::TokenRefreshed { .. }) => None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::Role;

    fn staff() -> User {
        User::new("u1", Role::Staff)
    }

    fn failed() -> AuthState {
        AuthState::Failed {
            reason: "Bad credentials".to_string(),
        }
    }

    #[test]
    fn login_success_from_anonymous_authenticates() {
        let next = AuthReducer.reduce(&AuthState::Anonymous, &AuthAction::LoginSucceeded(staff()));
        assert_eq!(next, Some(AuthState::Authenticated(staff())));
    }

    #[test]
    fn failed_login_can_be_retried() {
        let state = AuthReducer
            .reduce(
                &AuthState::Authenticating,
                &AuthAction::LoginFailed {
                    reason: "Bad credentials".to_string(),
                },
            )
            .unwrap();
        assert_eq!(state, failed());
        assert_eq!(
            AuthReducer.reduce(&state, &AuthAction::LoginRequested),
            Some(AuthState::Authenticating)
        );
    }

    #[test]
    fn logout_returns_to_anonymous() {
        let state = AuthState::Authenticated(staff());
        assert_eq!(
            AuthReducer.reduce(&state, &AuthAction::Logout),
            Some(AuthState::Anonymous)
        );
        assert_eq!(AuthReducer.reduce(&failed(), &AuthAction::Logout), Some(AuthState::Anonymous));
    }

    #[test]
    fn late_failure_keeps_session() {
        let state = AuthState::Authenticated(staff());
        let action = AuthAction::LoginFailed {
            reason: "timeout".to_string(),
        };
        assert_eq!(AuthReducer.reduce(&state, &action), None);
    }

    #[test]
    fn token_refresh_only_applies_to_sessions() {
        let action = AuthAction::TokenRefreshed {
            access_token: "fresh".to_string(),
        };
        assert_eq!(AuthReducer.reduce(&AuthState::Anonymous, &action), None);

        let next = AuthReducer
            .reduce(&AuthState::Authenticated(staff()), &action)
            .unwrap();
        assert_eq!(next.user().and_then(|u| u.access_token.as_deref()), Some("fresh"));
        assert_eq!(AuthReducer.reduce(&next, &action), None);
    }

    #[test]
    fn repeated_actions_are_no_ops() {
        let state = AuthState::Authenticated(staff());
        assert_eq!(AuthReducer.reduce(&state, &AuthAction::LoginSucceeded(staff())), None);
        assert_eq!(AuthReducer.reduce(&state, &AuthAction::LoginRequested), None);
        assert_eq!(
            AuthReducer.reduce(&AuthState::Authenticating, &AuthAction::LoginRequested),
            None
        );
    }
}
