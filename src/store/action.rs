//! The closed action vocabulary dispatched into the store.
//!
//! In-process code builds [`Action`] values directly. External collaborators
//! (the authentication service, notification senders) deliver actions as JSON
//! with a `type` tag:
//!
//! ```json
//! { "type": "auth/loginSucceeded", "user": { "id": "u1", "role": "staff" } }
//! { "type": "message/add", "kind": "error", "text": "Bad credentials" }
//! ```
//!
//! Unknown tags are rejected by [`Action::from_json`] instead of being dispatched
//! as silent no-ops.

use super::auth::AuthAction;
use super::message::MessageAction;
use crate::domain::{MessageId, MessageKind, PortalError, Result, User};
use serde::{Deserialize, Serialize};

/// An action routed to exactly one slice.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Action {
    Auth(AuthAction),
    Message(MessageAction),
}

impl From<AuthAction> for Action {
    fn from(action: AuthAction) -> Self {
        Self::Auth(action)
    }
}

impl From<MessageAction> for Action {
    fn from(action: MessageAction) -> Self {
        Self::Message(action)
    }
}

impl Action {
    /// Decodes a tagged JSON action.
    ///
    /// # Errors
    ///
    /// Returns [`PortalError::Action`] when the tag is unknown or the payload
    /// does not match the tagged variant.
    ///
    /// # Example
    ///
    /// ```
    /// use staff_portal::store::{Action, AuthAction};
    ///
    /// let action = Action::from_json(r#"{"type": "auth/logout"}"#)?;
    /// assert_eq!(action, Action::Auth(AuthAction::Logout));
    ///
    /// assert!(Action::from_json(r#"{"type": "auth/lgout"}"#).is_err());
    /// # Ok::<(), staff_portal::PortalError>(())
    /// ```
    pub fn from_json(payload: &str) -> Result<Self> {
        serde_json::from_str::<WireAction>(payload)
            .map(Self::from)
            .map_err(|e| PortalError::Action(e.to_string()))
    }

    /// Encodes the action in its tagged JSON form.
    ///
    /// # Errors
    ///
    /// Returns [`PortalError::Json`] if serialization fails.
    pub fn to_json(&self) -> Result<String> {
        Ok(serde_json::to_string(&WireAction::from(self.clone()))?)
    }

    /// The wire tag of the action, used in logs.
    #[must_use]
    pub const fn kind(&self) -> &'static str {
        match self {
            Self::Auth(AuthAction::LoginRequested) => "auth/loginRequested",
            Self::Auth(AuthAction::LoginSucceeded(_)) => "auth/loginSucceeded",
            Self::Auth(AuthAction::LoginFailed { .. }) => "auth/loginFailed",
            Self::Auth(AuthAction::Logout) => "auth/logout",
            Self::Auth(AuthAction::TokenRefreshed { .. }) => "auth/tokenRefreshed",
            Self::Message(MessageAction::Add { .. }) => "message/add",
            Self::Message(MessageAction::Dismiss(_)) => "message/dismiss",
            Self::Message(MessageAction::Clear) => "message/clear",
        }
    }
}

#[derive(Debug, Serialize, Deserialize)]
#[serde(tag = "type")]
enum WireAction {
    #[serde(rename = "auth/loginRequested")]
    LoginRequested,
    #[serde(rename = "auth/loginSucceeded")]
    LoginSucceeded { user: User },
    #[serde(rename = "auth/loginFailed")]
    LoginFailed { reason: String },
    #[serde(rename = "auth/logout")]
    Logout,
    #[serde(rename = "auth/tokenRefreshed")]
    TokenRefreshed {
        #[serde(rename = "accessToken")]
        access_token: String,
    },
    #[serde(rename = "message/add")]
    AddMessage { kind: MessageKind, text: String },
    #[serde(rename = "message/dismiss")]
    DismissMessage { id: u64 },
    #[serde(rename = "message/clear")]
    ClearMessages,
}

impl From<WireAction> for Action {
    fn from(wire: WireAction) -> Self {
        match wire {
            WireAction::LoginRequested => AuthAction::LoginRequested.into(),
            WireAction::LoginSucceeded { user } => AuthAction::LoginSucceeded(user).into(),
            WireAction::LoginFailed { reason } => AuthAction::LoginFailed { reason }.into(),
            WireAction::Logout => AuthAction::Logout.into(),
            WireAction::TokenRefreshed { access_token } => {
                AuthAction::TokenRefreshed { access_token }.into()
            }
            WireAction::AddMessage { kind, text } => MessageAction::Add { kind, text }.into(),
            WireAction::DismissMessage { id } => MessageAction::Dismiss(MessageId(id)).into(),
            WireAction::ClearMessages => MessageAction::Clear.into(),
        }
    }
}

impl From<Action> for WireAction {
    fn from(action: Action) -> Self {
        match action {
            Action::Auth(AuthAction::LoginRequested) => Self::LoginRequested,
            Action::Auth(AuthAction::LoginSucceeded(user)) => Self::LoginSucceeded { user },
            Action::Auth(AuthAction::LoginFailed { reason }) => Self::LoginFailed { reason },
            Action::Auth(AuthAction::Logout) => Self::Logout,
            Action::Auth(AuthAction::TokenRefreshed { access_token }) => {
                Self::TokenRefreshed { access_token }
            }
            Action::Message(MessageAction::Add { kind, text }) => Self::AddMessage { kind, text },
            Action::Message(MessageAction::Dismiss(MessageId(id))) => Self::DismissMessage { id },
            Action::Message(MessageAction::Clear) => Self::ClearMessages,
        }
    }
}
