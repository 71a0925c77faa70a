//! Global store composing the session and message slices.
//!
//! # Architecture
//!
//! ```text
//! Action ──▶ Store::dispatch ──▶ slice Reducer ──▶ new StoreSnapshot ──▶ listeners
//!                                  (pure)            (Arc-shared slices)
//! ```
//!
//! Each [`Action`] belongs to exactly one slice. The store routes it, builds
//! the next snapshot from the reducer result and the untouched slice, and
//! swaps it in as a whole.
//!
//! # Modules
//!
//! - [`action`]: Closed action vocabulary and its JSON wire form
//! - [`auth`]: Session slice (status + signed-in user)
//! - [`message`]: Bounded notification log
//! - [`reducer`]: The `Reducer` trait implemented by each slice
//! - [`snapshot`]: Immutable composite state
//! - `container`: The [`Store`] itself
//!
//! # Example
//!
//! ```
//! use staff_portal::store::{MessageAction, Store};
//!
//! let mut store = Store::default();
//! let before = store.snapshot();
//! store.dispatch(MessageAction::error("Bad credentials"));
//!
//! // The previous snapshot is untouched.
//! assert!(before.messages().is_empty());
//! assert_eq!(store.snapshot().messages().len(), 1);
//! ```

pub mod action;
pub mod auth;
mod container;
pub mod message;
pub mod reducer;
pub mod snapshot;

pub use action::Action;
pub use auth::{AuthAction, AuthReducer, AuthState, AuthStatus};
pub use container::{Listener, Store, StoreConfig, Subscription};
pub use message::{MessageAction, MessageReducer, MessageState, DEFAULT_MESSAGE_CAPACITY};
pub use reducer::Reducer;
pub use snapshot::StoreSnapshot;
