//! Domain layer for the staff portal.
//!
//! Core types shared by the store, the application layer and the views. None of
//! them depend on Zellij APIs.
//!
//! # Organization
//!
//! - [`error`]: Error types and result aliases
//! - [`user`]: Signed-in identity and roles
//! - [`student`]: Student report records consumed by the reports view
//! - [`message`]: Notification messages held by the message slice
//!
//! # Examples
//!
//! ```
//! use staff_portal::domain::{Result, Role, User};
//!
//! fn sign_in() -> Result<User> {
//!     Ok(User::new("u1", Role::Staff))
//! }
//! ```

pub mod error;
pub mod message;
pub mod student;
pub mod user;

pub use error::{PortalError, Result};
pub use message::{Message, MessageId, MessageKind};
pub use student::StudentRecord;
pub use user::{Role, User};
