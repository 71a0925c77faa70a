//! Notification lines under the navbar.

use crate::store::MessageState;
use crate::ui::viewmodel::MessageLine;

/// Keeps the slice order, oldest first.
#[must_use]
pub fn message_lines(messages: &MessageState) -> Vec<MessageLine> {
    messages
        .iter()
        .map(|m| MessageLine {
            kind: m.kind,
            text: m.text.clone(),
        })
        .collect()
}
