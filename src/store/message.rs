//! Message slice: a bounded log of notifications.
//!
//! Messages are kept oldest first. The log never holds more than the reducer's
//! capacity; adding past it evicts the oldest entry.

use super::reducer::Reducer;
use crate::domain::{Message, MessageId, MessageKind};
use std::collections::VecDeque;

/// Default number of notifications kept in the log.
pub const DEFAULT_MESSAGE_CAPACITY: usize = 5;

/// Message slice state.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct MessageState {
    messages: VecDeque<Message>,
    next_id: u64,
}

impl MessageState {
    /// Iterates over messages, oldest first.
    pub fn iter(&self) -> impl Iterator<Item = &Message> {
        self.messages.iter()
    }

    /// The most recently added message still in the log.
    #[must_use]
    pub fn latest(&self) -> Option<&Message> {
        self.messages.back()
    }

    #[must_use]
    pub fn get(&self, id: MessageId) -> Option<&Message> {
        self.messages.iter().find(|m| m.id == id)
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.messages.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.messages.is_empty()
    }
}

/// Actions understood by the message slice.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum MessageAction {
    Add { kind: MessageKind, text: String },
    Dismiss(MessageId),
    Clear,
}

impl MessageAction {
    pub fn info(text: impl Into<String>) -> Self {
        Self::Add {
            kind: MessageKind::Info,
            text: text.into(),
        }
    }

    pub fn success(text: impl Into<String>) -> Self {
        Self::Add {
            kind: MessageKind::Success,
            text: text.into(),
        }
    }

    pub fn error(text: impl Into<String>) -> Self {
        Self::Add {
            kind: MessageKind::Error,
            text: text.into(),
        }
    }
}

/// Reducer for [`MessageState`] with a fixed capacity.
#[derive(Debug, Clone, Copy)]
pub struct MessageReducer {
    capacity: usize,
}

impl MessageReducer {
    /// Creates a reducer keeping at most `capacity` messages.
    ///
    /// Capacity is validated by [`Store::new`](crate::store::Store::new); a zero
    /// capacity here would drop every message on arrival.
    #[must_use]
    pub const fn new(capacity: usize) -> Self {
        Self { capacity }
    }

    #[must_use]
    pub const fn capacity(&self) -> usize {
        self.capacity
    }
}

impl Default for MessageReducer {
    fn default() -> Self {
        Self::new(DEFAULT_MESSAGE_CAPACITY)
    }
}

impl Reducer for MessageReducer {
    type State = MessageState;
    type Action = MessageAction;

    fn reduce(&self, state: &MessageState, action: &MessageAction) -> Option<MessageState> {
        match action {
            MessageAction::Add { kind, text } => {
                let mut next = state.clone();
                next.messages.push_back(Message {
                    id: MessageId(next.next_id),
                    kind: *kind,
                    text: text.clone(),
                });
                next.next_id += 1;
                while next.messages.len() > self.capacity {
                    next.messages.pop_front();
                }
                Some(next)
            }
            MessageAction::Dismiss(id) => {
                let position = state.messages.iter().position(|m| m.id == *id)?;
                let mut next = state.clone();
                next.messages.remove(position);
                Some(next)
            }
            MessageAction::Clear => {
                if state.messages.is_empty() {
                    return None;
                }
                Some(MessageState {
                    messages: VecDeque::new(),
                    next_id: state.next_id,
                })
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn texts(state: &MessageState) -> Vec<&str> {
        state.iter().map(|m| m.text.as_str()).collect()
    }

    #[test]
    fn add_appends_most_recent_last() {
        let reducer = MessageReducer::default();
        let state = reducer
            .reduce(&MessageState::default(), &MessageAction::info("first"))
            .unwrap();
        let state = reducer.reduce(&state, &MessageAction::error("second")).unwrap();

        assert_eq!(texts(&state), vec!["first", "second"]);
        assert_eq!(state.latest().map(|m| m.kind), Some(MessageKind::Error));
    }

    #[test]
    fn capacity_evicts_oldest() {
        let reducer = MessageReducer::new(2);
        let mut state = MessageState::default();
        for text in ["a", "b", "c"] {
            state = reducer.reduce(&state, &MessageAction::info(text)).unwrap();
        }
        assert_eq!(texts(&state), vec!["b", "c"]);
        assert_eq!(state.latest().map(|m| m.id), Some(MessageId(2)));
    }

    #[test]
    fn dismiss_removes_only_the_target() {
        let reducer = MessageReducer::default();
        let state = reducer
            .reduce(&MessageState::default(), &MessageAction::info("a"))
            .unwrap();
        let state = reducer.reduce(&state, &MessageAction::success("b")).unwrap();

        let state = reducer
            .reduce(&state, &MessageAction::Dismiss(MessageId(0)))
            .unwrap();
        assert_eq!(texts(&state), vec!["b"]);
        assert_eq!(reducer.reduce(&state, &MessageAction::Dismiss(MessageId(0))), None);
    }

    #[test]
    fn clear_keeps_ids_monotonic() {
        let reducer = MessageReducer::default();
        let state = reducer
            .reduce(&MessageState::default(), &MessageAction::info("a"))
            .unwrap();
        let state = reducer.reduce(&state, &MessageAction::Clear).unwrap();
        assert!(state.is_empty());
        assert_eq!(reducer.reduce(&state, &MessageAction::Clear), None);

        let state = reducer.reduce(&state, &MessageAction::info("b")).unwrap();
        assert_eq!(state.latest().map(|m| m.id), Some(MessageId(1)));
    }
}
