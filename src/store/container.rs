//! The store container: dispatch, snapshots and subscriptions.

use super::action::Action;
use super::auth::AuthReducer;
use super::message::{MessageReducer, DEFAULT_MESSAGE_CAPACITY};
use super::reducer::Reducer;
use super::snapshot::StoreSnapshot;
use crate::domain::{PortalError, Result};
use std::fmt;
use std::sync::Arc;

/// Callback invoked with the current snapshot after every dispatch.
pub type Listener = Box<dyn FnMut(&StoreSnapshot)>;

/// Store construction options.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct StoreConfig {
    /// Maximum number of notifications kept by the message slice.
    pub message_capacity: usize,
    /// Logs every dispatched action and the slices it changed.
    pub trace_dispatch: bool,
}

impl Default for StoreConfig {
    fn default() -> Self {
        Self {
            message_capacity: DEFAULT_MESSAGE_CAPACITY,
            trace_dispatch: false,
        }
    }
}

/// Handle returned by [`Store::subscribe`], used to unsubscribe.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Subscription(u64);

/// Single source of truth for session and message state.
///
/// The store is an ordinary value: the application owns it and hands
/// references to the views. `dispatch` takes `&mut self`, so each action is
/// fully reduced and published before the next one can be dispatched.
///
/// # Example
///
/// ```
/// use staff_portal::domain::{Role, User};
/// use staff_portal::store::{AuthAction, AuthStatus, Store, StoreConfig};
///
/// let mut store = Store::new(StoreConfig::default())?;
/// store.dispatch(AuthAction::LoginSucceeded(User::new("u1", Role::Staff)));
///
/// assert_eq!(store.snapshot().auth().status(), AuthStatus::Authenticated);
/// # Ok::<(), staff_portal::PortalError>(())
/// ```
pub struct Store {
    auth: AuthReducer,
    message: MessageReducer,
    initial: Arc<StoreSnapshot>,
    snapshot: Arc<StoreSnapshot>,
    listeners: Vec<(Subscription, Listener)>,
    next_subscription: u64,
    trace_dispatch: bool,
}

impl Store {
    /// Creates a store with empty slices.
    ///
    /// # Errors
    ///
    /// Returns [`PortalError::Config`] if the message capacity is zero.
    pub fn new(config: StoreConfig) -> Result<Self> {
        if config.message_capacity == 0 {
            return Err(PortalError::Config(
                "message_capacity must be at least 1".to_string(),
            ));
        }

        tracing::debug!(
            message_capacity = config.message_capacity,
            trace_dispatch = config.trace_dispatch,
            "store created"
        );

        let initial = Arc::new(StoreSnapshot::default());
        Ok(Self {
            auth: AuthReducer,
            message: MessageReducer::new(config.message_capacity),
            snapshot: Arc::clone(&initial),
            initial,
            listeners: Vec::new(),
            next_subscription: 0,
            trace_dispatch: config.trace_dispatch,
        })
    }

    /// Returns the current snapshot.
    #[must_use]
    pub fn snapshot(&self) -> Arc<StoreSnapshot> {
        Arc::clone(&self.snapshot)
    }

    /// Reduces `action` into a new snapshot and notifies listeners.
    ///
    /// Returns `true` if any slice changed. When nothing changed the current
    /// snapshot is kept as is, pointer included. Listeners run after the new
    /// snapshot is in place, in registration order, whether or not anything
    /// changed.
    pub fn dispatch(&mut self, action: impl Into<Action>) -> bool {
        let action = action.into();
        let _span = tracing::debug_span!("dispatch", action = action.kind()).entered();

        let current = Arc::clone(&self.snapshot);
        let (auth, message) = match &action {
            Action::Auth(a) => (replaced(&current.auth, self.auth.reduce(&current.auth, a)), None),
            Action::Message(m) => (
                None,
                replaced(&current.message, self.message.reduce(&current.message, m)),
            ),
        };

        let auth_changed = auth.is_some();
        let message_changed = message.is_some();
        let changed = auth_changed || message_changed;

        if changed {
            self.snapshot = Arc::new(StoreSnapshot {
                auth: auth.unwrap_or_else(|| Arc::clone(&current.auth)),
                message: message.unwrap_or_else(|| Arc::clone(&current.message)),
            });
        }

        if self.trace_dispatch {
            tracing::debug!(
                action = action.kind(),
                auth_changed,
                message_changed,
                auth_status = %self.snapshot.auth.status(),
                message_count = self.snapshot.message.len(),
                "action dispatched"
            );
        }

        self.notify();
        changed
    }

    /// Registers a listener called after every dispatch.
    pub fn subscribe(&mut self, listener: impl FnMut(&StoreSnapshot) + 'static) -> Subscription {
        let subscription = Subscription(self.next_subscription);
        self.next_subscription += 1;
        self.listeners.push((subscription, Box::new(listener)));
        tracing::debug!(listeners = self.listeners.len(), "listener subscribed");
        subscription
    }

    /// Removes a listener. Returns `false` if it was already removed.
    pub fn unsubscribe(&mut self, subscription: Subscription) -> bool {
        let before = self.listeners.len();
        self.listeners.retain(|(s, _)| *s != subscription);
        before != self.listeners.len()
    }

    /// Restores the initial snapshot, keeping listeners, and notifies them.
    pub fn reset(&mut self) {
        tracing::debug!("store reset");
        self.snapshot = Arc::clone(&self.initial);
        self.notify();
    }

    fn notify(&mut self) {
        let snapshot = Arc::clone(&self.snapshot);
        for (_, listener) in &mut self.listeners {
            listener(&*snapshot);
        }
    }
}

impl Default for Store {
    fn default() -> Self {
        let initial = Arc::new(StoreSnapshot::default());
        Self {
            auth: AuthReducer,
            message: MessageReducer::default(),
            snapshot: Arc::clone(&initial),
            initial,
            listeners: Vec::new(),
            next_subscription: 0,
            trace_dispatch: false,
        }
    }
}

impl fmt::Debug for Store {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Store")
            .field("snapshot", &self.snapshot)
            .field("message_capacity", &self.message.capacity())
            .field("listeners", &self.listeners.len())
            .field("trace_dispatch", &self.trace_dispatch)
            .finish_non_exhaustive()
    }
}

/// Wraps a reducer result, discarding results equal to the current slice.
fn replaced<S: PartialEq>(current: &Arc<S>, next: Option<S>) -> Option<Arc<S>> {
    next.filter(|n| n != current.as_ref()).map(Arc::new)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::{Role, User};
    use crate::store::{AuthAction, AuthState, AuthStatus, MessageAction};
    use std::cell::RefCell;
    use std::rc::Rc;

    #[test]
    fn zero_capacity_is_a_configuration_error() {
        let err = Store::new(StoreConfig {
            message_capacity: 0,
            trace_dispatch: false,
        })
        .unwrap_err();
        assert!(matches!(err, PortalError::Config(_)));
    }

    #[test]
    fn untouched_slice_keeps_identity() {
        let mut store = Store::default();
        let before = store.snapshot();

        assert!(store.dispatch(MessageAction::info("hello")));
        let after = store.snapshot();

        assert!(!Arc::ptr_eq(&before, &after));
        assert!(Arc::ptr_eq(&before.auth, &after.auth));
        assert!(before.message.is_empty());
        assert_eq!(after.message.len(), 1);
    }

    #[test]
    fn traced_dispatch_reduces_like_untraced() {
        let subscriber = tracing_subscriber::fmt()
            .with_max_level(tracing::Level::DEBUG)
            .with_test_writer()
            .finish();

        tracing::subscriber::with_default(subscriber, || {
            let mut store = Store::new(StoreConfig {
                message_capacity: 2,
                trace_dispatch: true,
            })
            .unwrap();
            let before = store.snapshot();

            assert!(store.dispatch(AuthAction::LoginSucceeded(User::new("u1", Role::Staff))));
            assert!(!store.dispatch(AuthAction::LoginRequested));
            for text in ["a", "b", "c"] {
                assert!(store.dispatch(MessageAction::info(text)));
            }

            let after = store.snapshot();
            assert!(!Arc::ptr_eq(&before, &after));
            assert_eq!(after.auth().status(), AuthStatus::Authenticated);
            assert_eq!(after.message.len(), 2);
            assert!(format!("{store:?}").contains("trace_dispatch: true"));
        });
    }

    #[test]
    fn no_op_dispatch_keeps_snapshot() {
        let mut store = Store::default();
        let before = store.snapshot();

        assert!(!store.dispatch(AuthAction::Logout));
        assert!(!store.dispatch(MessageAction::Clear));
        assert!(Arc::ptr_eq(&before, &store.snapshot()));
    }

    #[test]
    fn listeners_run_in_registration_order() {
        let mut store = Store::default();
        let calls = Rc::new(RefCell::new(Vec::new()));

        let first = Rc::clone(&calls);
        store.subscribe(move |_| first.borrow_mut().push("L1"));
        let second = Rc::clone(&calls);
        store.subscribe(move |_| second.borrow_mut().push("L2"));

        store.dispatch(AuthAction::LoginRequested);
        assert_eq!(*calls.borrow(), vec!["L1", "L2"]);
    }

    #[test]
    fn unsubscribed_listener_is_not_called() {
        let mut store = Store::default();
        let count = Rc::new(RefCell::new(0));

        let counter = Rc::clone(&count);
        let subscription = store.subscribe(move |_| *counter.borrow_mut() += 1);
        store.dispatch(AuthAction::LoginRequested);

        assert!(store.unsubscribe(subscription));
        assert!(!store.unsubscribe(subscription));
        store.dispatch(AuthAction::Logout);
        assert_eq!(*count.borrow(), 1);
    }

    #[test]
    fn listener_sees_published_snapshot() {
        let mut store = Store::default();
        let seen = Rc::new(RefCell::new(Vec::new()));

        let sink = Rc::clone(&seen);
        store.subscribe(move |snapshot| sink.borrow_mut().push(snapshot.clone()));

        store.dispatch(AuthAction::LoginSucceeded(User::new("u1", Role::Staff)));
        let last = seen.borrow().last().cloned().unwrap();
        assert_eq!(last, *store.snapshot());
        assert_eq!(last.auth().status(), AuthStatus::Authenticated);
    }

    #[test]
    fn reset_restores_initial_state() {
        let mut store = Store::default();
        store.dispatch(AuthAction::LoginSucceeded(User::new("u1", Role::Staff)));
        store.dispatch(MessageAction::success("Welcome"));

        store.reset();
        let snapshot = store.snapshot();
        assert_eq!(*snapshot.auth, AuthState::Anonymous);
        assert!(snapshot.message.is_empty());
    }
}
