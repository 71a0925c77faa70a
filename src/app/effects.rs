//! Side effects requested by the event handler.
//!
//! The handler never talks to the host. It returns [`Effect`]s and the plugin
//! runtime executes them after the state transition has completed.

/// A host-side command produced by [`handle_event`](super::handle_event).
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Effect {
    /// Hides the plugin pane.
    CloseFocus,

    /// Asks the configured student source for fresh records.
    ///
    /// The result re-enters as `Event::StudentsLoaded` or
    /// `Event::StudentsFailed`.
    FetchStudents,
}
