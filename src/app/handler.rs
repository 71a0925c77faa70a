//! Event handling and state transition logic.
//!
//! The plugin runtime translates host input (key presses, pipe messages,
//! command results) into [`Event`]s. [`handle_event`] applies each one to the
//! [`AppState`]: store actions are dispatched, page and table state are
//! updated, and host-side work is requested through [`Effect`]s.
//!
//! # Example
//!
//! ```
//! use staff_portal::app::{handle_event, AppState, Effect, Event};
//! use staff_portal::store::Store;
//! use staff_portal::ui::Theme;
//!
//! let mut state = AppState::new(Store::default(), Theme::default(), 10);
//! let (render, effects) = handle_event(&mut state, &Event::ShowReports)?;
//! assert!(render);
//! assert_eq!(effects, vec![Effect::FetchStudents]);
//! # Ok::<(), staff_portal::PortalError>(())
//! ```

use super::effects::Effect;
use super::modes::{InputMode, Page};
use super::state::AppState;
use crate::domain::{Result, StudentRecord};
use crate::store::{Action, AuthAction, MessageAction};

/// Inputs to the application, already decoded from host events.
#[derive(Debug, Clone, PartialEq)]
pub enum Event {
    /// Dispatches a store action, usually decoded from a pipe message.
    Dispatch(Action),

    ShowHome,
    /// Opens the reports page, fetching students until a load has completed.
    ShowReports,
    /// Cycles to the next page.
    NextTab,

    /// Reloads students regardless of what is already loaded.
    StudentsRequested,
    StudentsLoaded(Vec<StudentRecord>),
    StudentsFailed {
        error: String,
    },

    NextPage,
    PrevPage,
    /// Sorts the reports table by a zero-based column index.
    SortBy(usize),

    /// Starts editing the reports filter.
    SearchMode,
    Char(char),
    Backspace,
    /// Leaves search mode keeping the query.
    ConfirmSearch,
    /// Leaves search mode and clears the query.
    ExitSearch,

    /// Clears every notification.
    DismissMessages,
    /// Signs the current user out.
    Logout,
    /// Hides the plugin pane.
    CloseFocus,
}

/// Applies `event` to `state`.
///
/// Returns whether the frame must be redrawn and the effects the runtime has
/// to execute, in order.
///
/// # Errors
///
/// Reserved for transitions that cannot be applied. The current event set
/// always succeeds.
pub fn handle_event(state: &mut AppState, event: &Event) -> Result<(bool, Vec<Effect>)> {
    let _span = tracing::debug_span!("handle_event", event_type = ?event).entered();

    match event {
        Event::Dispatch(action) => Ok((dispatch(state, action), vec![])),
        Event::ShowHome => Ok((show_page(state, Page::Home), vec![])),
        Event::ShowReports => Ok(show_reports(state)),
        Event::NextTab => {
            let next = state.page.next();
            match next {
                Page::Home => Ok((show_page(state, next), vec![])),
                Page::Reports => Ok(show_reports(state)),
            }
        }
        Event::StudentsRequested => {
            if !state.can_view_reports() {
                return Ok((false, vec![]));
            }
            state.is_loading = true;
            tracing::info!("student reload requested");
            Ok((true, vec![Effect::FetchStudents]))
        }
        Event::StudentsLoaded(students) => {
            tracing::info!(count = students.len(), "students loaded");
            state.students = Some(students.clone());
            state.is_loading = false;
            let matching = state.matching_students();
            state.table.clamp_page(matching);
            Ok((true, vec![]))
        }
        Event::StudentsFailed { error } => {
            tracing::warn!(error = %error, "failed to load students");
            state.is_loading = false;
            state
                .store
                .dispatch(MessageAction::error(format!("Failed to load students: {error}")));
            Ok((true, vec![]))
        }
        Event::NextPage => {
            if state.page != Page::Reports {
                return Ok((false, vec![]));
            }
            let matching = state.matching_students();
            Ok((state.table.next_page(matching), vec![]))
        }
        Event::PrevPage => {
            if state.page != Page::Reports {
                return Ok((false, vec![]));
            }
            Ok((state.table.prev_page(), vec![]))
        }
        Event::SortBy(column) => {
            if state.page != Page::Reports || *column >= crate::ui::views::student_columns().len() {
                return Ok((false, vec![]));
            }
            state.table.toggle_sort(*column);
            tracing::debug!(column, sort = ?state.table.sort, "sort changed");
            Ok((true, vec![]))
        }
        Event::SearchMode => {
            if state.page != Page::Reports {
                return Ok((false, vec![]));
            }
            state.input_mode = InputMode::Search;
            Ok((true, vec![]))
        }
        Event::Char(c) => {
            if state.input_mode != InputMode::Search {
                return Ok((false, vec![]));
            }
            state.table.query.push(*c);
            state.table.page = 0;
            Ok((true, vec![]))
        }
        Event::Backspace => {
            if state.input_mode != InputMode::Search || state.table.query.pop().is_none() {
                return Ok((false, vec![]));
            }
            state.table.page = 0;
            Ok((true, vec![]))
        }
        Event::ConfirmSearch => {
            if state.input_mode != InputMode::Search {
                return Ok((false, vec![]));
            }
            state.input_mode = InputMode::Normal;
            Ok((true, vec![]))
        }
        Event::ExitSearch => {
            let had_query = !state.table.query.is_empty();
            if state.input_mode != InputMode::Search && !had_query {
                return Ok((false, vec![]));
            }
            state.input_mode = InputMode::Normal;
            state.table.query.clear();
            state.table.page = 0;
            Ok((true, vec![]))
        }
        Event::DismissMessages => Ok((state.store.dispatch(MessageAction::Clear), vec![])),
        Event::Logout => Ok((dispatch(state, &AuthAction::Logout.into()), vec![])),
        Event::CloseFocus => Ok((false, vec![Effect::CloseFocus])),
    }
}

/// Dispatches `action` and applies the application-level follow-ups.
///
/// A rejected sign-in also surfaces as an error notification, and signing
/// out returns to the home page.
fn dispatch(state: &mut AppState, action: &Action) -> bool {
    let mut changed = state.store.dispatch(action.clone());

    match action {
        Action::Auth(AuthAction::LoginFailed { reason }) if changed => {
            state.store.dispatch(MessageAction::error(reason.clone()));
        }
        Action::Auth(AuthAction::LoginSucceeded(user)) if changed => {
            tracing::info!(user_id = %user.id, role = %user.role, "signed in");
        }
        Action::Auth(AuthAction::Logout) if changed => {
            tracing::info!("signed out");
            changed |= show_page(state, Page::Home);
        }
        _ => {}
    }

    changed
}

fn show_page(state: &mut AppState, page: Page) -> bool {
    if state.page == page && state.input_mode == InputMode::Normal {
        return false;
    }
    state.page = page;
    state.input_mode = InputMode::Normal;
    true
}

fn show_reports(state: &mut AppState) -> (bool, Vec<Effect>) {
    let mut render = show_page(state, Page::Reports);
    if state.needs_students() {
        state.is_loading = true;
        render = true;
        return (render, vec![Effect::FetchStudents]);
    }
    (render, vec![])
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::{MessageKind, Role, User};
    use crate::store::{AuthState, Store};
    use crate::ui::Theme;

    fn state() -> AppState {
        AppState::new(Store::default(), Theme::default(), 2)
    }

    fn students(n: usize) -> Vec<StudentRecord> {
        (0..n)
            .map(|i| StudentRecord::new(format!("S{i}"), 50.0 + i as f64, "A"))
            .collect()
    }

    #[test]
    fn first_visit_to_reports_fetches() {
        let mut state = state();
        let (render, effects) = handle_event(&mut state, &Event::ShowReports).unwrap();
        assert!(render);
        assert_eq!(effects, vec![Effect::FetchStudents]);
        assert!(state.is_loading);

        let (_, effects) = handle_event(&mut state, &Event::ShowReports).unwrap();
        assert!(effects.is_empty());
    }

    #[test]
    fn loaded_students_clear_loading() {
        let mut state = state();
        handle_event(&mut state, &Event::ShowReports).unwrap();
        handle_event(&mut state, &Event::StudentsLoaded(students(3))).unwrap();

        assert!(!state.is_loading);
        assert_eq!(state.student_rows().len(), 3);

        handle_event(&mut state, &Event::ShowHome).unwrap();
        let (_, effects) = handle_event(&mut state, &Event::ShowReports).unwrap();
        assert!(effects.is_empty());
    }

    #[test]
    fn empty_load_is_not_fetched_again() {
        let mut state = state();
        handle_event(&mut state, &Event::ShowReports).unwrap();
        handle_event(&mut state, &Event::StudentsLoaded(Vec::new())).unwrap();

        handle_event(&mut state, &Event::ShowHome).unwrap();
        let (_, effects) = handle_event(&mut state, &Event::ShowReports).unwrap();
        assert!(effects.is_empty());
        assert!(!state.is_loading);

        let vm = state.compute_viewmodel(80);
        let crate::ui::viewmodel::PageBody::Reports(reports) = vm.body else {
            panic!("expected reports body");
        };
        assert_eq!(reports.table.status, crate::ui::viewmodel::TableStatus::Empty);
    }

    #[test]
    fn non_staff_accounts_do_not_fetch() {
        let mut state = state();
        let login = AuthAction::LoginSucceeded(User::new("s9", Role::Student));
        handle_event(&mut state, &Event::Dispatch(login.into())).unwrap();

        let (render, effects) = handle_event(&mut state, &Event::ShowReports).unwrap();
        assert!(render);
        assert!(effects.is_empty());
        assert!(!state.is_loading);

        let (_, effects) = handle_event(&mut state, &Event::StudentsRequested).unwrap();
        assert!(effects.is_empty());
    }

    #[test]
    fn fetch_failure_adds_error_message() {
        let mut state = state();
        handle_event(&mut state, &Event::ShowReports).unwrap();
        handle_event(
            &mut state,
            &Event::StudentsFailed {
                error: "timeout".to_string(),
            },
        )
        .unwrap();

        assert!(!state.is_loading);
        let snapshot = state.store.snapshot();
        let latest = snapshot.messages().latest().unwrap();
        assert_eq!(latest.kind, MessageKind::Error);
        assert_eq!(latest.text, "Failed to load students: timeout");
    }

    #[test]
    fn reload_always_fetches() {
        let mut state = state();
        state.students = Some(students(1));
        let (_, effects) = handle_event(&mut state, &Event::StudentsRequested).unwrap();
        assert_eq!(effects, vec![Effect::FetchStudents]);
        assert!(state.is_loading);
    }

    #[test]
    fn login_failure_adds_error_message() {
        let mut state = state();
        let action = AuthAction::LoginFailed {
            reason: "Bad credentials".to_string(),
        };
        let (render, _) = handle_event(&mut state, &Event::Dispatch(action.into())).unwrap();

        assert!(render);
        let snapshot = state.store.snapshot();
        assert_eq!(snapshot.messages().len(), 1);
        assert!(matches!(*snapshot.auth, AuthState::Failed { .. }));
    }

    #[test]
    fn logout_returns_home() {
        let mut state = state();
        let login = AuthAction::LoginSucceeded(User::new("u1", Role::Staff));
        handle_event(&mut state, &Event::Dispatch(login.into())).unwrap();
        state.page = Page::Reports;

        let (render, _) = handle_event(&mut state, &Event::Logout).unwrap();
        assert!(render);
        assert_eq!(state.page, Page::Home);
        assert_eq!(*state.store.snapshot().auth, AuthState::Anonymous);

        let (render, _) = handle_event(&mut state, &Event::Logout).unwrap();
        assert!(!render);
    }

    #[test]
    fn paging_is_bounded() {
        let mut state = state();
        state.page = Page::Reports;
        state.students = Some(students(3));

        assert!(handle_event(&mut state, &Event::NextPage).unwrap().0);
        assert!(!handle_event(&mut state, &Event::NextPage).unwrap().0);
        assert_eq!(state.table.page, 1);
        assert!(handle_event(&mut state, &Event::PrevPage).unwrap().0);
        assert!(!handle_event(&mut state, &Event::PrevPage).unwrap().0);
    }

    #[test]
    fn sort_ignores_unknown_columns() {
        let mut state = state();
        state.page = Page::Reports;
        assert!(!handle_event(&mut state, &Event::SortBy(7)).unwrap().0);
        assert!(handle_event(&mut state, &Event::SortBy(1)).unwrap().0);
        assert!(state.table.sort.is_some());
    }

    #[test]
    fn search_edits_query_and_resets_page() {
        let mut state = state();
        state.page = Page::Reports;
        state.students = Some(students(3));
        state.table.page = 1;

        handle_event(&mut state, &Event::SearchMode).unwrap();
        assert_eq!(state.input_mode, InputMode::Search);
        handle_event(&mut state, &Event::Char('s')).unwrap();
        handle_event(&mut state, &Event::Char('1')).unwrap();
        assert_eq!(state.table.query, "s1");
        assert_eq!(state.table.page, 0);

        handle_event(&mut state, &Event::Backspace).unwrap();
        assert_eq!(state.table.query, "s");

        handle_event(&mut state, &Event::ConfirmSearch).unwrap();
        assert_eq!(state.input_mode, InputMode::Normal);
        assert_eq!(state.table.query, "s");

        handle_event(&mut state, &Event::ExitSearch).unwrap();
        assert!(state.table.query.is_empty());
    }

    #[test]
    fn chars_outside_search_are_ignored() {
        let mut state = state();
        assert!(!handle_event(&mut state, &Event::Char('x')).unwrap().0);
        assert!(!handle_event(&mut state, &Event::SearchMode).unwrap().0);
    }

    #[test]
    fn dismiss_clears_messages() {
        let mut state = state();
        state.store.dispatch(MessageAction::info("hello"));
        assert!(handle_event(&mut state, &Event::DismissMessages).unwrap().0);
        assert!(state.store.snapshot().messages().is_empty());
        assert!(!handle_event(&mut state, &Event::DismissMessages).unwrap().0);
    }

    #[test]
    fn close_focus_requests_effect() {
        let mut state = state();
        let (render, effects) = handle_event(&mut state, &Event::CloseFocus).unwrap();
        assert!(!render);
        assert_eq!(effects, vec![Effect::CloseFocus]);
    }
}
