//! Application state and view model computation.
//!
//! [`AppState`] owns the [`Store`] together with the UI state the store does
//! not track: the active page, the input mode, the reports data handed in by
//! the student source and the table state. View models are computed on demand
//! from a store snapshot plus this state.
//!
//! # Example
//!
//! ```
//! use staff_portal::app::AppState;
//! use staff_portal::store::Store;
//! use staff_portal::ui::Theme;
//!
//! let state = AppState::new(Store::default(), Theme::default(), 10);
//! let vm = state.compute_viewmodel(80);
//! assert_eq!(vm.navbar.user_label, "Not signed in");
//! ```

use super::modes::{InputMode, Page};
use crate::domain::StudentRecord;
use crate::store::Store;
use crate::ui::datatable::TableState;
use crate::ui::theme::Theme;
use crate::ui::viewmodel::{FooterInfo, PageBody, PortalViewModel, SearchBarInfo};
use crate::ui::views::{self, reports::StudentsTableProps};

/// Columns reserved around the table body.
const TABLE_MARGIN: usize = 4;

#[derive(Debug)]
pub struct AppState {
    /// Session and message slices.
    pub store: Store,

    pub theme: Theme,

    pub page: Page,

    pub input_mode: InputMode,

    /// Records last delivered by the student source. `None` until the first
    /// load completes; an empty list is a completed load with no rows.
    pub students: Option<Vec<StudentRecord>>,

    /// Set while a student fetch is in flight.
    pub is_loading: bool,

    /// Sort column, page and filter query of the reports table.
    pub table: TableState,
}

impl AppState {
    #[must_use]
    pub fn new(store: Store, theme: Theme, page_size: usize) -> Self {
        Self {
            store,
            theme,
            page: Page::Home,
            input_mode: InputMode::Normal,
            students: None,
            is_loading: false,
            table: TableState::new(page_size),
        }
    }

    /// Students passing the current filter query.
    #[must_use]
    pub fn matching_students(&self) -> usize {
        views::reports::matching_students(self.student_rows(), &self.table.query)
    }

    /// Loaded students, empty before the first load.
    #[must_use]
    pub fn student_rows(&self) -> &[StudentRecord] {
        self.students.as_deref().unwrap_or_default()
    }

    /// Whether the signed-in account may open the reports table.
    #[must_use]
    pub fn can_view_reports(&self) -> bool {
        !views::staff_access_denied(self.store.snapshot().auth())
    }

    /// Whether opening the reports page should trigger a fetch: nothing has
    /// been loaded yet, no fetch is in flight and the account may see reports.
    #[must_use]
    pub fn needs_students(&self) -> bool {
        self.students.is_none() && !self.is_loading && self.can_view_reports()
    }

    /// Builds the frame for a terminal `cols` wide.
    #[must_use]
    pub fn compute_viewmodel(&self, cols: usize) -> PortalViewModel {
        let _span = tracing::debug_span!("compute_viewmodel",
            page = ?self.page,
            students = self.student_rows().len(),
            cols
        )
        .entered();

        let snapshot = self.store.snapshot();

        let body = match self.page {
            Page::Home => PageBody::Home(views::staff_home(snapshot.auth())),
            Page::Reports if views::staff_access_denied(snapshot.auth()) => {
                PageBody::Restricted(views::reports::restricted_page())
            }
            Page::Reports => PageBody::Reports(views::reports::reports_page(
                StudentsTableProps {
                    students: self.student_rows(),
                    is_loading: self.is_loading,
                },
                &self.table,
                cols.saturating_sub(TABLE_MARGIN),
            )),
        };

        PortalViewModel {
            navbar: views::navbar(snapshot.auth(), self.page),
            messages: views::message_lines(snapshot.messages()),
            body,
            search_bar: self.compute_search_bar(),
            footer: self.compute_footer(),
        }
    }

    fn compute_search_bar(&self) -> Option<SearchBarInfo> {
        if self.page != Page::Reports || !self.can_view_reports() {
            return None;
        }
        if self.input_mode == InputMode::Search || !self.table.query.is_empty() {
            Some(SearchBarInfo {
                query: self.table.query.clone(),
            })
        } else {
            None
        }
    }

    fn compute_footer(&self) -> FooterInfo {
        let keybindings = match (self.page, self.input_mode) {
            (_, InputMode::Search) => "type to filter | Backspace: delete | Enter: done | Esc: clear",
            (Page::Home, InputMode::Normal) => {
                "Tab: switch page | r: reports | x: dismiss | L: logout | q: quit"
            }
            (Page::Reports, InputMode::Normal) => {
                "n/p: page | 1-3: sort | /: search | R: reload | Tab: switch page | x: dismiss | q: quit"
            }
        };

        FooterInfo {
            keybindings: keybindings.to_string(),
        }
    }
}
