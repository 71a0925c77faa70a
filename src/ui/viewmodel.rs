//! Display-ready view models.
//!
//! View models are computed by the functions in [`crate::ui::views`] and
//! consumed by the renderer. They hold no business logic: text is already
//! formatted, widths are allocated and highlight ranges resolved.

use crate::domain::MessageKind;
use crate::ui::datatable::SortDirection;

/// Everything needed to draw one frame.
#[derive(Debug, Clone, PartialEq)]
pub struct PortalViewModel {
    pub navbar: NavbarInfo,
    /// Notifications, oldest first.
    pub messages: Vec<MessageLine>,
    pub body: PageBody,
    pub search_bar: Option<SearchBarInfo>,
    pub footer: FooterInfo,
}

/// Top navigation bar.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NavbarInfo {
    pub title: String,
    pub tabs: Vec<NavTab>,
    /// "Jane Doe (Staff)" or "Not signed in".
    pub user_label: String,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NavTab {
    pub label: String,
    pub active: bool,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MessageLine {
    pub kind: MessageKind,
    pub text: String,
}

#[derive(Debug, Clone, PartialEq)]
pub enum PageBody {
    Home(HomeViewModel),
    Reports(ReportsViewModel),
    /// A page the signed-in account may not open, shown as a title and notice.
    Restricted(HomeViewModel),
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct HomeViewModel {
    pub title: String,
    pub subtitle: String,
}

#[derive(Debug, Clone, PartialEq)]
pub struct ReportsViewModel {
    pub title: String,
    pub table: TableViewModel,
}

/// A computed data table page.
#[derive(Debug, Clone, PartialEq)]
pub struct TableViewModel {
    pub columns: Vec<ColumnHeader>,
    /// Rows of the current page only. Empty unless `status` is `Rows`.
    pub rows: Vec<TableRow>,
    pub status: TableStatus,
    pub pagination: Option<PaginationInfo>,
}

/// What the table body shows.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TableStatus {
    /// Progress indicator instead of rows.
    Loading,
    /// No-data text instead of rows.
    Empty,
    Rows,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ColumnHeader {
    pub name: String,
    /// Allocated width in terminal columns.
    pub width: usize,
    /// Set on the active sort column.
    pub sort: Option<SortDirection>,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TableRow {
    /// One cell per column, already fitted to the column width.
    pub cells: Vec<TableCell>,
    pub striped: bool,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TableCell {
    pub text: String,
    /// `(start, end)` character ranges matched by the filter query.
    pub highlight_ranges: Vec<(usize, usize)>,
}

/// Position of the visible page; all numbers are 1-based.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PaginationInfo {
    pub first: usize,
    pub last: usize,
    pub total: usize,
    pub page: usize,
    pub page_count: usize,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SearchBarInfo {
    pub query: String,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FooterInfo {
    pub keybindings: String,
}
