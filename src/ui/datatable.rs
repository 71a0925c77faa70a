//! Generic data table: column definitions, sorting, filtering, pagination.
//!
//! Views describe *what* a table shows with a list of [`Column`]s whose
//! selectors map a row to a [`CellValue`]. [`DataTable::view`] does the rest:
//! fuzzy filtering with highlight ranges, stable sorting, striping, paging and
//! column width allocation. The result is a [`TableViewModel`] ready for the
//! table component.

use crate::ui::viewmodel::{
    ColumnHeader, PaginationInfo, TableCell, TableRow, TableStatus, TableViewModel,
};
use fuzzy_matcher::skim::SkimMatcherV2;
use fuzzy_matcher::FuzzyMatcher;
use std::cmp::Ordering;

/// Rows per page when nothing else is configured.
pub const DEFAULT_PAGE_SIZE: usize = 10;

/// Text shown instead of rows while data is loading.
pub const PROGRESS_TEXT: &str = "Loading...";

/// Text shown when there are no rows to display.
pub const NO_DATA_TEXT: &str = "There are no records to display";

/// Value produced by a column selector.
///
/// Numbers sort numerically; text sorts case-insensitively.
#[derive(Debug, Clone, PartialEq)]
pub enum CellValue {
    Text(String),
    Number(f64),
}

impl CellValue {
    /// Display form. Whole numbers drop their fractional part, other numbers
    /// keep two decimals.
    ///
    /// ```
    /// use staff_portal::ui::datatable::CellValue;
    ///
    /// assert_eq!(CellValue::Number(88.0).display(), "88");
    /// assert_eq!(CellValue::Number(7.5).display(), "7.50");
    /// assert_eq!(CellValue::Text("A".into()).display(), "A");
    /// ```
    #[must_use]
    pub fn display(&self) -> String {
        match self {
            Self::Text(text) => text.clone(),
            Self::Number(n) if n.is_finite() && n.fract() == 0.0 => format!("{n:.0}"),
            Self::Number(n) => format!("{n:.2}"),
        }
    }

    fn compare(&self, other: &Self) -> Ordering {
        match (self, other) {
            (Self::Number(a), Self::Number(b)) => a.partial_cmp(b).unwrap_or(Ordering::Equal),
            _ => self.display().to_lowercase().cmp(&other.display().to_lowercase()),
        }
    }
}

/// Column definition for rows of type `T`.
pub struct Column<T> {
    /// Header label.
    pub name: &'static str,
    /// Extracts the cell value from a row.
    pub selector: fn(&T) -> CellValue,
    /// Relative width weight.
    pub grow: usize,
    /// Whether the filter query is matched against this column.
    pub searchable: bool,
}

impl<T> Column<T> {
    #[must_use]
    pub const fn new(name: &'static str, selector: fn(&T) -> CellValue) -> Self {
        Self {
            name,
            selector,
            grow: 1,
            searchable: true,
        }
    }

    #[must_use]
    pub const fn grow(mut self, grow: usize) -> Self {
        self.grow = grow;
        self
    }

    #[must_use]
    pub const fn searchable(mut self, searchable: bool) -> Self {
        self.searchable = searchable;
        self
    }
}

/// Sort direction of the active sort column.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SortDirection {
    Ascending,
    Descending,
}

impl SortDirection {
    #[must_use]
    pub const fn toggled(self) -> Self {
        match self {
            Self::Ascending => Self::Descending,
            Self::Descending => Self::Ascending,
        }
    }

    #[must_use]
    pub const fn arrow(self) -> &'static str {
        match self {
            Self::Ascending => "▲",
            Self::Descending => "▼",
        }
    }
}

/// Interactive table state: sort column, page and filter query.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TableState {
    pub sort: Option<(usize, SortDirection)>,
    pub page: usize,
    pub page_size: usize,
    pub query: String,
}

impl Default for TableState {
    fn default() -> Self {
        Self::new(DEFAULT_PAGE_SIZE)
    }
}

impl TableState {
    #[must_use]
    pub const fn new(page_size: usize) -> Self {
        Self {
            sort: None,
            page: 0,
            page_size,
            query: String::new(),
        }
    }

    /// Sorts by `column`, flipping the direction if it is already the sort
    /// column. Returns to the first page.
    pub fn toggle_sort(&mut self, column: usize) {
        self.sort = match self.sort {
            Some((current, direction)) if current == column => Some((column, direction.toggled())),
            _ => Some((column, SortDirection::Ascending)),
        };
        self.page = 0;
    }

    /// Number of pages for `row_count` rows; never less than one.
    #[must_use]
    pub fn page_count(&self, row_count: usize) -> usize {
        let size = self.page_size.max(1);
        row_count.div_ceil(size).max(1)
    }

    /// Advances one page. Returns `false` on the last page.
    pub fn next_page(&mut self, row_count: usize) -> bool {
        if self.page + 1 < self.page_count(row_count) {
            self.page += 1;
            true
        } else {
            false
        }
    }

    /// Goes back one page. Returns `false` on the first page.
    pub fn prev_page(&mut self) -> bool {
        if self.page == 0 {
            false
        } else {
            self.page -= 1;
            true
        }
    }

    /// Pulls the page back into range after the row count shrank.
    pub fn clamp_page(&mut self, row_count: usize) {
        self.page = self.page.min(self.page_count(row_count) - 1);
    }
}

/// A table over borrowed rows.
pub struct DataTable<'a, T> {
    pub columns: &'a [Column<T>],
    pub rows: &'a [T],
    /// Shows the progress indicator instead of rows.
    pub progress_pending: bool,
    /// Alternates row backgrounds.
    pub striped: bool,
}

impl<'a, T> DataTable<'a, T> {
    #[must_use]
    pub const fn new(columns: &'a [Column<T>], rows: &'a [T]) -> Self {
        Self {
            columns,
            rows,
            progress_pending: false,
            striped: true,
        }
    }

    #[must_use]
    pub const fn progress_pending(mut self, pending: bool) -> Self {
        self.progress_pending = pending;
        self
    }

    /// Indices of rows matching `query`, in source order.
    ///
    /// Every whitespace-separated token must fuzzy-match at least one
    /// searchable cell of the row. An empty query matches every row.
    #[must_use]
    pub fn matching_rows(&self, query: &str) -> Vec<usize> {
        let tokens = query_tokens(query);
        if tokens.is_empty() {
            return (0..self.rows.len()).collect();
        }

        let matcher = SkimMatcherV2::default();
        self.rows
            .iter()
            .enumerate()
            .filter(|(_, row)| {
                let cells: Vec<String> = self
                    .columns
                    .iter()
                    .filter(|c| c.searchable)
                    .map(|c| (c.selector)(row).display().to_lowercase())
                    .collect();
                tokens
                    .iter()
                    .all(|token| cells.iter().any(|cell| matcher.fuzzy_match(cell, token).is_some()))
            })
            .map(|(index, _)| index)
            .collect()
    }

    /// Computes the renderable table for `state` at `width` columns.
    #[must_use]
    pub fn view(&self, state: &TableState, width: usize) -> TableViewModel {
        let _span = tracing::debug_span!("datatable_view",
            rows = self.rows.len(),
            query_len = state.query.len(),
            loading = self.progress_pending
        )
        .entered();

        let widths = column_widths(self.columns, width);
        let columns = self
            .columns
            .iter()
            .zip(&widths)
            .enumerate()
            .map(|(index, (column, width))| ColumnHeader {
                name: column.name.to_string(),
                width: *width,
                sort: state
                    .sort
                    .and_then(|(c, direction)| (c == index).then_some(direction)),
            })
            .collect();

        if self.progress_pending {
            return TableViewModel {
                columns,
                rows: vec![],
                status: TableStatus::Loading,
                pagination: None,
            };
        }

        let mut indices = self.matching_rows(&state.query);
        if let Some((column, direction)) = state.sort {
            if let Some(column) = self.columns.get(column) {
                indices.sort_by(|a, b| {
                    let ordering = (column.selector)(&self.rows[*a])
                        .compare(&(column.selector)(&self.rows[*b]));
                    match direction {
                        SortDirection::Ascending => ordering,
                        SortDirection::Descending => ordering.reverse(),
                    }
                });
            }
        }

        if indices.is_empty() {
            return TableViewModel {
                columns,
                rows: vec![],
                status: TableStatus::Empty,
                pagination: None,
            };
        }

        let total = indices.len();
        let page_size = state.page_size.max(1);
        let page_count = state.page_count(total);
        let page = state.page.min(page_count - 1);
        let start = page * page_size;
        let end = (start + page_size).min(total);

        let tokens = query_tokens(&state.query);
        let matcher = if tokens.is_empty() {
            None
        } else {
            Some(SkimMatcherV2::default())
        };

        let rows = indices[start..end]
            .iter()
            .enumerate()
            .map(|(position, index)| {
                let row = &self.rows[*index];
                let cells = self
                    .columns
                    .iter()
                    .zip(&widths)
                    .map(|(column, width)| {
                        let text = (column.selector)(row).display();
                        let highlight_ranges = match &matcher {
                            Some(m) if column.searchable => {
                                highlight_ranges(m, &text, &tokens)
                            }
                            _ => vec![],
                        };
                        fit_cell(text, highlight_ranges, *width)
                    })
                    .collect();
                TableRow {
                    cells,
                    striped: self.striped && position % 2 == 1,
                }
            })
            .collect();

        TableViewModel {
            columns,
            rows,
            status: TableStatus::Rows,
            pagination: Some(PaginationInfo {
                first: start + 1,
                last: end,
                total,
                page: page + 1,
                page_count,
            }),
        }
    }
}

/// Splits `width` between columns proportionally to their grow weights.
///
/// The last column absorbs rounding leftovers.
fn column_widths<T>(columns: &[Column<T>], width: usize) -> Vec<usize> {
    let total_grow: usize = columns.iter().map(|c| c.grow.max(1)).sum();
    if total_grow == 0 {
        return vec![];
    }

    let mut widths: Vec<usize> = columns
        .iter()
        .map(|c| width * c.grow.max(1) / total_grow)
        .collect();
    let used: usize = widths.iter().sum();
    if let Some(last) = widths.last_mut() {
        *last += width.saturating_sub(used);
    }
    widths
}

fn query_tokens(query: &str) -> Vec<String> {
    query.split_whitespace().map(str::to_lowercase).collect()
}

/// Coalesces the fuzzy match indices of every token into sorted
/// `(start, end)` character ranges.
fn highlight_ranges(matcher: &SkimMatcherV2, text: &str, tokens: &[String]) -> Vec<(usize, usize)> {
    let mut indices: Vec<usize> = tokens
        .iter()
        .filter_map(|token| matcher.fuzzy_indices(text, token))
        .flat_map(|(_score, indices)| indices)
        .collect();
    indices.sort_unstable();
    indices.dedup();

    let mut ranges: Vec<(usize, usize)> = Vec::new();
    for idx in indices {
        match ranges.last_mut() {
            Some((_, end)) if *end == idx => *end = idx + 1,
            _ => ranges.push((idx, idx + 1)),
        }
    }
    ranges
}

/// Truncates a cell to leave one column of spacing, keeping ranges in bounds.
fn fit_cell(text: String, ranges: Vec<(usize, usize)>, width: usize) -> TableCell {
    let limit = width.saturating_sub(1);
    let char_count = text.chars().count();
    if char_count <= limit {
        return TableCell {
            text,
            highlight_ranges: ranges,
        };
    }

    let keep = limit.saturating_sub(3);
    let truncated: String = text.chars().take(keep).chain("...".chars()).collect();
    let ranges = ranges
        .into_iter()
        .filter(|(start, _)| *start < keep)
        .map(|(start, end)| (start, end.min(keep)))
        .collect();
    TableCell {
        text: truncated,
        highlight_ranges: ranges,
    }
}
