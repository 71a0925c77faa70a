//! Data table renderer.
//!
//! Draws a [`TableViewModel`]: the column header row with sort arrows, then
//! either the rows of the current page (striped, with filter highlights) and
//! a pagination line, or a progress or no-data notice.

use super::empty::render_notice;
use crate::ui::datatable::{NO_DATA_TEXT, PROGRESS_TEXT};
use crate::ui::helpers::{self, text_width, Canvas};
use crate::ui::theme::Theme;
use crate::ui::viewmodel::{PaginationInfo, TableRow, TableStatus, TableViewModel};

/// Column inset from the left edge.
const TABLE_INDENT: usize = 2;

/// Renders the table starting at `row` without drawing past `last_row`.
///
/// Returns the next free row.
pub fn render_table(
    canvas: &mut Canvas,
    row: usize,
    last_row: usize,
    table: &TableViewModel,
    theme: &Theme,
    cols: usize,
) -> usize {
    if row > last_row {
        return row;
    }

    let mut current_row = render_column_headers(canvas, row, table, theme);

    match table.status {
        TableStatus::Loading => {
            current_row += 1;
            if current_row <= last_row {
                current_row = render_notice(
                    canvas,
                    current_row,
                    PROGRESS_TEXT,
                    None,
                    &theme.colors.progress_fg,
                    theme,
                    cols,
                );
            }
        }
        TableStatus::Empty => {
            current_row += 1;
            if current_row <= last_row {
                current_row = render_notice(
                    canvas,
                    current_row,
                    NO_DATA_TEXT,
                    None,
                    &theme.colors.empty_state_fg,
                    theme,
                    cols,
                );
            }
        }
        TableStatus::Rows => {
            for table_row in &table.rows {
                if current_row > last_row {
                    break;
                }
                current_row = render_row(canvas, current_row, table, table_row, theme);
            }
            if let Some(pagination) = table.pagination {
                if current_row <= last_row {
                    current_row = render_pagination(canvas, current_row, pagination, theme, cols);
                }
            }
        }
    }

    current_row
}

fn render_column_headers(canvas: &mut Canvas, row: usize, table: &TableViewModel, theme: &Theme) -> usize {
    canvas.move_to(row, 1);
    canvas.pad(TABLE_INDENT);
    canvas.put(Theme::bold());
    canvas.put(&Theme::fg(&theme.colors.column_header_fg));

    for column in &table.columns {
        let label = match column.sort {
            Some(direction) => format!("{} {}", column.name, direction.arrow()),
            None => column.name.clone(),
        };
        let label: String = label.chars().take(column.width.saturating_sub(1)).collect();
        canvas.put_padded(&label, column.width);
    }

    canvas.put(Theme::reset());
    row + 1
}

fn render_row(
    canvas: &mut Canvas,
    row: usize,
    table: &TableViewModel,
    table_row: &TableRow,
    theme: &Theme,
) -> usize {
    let mut style = Theme::fg(&theme.colors.text_normal);
    if table_row.striped {
        style.push_str(&Theme::bg(&theme.colors.stripe_bg));
    }

    canvas.move_to(row, 1);
    canvas.pad(TABLE_INDENT);
    canvas.put(&style);

    for (cell, column) in table_row.cells.iter().zip(&table.columns) {
        helpers::render_highlighted_text(canvas, &cell.text, &cell.highlight_ranges, theme, &style);
        canvas.pad(column.width.saturating_sub(text_width(&cell.text)));
    }

    canvas.put(Theme::reset());
    row + 1
}

fn render_pagination(
    canvas: &mut Canvas,
    row: usize,
    pagination: PaginationInfo,
    theme: &Theme,
    cols: usize,
) -> usize {
    let text = format!(
        "{}-{} of {}   page {}/{} ",
        pagination.first, pagination.last, pagination.total, pagination.page, pagination.page_count
    );
    let len = text_width(&text);

    canvas.move_to(row, 1);
    canvas.put(&Theme::fg(&theme.colors.text_dim));
    canvas.pad(cols.saturating_sub(len));
    canvas.put(&text);
    canvas.put(Theme::reset());
    row + 1
}
