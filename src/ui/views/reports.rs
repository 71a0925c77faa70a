//! Student reports page.
//!
//! The view only declares the columns and forwards its props. Sorting,
//! pagination, striping, filtering and the loading and empty indicators are
//! handled by [`DataTable`].

use crate::domain::StudentRecord;
use crate::ui::datatable::{CellValue, Column, DataTable, TableState};
use crate::ui::viewmodel::{HomeViewModel, ReportsViewModel, TableViewModel};
use crate::ui::views::home::STAFF_ONLY_TEXT;

pub const REPORTS_TITLE: &str = "Student Reports";

/// Inputs of the students table.
#[derive(Debug, Clone, Copy)]
pub struct StudentsTableProps<'a> {
    pub students: &'a [StudentRecord],
    pub is_loading: bool,
}

/// `StudentID`, `Average Grade` and `Group`. The id column takes most of the width.
#[must_use]
pub fn student_columns() -> Vec<Column<StudentRecord>> {
    vec![
        Column::new("StudentID", |s: &StudentRecord| {
            CellValue::Text(s.student_id.clone())
        })
        .grow(4),
        Column::new("Average Grade", |s: &StudentRecord| {
            CellValue::Number(s.average_grade)
        })
        .searchable(false),
        Column::new("Group", |s: &StudentRecord| CellValue::Text(s.group.clone())),
    ]
}

/// Computes the visible page of the students table.
#[must_use]
pub fn students_table(
    props: StudentsTableProps<'_>,
    table: &TableState,
    width: usize,
) -> TableViewModel {
    let columns = student_columns();
    DataTable::new(&columns, props.students)
        .progress_pending(props.is_loading)
        .view(table, width)
}

/// Number of students matching the current filter, used for paging bounds.
#[must_use]
pub fn matching_students(students: &[StudentRecord], query: &str) -> usize {
    let columns = student_columns();
    DataTable::new(&columns, students).matching_rows(query).len()
}

#[must_use]
pub fn reports_page(
    props: StudentsTableProps<'_>,
    table: &TableState,
    width: usize,
) -> ReportsViewModel {
    ReportsViewModel {
        title: REPORTS_TITLE.to_string(),
        table: students_table(props, table, width),
    }
}

/// Reports page body for accounts without staff access. No rows are exposed.
#[must_use]
pub fn restricted_page() -> HomeViewModel {
    HomeViewModel {
        title: REPORTS_TITLE.to_string(),
        subtitle: STAFF_ONLY_TEXT.to_string(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::ui::viewmodel::TableStatus;

    #[test]
    fn single_student_row() {
        let students = vec![StudentRecord::new("S1", 88.0, "A")];
        let props = StudentsTableProps {
            students: &students,
            is_loading: false,
        };

        let vm = students_table(props, &TableState::default(), 60);
        assert_eq!(vm.status, TableStatus::Rows);
        let names: Vec<&str> = vm.columns.iter().map(|c| c.name.as_str()).collect();
        assert_eq!(names, vec!["StudentID", "Average Grade", "Group"]);
        let cells: Vec<&str> = vm.rows[0].cells.iter().map(|c| c.text.as_str()).collect();
        assert_eq!(cells, vec!["S1", "88", "A"]);
    }

    #[test]
    fn loading_hides_rows() {
        let students = vec![StudentRecord::new("S1", 88.0, "A")];
        let props = StudentsTableProps {
            students: &students,
            is_loading: true,
        };

        let vm = students_table(props, &TableState::default(), 60);
        assert_eq!(vm.status, TableStatus::Loading);
        assert!(vm.rows.is_empty());
    }

    #[test]
    fn id_column_is_widest() {
        let vm = students_table(
            StudentsTableProps {
                students: &[],
                is_loading: false,
            },
            &TableState::default(),
            60,
        );
        assert_eq!(vm.status, TableStatus::Empty);
        assert_eq!(vm.columns[0].width, 40);
        assert_eq!(vm.columns[1].width + vm.columns[2].width, 20);
    }

    #[test]
    fn filter_counts_by_id_and_group() {
        let students = vec![
            StudentRecord::new("S1", 88.0, "A"),
            StudentRecord::new("S2", 70.0, "B"),
            StudentRecord::new("T3", 65.5, "B"),
        ];
        assert_eq!(matching_students(&students, "s"), 2);
        assert_eq!(matching_students(&students, "b"), 2);
        assert_eq!(matching_students(&students, ""), 3);
    }
}
