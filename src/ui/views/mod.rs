//! Page views: pure functions from store slices and typed props to view models.
//!
//! Each view declares exactly what it reads. [`home::staff_home`] and
//! [`navbar::navbar`] read the session slice, [`messages::message_lines`] reads
//! the message slice and [`reports::students_table`] reads only its props.
//! None of them touch the store itself.

pub mod home;
pub mod messages;
pub mod navbar;
pub mod reports;

pub use home::{staff_access_denied, staff_home};
pub use messages::message_lines;
pub use navbar::navbar;
pub use reports::{student_columns, students_table, StudentsTableProps};
