use chrono::NaiveDate;
use thiserror::Error;

pub mod attendance;
pub mod employee;

pub use attendance::AttendanceStore;
pub use employee::{EmployeeStore, NewEmployee};

/// Hard cap on rows returned by any list operation.
pub const LIST_CAP: i64 = 1000;

/// Errors surfaced by the store layer.
///
/// Uniqueness is enforced by the unique indexes, never by a pre-check in
/// application code: the duplicate variants are produced by classifying
/// the index rejection after the fact.
#[derive(Debug, Error)]
pub enum StoreError {
    #[error("{resource} with ID '{id}' not found")]
    NotFound { resource: &'static str, id: String },

    #[error("Employee with ID '{0}' already exists")]
    DuplicateEmployeeId(String),

    #[error("Employee with email '{0}' already exists")]
    DuplicateEmail(String),

    /// Unique-index rejection on employees where the database message
    /// named neither column.
    #[error("Employee with this ID or email already exists")]
    DuplicateEmployee,

    #[error("Attendance already marked for employee '{employee_id}' on {date}")]
    DuplicateAttendance {
        employee_id: String,
        date: NaiveDate,
    },

    #[error("database error: {0}")]
    Sqlx(#[from] sqlx::Error),
}
