use chrono::{NaiveDate, Utc};
use sqlx::SqlitePool;

use crate::model::attendance::{AttendanceRecord, AttendanceStatus};
use crate::store::{EmployeeStore, LIST_CAP, StoreError};

/// Handle over the attendance table.
///
/// One row per (employee_id, date); the compound unique index is the
/// enforcement point. The table carries no foreign key, so existence is
/// checked against the employee store at mark time only and rows can
/// outlive their employee until the delete sweep removes them.
#[derive(Clone)]
pub struct AttendanceStore {
    pool: SqlitePool,
    employees: EmployeeStore,
}

impl AttendanceStore {
    pub fn new(pool: SqlitePool) -> Self {
        let employees = EmployeeStore::new(pool.clone());
        Self { pool, employees }
    }

    /// Marks attendance for one employee on one date.
    ///
    /// `employee_name` is a snapshot of the employee's `full_name` at
    /// marking time and is never refreshed afterwards.
    pub async fn mark(
        &self,
        employee_id: &str,
        date: NaiveDate,
        status: AttendanceStatus,
    ) -> Result<AttendanceRecord, StoreError> {
        // Existence first: a duplicate row is only ever reported for an
        // employee that exists.
        let employee = self.employees.get(employee_id).await?;

        let result = sqlx::query_as::<_, AttendanceRecord>(
            r#"
            INSERT INTO attendance (employee_id, employee_name, date, status, created_at)
            VALUES (?, ?, ?, ?, ?)
            RETURNING id, employee_id, employee_name, date, status, created_at
            "#,
        )
        .bind(employee_id)
        .bind(&employee.full_name)
        .bind(date)
        .bind(status.as_str())
        .bind(Utc::now())
        .fetch_one(&self.pool)
        .await;

        match result {
            Ok(record) => Ok(record),
            Err(e) => {
                if let sqlx::Error::Database(db_err) = &e {
                    if db_err.is_unique_violation() {
                        return Err(StoreError::DuplicateAttendance {
                            employee_id: employee_id.to_string(),
                            date,
                        });
                    }
                }
                Err(StoreError::Sqlx(e))
            }
        }
    }

    /// All records, optionally narrowed to a single date. Capped at
    /// [`LIST_CAP`] rows.
    pub async fn list_all(
        &self,
        date: Option<NaiveDate>,
    ) -> Result<Vec<AttendanceRecord>, StoreError> {
        let records = match date {
            Some(date) => {
                sqlx::query_as::<_, AttendanceRecord>(
                    "SELECT id, employee_id, employee_name, date, status, created_at \
                     FROM attendance WHERE date = ? LIMIT ?",
                )
                .bind(date)
                .bind(LIST_CAP)
                .fetch_all(&self.pool)
                .await?
            }
            None => {
                sqlx::query_as::<_, AttendanceRecord>(
                    "SELECT id, employee_id, employee_name, date, status, created_at \
                     FROM attendance LIMIT ?",
                )
                .bind(LIST_CAP)
                .fetch_all(&self.pool)
                .await?
            }
        };

        Ok(records)
    }

    /// Records for one employee, who must exist.
    pub async fn list_for_employee(
        &self,
        employee_id: &str,
    ) -> Result<Vec<AttendanceRecord>, StoreError> {
        self.employees.get(employee_id).await?;

        let records = sqlx::query_as::<_, AttendanceRecord>(
            "SELECT id, employee_id, employee_name, date, status, created_at \
             FROM attendance WHERE employee_id = ? LIMIT ?",
        )
        .bind(employee_id)
        .bind(LIST_CAP)
        .fetch_all(&self.pool)
        .await?;

        Ok(records)
    }

    /// Removes every record for one employee and returns the count swept.
    /// This is the second half of employee deletion.
    pub async fn remove_for_employee(&self, employee_id: &str) -> Result<u64, StoreError> {
        let result = sqlx::query("DELETE FROM attendance WHERE employee_id = ?")
            .bind(employee_id)
            .execute(&self.pool)
            .await?;

        Ok(result.rows_affected())
    }
}
