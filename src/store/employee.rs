use chrono::Utc;
use sqlx::SqlitePool;

use crate::model::employee::Employee;
use crate::store::{LIST_CAP, StoreError};

/// Fields for a new employee row. Shape rules (lengths, email form) are
/// the caller's job; uniqueness is this layer's.
#[derive(Debug, Clone)]
pub struct NewEmployee {
    pub employee_id: String,
    pub full_name: String,
    pub email: String,
    pub department: String,
}

/// Handle over the employees table.
#[derive(Clone)]
pub struct EmployeeStore {
    pool: SqlitePool,
}

impl EmployeeStore {
    pub fn new(pool: SqlitePool) -> Self {
        Self { pool }
    }

    /// Inserts a new employee, stamping `created_at` with the current time.
    ///
    /// A unique-index rejection is classified into the matching duplicate
    /// variant; the row is never pre-checked, so concurrent creates cannot
    /// both slip through.
    pub async fn create(&self, new: NewEmployee) -> Result<Employee, StoreError> {
        let result = sqlx::query_as::<_, Employee>(
            r#"
            INSERT INTO employees (employee_id, full_name, email, department, created_at)
            VALUES (?, ?, ?, ?, ?)
            RETURNING id, employee_id, full_name, email, department, created_at
            "#,
        )
        .bind(&new.employee_id)
        .bind(&new.full_name)
        .bind(&new.email)
        .bind(&new.department)
        .bind(Utc::now())
        .fetch_one(&self.pool)
        .await;

        result.map_err(|e| classify_employee_insert(&new, e))
    }

    /// Looks up one employee by its public `employee_id`.
    pub async fn get(&self, employee_id: &str) -> Result<Employee, StoreError> {
        sqlx::query_as::<_, Employee>(
            "SELECT id, employee_id, full_name, email, department, created_at \
             FROM employees WHERE employee_id = ?",
        )
        .bind(employee_id)
        .fetch_optional(&self.pool)
        .await?
        .ok_or_else(|| StoreError::NotFound {
            resource: "Employee",
            id: employee_id.to_string(),
        })
    }

    /// All employees, capped at [`LIST_CAP`] rows.
    pub async fn list(&self) -> Result<Vec<Employee>, StoreError> {
        let employees = sqlx::query_as::<_, Employee>(
            "SELECT id, employee_id, full_name, email, department, created_at \
             FROM employees LIMIT ?",
        )
        .bind(LIST_CAP)
        .fetch_all(&self.pool)
        .await?;

        Ok(employees)
    }

    /// Deletes one employee by its public `employee_id`.
    ///
    /// Attendance rows are not touched here; the caller sweeps them as a
    /// separate step.
    pub async fn delete(&self, employee_id: &str) -> Result<(), StoreError> {
        let result = sqlx::query("DELETE FROM employees WHERE employee_id = ?")
            .bind(employee_id)
            .execute(&self.pool)
            .await?;

        if result.rows_affected() == 0 {
            return Err(StoreError::NotFound {
                resource: "Employee",
                id: employee_id.to_string(),
            });
        }

        Ok(())
    }
}

/// Maps a unique-index rejection to the field that collided.
///
/// SQLite names the violated columns in its message
/// (`UNIQUE constraint failed: employees.email`); when neither column is
/// named the generic duplicate variant is returned.
fn classify_employee_insert(new: &NewEmployee, e: sqlx::Error) -> StoreError {
    if let sqlx::Error::Database(db_err) = &e {
        if db_err.is_unique_violation() {
            let message = db_err.message();
            if message.contains("employees.employee_id") {
                return StoreError::DuplicateEmployeeId(new.employee_id.clone());
            }
            if message.contains("employees.email") {
                return StoreError::DuplicateEmail(new.email.clone());
            }
            return StoreError::DuplicateEmployee;
        }
    }

    StoreError::Sqlx(e)
}
