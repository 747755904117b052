use std::str::FromStr;

use sqlx::SqlitePool;
use sqlx::sqlite::{SqliteConnectOptions, SqlitePoolOptions};
use tracing::info;

/// Opens the pool and installs the schema.
///
/// In-memory databases must be opened with `max_connections = 1`: every
/// new SQLite connection to `:memory:` is its own empty database.
pub async fn init_db(database_url: &str, max_connections: u32) -> Result<SqlitePool, sqlx::Error> {
    let options = SqliteConnectOptions::from_str(database_url)?.create_if_missing(true);

    let pool = SqlitePoolOptions::new()
        .max_connections(max_connections)
        .connect_with(options)
        .await?;

    ensure_schema(&pool).await?;

    Ok(pool)
}

/// Creates both tables and the unique indexes that carry the uniqueness
/// rules: employees on `employee_id` and on `email`, attendance on the
/// (`employee_id`, `date`) pair.
///
/// `attendance.employee_id` has no foreign key on purpose: existence is
/// checked in the store at mark time, and employee deletion sweeps the
/// matching attendance rows itself.
pub async fn ensure_schema(pool: &SqlitePool) -> Result<(), sqlx::Error> {
    sqlx::query(
        r#"
        CREATE TABLE IF NOT EXISTS employees (
            id          INTEGER PRIMARY KEY AUTOINCREMENT,
            employee_id TEXT NOT NULL,
            full_name   TEXT NOT NULL,
            email       TEXT NOT NULL,
            department  TEXT NOT NULL,
            created_at  TEXT NOT NULL
        )
        "#,
    )
    .execute(pool)
    .await?;

    sqlx::query(
        r#"
        CREATE TABLE IF NOT EXISTS attendance (
            id            INTEGER PRIMARY KEY AUTOINCREMENT,
            employee_id   TEXT NOT NULL,
            employee_name TEXT NOT NULL,
            date          TEXT NOT NULL,
            status        TEXT NOT NULL,
            created_at    TEXT NOT NULL
        )
        "#,
    )
    .execute(pool)
    .await?;

    sqlx::query(
        "CREATE UNIQUE INDEX IF NOT EXISTS idx_employees_employee_id \
         ON employees (employee_id)",
    )
    .execute(pool)
    .await?;

    sqlx::query("CREATE UNIQUE INDEX IF NOT EXISTS idx_employees_email ON employees (email)")
        .execute(pool)
        .await?;

    sqlx::query(
        "CREATE UNIQUE INDEX IF NOT EXISTS idx_attendance_employee_date \
         ON attendance (employee_id, date)",
    )
    .execute(pool)
    .await?;

    info!("Database schema and unique indexes ensured");
    Ok(())
}
