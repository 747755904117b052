use chrono::{DateTime, NaiveDate, Utc};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

#[derive(Debug, Serialize, Deserialize, sqlx::FromRow, ToSchema)]
#[schema(
    example = json!({
        "id": 1,
        "employee_id": "EMP001",
        "employee_name": "John Doe",
        "date": "2026-02-04",
        "status": "Present",
        "created_at": "2026-02-04T09:05:00Z"
    })
)]
pub struct AttendanceRecord {
    #[schema(example = 1)]
    pub id: i64,

    #[schema(example = "EMP001")]
    pub employee_id: String,

    /// Snapshot of the employee's full name at marking time.
    #[schema(example = "John Doe")]
    pub employee_name: String,

    #[schema(
        example = "2026-02-04",
        value_type = String,
        format = "date"
    )]
    pub date: NaiveDate,

    #[schema(example = "Present")]
    pub status: String,

    #[schema(
        example = "2026-02-04T09:05:00Z",
        value_type = String,
        format = "date-time"
    )]
    pub created_at: DateTime<Utc>,
}

/// The two attendance states. Stored and transported as the exact
/// variant name, so "present" and "PRESENT" are not valid values.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
pub enum AttendanceStatus {
    Present,
    Absent,
}

impl AttendanceStatus {
    pub fn as_str(&self) -> &'static str {
        match self {
            AttendanceStatus::Present => "Present",
            AttendanceStatus::Absent => "Absent",
        }
    }

    /// Case-sensitive match against the exact variant names.
    pub fn parse(value: &str) -> Option<Self> {
        match value {
            "Present" => Some(AttendanceStatus::Present),
            "Absent" => Some(AttendanceStatus::Absent),
            _ => None,
        }
    }
}
