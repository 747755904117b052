use actix_web::{HttpResponse, web};
use serde::{Deserialize, Serialize};
use tracing::info;
use utoipa::{IntoParams, ToSchema};

use crate::error::ApiError;
use crate::model::attendance::AttendanceRecord;
use crate::store::AttendanceStore;
use crate::validate;

#[derive(Deserialize, Serialize, ToSchema)]
pub struct MarkAttendance {
    #[schema(example = "EMP001")]
    pub employee_id: String,
    /// Attendance date in YYYY-MM-DD form.
    #[schema(example = "2026-02-04", format = "date")]
    pub date: String,
    /// Either "Present" or "Absent", case-sensitive.
    #[schema(example = "Present")]
    pub status: String,
}

#[derive(Debug, Deserialize, IntoParams)]
pub struct AttendanceQuery {
    /// Narrow the listing to one date (YYYY-MM-DD).
    pub date_filter: Option<String>,
}

#[derive(Serialize, ToSchema)]
pub struct AttendanceListResponse {
    pub records: Vec<AttendanceRecord>,
    #[schema(example = 1)]
    pub total: usize,
}

/// Mark Attendance
#[utoipa::path(
    post,
    path = "/api/attendance",
    request_body = MarkAttendance,
    responses(
        (status = 201, description = "Attendance marked", body = AttendanceRecord),
        (status = 404, description = "No such employee", body = Object, example = json!({
            "detail": "Employee with ID 'EMP001' not found"
        })),
        (status = 409, description = "Already marked for that employee and date", body = Object, example = json!({
            "detail": "Attendance already marked for employee 'EMP001' on 2026-02-04"
        })),
        (status = 422, description = "Validation failed", body = Object, example = json!({
            "detail": "status must be either \"Present\" or \"Absent\""
        }))
    ),
    tag = "Attendance"
)]
pub async fn mark_attendance(
    store: web::Data<AttendanceStore>,
    payload: web::Json<MarkAttendance>,
) -> Result<HttpResponse, ApiError> {
    let date = validate::date(&payload.date)?;
    let status = validate::status(&payload.status)?;

    let record = store.mark(&payload.employee_id, date, status).await?;

    info!(employee_id = %record.employee_id, date = %record.date, status = %record.status, "Attendance marked");
    Ok(HttpResponse::Created().json(record))
}

/// List Attendance
#[utoipa::path(
    get,
    path = "/api/attendance",
    params(AttendanceQuery),
    responses(
        (status = 200, description = "Attendance records with a total count", body = AttendanceListResponse),
        (status = 422, description = "Malformed date filter", body = Object, example = json!({
            "detail": "date must be a calendar date in YYYY-MM-DD format"
        }))
    ),
    tag = "Attendance"
)]
pub async fn list_attendance(
    store: web::Data<AttendanceStore>,
    query: web::Query<AttendanceQuery>,
) -> Result<HttpResponse, ApiError> {
    let date = match query.date_filter.as_deref() {
        Some(raw) => Some(validate::date(raw)?),
        None => None,
    };

    let records = store.list_all(date).await?;
    let total = records.len();

    Ok(HttpResponse::Ok().json(AttendanceListResponse { records, total }))
}

/// Get Attendance by Employee
#[utoipa::path(
    get,
    path = "/api/attendance/{employee_id}",
    params(
        ("employee_id" = String, Path, description = "Public employee ID")
    ),
    responses(
        (status = 200, description = "That employee's records with a total count", body = AttendanceListResponse),
        (status = 404, description = "No such employee", body = Object, example = json!({
            "detail": "Employee with ID 'EMP001' not found"
        }))
    ),
    tag = "Attendance"
)]
pub async fn get_employee_attendance(
    store: web::Data<AttendanceStore>,
    path: web::Path<String>,
) -> Result<HttpResponse, ApiError> {
    let employee_id = path.into_inner();

    let records = store.list_for_employee(&employee_id).await?;
    let total = records.len();

    Ok(HttpResponse::Ok().json(AttendanceListResponse { records, total }))
}
