use actix_web::{HttpResponse, web};
use serde::{Deserialize, Serialize};
use serde_json::json;
use tracing::info;
use utoipa::ToSchema;

use crate::error::ApiError;
use crate::model::employee::Employee;
use crate::store::{AttendanceStore, EmployeeStore, NewEmployee};
use crate::validate;

#[derive(Deserialize, Serialize, ToSchema)]
pub struct CreateEmployee {
    #[schema(example = "EMP001")]
    pub employee_id: String,
    #[schema(example = "John Doe")]
    pub full_name: String,
    #[schema(example = "john.doe@company.com", format = "email")]
    pub email: String,
    #[schema(example = "Engineering")]
    pub department: String,
}

#[derive(Serialize, ToSchema)]
pub struct EmployeeListResponse {
    pub employees: Vec<Employee>,
    #[schema(example = 1)]
    pub total: usize,
}

/// Create Employee
#[utoipa::path(
    post,
    path = "/api/employees",
    request_body = CreateEmployee,
    responses(
        (status = 201, description = "Employee created", body = Employee),
        (status = 409, description = "Employee ID or email already taken", body = Object, example = json!({
            "detail": "Employee with ID 'EMP001' already exists"
        })),
        (status = 422, description = "Validation failed", body = Object, example = json!({
            "detail": "employee_id must be 1-20 characters"
        }))
    ),
    tag = "Employees"
)]
pub async fn create_employee(
    store: web::Data<EmployeeStore>,
    payload: web::Json<CreateEmployee>,
) -> Result<HttpResponse, ApiError> {
    validate::employee_id(&payload.employee_id)?;
    validate::full_name(&payload.full_name)?;
    validate::email(&payload.email)?;
    validate::department(&payload.department)?;

    let payload = payload.into_inner();
    let employee = store
        .create(NewEmployee {
            employee_id: payload.employee_id,
            full_name: payload.full_name,
            email: payload.email,
            department: payload.department,
        })
        .await?;

    info!(employee_id = %employee.employee_id, "Employee created");
    Ok(HttpResponse::Created().json(employee))
}

/// List Employees
#[utoipa::path(
    get,
    path = "/api/employees",
    responses(
        (status = 200, description = "All employees with a total count", body = EmployeeListResponse)
    ),
    tag = "Employees"
)]
pub async fn list_employees(store: web::Data<EmployeeStore>) -> Result<HttpResponse, ApiError> {
    let employees = store.list().await?;
    let total = employees.len();

    Ok(HttpResponse::Ok().json(EmployeeListResponse { employees, total }))
}

/// Get Employee by ID
#[utoipa::path(
    get,
    path = "/api/employees/{employee_id}",
    params(
        ("employee_id" = String, Path, description = "Public employee ID")
    ),
    responses(
        (status = 200, description = "Employee found", body = Employee),
        (status = 404, description = "No such employee", body = Object, example = json!({
            "detail": "Employee with ID 'EMP001' not found"
        }))
    ),
    tag = "Employees"
)]
pub async fn get_employee(
    store: web::Data<EmployeeStore>,
    path: web::Path<String>,
) -> Result<HttpResponse, ApiError> {
    let employee_id = path.into_inner();
    let employee = store.get(&employee_id).await?;

    Ok(HttpResponse::Ok().json(employee))
}

/// Delete Employee
#[utoipa::path(
    delete,
    path = "/api/employees/{employee_id}",
    params(
        ("employee_id" = String, Path, description = "Public employee ID")
    ),
    responses(
        (status = 200, description = "Employee and their attendance removed", body = Object, example = json!({
            "message": "Employee 'EMP001' deleted successfully"
        })),
        (status = 404, description = "No such employee", body = Object, example = json!({
            "detail": "Employee with ID 'EMP001' not found"
        }))
    ),
    tag = "Employees"
)]
pub async fn delete_employee(
    employees: web::Data<EmployeeStore>,
    attendance: web::Data<AttendanceStore>,
    path: web::Path<String>,
) -> Result<HttpResponse, ApiError> {
    let employee_id = path.into_inner();
    employees.delete(&employee_id).await?;

    // The sweep is a second statement, not a transaction: a mark racing in
    // between the two can land and is removed here.
    let swept = attendance.remove_for_employee(&employee_id).await?;
    info!(employee_id = %employee_id, swept, "Employee deleted");

    Ok(HttpResponse::Ok().json(json!({
        "message": format!("Employee '{}' deleted successfully", employee_id)
    })))
}
