use crate::api::attendance::{AttendanceListResponse, MarkAttendance};
use crate::api::employee::{CreateEmployee, EmployeeListResponse};
use crate::model::attendance::AttendanceRecord;
use crate::model::employee::Employee;
use utoipa::OpenApi;

#[derive(OpenApi)]
#[openapi(
    info(
        title = "HRMS Lite API",
        version = "1.0.0",
        description = r#"
## HRMS Lite

A lightweight HR record keeper for small teams.

### 🔹 Key Features
- **Employee Management**
  - Create, list, view, and delete employee profiles
- **Attendance Management**
  - One attendance mark per employee per day, Present or Absent

### 📦 Response Format
- JSON-based RESTful responses
- List endpoints return the rows plus a total count
- Errors carry a `detail` field naming what went wrong

---
Built with **Rust**, **Actix Web**, **SQLx**, and **Utoipa**.
"#,
    ),
    paths(
        crate::api::employee::create_employee,
        crate::api::employee::list_employees,
        crate::api::employee::get_employee,
        crate::api::employee::delete_employee,

        crate::api::attendance::mark_attendance,
        crate::api::attendance::list_attendance,
        crate::api::attendance::get_employee_attendance
    ),
    components(
        schemas(
            CreateEmployee,
            Employee,
            EmployeeListResponse,
            MarkAttendance,
            AttendanceRecord,
            AttendanceListResponse
        )
    ),
    tags(
        (name = "Employees", description = "Employee management APIs"),
        (name = "Attendance", description = "Attendance management APIs"),
    )
)]
pub struct ApiDoc;
