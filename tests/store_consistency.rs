use chrono::NaiveDate;

use hrms_lite::db::init_db;
use hrms_lite::model::attendance::AttendanceStatus;
use hrms_lite::store::{AttendanceStore, EmployeeStore, NewEmployee, StoreError};

// One connection only: every sqlite :memory: connection is its own database.
async fn test_pool() -> sqlx::SqlitePool {
    init_db("sqlite::memory:", 1).await.unwrap()
}

fn employee(employee_id: &str, full_name: &str, email: &str) -> NewEmployee {
    NewEmployee {
        employee_id: employee_id.to_string(),
        full_name: full_name.to_string(),
        email: email.to_string(),
        department: "Engineering".to_string(),
    }
}

fn day(d: u32) -> NaiveDate {
    NaiveDate::from_ymd_opt(2026, 2, d).unwrap()
}

#[actix_web::test]
async fn duplicate_rejections_name_the_colliding_field() {
    let pool = test_pool().await;
    let store = EmployeeStore::new(pool.clone());
    store
        .create(employee("EMP001", "Jane Doe", "jane@x.com"))
        .await
        .unwrap();

    let err = store
        .create(employee("EMP001", "Someone Else", "other@x.com"))
        .await
        .unwrap_err();
    assert!(
        matches!(&err, StoreError::DuplicateEmployeeId(id) if id == "EMP001"),
        "got {err:?}"
    );

    let err = store
        .create(employee("EMP002", "Someone Else", "jane@x.com"))
        .await
        .unwrap_err();
    assert!(
        matches!(&err, StoreError::DuplicateEmail(email) if email == "jane@x.com"),
        "got {err:?}"
    );
}

#[actix_web::test]
async fn one_attendance_row_per_employee_per_day() {
    let pool = test_pool().await;
    EmployeeStore::new(pool.clone())
        .create(employee("EMP001", "Jane Doe", "jane@x.com"))
        .await
        .unwrap();
    let store = AttendanceStore::new(pool.clone());

    store
        .mark("EMP001", day(4), AttendanceStatus::Present)
        .await
        .unwrap();

    // A different status on the same day still collides.
    let err = store
        .mark("EMP001", day(4), AttendanceStatus::Absent)
        .await
        .unwrap_err();
    assert!(
        matches!(
            &err,
            StoreError::DuplicateAttendance { employee_id, date }
                if employee_id == "EMP001" && *date == day(4)
        ),
        "got {err:?}"
    );

    // Another day and another employee both pass.
    store
        .mark("EMP001", day(5), AttendanceStatus::Absent)
        .await
        .unwrap();
    EmployeeStore::new(pool.clone())
        .create(employee("EMP002", "John Roe", "john@x.com"))
        .await
        .unwrap();
    store
        .mark("EMP002", day(4), AttendanceStatus::Present)
        .await
        .unwrap();
}

#[actix_web::test]
async fn name_snapshot_is_frozen_at_mark_time() {
    let pool = test_pool().await;
    EmployeeStore::new(pool.clone())
        .create(employee("EMP001", "Jane Doe", "jane@x.com"))
        .await
        .unwrap();
    let store = AttendanceStore::new(pool.clone());

    let first = store
        .mark("EMP001", day(4), AttendanceStatus::Present)
        .await
        .unwrap();
    assert_eq!(first.employee_name, "Jane Doe");

    sqlx::query("UPDATE employees SET full_name = ? WHERE employee_id = ?")
        .bind("Jane Smith")
        .bind("EMP001")
        .execute(&pool)
        .await
        .unwrap();

    // New marks see the new name; the old row keeps its snapshot.
    let second = store
        .mark("EMP001", day(5), AttendanceStatus::Present)
        .await
        .unwrap();
    assert_eq!(second.employee_name, "Jane Smith");

    let records = store.list_all(Some(day(4))).await.unwrap();
    assert_eq!(records.len(), 1);
    assert_eq!(records[0].employee_name, "Jane Doe");
}

#[actix_web::test]
async fn delete_sweep_reports_the_swept_row_count() {
    let pool = test_pool().await;
    let employees = EmployeeStore::new(pool.clone());
    employees
        .create(employee("EMP001", "Jane Doe", "jane@x.com"))
        .await
        .unwrap();
    let attendance = AttendanceStore::new(pool.clone());
    for d in [3, 4, 5] {
        attendance
            .mark("EMP001", day(d), AttendanceStatus::Present)
            .await
            .unwrap();
    }

    employees.delete("EMP001").await.unwrap();
    let swept = attendance.remove_for_employee("EMP001").await.unwrap();
    assert_eq!(swept, 3);

    let records = attendance.list_all(None).await.unwrap();
    assert!(records.is_empty());

    // A second sweep finds nothing.
    assert_eq!(attendance.remove_for_employee("EMP001").await.unwrap(), 0);
}

#[actix_web::test]
async fn listings_cap_at_one_thousand_rows() {
    let pool = test_pool().await;
    let store = EmployeeStore::new(pool.clone());
    for i in 0..1003 {
        store
            .create(employee(
                &format!("E{i:04}"),
                "Jane Doe",
                &format!("jane{i}@x.com"),
            ))
            .await
            .unwrap();
    }

    let employees = store.list().await.unwrap();
    assert_eq!(employees.len(), 1000);
}
