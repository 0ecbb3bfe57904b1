use sqlx::PgPool;

/// Full bootstrap test: connect, migrate, verify schema.
#[sqlx::test]
async fn test_full_bootstrap(pool: PgPool) {
    // Health check
    medlms_db::health_check(&pool).await.unwrap();

    // Every table the migrations create must exist and be queryable.
    let tables = [
        "tenants",
        "users",
        "departments",
        "batches",
        "student_details",
        "courses",
        "course_enrollments",
        "modules",
        "content_items",
        "lesson_progress",
        "attendance_records",
        "exams",
    ];

    for table in tables {
        let count: (i64,) = sqlx::query_as(&format!("SELECT COUNT(*) FROM {table}"))
            .fetch_one(&pool)
            .await
            .unwrap_or_else(|e| panic!("{table} query failed: {e}"));
        assert_eq!(count.0, 0, "{table} should start empty");
    }
}

/// The enum types back their columns: an invalid label is rejected.
#[sqlx::test]
async fn test_role_enum_closed(pool: PgPool) {
    let result = sqlx::query("SELECT 'JANITOR'::user_role").fetch_one(&pool).await;
    assert!(result.is_err(), "unknown role label must be rejected");

    let result: (String,) = sqlx::query_as("SELECT 'STUDENT'::user_role::text")
        .fetch_one(&pool)
        .await
        .unwrap();
    assert_eq!(result.0, "STUDENT");
}
