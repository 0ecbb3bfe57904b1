//! Integration tests for the repository layer against a real database.
//!
//! Exercises the full entity hierarchy (tenant -> user -> course ->
//! module -> content item), the unique constraints, and the lesson
//! progress upsert.

use medlms_core::content::{ContentKind, LessonBody};
use medlms_core::roles::Role;
use medlms_core::types::DbId;
use medlms_db::models::batch::CreateBatch;
use medlms_db::models::content_item::CreateContentItem;
use medlms_db::models::course::CreateCourse;
use medlms_db::models::department::CreateDepartment;
use medlms_db::models::enrollment::CreateEnrollment;
use medlms_db::models::module::CreateModule;
use medlms_db::models::student_detail::CreateStudentDetail;
use medlms_db::models::tenant::CreateTenant;
use medlms_db::models::user::CreateUser;
use medlms_db::repositories::{
    BatchRepo, ContentItemRepo, CourseRepo, DepartmentRepo, EnrollmentRepo, LessonProgressRepo,
    ModuleRepo, StudentDetailRepo, TenantRepo, UserRepo,
};
use sqlx::PgPool;

// ---------------------------------------------------------------------------
// Helpers
// ---------------------------------------------------------------------------

async fn create_tenant(pool: &PgPool, name: &str) -> medlms_db::models::tenant::Tenant {
    TenantRepo::create(
        pool,
        &CreateTenant {
            name: name.to_string(),
            domain: None,
        },
    )
    .await
    .expect("tenant creation should succeed")
}

async fn create_user(
    pool: &PgPool,
    tenant_id: DbId,
    email: &str,
    role: Role,
) -> medlms_db::models::user::User {
    UserRepo::create(
        pool,
        &CreateUser {
            tenant_id,
            email: email.to_string(),
            password_hash: "$argon2id$fake$hash".to_string(),
            full_name: "Test User".to_string(),
            phone: None,
            role,
        },
    )
    .await
    .expect("user creation should succeed")
}

async fn create_course(
    pool: &PgPool,
    tenant_id: DbId,
    title: &str,
) -> medlms_db::models::course::Course {
    CourseRepo::create(
        pool,
        &CreateCourse {
            tenant_id,
            dept_id: None,
            title: title.to_string(),
            code: None,
            description: None,
            faculty_name: None,
        },
    )
    .await
    .expect("course creation should succeed")
}

// ---------------------------------------------------------------------------
// Hierarchy
// ---------------------------------------------------------------------------

/// Create the full hierarchy and read every level back.
#[sqlx::test]
async fn test_full_hierarchy(pool: PgPool) {
    let tenant = create_tenant(&pool, "Carver Medical College").await;
    let student = create_user(&pool, tenant.id, "student@test.com", Role::Student).await;

    let dept = DepartmentRepo::create(
        &pool,
        &CreateDepartment {
            tenant_id: tenant.id,
            name: "Anatomy".to_string(),
            head_user_id: None,
        },
    )
    .await
    .expect("department creation should succeed");

    let batch = BatchRepo::create(
        &pool,
        &CreateBatch {
            tenant_id: tenant.id,
            name: "MBBS Batch of 2024".to_string(),
            start_year: 2024,
        },
    )
    .await
    .expect("batch creation should succeed");

    let detail = StudentDetailRepo::create(
        &pool,
        &CreateStudentDetail {
            user_id: student.id,
            batch_id: Some(batch.id),
            enrollment_no: Some("MBBS-2024-001".to_string()),
        },
    )
    .await
    .expect("student detail creation should succeed");
    assert_eq!(detail.batch_id, Some(batch.id));

    let course = CourseRepo::create(
        &pool,
        &CreateCourse {
            tenant_id: tenant.id,
            dept_id: Some(dept.id),
            title: "Human Anatomy".to_string(),
            code: Some("ANAT-101".to_string()),
            description: None,
            faculty_name: None,
        },
    )
    .await
    .expect("course creation should succeed");
    assert!(course.is_active, "courses default to active");

    let module = ModuleRepo::create(
        &pool,
        &CreateModule {
            tenant_id: tenant.id,
            course_id: course.id,
            title: "Thorax".to_string(),
            sequence_order: 1,
        },
    )
    .await
    .expect("module creation should succeed");

    let lesson = ContentItemRepo::create(
        &pool,
        &CreateContentItem {
            tenant_id: tenant.id,
            module_id: module.id,
            title: "Heart Intro".to_string(),
            body: LessonBody::Video {
                file_url: "https://cdn.test/heart.mp4".to_string(),
                duration_minutes: 25,
            },
            sequence_order: 1,
        },
    )
    .await
    .expect("lesson creation should succeed");

    assert_eq!(lesson.kind, ContentKind::Video);
    assert_eq!(lesson.duration_minutes, Some(25));
    assert_eq!(
        lesson.body().expect("body should reassemble"),
        LessonBody::Video {
            file_url: "https://cdn.test/heart.mp4".to_string(),
            duration_minutes: 25,
        }
    );

    // Read-back through the tenant-scoped finders.
    let found = ModuleRepo::find_in_tenant(&pool, module.id, tenant.id)
        .await
        .expect("lookup should succeed");
    assert!(found.is_some());

    let found = ContentItemRepo::find_in_tenant(&pool, lesson.id, tenant.id)
        .await
        .expect("lookup should succeed");
    assert!(found.is_some());

    let listing = DepartmentRepo::list_by_tenant(&pool, tenant.id)
        .await
        .expect("listing should succeed");
    assert_eq!(listing.len(), 1);
}

/// Tenant-scoped finders miss rows belonging to another tenant.
#[sqlx::test]
async fn test_finders_are_tenant_scoped(pool: PgPool) {
    let tenant_a = create_tenant(&pool, "College A").await;
    let tenant_b = create_tenant(&pool, "College B").await;

    let course = create_course(&pool, tenant_a.id, "Anatomy").await;
    let module = ModuleRepo::create(
        &pool,
        &CreateModule {
            tenant_id: tenant_a.id,
            course_id: course.id,
            title: "Thorax".to_string(),
            sequence_order: 1,
        },
    )
    .await
    .expect("module creation should succeed");

    let hit = CourseRepo::find_active_in_tenant(&pool, course.id, tenant_a.id)
        .await
        .expect("lookup should succeed");
    assert!(hit.is_some());

    let miss = CourseRepo::find_active_in_tenant(&pool, course.id, tenant_b.id)
        .await
        .expect("lookup should succeed");
    assert!(miss.is_none(), "foreign tenant must not resolve the course");

    let miss = ModuleRepo::find_in_tenant(&pool, module.id, tenant_b.id)
        .await
        .expect("lookup should succeed");
    assert!(miss.is_none(), "foreign tenant must not resolve the module");
}

// ---------------------------------------------------------------------------
// Unique constraints
// ---------------------------------------------------------------------------

/// A duplicate email is rejected even across tenants.
#[sqlx::test]
async fn test_email_unique_globally(pool: PgPool) {
    let tenant_a = create_tenant(&pool, "College A").await;
    let tenant_b = create_tenant(&pool, "College B").await;
    create_user(&pool, tenant_a.id, "taken@test.com", Role::Student).await;

    let result = UserRepo::create(
        &pool,
        &CreateUser {
            tenant_id: tenant_b.id,
            email: "taken@test.com".to_string(),
            password_hash: "$argon2id$fake$hash".to_string(),
            full_name: "Copycat".to_string(),
            phone: None,
            role: Role::Student,
        },
    )
    .await;

    let err = result.expect_err("duplicate email must be rejected");
    match err {
        sqlx::Error::Database(db_err) => {
            assert_eq!(db_err.constraint(), Some("uq_users_email"));
        }
        other => panic!("expected database error, got: {other:?}"),
    }
}

/// A duplicate enrollment number is rejected even across tenants.
#[sqlx::test]
async fn test_enrollment_no_unique_globally(pool: PgPool) {
    let tenant_a = create_tenant(&pool, "College A").await;
    let tenant_b = create_tenant(&pool, "College B").await;
    let student_a = create_user(&pool, tenant_a.id, "a@test.com", Role::Student).await;
    let student_b = create_user(&pool, tenant_b.id, "b@test.com", Role::Student).await;

    StudentDetailRepo::create(
        &pool,
        &CreateStudentDetail {
            user_id: student_a.id,
            batch_id: None,
            enrollment_no: Some("MBBS-2024-001".to_string()),
        },
    )
    .await
    .expect("first enrollment number should succeed");

    let result = StudentDetailRepo::create(
        &pool,
        &CreateStudentDetail {
            user_id: student_b.id,
            batch_id: None,
            enrollment_no: Some("MBBS-2024-001".to_string()),
        },
    )
    .await;

    let err = result.expect_err("duplicate enrollment number must be rejected");
    match err {
        sqlx::Error::Database(db_err) => {
            assert_eq!(
                db_err.constraint(),
                Some("uq_student_details_enrollment_no")
            );
        }
        other => panic!("expected database error, got: {other:?}"),
    }
}

/// A second enrollment for the same (course, student) pair is rejected.
#[sqlx::test]
async fn test_duplicate_course_enrollment_rejected(pool: PgPool) {
    let tenant = create_tenant(&pool, "Carver Medical College").await;
    let student = create_user(&pool, tenant.id, "student@test.com", Role::Student).await;
    let course = create_course(&pool, tenant.id, "Anatomy").await;

    let input = CreateEnrollment {
        course_id: course.id,
        student_id: student.id,
        tenant_id: tenant.id,
    };
    EnrollmentRepo::create(&pool, &input)
        .await
        .expect("first enrollment should succeed");

    let err = EnrollmentRepo::create(&pool, &input)
        .await
        .expect_err("duplicate enrollment must be rejected");
    match err {
        sqlx::Error::Database(db_err) => {
            assert_eq!(
                db_err.constraint(),
                Some("uq_course_enrollments_course_student")
            );
        }
        other => panic!("expected database error, got: {other:?}"),
    }

    let enrolled = EnrollmentRepo::exists(&pool, course.id, student.id, tenant.id)
        .await
        .expect("existence check should succeed");
    assert!(enrolled);
}

// ---------------------------------------------------------------------------
// Lesson progress upsert
// ---------------------------------------------------------------------------

/// Repeated completion converges on one row with `is_completed = true` and
/// a refreshed `completed_at`.
#[sqlx::test]
async fn test_mark_completed_converges_on_one_row(pool: PgPool) {
    let tenant = create_tenant(&pool, "Carver Medical College").await;
    let student = create_user(&pool, tenant.id, "student@test.com", Role::Student).await;
    let course = create_course(&pool, tenant.id, "Anatomy").await;
    let module = ModuleRepo::create(
        &pool,
        &CreateModule {
            tenant_id: tenant.id,
            course_id: course.id,
            title: "Thorax".to_string(),
            sequence_order: 1,
        },
    )
    .await
    .expect("module creation should succeed");
    let lesson = ContentItemRepo::create(
        &pool,
        &CreateContentItem {
            tenant_id: tenant.id,
            module_id: module.id,
            title: "Heart Intro".to_string(),
            body: LessonBody::Text {
                text_content: "The heart has four chambers.".to_string(),
            },
            sequence_order: 1,
        },
    )
    .await
    .expect("lesson creation should succeed");

    assert!(LessonProgressRepo::find(&pool, student.id, lesson.id)
        .await
        .expect("lookup should succeed")
        .is_none());

    let first = LessonProgressRepo::mark_completed(&pool, student.id, lesson.id)
        .await
        .expect("first completion should succeed");
    assert!(first.is_completed);
    let first_at = first.completed_at.expect("completed_at must be set");

    let second = LessonProgressRepo::mark_completed(&pool, student.id, lesson.id)
        .await
        .expect("second completion should succeed");
    assert_eq!(second.id, first.id, "upsert must reuse the existing row");
    assert!(second.is_completed);
    let second_at = second.completed_at.expect("completed_at must be set");
    assert!(second_at >= first_at, "re-completion refreshes the timestamp");

    let count: (i64,) = sqlx::query_as("SELECT count(*) FROM lesson_progress")
        .fetch_one(&pool)
        .await
        .expect("count should succeed");
    assert_eq!(count.0, 1);

    let completed = LessonProgressRepo::completed_ids_for_module(&pool, student.id, module.id)
        .await
        .expect("listing should succeed");
    assert_eq!(completed, vec![lesson.id]);
}

// ---------------------------------------------------------------------------
// Course listing and deactivation
// ---------------------------------------------------------------------------

/// `list_enrolled_active` returns only active enrolled courses, by title.
#[sqlx::test]
async fn test_list_enrolled_active(pool: PgPool) {
    let tenant = create_tenant(&pool, "Carver Medical College").await;
    let student = create_user(&pool, tenant.id, "student@test.com", Role::Student).await;

    let pharma = create_course(&pool, tenant.id, "Pharmacology").await;
    let anatomy = create_course(&pool, tenant.id, "Anatomy").await;
    let retired = create_course(&pool, tenant.id, "Phrenology").await;
    // Not enrolled.
    create_course(&pool, tenant.id, "Biochemistry").await;

    for course_id in [pharma.id, anatomy.id, retired.id] {
        EnrollmentRepo::create(
            &pool,
            &CreateEnrollment {
                course_id,
                student_id: student.id,
                tenant_id: tenant.id,
            },
        )
        .await
        .expect("enrollment should succeed");
    }

    let updated = CourseRepo::set_active(&pool, retired.id, false)
        .await
        .expect("deactivation should succeed");
    assert!(updated);

    let listing = CourseRepo::list_enrolled_active(&pool, student.id, tenant.id)
        .await
        .expect("listing should succeed");
    let titles: Vec<&str> = listing.iter().map(|c| c.title.as_str()).collect();
    assert_eq!(titles, vec!["Anatomy", "Pharmacology"]);
}

/// Deactivating a user flips the flag once and reports further calls as
/// no-ops.
#[sqlx::test]
async fn test_user_deactivate(pool: PgPool) {
    let tenant = create_tenant(&pool, "Carver Medical College").await;
    let user = create_user(&pool, tenant.id, "leaver@test.com", Role::Faculty).await;
    assert!(user.is_active);

    assert!(UserRepo::deactivate(&pool, user.id)
        .await
        .expect("deactivation should succeed"));
    assert!(!UserRepo::deactivate(&pool, user.id)
        .await
        .expect("repeat deactivation should succeed"));

    let reread = UserRepo::find_by_id(&pool, user.id)
        .await
        .expect("lookup should succeed")
        .expect("user must still exist");
    assert!(!reread.is_active);
}
