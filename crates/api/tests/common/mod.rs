//! Shared helpers for HTTP-level integration tests.
//!
//! Builds the real application router (same middleware stack as
//! production) on top of the per-test database pool, plus request and
//! seeding helpers.

#![allow(dead_code)]

use std::sync::Arc;

use axum::body::Body;
use axum::http::{header, Request, Response, StatusCode};
use axum::Router;
use http_body_util::BodyExt;
use sqlx::PgPool;
use tower::ServiceExt;

use medlms_api::auth::jwt::{generate_access_token, JwtConfig};
use medlms_api::auth::password::hash_password;
use medlms_api::config::ServerConfig;
use medlms_api::router::build_app_router;
use medlms_api::state::AppState;
use medlms_core::content::LessonBody;
use medlms_core::roles::Role;
use medlms_core::types::DbId;
use medlms_db::models::content_item::{ContentItem, CreateContentItem};
use medlms_db::models::course::{Course, CreateCourse};
use medlms_db::models::module::{CreateModule, Module};
use medlms_db::models::tenant::{CreateTenant, Tenant};
use medlms_db::models::user::{CreateUser, User};
use medlms_db::repositories::{
    ContentItemRepo, CourseRepo, EnrollmentRepo, ModuleRepo, TenantRepo, UserRepo,
};
use medlms_db::models::enrollment::CreateEnrollment;

/// Build a test `ServerConfig` with safe defaults and a fixed JWT secret.
pub fn test_config() -> ServerConfig {
    ServerConfig {
        host: "127.0.0.1".to_string(),
        port: 0,
        cors_origins: vec!["http://localhost:5173".to_string()],
        request_timeout_secs: 30,
        jwt: JwtConfig {
            secret: "integration-test-secret-do-not-use-in-production".to_string(),
            access_token_expiry_mins: 60,
        },
    }
}

/// Build the full application router with all middleware layers, using the
/// given database pool.
///
/// This is the exact router construction `main.rs` uses, so integration
/// tests exercise the same middleware stack (CORS, request ID, timeout,
/// tracing, panic recovery) as production.
pub fn build_test_app(pool: PgPool) -> Router {
    let state = AppState {
        pool,
        config: Arc::new(test_config()),
    };
    build_app_router(state)
}

// ---------------------------------------------------------------------------
// Request helpers
// ---------------------------------------------------------------------------

/// Send a GET request without authentication.
pub async fn get(app: Router, uri: &str) -> Response<Body> {
    app.oneshot(
        Request::builder()
            .method("GET")
            .uri(uri)
            .body(Body::empty())
            .unwrap(),
    )
    .await
    .unwrap()
}

/// Send a GET request with a bearer token.
pub async fn get_auth(app: Router, uri: &str, token: &str) -> Response<Body> {
    app.oneshot(
        Request::builder()
            .method("GET")
            .uri(uri)
            .header(header::AUTHORIZATION, format!("Bearer {token}"))
            .body(Body::empty())
            .unwrap(),
    )
    .await
    .unwrap()
}

/// Send a POST request with a JSON body, without authentication.
pub async fn post_json(app: Router, uri: &str, body: serde_json::Value) -> Response<Body> {
    app.oneshot(
        Request::builder()
            .method("POST")
            .uri(uri)
            .header(header::CONTENT_TYPE, "application/json")
            .body(Body::from(body.to_string()))
            .unwrap(),
    )
    .await
    .unwrap()
}

/// Send a POST request with a JSON body and a bearer token.
pub async fn post_json_auth(
    app: Router,
    uri: &str,
    body: serde_json::Value,
    token: &str,
) -> Response<Body> {
    app.oneshot(
        Request::builder()
            .method("POST")
            .uri(uri)
            .header(header::CONTENT_TYPE, "application/json")
            .header(header::AUTHORIZATION, format!("Bearer {token}"))
            .body(Body::from(body.to_string()))
            .unwrap(),
    )
    .await
    .unwrap()
}

/// Send a POST request with no body and a bearer token.
pub async fn post_auth(app: Router, uri: &str, token: &str) -> Response<Body> {
    app.oneshot(
        Request::builder()
            .method("POST")
            .uri(uri)
            .header(header::AUTHORIZATION, format!("Bearer {token}"))
            .body(Body::empty())
            .unwrap(),
    )
    .await
    .unwrap()
}

/// Read a response body to completion and parse it as JSON.
pub async fn body_json(response: Response<Body>) -> serde_json::Value {
    let bytes = response
        .into_body()
        .collect()
        .await
        .expect("body should collect")
        .to_bytes();
    serde_json::from_slice(&bytes).expect("body should be valid JSON")
}

/// Assert a response has the expected status, returning the parsed body.
pub async fn assert_status(
    response: Response<Body>,
    expected: StatusCode,
) -> serde_json::Value {
    let status = response.status();
    let json = body_json(response).await;
    assert_eq!(status, expected, "unexpected status, body: {json}");
    json
}

// ---------------------------------------------------------------------------
// Seeding helpers
// ---------------------------------------------------------------------------

/// Plaintext password used for all seeded test users.
pub const TEST_PASSWORD: &str = "test_password_123!";

/// Create a tenant directly in the database.
pub async fn seed_tenant(pool: &PgPool, name: &str) -> Tenant {
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

/// Create a user directly in the database with [`TEST_PASSWORD`].
pub async fn seed_user(pool: &PgPool, tenant_id: DbId, email: &str, role: Role) -> User {
    let hashed = hash_password(TEST_PASSWORD).expect("hashing should succeed");
    UserRepo::create(
        pool,
        &CreateUser {
            tenant_id,
            email: email.to_string(),
            password_hash: hashed,
            full_name: "Test User".to_string(),
            phone: None,
            role,
        },
    )
    .await
    .expect("user creation should succeed")
}

/// Issue a bearer token for a seeded user, signed with the test secret.
pub fn token_for(user: &User) -> String {
    generate_access_token(user.id, user.role, &test_config().jwt)
        .expect("token generation should succeed")
}

/// Create an active course directly in the database.
pub async fn seed_course(pool: &PgPool, tenant_id: DbId, title: &str) -> Course {
    CourseRepo::create(
        pool,
        &CreateCourse {
            tenant_id,
            dept_id: None,
            title: title.to_string(),
            code: None,
            description: Some(format!("{title} syllabus")),
            faculty_name: Some("Dr. Test Faculty".to_string()),
        },
    )
    .await
    .expect("course creation should succeed")
}

/// Enroll a student in a course.
pub async fn seed_enrollment(pool: &PgPool, course_id: DbId, student_id: DbId, tenant_id: DbId) {
    EnrollmentRepo::create(
        pool,
        &CreateEnrollment {
            course_id,
            student_id,
            tenant_id,
        },
    )
    .await
    .expect("enrollment creation should succeed");
}

/// Create a module inside a course.
pub async fn seed_module(
    pool: &PgPool,
    tenant_id: DbId,
    course_id: DbId,
    title: &str,
    sequence_order: i32,
) -> Module {
    ModuleRepo::create(
        pool,
        &CreateModule {
            tenant_id,
            course_id,
            title: title.to_string(),
            sequence_order,
        },
    )
    .await
    .expect("module creation should succeed")
}

/// Create a lesson with the given body inside a module.
pub async fn seed_lesson(
    pool: &PgPool,
    tenant_id: DbId,
    module_id: DbId,
    title: &str,
    sequence_order: i32,
    body: LessonBody,
) -> ContentItem {
    ContentItemRepo::create(
        pool,
        &CreateContentItem {
            tenant_id,
            module_id,
            title: title.to_string(),
            body,
            sequence_order,
        },
    )
    .await
    .expect("lesson creation should succeed")
}

/// Create a video lesson with a 10-minute duration.
pub async fn seed_video_lesson(
    pool: &PgPool,
    tenant_id: DbId,
    module_id: DbId,
    title: &str,
    sequence_order: i32,
) -> ContentItem {
    seed_lesson(
        pool,
        tenant_id,
        module_id,
        title,
        sequence_order,
        LessonBody::Video {
            file_url: format!("https://cdn.test/videos/{sequence_order}.mp4"),
            duration_minutes: 10,
        },
    )
    .await
}
