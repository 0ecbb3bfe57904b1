//! Repository layer.
//!
//! Each repository is a zero-sized struct providing async methods that
//! accept `&PgPool` as the first argument. Reads of tenant-scoped entities
//! always filter by tenant id; cross-tenant leakage is the primary
//! integrity risk in this system.

pub mod batch_repo;
pub mod content_item_repo;
pub mod course_repo;
pub mod department_repo;
pub mod enrollment_repo;
pub mod lesson_progress_repo;
pub mod module_repo;
pub mod student_detail_repo;
pub mod tenant_repo;
pub mod user_repo;

pub use batch_repo::BatchRepo;
pub use content_item_repo::ContentItemRepo;
pub use course_repo::CourseRepo;
pub use department_repo::DepartmentRepo;
pub use enrollment_repo::EnrollmentRepo;
pub use lesson_progress_repo::LessonProgressRepo;
pub use module_repo::ModuleRepo;
pub use student_detail_repo::StudentDetailRepo;
pub use tenant_repo::TenantRepo;
pub use user_repo::UserRepo;
