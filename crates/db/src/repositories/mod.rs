//! Repository layer.
//!
//! Each repository is a zero-sized struct providing async methods that
//! accept `&PgPool` (standalone reads/writes) or an open transaction
//! (reads and writes that must share the link operation's snapshot).

pub mod application_repo;
pub mod host_repo;
pub mod item_repo;
pub mod linkage_repo;
pub mod template_repo;
pub mod trigger_repo;

pub use application_repo::ApplicationRepo;
pub use host_repo::HostRepo;
pub use item_repo::ItemRepo;
pub use linkage_repo::LinkageRepo;
pub use template_repo::TemplateRepo;
pub use trigger_repo::TriggerRepo;

/// Shorthand for the transaction handle threaded through link/unlink.
pub type PgTx<'a> = sqlx::Transaction<'a, sqlx::Postgres>;
