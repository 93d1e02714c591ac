//! Domain model structs and DTOs.
//!
//! Each submodule contains:
//! - A `FromRow` + `Serialize` entity struct matching the database row
//! - A `Deserialize` create DTO for inserts
//! - Aggregate row types for the group-by-count collision probes

pub mod application;
pub mod host;
pub mod item;
pub mod linkage;
pub mod trigger;
