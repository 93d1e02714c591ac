//! Pure domain logic for host/template linkage validation.
//!
//! Nothing in this crate touches the database. The `linkage` module holds
//! the graph builder, the cycle / double-linkage detector, and the pure
//! halves of the conflict checks; `hostlink-db` feeds them with persisted
//! rows and turns their verdicts into transaction outcomes.

pub mod error;
pub mod linkage;
pub mod types;
