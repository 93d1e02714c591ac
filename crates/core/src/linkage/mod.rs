//! Host/template linkage graph and its consistency checks.
//!
//! A linkage edge `(target, source)` records that the template `source`
//! is attached to the host or template `target`. The checks here keep the
//! relation acyclic and free of double linkages: no template may be
//! reachable from a target through more than one path.

pub mod cycle;
pub mod graph;
pub mod validate;

pub use cycle::check_circular_and_double_linkage;
pub use graph::{LinkageEdge, LinkageGraph};
pub use validate::{check_duplicate_template_ids, common_sources};
