//! Services orchestrating multi-table operations.

pub mod template_linker;

pub use template_linker::TemplateLinker;
