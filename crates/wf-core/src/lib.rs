//! wf-core: stable foundation for wayfare.
//!
//! Contains:
//! - ids (stable compact IDs for graph objects)
//! - error (shared error types)
//! - numeric (float helpers for the planning layer)

pub mod error;
pub mod ids;
pub mod numeric;

// Re-exports: nice ergonomics for downstream crates
pub use error::{WfError, WfResult};
pub use ids::*;
pub use numeric::*;
