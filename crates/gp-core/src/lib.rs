//! gp-core: shared foundation for graphpath.
//!
//! Contains:
//! - numeric (Real + cost helpers)
//! - error (shared error types)

pub mod error;
pub mod numeric;

// Re-exports: nice ergonomics for downstream crates
pub use error::{CoreError, CoreResult};
pub use numeric::*;
