//! mcf-core: shared foundation for the min-cost flow workspace.
//!
//! Contains:
//! - ids (compact node/edge identifiers)
//! - numeric (flow/cost scalars, infinity sentinels, checked arithmetic)
//! - error (shared error type)

pub mod error;
pub mod ids;
pub mod numeric;

pub use error::{McfError, McfResult};
pub use ids::*;
pub use numeric::*;
