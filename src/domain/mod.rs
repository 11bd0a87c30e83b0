//! Domain layer containing business logic and domain types.
//!
//! # Module Organization
//!
//! - `foundation` - Shared domain primitives (value objects, IDs, errors)
//! - `catalog` - The fixed 22-entry architecture characteristics catalog
//! - `workshop` - The workshop session aggregate and its phase state machine

pub mod catalog;
pub mod foundation;
pub mod workshop;
