//! Characteristic catalog - the fixed set of architecture quality attributes.
//!
//! The catalog is read-only and externally defined: exactly 22 entries,
//! identified by name, supplied once at startup and never mutated by the
//! workshop engine.

mod catalog;
mod characteristic;

pub use catalog::{Catalog, CATALOG_SIZE};
pub use characteristic::Characteristic;
