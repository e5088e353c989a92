//! Repository layer — entity-scoped database operations.
//!
//! All public functions are re-exported here so callers go through
//! `crate::db` without caring about the sub-module split.

mod account;
mod food_scan;
mod goal;
mod health_record;
mod member;
mod preference;
mod report;
mod risk_history;

// Re-export all public items from sub-modules
pub use account::*;
pub use food_scan::*;
pub use goal::*;
pub use health_record::*;
pub use member::*;
pub use preference::*;
pub use report::*;
pub use risk_history::*;
