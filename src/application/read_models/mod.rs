//! Read models
//!
//! View-optimized structs giving a denormalized, scored representation
//! of the merged component records.

mod scored_component;

pub use scored_component::{DeveloperScore, ScoredComponent};
