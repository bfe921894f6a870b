//! # Ducktype Checker
//!
//! Structural compatibility checking for shapes: interface-style
//! extension (`merge_shapes`) and duck-typing assignability
//! (`check_assignable`). Both operations are pure, synchronous passes
//! over immutable inputs; failures come back as values, never panics.

mod assign;
mod checker;
mod env;
mod error;
mod merge;
mod value;

// Re-export public API
pub use assign::{check_assignable, is_assignable, tag_assignable};
pub use checker::ShapeChecker;
pub use env::ShapeEnv;
pub use error::{AssignabilityError, CompositionError, DeclareError};
pub use merge::{merge_all, merge_shapes, normalize_fields};
pub use value::{Record, Value};

// =============================================================================
// Tests
// =============================================================================
