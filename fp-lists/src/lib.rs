//! # Functional List Exercises
//!
//! Structural-recursion exercises over [`fp_common::PersistentList`]:
//!
//! - [`pattern_matching`]: recursion written as `match` over list shapes,
//!   guard-based early exit, and first-match-wins dispatch
//! - [`data_sharing`]: front-of-list operations that share instead of copy,
//!   in recursive and iterative formulations
//! - [`folds`]: deriving the other operations from `fold_left` and
//!   `fold_right`
//!
//! The library crate carries the loop-based implementations; here the
//! recursive formulations are spelled out next to them so the stack-depth
//! trade-off is visible.

pub mod data_sharing;
pub mod folds;
pub mod pattern_matching;
