//! Backtracking search and complexity analysis for the Sudokugen engine.
//!
//! [`BacktrackSolver`] completes partial grids and counts their solutions
//! with an early-exit cap; [`analyze`] scores a puzzle grid's complexity
//! and produces difficulty-keyed hints. Both consult the validity
//! predicate of [`sudokugen_core::Board`], so the rules can never diverge
//! between components.

pub use self::{
    analysis::{ComplexityReport, analyze},
    backtrack::BacktrackSolver,
};

mod analysis;
mod backtrack;
