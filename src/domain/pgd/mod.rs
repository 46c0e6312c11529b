//! PGD engine - the psychographic matrix calculator.
//!
//! A pure, deterministic pipeline from a validated birth date and sex
//! to the five named matrices of a [`Profile`]:
//!
//! 1. [`digits`] extracts zero-padded digit groups from the date.
//! 2. [`reduction`] folds groups into the arcana range.
//! 3. [`chart`] derives every point of the matrix once per input.
//! 4. [`registry`] tables bind each matrix cell to its formula.
//! 5. [`calculator`] evaluates the tables and assembles the profile.
//!
//! Nothing in this module performs I/O or holds state; concurrent
//! computations need no coordination.

mod calculator;
pub mod cell;
mod chart;
mod digits;
mod matrix;
mod profile;
mod reduction;
mod registry;
mod subject;

pub use calculator::{compute_profile, EngineError, PgdCalculator};
pub use cell::{AncestralCell, CrossroadsCell, MainCupCell, PeriodCell, TaskCell};
pub use digits::{DateComponent, DigitExtractor, DigitGroup};
pub use matrix::{CellSpec, Matrix, MatrixCell};
pub use profile::Profile;
pub use reduction::{Reducer, ReductionPolicy};
pub use subject::Subject;
