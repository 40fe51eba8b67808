// Copyright (c) 2022 Bastiaan Marinus van de Weerd

//! Helpers shared between Advent of Code solutions: a symbol grid with a
//! pluggable breadth-first explorer, the 2019 “Intcode computer”, a small
//! simplex solver, and some geometry and number theory odds and ends.
//!
//! Build with `--cfg LOGGING` to trace explorer waves, executed instructions
//! and simplex pivots to stdout; `--cfg BENCHING` (nightly) enables benches.

#![cfg_attr(BENCHING, feature(test))]

#[macro_use]
mod util;

pub mod char_map;
pub mod explorer;
pub mod geometry;
pub mod intcode;
pub mod linear_solver;
pub mod numbers;

pub use char_map::CharMap;
pub use explorer::{AllowedValues, FindAllClosest, MapExplorer, ProgressRules};
pub use geometry::{HyperRect, Pos};
pub use intcode::{InstructionSet, Processor, Program};
pub use linear_solver::{Bounds, Direction, LinearProblem};
