//! Advent of Code 2023 puzzle solutions with automatic registration
//!
//! Every day module derives `AutoRegisterSolver`, so linking this crate is
//! enough for `SolverRegistryBuilder::register_all_plugins` to find them.

pub mod day_1;
pub mod day_10;
pub mod day_11;
pub mod day_2;
pub mod day_3;
pub mod day_4;
pub mod day_5;
pub mod day_6;
pub mod day_7;
pub mod day_8;
pub mod day_9;

mod utils;
