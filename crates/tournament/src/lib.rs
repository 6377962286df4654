//! Match runner for Banqi engines
//!
//! This crate provides infrastructure for:
//! - Running seeded matches between engines
//! - Tallying wins, losses and ply-capped draws
//! - Saving and reloading JSON match reports
//!
//! # Usage
//!
//! ```bash
//! # Greedy against the random baseline
//! cargo run -p tournament -- match greedy random --games 100 --seed 7
//! ```

mod match_runner;
mod results;

#[cfg(test)]
mod match_runner_tests;

pub use match_runner::*;
pub use results::*;
