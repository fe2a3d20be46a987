//! # Election scenarios
//!
//! Multi-node runs of the election simulator with real worker threads. Every
//! scenario is a `run()` function that panics on a failed expectation.

#[macro_use]
extern crate log;

pub mod cases;
pub mod steps;
