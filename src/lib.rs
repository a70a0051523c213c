//! # CacheSweep
//!
//! Cachesweep is a benchmark sweep harness for an external cache simulator
//!
//! It drives the simulator across a grid of cache capacities and replacement policies, captures
//! the hit rate each invocation prints on its standard output, and accumulates the results into
//! a tab-delimited table ready for plotting
//!
//! The simulator itself is a separate, pre-built program; this crate only orchestrates it

/// Contains definitions for the JSON sweep configuration format
pub mod config;

/// Contains the subprocess plumbing for invoking the external simulator
pub mod runner;

/// Contains the sweep driver which produces the output table
pub mod sweep;

#[cfg(test)]
mod test;
