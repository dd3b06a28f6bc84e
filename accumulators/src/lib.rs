//! Accumulators for the opal library.
#![forbid(unsafe_code)]
#![warn(unused, future_incompatible, nonstandard_style, rust_2018_idioms)]

/// Module for error handling
pub mod errors;

/// Module for the Merkle tree accumulator
pub mod merkle_tree;
