//! The crate for algebra for the opal library, which unifies the interfaces
//! of the underlying curve arithmetic behind a small trait vocabulary.
#![deny(unused_import_braces, unused_qualifications, trivial_casts)]
#![deny(trivial_numeric_casts)]
#![deny(stable_features, unreachable_pub, non_shorthand_field_patterns)]
#![deny(unused_attributes, unused_mut)]
#![deny(unused_comparisons, bare_trait_objects, unused_must_use)]
#![forbid(unsafe_code)]
#![warn(unused, future_incompatible, nonstandard_style, rust_2018_idioms)]
#![allow(clippy::op_ref, clippy::upper_case_acronyms)]

/// Module for the BN254 curve
pub mod bn254;

/// Module for error handling
pub mod errors;

/// Module for traits
pub mod traits;

/// Module for serialization of scalars and group elements
pub mod serialization;

/// Module for utils
pub mod utils;

/// Module for prelude
#[doc(hidden)]
pub mod prelude;

/// Module for test rng
pub mod rand_helper;

#[doc(hidden)]
pub use ark_std::{borrow, cmp, fmt, hash, iter, ops, rand, One, UniformRand, Zero};
