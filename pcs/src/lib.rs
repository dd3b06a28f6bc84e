//! Polynomial commitment openings and low-degree proximity proofs.
//!
//! Three protocols share the machinery in this crate:
//! - [`shplonk`]: batched KZG openings of several polynomials at distinct
//!   points, checked with a single pairing equation;
//! - [`fri`]: a radix-2 proof of proximity attesting that a committed
//!   function is close to a low-degree polynomial;
//! - [`sis`]: a Ring-SIS algebraic hash in `Z_p[X]/(X^d+1)`.
#![forbid(unsafe_code)]
#![warn(unused, future_incompatible, nonstandard_style, rust_2018_idioms)]
#![allow(clippy::upper_case_acronyms, clippy::needless_range_loop)]

/// Module for error handling
pub mod errors;

/// Module for radix-2 FFT evaluation domains
pub mod fft;

/// Module for polynomials and the KZG commitment scheme
pub mod poly_commit;

/// Module for the Shplonk batched opening protocol
pub mod shplonk;

/// Module for the radix-2 FRI proof of proximity
pub mod fri;

/// Module for the Ring-SIS hash
pub mod sis;
