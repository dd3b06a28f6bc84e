/// Module for field polynomials and the slice-level polynomial kernel
pub mod field_polynomial;

/// Module for the KZG polynomial commitment scheme
pub mod kzg;

/// Module for the Fiat-Shamir transcript discipline
pub mod transcript;
