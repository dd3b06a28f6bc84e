use ark_std::{error, fmt};

/// Errors raised by the algebra crate.
#[derive(Debug, Copy, Clone, Eq, PartialEq)]
pub enum AlgebraError {
    /// Could not deserialize an object.
    DeserializationError,
    /// Could not serialize an object.
    SerializationError,
    /// The element has no multiplicative inverse.
    GroupInversionError,
    /// Unexpected parameter for method or function.
    ParameterError,
}

impl fmt::Display for AlgebraError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            AlgebraError::DeserializationError => "Could not deserialize object",
            AlgebraError::SerializationError => "Could not serialize object",
            AlgebraError::GroupInversionError => "Group element not invertible",
            AlgebraError::ParameterError => "Unexpected parameter for method or function",
        })
    }
}

impl error::Error for AlgebraError {}
