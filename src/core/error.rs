//! Error types for SeedSim.

use thiserror::Error;

/// Result type alias for SeedSim operations.
pub type Result<T> = std::result::Result<T, SimError>;

/// Error types for the simulation engine.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum SimError {
    /// An outcome table is malformed (probabilities do not sum to one, negative entries, ...).
    #[error("Invalid {table} outcome distribution: {message}")]
    InvalidDistribution { table: String, message: String },

    /// Invalid simulation parameter value.
    #[error("Invalid parameter: {message}")]
    InvalidParameter { message: String },

    /// Division by zero error.
    #[error("Division by zero in {context}")]
    DivisionByZero { context: String },
}

impl SimError {
    /// Create an invalid distribution error.
    pub fn invalid_distribution(table: impl Into<String>, message: impl Into<String>) -> Self {
        Self::InvalidDistribution {
            table: table.into(),
            message: message.into(),
        }
    }

    /// Create an invalid parameter error.
    pub fn invalid_parameter(message: impl Into<String>) -> Self {
        Self::InvalidParameter {
            message: message.into(),
        }
    }

    /// Create a division by zero error.
    pub fn division_by_zero(context: impl Into<String>) -> Self {
        Self::DivisionByZero {
            context: context.into(),
        }
    }

    /// Whether this error comes from configuration validation.
    pub fn is_configuration(&self) -> bool {
        matches!(
            self,
            Self::InvalidDistribution { .. } | Self::InvalidParameter { .. }
        )
    }
}
