use thiserror::Error;

/// Errors produced at the edges of the estimator.
///
/// The derived-value queries on [`crate::Estimate`] never return these; they
/// come from the validating constructors, policy loading, and the integer
/// summary.
#[derive(Error, Debug)]
pub enum EstimateError {
    /// A raw input is `NaN` or infinite.
    #[error("Non-finite input: {field} = {value}")]
    NonFiniteInput { field: &'static str, value: f64 },

    /// A raw input that must be non-negative is negative.
    #[error("Negative input: {field} = {value} (must be >= 0)")]
    NegativeInput { field: &'static str, value: f64 },

    /// The fee constants or policy are invalid (e.g. negative gas buffer).
    #[error("Invalid fee constants: {reason}")]
    InvalidConstants { reason: String },

    /// A derived figure cannot be expressed as a whole `u64` amount.
    #[error("Derived value {field} = {value} is not representable as u64")]
    NonRepresentable { field: &'static str, value: f64 },

    /// Reading or writing a policy file failed.
    #[error("Policy file I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// A policy document could not be parsed or serialized.
    #[error("Policy file format error: {0}")]
    Yaml(#[from] serde_yaml::Error),
}
