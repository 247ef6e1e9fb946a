use thiserror::Error;

/// Errors raised while configuring a tree.
///
/// Inserting a duplicate or removing a missing value is not an error; those operations report
/// the outcome through their `bool` return value instead.
#[derive(Clone, Copy, Debug, Error, PartialEq)]
#[non_exhaustive]
pub enum Error {
    /// The requested balance factor lies outside `[0.5, 1.0]` (or is NaN).
    #[error("invalid configuration: balance factor {balance_factor} is outside [0.5, 1.0]")]
    InvalidConfiguration {
        /// The rejected factor.
        balance_factor: f64,
    },
}

/// Convenience alias used by the fallible constructors.
pub type Result<T> = core::result::Result<T, Error>;
