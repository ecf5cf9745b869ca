//! Error types for the few fallible operations in the toolkit
//!
//! Almost everything in this crate is a total function: malformed input is
//! absorbed into a sentinel (`None`, `false`, or a caller-supplied default)
//! rather than reported. The exceptions are explicit misuse of an API, such
//! as a zero step handed to the range builder or an odd-length hex string.
//! Those surface as `ToolkitError`.
//!
//! Variants are kept small and `Copy` so they can be returned from hot paths
//! and matched without allocation: no `String`, only inline data.

use thiserror_no_std::Error;

/// Result type for the fallible toolkit operations
pub type ToolkitResult<T> = Result<T, ToolkitError>;

/// Errors raised on explicit API misuse
#[derive(Error, Debug, Clone, Copy, PartialEq)]
pub enum ToolkitError {
    /// Step size of a range must be a finite, non-zero number
    #[error("invalid step size: {step}")]
    InvalidStep {
        /// The offending step value
        step: f64,
    },

    /// Range bounds must be finite numbers
    #[error("range bounds must be finite, got [{begin}, {end}]")]
    NonFiniteBound {
        /// Requested first value
        begin: f64,
        /// Requested last value
        end: f64,
    },

    /// Hex strings decode two characters per byte
    #[error("hex string length must be a multiple of 2, got {len}")]
    OddHexLength {
        /// Length of the rejected input
        len: usize,
    },

    /// A character outside `[0-9a-fA-F]` in a hex string
    #[error("invalid hex digit at offset {offset}")]
    InvalidHexDigit {
        /// Byte offset of the rejected character
        offset: usize,
    },
}
