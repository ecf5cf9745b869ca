//! Small, pure utility functions for field-deployed tooling
//!
//! A grab bag of independently testable helpers: numeric token parsing,
//! threshold and geo-fence crossing detection, IPv4 pool normalization,
//! bit manipulation, Luhn checksums, stepping ranges, slice and string
//! tools, JSON tree helpers, and (with `std`) random ids, time guessing,
//! and pass-through tracing.
//!
//! Everything in the core modules is `no_std + alloc`; float math goes
//! through `libm` so results match across hosts and MCUs.
//!
//! ```
//! use fieldkit::{haversine, GeoPoint, parse_num_or, Token};
//!
//! let bna = GeoPoint::new(36.12, -86.67);
//! let lax = GeoPoint::new(33.94, -118.40);
//! assert_eq!(haversine(bna, lax), 2887.26);
//!
//! assert_eq!(parse_num_or(0.0, Token::Text("0x1F")), 31.0);
//! ```

#![cfg_attr(not(feature = "std"), no_std)]
#![deny(unsafe_code)]
#![warn(missing_docs)]

extern crate alloc;

pub mod bits;
pub mod checksum;
pub mod combinators;
pub mod encode;
pub mod errors;
pub mod geo;
pub mod ipv4;
pub mod json;
pub mod numbers;
pub mod parse;
pub mod range;
pub mod seq;
pub mod strings;
pub mod threshold;

#[cfg(feature = "std")]
pub mod random;
#[cfg(feature = "std")]
pub mod time;
#[cfg(feature = "std")]
pub mod trace;

// Public API
pub use errors::{ToolkitError, ToolkitResult};
pub use geo::{haversine, GeoFence, GeoPoint};
pub use parse::{maybe_bool, maybe_number, parse_int_or, parse_num_or, Token};
pub use threshold::{did_fall_through, did_rise_through, Band};

/// Crate version string
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
