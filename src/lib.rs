//! The Halfword crate provides a 64-bit unsigned integer that is held as two
//! 32-bit halves.
//! 
//! The [`UInt64`] type exists for interoperability with peers whose numbers
//! are double-precision floats, and which therefore exchange 64-bit values as a
//! `low`/`high` pair of 32-bit words. It offers radix string conversion, a
//! memoized little-endian byte form, and a stream form which follows the
//! endianness of a [`ByteStream`].



//		Global configuration

//	Customisations of the standard linting configuration
#![allow(clippy::items_after_test_module, reason = "Not needed with separated tests")]

//	Lints specifically disabled for unit tests
#![cfg_attr(test, allow(
	non_snake_case,
	clippy::cast_lossless,
	clippy::cast_possible_truncation,
	clippy::cognitive_complexity,
	clippy::default_numeric_fallback,
	clippy::expect_used,
	clippy::indexing_slicing,
	clippy::let_underscore_must_use,
	clippy::let_underscore_untyped,
	clippy::missing_assert_message,
	clippy::missing_panics_doc,
	clippy::must_use_candidate,
	clippy::panic,
	clippy::unwrap_in_result,
	clippy::unwrap_used,
	reason = "Not useful in unit tests"
))]



//		Modules

mod errors;
mod stream;
mod uint64;



//		Packages

pub use errors::{ConversionError, StreamError};
pub use stream::{ByteArray, ByteStream, Endian};
pub use uint64::UInt64;
