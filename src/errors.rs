//! Contains error types used throughout the library.



//		Packages

use thiserror::Error as ThisError;



//		Enums

//		ConversionError															
/// Represents all possible conversion errors that can occur.
#[derive(Clone, Debug, Eq, PartialEq, ThisError)]
#[non_exhaustive]
pub enum ConversionError {
	/// The incoming value is empty, e.g. an empty string.
	#[error("Empty value")]
	EmptyValue,
	
	/// The incoming value contains a character that is not a digit in any
	/// supported base.
	#[error("Invalid digit: {0}")]
	InvalidDigit(char),
	
	/// The incoming value contains a digit that is not valid for the base in
	/// use.
	#[error("Invalid digit for base {1}: {0}")]
	InvalidRadix(char, u32),
	
	/// The requested base is outside the supported range of 2 to 36.
	#[error("Radix must be between 2 and 36; got {0}")]
	RadixOutOfRange(u32),
	
	/// The incoming value is negative, which is not allowed by the destination
	/// type.
	#[error("Value is negative")]
	ValueIsNegative,
	
	/// The incoming value is too large to be converted to the destination type.
	#[error("Value too large")]
	ValueTooLarge,
}

//		StreamError																
/// Represents failures when reading from a byte stream.
#[derive(Clone, Debug, Eq, PartialEq, ThisError)]
#[non_exhaustive]
pub enum StreamError {
	/// There are not enough bytes left in the stream to satisfy a read.
	#[error("End of stream: needed {needed} bytes at position {position}, but only {available} available")]
	EndOfStream {
		/// The position the read was attempted at.
		position:  usize,
		
		/// The number of bytes the read required.
		needed:    usize,
		
		/// The number of bytes remaining from the position onwards.
		available: usize,
	},
}
