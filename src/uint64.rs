//! Custom 64-bit unsigned integer type, held as two 32-bit halves.



//		Modules

#[cfg(test)]
#[path = "tests/uint64.rs"]
mod tests;



//		Packages

use crate::{
	errors::{ConversionError, StreamError},
	stream::{ByteArray, ByteStream, Endian},
};
use bytes::BytesMut;
use core::{
	cell::{OnceCell, RefCell},
	cmp::Ordering,
	error::Error,
	fmt::{Debug, Display, Formatter, self},
	hash::{Hash, Hasher},
	str::FromStr,
};
use log::{debug, trace};
use serde::{
	Deserialize,
	Deserializer,
	Serialize,
	Serializer,
	de::{Error as SerdeError, Visitor},
};
use std::{
	collections::BTreeMap,
	io::{Error as IoError, ErrorKind as IoErrorKind},
};
use tokio_postgres::types::{FromSql, IsNull, ToSql, Type, to_sql_checked};



//		Constants

/// The digit characters for every supported base, in order of value.
const DIGITS: &[u8; 36] = b"0123456789abcdefghijklmnopqrstuvwxyz";



//		Structs

//		UInt64																	
/// A 64-bit unsigned integer held as two 32-bit halves.
/// 
/// This type is used when exchanging 64-bit values with peers whose numbers
/// are double-precision floats, and which therefore cannot represent every
/// 64-bit magnitude exactly. Such peers carry the value as a `low` and `high`
/// pair of 32-bit words, and this type keeps that shape so that the byte and
/// string forms match theirs bit for bit. Internally, all conversion work is
/// done with native [`u64`] arithmetic.
/// 
/// The logical value is `high * 2^32 + low`.
/// 
/// # Memoization
/// 
/// The byte form returned by [`bytes()`](UInt64::bytes()) and the strings
/// returned by [`to_string_radix()`](UInt64::to_string_radix()) are computed
/// on first use and then cached. Every operation that changes the value clears
/// both caches, and [`gc()`](UInt64::gc()) clears them without changing the
/// value. Because the caches use interior mutability, this type is [`Send`]
/// but not [`Sync`].
/// 
/// A string parsed with [`from_string()`](UInt64::from_string()) is cached
/// verbatim (after lower-casing) for the base it was parsed in, so that
/// rendering it again in that base gives back exactly what was supplied,
/// including any leading zeros.
/// 
/// # Byte layouts
/// 
/// There are two distinct layouts, and they must not be confused:
/// 
///   1. The canonical form, from [`bytes()`](UInt64::bytes()), is always 8
///      bytes of little-endian data with `low` first and `high` second.
///   2. The stream form, from [`to_data()`](UInt64::to_data()) and
///      [`parse_data()`](UInt64::parse_data()), is `high` first and `low`
///      second, in whatever byte order the stream is set to.
/// 
/// # Zero
/// 
/// Rendering zero in any base gives an empty string, and this is also what
/// [`Display`] produces. Database text and serde output use the canonical
/// decimal form instead, in which zero is `"0"`.
/// 
pub struct UInt64 {
	/// The least-significant 32 bits.
	low:          u32,
	
	/// The most-significant 32 bits.
	high:         u32,
	
	/// The memoized canonical byte form.
	bytes_cache:  OnceCell<ByteArray>,
	
	/// The memoized string forms, keyed by base.
	string_cache: RefCell<BTreeMap<u32, String>>,
}

//󰭅		UInt64																	
impl UInt64 {
	//		Public constants													
	/// The number of bytes in the canonical byte form.
	pub const BYTES:         usize = 8;
	
	/// The base used when none is specified.
	pub const DEFAULT_RADIX: u32   = 10;
	
	/// The largest supported base.
	pub const MAX_RADIX:     u32   = 36;
	
	/// The smallest supported base.
	pub const MIN_RADIX:     u32   = 2;
	
	//		Constructors														
	
	//		new																	
	/// Creates a new [`UInt64`] from its halves.
	/// 
	/// # Parameters
	/// 
	/// * `low`  - The least-significant 32 bits.
	/// * `high` - The most-significant 32 bits.
	/// 
	#[must_use]
	pub const fn new(low: u32, high: u32) -> Self {
		Self {
			low,
			high,
			bytes_cache:  OnceCell::new(),
			string_cache: RefCell::new(BTreeMap::new()),
		}
	}
	
	//		from_str_radix														
	/// Strictly parses a string in the given base.
	/// 
	/// Unlike [`from_string()`](UInt64::from_string()), this validates every
	/// character and rejects values that do not fit. Surrounding whitespace is
	/// ignored, and underscores are allowed between digits. Letters may be in
	/// either case.
	/// 
	/// # Parameters
	/// 
	/// * `text`  - The string to parse.
	/// * `radix` - The base to parse in, from 2 to 36.
	/// 
	/// # Errors
	/// 
	///   - [`ConversionError::RadixOutOfRange`] if the base is unsupported.
	///   - [`ConversionError::EmptyValue`] if there are no digits.
	///   - [`ConversionError::InvalidDigit`] if a character is not a digit in
	///     any base.
	///   - [`ConversionError::InvalidRadix`] if a digit is too large for the
	///     base.
	///   - [`ConversionError::ValueTooLarge`] if the value exceeds 64 bits.
	/// 
	pub fn from_str_radix(text: &str, radix: u32) -> Result<Self, ConversionError> {
		if !(Self::MIN_RADIX..=Self::MAX_RADIX).contains(&radix) {
			return Err(ConversionError::RadixOutOfRange(radix));
		}
		
		let mut value  = 0_u64;
		let mut digits = 0_usize;
		for c in text.trim().chars() {
			if c == '_' {
				continue;
			}
			let digit = c.to_digit(Self::MAX_RADIX).ok_or(ConversionError::InvalidDigit(c))?;
			if digit >= radix {
				return Err(ConversionError::InvalidRadix(c, radix));
			}
			value = value
				.checked_mul(u64::from(radix))
				.and_then(|v| v.checked_add(u64::from(digit)))
				.ok_or(ConversionError::ValueTooLarge)?
			;
			digits += 1;
		}
		
		if digits == 0 {
			return Err(ConversionError::EmptyValue);
		}
		Ok(Self::from(value))
	}
	
	//		Public methods														
	
	//		as_u64																
	/// The combined logical value.
	#[must_use]
	pub fn as_u64(&self) -> u64 {
		(u64::from(self.high) << 32) | u64::from(self.low)
	}
	
	//		bytes																
	/// The canonical byte form: 8 bytes, little-endian, `low` then `high`.
	/// 
	/// This is built on first use and cached until the value changes. The
	/// returned array's position is left after the written data, so callers
	/// wanting to read from it should clone it and reposition the clone, or
	/// pass it through [`from_bytes()`](UInt64::from_bytes()), which seeks
	/// explicitly.
	/// 
	#[must_use]
	pub fn bytes(&self) -> &ByteArray {
		self.bytes_cache.get_or_init(|| {
			trace!("Building byte form of {self:?}");
			let mut bytes = ByteArray::with_endian(Endian::Little);
			bytes.write_u32(self.low);
			bytes.write_u32(self.high);
			bytes
		})
	}
	
	//		clone_to															
	/// Copies this value into `target`, or into a new value if there is none.
	/// 
	/// The target's caches are cleared, as with
	/// [`copy_from()`](UInt64::copy_from()).
	/// 
	/// # Parameters
	/// 
	/// * `target` - An existing value to overwrite.
	/// 
	#[must_use]
	pub fn clone_to(&self, target: Option<Self>) -> Self {
		let mut target = target.unwrap_or_default();
		target.copy_from(self);
		target
	}
	
	//		copy_from															
	/// Resets this value and then takes both halves from `other`.
	/// 
	/// The caches of `other` are not copied, and those of `self` are cleared.
	/// 
	/// # Parameters
	/// 
	/// * `other` - The value to copy.
	/// 
	pub fn copy_from(&mut self, other: &Self) {
		self.reset();
		self.low  = other.low;
		self.high = other.high;
	}
	
	//		equals																
	/// Whether `other` is present and holds the same value.
	#[must_use]
	pub fn equals(&self, other: Option<&Self>) -> bool {
		other.is_some_and(|other| self == other)
	}
	
	//		from_bytes															
	/// Reads the value from a stream, starting at `position`.
	/// 
	/// The stream is moved to `position` first. If the stream is little-endian
	/// then `low` is read before `high`, and otherwise `high` is read before
	/// `low`. Either way, each half is a 32-bit word in the stream's byte
	/// order.
	/// 
	/// If the stream does not hold enough data, the value is reset to zero.
	/// No error is returned, so a failed read cannot be told apart from a
	/// stored zero.
	/// 
	/// # Parameters
	/// 
	/// * `stream`   - The stream to read from.
	/// * `position` - The offset to start reading at.
	/// 
	pub fn from_bytes<S: ByteStream + ?Sized>(&mut self, stream: &mut S, position: usize) {
		stream.set_position(position);
		match Self::read_halves(stream) {
			Ok((low, high)) => {
				self.low  = low;
				self.high = high;
				self.invalidate();
			},
			Err(err) => {
				debug!("Resetting to zero after failed read: {err}");
				self.reset();
			},
		}
	}
	
	//		from_string															
	/// Leniently parses a string in the given base.
	/// 
	/// An empty string resets the value to zero. Otherwise the string is
	/// lower-cased and each character is taken as a digit: `0` to `9` are 0 to
	/// 9, and `a` to `z` are 10 to 35. Digits are not checked against the
	/// base, and characters that are not digits at all are not rejected, so
	/// malformed input gives a wrong (but repeatable) value rather than an
	/// error. Values past 64 bits wrap. Use
	/// [`from_str_radix()`](UInt64::from_str_radix()) for validated parsing.
	/// 
	/// The lower-cased input is cached as the rendering for `radix`.
	/// 
	/// # Parameters
	/// 
	/// * `text`  - The string to parse.
	/// * `radix` - The base to parse in, normally from 2 to 36.
	/// 
	pub fn from_string(&mut self, text: &str, radix: u32) {
		if text.is_empty() {
			self.reset();
			return;
		}
		
		let text  = text.to_lowercase();
		let value = text.chars().fold(0_u64, |acc, c| {
			let mut digit = i64::from(u32::from(c)) - 48;
			if digit > 9 {
				digit -= 39;
			}
			acc.wrapping_mul(u64::from(radix)).wrapping_add_signed(digit)
		});
		
		(self.low, self.high) = Self::split(value);
		self.invalidate();
		_ = self.string_cache.get_mut().insert(radix, text);
	}
	
	//		gc																	
	/// Releases both caches without changing the value.
	pub fn gc(&mut self) {
		self.invalidate();
	}
	
	//		high																
	/// The most-significant 32 bits.
	#[must_use]
	pub const fn high(&self) -> u32 {
		self.high
	}
	
	//		low																	
	/// The least-significant 32 bits.
	#[must_use]
	pub const fn low(&self) -> u32 {
		self.low
	}
	
	//		parse_data															
	/// Reads `high` and then `low` from the stream's current position, in the
	/// stream's byte order.
	/// 
	/// Both halves are read before either is assigned, so a short stream
	/// leaves the value as it was. A successful read clears both caches.
	/// 
	/// # Parameters
	/// 
	/// * `stream` - The stream to read from.
	/// 
	/// # Errors
	/// 
	/// Returns the stream's error if it does not hold 8 more bytes.
	/// 
	pub fn parse_data<S: ByteStream + ?Sized>(&mut self, stream: &mut S) -> Result<(), StreamError> {
		let high  = stream.read_u32()?;
		let low   = stream.read_u32()?;
		self.low  = low;
		self.high = high;
		self.invalidate();
		Ok(())
	}
	
	//		reset																
	/// Sets the value to zero and clears both caches.
	pub fn reset(&mut self) {
		self.low  = 0;
		self.high = 0;
		self.invalidate();
	}
	
	//		set_high															
	/// Replaces the most-significant 32 bits. The caches are cleared only if
	/// the value actually changes.
	pub fn set_high(&mut self, value: u32) {
		if self.high == value {
			return;
		}
		self.high = value;
		self.invalidate();
	}
	
	//		set_low																
	/// Replaces the least-significant 32 bits. The caches are cleared only if
	/// the value actually changes.
	pub fn set_low(&mut self, value: u32) {
		if self.low == value {
			return;
		}
		self.low = value;
		self.invalidate();
	}
	
	//		to_data																
	/// Writes `high` and then `low` at the stream's current position, in the
	/// stream's byte order.
	/// 
	/// # Parameters
	/// 
	/// * `stream` - The stream to write to.
	/// 
	pub fn to_data<S: ByteStream + ?Sized>(&self, stream: &mut S) {
		stream.write_u32(self.high);
		stream.write_u32(self.low);
	}
	
	//		to_string_radix														
	/// Renders the value in the given base, using the digits `0-9a-z`.
	/// 
	/// The result is cached per base until the value changes. Zero renders as
	/// an empty string.
	/// 
	/// # Parameters
	/// 
	/// * `radix` - The base to render in, from 2 to 36.
	/// 
	/// # Errors
	/// 
	/// Returns [`ConversionError::RadixOutOfRange`] if the base is
	/// unsupported. Nothing is cached in that case.
	/// 
	pub fn to_string_radix(&self, radix: u32) -> Result<String, ConversionError> {
		if !(Self::MIN_RADIX..=Self::MAX_RADIX).contains(&radix) {
			return Err(ConversionError::RadixOutOfRange(radix));
		}
		if let Some(cached) = self.string_cache.borrow().get(&radix) {
			return Ok(cached.clone());
		}
		
		trace!("Rendering {self:?} in base {radix}");
		let rendered = Self::render(self.as_u64(), radix);
		_ = self.string_cache.borrow_mut().insert(radix, rendered.clone());
		Ok(rendered)
	}
	
	//		Private methods														
	
	//		invalidate															
	/// Clears both caches.
	fn invalidate(&mut self) {
		_ = self.bytes_cache.take();
		self.string_cache.get_mut().clear();
	}
	
	//		read_halves															
	/// Reads both halves in the order dictated by the stream's byte order,
	/// returning `(low, high)`.
	fn read_halves<S: ByteStream + ?Sized>(stream: &mut S) -> Result<(u32, u32), StreamError> {
		Ok(match stream.endian() {
			Endian::Little => {
				let low = stream.read_u32()?;
				(low, stream.read_u32()?)
			},
			Endian::Big    => {
				let high = stream.read_u32()?;
				(stream.read_u32()?, high)
			},
		})
	}
	
	//		render																
	/// Converts a value to digits in the given base, most-significant first.
	#[expect(clippy::cast_possible_truncation, reason = "Remainder is always below the radix")]
	#[expect(clippy::indexing_slicing,         reason = "Remainder is always below the radix")]
	#[expect(clippy::integer_division,         reason = "Intentional, as digits are extracted")]
	fn render(mut value: u64, radix: u32) -> String {
		let radix      = u64::from(radix);
		let mut digits = Vec::new();
		while value != 0 {
			digits.push(DIGITS[(value % radix) as usize]);
			value /= radix;
		}
		digits.iter().rev().copied().map(char::from).collect()
	}
	
	//		split																
	/// Splits a value into `(low, high)` halves.
	#[expect(clippy::cast_possible_truncation, reason = "Intentional, to split into halves")]
	const fn split(value: u64) -> (u32, u32) {
		(value as u32, (value >> 32) as u32)
	}
}

//󰭅		Clone																	
impl Clone for UInt64 {
	//		clone																
	fn clone(&self) -> Self {
		Self::new(self.low, self.high)
	}
	
	//		clone_from															
	fn clone_from(&mut self, source: &Self) {
		self.copy_from(source);
	}
}

//󰭅		Debug																	
impl Debug for UInt64 {
	//		fmt																	
	fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
		f.debug_struct("UInt64")
			.field("high", &self.high)
			.field("low",  &self.low)
			.finish()
	}
}

//󰭅		Default																	
impl Default for UInt64 {
	//		default																
	fn default() -> Self {
		Self::new(0, 0)
	}
}

//󰭅		Deserialize																
impl<'de> Deserialize<'de> for UInt64 {
	//		deserialize															
	fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
	where
		D: Deserializer<'de>,
	{
		if deserializer.is_human_readable() {
			//	Accept both numbers and strings
			deserializer.deserialize_any(UInt64Visitor)
		} else {
			//	For binary formats, expect the canonical byte form
			deserializer.deserialize_bytes(UInt64Visitor)
		}
	}
}

//󰭅		Display																	
impl Display for UInt64 {
	//		fmt																	
	fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
		f.pad(&self.to_string_radix(Self::DEFAULT_RADIX).map_err(|_| fmt::Error)?)
	}
}

//󰭅		Eq																		
impl Eq for UInt64 {}

//󰭅		From: u8 -> UInt64														
impl From<u8> for UInt64 {
	//		from																
	fn from(v: u8) -> Self {
		Self::new(u32::from(v), 0)
	}
}

//󰭅		From: u16 -> UInt64														
impl From<u16> for UInt64 {
	//		from																
	fn from(v: u16) -> Self {
		Self::new(u32::from(v), 0)
	}
}

//󰭅		From: u32 -> UInt64														
impl From<u32> for UInt64 {
	//		from																
	fn from(v: u32) -> Self {
		Self::new(v, 0)
	}
}

//󰭅		From: u64 -> UInt64														
impl From<u64> for UInt64 {
	//		from																
	fn from(v: u64) -> Self {
		let (low, high) = Self::split(v);
		Self::new(low, high)
	}
}

//󰭅		From: UInt64 -> i128													
impl From<UInt64> for i128 {
	//		from																
	fn from(v: UInt64) -> Self {
		Self::from(v.as_u64())
	}
}

//󰭅		From: UInt64 -> u64														
impl From<UInt64> for u64 {
	//		from																
	fn from(v: UInt64) -> Self {
		v.as_u64()
	}
}

//󰭅		From: UInt64 -> u128													
impl From<UInt64> for u128 {
	//		from																
	fn from(v: UInt64) -> Self {
		Self::from(v.as_u64())
	}
}

//󰭅		FromSql																	
impl<'a> FromSql<'a> for UInt64 {
	//		from_sql															
	fn from_sql(ty: &Type, raw: &'a [u8]) -> Result<Self, Box<dyn Error + Sync + Send>> {
		match ty {
			&Type::INT2 => Ok(Self::try_from(i16::from_sql(ty, raw)?)?),
			&Type::INT4 => Ok(Self::try_from(i32::from_sql(ty, raw)?)?),
			&Type::INT8 => Ok(Self::try_from(i64::from_sql(ty, raw)?)?),
			&Type::TEXT => Ok(<&str>::from_sql(ty, raw)?.parse::<Self>()?),
			unknown     => Err(Box::new(IoError::new(
				IoErrorKind::InvalidData,
				format!("Invalid type for UInt64: {unknown}"),
			))),
		}
	}
	
	//		accepts																
	fn accepts(ty: &Type) -> bool {
		matches!(*ty, Type::INT2 | Type::INT4 | Type::INT8 | Type::TEXT)
	}
}

//󰭅		FromStr																	
impl FromStr for UInt64 {
	type Err = ConversionError;
	
	//		from_str															
	fn from_str(s: &str) -> Result<Self, Self::Err> {
		Self::from_str_radix(s, Self::DEFAULT_RADIX)
	}
}

//󰭅		Hash																	
impl Hash for UInt64 {
	//		hash																
	fn hash<H: Hasher>(&self, state: &mut H) {
		self.as_u64().hash(state);
	}
}

//󰭅		Ord																		
impl Ord for UInt64 {
	//		cmp																	
	fn cmp(&self, other: &Self) -> Ordering {
		self.as_u64().cmp(&other.as_u64())
	}
}

//󰭅		PartialEq																
impl PartialEq for UInt64 {
	//		eq																	
	fn eq(&self, other: &Self) -> bool {
		self.low == other.low && self.high == other.high
	}
}

//󰭅		PartialOrd																
impl PartialOrd for UInt64 {
	//		partial_cmp															
	fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
		Some(self.cmp(other))
	}
}

//󰭅		Serialize																
impl Serialize for UInt64 {
	//		serialize															
	fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
	where
		S: Serializer,
	{
		if serializer.is_human_readable() {
			serializer.serialize_u64(self.as_u64())
		} else {
			serializer.serialize_bytes(self.bytes().as_slice())
		}
	}
}

//󰭅		ToSql																	
impl ToSql for UInt64 {
	//		to_sql																
	fn to_sql(&self, ty: &Type, out: &mut BytesMut) -> Result<IsNull, Box<dyn Error + Sync + Send>> {
		let value = self.as_u64();
		match ty {
			&Type::INT2 => i16::try_from(value).map_err(|_| ConversionError::ValueTooLarge)?.to_sql(ty, out),
			&Type::INT4 => i32::try_from(value).map_err(|_| ConversionError::ValueTooLarge)?.to_sql(ty, out),
			&Type::INT8 => i64::try_from(value).map_err(|_| ConversionError::ValueTooLarge)?.to_sql(ty, out),
			&Type::TEXT => value.to_string().to_sql(ty, out),
			unknown     => Err(Box::new(IoError::new(
				IoErrorKind::InvalidData,
				format!("Invalid type for UInt64: {unknown}"),
			))),
		}
	}
	
	//		accepts																
	fn accepts(ty: &Type) -> bool {
		matches!(*ty, Type::INT2 | Type::INT4 | Type::INT8 | Type::TEXT)
	}
	
	to_sql_checked!();
}

//󰭅		TryFrom: i16 -> UInt64													
impl TryFrom<i16> for UInt64 {
	type Error = ConversionError;
	
	//		try_from															
	fn try_from(v: i16) -> Result<Self, Self::Error> {
		Self::try_from(i64::from(v))
	}
}

//󰭅		TryFrom: i32 -> UInt64													
impl TryFrom<i32> for UInt64 {
	type Error = ConversionError;
	
	//		try_from															
	fn try_from(v: i32) -> Result<Self, Self::Error> {
		Self::try_from(i64::from(v))
	}
}

//󰭅		TryFrom: i64 -> UInt64													
impl TryFrom<i64> for UInt64 {
	type Error = ConversionError;
	
	//		try_from															
	fn try_from(v: i64) -> Result<Self, Self::Error> {
		u64::try_from(v).map(Self::from).map_err(|_| ConversionError::ValueIsNegative)
	}
}

//󰭅		TryFrom: i128 -> UInt64													
impl TryFrom<i128> for UInt64 {
	type Error = ConversionError;
	
	//		try_from															
	fn try_from(v: i128) -> Result<Self, Self::Error> {
		if v < 0 {
			Err(ConversionError::ValueIsNegative)
		} else {
			u64::try_from(v).map(Self::from).map_err(|_| ConversionError::ValueTooLarge)
		}
	}
}

//󰭅		TryFrom: u128 -> UInt64													
impl TryFrom<u128> for UInt64 {
	type Error = ConversionError;
	
	//		try_from															
	fn try_from(v: u128) -> Result<Self, Self::Error> {
		u64::try_from(v).map(Self::from).map_err(|_| ConversionError::ValueTooLarge)
	}
}

//󰭅		TryFrom: usize -> UInt64												
impl TryFrom<usize> for UInt64 {
	type Error = ConversionError;
	
	//		try_from															
	fn try_from(v: usize) -> Result<Self, Self::Error> {
		u64::try_from(v).map(Self::from).map_err(|_| ConversionError::ValueTooLarge)
	}
}

//󰭅		TryFrom: UInt64 -> i64													
impl TryFrom<UInt64> for i64 {
	type Error = ConversionError;
	
	//		try_from															
	fn try_from(v: UInt64) -> Result<Self, Self::Error> {
		Self::try_from(v.as_u64()).map_err(|_| ConversionError::ValueTooLarge)
	}
}

//󰭅		TryFrom: UInt64 -> u8													
impl TryFrom<UInt64> for u8 {
	type Error = ConversionError;
	
	//		try_from															
	fn try_from(v: UInt64) -> Result<Self, Self::Error> {
		Self::try_from(v.as_u64()).map_err(|_| ConversionError::ValueTooLarge)
	}
}

//󰭅		TryFrom: UInt64 -> u16													
impl TryFrom<UInt64> for u16 {
	type Error = ConversionError;
	
	//		try_from															
	fn try_from(v: UInt64) -> Result<Self, Self::Error> {
		Self::try_from(v.as_u64()).map_err(|_| ConversionError::ValueTooLarge)
	}
}

//󰭅		TryFrom: UInt64 -> u32													
impl TryFrom<UInt64> for u32 {
	type Error = ConversionError;
	
	//		try_from															
	fn try_from(v: UInt64) -> Result<Self, Self::Error> {
		Self::try_from(v.as_u64()).map_err(|_| ConversionError::ValueTooLarge)
	}
}

//󰭅		TryFrom: UInt64 -> usize												
impl TryFrom<UInt64> for usize {
	type Error = ConversionError;
	
	//		try_from															
	fn try_from(v: UInt64) -> Result<Self, Self::Error> {
		Self::try_from(v.as_u64()).map_err(|_| ConversionError::ValueTooLarge)
	}
}

//		UInt64Visitor															
/// A visitor for reading a [`UInt64`] from numbers, strings, or the canonical
/// byte form.
struct UInt64Visitor;

//󰭅		Visitor																	
impl Visitor<'_> for UInt64Visitor {
	type Value = UInt64;
	
	//		expecting															
	fn expecting(&self, formatter: &mut Formatter<'_>) -> fmt::Result {
		write!(formatter, "an unsigned 64-bit integer, or {} little-endian bytes", UInt64::BYTES)
	}
	
	//		visit_i64															
	fn visit_i64<E>(self, v: i64) -> Result<Self::Value, E>
	where
		E: SerdeError,
	{
		UInt64::try_from(v).map_err(E::custom)
	}
	
	//		visit_u64															
	fn visit_u64<E>(self, v: u64) -> Result<Self::Value, E>
	where
		E: SerdeError,
	{
		Ok(UInt64::from(v))
	}
	
	//		visit_str															
	fn visit_str<E>(self, v: &str) -> Result<Self::Value, E>
	where
		E: SerdeError,
	{
		v.parse().map_err(E::custom)
	}
	
	//		visit_bytes															
	fn visit_bytes<E>(self, v: &[u8]) -> Result<Self::Value, E>
	where
		E: SerdeError,
	{
		if v.len() != UInt64::BYTES {
			return Err(E::invalid_length(v.len(), &self));
		}
		let mut stream = ByteArray::from(v);
		stream.set_endian(Endian::Little);
		let mut value  = UInt64::default();
		value.from_bytes(&mut stream, 0);
		Ok(value)
	}
}
