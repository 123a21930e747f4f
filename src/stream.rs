//! Position-tracked, endianness-aware byte streams.

//	Reads and writes are always bounds-checked against the buffer length before
//	slicing, so direct indexing is safe here.
#![allow(clippy::indexing_slicing, reason = "Ranges are checked before use")]



//		Modules

#[cfg(test)]
#[path = "tests/stream.rs"]
mod tests;



//		Packages

use crate::errors::StreamError;
use bytes::{Buf, BufMut, BytesMut};
use log::debug;



//		Enums

//		Endian																	
/// The byte order used when reading and writing multi-byte values.
#[derive(Clone, Copy, Debug, Default, Eq, Hash, PartialEq)]
pub enum Endian {
	/// Most-significant byte first. This is the default for a new
	/// [`ByteArray`].
	#[default]
	Big,
	
	/// Least-significant byte first.
	Little,
}



//		Traits

//		ByteStream																
/// A random-access binary reader/writer with a current position and
/// endianness.
/// 
/// This is the contract that [`UInt64`](crate::UInt64) consumes when reading
/// and writing its halves. Implementations own buffer growth and lifecycle;
/// consumers only move the position and read or write 32-bit words.
/// 
pub trait ByteStream {
	/// The current read/write offset, in bytes.
	fn position(&self) -> usize;
	
	/// Moves the read/write offset. Moving past the end is allowed; a
	/// subsequent read will fail and a subsequent write will grow the stream.
	fn set_position(&mut self, position: usize);
	
	/// The byte order applied by [`read_u32()`](ByteStream::read_u32()) and
	/// [`write_u32()`](ByteStream::write_u32()).
	fn endian(&self) -> Endian;
	
	/// Reads an unsigned 32-bit integer at the current position and advances
	/// the position by 4.
	/// 
	/// # Errors
	/// 
	/// Returns [`StreamError::EndOfStream`] if fewer than 4 bytes remain. The
	/// position is left unchanged in that case.
	/// 
	fn read_u32(&mut self) -> Result<u32, StreamError>;
	
	/// Writes an unsigned 32-bit integer at the current position and advances
	/// the position by 4. If the end of the write would fall beyond the
	/// addressable range, nothing is written and the position is unchanged.
	fn write_u32(&mut self, value: u32);
}



//		Structs

//		ByteArray																
/// An in-memory [`ByteStream`] backed by a growable buffer.
/// 
/// New arrays are big-endian, matching network byte order. Writing at or past
/// the end extends the buffer (zero-filling any gap), and writing in the middle
/// overwrites existing bytes in place.
/// 
#[derive(Clone, Debug, Default, Eq, PartialEq)]
pub struct ByteArray {
	/// The underlying bytes.
	data:     BytesMut,
	
	/// The current read/write offset.
	position: usize,
	
	/// The byte order for multi-byte reads and writes.
	endian:   Endian,
}

//󰭅		ByteArray																
impl ByteArray {
	//		Constructors														
	
	//		new																	
	/// Creates an empty, big-endian [`ByteArray`].
	#[must_use]
	pub fn new() -> Self {
		Self::default()
	}
	
	//		with_endian															
	/// Creates an empty [`ByteArray`] with the given byte order.
	/// 
	/// # Parameters
	/// 
	/// * `endian` - The byte order to use for reads and writes.
	/// 
	#[must_use]
	pub fn with_endian(endian: Endian) -> Self {
		Self { endian, ..Self::default() }
	}
	
	//		Public methods														
	
	//		as_slice															
	/// The full contents of the buffer, regardless of position.
	#[must_use]
	pub fn as_slice(&self) -> &[u8] {
		&self.data
	}
	
	//		bytes_available														
	/// The number of bytes between the current position and the end.
	#[must_use]
	pub fn bytes_available(&self) -> usize {
		self.data.len().saturating_sub(self.position)
	}
	
	//		clear																
	/// Empties the buffer and rewinds the position. The byte order is kept.
	pub fn clear(&mut self) {
		self.data.clear();
		self.position = 0;
	}
	
	//		is_empty															
	/// Whether the buffer holds no bytes.
	#[must_use]
	pub fn is_empty(&self) -> bool {
		self.data.is_empty()
	}
	
	//		len																	
	/// The number of bytes in the buffer.
	#[must_use]
	pub fn len(&self) -> usize {
		self.data.len()
	}
	
	//		set_endian															
	/// Changes the byte order used for subsequent reads and writes.
	pub fn set_endian(&mut self, endian: Endian) {
		self.endian = endian;
	}
	
	//		to_vec																
	/// Copies the full contents of the buffer into a [`Vec`].
	#[must_use]
	pub fn to_vec(&self) -> Vec<u8> {
		self.data.to_vec()
	}
}

//󰭅		ByteStream																
impl ByteStream for ByteArray {
	//		position															
	fn position(&self) -> usize {
		self.position
	}
	
	//		set_position														
	fn set_position(&mut self, position: usize) {
		self.position = position;
	}
	
	//		endian																
	fn endian(&self) -> Endian {
		self.endian
	}
	
	//		read_u32															
	fn read_u32(&mut self) -> Result<u32, StreamError> {
		const SIZE: usize = size_of::<u32>();
		
		let available = self.bytes_available();
		if available < SIZE {
			return Err(StreamError::EndOfStream { position: self.position, needed: SIZE, available });
		}
		
		let mut chunk = &self.data[self.position..self.position + SIZE];
		let value     = match self.endian {
			Endian::Big    => chunk.get_u32(),
			Endian::Little => chunk.get_u32_le(),
		};
		self.position += SIZE;
		Ok(value)
	}
	
	//		write_u32															
	fn write_u32(&mut self, value: u32) {
		const SIZE: usize = size_of::<u32>();
		
		let Some(end) = self.position.checked_add(SIZE) else {
			debug!("Dropping write at position {}: end would overflow", self.position);
			return;
		};
		if self.data.len() < end {
			self.data.resize(end, 0);
		}
		
		let mut slot = &mut self.data[self.position..end];
		match self.endian {
			Endian::Big    => slot.put_u32(value),
			Endian::Little => slot.put_u32_le(value),
		}
		self.position = end;
	}
}

//󰭅		From: &[u8] -> ByteArray												
impl From<&[u8]> for ByteArray {
	//		from																
	fn from(bytes: &[u8]) -> Self {
		Self { data: BytesMut::from(bytes), ..Self::default() }
	}
}

//󰭅		From: Vec<u8> -> ByteArray												
impl From<Vec<u8>> for ByteArray {
	//		from																
	fn from(bytes: Vec<u8>) -> Self {
		Self::from(bytes.as_slice())
	}
}
