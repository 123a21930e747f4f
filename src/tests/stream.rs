//		Packages

use super::*;
use claims::{assert_err_eq, assert_ok_eq};
use rubedo::sugar::s;



//		Tests

mod constructors {
	use super::*;
	
	//		new																	
	#[test]
	fn new() {
		let stream = ByteArray::new();
		assert!(stream.is_empty());
		assert_eq!(stream.position(), 0);
		assert_eq!(stream.endian(),   Endian::Big);
	}
	
	//		with_endian															
	#[test]
	fn with_endian() {
		let stream = ByteArray::with_endian(Endian::Little);
		assert!(stream.is_empty());
		assert_eq!(stream.endian(), Endian::Little);
	}
}

mod public_methods {
	use super::*;
	
	//		bytes_available														
	#[test]
	fn bytes_available() {
		let mut stream = ByteArray::from(vec![0; 6]);
		assert_eq!(stream.bytes_available(), 6);
		stream.set_position(4);
		assert_eq!(stream.bytes_available(), 2);
		stream.set_position(10);
		assert_eq!(stream.bytes_available(), 0);
	}
	
	//		clear																
	#[test]
	fn clear() {
		let mut stream = ByteArray::with_endian(Endian::Little);
		stream.write_u32(1);
		stream.clear();
		assert!(stream.is_empty());
		assert_eq!(stream.position(), 0);
		assert_eq!(stream.endian(),   Endian::Little);
	}
	
	//		len																	
	#[test]
	fn len() {
		let mut stream = ByteArray::new();
		assert_eq!(stream.len(), 0);
		stream.write_u32(1);
		stream.write_u32(2);
		assert_eq!(stream.len(), 8);
	}
	
	//		set_endian															
	#[test]
	fn set_endian() {
		let mut stream = ByteArray::from(vec![1, 0, 0, 0]);
		stream.set_endian(Endian::Little);
		assert_ok_eq!(stream.read_u32(), 1);
	}
	
	//		to_vec																
	#[test]
	fn to_vec() {
		let mut stream = ByteArray::new();
		stream.write_u32(0x0102_0304);
		assert_eq!(stream.to_vec(), vec![1, 2, 3, 4]);
	}
}

mod byte_stream {
	use super::*;
	
	//		read_u32															
	#[test]
	fn read_u32__big_endian() {
		let mut stream = ByteArray::from(vec![0x01, 0x02, 0x03, 0x04, 0xff, 0xff, 0xff, 0xff]);
		assert_ok_eq!(stream.read_u32(), 0x0102_0304);
		assert_eq!(stream.position(), 4);
		assert_ok_eq!(stream.read_u32(), u32::MAX);
		assert_eq!(stream.position(), 8);
	}
	#[test]
	fn read_u32__little_endian() {
		let mut stream = ByteArray::from(vec![0x01, 0x02, 0x03, 0x04]);
		stream.set_endian(Endian::Little);
		assert_ok_eq!(stream.read_u32(), 0x0403_0201);
	}
	#[test]
	fn read_u32__from_position() {
		let mut stream = ByteArray::from(vec![0xff, 0, 0, 0, 7]);
		stream.set_position(1);
		assert_ok_eq!(stream.read_u32(), 7);
	}
	#[test]
	fn read_u32__end_of_stream() {
		let mut stream = ByteArray::from(vec![0, 0, 0, 1, 0, 0]);
		stream.set_position(4);
		let err = stream.read_u32();
		assert_err_eq!(&err, &StreamError::EndOfStream { position: 4, needed: 4, available: 2 });
		assert_eq!(err.unwrap_err().to_string(), s!("End of stream: needed 4 bytes at position 4, but only 2 available"));
		assert_eq!(stream.position(), 4);
	}
	#[test]
	fn read_u32__past_end() {
		let mut stream = ByteArray::new();
		stream.set_position(12);
		assert_err_eq!(stream.read_u32(), StreamError::EndOfStream { position: 12, needed: 4, available: 0 });
	}
	
	//		write_u32															
	#[test]
	fn write_u32__big_endian() {
		let mut stream = ByteArray::new();
		stream.write_u32(0x0102_0304);
		assert_eq!(stream.as_slice(), &[1_u8, 2, 3, 4]);
		assert_eq!(stream.position(), 4);
	}
	#[test]
	fn write_u32__little_endian() {
		let mut stream = ByteArray::with_endian(Endian::Little);
		stream.write_u32(0x0102_0304);
		assert_eq!(stream.as_slice(), &[4_u8, 3, 2, 1]);
	}
	#[test]
	fn write_u32__overwrites_in_place() {
		let mut stream = ByteArray::from(vec![9; 8]);
		stream.set_position(2);
		stream.write_u32(0);
		assert_eq!(stream.as_slice(), &[9_u8, 9, 0, 0, 0, 0, 9, 9]);
		assert_eq!(stream.len(),      8);
	}
	#[test]
	fn write_u32__grows_across_end() {
		let mut stream = ByteArray::from(vec![9; 6]);
		stream.set_position(4);
		stream.write_u32(0x0102_0304);
		assert_eq!(stream.as_slice(), &[9_u8, 9, 9, 9, 1, 2, 3, 4]);
	}
	#[test]
	fn write_u32__zero_fills_gap() {
		let mut stream = ByteArray::new();
		stream.set_position(2);
		stream.write_u32(u32::MAX);
		assert_eq!(stream.as_slice(), &[0_u8, 0, 0xff, 0xff, 0xff, 0xff]);
		assert_eq!(stream.position(), 6);
	}
	#[test]
	fn write_u32__position_at_limit() {
		let mut stream = ByteArray::new();
		stream.set_position(usize::MAX - 1);
		stream.write_u32(1);
		assert!(stream.is_empty());
		assert_eq!(stream.position(), usize::MAX - 1);
	}
	#[test]
	fn write_u32__then_read_u32() {
		let mut stream = ByteArray::with_endian(Endian::Little);
		stream.write_u32(0xdead_beef);
		stream.set_position(0);
		assert_ok_eq!(stream.read_u32(), 0xdead_beef);
	}
}

mod conversions {
	use super::*;
	
	//		From: &[u8] -> ByteArray											
	#[test]
	fn from__slice() {
		let stream = ByteArray::from(&[1_u8, 2, 3][..]);
		assert_eq!(stream.as_slice(), &[1_u8, 2, 3]);
		assert_eq!(stream.position(), 0);
		assert_eq!(stream.endian(),   Endian::Big);
	}
	
	//		From: Vec<u8> -> ByteArray											
	#[test]
	fn from__vec() {
		assert_eq!(ByteArray::from(vec![1, 2, 3]), ByteArray::from(&[1_u8, 2, 3][..]));
	}
}
