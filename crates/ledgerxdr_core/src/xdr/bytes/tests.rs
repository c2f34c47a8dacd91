use crate::xdr::XdrError;
use crate::xdr::bytes::{Cursor, Sink, padding_len};

#[test]
fn padding_rounds_up_to_word() {
	assert_eq!(padding_len(0), 0);
	assert_eq!(padding_len(1), 3);
	assert_eq!(padding_len(2), 2);
	assert_eq!(padding_len(3), 1);
	assert_eq!(padding_len(4), 0);
	assert_eq!(padding_len(29), 3);
}

#[test]
fn reads_big_endian_words() {
	let bytes = [0x00, 0x00, 0x01, 0x02, 0xFF, 0xFF, 0xFF, 0xFE, 0x11, 0x22, 0x33, 0x44, 0x55, 0x66, 0x77, 0x88];
	let mut cursor = Cursor::new(&bytes);
	assert_eq!(cursor.read_u32().expect("u32"), 0x0102);
	assert_eq!(cursor.read_i32().expect("i32"), -2);
	assert_eq!(cursor.read_u64().expect("u64"), 0x1122_3344_5566_7788);
	assert_eq!(cursor.remaining(), 0);
}

#[test]
fn short_read_reports_offset_and_need() {
	let bytes = [0_u8; 6];
	let mut cursor = Cursor::new(&bytes);
	cursor.read_u32().expect("first word");
	let err = cursor.read_u32().expect_err("second word is short");
	assert!(matches!(err, XdrError::TruncatedInput { at: 4, need: 4, rem: 2 }));
}

#[test]
fn strict_padding_rejects_non_zero_byte() {
	let bytes = [0xAA, 0x00, 0x01, 0x00];
	let mut cursor = Cursor::new(&bytes);
	cursor.read_exact(1).expect("payload");
	let err = cursor.skip_padding(1, true).expect_err("dirty padding");
	assert!(matches!(err, XdrError::NonZeroPadding { at: 2 }));

	let mut lenient = Cursor::new(&bytes);
	lenient.read_exact(1).expect("payload");
	lenient.skip_padding(1, false).expect("lenient padding");
	assert_eq!(lenient.pos(), 4);
}

#[test]
fn sink_writes_big_endian_and_padding() {
	let mut sink = Sink::new();
	sink.write_u32(7);
	sink.write_i64(-1);
	sink.write_bytes(b"ab");
	sink.write_padding(2);
	assert_eq!(
		sink.as_slice(),
		&[0, 0, 0, 7, 0xFF, 0xFF, 0xFF, 0xFF, 0xFF, 0xFF, 0xFF, 0xFF, b'a', b'b', 0, 0]
	);
	assert_eq!(sink.len(), 16);
}
