use crate::xdr::{DecodeOptions, ReadXdr, Reader, Result, WriteXdr, XdrError, decode, decode_with, encode};

fn descend(r: &mut Reader<'_>, levels: u32) -> Result<u32> {
	if levels == 0 {
		return Ok(0);
	}
	r.nested(|r| descend(r, levels - 1).map(|depth| depth + 1))
}

#[test]
fn nesting_within_limit_succeeds() {
	let options = DecodeOptions::default().with_max_depth(8);
	let mut reader = Reader::new(&[], &options);
	assert_eq!(descend(&mut reader, 8).expect("eight levels"), 8);
}

#[test]
fn nesting_past_limit_fails() {
	let options = DecodeOptions::default().with_max_depth(8);
	let mut reader = Reader::new(&[], &options);
	let err = descend(&mut reader, 9).expect_err("nine levels");
	assert!(matches!(err, XdrError::RecursionLimitExceeded { max_depth: 8 }));
}

#[test]
fn depth_is_restored_after_nested_error() {
	let options = DecodeOptions::default().with_max_depth(2);
	let mut reader = Reader::new(&[], &options);
	let _ = reader.nested(|r| r.nested(|_| Err::<(), _>(XdrError::TrailingBytes { leftover: 0 })));
	assert_eq!(descend(&mut reader, 2).expect("depth reset"), 2);
}

#[test]
fn trailing_bytes_rejected_by_default() {
	let err = decode::<u32>(&[0, 0, 0, 7, 0, 0, 0, 0]).expect_err("extra word");
	assert!(matches!(err, XdrError::TrailingBytes { leftover: 4 }));
}

#[test]
fn lenient_options_accept_trailing_bytes() {
	let value: u32 = decode_with(&[0, 0, 0, 7, 0xFF], &DecodeOptions::lenient()).expect("lenient");
	assert_eq!(value, 7);
}

#[test]
fn encode_matches_to_xdr() {
	let value = -5_i64;
	assert_eq!(encode(&value), value.to_xdr());
	assert_eq!(encode(&value), vec![0xFF, 0xFF, 0xFF, 0xFF, 0xFF, 0xFF, 0xFF, 0xFB]);
}

#[test]
fn base64_round_trip() {
	let text = 0x0102_0304_u32.to_xdr_base64();
	assert_eq!(text, "AQIDBA==");
	assert_eq!(u32::from_xdr_base64(" AQIDBA==\n").expect("decode"), 0x0102_0304);
}

#[test]
fn base64_rejects_bad_alphabet() {
	let err = u32::from_xdr_base64("@@@@").expect_err("invalid base64");
	assert!(matches!(err, XdrError::Base64(_)));
}
