use crate::xdr::{BytesM, DecodeOptions, ReadXdr, StringM, WriteXdr, XdrError, decode_with};

#[test]
fn bool_encodes_as_word() {
	assert_eq!(true.to_xdr(), vec![0, 0, 0, 1]);
	assert_eq!(false.to_xdr(), vec![0, 0, 0, 0]);
	assert!(bool::from_xdr(&[0, 0, 0, 1]).expect("true"));
}

#[test]
fn bool_rejects_two() {
	let err = bool::from_xdr(&[0, 0, 0, 2]).expect_err("not a bool");
	assert!(matches!(err, XdrError::InvalidBooleanEncoding { at: 0, value: 2 }));
}

#[test]
fn signed_integers_are_twos_complement() {
	assert_eq!((-1_i32).to_xdr(), vec![0xFF; 4]);
	assert_eq!(i64::from_xdr(&[0x80, 0, 0, 0, 0, 0, 0, 0]).expect("min"), i64::MIN);
	assert_eq!(u64::MAX.to_xdr(), vec![0xFF; 8]);
}

#[test]
fn var_opaque_pads_to_word() {
	for n in 0..=5_usize {
		let payload: Vec<u8> = (1..=n as u8).collect();
		let value = BytesM::<16>::try_from(payload.clone()).expect("within bound");
		let bytes = value.to_xdr();
		let padding = (4 - n % 4) % 4;
		assert_eq!(bytes.len(), 4 + n + padding, "length {n}");
		assert!(bytes[4 + n..].iter().all(|b| *b == 0));
		let back = BytesM::<16>::from_xdr(&bytes).expect("decode");
		assert_eq!(back.as_slice(), payload.as_slice());
	}
}

#[test]
fn var_opaque_over_bound_is_length_mismatch() {
	let bytes = [0, 0, 0, 5, 1, 2, 3, 4, 5, 0, 0, 0];
	let err = BytesM::<4>::from_xdr(&bytes).expect_err("too long");
	assert!(matches!(err, XdrError::LengthMismatch { at: 0, declared: 5, max: 4 }));
}

#[test]
fn var_opaque_declared_past_buffer_is_truncated() {
	let bytes = [0, 0, 0, 8, 1, 2];
	let err = BytesM::<64>::from_xdr(&bytes).expect_err("short buffer");
	assert!(matches!(err, XdrError::TruncatedInput { at: 4, need: 8, rem: 2 }));
}

#[test]
fn dirty_padding_depends_on_options() {
	let bytes = [0, 0, 0, 1, b'a', 0, 9, 0];
	let err = StringM::<8>::from_xdr(&bytes).expect_err("strict");
	assert!(matches!(err, XdrError::NonZeroPadding { at: 6 }));

	let lenient = decode_with::<StringM<8>>(&bytes, &DecodeOptions::lenient()).expect("lenient");
	assert_eq!(lenient.as_str().expect("utf8"), "a");
}

#[test]
fn construction_beyond_bound_is_invariant_violation() {
	let err = StringM::<3>::try_from("abcd").expect_err("four bytes");
	assert!(matches!(err, XdrError::InvariantViolation { len: 4, max: 3, .. }));
	assert!(BytesM::<3>::try_from(vec![0_u8; 3]).is_ok());
}

#[test]
fn string_keeps_non_utf8_bytes() {
	let bytes = [0, 0, 0, 2, 0xC3, 0x28, 0, 0];
	let value = StringM::<28>::from_xdr(&bytes).expect("raw bytes decode");
	assert!(value.as_str().is_err());
	assert_eq!(value.as_bytes(), &[0xC3, 0x28]);
	assert_eq!(value.to_xdr(), bytes);
}
