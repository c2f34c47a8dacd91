use crate::xdr::{ReadXdr, VecM, WriteXdr, XdrError};

#[test]
fn vector_writes_count_then_elements() {
	let value = VecM::<u32, 4>::try_from(vec![1, 2]).expect("within bound");
	assert_eq!(value.to_xdr(), vec![0, 0, 0, 2, 0, 0, 0, 1, 0, 0, 0, 2]);
}

#[test]
fn vector_count_over_bound_fails_before_elements() {
	let bytes = [0, 0, 0, 3, 0, 0, 0, 1];
	let err = VecM::<u32, 2>::from_xdr(&bytes).expect_err("count too large");
	assert!(matches!(err, XdrError::LengthMismatch { declared: 3, max: 2, .. }));
}

#[test]
fn vector_short_of_elements_is_truncated() {
	let bytes = [0, 0, 0, 2, 0, 0, 0, 1];
	let err = VecM::<u32>::from_xdr(&bytes).expect_err("second element missing");
	assert!(matches!(err, XdrError::TruncatedInput { at: 8, .. }));
}

#[test]
fn huge_declared_count_does_not_preallocate() {
	let bytes = [0xFF, 0xFF, 0xFF, 0xFF];
	let err = VecM::<u64>::from_xdr(&bytes).expect_err("no elements present");
	assert!(matches!(err, XdrError::TruncatedInput { .. }));
}

#[test]
fn push_respects_bound() {
	let mut value = VecM::<u32, 1>::new();
	value.push(7).expect("first");
	let err = value.push(8).expect_err("second");
	assert!(matches!(err, XdrError::InvariantViolation { len: 2, max: 1, .. }));
	assert_eq!(&*value, &[7]);
}

#[test]
fn fixed_array_has_no_length_prefix() {
	let value = [1_u32, 2, 3];
	let bytes = value.to_xdr();
	assert_eq!(bytes.len(), 12);
	assert_eq!(<[u32; 3]>::from_xdr(&bytes).expect("decode"), value);
}

#[test]
fn option_uses_presence_flag() {
	assert_eq!(None::<u32>.to_xdr(), vec![0, 0, 0, 0]);
	assert_eq!(Some(9_u32).to_xdr(), vec![0, 0, 0, 1, 0, 0, 0, 9]);
	assert_eq!(Option::<u32>::from_xdr(&[0, 0, 0, 0]).expect("absent"), None);
	let err = Option::<u32>::from_xdr(&[0, 0, 0, 3, 0, 0, 0, 9]).expect_err("bad flag");
	assert!(matches!(err, XdrError::InvalidBooleanEncoding { value: 3, .. }));
}
