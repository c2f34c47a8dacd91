use crate::xdr::{Extension, ExtensionPoint, ReadXdr, WriteXdr, XdrError};

#[test]
fn absent_extension_is_zero_word() {
	let ext = Extension::<u32>::V0;
	assert_eq!(ext.to_xdr(), vec![0, 0, 0, 0]);
	let back = Extension::<u32>::from_xdr(&[0, 0, 0, 0]).expect("decode");
	assert_eq!(back, Extension::V0);
	assert!(back.payload().is_none());
}

#[test]
fn later_version_uses_its_discriminant() {
	let ext = Extension::<u32, 3>::Present(5);
	assert_eq!(ext.discriminant(), 3);
	assert_eq!(ext.to_xdr(), vec![0, 0, 0, 3, 0, 0, 0, 5]);
	assert_eq!(Extension::<u32, 3>::from_xdr(&ext.to_xdr()).expect("decode"), ext);
}

#[test]
fn skipped_version_is_rejected() {
	let err = Extension::<u32, 2>::from_xdr(&[0, 0, 0, 1, 0, 0, 0, 5]).expect_err("version 1 undefined");
	assert!(matches!(err, XdrError::UnrecognizedDiscriminant { value: 1, .. }));
}

#[test]
fn nested_chain_round_trips() {
	let outer = Extension::<Extension<u32, 2>, 1>::Present(Extension::Present(9));
	let bytes = outer.to_xdr();
	assert_eq!(bytes, vec![0, 0, 0, 1, 0, 0, 0, 2, 0, 0, 0, 9]);
	assert_eq!(Extension::<Extension<u32, 2>, 1>::from_xdr(&bytes).expect("decode"), outer);
}

#[test]
fn extension_point_only_accepts_zero() {
	assert_eq!(ExtensionPoint::default().to_xdr(), vec![0, 0, 0, 0]);
	let err = ExtensionPoint::from_xdr(&[0, 0, 0, 1]).expect_err("unknown version");
	assert!(matches!(err, XdrError::UnrecognizedDiscriminant { type_name: "ExtensionPoint", value: 1 }));
}

#[test]
fn option_converts_into_extension() {
	let ext: Extension<u32> = Some(4).into();
	assert_eq!(ext.into_payload(), Some(4));
}
