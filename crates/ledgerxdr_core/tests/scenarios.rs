#![allow(missing_docs)]

use ledgerxdr::xdr::{
	AccountEntry, AlphaNum4, Asset, AssetCode4, ClaimPredicate, Extension, Int256Parts, Memo, PublicKey, ReadXdr,
	Thresholds, TransactionEnvelope, Uint256, VecM, WriteXdr, XdrError,
};
use ledgerxdr_testkit::WireBuilder;

fn issuer() -> PublicKey {
	PublicKey::Ed25519(Uint256([0x5A; 32]))
}

#[test]
fn native_asset_is_one_zero_word() {
	let bytes = Asset::Native.to_xdr();
	assert_eq!(bytes, vec![0, 0, 0, 0]);
	assert_eq!(Asset::from_xdr(&bytes).expect("decode"), Asset::Native);
}

#[test]
fn alphanum4_asset_keeps_code_and_issuer() {
	let asset = Asset::CreditAlphanum4(AlphaNum4 {
		asset_code: AssetCode4(*b"EUR\0"),
		issuer: issuer(),
	});
	let bytes = asset.to_xdr();
	let expected = WireBuilder::new().u32(1).fixed(b"EUR\0").u32(0).fixed(&[0x5A; 32]).build();
	assert_eq!(bytes, expected);

	let Asset::CreditAlphanum4(back) = Asset::from_xdr(&bytes).expect("decode") else {
		panic!("expected alphanum4");
	};
	assert_eq!(back.asset_code.0, *b"EUR\0");
	assert_eq!(back.issuer.ed25519(), &[0x5A; 32]);
}

#[test]
fn extension_discriminant_zero_means_absent() {
	let bytes = WireBuilder::new()
		.u32(0)
		.fixed(&[1; 32])
		.i64(1_000)
		.i64(42)
		.u32(0)
		.u32(0)
		.u32(0)
		.var(b"")
		.fixed(&[1, 0, 0, 0])
		.u32(0)
		.u32(0)
		.build();
	let account = AccountEntry::from_xdr(&bytes).expect("decode");
	assert_eq!(account.ext, Extension::V0);
	assert!(account.ext.payload().is_none());
	assert_eq!(account.thresholds, Thresholds([1, 0, 0, 0]));
	assert_eq!(account.to_xdr(), bytes);
}

#[test]
fn nested_claim_predicate_round_trips() {
	let deadline = 1_735_689_600_i64;
	let inner = ClaimPredicate::or(ClaimPredicate::Unconditional, ClaimPredicate::BeforeAbsoluteTime(deadline))
		.expect("two children");
	let pred = ClaimPredicate::and(inner, ClaimPredicate::Unconditional).expect("two children");

	let bytes = pred.to_xdr();
	let expected = WireBuilder::new()
		.u32(1)
		.u32(2)
		.u32(2)
		.u32(2)
		.u32(0)
		.u32(4)
		.i64(deadline)
		.u32(0)
		.build();
	assert_eq!(bytes, expected);

	let back = ClaimPredicate::from_xdr(&bytes).expect("decode");
	assert_eq!(back, pred);
	assert_eq!(back.depth(), 3);
	let ClaimPredicate::And(outer) = &back else {
		panic!("expected and");
	};
	let ClaimPredicate::Or(children) = &outer[0] else {
		panic!("expected or");
	};
	assert_eq!(children[1], ClaimPredicate::BeforeAbsoluteTime(deadline));
}

#[test]
fn int256_limbs_keep_order() {
	let value = Int256Parts {
		hi_hi: -0x0102_0304_0506_0708,
		hi_lo: 0x1111_1111_1111_1111,
		lo_hi: 0x2222_2222_2222_2222,
		lo_lo: 0x3333_3333_3333_3333,
	};
	let bytes = value.to_xdr();
	let expected = WireBuilder::new()
		.i64(-0x0102_0304_0506_0708)
		.u64(0x1111_1111_1111_1111)
		.u64(0x2222_2222_2222_2222)
		.u64(0x3333_3333_3333_3333)
		.build();
	assert_eq!(bytes, expected);
	assert_eq!(Int256Parts::from_xdr(&bytes).expect("decode"), value);
}

#[test]
fn out_of_range_union_discriminant_fails() {
	let err = Asset::from_xdr(&WireBuilder::new().u32(999).build()).expect_err("999 is not an asset type");
	assert!(matches!(err, XdrError::UnrecognizedDiscriminant { type_name: "AssetType", value: 999 }));

	let err = Memo::from_xdr(&WireBuilder::new().i32(-1).build()).expect_err("negative memo type");
	assert!(matches!(err, XdrError::UnrecognizedDiscriminant { value: -1, .. }));

	let err = TransactionEnvelope::from_xdr(&WireBuilder::new().u32(1).build()).expect_err("scp is not a transaction");
	assert!(matches!(err, XdrError::UnrecognizedDiscriminant { type_name: "TransactionEnvelope", value: 1 }));
}

#[test]
fn vector_bound_is_enforced_on_construction() {
	let three = vec![ClaimPredicate::Unconditional; 3];
	let err = VecM::<ClaimPredicate, 2>::try_from(three).expect_err("and takes two");
	assert!(matches!(err, XdrError::InvariantViolation { len: 3, max: 2, .. }));
}
