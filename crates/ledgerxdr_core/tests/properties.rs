#![allow(missing_docs)]

use ledgerxdr::xdr::{
	AlphaNum4, AlphaNum12, Asset, AssetCode4, AssetCode12, BytesM, ClaimPredicate, Hash, Int256Parts, Memo,
	PublicKey, ReadXdr, ScVal, StringM, TimeBounds, Uint256, VecM, WriteXdr, XdrError,
};
use ledgerxdr_testkit::strict_prefixes;
use proptest::prelude::*;

fn arb_key() -> impl Strategy<Value = PublicKey> {
	prop::array::uniform32(any::<u8>()).prop_map(|k| PublicKey::Ed25519(Uint256(k)))
}

fn arb_asset() -> impl Strategy<Value = Asset> {
	prop_oneof![
		Just(Asset::Native),
		(prop::array::uniform4(any::<u8>()), arb_key()).prop_map(|(code, issuer)| {
			Asset::CreditAlphanum4(AlphaNum4 {
				asset_code: AssetCode4(code),
				issuer,
			})
		}),
		(prop::array::uniform12(any::<u8>()), arb_key()).prop_map(|(code, issuer)| {
			Asset::CreditAlphanum12(AlphaNum12 {
				asset_code: AssetCode12(code),
				issuer,
			})
		}),
	]
}

fn arb_predicate() -> impl Strategy<Value = ClaimPredicate> {
	let leaf = prop_oneof![
		Just(ClaimPredicate::Unconditional),
		any::<i64>().prop_map(ClaimPredicate::BeforeAbsoluteTime),
		any::<i64>().prop_map(ClaimPredicate::BeforeRelativeTime),
	];
	leaf.prop_recursive(6, 48, 2, |inner| {
		prop_oneof![
			prop::collection::vec(inner.clone(), 0..=2)
				.prop_map(|v| ClaimPredicate::And(VecM::try_from(v).expect("two at most"))),
			prop::collection::vec(inner.clone(), 0..=2)
				.prop_map(|v| ClaimPredicate::Or(VecM::try_from(v).expect("two at most"))),
			prop::option::of(inner).prop_map(|child| ClaimPredicate::Not(child.map(Box::new))),
		]
	})
}

fn arb_memo() -> impl Strategy<Value = Memo> {
	prop_oneof![
		Just(Memo::None),
		prop::collection::vec(any::<u8>(), 0..=28)
			.prop_map(|text| Memo::Text(StringM::try_from(text).expect("28 at most"))),
		any::<u64>().prop_map(Memo::Id),
		prop::array::uniform32(any::<u8>()).prop_map(|h| Memo::Hash(Hash(h))),
		prop::array::uniform32(any::<u8>()).prop_map(|h| Memo::Return(Hash(h))),
	]
}

fn arb_int256() -> impl Strategy<Value = Int256Parts> {
	(any::<i64>(), any::<u64>(), any::<u64>(), any::<u64>()).prop_map(|(hi_hi, hi_lo, lo_hi, lo_lo)| Int256Parts {
		hi_hi,
		hi_lo,
		lo_hi,
		lo_lo,
	})
}

fn arb_sc_val() -> impl Strategy<Value = ScVal> {
	let leaf = prop_oneof![
		any::<bool>().prop_map(ScVal::Bool),
		Just(ScVal::Void),
		any::<u32>().prop_map(ScVal::U32),
		any::<i32>().prop_map(ScVal::I32),
		any::<u64>().prop_map(ScVal::U64),
		any::<i64>().prop_map(ScVal::I64),
		arb_int256().prop_map(ScVal::I256),
		prop::collection::vec(any::<u8>(), 0..40).prop_map(|b| ScVal::Bytes(BytesM::try_from(b).expect("unbounded"))),
		"[a-zA-Z0-9_]{0,32}".prop_map(|s| ScVal::Symbol(StringM::try_from(s).expect("32 at most"))),
	];
	leaf.prop_recursive(4, 32, 4, |inner| {
		prop::option::of(prop::collection::vec(inner, 0..4))
			.prop_map(|v| ScVal::Vec(v.map(|items| VecM::try_from(items).expect("unbounded"))))
	})
}

fn assert_round_trip<T>(value: &T) -> Result<(), TestCaseError>
where
	T: ReadXdr + WriteXdr + PartialEq + std::fmt::Debug,
{
	let bytes = value.to_xdr();
	prop_assert_eq!(bytes.len() % 4, 0);
	let back = T::from_xdr(&bytes).map_err(|err| TestCaseError::fail(err.to_string()))?;
	prop_assert_eq!(&back, value);
	prop_assert_eq!(back.to_xdr(), bytes);
	Ok(())
}

fn assert_prefixes_truncate<T>(value: &T) -> Result<(), TestCaseError>
where
	T: ReadXdr + WriteXdr + std::fmt::Debug,
{
	let bytes = value.to_xdr();
	for prefix in strict_prefixes(&bytes) {
		let err = T::from_xdr(prefix).expect_err("strict prefix must not decode");
		prop_assert!(
			matches!(err, XdrError::TruncatedInput { .. }),
			"prefix of {} bytes gave {err:?}",
			prefix.len()
		);
	}
	Ok(())
}

proptest! {
	#[test]
	fn asset_round_trips(asset in arb_asset()) {
		assert_round_trip(&asset)?;
		assert_prefixes_truncate(&asset)?;
	}

	#[test]
	fn predicate_round_trips(pred in arb_predicate()) {
		assert_round_trip(&pred)?;
		assert_prefixes_truncate(&pred)?;
	}

	#[test]
	fn memo_round_trips(memo in arb_memo()) {
		assert_round_trip(&memo)?;
		assert_prefixes_truncate(&memo)?;
	}

	#[test]
	fn int256_round_trips(parts in arb_int256()) {
		assert_round_trip(&parts)?;
		prop_assert_eq!(parts.to_xdr().len(), 32);
	}

	#[test]
	fn sc_val_round_trips(val in arb_sc_val()) {
		assert_round_trip(&val)?;
		assert_prefixes_truncate(&val)?;
	}

	#[test]
	fn time_bounds_round_trip(min_time in any::<u64>(), max_time in any::<u64>()) {
		assert_round_trip(&TimeBounds { min_time, max_time })?;
	}

	#[test]
	fn opaque_padding_is_minimal(data in prop::collection::vec(any::<u8>(), 0..64)) {
		let value = BytesM::<64>::try_from(data.clone()).expect("64 at most");
		let bytes = value.to_xdr();
		prop_assert_eq!(bytes.len(), 4 + data.len() + (4 - data.len() % 4) % 4);
		prop_assert!(bytes[4 + data.len()..].iter().all(|b| *b == 0));
	}

	#[test]
	fn decoded_bytes_re_encode_identically(raw in prop::collection::vec(any::<u8>(), 0..96)) {
		if let Ok(pred) = ClaimPredicate::from_xdr(&raw) {
			prop_assert_eq!(pred.to_xdr(), raw.clone());
		}
		if let Ok(val) = ScVal::from_xdr(&raw) {
			prop_assert_eq!(val.to_xdr(), raw);
		}
	}

	#[test]
	fn unknown_asset_discriminant_is_rejected(disc in any::<i32>().prop_filter("declared", |d| !(0..=2).contains(d))) {
		let mut bytes = disc.to_be_bytes().to_vec();
		bytes.extend_from_slice(&[0; 48]);
		let err = Asset::from_xdr(&bytes).expect_err("unknown discriminant");
		let is_unrecognized = matches!(err, XdrError::UnrecognizedDiscriminant { value, .. } if value == disc);
		prop_assert!(is_unrecognized);
	}
}
