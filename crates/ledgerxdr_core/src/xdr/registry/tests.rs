use std::collections::HashSet;
use std::str::FromStr;

use crate::xdr::{
	Asset, LedgerKey, LedgerKeyAccount, PublicKey, Shape, Signer, SignerKey, Type, TypeVariant, Uint256, WriteXdr,
	XdrError,
};

#[test]
fn names_parse_back_to_variants() {
	for variant in TypeVariant::ALL {
		assert_eq!(TypeVariant::from_str(variant.name()).expect("registered name"), *variant);
	}
}

#[test]
fn names_are_unique() {
	let names: HashSet<_> = TypeVariant::ALL.iter().map(|v| v.name()).collect();
	assert_eq!(names.len(), TypeVariant::ALL.len());
}

#[test]
fn descriptor_name_matches_variant() {
	for variant in TypeVariant::ALL {
		assert_eq!(variant.descriptor().name, variant.name());
	}
}

#[test]
fn unknown_name_is_reported() {
	let err = TypeVariant::from_str("NotAType").expect_err("unregistered");
	assert!(matches!(err, XdrError::UnknownTypeName { ref name } if name == "NotAType"));
}

#[test]
fn lookup_accepts_snake_case() {
	assert_eq!(TypeVariant::lookup("transaction_envelope").expect("snake"), TypeVariant::TransactionEnvelope);
	assert_eq!(TypeVariant::lookup("scval").expect("lowercase"), TypeVariant::ScVal);
}

#[test]
fn dynamic_decode_matches_static() {
	let bytes = Asset::Native.to_xdr();
	let value = Type::from_xdr(TypeVariant::Asset, &bytes).expect("decode");
	assert_eq!(value.variant(), TypeVariant::Asset);
	assert_eq!(value, Type::Asset(Box::new(Asset::Native)));
	assert_eq!(value.to_xdr(), bytes);
}

#[test]
fn union_descriptor_lists_arms() {
	let descriptor = TypeVariant::Asset.descriptor();
	let Shape::Union { discriminant, arms } = descriptor.shape else {
		panic!("Asset is a union");
	};
	assert_eq!(discriminant, "AssetType");
	assert_eq!(arms.len(), 3);
	assert_eq!(arms[0].variant, "Native");
	assert_eq!(arms[0].payload, None);
	assert_eq!(arms[1].payload, Some("AlphaNum4"));
}

#[test]
fn enum_descriptor_keeps_negative_values() {
	let Shape::Enum { members } = TypeVariant::TransactionResultCode.descriptor().shape else {
		panic!("TransactionResultCode is an enum");
	};
	assert!(members.iter().any(|m| m.name == "TxFailed" && m.value == -1));
	assert!(members.iter().any(|m| m.name == "TxFeeBumpInnerSuccess" && m.value == 1));
}

#[test]
fn schema_values_work_as_set_keys() {
	let account = |byte: u8| {
		LedgerKey::Account(LedgerKeyAccount {
			account_id: PublicKey::Ed25519(Uint256([byte; 32])),
		})
	};
	let keys: HashSet<LedgerKey> = [account(1), account(2), account(1)].into_iter().collect();
	assert_eq!(keys.len(), 2);

	let signers: HashSet<Signer> = [
		Signer {
			key: SignerKey::Ed25519(Uint256([3; 32])),
			weight: 1,
		},
		Signer {
			key: SignerKey::HashX(Uint256([3; 32])),
			weight: 1,
		},
	]
	.into_iter()
	.collect();
	assert_eq!(signers.len(), 2);

	let variants: HashSet<TypeVariant> = TypeVariant::ALL.iter().copied().collect();
	assert_eq!(variants.len(), TypeVariant::ALL.len());
}
