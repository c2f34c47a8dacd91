#![allow(missing_docs)]

use ledgerxdr::xdr::{
	Asset, DecodeOptions, Frames, Memo, MuxedAccount, OperationBody, Preconditions, PublicKey, ReadXdr, RecordIter,
	TransactionEnvelope, Type, TypeVariant, Uint256, WriteXdr, XdrError, decompress, write_framed,
};
use ledgerxdr_testkit::{read_hex_fixture, strict_prefixes};

fn envelope_bytes() -> Vec<u8> {
	read_hex_fixture("payment_envelope.hex")
}

#[test]
fn payment_envelope_decodes_field_by_field() {
	let env = TransactionEnvelope::from_xdr(&envelope_bytes()).expect("decode");
	let TransactionEnvelope::Tx(v1) = &env else {
		panic!("expected v1 envelope, got {}", env.arm_name());
	};

	let tx = &v1.tx;
	assert_eq!(tx.source_account, MuxedAccount::Ed25519(Uint256([1; 32])));
	assert_eq!(tx.fee, 100);
	assert_eq!(tx.seq_num, 0x1_0000_0002);
	assert_eq!(tx.cond.time_bounds().map(|tb| tb.max_time), Some(1_700_000_000));
	assert!(matches!(tx.cond, Preconditions::Time(_)));
	let Memo::Text(text) = &tx.memo else {
		panic!("expected text memo");
	};
	assert_eq!(text.as_bytes(), b"hello");

	assert_eq!(env.operations().len(), 1);
	let op = &env.operations()[0];
	assert!(op.source_account.is_none());
	let OperationBody::Payment(payment) = &op.body else {
		panic!("expected payment");
	};
	assert_eq!(payment.destination.account_id(), PublicKey::Ed25519(Uint256([2; 32])));
	assert_eq!(payment.amount, 10_000_000);
	assert_eq!(payment.asset.code(), Some(&b"USD"[..]));
	let Asset::CreditAlphanum4(alpha) = &payment.asset else {
		panic!("expected alphanum4");
	};
	assert_eq!(alpha.asset_code.0, *b"USD\0");

	assert_eq!(env.signatures().len(), 1);
	assert_eq!(env.signatures()[0].hint.0, [0xAA, 0xBB, 0xCC, 0xDD]);
	assert_eq!(env.signatures()[0].signature.as_slice(), &[5; 64][..]);
	assert_eq!(env.fee_source(), PublicKey::Ed25519(Uint256([1; 32])));
}

#[test]
fn payment_envelope_re_encodes_identically() {
	let bytes = envelope_bytes();
	let env = TransactionEnvelope::from_xdr(&bytes).expect("decode");
	assert_eq!(env.to_xdr(), bytes);

	let text = env.to_xdr_base64();
	assert_eq!(TransactionEnvelope::from_xdr_base64(&text).expect("base64"), env);
}

#[test]
fn payment_envelope_decodes_through_registry() {
	let bytes = envelope_bytes();
	let variant = TypeVariant::lookup("transaction_envelope").expect("lookup");
	let value = Type::from_xdr(variant, &bytes).expect("decode");
	assert_eq!(value.variant(), TypeVariant::TransactionEnvelope);
	assert_eq!(value.to_xdr(), bytes);
}

#[test]
fn every_strict_prefix_is_truncated() {
	let bytes = envelope_bytes();
	for prefix in strict_prefixes(&bytes) {
		let err = TransactionEnvelope::from_xdr(prefix).expect_err("prefix decoded");
		assert!(
			matches!(err, XdrError::TruncatedInput { .. }),
			"prefix len {} gave {err}",
			prefix.len()
		);
	}
}

#[test]
fn trailing_byte_rejected_unless_allowed() {
	let mut bytes = envelope_bytes();
	bytes.extend_from_slice(&[0; 4]);
	let err = TransactionEnvelope::from_xdr(&bytes).expect_err("trailing");
	assert!(matches!(err, XdrError::TrailingBytes { leftover: 4 }));

	let lenient = DecodeOptions {
		allow_trailing_bytes: true,
		..DecodeOptions::default()
	};
	assert!(TransactionEnvelope::from_xdr_with(&bytes, &lenient).is_ok());
}

#[test]
fn framed_stream_yields_each_envelope() {
	let env = TransactionEnvelope::from_xdr(&envelope_bytes()).expect("decode");
	let stream = write_framed([&env, &env]).expect("frame");

	let records: Vec<_> = RecordIter::new(&stream).collect::<Result<_, _>>().expect("records");
	assert_eq!(records.len(), 2);
	assert_eq!(records[1].offset, 4 + records[0].payload.len());
	assert!(records.iter().all(|r| r.fragments == 1));

	let decoded: Vec<TransactionEnvelope> = Frames::new(&stream).collect::<Result<_, _>>().expect("frames");
	assert_eq!(decoded, vec![env.clone(), env]);
}

#[test]
fn zstd_wrapped_envelope_decodes() {
	let bytes = envelope_bytes();
	let packed = zstd::encode_all(&bytes[..], 3).expect("compress");
	let (mode, raw) = decompress(packed).expect("decompress");
	assert_eq!(mode.as_str(), "zstd");
	assert_eq!(raw, bytes);
	assert!(TransactionEnvelope::from_xdr(&raw).is_ok());
}

#[test]
fn json_shape_uses_snake_case_tags_and_hex() {
	let env = TransactionEnvelope::from_xdr(&envelope_bytes()).expect("decode");
	let json = serde_json::to_value(&env).expect("json");

	let tx = &json["tx"]["tx"];
	assert_eq!(tx["fee"], 100);
	assert_eq!(tx["memo"]["text"], "hello");
	assert_eq!(tx["source_account"]["ed25519"], hex::encode([1_u8; 32]));
	assert_eq!(tx["ext"], "v0");
	assert_eq!(tx["operations"][0]["body"]["payment"]["amount"], 10_000_000);
	assert_eq!(json["tx"]["signatures"][0]["hint"], "aabbccdd");

	let back: TransactionEnvelope = serde_json::from_value(json).expect("from json");
	assert_eq!(back, env);
}
