use crate::xdr::{Int128Parts, Int256Parts, ReadXdr, UInt128Parts, UInt256Parts, WriteXdr};

#[test]
fn u128_splits_into_limbs() {
	let parts = UInt128Parts::from(0x0102_0304_0506_0708_1112_1314_1516_1718_u128);
	assert_eq!(parts.hi, 0x0102_0304_0506_0708);
	assert_eq!(parts.lo, 0x1112_1314_1516_1718);
	assert_eq!(u128::from(parts), 0x0102_0304_0506_0708_1112_1314_1516_1718);
}

#[test]
fn negative_i128_keeps_sign_in_high_limb() {
	let parts = Int128Parts::from(-2_i128);
	assert_eq!(parts.hi, -1);
	assert_eq!(parts.lo, u64::MAX - 1);
	assert_eq!(i128::from(parts.clone()), -2);
	assert_eq!(parts.to_xdr(), [vec![0xFF; 15], vec![0xFE]].concat());
}

#[test]
fn i128_extremes_convert_back() {
	for value in [i128::MIN, i128::MAX, 0, -1, 1] {
		assert_eq!(i128::from(Int128Parts::from(value)), value);
	}
}

#[test]
fn i256_writes_highest_limb_first() {
	let parts = Int256Parts {
		hi_hi: -3,
		hi_lo: 1,
		lo_hi: 2,
		lo_lo: 3,
	};
	let bytes = parts.to_xdr();
	assert_eq!(bytes.len(), 32);
	assert_eq!(&bytes[..8], &(-3_i64).to_be_bytes());
	assert_eq!(&bytes[24..], &3_u64.to_be_bytes());
	assert_eq!(bytes.as_slice(), parts.to_be_bytes().as_slice());
	assert_eq!(Int256Parts::from_xdr(&bytes).expect("decode"), parts);
	assert!(parts.is_negative());
}

#[test]
fn i256_sign_extends_from_i128() {
	let parts = Int256Parts::from(-1_i128);
	assert_eq!(parts.to_be_bytes(), [0xFF; 32]);
	assert_eq!(Int256Parts::from_be_bytes([0xFF; 32]), parts);
}

#[test]
fn u256_big_endian_bytes_round_trip() {
	let mut bytes = [0_u8; 32];
	bytes[0] = 0x80;
	bytes[31] = 0x01;
	let parts = UInt256Parts::from_be_bytes(bytes);
	assert_eq!(parts.hi_hi, 0x8000_0000_0000_0000);
	assert_eq!(parts.lo_lo, 1);
	assert_eq!(parts.to_be_bytes(), bytes);
	assert_eq!(UInt256Parts::from(5_u128).to_be_bytes()[31], 5);
}
