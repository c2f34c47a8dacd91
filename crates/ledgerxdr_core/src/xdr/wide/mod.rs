//! 128- and 256-bit integers carried as 64-bit limbs, most significant first.

use crate::xdr::macros::xdr_struct;

xdr_struct! {
	/// Unsigned 128-bit value as two limbs.
	pub struct UInt128Parts {
		/// Upper 64 bits.
		pub hi: u64,
		/// Lower 64 bits.
		pub lo: u64,
	}
}

xdr_struct! {
	/// Signed 128-bit value; the sign lives in the high limb.
	pub struct Int128Parts {
		/// Upper 64 bits, two's complement.
		pub hi: i64,
		/// Lower 64 bits.
		pub lo: u64,
	}
}

xdr_struct! {
	/// Unsigned 256-bit value as four limbs.
	pub struct UInt256Parts {
		/// Bits 192..256.
		pub hi_hi: u64,
		/// Bits 128..192.
		pub hi_lo: u64,
		/// Bits 64..128.
		pub lo_hi: u64,
		/// Bits 0..64.
		pub lo_lo: u64,
	}
}

xdr_struct! {
	/// Signed 256-bit value; the sign lives in the highest limb.
	pub struct Int256Parts {
		/// Bits 192..256, two's complement.
		pub hi_hi: i64,
		/// Bits 128..192.
		pub hi_lo: u64,
		/// Bits 64..128.
		pub lo_hi: u64,
		/// Bits 0..64.
		pub lo_lo: u64,
	}
}

impl From<u128> for UInt128Parts {
	fn from(value: u128) -> Self {
		Self {
			hi: (value >> 64) as u64,
			lo: value as u64,
		}
	}
}

impl From<UInt128Parts> for u128 {
	fn from(value: UInt128Parts) -> Self {
		(u128::from(value.hi) << 64) | u128::from(value.lo)
	}
}

impl From<i128> for Int128Parts {
	fn from(value: i128) -> Self {
		Self {
			hi: (value >> 64) as i64,
			lo: value as u64,
		}
	}
}

impl From<Int128Parts> for i128 {
	fn from(value: Int128Parts) -> Self {
		(i128::from(value.hi) << 64) | i128::from(value.lo)
	}
}

fn limbs_from_be(bytes: &[u8; 32]) -> [u64; 4] {
	let mut limbs = [0_u64; 4];
	for (limb, chunk) in limbs.iter_mut().zip(bytes.chunks_exact(8)) {
		let mut word = [0_u8; 8];
		word.copy_from_slice(chunk);
		*limb = u64::from_be_bytes(word);
	}
	limbs
}

fn limbs_to_be(limbs: [u64; 4]) -> [u8; 32] {
	let mut out = [0_u8; 32];
	for (chunk, limb) in out.chunks_exact_mut(8).zip(limbs) {
		chunk.copy_from_slice(&limb.to_be_bytes());
	}
	out
}

impl UInt256Parts {
	/// Build from a 32-byte big-endian magnitude.
	pub fn from_be_bytes(bytes: [u8; 32]) -> Self {
		let [hi_hi, hi_lo, lo_hi, lo_lo] = limbs_from_be(&bytes);
		Self { hi_hi, hi_lo, lo_hi, lo_lo }
	}

	/// 32-byte big-endian rendering.
	pub fn to_be_bytes(&self) -> [u8; 32] {
		limbs_to_be([self.hi_hi, self.hi_lo, self.lo_hi, self.lo_lo])
	}
}

impl Int256Parts {
	/// Build from a 32-byte big-endian two's complement value.
	pub fn from_be_bytes(bytes: [u8; 32]) -> Self {
		let [hi_hi, hi_lo, lo_hi, lo_lo] = limbs_from_be(&bytes);
		Self {
			hi_hi: hi_hi as i64,
			hi_lo,
			lo_hi,
			lo_lo,
		}
	}

	/// 32-byte big-endian two's complement rendering.
	pub fn to_be_bytes(&self) -> [u8; 32] {
		limbs_to_be([self.hi_hi as u64, self.hi_lo, self.lo_hi, self.lo_lo])
	}

	/// Return `true` when the sign bit is set.
	pub fn is_negative(&self) -> bool {
		self.hi_hi < 0
	}
}

impl From<i128> for Int256Parts {
	fn from(value: i128) -> Self {
		let fill = if value < 0 { u64::MAX } else { 0 };
		Self {
			hi_hi: fill as i64,
			hi_lo: fill,
			lo_hi: (value >> 64) as u64,
			lo_lo: value as u64,
		}
	}
}

impl From<u128> for UInt256Parts {
	fn from(value: u128) -> Self {
		Self {
			hi_hi: 0,
			hi_lo: 0,
			lo_hi: (value >> 64) as u64,
			lo_lo: value as u64,
		}
	}
}

#[cfg(test)]
mod tests;
