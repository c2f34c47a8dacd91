//! Keys, hashes, and the scalar aliases shared across the schema.

use crate::xdr::macros::{xdr_enum, xdr_opaque, xdr_struct, xdr_union};
use crate::xdr::{BytesM, StringM};

xdr_opaque! {
	/// SHA-256 digest.
	pub struct Hash([u8; 32]);
}

xdr_opaque! {
	/// 256-bit raw key material.
	pub struct Uint256([u8; 32]);
}

xdr_opaque! {
	/// Master weight followed by low, medium, and high thresholds.
	pub struct Thresholds([u8; 4]);
}

xdr_opaque! {
	/// Last four bytes of the signing public key.
	pub struct SignatureHint([u8; 4]);
}

/// Account identifier.
pub type AccountId = PublicKey;
/// Validator node identifier.
pub type NodeId = PublicKey;
/// Raw signature bytes.
pub type Signature = BytesM<64>;
/// Short string, at most 32 bytes.
pub type String32 = StringM<32>;
/// Short string, at most 64 bytes.
pub type String64 = StringM<64>;
/// Account data entry value.
pub type DataValue = BytesM<64>;
/// Liquidity pool identifier.
pub type PoolId = Hash;
/// Seconds since the Unix epoch.
pub type TimePoint = u64;
/// Span in seconds.
pub type Duration = u64;
/// Account sequence number.
pub type SequenceNumber = i64;
/// Sponsoring account, absent when unsponsored.
pub type SponsorshipDescriptor = Option<AccountId>;

impl Thresholds {
	/// Weight of the master key.
	pub fn master_weight(&self) -> u8 {
		self.0[ThresholdIndexes::MasterWeight as usize]
	}

	/// Threshold at `index`.
	pub fn get(&self, index: ThresholdIndexes) -> u8 {
		self.0[index as usize]
	}
}

xdr_enum! {
	/// Kinds of key material.
	pub enum CryptoKeyType {
		/// Ed25519 key.
		Ed25519 = 0,
		/// Pre-authorized transaction hash.
		PreAuthTx = 1,
		/// SHA-256 preimage.
		HashX = 2,
		/// Ed25519 key with a signed payload.
		Ed25519SignedPayload = 3,
		/// Multiplexed Ed25519 key.
		MuxedEd25519 = 256,
	}
}

xdr_enum! {
	/// Public key algorithms.
	pub enum PublicKeyType {
		/// Ed25519 key.
		Ed25519 = 0,
	}
}

xdr_enum! {
	/// Signer key kinds.
	pub enum SignerKeyType {
		/// Ed25519 key.
		Ed25519 = 0,
		/// Pre-authorized transaction hash.
		PreAuthTx = 1,
		/// SHA-256 preimage.
		HashX = 2,
		/// Ed25519 key with a signed payload.
		Ed25519SignedPayload = 3,
	}
}

xdr_enum! {
	/// Positions within [`Thresholds`].
	pub enum ThresholdIndexes {
		/// Master key weight.
		MasterWeight = 0,
		/// Low threshold.
		Low = 1,
		/// Medium threshold.
		Med = 2,
		/// High threshold.
		High = 3,
	}
}

xdr_union! {
	/// Public key.
	pub enum PublicKey switch (PublicKeyType) {
		/// Ed25519 key.
		Ed25519(PublicKeyType::Ed25519) => Uint256,
	}
}

impl PublicKey {
	/// Raw ed25519 key bytes.
	pub fn ed25519(&self) -> &[u8; 32] {
		match self {
			Self::Ed25519(key) => &key.0,
		}
	}
}

impl From<[u8; 32]> for PublicKey {
	fn from(value: [u8; 32]) -> Self {
		Self::Ed25519(Uint256(value))
	}
}

xdr_struct! {
	/// Ed25519 key bound to a payload it must sign.
	pub struct SignerKeyEd25519SignedPayload {
		/// Ed25519 public key.
		pub ed25519: Uint256,
		/// Payload that must be signed.
		pub payload: BytesM<64>,
	}
}

xdr_union! {
	/// Key that may be added as an account signer.
	pub enum SignerKey switch (SignerKeyType) {
		/// Ed25519 key.
		Ed25519(SignerKeyType::Ed25519) => Uint256,
		/// Pre-authorized transaction hash.
		PreAuthTx(SignerKeyType::PreAuthTx) => Uint256,
		/// SHA-256 preimage.
		HashX(SignerKeyType::HashX) => Uint256,
		/// Ed25519 key with a signed payload.
		Ed25519SignedPayload(SignerKeyType::Ed25519SignedPayload) => SignerKeyEd25519SignedPayload,
	}
}

xdr_struct! {
	/// Signature together with the hint of the key that produced it.
	pub struct DecoratedSignature {
		/// Last four bytes of the signer key.
		pub hint: SignatureHint,
		/// Signature bytes.
		pub signature: Signature,
	}
}

xdr_enum! {
	/// Domain separation tags for hashed and signed payloads.
	pub enum EnvelopeType {
		/// Legacy transaction.
		TxV0 = 0,
		/// Consensus statement.
		Scp = 1,
		/// Transaction.
		Tx = 2,
		/// Peer authentication.
		Auth = 3,
		/// Consensus value.
		Scpvalue = 4,
		/// Fee bump transaction.
		TxFeeBump = 5,
		/// Operation id preimage.
		OpId = 6,
		/// Revoked pool share id preimage.
		PoolRevokeOpId = 7,
		/// Contract id preimage.
		ContractId = 8,
		/// Contract authorization preimage.
		SorobanAuthorization = 9,
	}
}
