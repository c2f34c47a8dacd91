//! Transactions, envelopes, and the payloads that get hashed and signed.

use crate::xdr::macros::{xdr_enum, xdr_struct, xdr_union};
use crate::xdr::types::{
	AccountId, Asset, ContractIdPreimage, DecoratedSignature, Duration, EnvelopeType, Hash, LedgerKey, MuxedAccount,
	Operation, PoolId, SequenceNumber, SignerKey, SorobanAuthorizedInvocation, TimePoint, Uint256,
};
use crate::xdr::{Extension, ExtensionPoint, StringM, VecM};

/// Maximum operations in one transaction.
pub const MAX_OPS_PER_TX: u32 = 100;

xdr_enum! {
	/// Memo kinds.
	pub enum MemoType {
		/// No memo.
		None = 0,
		/// Text up to 28 bytes.
		Text = 1,
		/// Unsigned 64-bit id.
		Id = 2,
		/// 32-byte hash.
		Hash = 3,
		/// 32-byte refund hash.
		Return = 4,
	}
}

xdr_union! {
	/// Transaction memo.
	pub enum Memo switch (MemoType) {
		/// No memo.
		None(MemoType::None),
		/// Text up to 28 bytes.
		Text(MemoType::Text) => StringM<28>,
		/// Unsigned 64-bit id.
		Id(MemoType::Id) => u64,
		/// 32-byte hash.
		Hash(MemoType::Hash) => Hash,
		/// Hash of the transaction being refunded.
		Return(MemoType::Return) => Hash,
	}
}

xdr_struct! {
	/// Closed-time validity window; zero `max_time` means unbounded.
	pub struct TimeBounds {
		/// Earliest close time.
		pub min_time: TimePoint,
		/// Latest close time, inclusive; zero means none.
		pub max_time: TimePoint,
	}
}

xdr_struct! {
	/// Ledger validity window; zero `max_ledger` means unbounded.
	pub struct LedgerBounds {
		/// First valid ledger.
		pub min_ledger: u32,
		/// Ledger at which validity ends, exclusive; zero means none.
		pub max_ledger: u32,
	}
}

xdr_struct! {
	/// Extended preconditions.
	pub struct PreconditionsV2 {
		/// Close time range.
		pub time_bounds: Option<TimeBounds>,
		/// Ledger range the transaction is valid in.
		pub ledger_bounds: Option<LedgerBounds>,
		/// Lowest source sequence the transaction may follow.
		pub min_seq_num: Option<SequenceNumber>,
		/// Seconds since the source sequence last changed.
		pub min_seq_age: Duration,
		/// Ledgers since the source sequence last changed.
		pub min_seq_ledger_gap: u32,
		/// Additional required signers.
		pub extra_signers: VecM<SignerKey, 2>,
	}
}

xdr_enum! {
	/// Precondition kinds.
	pub enum PreconditionType {
		/// No conditions.
		None = 0,
		/// Time bounds only.
		Time = 1,
		/// Extended conditions.
		V2 = 2,
	}
}

xdr_union! {
	/// Conditions that must hold for a transaction to be valid.
	pub enum Preconditions switch (PreconditionType) {
		/// No conditions.
		None(PreconditionType::None),
		/// Time bounds only.
		Time(PreconditionType::Time) => TimeBounds,
		/// Extended conditions.
		V2(PreconditionType::V2) => PreconditionsV2,
	}
}

impl Preconditions {
	/// Time bounds, whichever form carries them.
	pub fn time_bounds(&self) -> Option<&TimeBounds> {
		match self {
			Self::None => None,
			Self::Time(bounds) => Some(bounds),
			Self::V2(v2) => v2.time_bounds.as_ref(),
		}
	}
}

xdr_struct! {
	/// Ledger keys a contract transaction may touch.
	pub struct LedgerFootprint {
		/// Keys only read.
		pub read_only: VecM<LedgerKey>,
		/// Keys read and written.
		pub read_write: VecM<LedgerKey>,
	}
}

xdr_struct! {
	/// Declared contract resource usage.
	pub struct SorobanResources {
		/// Entries read and written.
		pub footprint: LedgerFootprint,
		/// CPU instruction budget.
		pub instructions: u32,
		/// Bytes read.
		pub read_bytes: u32,
		/// Bytes written.
		pub write_bytes: u32,
	}
}

xdr_struct! {
	/// Contract resources and fee attached to a transaction.
	pub struct SorobanTransactionData {
		/// Reserved; always `V0`.
		pub ext: ExtensionPoint,
		/// Declared resource limits.
		pub resources: SorobanResources,
		/// Resource fee budget in stroops.
		pub resource_fee: i64,
	}
}

xdr_struct! {
	/// Pre-muxed-account transaction form.
	pub struct TransactionV0 {
		/// Source account key.
		pub source_account_ed25519: Uint256,
		/// Maximum total fee in stroops.
		pub fee: u32,
		/// Source sequence number.
		pub seq_num: SequenceNumber,
		/// Close time range.
		pub time_bounds: Option<TimeBounds>,
		/// Attached memo.
		pub memo: Memo,
		/// Operations to apply, in order.
		pub operations: VecM<Operation, MAX_OPS_PER_TX>,
		/// Reserved; always `V0`.
		pub ext: ExtensionPoint,
	}
}

xdr_struct! {
	/// Signed v0 transaction.
	pub struct TransactionV0Envelope {
		/// Signed transaction.
		pub tx: TransactionV0,
		/// Signatures over the payload.
		pub signatures: VecM<DecoratedSignature, 20>,
	}
}

xdr_struct! {
	/// Transaction.
	pub struct Transaction {
		/// Source account.
		pub source_account: MuxedAccount,
		/// Maximum total fee in stroops.
		pub fee: u32,
		/// Source sequence number.
		pub seq_num: SequenceNumber,
		/// Validity preconditions.
		pub cond: Preconditions,
		/// Attached memo.
		pub memo: Memo,
		/// Operations to apply, in order.
		pub operations: VecM<Operation, MAX_OPS_PER_TX>,
		/// Version [`SorobanTransactionData`] extension, when present.
		pub ext: Extension<SorobanTransactionData>,
	}
}

xdr_struct! {
	/// Signed transaction.
	pub struct TransactionV1Envelope {
		/// Signed transaction.
		pub tx: Transaction,
		/// Signatures over the payload.
		pub signatures: VecM<DecoratedSignature, 20>,
	}
}

xdr_union! {
	/// Transaction wrapped by a fee bump.
	pub enum FeeBumpTransactionInnerTx switch (EnvelopeType) {
		/// Transaction.
		Tx(EnvelopeType::Tx) => TransactionV1Envelope,
	}
}

xdr_struct! {
	/// Fee bump around an already-signed transaction.
	pub struct FeeBumpTransaction {
		/// Account paying the bumped fee.
		pub fee_source: MuxedAccount,
		/// Replacement total fee in stroops.
		pub fee: i64,
		/// Transaction whose fee is bumped.
		pub inner_tx: FeeBumpTransactionInnerTx,
		/// Reserved; always `V0`.
		pub ext: ExtensionPoint,
	}
}

xdr_struct! {
	/// Signed fee bump.
	pub struct FeeBumpTransactionEnvelope {
		/// Signed transaction.
		pub tx: FeeBumpTransaction,
		/// Signatures over the payload.
		pub signatures: VecM<DecoratedSignature, 20>,
	}
}

xdr_union! {
	/// Any signed transaction form.
	pub enum TransactionEnvelope switch (EnvelopeType) {
		/// Legacy transaction.
		TxV0(EnvelopeType::TxV0) => TransactionV0Envelope,
		/// Transaction.
		Tx(EnvelopeType::Tx) => TransactionV1Envelope,
		/// Fee bump transaction.
		TxFeeBump(EnvelopeType::TxFeeBump) => FeeBumpTransactionEnvelope,
	}
}

impl TransactionEnvelope {
	/// Signatures on the outermost transaction.
	pub fn signatures(&self) -> &[DecoratedSignature] {
		match self {
			Self::TxV0(env) => &env.signatures,
			Self::Tx(env) => &env.signatures,
			Self::TxFeeBump(env) => &env.signatures,
		}
	}

	/// Operations of the innermost transaction.
	pub fn operations(&self) -> &[Operation] {
		match self {
			Self::TxV0(env) => &env.tx.operations,
			Self::Tx(env) => &env.tx.operations,
			Self::TxFeeBump(env) => match &env.tx.inner_tx {
				FeeBumpTransactionInnerTx::Tx(inner) => &inner.tx.operations,
			},
		}
	}

	/// Account paying the fee.
	pub fn fee_source(&self) -> AccountId {
		match self {
			Self::TxV0(env) => AccountId::Ed25519(env.tx.source_account_ed25519),
			Self::Tx(env) => env.tx.source_account.account_id(),
			Self::TxFeeBump(env) => env.tx.fee_source.account_id(),
		}
	}
}

xdr_union! {
	/// Transaction form covered by a signature.
	pub enum TransactionSignaturePayloadTaggedTransaction switch (EnvelopeType) {
		/// Transaction.
		Tx(EnvelopeType::Tx) => Transaction,
		/// Fee bump transaction.
		TxFeeBump(EnvelopeType::TxFeeBump) => FeeBumpTransaction,
	}
}

xdr_struct! {
	/// Bytes whose hash is signed for a transaction.
	pub struct TransactionSignaturePayload {
		/// Hash of the network passphrase.
		pub network_id: Hash,
		/// Transaction being signed.
		pub tagged_transaction: TransactionSignaturePayloadTaggedTransaction,
	}
}

xdr_struct! {
	/// Operation id preimage.
	pub struct HashIdPreimageOperationId {
		/// Source account.
		pub source_account: AccountId,
		/// Source sequence number.
		pub seq_num: SequenceNumber,
		/// Operation index.
		pub op_num: u32,
	}
}

xdr_struct! {
	/// Pool revoke id preimage.
	pub struct HashIdPreimageRevokeId {
		/// Source account.
		pub source_account: AccountId,
		/// Source sequence number.
		pub seq_num: SequenceNumber,
		/// Operation index.
		pub op_num: u32,
		/// Pool involved.
		pub liquidity_pool_id: PoolId,
		/// Asset of the revoked trust line.
		pub asset: Asset,
	}
}

xdr_struct! {
	/// Contract id preimage bound to a network.
	pub struct HashIdPreimageContractId {
		/// Network passphrase hash.
		pub network_id: Hash,
		/// Deployer-specific part of the preimage.
		pub contract_id_preimage: ContractIdPreimage,
	}
}

xdr_struct! {
	/// Authorization payload preimage.
	pub struct HashIdPreimageSorobanAuthorization {
		/// Network passphrase hash.
		pub network_id: Hash,
		/// Replay protection nonce.
		pub nonce: i64,
		/// Last ledger the signature is valid for.
		pub signature_expiration_ledger: u32,
		/// Authorized call tree.
		pub invocation: SorobanAuthorizedInvocation,
	}
}

xdr_union! {
	/// Inputs hashed to derive ids and authorization payloads.
	pub enum HashIdPreimage switch (EnvelopeType) {
		/// Operation id preimage.
		OpId(EnvelopeType::OpId) => HashIdPreimageOperationId,
		/// Revoked pool share id preimage.
		PoolRevokeOpId(EnvelopeType::PoolRevokeOpId) => HashIdPreimageRevokeId,
		/// Contract id preimage.
		ContractId(EnvelopeType::ContractId) => HashIdPreimageContractId,
		/// Contract authorization preimage.
		SorobanAuthorization(EnvelopeType::SorobanAuthorization) => HashIdPreimageSorobanAuthorization,
	}
}
