//! Ledger headers, close values, and upgrades.

use crate::xdr::macros::{xdr_enum, xdr_struct, xdr_union};
use crate::xdr::types::{Hash, NodeId, Signature, TimePoint};
use crate::xdr::{BytesM, Extension, ExtensionPoint, VecM};

/// Encoded `LedgerUpgrade`.
pub type UpgradeType = BytesM<128>;

xdr_enum! {
	/// Close value kinds.
	pub enum StellarValueType {
		/// Unsigned.
		Basic = 0,
		/// Signed by a validator.
		Signed = 1,
	}
}

xdr_struct! {
	/// Validator signature over a close value.
	pub struct LedgerCloseValueSignature {
		/// Validator that signed.
		pub node_id: NodeId,
		/// Signature over the value.
		pub signature: Signature,
	}
}

xdr_union! {
	/// Close value signature, when signed.
	pub enum StellarValueExt switch (StellarValueType) {
		/// Unsigned.
		Basic(StellarValueType::Basic),
		/// Signed by a validator.
		Signed(StellarValueType::Signed) => LedgerCloseValueSignature,
	}
}

xdr_struct! {
	/// Value agreed by consensus for a ledger.
	pub struct StellarValue {
		/// Hash of the transaction set.
		pub tx_set_hash: Hash,
		/// Network close time.
		pub close_time: TimePoint,
		/// Encoded protocol upgrades.
		pub upgrades: VecM<UpgradeType, 6>,
		/// Unsigned, or signed by the closing validator.
		pub ext: StellarValueExt,
	}
}

xdr_enum! {
	/// Ledger header flag bits.
	pub enum LedgerHeaderFlags {
		/// Pools do not trade.
		DisableLiquidityPoolTradingFlag = 1,
		/// Deposits are off.
		DisableLiquidityPoolDepositFlag = 2,
		/// Withdrawals are off.
		DisableLiquidityPoolWithdrawalFlag = 4,
	}
}

xdr_struct! {
	/// Ledger-wide flags.
	pub struct LedgerHeaderExtensionV1 {
		/// Ledger header flag bits.
		pub flags: u32,
		/// Reserved; always `V0`.
		pub ext: ExtensionPoint,
	}
}

xdr_struct! {
	/// Ledger header.
	pub struct LedgerHeader {
		/// Protocol version.
		pub ledger_version: u32,
		/// Hash of the previous ledger header.
		pub previous_ledger_hash: Hash,
		/// Value agreed by consensus.
		pub scp_value: StellarValue,
		/// Hash of the transaction results.
		pub tx_set_result_hash: Hash,
		/// Hash of the bucket list after close.
		pub bucket_list_hash: Hash,
		/// Ledger sequence number.
		pub ledger_seq: u32,
		/// Lumens in existence.
		pub total_coins: i64,
		/// Fees burned since the last inflation run.
		pub fee_pool: i64,
		/// Inflation runs so far.
		pub inflation_seq: u32,
		/// Last used global id.
		pub id_pool: u64,
		/// Per-operation base fee in stroops.
		pub base_fee: u32,
		/// Base reserve per ledger subentry, in stroops.
		pub base_reserve: u32,
		/// Operations allowed per ledger.
		pub max_tx_set_size: u32,
		/// Hashes of ledgers at exponentially growing distances.
		pub skip_list: [Hash; 4],
		/// Version [`LedgerHeaderExtensionV1`] extension, when present.
		pub ext: Extension<LedgerHeaderExtensionV1>,
	}
}

xdr_enum! {
	/// Upgrade kinds.
	pub enum LedgerUpgradeType {
		/// Protocol version.
		Version = 1,
		/// Base fee.
		BaseFee = 2,
		/// Operations per ledger.
		MaxTxSetSize = 3,
		/// Base reserve.
		BaseReserve = 4,
		/// Header flags.
		Flags = 5,
		/// Contract settings.
		Config = 6,
		/// Contract transactions per ledger.
		MaxSorobanTxSetSize = 7,
	}
}

xdr_struct! {
	/// Location of a proposed configuration upgrade set.
	pub struct ConfigUpgradeSetKey {
		/// Contract holding the upgrade set.
		pub contract_id: Hash,
		/// Hash of the upgrade set stored under the contract.
		pub content_hash: Hash,
	}
}

xdr_union! {
	/// Network parameter upgrade.
	pub enum LedgerUpgrade switch (LedgerUpgradeType) {
		/// Protocol version.
		Version(LedgerUpgradeType::Version) => u32,
		/// Base fee.
		BaseFee(LedgerUpgradeType::BaseFee) => u32,
		/// Operations per ledger.
		MaxTxSetSize(LedgerUpgradeType::MaxTxSetSize) => u32,
		/// Base reserve.
		BaseReserve(LedgerUpgradeType::BaseReserve) => u32,
		/// Header flags.
		Flags(LedgerUpgradeType::Flags) => u32,
		/// Contract settings.
		Config(LedgerUpgradeType::Config) => ConfigUpgradeSetKey,
		/// Contract transactions per ledger.
		MaxSorobanTxSetSize(LedgerUpgradeType::MaxSorobanTxSetSize) => u32,
	}
}

xdr_struct! {
	/// Header with its hash, as stored in history archives.
	pub struct LedgerHeaderHistoryEntry {
		/// Hash of `header`.
		pub hash: Hash,
		/// Closed ledger header.
		pub header: LedgerHeader,
		/// Reserved; always `V0`.
		pub ext: ExtensionPoint,
	}
}
