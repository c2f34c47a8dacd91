//! Ledger entries and the keys that address them.

use crate::xdr::macros::{xdr_enum, xdr_struct, xdr_union};
use crate::xdr::types::{
	AccountId, Asset, ClaimableBalanceId, Claimant, ConfigSettingEntry, ConfigSettingId, DataValue, Hash, Liabilities,
	LiquidityPoolConstantProductParameters, LiquidityPoolType, PoolId, Price, ScAddress, ScVal, SequenceNumber,
	SignerKey, SponsorshipDescriptor, String32, String64, Thresholds, TimePoint, TrustLineAsset,
};
use crate::xdr::{BytesM, Extension, ExtensionPoint, VecM};

/// Maximum number of signers on one account.
pub const MAX_SIGNERS: u32 = 20;

xdr_enum! {
	/// Ledger entry kinds.
	pub enum LedgerEntryType {
		/// Account.
		Account = 0,
		/// Trust line.
		Trustline = 1,
		/// Offer.
		Offer = 2,
		/// Data entry.
		Data = 3,
		/// Claimable balance.
		ClaimableBalance = 4,
		/// Liquidity pool.
		LiquidityPool = 5,
		/// Contract storage.
		ContractData = 6,
		/// Contract code.
		ContractCode = 7,
		/// Network setting.
		ConfigSetting = 8,
		/// Time to live.
		Ttl = 9,
	}
}

xdr_struct! {
	/// Additional account signer.
	pub struct Signer {
		/// Signer key.
		pub key: SignerKey,
		/// Signer weight; zero removes it.
		pub weight: u32,
	}
}

xdr_enum! {
	/// Account flag bits.
	pub enum AccountFlags {
		/// Trust lines need issuer authorization.
		AuthRequiredFlag = 1,
		/// Issuer may revoke authorization.
		AuthRevocableFlag = 2,
		/// Flags can no longer change.
		AuthImmutableFlag = 4,
		/// New trust lines allow clawback.
		AuthClawbackEnabledFlag = 8,
	}
}

xdr_struct! {
	/// Sequence bump bookkeeping.
	pub struct AccountEntryExtensionV3 {
		/// Reserved; always `V0`.
		pub ext: ExtensionPoint,
		/// Ledger the sequence number last changed in.
		pub seq_ledger: u32,
		/// Close time when the sequence number last changed.
		pub seq_time: TimePoint,
	}
}

xdr_struct! {
	/// Sponsorship counters.
	pub struct AccountEntryExtensionV2 {
		/// Reserves sponsored for this account.
		pub num_sponsored: u32,
		/// Reserves this account sponsors.
		pub num_sponsoring: u32,
		/// Sponsor of each signer, parallel to `AccountEntry::signers`.
		pub signer_sponsoring_ids: VecM<SponsorshipDescriptor, MAX_SIGNERS>,
		/// Version [`AccountEntryExtensionV3`] extension, when present.
		pub ext: Extension<AccountEntryExtensionV3, 3>,
	}
}

xdr_struct! {
	/// Offer liabilities.
	pub struct AccountEntryExtensionV1 {
		/// Outstanding buying and selling liabilities.
		pub liabilities: Liabilities,
		/// Version [`AccountEntryExtensionV2`] extension, when present.
		pub ext: Extension<AccountEntryExtensionV2, 2>,
	}
}

xdr_struct! {
	/// Account state.
	pub struct AccountEntry {
		/// Owning account.
		pub account_id: AccountId,
		/// Native balance in stroops.
		pub balance: i64,
		/// Last used sequence number.
		pub seq_num: SequenceNumber,
		/// Subentries owned.
		pub num_sub_entries: u32,
		/// Inflation vote.
		pub inflation_dest: Option<AccountId>,
		/// Account flag bits.
		pub flags: u32,
		/// Home domain.
		pub home_domain: String32,
		/// Master weight and thresholds.
		pub thresholds: Thresholds,
		/// Extra signers.
		pub signers: VecM<Signer, MAX_SIGNERS>,
		/// Version [`AccountEntryExtensionV1`] extension, when present.
		pub ext: Extension<AccountEntryExtensionV1>,
	}
}

impl AccountEntry {
	/// Offer liabilities, zero when the v1 extension is absent.
	pub fn liabilities(&self) -> Liabilities {
		self.ext
			.payload()
			.map_or(Liabilities { buying: 0, selling: 0 }, |v1| v1.liabilities.clone())
	}

	/// Sequence bump bookkeeping, when recorded.
	pub fn extension_v3(&self) -> Option<&AccountEntryExtensionV3> {
		self.ext.payload()?.ext.payload()?.ext.payload()
	}
}

xdr_enum! {
	/// Trust line flag bits.
	pub enum TrustLineFlags {
		/// Fully authorized.
		AuthorizedFlag = 1,
		/// May keep offers but not trade.
		AuthorizedToMaintainLiabilitiesFlag = 2,
		/// Issuer may claw back.
		TrustlineClawbackEnabledFlag = 4,
	}
}

xdr_struct! {
	/// Pool share usage counter.
	pub struct TrustLineEntryExtensionV2 {
		/// Pool share trust lines using this asset.
		pub liquidity_pool_use_count: i32,
		/// Reserved; always `V0`.
		pub ext: ExtensionPoint,
	}
}

xdr_struct! {
	/// Offer liabilities on a trust line.
	pub struct TrustLineEntryV1 {
		/// Outstanding buying and selling liabilities.
		pub liabilities: Liabilities,
		/// Version [`TrustLineEntryExtensionV2`] extension, when present.
		pub ext: Extension<TrustLineEntryExtensionV2, 2>,
	}
}

xdr_struct! {
	/// Trust line state.
	pub struct TrustLineEntry {
		/// Owning account.
		pub account_id: AccountId,
		/// Asset the line holds.
		pub asset: TrustLineAsset,
		/// Held amount of the asset.
		pub balance: i64,
		/// Most the line may hold.
		pub limit: i64,
		/// Trust line flag bits.
		pub flags: u32,
		/// Version [`TrustLineEntryV1`] extension, when present.
		pub ext: Extension<TrustLineEntryV1>,
	}
}

xdr_enum! {
	/// Offer flag bits.
	pub enum OfferEntryFlags {
		/// Does not cross equal-price offers.
		PassiveFlag = 1,
	}
}

xdr_struct! {
	/// Open order book offer.
	pub struct OfferEntry {
		/// Offer owner.
		pub seller_id: AccountId,
		/// Offer identity.
		pub offer_id: i64,
		/// Asset the offer sells.
		pub selling: Asset,
		/// Asset the offer buys.
		pub buying: Asset,
		/// Amount of `selling` offered.
		pub amount: i64,
		/// Price of `selling` in terms of `buying`.
		pub price: Price,
		/// Offer flag bits.
		pub flags: u32,
		/// Reserved; always `V0`.
		pub ext: ExtensionPoint,
	}
}

xdr_struct! {
	/// Named account data.
	pub struct DataEntry {
		/// Owning account.
		pub account_id: AccountId,
		/// Entry name.
		pub data_name: String64,
		/// Stored value.
		pub data_value: DataValue,
		/// Reserved; always `V0`.
		pub ext: ExtensionPoint,
	}
}

xdr_enum! {
	/// Claimable balance flag bits.
	pub enum ClaimableBalanceFlags {
		/// Issuer may claw back.
		ClaimableBalanceClawbackEnabledFlag = 1,
	}
}

xdr_struct! {
	/// Claimable balance flags.
	pub struct ClaimableBalanceEntryExtensionV1 {
		/// Reserved; always `V0`.
		pub ext: ExtensionPoint,
		/// Balance flag bits.
		pub flags: u32,
	}
}

xdr_struct! {
	/// Balance awaiting a claimant.
	pub struct ClaimableBalanceEntry {
		/// Identity of the balance.
		pub balance_id: ClaimableBalanceId,
		/// Accounts allowed to claim, with their predicates.
		pub claimants: VecM<Claimant, 10>,
		/// Asset held.
		pub asset: Asset,
		/// Amount held by the balance.
		pub amount: i64,
		/// Version [`ClaimableBalanceEntryExtensionV1`] extension, when present.
		pub ext: Extension<ClaimableBalanceEntryExtensionV1>,
	}
}

xdr_struct! {
	/// Constant-product pool reserves.
	pub struct LiquidityPoolEntryConstantProduct {
		/// Pool assets and fee.
		pub params: LiquidityPoolConstantProductParameters,
		/// Reserve of asset A.
		pub reserve_a: i64,
		/// Reserve of asset B.
		pub reserve_b: i64,
		/// Shares issued.
		pub total_pool_shares: i64,
		/// Trust lines holding pool shares.
		pub pool_shares_trust_line_count: i64,
	}
}

xdr_union! {
	/// Pool state by kind.
	pub enum LiquidityPoolEntryBody switch (LiquidityPoolType) {
		/// Constant product pool.
		ConstantProduct(LiquidityPoolType::ConstantProduct) => LiquidityPoolEntryConstantProduct,
	}
}

xdr_struct! {
	/// Liquidity pool state.
	pub struct LiquidityPoolEntry {
		/// Pool identity.
		pub liquidity_pool_id: PoolId,
		/// Pool parameters and reserves.
		pub body: LiquidityPoolEntryBody,
	}
}

xdr_enum! {
	/// Contract storage lifetimes.
	pub enum ContractDataDurability {
		/// Deleted on expiry.
		Temporary = 0,
		/// Archived on expiry.
		Persistent = 1,
	}
}

xdr_struct! {
	/// Contract storage entry.
	pub struct ContractDataEntry {
		/// Reserved; always `V0`.
		pub ext: ExtensionPoint,
		/// Contract owning the entry.
		pub contract: ScAddress,
		/// Storage key.
		pub key: ScVal,
		/// Storage durability.
		pub durability: ContractDataDurability,
		/// Stored value.
		pub val: ScVal,
	}
}

xdr_struct! {
	/// Wasm module shape used for cost estimation.
	pub struct ContractCodeCostInputs {
		/// Reserved; always `V0`.
		pub ext: ExtensionPoint,
		/// Wasm instructions.
		pub n_instructions: u32,
		/// Defined functions.
		pub n_functions: u32,
		/// Globals.
		pub n_globals: u32,
		/// Table entries.
		pub n_table_entries: u32,
		/// Function types.
		pub n_types: u32,
		/// Data segments.
		pub n_data_segments: u32,
		/// Element segments.
		pub n_elem_segments: u32,
		/// Imported items.
		pub n_imports: u32,
		/// Exported items.
		pub n_exports: u32,
		/// Bytes in data segments.
		pub n_data_segment_bytes: u32,
	}
}

xdr_struct! {
	/// Cost inputs attached to uploaded code.
	pub struct ContractCodeEntryV1 {
		/// Reserved; always `V0`.
		pub ext: ExtensionPoint,
		/// Module statistics used for cost metering.
		pub cost_inputs: ContractCodeCostInputs,
	}
}

xdr_struct! {
	/// Uploaded Wasm module.
	pub struct ContractCodeEntry {
		/// Version [`ContractCodeEntryV1`] extension, when present.
		pub ext: Extension<ContractCodeEntryV1>,
		/// Hash of `code`.
		pub hash: Hash,
		/// Wasm module bytes.
		pub code: BytesM,
	}
}

xdr_struct! {
	/// Expiration of a contract data or code entry.
	pub struct TtlEntry {
		/// Hash of the `LedgerKey` this entry belongs to.
		pub key_hash: Hash,
		/// Last ledger the entry stays live.
		pub live_until_ledger_seq: u32,
	}
}

xdr_struct! {
	/// Entry sponsorship.
	pub struct LedgerEntryExtensionV1 {
		/// Account paying the reserve, if sponsored.
		pub sponsoring_id: SponsorshipDescriptor,
		/// Reserved; always `V0`.
		pub ext: ExtensionPoint,
	}
}

xdr_union! {
	/// Entry payload by kind.
	pub enum LedgerEntryData switch (LedgerEntryType) {
		/// Account.
		Account(LedgerEntryType::Account) => AccountEntry,
		/// Trust line.
		Trustline(LedgerEntryType::Trustline) => TrustLineEntry,
		/// Offer.
		Offer(LedgerEntryType::Offer) => OfferEntry,
		/// Data entry.
		Data(LedgerEntryType::Data) => DataEntry,
		/// Claimable balance.
		ClaimableBalance(LedgerEntryType::ClaimableBalance) => ClaimableBalanceEntry,
		/// Liquidity pool.
		LiquidityPool(LedgerEntryType::LiquidityPool) => LiquidityPoolEntry,
		/// Contract storage.
		ContractData(LedgerEntryType::ContractData) => ContractDataEntry,
		/// Contract code.
		ContractCode(LedgerEntryType::ContractCode) => ContractCodeEntry,
		/// Network setting.
		ConfigSetting(LedgerEntryType::ConfigSetting) => ConfigSettingEntry,
		/// Time to live.
		Ttl(LedgerEntryType::Ttl) => TtlEntry,
	}
}

xdr_struct! {
	/// Ledger entry with its modification ledger.
	pub struct LedgerEntry {
		/// Ledger the entry last changed in.
		pub last_modified_ledger_seq: u32,
		/// Entry payload.
		pub data: LedgerEntryData,
		/// Version [`LedgerEntryExtensionV1`] extension, when present.
		pub ext: Extension<LedgerEntryExtensionV1>,
	}
}

xdr_struct! {
	/// Account key.
	pub struct LedgerKeyAccount {
		/// Account the entry belongs to.
		pub account_id: AccountId,
	}
}

xdr_struct! {
	/// Trust line key.
	pub struct LedgerKeyTrustLine {
		/// Owning account.
		pub account_id: AccountId,
		/// Asset of the trust line.
		pub asset: TrustLineAsset,
	}
}

xdr_struct! {
	/// Offer key.
	pub struct LedgerKeyOffer {
		/// Offer owner.
		pub seller_id: AccountId,
		/// Offer identity.
		pub offer_id: i64,
	}
}

xdr_struct! {
	/// Account data key.
	pub struct LedgerKeyData {
		/// Owning account.
		pub account_id: AccountId,
		/// Entry name.
		pub data_name: String64,
	}
}

xdr_struct! {
	/// Claimable balance key.
	pub struct LedgerKeyClaimableBalance {
		/// Identity of the balance.
		pub balance_id: ClaimableBalanceId,
	}
}

xdr_struct! {
	/// Liquidity pool key.
	pub struct LedgerKeyLiquidityPool {
		/// Pool identity.
		pub liquidity_pool_id: PoolId,
	}
}

xdr_struct! {
	/// Contract storage key.
	pub struct LedgerKeyContractData {
		/// Contract owning the entry.
		pub contract: ScAddress,
		/// Storage key.
		pub key: ScVal,
		/// Storage durability.
		pub durability: ContractDataDurability,
	}
}

xdr_struct! {
	/// Contract code key.
	pub struct LedgerKeyContractCode {
		/// Hash of the Wasm module.
		pub hash: Hash,
	}
}

xdr_struct! {
	/// Configuration setting key.
	pub struct LedgerKeyConfigSetting {
		/// Setting identifier.
		pub config_setting_id: ConfigSettingId,
	}
}

xdr_struct! {
	/// Expiration entry key.
	pub struct LedgerKeyTtl {
		/// Hash of the ledger key the TTL applies to.
		pub key_hash: Hash,
	}
}

xdr_union! {
	/// Identity of a ledger entry.
	pub enum LedgerKey switch (LedgerEntryType) {
		/// Account.
		Account(LedgerEntryType::Account) => LedgerKeyAccount,
		/// Trust line.
		Trustline(LedgerEntryType::Trustline) => LedgerKeyTrustLine,
		/// Offer.
		Offer(LedgerEntryType::Offer) => LedgerKeyOffer,
		/// Data entry.
		Data(LedgerEntryType::Data) => LedgerKeyData,
		/// Claimable balance.
		ClaimableBalance(LedgerEntryType::ClaimableBalance) => LedgerKeyClaimableBalance,
		/// Liquidity pool.
		LiquidityPool(LedgerEntryType::LiquidityPool) => LedgerKeyLiquidityPool,
		/// Contract storage.
		ContractData(LedgerEntryType::ContractData) => LedgerKeyContractData,
		/// Contract code.
		ContractCode(LedgerEntryType::ContractCode) => LedgerKeyContractCode,
		/// Network setting.
		ConfigSetting(LedgerEntryType::ConfigSetting) => LedgerKeyConfigSetting,
		/// Time to live.
		Ttl(LedgerEntryType::Ttl) => LedgerKeyTtl,
	}
}

impl LedgerEntry {
	/// Key addressing this entry.
	pub fn key(&self) -> LedgerKey {
		match &self.data {
			LedgerEntryData::Account(e) => LedgerKey::Account(LedgerKeyAccount {
				account_id: e.account_id.clone(),
			}),
			LedgerEntryData::Trustline(e) => LedgerKey::Trustline(LedgerKeyTrustLine {
				account_id: e.account_id.clone(),
				asset: e.asset.clone(),
			}),
			LedgerEntryData::Offer(e) => LedgerKey::Offer(LedgerKeyOffer {
				seller_id: e.seller_id.clone(),
				offer_id: e.offer_id,
			}),
			LedgerEntryData::Data(e) => LedgerKey::Data(LedgerKeyData {
				account_id: e.account_id.clone(),
				data_name: e.data_name.clone(),
			}),
			LedgerEntryData::ClaimableBalance(e) => LedgerKey::ClaimableBalance(LedgerKeyClaimableBalance {
				balance_id: e.balance_id.clone(),
			}),
			LedgerEntryData::LiquidityPool(e) => LedgerKey::LiquidityPool(LedgerKeyLiquidityPool {
				liquidity_pool_id: e.liquidity_pool_id,
			}),
			LedgerEntryData::ContractData(e) => LedgerKey::ContractData(LedgerKeyContractData {
				contract: e.contract.clone(),
				key: e.key.clone(),
				durability: e.durability,
			}),
			LedgerEntryData::ContractCode(e) => LedgerKey::ContractCode(LedgerKeyContractCode { hash: e.hash }),
			LedgerEntryData::ConfigSetting(e) => LedgerKey::ConfigSetting(LedgerKeyConfigSetting {
				config_setting_id: e.id(),
			}),
			LedgerEntryData::Ttl(e) => LedgerKey::Ttl(LedgerKeyTtl { key_hash: e.key_hash }),
		}
	}
}
