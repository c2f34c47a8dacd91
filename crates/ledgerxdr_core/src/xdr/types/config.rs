//! Network-wide contract configuration settings.

use crate::xdr::macros::{xdr_enum, xdr_struct, xdr_union};
use crate::xdr::{ExtensionPoint, VecM};

xdr_struct! {
	/// Compute limits and pricing.
	pub struct ConfigSettingContractComputeV0 {
		/// CPU instructions per ledger.
		pub ledger_max_instructions: i64,
		/// CPU instructions per transaction.
		pub tx_max_instructions: i64,
		/// Fee per 10000 instructions.
		pub fee_rate_per_instructions_increment: i64,
		/// Memory per transaction, in bytes.
		pub tx_memory_limit: u32,
	}
}

xdr_struct! {
	/// Ledger access limits and pricing.
	pub struct ConfigSettingContractLedgerCostV0 {
		/// Entries read per ledger.
		pub ledger_max_read_ledger_entries: u32,
		/// Bytes read per ledger.
		pub ledger_max_read_bytes: u32,
		/// Entries written per ledger.
		pub ledger_max_write_ledger_entries: u32,
		/// Bytes written per ledger.
		pub ledger_max_write_bytes: u32,
		/// Entries read per transaction.
		pub tx_max_read_ledger_entries: u32,
		/// Bytes read per transaction.
		pub tx_max_read_bytes: u32,
		/// Entries written per transaction.
		pub tx_max_write_ledger_entries: u32,
		/// Bytes written per transaction.
		pub tx_max_write_bytes: u32,
		/// Fee per ledger entry read.
		pub fee_read_ledger_entry: i64,
		/// Fee per ledger entry written.
		pub fee_write_ledger_entry: i64,
		/// Fee per 1 KB read.
		pub fee_read1_kb: i64,
		/// Target bucket list size in bytes.
		pub bucket_list_target_size_bytes: i64,
		/// Write fee per 1 KB with an empty bucket list.
		pub write_fee1_kb_bucket_list_low: i64,
		/// Write fee per 1 KB at the target bucket list size.
		pub write_fee1_kb_bucket_list_high: i64,
		/// Write fee growth once the target size is exceeded.
		pub bucket_list_write_fee_growth_factor: u32,
	}
}

xdr_struct! {
	/// Historical storage pricing.
	pub struct ConfigSettingContractHistoricalDataV0 {
		/// Fee per 1 KB of history.
		pub fee_historical1_kb: i64,
	}
}

xdr_struct! {
	/// Event size limit and pricing.
	pub struct ConfigSettingContractEventsV0 {
		/// Event bytes per transaction.
		pub tx_max_contract_events_size_bytes: u32,
		/// Fee per 1 KB of contract events.
		pub fee_contract_events1_kb: i64,
	}
}

xdr_struct! {
	/// Transaction size limits and pricing.
	pub struct ConfigSettingContractBandwidthV0 {
		/// Transaction bytes per ledger.
		pub ledger_max_txs_size_bytes: u32,
		/// Size per transaction.
		pub tx_max_size_bytes: u32,
		/// Fee per 1 KB of transaction size.
		pub fee_tx_size1_kb: i64,
	}
}

xdr_struct! {
	/// Per-ledger transaction count limit.
	pub struct ConfigSettingContractExecutionLanesV0 {
		/// Transactions per ledger.
		pub ledger_max_tx_count: u32,
	}
}

xdr_struct! {
	/// Linear cost model term.
	pub struct ContractCostParamEntry {
		/// Reserved; always `V0`.
		pub ext: ExtensionPoint,
		/// Constant cost term.
		pub const_term: i64,
		/// Cost per input unit.
		pub linear_term: i64,
	}
}

/// Cost model, indexed by cost type.
pub type ContractCostParams = VecM<ContractCostParamEntry, 1024>;

xdr_struct! {
	/// Entry lifetime and eviction settings.
	pub struct StateArchivalSettings {
		/// Longest TTL an entry may have.
		pub max_entry_ttl: u32,
		/// Shortest TTL for new temporary entries.
		pub min_temporary_ttl: u32,
		/// Shortest TTL for new persistent entries.
		pub min_persistent_ttl: u32,
		/// Rent rate divisor for persistent entries.
		pub persistent_rent_rate_denominator: i64,
		/// Rent rate divisor for temporary entries.
		pub temp_rent_rate_denominator: i64,
		/// Entries evicted per ledger.
		pub max_entries_to_archive: u32,
		/// Samples in the bucket list size window.
		pub bucket_list_size_window_sample_size: u32,
		/// Ledgers between bucket list size samples.
		pub bucket_list_window_sample_period: u32,
		/// Bytes scanned for eviction per ledger.
		pub eviction_scan_size: u32,
		/// Lowest bucket level scanned for eviction.
		pub starting_eviction_scan_level: u32,
	}
}

xdr_struct! {
	/// Position of the incremental eviction scan.
	pub struct EvictionIterator {
		/// Level currently scanned.
		pub bucket_list_level: u32,
		/// Scanning the current rather than the snapshot bucket.
		pub is_curr_bucket: bool,
		/// Byte offset within the bucket file.
		pub bucket_file_offset: u64,
	}
}

xdr_enum! {
	/// Configuration setting identifiers.
	pub enum ConfigSettingId {
		/// Largest contract size.
		ContractMaxSizeBytes = 0,
		/// Compute limits.
		ContractComputeV0 = 1,
		/// Ledger access costs.
		ContractLedgerCostV0 = 2,
		/// History cost.
		ContractHistoricalDataV0 = 3,
		/// Event limits and cost.
		ContractEventsV0 = 4,
		/// Bandwidth limits and cost.
		ContractBandwidthV0 = 5,
		/// CPU cost model.
		ContractCostParamsCpuInstructions = 6,
		/// Memory cost model.
		ContractCostParamsMemoryBytes = 7,
		/// Largest data key.
		ContractDataKeySizeBytes = 8,
		/// Largest data entry.
		ContractDataEntrySizeBytes = 9,
		/// Archival settings.
		StateArchival = 10,
		/// Execution lanes.
		ContractExecutionLanes = 11,
		/// Recent bucket list sizes.
		BucketlistSizeWindow = 12,
		/// Eviction scan position.
		EvictionIterator = 13,
	}
}

xdr_union! {
	/// One configuration setting value.
	pub enum ConfigSettingEntry switch (ConfigSettingId) {
		/// Largest contract size.
		ContractMaxSizeBytes(ConfigSettingId::ContractMaxSizeBytes) => u32,
		/// Compute limits.
		ContractComputeV0(ConfigSettingId::ContractComputeV0) => ConfigSettingContractComputeV0,
		/// Ledger access costs.
		ContractLedgerCostV0(ConfigSettingId::ContractLedgerCostV0) => ConfigSettingContractLedgerCostV0,
		/// History cost.
		ContractHistoricalDataV0(ConfigSettingId::ContractHistoricalDataV0) => ConfigSettingContractHistoricalDataV0,
		/// Event limits and cost.
		ContractEventsV0(ConfigSettingId::ContractEventsV0) => ConfigSettingContractEventsV0,
		/// Bandwidth limits and cost.
		ContractBandwidthV0(ConfigSettingId::ContractBandwidthV0) => ConfigSettingContractBandwidthV0,
		/// CPU cost model.
		ContractCostParamsCpuInstructions(ConfigSettingId::ContractCostParamsCpuInstructions) => ContractCostParams,
		/// Memory cost model.
		ContractCostParamsMemoryBytes(ConfigSettingId::ContractCostParamsMemoryBytes) => ContractCostParams,
		/// Largest data key.
		ContractDataKeySizeBytes(ConfigSettingId::ContractDataKeySizeBytes) => u32,
		/// Largest data entry.
		ContractDataEntrySizeBytes(ConfigSettingId::ContractDataEntrySizeBytes) => u32,
		/// Archival settings.
		StateArchival(ConfigSettingId::StateArchival) => StateArchivalSettings,
		/// Execution lanes.
		ContractExecutionLanes(ConfigSettingId::ContractExecutionLanes) => ConfigSettingContractExecutionLanesV0,
		/// Recent bucket list size samples.
		BucketlistSizeWindow(ConfigSettingId::BucketlistSizeWindow) => VecM<u64>,
		/// Eviction scan position.
		EvictionIterator(ConfigSettingId::EvictionIterator) => EvictionIterator,
	}
}

impl ConfigSettingEntry {
	/// Identifier of this setting.
	pub fn id(&self) -> ConfigSettingId {
		self.discriminant()
	}
}

xdr_struct! {
	/// Settings proposed by a configuration upgrade.
	pub struct ConfigUpgradeSet {
		/// Settings to replace.
		pub updated_entry: VecM<ConfigSettingEntry>,
	}
}
