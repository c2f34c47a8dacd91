//! Ledger changes and events recorded while applying transactions.

use crate::xdr::macros::{xdr_enum, xdr_struct, xdr_union};
use crate::xdr::types::{Hash, LedgerEntry, LedgerKey, ScVal, TransactionResultPair};
use crate::xdr::{Extension, ExtensionPoint, VecM};

xdr_enum! {
	/// Ledger change kinds.
	pub enum LedgerEntryChangeType {
		/// Entry added.
		Created = 0,
		/// Entry modified.
		Updated = 1,
		/// Entry deleted.
		Removed = 2,
		/// Prior state of an entry about to change.
		State = 3,
	}
}

xdr_union! {
	/// One ledger change.
	pub enum LedgerEntryChange switch (LedgerEntryChangeType) {
		/// Entry added.
		Created(LedgerEntryChangeType::Created) => LedgerEntry,
		/// Entry modified.
		Updated(LedgerEntryChangeType::Updated) => LedgerEntry,
		/// Entry deleted.
		Removed(LedgerEntryChangeType::Removed) => LedgerKey,
		/// Entry as it was before the change.
		State(LedgerEntryChangeType::State) => LedgerEntry,
	}
}

/// Ordered ledger changes.
pub type LedgerEntryChanges = VecM<LedgerEntryChange>;

xdr_struct! {
	/// Changes made by one operation.
	pub struct OperationMeta {
		/// Entries touched by the operation.
		pub changes: LedgerEntryChanges,
	}
}

xdr_struct! {
	/// Transaction-level and per-operation changes.
	pub struct TransactionMetaV1 {
		/// Changes made before any operation.
		pub tx_changes: LedgerEntryChanges,
		/// Per-operation changes.
		pub operations: VecM<OperationMeta>,
	}
}

xdr_struct! {
	/// Changes before and after operations.
	pub struct TransactionMetaV2 {
		/// Changes made before any operation.
		pub tx_changes_before: LedgerEntryChanges,
		/// Per-operation changes.
		pub operations: VecM<OperationMeta>,
		/// Changes made after all operations.
		pub tx_changes_after: LedgerEntryChanges,
	}
}

xdr_enum! {
	/// Event origins.
	pub enum ContractEventType {
		/// Emitted by the host.
		System = 0,
		/// Emitted by a contract.
		Contract = 1,
		/// Debug output.
		Diagnostic = 2,
	}
}

xdr_struct! {
	/// Event topics and data.
	pub struct ContractEventV0 {
		/// Indexed topics.
		pub topics: VecM<ScVal>,
		/// Event payload.
		pub data: ScVal,
	}
}

xdr_union! {
	/// Versioned event body.
	pub enum ContractEventBody switch (i32) {
		/// Topics and data.
		V0(0) => ContractEventV0,
	}
}

xdr_struct! {
	/// Event emitted during contract execution.
	pub struct ContractEvent {
		/// Reserved; always `V0`.
		pub ext: ExtensionPoint,
		/// Emitting contract, if any.
		pub contract_id: Option<Hash>,
		/// Event kind.
		#[cfg_attr(feature = "serde", serde(rename = "type"))]
		pub type_: ContractEventType,
		/// Topics and data.
		pub body: ContractEventBody,
	}
}

xdr_struct! {
	/// Diagnostic event, kept even when the call failed.
	pub struct DiagnosticEvent {
		/// Whether the emitting call succeeded.
		pub in_successful_contract_call: bool,
		/// Wrapped event.
		pub event: ContractEvent,
	}
}

xdr_struct! {
	/// Resource fee breakdown.
	pub struct SorobanTransactionMetaExtV1 {
		/// Reserved; always `V0`.
		pub ext: ExtensionPoint,
		/// Non-refundable resource fee charged.
		pub total_non_refundable_resource_fee_charged: i64,
		/// Refundable resource fee charged.
		pub total_refundable_resource_fee_charged: i64,
		/// Rent fee charged.
		pub rent_fee_charged: i64,
	}
}

xdr_struct! {
	/// Contract execution output.
	pub struct SorobanTransactionMeta {
		/// Version [`SorobanTransactionMetaExtV1`] extension, when present.
		pub ext: Extension<SorobanTransactionMetaExtV1>,
		/// Events emitted by the invocation.
		pub events: VecM<ContractEvent>,
		/// Value returned by the invocation.
		pub return_value: ScVal,
		/// Debug events; not part of consensus.
		pub diagnostic_events: VecM<DiagnosticEvent>,
	}
}

xdr_struct! {
	/// Changes plus contract execution output.
	pub struct TransactionMetaV3 {
		/// Reserved; always `V0`.
		pub ext: ExtensionPoint,
		/// Changes made before any operation.
		pub tx_changes_before: LedgerEntryChanges,
		/// Per-operation changes.
		pub operations: VecM<OperationMeta>,
		/// Changes made after all operations.
		pub tx_changes_after: LedgerEntryChanges,
		/// Contract invocation outputs.
		pub soroban_meta: Option<SorobanTransactionMeta>,
	}
}

xdr_union! {
	/// Versioned transaction metadata.
	pub enum TransactionMeta switch (i32) {
		/// Per-operation changes only.
		V0(0) => VecM<OperationMeta>,
		/// Adds changes made before the operations.
		V1(1) => TransactionMetaV1,
		/// Adds changes made after the operations.
		V2(2) => TransactionMetaV2,
		/// Adds contract invocation outputs.
		V3(3) => TransactionMetaV3,
	}
}

impl TransactionMeta {
	/// Per-operation changes of any version.
	pub fn operations(&self) -> &[OperationMeta] {
		match self {
			Self::V0(ops) => ops,
			Self::V1(v1) => &v1.operations,
			Self::V2(v2) => &v2.operations,
			Self::V3(v3) => &v3.operations,
		}
	}

	/// Contract events, empty before v3.
	pub fn events(&self) -> &[ContractEvent] {
		match self {
			Self::V3(TransactionMetaV3 {
				soroban_meta: Some(meta),
				..
			}) => &meta.events,
			_ => &[],
		}
	}
}

xdr_struct! {
	/// Result, fee changes, and apply metadata of one transaction.
	pub struct TransactionResultMeta {
		/// Result with its transaction hash.
		pub result: TransactionResultPair,
		/// Entries changed while charging the fee.
		pub fee_processing: LedgerEntryChanges,
		/// Changes made while applying.
		pub tx_apply_processing: TransactionMeta,
	}
}
