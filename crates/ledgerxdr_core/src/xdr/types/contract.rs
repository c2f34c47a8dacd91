//! Smart contract values, addresses, and errors.

use crate::xdr::macros::{xdr_enum, xdr_struct, xdr_union};
use crate::xdr::types::{AccountId, Duration, Hash, TimePoint};
use crate::xdr::{BytesM, Int128Parts, Int256Parts, StringM, UInt128Parts, UInt256Parts, VecM};

/// Contract byte string.
pub type ScBytes = BytesM;
/// Contract text string.
pub type ScString = StringM;
/// Contract symbol, at most 32 bytes.
pub type ScSymbol = StringM<32>;
/// Contract vector.
pub type ScVec = VecM<ScVal>;
/// Contract map, entries sorted by key.
pub type ScMap = VecM<ScMapEntry>;

xdr_enum! {
	/// Contract value kinds.
	pub enum ScValType {
		/// Boolean.
		Bool = 0,
		/// Unit.
		Void = 1,
		/// Error value.
		Error = 2,
		/// Unsigned 32-bit.
		U32 = 3,
		/// Signed 32-bit.
		I32 = 4,
		/// Unsigned 64-bit.
		U64 = 5,
		/// Signed 64-bit.
		I64 = 6,
		/// Unix time.
		Timepoint = 7,
		/// Seconds.
		Duration = 8,
		/// Unsigned 128-bit.
		U128 = 9,
		/// Signed 128-bit.
		I128 = 10,
		/// Unsigned 256-bit.
		U256 = 11,
		/// Signed 256-bit.
		I256 = 12,
		/// Byte string.
		Bytes = 13,
		/// Text.
		String = 14,
		/// Identifier.
		Symbol = 15,
		/// Sequence.
		Vec = 16,
		/// Sorted map.
		Map = 17,
		/// Account or contract.
		Address = 18,
		/// Contract instance.
		ContractInstance = 19,
		/// Key of the instance entry.
		LedgerKeyContractInstance = 20,
		/// Key of a nonce entry.
		LedgerKeyNonce = 21,
	}
}

xdr_enum! {
	/// Host subsystem that raised an error.
	pub enum ScErrorType {
		/// Raised by contract code.
		Contract = 0,
		/// Wasm VM.
		WasmVm = 1,
		/// Execution context.
		Context = 2,
		/// Storage access.
		Storage = 3,
		/// Host object.
		Object = 4,
		/// Cryptography.
		Crypto = 5,
		/// Event emission.
		Events = 6,
		/// Resource budget.
		Budget = 7,
		/// Value conversion.
		Value = 8,
		/// Authorization.
		Auth = 9,
	}
}

xdr_enum! {
	/// Generic host error codes.
	pub enum ScErrorCode {
		/// Arithmetic out of domain.
		ArithDomain = 0,
		/// Index out of bounds.
		IndexBounds = 1,
		/// Invalid input.
		InvalidInput = 2,
		/// Value missing.
		MissingValue = 3,
		/// Value already present.
		ExistingValue = 4,
		/// Limit exceeded.
		ExceededLimit = 5,
		/// Action not allowed.
		InvalidAction = 6,
		/// Host bug.
		InternalError = 7,
		/// Wrong type.
		UnexpectedType = 8,
		/// Wrong size.
		UnexpectedSize = 9,
	}
}

xdr_union! {
	/// Contract or host error.
	pub enum ScError switch (ScErrorType) {
		/// Contract-defined error code.
		Contract(ScErrorType::Contract) => u32,
		/// Wasm VM.
		WasmVm(ScErrorType::WasmVm) => ScErrorCode,
		/// Execution context.
		Context(ScErrorType::Context) => ScErrorCode,
		/// Storage access.
		Storage(ScErrorType::Storage) => ScErrorCode,
		/// Host object.
		Object(ScErrorType::Object) => ScErrorCode,
		/// Cryptography.
		Crypto(ScErrorType::Crypto) => ScErrorCode,
		/// Event emission.
		Events(ScErrorType::Events) => ScErrorCode,
		/// Resource budget.
		Budget(ScErrorType::Budget) => ScErrorCode,
		/// Value conversion.
		Value(ScErrorType::Value) => ScErrorCode,
		/// Authorization.
		Auth(ScErrorType::Auth) => ScErrorCode,
	}
}

xdr_enum! {
	/// Contract executable kinds.
	pub enum ContractExecutableType {
		/// Uploaded Wasm.
		Wasm = 0,
		/// Built-in asset contract.
		StellarAsset = 1,
	}
}

xdr_union! {
	/// Code backing a contract instance.
	pub enum ContractExecutable switch (ContractExecutableType) {
		/// Hash of uploaded Wasm.
		Wasm(ContractExecutableType::Wasm) => Hash,
		/// Built-in asset contract.
		StellarAsset(ContractExecutableType::StellarAsset),
	}
}

xdr_enum! {
	/// Contract address kinds.
	pub enum ScAddressType {
		/// Classic account.
		Account = 0,
		/// Contract.
		Contract = 1,
	}
}

xdr_union! {
	/// Account or contract address.
	pub enum ScAddress switch (ScAddressType) {
		/// Classic account.
		Account(ScAddressType::Account) => AccountId,
		/// Contract.
		Contract(ScAddressType::Contract) => Hash,
	}
}

xdr_struct! {
	/// Nonce key for authorization replay protection.
	pub struct ScNonceKey {
		/// Nonce value.
		pub nonce: i64,
	}
}

xdr_struct! {
	/// Executable and instance storage of a deployed contract.
	pub struct ScContractInstance {
		/// Code backing the instance.
		pub executable: ContractExecutable,
		/// Instance storage.
		pub storage: Option<ScMap>,
	}
}

xdr_union! {
	/// Contract value.
	pub enum ScVal switch (ScValType) {
		/// Boolean.
		Bool(ScValType::Bool) => bool,
		/// Unit.
		Void(ScValType::Void),
		/// Error value.
		Error(ScValType::Error) => ScError,
		/// Unsigned 32-bit.
		U32(ScValType::U32) => u32,
		/// Signed 32-bit.
		I32(ScValType::I32) => i32,
		/// Unsigned 64-bit.
		U64(ScValType::U64) => u64,
		/// Signed 64-bit.
		I64(ScValType::I64) => i64,
		/// Unix time.
		Timepoint(ScValType::Timepoint) => TimePoint,
		/// Seconds.
		Duration(ScValType::Duration) => Duration,
		/// Unsigned 128-bit.
		U128(ScValType::U128) => UInt128Parts,
		/// Signed 128-bit.
		I128(ScValType::I128) => Int128Parts,
		/// Unsigned 256-bit.
		U256(ScValType::U256) => UInt256Parts,
		/// Signed 256-bit.
		I256(ScValType::I256) => Int256Parts,
		/// Byte string.
		Bytes(ScValType::Bytes) => ScBytes,
		/// Text.
		String(ScValType::String) => ScString,
		/// Identifier.
		Symbol(ScValType::Symbol) => ScSymbol,
		/// Sequence.
		Vec(ScValType::Vec) => Option<ScVec>,
		/// Sorted map.
		Map(ScValType::Map) => Option<ScMap>,
		/// Account or contract.
		Address(ScValType::Address) => ScAddress,
		/// Contract instance.
		ContractInstance(ScValType::ContractInstance) => ScContractInstance,
		/// Key of the instance entry.
		LedgerKeyContractInstance(ScValType::LedgerKeyContractInstance),
		/// Key of a nonce entry.
		LedgerKeyNonce(ScValType::LedgerKeyNonce) => ScNonceKey,
	}
}

xdr_struct! {
	/// One key/value pair of an [`ScMap`].
	pub struct ScMapEntry {
		/// Entry key.
		pub key: ScVal,
		/// Stored value.
		pub val: ScVal,
	}
}

impl From<bool> for ScVal {
	fn from(value: bool) -> Self {
		Self::Bool(value)
	}
}

impl From<u32> for ScVal {
	fn from(value: u32) -> Self {
		Self::U32(value)
	}
}

impl From<i32> for ScVal {
	fn from(value: i32) -> Self {
		Self::I32(value)
	}
}

impl From<u64> for ScVal {
	fn from(value: u64) -> Self {
		Self::U64(value)
	}
}

impl From<i64> for ScVal {
	fn from(value: i64) -> Self {
		Self::I64(value)
	}
}

impl From<u128> for ScVal {
	fn from(value: u128) -> Self {
		Self::U128(value.into())
	}
}

impl From<i128> for ScVal {
	fn from(value: i128) -> Self {
		Self::I128(value.into())
	}
}

impl From<ScAddress> for ScVal {
	fn from(value: ScAddress) -> Self {
		Self::Address(value)
	}
}
