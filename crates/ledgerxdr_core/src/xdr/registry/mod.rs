//! Name-indexed access to every schema type.

use std::fmt;
use std::str::FromStr;

use crate::xdr::bytes::Sink;
use crate::xdr::types::*;
use crate::xdr::{
	DecodeOptions, ExtensionPoint, Int128Parts, Int256Parts, ReadXdr, Reader, Result, TypeDescriptor, UInt128Parts,
	UInt256Parts, WriteXdr, XdrError, XdrSchema,
};

macro_rules! registry {
	($($name:ident),* $(,)?) => {
		/// Identity of a registered schema type.
		#[derive(Debug, Clone, Copy, PartialEq, Eq, ::core::hash::Hash, PartialOrd, Ord)]
		pub enum TypeVariant {
			$(
				#[doc = concat!("`", stringify!($name), "`.")]
				$name,
			)*
		}

		impl TypeVariant {
			/// Every registered type.
			pub const ALL: &'static [Self] = &[$(Self::$name,)*];

			/// Schema type name.
			pub const fn name(self) -> &'static str {
				match self {
					$(Self::$name => stringify!($name),)*
				}
			}

			/// Static descriptor of the type.
			pub fn descriptor(self) -> TypeDescriptor {
				match self {
					$(Self::$name => <$name as XdrSchema>::DESCRIPTOR,)*
				}
			}
		}

		impl FromStr for TypeVariant {
			type Err = XdrError;

			fn from_str(s: &str) -> Result<Self> {
				match s {
					$(stringify!($name) => Ok(Self::$name),)*
					_ => Err(XdrError::UnknownTypeName { name: s.to_string() }),
				}
			}
		}

		/// Decoded value of any registered type.
		#[derive(Debug, Clone, PartialEq, Eq)]
		pub enum Type {
			$(
				#[doc = concat!("Boxed `", stringify!($name), "` value.")]
				$name(Box<$name>),
			)*
		}

		impl Type {
			/// Registered identity of this value.
			pub fn variant(&self) -> TypeVariant {
				match self {
					$(Self::$name(_) => TypeVariant::$name,)*
				}
			}

			/// Decode one value of `variant` at the reader's position.
			pub fn read_xdr(variant: TypeVariant, r: &mut Reader<'_>) -> Result<Self> {
				match variant {
					$(TypeVariant::$name => Ok(Self::$name(Box::new(<$name as ReadXdr>::read_xdr(r)?))),)*
				}
			}

			/// Build a value of `variant` from its serde representation.
			#[cfg(feature = "serde")]
			pub fn deserialize_as<'de, D: serde::Deserializer<'de>>(
				variant: TypeVariant,
				deserializer: D,
			) -> std::result::Result<Self, D::Error> {
				match variant {
					$(TypeVariant::$name => Ok(Self::$name(Box::new(<$name as serde::Deserialize>::deserialize(deserializer)?))),)*
				}
			}
		}

		impl WriteXdr for Type {
			fn write_xdr(&self, w: &mut Sink) {
				match self {
					$(Self::$name(value) => value.write_xdr(w),)*
				}
			}
		}

		#[cfg(feature = "serde")]
		impl serde::Serialize for Type {
			fn serialize<S: serde::Serializer>(&self, serializer: S) -> std::result::Result<S::Ok, S::Error> {
				match self {
					$(Self::$name(value) => value.serialize(serializer),)*
				}
			}
		}
	};
}

registry! {
	AccountEntry, AccountEntryExtensionV1, AccountEntryExtensionV2, AccountEntryExtensionV3, AccountFlags,
	AccountMergeResult, AccountMergeResultCode, AllowTrustOp, AllowTrustResult, AllowTrustResultCode, AlphaNum12,
	AlphaNum4, Asset, AssetCode, AssetCode12, AssetCode4, AssetType, BeginSponsoringFutureReservesOp,
	BeginSponsoringFutureReservesResult, BeginSponsoringFutureReservesResultCode, BumpSequenceOp,
	BumpSequenceResult, BumpSequenceResultCode, ChangeTrustAsset, ChangeTrustOp, ChangeTrustResult,
	ChangeTrustResultCode, ClaimAtom, ClaimAtomType, ClaimClaimableBalanceOp, ClaimClaimableBalanceResult,
	ClaimClaimableBalanceResultCode, ClaimLiquidityAtom, ClaimOfferAtom, ClaimOfferAtomV0, ClaimPredicate,
	ClaimPredicateType, ClaimableBalanceEntry, ClaimableBalanceEntryExtensionV1, ClaimableBalanceFlags,
	ClaimableBalanceId, ClaimableBalanceIdType, Claimant, ClaimantType, ClaimantV0, ClawbackClaimableBalanceOp,
	ClawbackClaimableBalanceResult, ClawbackClaimableBalanceResultCode, ClawbackOp, ClawbackResult,
	ClawbackResultCode, ConfigSettingContractBandwidthV0, ConfigSettingContractComputeV0,
	ConfigSettingContractEventsV0, ConfigSettingContractExecutionLanesV0, ConfigSettingContractHistoricalDataV0,
	ConfigSettingContractLedgerCostV0, ConfigSettingEntry, ConfigSettingId, ConfigUpgradeSet,
	ConfigUpgradeSetKey, ContractCodeCostInputs, ContractCodeEntry, ContractCodeEntryV1, ContractCostParamEntry,
	ContractDataDurability, ContractDataEntry, ContractEvent, ContractEventBody, ContractEventType,
	ContractEventV0, ContractExecutable, ContractExecutableType, ContractIdPreimage,
	ContractIdPreimageFromAddress, ContractIdPreimageType, CreateAccountOp, CreateAccountResult,
	CreateAccountResultCode, CreateClaimableBalanceOp, CreateClaimableBalanceResult,
	CreateClaimableBalanceResultCode, CreateContractArgs, CreateContractArgsV2, CreatePassiveSellOfferOp,
	CryptoKeyType, DataEntry, DecoratedSignature, DiagnosticEvent, EndSponsoringFutureReservesResult,
	EndSponsoringFutureReservesResultCode, EnvelopeType, EvictionIterator, ExtendFootprintTtlOp,
	ExtendFootprintTtlResult, ExtendFootprintTtlResultCode, ExtensionPoint, FeeBumpTransaction,
	FeeBumpTransactionEnvelope, FeeBumpTransactionInnerTx, Hash, HashIdPreimage, HashIdPreimageContractId,
	HashIdPreimageOperationId, HashIdPreimageRevokeId, HashIdPreimageSorobanAuthorization, HostFunction,
	HostFunctionType, InflationPayout, InflationResult, InflationResultCode, InnerTransactionResult,
	InnerTransactionResultPair, InnerTransactionResultResult, Int128Parts, Int256Parts, InvokeContractArgs,
	InvokeHostFunctionOp, InvokeHostFunctionResult, InvokeHostFunctionResultCode, LedgerBounds,
	LedgerCloseValueSignature, LedgerEntry, LedgerEntryChange, LedgerEntryChangeType, LedgerEntryData,
	LedgerEntryExtensionV1, LedgerEntryType, LedgerFootprint, LedgerHeader, LedgerHeaderExtensionV1,
	LedgerHeaderFlags, LedgerHeaderHistoryEntry, LedgerKey, LedgerKeyAccount, LedgerKeyClaimableBalance,
	LedgerKeyConfigSetting, LedgerKeyContractCode, LedgerKeyContractData, LedgerKeyData, LedgerKeyLiquidityPool,
	LedgerKeyOffer, LedgerKeyTrustLine, LedgerKeyTtl, LedgerUpgrade, LedgerUpgradeType, Liabilities,
	LiquidityPoolConstantProductParameters, LiquidityPoolDepositOp, LiquidityPoolDepositResult,
	LiquidityPoolDepositResultCode, LiquidityPoolEntry, LiquidityPoolEntryBody,
	LiquidityPoolEntryConstantProduct, LiquidityPoolParameters, LiquidityPoolType, LiquidityPoolWithdrawOp,
	LiquidityPoolWithdrawResult, LiquidityPoolWithdrawResultCode, ManageBuyOfferOp, ManageBuyOfferResult,
	ManageBuyOfferResultCode, ManageDataOp, ManageDataResult, ManageDataResultCode, ManageOfferEffect,
	ManageOfferSuccessResult, ManageOfferSuccessResultOffer, ManageSellOfferOp, ManageSellOfferResult,
	ManageSellOfferResultCode, Memo, MemoType, MuxedAccount, MuxedAccountMed25519, OfferEntry, OfferEntryFlags,
	Operation, OperationBody, OperationMeta, OperationResult, OperationResultCode, OperationResultTr,
	OperationType, PathPaymentStrictReceiveOp, PathPaymentStrictReceiveResult,
	PathPaymentStrictReceiveResultCode, PathPaymentStrictReceiveResultSuccess, PathPaymentStrictSendOp,
	PathPaymentStrictSendResult, PathPaymentStrictSendResultCode, PathPaymentStrictSendResultSuccess, PaymentOp,
	PaymentResult, PaymentResultCode, PreconditionType, Preconditions, PreconditionsV2, Price, PublicKey,
	PublicKeyType, RestoreFootprintOp, RestoreFootprintResult, RestoreFootprintResultCode, RevokeSponsorshipOp,
	RevokeSponsorshipOpSigner, RevokeSponsorshipResult, RevokeSponsorshipResultCode, RevokeSponsorshipType,
	ScAddress, ScAddressType, ScContractInstance, ScError, ScErrorCode, ScErrorType, ScMapEntry, ScNonceKey,
	ScVal, ScValType, SetOptionsOp, SetOptionsResult, SetOptionsResultCode, SetTrustLineFlagsOp,
	SetTrustLineFlagsResult, SetTrustLineFlagsResultCode, SignatureHint, Signer, SignerKey,
	SignerKeyEd25519SignedPayload, SignerKeyType, SimplePaymentResult, SorobanAddressCredentials,
	SorobanAuthorizationEntry, SorobanAuthorizedFunction, SorobanAuthorizedFunctionType,
	SorobanAuthorizedInvocation, SorobanCredentials, SorobanCredentialsType, SorobanResources,
	SorobanTransactionData, SorobanTransactionMeta, SorobanTransactionMetaExtV1, StateArchivalSettings,
	StellarValue, StellarValueExt, StellarValueType, ThresholdIndexes, Thresholds, TimeBounds, Transaction,
	TransactionEnvelope, TransactionMeta, TransactionMetaV1, TransactionMetaV2, TransactionMetaV3,
	TransactionResult, TransactionResultCode, TransactionResultMeta, TransactionResultPair,
	TransactionResultResult, TransactionSignaturePayload, TransactionSignaturePayloadTaggedTransaction,
	TransactionV0, TransactionV0Envelope, TransactionV1Envelope, TrustLineAsset, TrustLineEntry,
	TrustLineEntryExtensionV2, TrustLineEntryV1, TrustLineFlags, TtlEntry, UInt128Parts, UInt256Parts, Uint256,
}

impl TypeVariant {
	/// Case-insensitive lookup, also accepting snake_case spellings.
	pub fn lookup(name: &str) -> Result<Self> {
		let folded: String = name.chars().filter(|c| *c != '_').collect();
		Self::ALL
			.iter()
			.copied()
			.find(|v| v.name().eq_ignore_ascii_case(&folded))
			.ok_or_else(|| XdrError::UnknownTypeName { name: name.to_string() })
	}
}

impl fmt::Display for TypeVariant {
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		f.write_str(self.name())
	}
}

impl Type {
	/// Decode a complete buffer as `variant` with default options.
	pub fn from_xdr(variant: TypeVariant, bytes: &[u8]) -> Result<Self> {
		Self::from_xdr_with(variant, bytes, &DecodeOptions::default())
	}

	/// Decode a complete buffer as `variant` with explicit options.
	pub fn from_xdr_with(variant: TypeVariant, bytes: &[u8], options: &DecodeOptions) -> Result<Self> {
		let mut reader = Reader::new(bytes, options);
		let value = Self::read_xdr(variant, &mut reader).inspect_err(|err| {
			tracing::debug!(type_name = variant.name(), %err, "xdr decode failed");
		})?;
		reader.finish()?;
		Ok(value)
	}

	/// Decode standard base64 text as `variant`.
	pub fn from_xdr_base64(variant: TypeVariant, text: &str) -> Result<Self> {
		use base64::Engine;
		let bytes = base64::engine::general_purpose::STANDARD.decode(text.trim())?;
		Self::from_xdr(variant, &bytes)
	}
}

#[cfg(test)]
mod tests;
