//! Operations, host functions, and contract authorization.

use crate::xdr::macros::{xdr_enum, xdr_struct, xdr_union};
use crate::xdr::types::{
	AccountId, Asset, AssetCode, ChangeTrustAsset, ClaimableBalanceId, Claimant, ContractExecutable, DataValue,
	LedgerKey, MuxedAccount, PoolId, Price, ScAddress, ScSymbol, ScVal, SequenceNumber, Signer, SignerKey, String32,
	String64, Uint256,
};
use crate::xdr::{BytesM, ExtensionPoint, VecM};

xdr_enum! {
	/// Operation kinds.
	pub enum OperationType {
		/// Fund a new account.
		CreateAccount = 0,
		/// Send an asset.
		Payment = 1,
		/// Path payment with fixed receive amount.
		PathPaymentStrictReceive = 2,
		/// Sell offer.
		ManageSellOffer = 3,
		/// Passive sell offer.
		CreatePassiveSellOffer = 4,
		/// Account settings.
		SetOptions = 5,
		/// Trust line change.
		ChangeTrust = 6,
		/// Legacy trust authorization.
		AllowTrust = 7,
		/// Merge into another account.
		AccountMerge = 8,
		/// Run inflation.
		Inflation = 9,
		/// Data entry change.
		ManageData = 10,
		/// Raise the sequence number.
		BumpSequence = 11,
		/// Buy offer.
		ManageBuyOffer = 12,
		/// Path payment with fixed send amount.
		PathPaymentStrictSend = 13,
		/// Lock funds for claimants.
		CreateClaimableBalance = 14,
		/// Claim a balance.
		ClaimClaimableBalance = 15,
		/// Start sponsoring.
		BeginSponsoringFutureReserves = 16,
		/// Stop sponsoring.
		EndSponsoringFutureReserves = 17,
		/// Move or drop a sponsorship.
		RevokeSponsorship = 18,
		/// Reclaim an asset.
		Clawback = 19,
		/// Reclaim a claimable balance.
		ClawbackClaimableBalance = 20,
		/// Change trust line flags.
		SetTrustLineFlags = 21,
		/// Deposit into a pool.
		LiquidityPoolDeposit = 22,
		/// Withdraw from a pool.
		LiquidityPoolWithdraw = 23,
		/// Run a host function.
		InvokeHostFunction = 24,
		/// Extend entry lifetimes.
		ExtendFootprintTtl = 25,
		/// Restore archived entries.
		RestoreFootprint = 26,
	}
}

xdr_struct! {
	/// Fund a new account.
	pub struct CreateAccountOp {
		/// Account to create.
		pub destination: AccountId,
		/// Initial native balance.
		pub starting_balance: i64,
	}
}

xdr_struct! {
	/// Send an amount of one asset.
	pub struct PaymentOp {
		/// Recipient.
		pub destination: MuxedAccount,
		/// Asset sent.
		pub asset: Asset,
		/// Amount sent, in stroops.
		pub amount: i64,
	}
}

xdr_struct! {
	/// Path payment fixing the received amount.
	pub struct PathPaymentStrictReceiveOp {
		/// Asset debited from the source.
		pub send_asset: Asset,
		/// Most the source may send.
		pub send_max: i64,
		/// Recipient.
		pub destination: MuxedAccount,
		/// Asset delivered.
		pub dest_asset: Asset,
		/// Exact amount to deliver.
		pub dest_amount: i64,
		/// Intermediate assets.
		pub path: VecM<Asset, 5>,
	}
}

xdr_struct! {
	/// Path payment fixing the sent amount.
	pub struct PathPaymentStrictSendOp {
		/// Asset debited from the source.
		pub send_asset: Asset,
		/// Exact amount to send.
		pub send_amount: i64,
		/// Recipient.
		pub destination: MuxedAccount,
		/// Asset delivered.
		pub dest_asset: Asset,
		/// Least amount the destination may receive.
		pub dest_min: i64,
		/// Intermediate assets.
		pub path: VecM<Asset, 5>,
	}
}

xdr_struct! {
	/// Create, update, or delete a sell offer.
	pub struct ManageSellOfferOp {
		/// Asset to sell.
		pub selling: Asset,
		/// Asset to buy.
		pub buying: Asset,
		/// Zero deletes the offer.
		pub amount: i64,
		/// Price of one unit of `selling` in terms of `buying`.
		pub price: Price,
		/// Zero creates a new offer.
		pub offer_id: i64,
	}
}

xdr_struct! {
	/// Create, update, or delete a buy offer.
	pub struct ManageBuyOfferOp {
		/// Asset to sell.
		pub selling: Asset,
		/// Asset to buy.
		pub buying: Asset,
		/// Amount of `buying` wanted; zero deletes the offer.
		pub buy_amount: i64,
		/// Price of one unit of `selling` in terms of `buying`.
		pub price: Price,
		/// Offer to update; zero creates one.
		pub offer_id: i64,
	}
}

xdr_struct! {
	/// Create an offer that does not take same-price offers.
	pub struct CreatePassiveSellOfferOp {
		/// Asset to sell.
		pub selling: Asset,
		/// Asset to buy.
		pub buying: Asset,
		/// Amount of `selling` offered.
		pub amount: i64,
		/// Price of one unit of `selling` in terms of `buying`.
		pub price: Price,
	}
}

xdr_struct! {
	/// Change account settings; absent fields are left unchanged.
	pub struct SetOptionsOp {
		/// New inflation vote.
		pub inflation_dest: Option<AccountId>,
		/// Account flags to clear.
		pub clear_flags: Option<u32>,
		/// Account flags to set.
		pub set_flags: Option<u32>,
		/// New master key weight.
		pub master_weight: Option<u32>,
		/// New low threshold.
		pub low_threshold: Option<u32>,
		/// New medium threshold.
		pub med_threshold: Option<u32>,
		/// New high threshold.
		pub high_threshold: Option<u32>,
		/// New home domain.
		pub home_domain: Option<String32>,
		/// Weight zero removes the signer.
		pub signer: Option<Signer>,
	}
}

xdr_struct! {
	/// Create, update, or remove a trust line.
	pub struct ChangeTrustOp {
		/// Asset to trust.
		pub line: ChangeTrustAsset,
		/// New limit; zero removes the line.
		pub limit: i64,
	}
}

xdr_struct! {
	/// Legacy trust line authorization.
	pub struct AllowTrustOp {
		/// Holder of the trust line.
		pub trustor: AccountId,
		/// Code of an asset issued by the source account.
		pub asset: AssetCode,
		/// Trust line authorization flags to apply.
		pub authorize: u32,
	}
}

xdr_struct! {
	/// Set or delete named account data.
	pub struct ManageDataOp {
		/// Entry name to set or delete.
		pub data_name: String64,
		/// Absent deletes the entry.
		pub data_value: Option<DataValue>,
	}
}

xdr_struct! {
	/// Raise the source account sequence number.
	pub struct BumpSequenceOp {
		/// New sequence number for the source account.
		pub bump_to: SequenceNumber,
	}
}

xdr_struct! {
	/// Lock an amount for later claim.
	pub struct CreateClaimableBalanceOp {
		/// Asset locked.
		pub asset: Asset,
		/// Amount locked into the balance.
		pub amount: i64,
		/// Accounts allowed to claim.
		pub claimants: VecM<Claimant, 10>,
	}
}

xdr_struct! {
	/// Claim a balance.
	pub struct ClaimClaimableBalanceOp {
		/// Claimable balance targeted.
		pub balance_id: ClaimableBalanceId,
	}
}

xdr_struct! {
	/// Start paying reserves for another account.
	pub struct BeginSponsoringFutureReservesOp {
		/// Account whose reserves are sponsored.
		pub sponsored_id: AccountId,
	}
}

xdr_enum! {
	/// Sponsorship revocation targets.
	pub enum RevokeSponsorshipType {
		/// Of a ledger entry.
		LedgerEntry = 0,
		/// Of a signer.
		Signer = 1,
	}
}

xdr_struct! {
	/// Signer whose sponsorship is revoked.
	pub struct RevokeSponsorshipOpSigner {
		/// Account holding the signer.
		pub account_id: AccountId,
		/// Signer to revoke.
		pub signer_key: SignerKey,
	}
}

xdr_union! {
	/// Revoke or transfer a sponsorship.
	pub enum RevokeSponsorshipOp switch (RevokeSponsorshipType) {
		/// Of a ledger entry.
		LedgerEntry(RevokeSponsorshipType::LedgerEntry) => LedgerKey,
		/// Of a signer.
		Signer(RevokeSponsorshipType::Signer) => RevokeSponsorshipOpSigner,
	}
}

xdr_struct! {
	/// Burn an amount held by another account.
	pub struct ClawbackOp {
		/// Asset to claw back.
		pub asset: Asset,
		/// Holder the asset is taken from.
		pub from: MuxedAccount,
		/// Amount clawed back.
		pub amount: i64,
	}
}

xdr_struct! {
	/// Burn a claimable balance.
	pub struct ClawbackClaimableBalanceOp {
		/// Claimable balance targeted.
		pub balance_id: ClaimableBalanceId,
	}
}

xdr_struct! {
	/// Change trust line flags as issuer.
	pub struct SetTrustLineFlagsOp {
		/// Holder of the trust line.
		pub trustor: AccountId,
		/// Asset of the trust line.
		pub asset: Asset,
		/// Trust line flags to clear.
		pub clear_flags: u32,
		/// Trust line flags to set.
		pub set_flags: u32,
	}
}

/// Pool fee in basis points since protocol 18.
pub const LIQUIDITY_POOL_FEE_V18: i32 = 30;

xdr_struct! {
	/// Deposit into a liquidity pool.
	pub struct LiquidityPoolDepositOp {
		/// Pool involved.
		pub liquidity_pool_id: PoolId,
		/// Most of asset A to deposit.
		pub max_amount_a: i64,
		/// Most of asset B to deposit.
		pub max_amount_b: i64,
		/// Lowest acceptable A/B price.
		pub min_price: Price,
		/// Highest acceptable A/B price.
		pub max_price: Price,
	}
}

xdr_struct! {
	/// Withdraw from a liquidity pool.
	pub struct LiquidityPoolWithdrawOp {
		/// Pool involved.
		pub liquidity_pool_id: PoolId,
		/// Pool shares to redeem.
		pub amount: i64,
		/// Least amount of asset A to receive.
		pub min_amount_a: i64,
		/// Least amount of asset B to receive.
		pub min_amount_b: i64,
	}
}

xdr_enum! {
	/// Host function kinds.
	pub enum HostFunctionType {
		/// Call a contract.
		InvokeContract = 0,
		/// Deploy a contract.
		CreateContract = 1,
		/// Upload Wasm.
		UploadContractWasm = 2,
		/// Deploy with constructor arguments.
		CreateContractV2 = 3,
	}
}

xdr_enum! {
	/// Contract id derivation kinds.
	pub enum ContractIdPreimageType {
		/// Derived from a deployer and salt.
		FromAddress = 0,
		/// Derived from an asset.
		FromAsset = 1,
	}
}

xdr_struct! {
	/// Deployer address and salt.
	pub struct ContractIdPreimageFromAddress {
		/// Deployer address.
		pub address: ScAddress,
		/// Deployer-chosen salt.
		pub salt: Uint256,
	}
}

xdr_union! {
	/// Input to contract id derivation.
	pub enum ContractIdPreimage switch (ContractIdPreimageType) {
		/// Derived from a deployer and salt.
		FromAddress(ContractIdPreimageType::FromAddress) => ContractIdPreimageFromAddress,
		/// Derived from an asset.
		FromAsset(ContractIdPreimageType::FromAsset) => Asset,
	}
}

xdr_struct! {
	/// Contract deployment.
	pub struct CreateContractArgs {
		/// Source the contract address derives from.
		pub contract_id_preimage: ContractIdPreimage,
		/// Code to deploy.
		pub executable: ContractExecutable,
	}
}

xdr_struct! {
	/// Contract deployment with constructor arguments.
	pub struct CreateContractArgsV2 {
		/// Source the contract address derives from.
		pub contract_id_preimage: ContractIdPreimage,
		/// Code to deploy.
		pub executable: ContractExecutable,
		/// Arguments passed to the constructor.
		pub constructor_args: VecM<ScVal>,
	}
}

xdr_struct! {
	/// Contract call.
	pub struct InvokeContractArgs {
		/// Contract to call.
		pub contract_address: ScAddress,
		/// Function to call.
		pub function_name: ScSymbol,
		/// Call arguments.
		pub args: VecM<ScVal>,
	}
}

xdr_union! {
	/// Host function invoked by a transaction.
	pub enum HostFunction switch (HostFunctionType) {
		/// Call a contract.
		InvokeContract(HostFunctionType::InvokeContract) => InvokeContractArgs,
		/// Deploy a contract.
		CreateContract(HostFunctionType::CreateContract) => CreateContractArgs,
		/// Wasm module bytes.
		UploadContractWasm(HostFunctionType::UploadContractWasm) => BytesM,
		/// Deploy with constructor arguments.
		CreateContractV2(HostFunctionType::CreateContractV2) => CreateContractArgsV2,
	}
}

xdr_enum! {
	/// Authorized function kinds.
	pub enum SorobanAuthorizedFunctionType {
		/// Contract call.
		ContractFn = 0,
		/// Contract deployment.
		CreateContractHostFn = 1,
		/// Deployment with constructor arguments.
		CreateContractV2HostFn = 2,
	}
}

xdr_union! {
	/// Function covered by an authorization.
	pub enum SorobanAuthorizedFunction switch (SorobanAuthorizedFunctionType) {
		/// Contract call.
		ContractFn(SorobanAuthorizedFunctionType::ContractFn) => InvokeContractArgs,
		/// Contract deployment.
		CreateContractHostFn(SorobanAuthorizedFunctionType::CreateContractHostFn) => CreateContractArgs,
		/// Deployment with constructor arguments.
		CreateContractV2HostFn(SorobanAuthorizedFunctionType::CreateContractV2HostFn) => CreateContractArgsV2,
	}
}

xdr_struct! {
	/// Authorized call tree.
	pub struct SorobanAuthorizedInvocation {
		/// Call being authorized.
		pub function: SorobanAuthorizedFunction,
		/// Calls made by this one.
		pub sub_invocations: VecM<SorobanAuthorizedInvocation>,
	}
}

xdr_struct! {
	/// Address-based authorization credentials.
	pub struct SorobanAddressCredentials {
		/// Address granting the authorization.
		pub address: ScAddress,
		/// Replay protection nonce.
		pub nonce: i64,
		/// Last ledger the signature is valid for.
		pub signature_expiration_ledger: u32,
		/// Signature data checked by the account.
		pub signature: ScVal,
	}
}

xdr_enum! {
	/// Credential kinds.
	pub enum SorobanCredentialsType {
		/// Transaction source signs.
		SourceAccount = 0,
		/// Separate address signature.
		Address = 1,
	}
}

xdr_union! {
	/// Credentials backing an authorization.
	pub enum SorobanCredentials switch (SorobanCredentialsType) {
		/// Authorized by the transaction source signature.
		SourceAccount(SorobanCredentialsType::SourceAccount),
		/// Separate address signature.
		Address(SorobanCredentialsType::Address) => SorobanAddressCredentials,
	}
}

xdr_struct! {
	/// One authorization attached to a host function call.
	pub struct SorobanAuthorizationEntry {
		/// Who authorizes, and how.
		pub credentials: SorobanCredentials,
		/// Top of the authorized call tree.
		pub root_invocation: SorobanAuthorizedInvocation,
	}
}

xdr_struct! {
	/// Invoke a host function.
	pub struct InvokeHostFunctionOp {
		/// Function to run.
		pub host_function: HostFunction,
		/// Authorizations required by the call.
		pub auth: VecM<SorobanAuthorizationEntry>,
	}
}

xdr_struct! {
	/// Extend the lifetime of footprint entries.
	pub struct ExtendFootprintTtlOp {
		/// Reserved; always `V0`.
		pub ext: ExtensionPoint,
		/// Ledgers the footprint entries should live past the current one.
		pub extend_to: u32,
	}
}

xdr_struct! {
	/// Restore archived footprint entries.
	pub struct RestoreFootprintOp {
		/// Reserved; always `V0`.
		pub ext: ExtensionPoint,
	}
}

xdr_union! {
	/// Operation payload by kind.
	pub enum OperationBody switch (OperationType) {
		/// Fund a new account.
		CreateAccount(OperationType::CreateAccount) => CreateAccountOp,
		/// Send an asset.
		Payment(OperationType::Payment) => PaymentOp,
		/// Path payment with fixed receive amount.
		PathPaymentStrictReceive(OperationType::PathPaymentStrictReceive) => PathPaymentStrictReceiveOp,
		/// Sell offer.
		ManageSellOffer(OperationType::ManageSellOffer) => ManageSellOfferOp,
		/// Passive sell offer.
		CreatePassiveSellOffer(OperationType::CreatePassiveSellOffer) => CreatePassiveSellOfferOp,
		/// Account settings.
		SetOptions(OperationType::SetOptions) => SetOptionsOp,
		/// Trust line change.
		ChangeTrust(OperationType::ChangeTrust) => ChangeTrustOp,
		/// Legacy trust authorization.
		AllowTrust(OperationType::AllowTrust) => AllowTrustOp,
		/// Merge the source into this destination.
		AccountMerge(OperationType::AccountMerge) => MuxedAccount,
		/// Run inflation.
		Inflation(OperationType::Inflation),
		/// Data entry change.
		ManageData(OperationType::ManageData) => ManageDataOp,
		/// Raise the sequence number.
		BumpSequence(OperationType::BumpSequence) => BumpSequenceOp,
		/// Buy offer.
		ManageBuyOffer(OperationType::ManageBuyOffer) => ManageBuyOfferOp,
		/// Path payment with fixed send amount.
		PathPaymentStrictSend(OperationType::PathPaymentStrictSend) => PathPaymentStrictSendOp,
		/// Lock funds for claimants.
		CreateClaimableBalance(OperationType::CreateClaimableBalance) => CreateClaimableBalanceOp,
		/// Claim a balance.
		ClaimClaimableBalance(OperationType::ClaimClaimableBalance) => ClaimClaimableBalanceOp,
		/// Start sponsoring.
		BeginSponsoringFutureReserves(OperationType::BeginSponsoringFutureReserves) => BeginSponsoringFutureReservesOp,
		/// Stop sponsoring.
		EndSponsoringFutureReserves(OperationType::EndSponsoringFutureReserves),
		/// Move or drop a sponsorship.
		RevokeSponsorship(OperationType::RevokeSponsorship) => RevokeSponsorshipOp,
		/// Reclaim an asset.
		Clawback(OperationType::Clawback) => ClawbackOp,
		/// Reclaim a claimable balance.
		ClawbackClaimableBalance(OperationType::ClawbackClaimableBalance) => ClawbackClaimableBalanceOp,
		/// Change trust line flags.
		SetTrustLineFlags(OperationType::SetTrustLineFlags) => SetTrustLineFlagsOp,
		/// Deposit into a pool.
		LiquidityPoolDeposit(OperationType::LiquidityPoolDeposit) => LiquidityPoolDepositOp,
		/// Withdraw from a pool.
		LiquidityPoolWithdraw(OperationType::LiquidityPoolWithdraw) => LiquidityPoolWithdrawOp,
		/// Run a host function.
		InvokeHostFunction(OperationType::InvokeHostFunction) => InvokeHostFunctionOp,
		/// Extend entry lifetimes.
		ExtendFootprintTtl(OperationType::ExtendFootprintTtl) => ExtendFootprintTtlOp,
		/// Restore archived entries.
		RestoreFootprint(OperationType::RestoreFootprint) => RestoreFootprintOp,
	}
}

xdr_struct! {
	/// Operation with optional per-operation source account.
	pub struct Operation {
		/// Overrides the transaction source.
		pub source_account: Option<MuxedAccount>,
		/// Operation kind and its arguments.
		pub body: OperationBody,
	}
}

impl Operation {
	/// Operation kind.
	pub fn kind(&self) -> OperationType {
		self.body.discriminant()
	}
}
