//! Operation and transaction results.

use crate::xdr::macros::{xdr_enum, xdr_struct, xdr_union};
use crate::xdr::types::{AccountId, Asset, ClaimableBalanceId, Hash, OfferEntry, OperationType, PoolId, Uint256};
use crate::xdr::{ExtensionPoint, VecM};

xdr_enum! {
	/// Claim atom kinds.
	pub enum ClaimAtomType {
		/// Legacy order book fill.
		V0 = 0,
		/// Order book fill.
		OrderBook = 1,
		/// Pool fill.
		LiquidityPool = 2,
	}
}

xdr_struct! {
	/// Offer crossed before account ids were full public keys.
	pub struct ClaimOfferAtomV0 {
		/// Offer owner key.
		pub seller_ed25519: Uint256,
		/// Offer crossed.
		pub offer_id: i64,
		/// Asset the crossed side gave up.
		pub asset_sold: Asset,
		/// Amount the crossed side gave up.
		pub amount_sold: i64,
		/// Asset received by the crossing party.
		pub asset_bought: Asset,
		/// Amount taken by the crossing party.
		pub amount_bought: i64,
	}
}

xdr_struct! {
	/// Order book offer crossed during a trade.
	pub struct ClaimOfferAtom {
		/// Owner of the crossed offer.
		pub seller_id: AccountId,
		/// Offer crossed.
		pub offer_id: i64,
		/// Sold by the offer owner.
		pub asset_sold: Asset,
		/// Amount the crossed side gave up.
		pub amount_sold: i64,
		/// Asset received by the crossing party.
		pub asset_bought: Asset,
		/// Amount taken by the crossing party.
		pub amount_bought: i64,
	}
}

xdr_struct! {
	/// Liquidity pool crossed during a trade.
	pub struct ClaimLiquidityAtom {
		/// Pool crossed.
		pub liquidity_pool_id: PoolId,
		/// Asset the crossed side gave up.
		pub asset_sold: Asset,
		/// Amount the crossed side gave up.
		pub amount_sold: i64,
		/// Asset received by the crossing party.
		pub asset_bought: Asset,
		/// Amount taken by the crossing party.
		pub amount_bought: i64,
	}
}

xdr_union! {
	/// One fill of a trade.
	pub enum ClaimAtom switch (ClaimAtomType) {
		/// Legacy order book fill.
		V0(ClaimAtomType::V0) => ClaimOfferAtomV0,
		/// Order book fill.
		OrderBook(ClaimAtomType::OrderBook) => ClaimOfferAtom,
		/// Pool fill.
		LiquidityPool(ClaimAtomType::LiquidityPool) => ClaimLiquidityAtom,
	}
}

xdr_struct! {
	/// Final leg of a path payment.
	pub struct SimplePaymentResult {
		/// Recipient.
		pub destination: AccountId,
		/// Asset delivered.
		pub asset: Asset,
		/// Amount delivered.
		pub amount: i64,
	}
}

xdr_struct! {
	/// Fills and final leg of a strict-receive path payment.
	pub struct PathPaymentStrictReceiveResultSuccess {
		/// Offers and pools crossed along the path.
		pub offers: VecM<ClaimAtom>,
		/// Final leg.
		pub last: SimplePaymentResult,
	}
}

xdr_struct! {
	/// Fills and final leg of a strict-send path payment.
	pub struct PathPaymentStrictSendResultSuccess {
		/// Offers and pools crossed along the path.
		pub offers: VecM<ClaimAtom>,
		/// Final leg.
		pub last: SimplePaymentResult,
	}
}

xdr_enum! {
	/// What happened to the offer after matching.
	pub enum ManageOfferEffect {
		/// New offer on the book.
		Created = 0,
		/// Existing offer changed.
		Updated = 1,
		/// Offer filled or removed.
		Deleted = 2,
	}
}

xdr_union! {
	/// Offer left on the book, if any.
	pub enum ManageOfferSuccessResultOffer switch (ManageOfferEffect) {
		/// New offer on the book.
		Created(ManageOfferEffect::Created) => OfferEntry,
		/// Existing offer changed.
		Updated(ManageOfferEffect::Updated) => OfferEntry,
		/// Offer filled or removed.
		Deleted(ManageOfferEffect::Deleted),
	}
}

xdr_struct! {
	/// Fills and remaining offer of a successful offer operation.
	pub struct ManageOfferSuccessResult {
		/// Offers crossed.
		pub offers_claimed: VecM<ClaimAtom>,
		/// Resulting offer.
		pub offer: ManageOfferSuccessResultOffer,
	}
}

xdr_struct! {
	/// One inflation payout.
	pub struct InflationPayout {
		/// Recipient.
		pub destination: AccountId,
		/// Amount paid.
		pub amount: i64,
	}
}

xdr_enum! {
	/// Outcome codes for account creation.
	pub enum CreateAccountResultCode {
		/// Applied.
		Success = 0,
		/// Invalid arguments.
		Malformed = -1,
		/// Source cannot cover the starting balance.
		Underfunded = -2,
		/// Starting balance is below the reserve.
		LowReserve = -3,
		/// Account already exists.
		AlreadyExist = -4,
	}
}

xdr_union! {
	/// Result of account creation.
	pub enum CreateAccountResult switch (CreateAccountResultCode) {
		/// Applied.
		Success(CreateAccountResultCode::Success),
		/// Invalid arguments.
		Malformed(CreateAccountResultCode::Malformed),
		/// Source cannot cover the starting balance.
		Underfunded(CreateAccountResultCode::Underfunded),
		/// Starting balance is below the reserve.
		LowReserve(CreateAccountResultCode::LowReserve),
		/// Account already exists.
		AlreadyExist(CreateAccountResultCode::AlreadyExist),
	}
}

xdr_enum! {
	/// Outcome codes for payment.
	pub enum PaymentResultCode {
		/// Applied.
		Success = 0,
		/// Invalid arguments.
		Malformed = -1,
		/// Source lacks the funds.
		Underfunded = -2,
		/// Source has no trust line for the sent asset.
		SrcNoTrust = -3,
		/// Source is not authorized to send the asset.
		SrcNotAuthorized = -4,
		/// Destination account does not exist.
		NoDestination = -5,
		/// Missing trust line.
		NoTrust = -6,
		/// Trust line is not authorized.
		NotAuthorized = -7,
		/// Recipient trust line would exceed its limit.
		LineFull = -8,
		/// Asset issuer does not exist.
		NoIssuer = -9,
	}
}

xdr_union! {
	/// Result of payment.
	pub enum PaymentResult switch (PaymentResultCode) {
		/// Applied.
		Success(PaymentResultCode::Success),
		/// Invalid arguments.
		Malformed(PaymentResultCode::Malformed),
		/// Source lacks the funds.
		Underfunded(PaymentResultCode::Underfunded),
		/// Source has no trust line for the sent asset.
		SrcNoTrust(PaymentResultCode::SrcNoTrust),
		/// Source is not authorized to send the asset.
		SrcNotAuthorized(PaymentResultCode::SrcNotAuthorized),
		/// Destination account does not exist.
		NoDestination(PaymentResultCode::NoDestination),
		/// Missing trust line.
		NoTrust(PaymentResultCode::NoTrust),
		/// Trust line is not authorized.
		NotAuthorized(PaymentResultCode::NotAuthorized),
		/// Recipient trust line would exceed its limit.
		LineFull(PaymentResultCode::LineFull),
		/// Asset issuer does not exist.
		NoIssuer(PaymentResultCode::NoIssuer),
	}
}

xdr_enum! {
	/// Outcome codes for strict-receive path payment.
	pub enum PathPaymentStrictReceiveResultCode {
		/// Applied.
		Success = 0,
		/// Invalid arguments.
		Malformed = -1,
		/// Source lacks the funds.
		Underfunded = -2,
		/// Source has no trust line for the sent asset.
		SrcNoTrust = -3,
		/// Source is not authorized to send the asset.
		SrcNotAuthorized = -4,
		/// Destination account does not exist.
		NoDestination = -5,
		/// Missing trust line.
		NoTrust = -6,
		/// Trust line is not authorized.
		NotAuthorized = -7,
		/// Recipient trust line would exceed its limit.
		LineFull = -8,
		/// Asset issuer does not exist.
		NoIssuer = -9,
		/// Not enough liquidity along the path.
		TooFewOffers = -10,
		/// Path would cross an offer from the source.
		OfferCrossSelf = -11,
		/// Would cost more than `send_max`.
		OverSendmax = -12,
	}
}

xdr_union! {
	/// Result of strict-receive path payment.
	pub enum PathPaymentStrictReceiveResult switch (PathPaymentStrictReceiveResultCode) {
		/// Applied.
		Success(PathPaymentStrictReceiveResultCode::Success) => PathPaymentStrictReceiveResultSuccess,
		/// Invalid arguments.
		Malformed(PathPaymentStrictReceiveResultCode::Malformed),
		/// Source lacks the funds.
		Underfunded(PathPaymentStrictReceiveResultCode::Underfunded),
		/// Source has no trust line for the sent asset.
		SrcNoTrust(PathPaymentStrictReceiveResultCode::SrcNoTrust),
		/// Source is not authorized to send the asset.
		SrcNotAuthorized(PathPaymentStrictReceiveResultCode::SrcNotAuthorized),
		/// Destination account does not exist.
		NoDestination(PathPaymentStrictReceiveResultCode::NoDestination),
		/// Missing trust line.
		NoTrust(PathPaymentStrictReceiveResultCode::NoTrust),
		/// Trust line is not authorized.
		NotAuthorized(PathPaymentStrictReceiveResultCode::NotAuthorized),
		/// Recipient trust line would exceed its limit.
		LineFull(PathPaymentStrictReceiveResultCode::LineFull),
		/// Asset issuer does not exist.
		NoIssuer(PathPaymentStrictReceiveResultCode::NoIssuer) => Asset,
		/// Not enough liquidity along the path.
		TooFewOffers(PathPaymentStrictReceiveResultCode::TooFewOffers),
		/// Path would cross an offer from the source.
		OfferCrossSelf(PathPaymentStrictReceiveResultCode::OfferCrossSelf),
		/// Would cost more than `send_max`.
		OverSendmax(PathPaymentStrictReceiveResultCode::OverSendmax),
	}
}

xdr_enum! {
	/// Outcome codes for sell offer management.
	pub enum ManageSellOfferResultCode {
		/// Applied.
		Success = 0,
		/// Invalid arguments.
		Malformed = -1,
		/// No trust line for the selling asset.
		SellNoTrust = -2,
		/// No trust line for the buying asset.
		BuyNoTrust = -3,
		/// Not authorized to sell the asset.
		SellNotAuthorized = -4,
		/// Not authorized to buy the asset.
		BuyNotAuthorized = -5,
		/// Buying trust line would exceed its limit.
		LineFull = -6,
		/// Not enough of the selling asset.
		Underfunded = -7,
		/// Would cross an offer from the same account.
		CrossSelf = -8,
		/// Selling asset issuer does not exist.
		SellNoIssuer = -9,
		/// Buying asset issuer does not exist.
		BuyNoIssuer = -10,
		/// Offer id does not exist.
		NotFound = -11,
		/// Offer would drop below the reserve.
		LowReserve = -12,
	}
}

xdr_union! {
	/// Result of sell offer management.
	pub enum ManageSellOfferResult switch (ManageSellOfferResultCode) {
		/// Applied.
		Success(ManageSellOfferResultCode::Success) => ManageOfferSuccessResult,
		/// Invalid arguments.
		Malformed(ManageSellOfferResultCode::Malformed),
		/// No trust line for the selling asset.
		SellNoTrust(ManageSellOfferResultCode::SellNoTrust),
		/// No trust line for the buying asset.
		BuyNoTrust(ManageSellOfferResultCode::BuyNoTrust),
		/// Not authorized to sell the asset.
		SellNotAuthorized(ManageSellOfferResultCode::SellNotAuthorized),
		/// Not authorized to buy the asset.
		BuyNotAuthorized(ManageSellOfferResultCode::BuyNotAuthorized),
		/// Buying trust line would exceed its limit.
		LineFull(ManageSellOfferResultCode::LineFull),
		/// Not enough of the selling asset.
		Underfunded(ManageSellOfferResultCode::Underfunded),
		/// Would cross an offer from the same account.
		CrossSelf(ManageSellOfferResultCode::CrossSelf),
		/// Selling asset issuer does not exist.
		SellNoIssuer(ManageSellOfferResultCode::SellNoIssuer),
		/// Buying asset issuer does not exist.
		BuyNoIssuer(ManageSellOfferResultCode::BuyNoIssuer),
		/// Offer id does not exist.
		NotFound(ManageSellOfferResultCode::NotFound),
		/// Offer would drop below the reserve.
		LowReserve(ManageSellOfferResultCode::LowReserve),
	}
}

xdr_enum! {
	/// Outcome codes for account option changes.
	pub enum SetOptionsResultCode {
		/// Applied.
		Success = 0,
		/// Would drop below the minimum reserve.
		LowReserve = -1,
		/// Signer limit reached.
		TooManySigners = -2,
		/// Flags set and cleared at once.
		BadFlags = -3,
		/// Inflation destination does not exist.
		InvalidInflation = -4,
		/// Account flags are immutable.
		CantChange = -5,
		/// Unknown flag bit.
		UnknownFlag = -6,
		/// Weight or threshold above 255.
		ThresholdOutOfRange = -7,
		/// Signer is the master key.
		BadSigner = -8,
		/// Home domain is not printable.
		InvalidHomeDomain = -9,
		/// Clawback requires auth revocable.
		AuthRevocableRequired = -10,
	}
}

xdr_union! {
	/// Result of account option changes.
	pub enum SetOptionsResult switch (SetOptionsResultCode) {
		/// Applied.
		Success(SetOptionsResultCode::Success),
		/// Would drop below the minimum reserve.
		LowReserve(SetOptionsResultCode::LowReserve),
		/// Signer limit reached.
		TooManySigners(SetOptionsResultCode::TooManySigners),
		/// Flags set and cleared at once.
		BadFlags(SetOptionsResultCode::BadFlags),
		/// Inflation destination does not exist.
		InvalidInflation(SetOptionsResultCode::InvalidInflation),
		/// Account flags are immutable.
		CantChange(SetOptionsResultCode::CantChange),
		/// Unknown flag bit.
		UnknownFlag(SetOptionsResultCode::UnknownFlag),
		/// Weight or threshold above 255.
		ThresholdOutOfRange(SetOptionsResultCode::ThresholdOutOfRange),
		/// Signer is the master key.
		BadSigner(SetOptionsResultCode::BadSigner),
		/// Home domain is not printable.
		InvalidHomeDomain(SetOptionsResultCode::InvalidHomeDomain),
		/// Clawback requires auth revocable.
		AuthRevocableRequired(SetOptionsResultCode::AuthRevocableRequired),
	}
}

xdr_enum! {
	/// Outcome codes for trust line changes.
	pub enum ChangeTrustResultCode {
		/// Applied.
		Success = 0,
		/// Invalid arguments.
		Malformed = -1,
		/// Issuer does not exist.
		NoIssuer = -2,
		/// Limit below the current balance.
		InvalidLimit = -3,
		/// New line would drop below the reserve.
		LowReserve = -4,
		/// Account cannot trust itself.
		SelfNotAllowed = -5,
		/// Pool share asset has no matching trust line.
		TrustLineMissing = -6,
		/// Trust line is still used by a pool.
		CannotDelete = -7,
		/// Asset trust line lacks liabilities authorization.
		NotAuthMaintainLiabilities = -8,
	}
}

xdr_union! {
	/// Result of trust line changes.
	pub enum ChangeTrustResult switch (ChangeTrustResultCode) {
		/// Applied.
		Success(ChangeTrustResultCode::Success),
		/// Invalid arguments.
		Malformed(ChangeTrustResultCode::Malformed),
		/// Issuer does not exist.
		NoIssuer(ChangeTrustResultCode::NoIssuer),
		/// Limit below the current balance.
		InvalidLimit(ChangeTrustResultCode::InvalidLimit),
		/// New line would drop below the reserve.
		LowReserve(ChangeTrustResultCode::LowReserve),
		/// Account cannot trust itself.
		SelfNotAllowed(ChangeTrustResultCode::SelfNotAllowed),
		/// Pool share asset has no matching trust line.
		TrustLineMissing(ChangeTrustResultCode::TrustLineMissing),
		/// Trust line is still used by a pool.
		CannotDelete(ChangeTrustResultCode::CannotDelete),
		/// Asset trust line lacks liabilities authorization.
		NotAuthMaintainLiabilities(ChangeTrustResultCode::NotAuthMaintainLiabilities),
	}
}

xdr_enum! {
	/// Outcome codes for legacy trust authorization.
	pub enum AllowTrustResultCode {
		/// Applied.
		Success = 0,
		/// Invalid arguments.
		Malformed = -1,
		/// Trustor has no trust line.
		NoTrustLine = -2,
		/// Issuer does not require authorization.
		TrustNotRequired = -3,
		/// Issuer cannot revoke authorization.
		CantRevoke = -4,
		/// Account cannot trust itself.
		SelfNotAllowed = -5,
		/// Revocation would drop below the reserve.
		LowReserve = -6,
	}
}

xdr_union! {
	/// Result of legacy trust authorization.
	pub enum AllowTrustResult switch (AllowTrustResultCode) {
		/// Applied.
		Success(AllowTrustResultCode::Success),
		/// Invalid arguments.
		Malformed(AllowTrustResultCode::Malformed),
		/// Trustor has no trust line.
		NoTrustLine(AllowTrustResultCode::NoTrustLine),
		/// Issuer does not require authorization.
		TrustNotRequired(AllowTrustResultCode::TrustNotRequired),
		/// Issuer cannot revoke authorization.
		CantRevoke(AllowTrustResultCode::CantRevoke),
		/// Account cannot trust itself.
		SelfNotAllowed(AllowTrustResultCode::SelfNotAllowed),
		/// Revocation would drop below the reserve.
		LowReserve(AllowTrustResultCode::LowReserve),
	}
}

xdr_enum! {
	/// Outcome codes for account merge.
	pub enum AccountMergeResultCode {
		/// Applied.
		Success = 0,
		/// Invalid arguments.
		Malformed = -1,
		/// Destination does not exist.
		NoAccount = -2,
		/// Source flags are immutable.
		ImmutableSet = -3,
		/// Source still owns subentries.
		HasSubEntries = -4,
		/// Source sequence is too high to recreate.
		SeqnumTooFar = -5,
		/// Destination balance would overflow.
		DestFull = -6,
		/// Source sponsors other entries.
		IsSponsor = -7,
	}
}

xdr_union! {
	/// Result of account merge.
	pub enum AccountMergeResult switch (AccountMergeResultCode) {
		/// Applied.
		Success(AccountMergeResultCode::Success) => i64,
		/// Invalid arguments.
		Malformed(AccountMergeResultCode::Malformed),
		/// Destination does not exist.
		NoAccount(AccountMergeResultCode::NoAccount),
		/// Source flags are immutable.
		ImmutableSet(AccountMergeResultCode::ImmutableSet),
		/// Source still owns subentries.
		HasSubEntries(AccountMergeResultCode::HasSubEntries),
		/// Source sequence is too high to recreate.
		SeqnumTooFar(AccountMergeResultCode::SeqnumTooFar),
		/// Destination balance would overflow.
		DestFull(AccountMergeResultCode::DestFull),
		/// Source sponsors other entries.
		IsSponsor(AccountMergeResultCode::IsSponsor),
	}
}

xdr_enum! {
	/// Outcome codes for inflation.
	pub enum InflationResultCode {
		/// Applied.
		Success = 0,
		/// Inflation is not due yet.
		NotTime = -1,
	}
}

xdr_union! {
	/// Result of inflation.
	pub enum InflationResult switch (InflationResultCode) {
		/// Applied.
		Success(InflationResultCode::Success) => VecM<InflationPayout>,
		/// Inflation is not due yet.
		NotTime(InflationResultCode::NotTime),
	}
}

xdr_enum! {
	/// Outcome codes for account data changes.
	pub enum ManageDataResultCode {
		/// Applied.
		Success = 0,
		/// Network does not support data entries.
		NotSupportedYet = -1,
		/// No entry to delete.
		NameNotFound = -2,
		/// New entry would drop below the reserve.
		LowReserve = -3,
		/// Name is empty or not printable.
		InvalidName = -4,
	}
}

xdr_union! {
	/// Result of account data changes.
	pub enum ManageDataResult switch (ManageDataResultCode) {
		/// Applied.
		Success(ManageDataResultCode::Success),
		/// Network does not support data entries.
		NotSupportedYet(ManageDataResultCode::NotSupportedYet),
		/// No entry to delete.
		NameNotFound(ManageDataResultCode::NameNotFound),
		/// New entry would drop below the reserve.
		LowReserve(ManageDataResultCode::LowReserve),
		/// Name is empty or not printable.
		InvalidName(ManageDataResultCode::InvalidName),
	}
}

xdr_enum! {
	/// Outcome codes for sequence bumps.
	pub enum BumpSequenceResultCode {
		/// Applied.
		Success = 0,
		/// Target sequence is out of range.
		BadSeq = -1,
	}
}

xdr_union! {
	/// Result of sequence bumps.
	pub enum BumpSequenceResult switch (BumpSequenceResultCode) {
		/// Applied.
		Success(BumpSequenceResultCode::Success),
		/// Target sequence is out of range.
		BadSeq(BumpSequenceResultCode::BadSeq),
	}
}

xdr_enum! {
	/// Outcome codes for buy offer management.
	pub enum ManageBuyOfferResultCode {
		/// Applied.
		Success = 0,
		/// Invalid arguments.
		Malformed = -1,
		/// No trust line for the selling asset.
		SellNoTrust = -2,
		/// No trust line for the buying asset.
		BuyNoTrust = -3,
		/// Not authorized to sell the asset.
		SellNotAuthorized = -4,
		/// Not authorized to buy the asset.
		BuyNotAuthorized = -5,
		/// Buying trust line would exceed its limit.
		LineFull = -6,
		/// Not enough of the selling asset.
		Underfunded = -7,
		/// Would cross an offer from the same account.
		CrossSelf = -8,
		/// Selling asset issuer does not exist.
		SellNoIssuer = -9,
		/// Buying asset issuer does not exist.
		BuyNoIssuer = -10,
		/// Offer id does not exist.
		NotFound = -11,
		/// Offer would drop below the reserve.
		LowReserve = -12,
	}
}

xdr_union! {
	/// Result of buy offer management.
	pub enum ManageBuyOfferResult switch (ManageBuyOfferResultCode) {
		/// Applied.
		Success(ManageBuyOfferResultCode::Success) => ManageOfferSuccessResult,
		/// Invalid arguments.
		Malformed(ManageBuyOfferResultCode::Malformed),
		/// No trust line for the selling asset.
		SellNoTrust(ManageBuyOfferResultCode::SellNoTrust),
		/// No trust line for the buying asset.
		BuyNoTrust(ManageBuyOfferResultCode::BuyNoTrust),
		/// Not authorized to sell the asset.
		SellNotAuthorized(ManageBuyOfferResultCode::SellNotAuthorized),
		/// Not authorized to buy the asset.
		BuyNotAuthorized(ManageBuyOfferResultCode::BuyNotAuthorized),
		/// Buying trust line would exceed its limit.
		LineFull(ManageBuyOfferResultCode::LineFull),
		/// Not enough of the selling asset.
		Underfunded(ManageBuyOfferResultCode::Underfunded),
		/// Would cross an offer from the same account.
		CrossSelf(ManageBuyOfferResultCode::CrossSelf),
		/// Selling asset issuer does not exist.
		SellNoIssuer(ManageBuyOfferResultCode::SellNoIssuer),
		/// Buying asset issuer does not exist.
		BuyNoIssuer(ManageBuyOfferResultCode::BuyNoIssuer),
		/// Offer id does not exist.
		NotFound(ManageBuyOfferResultCode::NotFound),
		/// Offer would drop below the reserve.
		LowReserve(ManageBuyOfferResultCode::LowReserve),
	}
}

xdr_enum! {
	/// Outcome codes for strict-send path payment.
	pub enum PathPaymentStrictSendResultCode {
		/// Applied.
		Success = 0,
		/// Invalid arguments.
		Malformed = -1,
		/// Source lacks the funds.
		Underfunded = -2,
		/// Source has no trust line for the sent asset.
		SrcNoTrust = -3,
		/// Source is not authorized to send the asset.
		SrcNotAuthorized = -4,
		/// Destination account does not exist.
		NoDestination = -5,
		/// Missing trust line.
		NoTrust = -6,
		/// Trust line is not authorized.
		NotAuthorized = -7,
		/// Recipient trust line would exceed its limit.
		LineFull = -8,
		/// Asset issuer does not exist.
		NoIssuer = -9,
		/// Not enough liquidity along the path.
		TooFewOffers = -10,
		/// Path would cross an offer from the source.
		OfferCrossSelf = -11,
		/// Would deliver less than `dest_min`.
		UnderDestmin = -12,
	}
}

xdr_union! {
	/// Result of strict-send path payment.
	pub enum PathPaymentStrictSendResult switch (PathPaymentStrictSendResultCode) {
		/// Applied.
		Success(PathPaymentStrictSendResultCode::Success) => PathPaymentStrictSendResultSuccess,
		/// Invalid arguments.
		Malformed(PathPaymentStrictSendResultCode::Malformed),
		/// Source lacks the funds.
		Underfunded(PathPaymentStrictSendResultCode::Underfunded),
		/// Source has no trust line for the sent asset.
		SrcNoTrust(PathPaymentStrictSendResultCode::SrcNoTrust),
		/// Source is not authorized to send the asset.
		SrcNotAuthorized(PathPaymentStrictSendResultCode::SrcNotAuthorized),
		/// Destination account does not exist.
		NoDestination(PathPaymentStrictSendResultCode::NoDestination),
		/// Missing trust line.
		NoTrust(PathPaymentStrictSendResultCode::NoTrust),
		/// Trust line is not authorized.
		NotAuthorized(PathPaymentStrictSendResultCode::NotAuthorized),
		/// Recipient trust line would exceed its limit.
		LineFull(PathPaymentStrictSendResultCode::LineFull),
		/// Asset issuer does not exist.
		NoIssuer(PathPaymentStrictSendResultCode::NoIssuer) => Asset,
		/// Not enough liquidity along the path.
		TooFewOffers(PathPaymentStrictSendResultCode::TooFewOffers),
		/// Path would cross an offer from the source.
		OfferCrossSelf(PathPaymentStrictSendResultCode::OfferCrossSelf),
		/// Would deliver less than `dest_min`.
		UnderDestmin(PathPaymentStrictSendResultCode::UnderDestmin),
	}
}

xdr_enum! {
	/// Outcome codes for claimable balance creation.
	pub enum CreateClaimableBalanceResultCode {
		/// Applied.
		Success = 0,
		/// Invalid arguments.
		Malformed = -1,
		/// Balance would drop below the reserve.
		LowReserve = -2,
		/// Missing trust line.
		NoTrust = -3,
		/// Trust line is not authorized.
		NotAuthorized = -4,
		/// Source lacks the funds.
		Underfunded = -5,
	}
}

xdr_union! {
	/// Result of claimable balance creation.
	pub enum CreateClaimableBalanceResult switch (CreateClaimableBalanceResultCode) {
		/// Applied.
		Success(CreateClaimableBalanceResultCode::Success) => ClaimableBalanceId,
		/// Invalid arguments.
		Malformed(CreateClaimableBalanceResultCode::Malformed),
		/// Balance would drop below the reserve.
		LowReserve(CreateClaimableBalanceResultCode::LowReserve),
		/// Missing trust line.
		NoTrust(CreateClaimableBalanceResultCode::NoTrust),
		/// Trust line is not authorized.
		NotAuthorized(CreateClaimableBalanceResultCode::NotAuthorized),
		/// Source lacks the funds.
		Underfunded(CreateClaimableBalanceResultCode::Underfunded),
	}
}

xdr_enum! {
	/// Outcome codes for claimable balance claims.
	pub enum ClaimClaimableBalanceResultCode {
		/// Applied.
		Success = 0,
		/// Balance does not exist.
		DoesNotExist = -1,
		/// Source is not an eligible claimant.
		CannotClaim = -2,
		/// Recipient trust line would exceed its limit.
		LineFull = -3,
		/// Missing trust line.
		NoTrust = -4,
		/// Trust line is not authorized.
		NotAuthorized = -5,
	}
}

xdr_union! {
	/// Result of claimable balance claims.
	pub enum ClaimClaimableBalanceResult switch (ClaimClaimableBalanceResultCode) {
		/// Applied.
		Success(ClaimClaimableBalanceResultCode::Success),
		/// Balance does not exist.
		DoesNotExist(ClaimClaimableBalanceResultCode::DoesNotExist),
		/// Source is not an eligible claimant.
		CannotClaim(ClaimClaimableBalanceResultCode::CannotClaim),
		/// Recipient trust line would exceed its limit.
		LineFull(ClaimClaimableBalanceResultCode::LineFull),
		/// Missing trust line.
		NoTrust(ClaimClaimableBalanceResultCode::NoTrust),
		/// Trust line is not authorized.
		NotAuthorized(ClaimClaimableBalanceResultCode::NotAuthorized),
	}
}

xdr_enum! {
	/// Outcome codes for sponsorship start.
	pub enum BeginSponsoringFutureReservesResultCode {
		/// Applied.
		Success = 0,
		/// Invalid arguments.
		Malformed = -1,
		/// Sponsored account already has a sponsor.
		AlreadySponsored = -2,
		/// Sponsorships would chain.
		Recursive = -3,
	}
}

xdr_union! {
	/// Result of sponsorship start.
	pub enum BeginSponsoringFutureReservesResult switch (BeginSponsoringFutureReservesResultCode) {
		/// Applied.
		Success(BeginSponsoringFutureReservesResultCode::Success),
		/// Invalid arguments.
		Malformed(BeginSponsoringFutureReservesResultCode::Malformed),
		/// Sponsored account already has a sponsor.
		AlreadySponsored(BeginSponsoringFutureReservesResultCode::AlreadySponsored),
		/// Sponsorships would chain.
		Recursive(BeginSponsoringFutureReservesResultCode::Recursive),
	}
}

xdr_enum! {
	/// Outcome codes for sponsorship end.
	pub enum EndSponsoringFutureReservesResultCode {
		/// Applied.
		Success = 0,
		/// Source is not being sponsored.
		NotSponsored = -1,
	}
}

xdr_union! {
	/// Result of sponsorship end.
	pub enum EndSponsoringFutureReservesResult switch (EndSponsoringFutureReservesResultCode) {
		/// Applied.
		Success(EndSponsoringFutureReservesResultCode::Success),
		/// Source is not being sponsored.
		NotSponsored(EndSponsoringFutureReservesResultCode::NotSponsored),
	}
}

xdr_enum! {
	/// Outcome codes for sponsorship revocation.
	pub enum RevokeSponsorshipResultCode {
		/// Applied.
		Success = 0,
		/// Entry does not exist.
		DoesNotExist = -1,
		/// Source is not the sponsor.
		NotSponsor = -2,
		/// Would drop below the minimum reserve.
		LowReserve = -3,
		/// Sponsorship can only move to another sponsor.
		OnlyTransferable = -4,
		/// Target cannot be sponsored.
		Malformed = -5,
	}
}

xdr_union! {
	/// Result of sponsorship revocation.
	pub enum RevokeSponsorshipResult switch (RevokeSponsorshipResultCode) {
		/// Applied.
		Success(RevokeSponsorshipResultCode::Success),
		/// Entry does not exist.
		DoesNotExist(RevokeSponsorshipResultCode::DoesNotExist),
		/// Source is not the sponsor.
		NotSponsor(RevokeSponsorshipResultCode::NotSponsor),
		/// Would drop below the minimum reserve.
		LowReserve(RevokeSponsorshipResultCode::LowReserve),
		/// Sponsorship can only move to another sponsor.
		OnlyTransferable(RevokeSponsorshipResultCode::OnlyTransferable),
		/// Target cannot be sponsored.
		Malformed(RevokeSponsorshipResultCode::Malformed),
	}
}

xdr_enum! {
	/// Outcome codes for clawback.
	pub enum ClawbackResultCode {
		/// Applied.
		Success = 0,
		/// Invalid arguments.
		Malformed = -1,
		/// Trust line does not allow clawback.
		NotClawbackEnabled = -2,
		/// Holder has no trust line.
		NoTrust = -3,
		/// Holder has less than the amount.
		Underfunded = -4,
	}
}

xdr_union! {
	/// Result of clawback.
	pub enum ClawbackResult switch (ClawbackResultCode) {
		/// Applied.
		Success(ClawbackResultCode::Success),
		/// Invalid arguments.
		Malformed(ClawbackResultCode::Malformed),
		/// Trust line does not allow clawback.
		NotClawbackEnabled(ClawbackResultCode::NotClawbackEnabled),
		/// Holder has no trust line.
		NoTrust(ClawbackResultCode::NoTrust),
		/// Holder has less than the amount.
		Underfunded(ClawbackResultCode::Underfunded),
	}
}

xdr_enum! {
	/// Outcome codes for claimable balance clawback.
	pub enum ClawbackClaimableBalanceResultCode {
		/// Applied.
		Success = 0,
		/// Balance does not exist.
		DoesNotExist = -1,
		/// Source is not the asset issuer.
		NotIssuer = -2,
		/// Clawback is not enabled.
		NotClawbackEnabled = -3,
	}
}

xdr_union! {
	/// Result of claimable balance clawback.
	pub enum ClawbackClaimableBalanceResult switch (ClawbackClaimableBalanceResultCode) {
		/// Applied.
		Success(ClawbackClaimableBalanceResultCode::Success),
		/// Balance does not exist.
		DoesNotExist(ClawbackClaimableBalanceResultCode::DoesNotExist),
		/// Source is not the asset issuer.
		NotIssuer(ClawbackClaimableBalanceResultCode::NotIssuer),
		/// Clawback is not enabled.
		NotClawbackEnabled(ClawbackClaimableBalanceResultCode::NotClawbackEnabled),
	}
}

xdr_enum! {
	/// Outcome codes for trust line flag changes.
	pub enum SetTrustLineFlagsResultCode {
		/// Applied.
		Success = 0,
		/// Invalid arguments.
		Malformed = -1,
		/// Trustor has no trust line.
		NoTrustLine = -2,
		/// Issuer cannot revoke authorization.
		CantRevoke = -3,
		/// Flags would leave an invalid authorization state.
		InvalidState = -4,
		/// Revocation would drop below the reserve.
		LowReserve = -5,
	}
}

xdr_union! {
	/// Result of trust line flag changes.
	pub enum SetTrustLineFlagsResult switch (SetTrustLineFlagsResultCode) {
		/// Applied.
		Success(SetTrustLineFlagsResultCode::Success),
		/// Invalid arguments.
		Malformed(SetTrustLineFlagsResultCode::Malformed),
		/// Trustor has no trust line.
		NoTrustLine(SetTrustLineFlagsResultCode::NoTrustLine),
		/// Issuer cannot revoke authorization.
		CantRevoke(SetTrustLineFlagsResultCode::CantRevoke),
		/// Flags would leave an invalid authorization state.
		InvalidState(SetTrustLineFlagsResultCode::InvalidState),
		/// Revocation would drop below the reserve.
		LowReserve(SetTrustLineFlagsResultCode::LowReserve),
	}
}

xdr_enum! {
	/// Outcome codes for pool deposits.
	pub enum LiquidityPoolDepositResultCode {
		/// Applied.
		Success = 0,
		/// Invalid arguments.
		Malformed = -1,
		/// Missing trust line.
		NoTrust = -2,
		/// Trust line is not authorized.
		NotAuthorized = -3,
		/// Source lacks the funds.
		Underfunded = -4,
		/// Pool share trust line would exceed its limit.
		LineFull = -5,
		/// Pool price is outside the bounds.
		BadPrice = -6,
		/// Pool reserves would overflow.
		PoolFull = -7,
	}
}

xdr_union! {
	/// Result of pool deposits.
	pub enum LiquidityPoolDepositResult switch (LiquidityPoolDepositResultCode) {
		/// Applied.
		Success(LiquidityPoolDepositResultCode::Success),
		/// Invalid arguments.
		Malformed(LiquidityPoolDepositResultCode::Malformed),
		/// Missing trust line.
		NoTrust(LiquidityPoolDepositResultCode::NoTrust),
		/// Trust line is not authorized.
		NotAuthorized(LiquidityPoolDepositResultCode::NotAuthorized),
		/// Source lacks the funds.
		Underfunded(LiquidityPoolDepositResultCode::Underfunded),
		/// Pool share trust line would exceed its limit.
		LineFull(LiquidityPoolDepositResultCode::LineFull),
		/// Pool price is outside the bounds.
		BadPrice(LiquidityPoolDepositResultCode::BadPrice),
		/// Pool reserves would overflow.
		PoolFull(LiquidityPoolDepositResultCode::PoolFull),
	}
}

xdr_enum! {
	/// Outcome codes for pool withdrawals.
	pub enum LiquidityPoolWithdrawResultCode {
		/// Applied.
		Success = 0,
		/// Invalid arguments.
		Malformed = -1,
		/// Missing trust line.
		NoTrust = -2,
		/// Not enough pool shares.
		Underfunded = -3,
		/// An asset trust line would exceed its limit.
		LineFull = -4,
		/// Would return less than the minimums.
		UnderMinimum = -5,
	}
}

xdr_union! {
	/// Result of pool withdrawals.
	pub enum LiquidityPoolWithdrawResult switch (LiquidityPoolWithdrawResultCode) {
		/// Applied.
		Success(LiquidityPoolWithdrawResultCode::Success),
		/// Invalid arguments.
		Malformed(LiquidityPoolWithdrawResultCode::Malformed),
		/// Missing trust line.
		NoTrust(LiquidityPoolWithdrawResultCode::NoTrust),
		/// Not enough pool shares.
		Underfunded(LiquidityPoolWithdrawResultCode::Underfunded),
		/// An asset trust line would exceed its limit.
		LineFull(LiquidityPoolWithdrawResultCode::LineFull),
		/// Would return less than the minimums.
		UnderMinimum(LiquidityPoolWithdrawResultCode::UnderMinimum),
	}
}

xdr_enum! {
	/// Outcome codes for host function calls.
	pub enum InvokeHostFunctionResultCode {
		/// Applied.
		Success = 0,
		/// Invalid arguments.
		Malformed = -1,
		/// Contract trapped.
		Trapped = -2,
		/// Declared resources ran out.
		ResourceLimitExceeded = -3,
		/// Footprint touches an archived entry.
		EntryArchived = -4,
		/// Refundable fee does not cover the cost.
		InsufficientRefundableFee = -5,
	}
}

xdr_union! {
	/// Result of host function calls.
	pub enum InvokeHostFunctionResult switch (InvokeHostFunctionResultCode) {
		/// Applied.
		Success(InvokeHostFunctionResultCode::Success) => Hash,
		/// Invalid arguments.
		Malformed(InvokeHostFunctionResultCode::Malformed),
		/// Contract trapped.
		Trapped(InvokeHostFunctionResultCode::Trapped),
		/// Declared resources ran out.
		ResourceLimitExceeded(InvokeHostFunctionResultCode::ResourceLimitExceeded),
		/// Footprint touches an archived entry.
		EntryArchived(InvokeHostFunctionResultCode::EntryArchived),
		/// Refundable fee does not cover the cost.
		InsufficientRefundableFee(InvokeHostFunctionResultCode::InsufficientRefundableFee),
	}
}

xdr_enum! {
	/// Outcome codes for footprint extensions.
	pub enum ExtendFootprintTtlResultCode {
		/// Applied.
		Success = 0,
		/// Invalid arguments.
		Malformed = -1,
		/// Declared resources ran out.
		ResourceLimitExceeded = -2,
		/// Refundable fee does not cover the cost.
		InsufficientRefundableFee = -3,
	}
}

xdr_union! {
	/// Result of footprint extensions.
	pub enum ExtendFootprintTtlResult switch (ExtendFootprintTtlResultCode) {
		/// Applied.
		Success(ExtendFootprintTtlResultCode::Success),
		/// Invalid arguments.
		Malformed(ExtendFootprintTtlResultCode::Malformed),
		/// Declared resources ran out.
		ResourceLimitExceeded(ExtendFootprintTtlResultCode::ResourceLimitExceeded),
		/// Refundable fee does not cover the cost.
		InsufficientRefundableFee(ExtendFootprintTtlResultCode::InsufficientRefundableFee),
	}
}

xdr_enum! {
	/// Outcome codes for footprint restores.
	pub enum RestoreFootprintResultCode {
		/// Applied.
		Success = 0,
		/// Invalid arguments.
		Malformed = -1,
		/// Declared resources ran out.
		ResourceLimitExceeded = -2,
		/// Refundable fee does not cover the cost.
		InsufficientRefundableFee = -3,
	}
}

xdr_union! {
	/// Result of footprint restores.
	pub enum RestoreFootprintResult switch (RestoreFootprintResultCode) {
		/// Applied.
		Success(RestoreFootprintResultCode::Success),
		/// Invalid arguments.
		Malformed(RestoreFootprintResultCode::Malformed),
		/// Declared resources ran out.
		ResourceLimitExceeded(RestoreFootprintResultCode::ResourceLimitExceeded),
		/// Refundable fee does not cover the cost.
		InsufficientRefundableFee(RestoreFootprintResultCode::InsufficientRefundableFee),
	}
}

xdr_union! {
	/// Per-kind result of an operation that ran.
	pub enum OperationResultTr switch (OperationType) {
		/// Fund a new account.
		CreateAccount(OperationType::CreateAccount) => CreateAccountResult,
		/// Send an asset.
		Payment(OperationType::Payment) => PaymentResult,
		/// Path payment with fixed receive amount.
		PathPaymentStrictReceive(OperationType::PathPaymentStrictReceive) => PathPaymentStrictReceiveResult,
		/// Sell offer.
		ManageSellOffer(OperationType::ManageSellOffer) => ManageSellOfferResult,
		/// Passive sell offer.
		CreatePassiveSellOffer(OperationType::CreatePassiveSellOffer) => ManageSellOfferResult,
		/// Account settings.
		SetOptions(OperationType::SetOptions) => SetOptionsResult,
		/// Trust line change.
		ChangeTrust(OperationType::ChangeTrust) => ChangeTrustResult,
		/// Legacy trust authorization.
		AllowTrust(OperationType::AllowTrust) => AllowTrustResult,
		/// Merge into another account.
		AccountMerge(OperationType::AccountMerge) => AccountMergeResult,
		/// Run inflation.
		Inflation(OperationType::Inflation) => InflationResult,
		/// Data entry change.
		ManageData(OperationType::ManageData) => ManageDataResult,
		/// Raise the sequence number.
		BumpSequence(OperationType::BumpSequence) => BumpSequenceResult,
		/// Buy offer.
		ManageBuyOffer(OperationType::ManageBuyOffer) => ManageBuyOfferResult,
		/// Path payment with fixed send amount.
		PathPaymentStrictSend(OperationType::PathPaymentStrictSend) => PathPaymentStrictSendResult,
		/// Lock funds for claimants.
		CreateClaimableBalance(OperationType::CreateClaimableBalance) => CreateClaimableBalanceResult,
		/// Claim a balance.
		ClaimClaimableBalance(OperationType::ClaimClaimableBalance) => ClaimClaimableBalanceResult,
		/// Start sponsoring.
		BeginSponsoringFutureReserves(OperationType::BeginSponsoringFutureReserves) => BeginSponsoringFutureReservesResult,
		/// Stop sponsoring.
		EndSponsoringFutureReserves(OperationType::EndSponsoringFutureReserves) => EndSponsoringFutureReservesResult,
		/// Move or drop a sponsorship.
		RevokeSponsorship(OperationType::RevokeSponsorship) => RevokeSponsorshipResult,
		/// Reclaim an asset.
		Clawback(OperationType::Clawback) => ClawbackResult,
		/// Reclaim a claimable balance.
		ClawbackClaimableBalance(OperationType::ClawbackClaimableBalance) => ClawbackClaimableBalanceResult,
		/// Change trust line flags.
		SetTrustLineFlags(OperationType::SetTrustLineFlags) => SetTrustLineFlagsResult,
		/// Deposit into a pool.
		LiquidityPoolDeposit(OperationType::LiquidityPoolDeposit) => LiquidityPoolDepositResult,
		/// Withdraw from a pool.
		LiquidityPoolWithdraw(OperationType::LiquidityPoolWithdraw) => LiquidityPoolWithdrawResult,
		/// Run a host function.
		InvokeHostFunction(OperationType::InvokeHostFunction) => InvokeHostFunctionResult,
		/// Extend entry lifetimes.
		ExtendFootprintTtl(OperationType::ExtendFootprintTtl) => ExtendFootprintTtlResult,
		/// Restore archived entries.
		RestoreFootprint(OperationType::RestoreFootprint) => RestoreFootprintResult,
	}
}

xdr_enum! {
	/// Whether an operation ran.
	pub enum OperationResultCode {
		/// Operation ran; see its result.
		OpInner = 0,
		/// Not enough signatures.
		OpBadAuth = -1,
		/// Source account does not exist.
		OpNoAccount = -2,
		/// Operation is disabled.
		OpNotSupported = -3,
		/// Subentry limit reached.
		OpTooManySubentries = -4,
		/// Work limit exceeded.
		OpExceededWorkLimit = -5,
		/// Sponsoring limit reached.
		OpTooManySponsoring = -6,
	}
}

xdr_union! {
	/// Operation result.
	pub enum OperationResult switch (OperationResultCode) {
		/// Operation ran; see its result.
		OpInner(OperationResultCode::OpInner) => OperationResultTr,
		/// Not enough signatures.
		OpBadAuth(OperationResultCode::OpBadAuth),
		/// Source account does not exist.
		OpNoAccount(OperationResultCode::OpNoAccount),
		/// Operation is disabled.
		OpNotSupported(OperationResultCode::OpNotSupported),
		/// Subentry limit reached.
		OpTooManySubentries(OperationResultCode::OpTooManySubentries),
		/// Work limit exceeded.
		OpExceededWorkLimit(OperationResultCode::OpExceededWorkLimit),
		/// Sponsoring limit reached.
		OpTooManySponsoring(OperationResultCode::OpTooManySponsoring),
	}
}

xdr_enum! {
	/// Transaction outcome codes.
	pub enum TransactionResultCode {
		/// Fee bump inner transaction succeeded.
		TxFeeBumpInnerSuccess = 1,
		/// All operations succeeded.
		TxSuccess = 0,
		/// An operation failed.
		TxFailed = -1,
		/// Before the valid range.
		TxTooEarly = -2,
		/// After the valid range.
		TxTooLate = -3,
		/// No operations.
		TxMissingOperation = -4,
		/// Wrong sequence number.
		TxBadSeq = -5,
		/// Not enough signatures.
		TxBadAuth = -6,
		/// Fee would drop below the reserve.
		TxInsufficientBalance = -7,
		/// Source account does not exist.
		TxNoAccount = -8,
		/// Fee too small.
		TxInsufficientFee = -9,
		/// Unused signatures.
		TxBadAuthExtra = -10,
		/// Unexpected failure.
		TxInternalError = -11,
		/// Transaction type is disabled.
		TxNotSupported = -12,
		/// Fee bump inner transaction failed.
		TxFeeBumpInnerFailed = -13,
		/// Sponsorship left open.
		TxBadSponsorship = -14,
		/// Sequence age or gap not met.
		TxBadMinSeqAgeOrGap = -15,
		/// Invalid preconditions or fields.
		TxMalformed = -16,
		/// Invalid contract resources.
		TxSorobanInvalid = -17,
	}
}

xdr_union! {
	/// Outcome of a transaction wrapped by a fee bump.
	pub enum InnerTransactionResultResult switch (TransactionResultCode) {
		/// All operations succeeded.
		TxSuccess(TransactionResultCode::TxSuccess) => VecM<OperationResult>,
		/// An operation failed.
		TxFailed(TransactionResultCode::TxFailed) => VecM<OperationResult>,
		/// Before the valid range.
		TxTooEarly(TransactionResultCode::TxTooEarly),
		/// After the valid range.
		TxTooLate(TransactionResultCode::TxTooLate),
		/// No operations.
		TxMissingOperation(TransactionResultCode::TxMissingOperation),
		/// Wrong sequence number.
		TxBadSeq(TransactionResultCode::TxBadSeq),
		/// Not enough signatures.
		TxBadAuth(TransactionResultCode::TxBadAuth),
		/// Fee would drop below the reserve.
		TxInsufficientBalance(TransactionResultCode::TxInsufficientBalance),
		/// Source account does not exist.
		TxNoAccount(TransactionResultCode::TxNoAccount),
		/// Fee too small.
		TxInsufficientFee(TransactionResultCode::TxInsufficientFee),
		/// Unused signatures.
		TxBadAuthExtra(TransactionResultCode::TxBadAuthExtra),
		/// Unexpected failure.
		TxInternalError(TransactionResultCode::TxInternalError),
		/// Transaction type is disabled.
		TxNotSupported(TransactionResultCode::TxNotSupported),
		/// Sponsorship left open.
		TxBadSponsorship(TransactionResultCode::TxBadSponsorship),
		/// Sequence age or gap not met.
		TxBadMinSeqAgeOrGap(TransactionResultCode::TxBadMinSeqAgeOrGap),
		/// Invalid preconditions or fields.
		TxMalformed(TransactionResultCode::TxMalformed),
		/// Invalid contract resources.
		TxSorobanInvalid(TransactionResultCode::TxSorobanInvalid),
	}
}

xdr_struct! {
	/// Result of a transaction wrapped by a fee bump.
	pub struct InnerTransactionResult {
		/// Fee actually charged, in stroops.
		pub fee_charged: i64,
		/// Outcome.
		pub result: InnerTransactionResultResult,
		/// Reserved; always `V0`.
		pub ext: ExtensionPoint,
	}
}

xdr_struct! {
	/// Inner result with the inner transaction hash.
	pub struct InnerTransactionResultPair {
		/// Hash of the transaction.
		pub transaction_hash: Hash,
		/// Inner transaction result.
		pub result: InnerTransactionResult,
	}
}

xdr_union! {
	/// Transaction outcome.
	pub enum TransactionResultResult switch (TransactionResultCode) {
		/// Fee bump inner transaction succeeded.
		TxFeeBumpInnerSuccess(TransactionResultCode::TxFeeBumpInnerSuccess) => InnerTransactionResultPair,
		/// Fee bump inner transaction failed.
		TxFeeBumpInnerFailed(TransactionResultCode::TxFeeBumpInnerFailed) => InnerTransactionResultPair,
		/// All operations succeeded.
		TxSuccess(TransactionResultCode::TxSuccess) => VecM<OperationResult>,
		/// An operation failed.
		TxFailed(TransactionResultCode::TxFailed) => VecM<OperationResult>,
		/// Before the valid range.
		TxTooEarly(TransactionResultCode::TxTooEarly),
		/// After the valid range.
		TxTooLate(TransactionResultCode::TxTooLate),
		/// No operations.
		TxMissingOperation(TransactionResultCode::TxMissingOperation),
		/// Wrong sequence number.
		TxBadSeq(TransactionResultCode::TxBadSeq),
		/// Not enough signatures.
		TxBadAuth(TransactionResultCode::TxBadAuth),
		/// Fee would drop below the reserve.
		TxInsufficientBalance(TransactionResultCode::TxInsufficientBalance),
		/// Source account does not exist.
		TxNoAccount(TransactionResultCode::TxNoAccount),
		/// Fee too small.
		TxInsufficientFee(TransactionResultCode::TxInsufficientFee),
		/// Unused signatures.
		TxBadAuthExtra(TransactionResultCode::TxBadAuthExtra),
		/// Unexpected failure.
		TxInternalError(TransactionResultCode::TxInternalError),
		/// Transaction type is disabled.
		TxNotSupported(TransactionResultCode::TxNotSupported),
		/// Sponsorship left open.
		TxBadSponsorship(TransactionResultCode::TxBadSponsorship),
		/// Sequence age or gap not met.
		TxBadMinSeqAgeOrGap(TransactionResultCode::TxBadMinSeqAgeOrGap),
		/// Invalid preconditions or fields.
		TxMalformed(TransactionResultCode::TxMalformed),
		/// Invalid contract resources.
		TxSorobanInvalid(TransactionResultCode::TxSorobanInvalid),
	}
}

xdr_struct! {
	/// Transaction result with the fee charged.
	pub struct TransactionResult {
		/// Fee actually charged, in stroops.
		pub fee_charged: i64,
		/// Outcome.
		pub result: TransactionResultResult,
		/// Reserved; always `V0`.
		pub ext: ExtensionPoint,
	}
}

impl TransactionResult {
	/// Outcome code.
	pub fn code(&self) -> TransactionResultCode {
		self.result.discriminant()
	}

	/// Return `true` for success, including a successful fee-bumped inner transaction.
	pub fn is_success(&self) -> bool {
		matches!(
			self.code(),
			TransactionResultCode::TxSuccess | TransactionResultCode::TxFeeBumpInnerSuccess
		)
	}

	/// Operation results, looking through a fee bump.
	pub fn operation_results(&self) -> Option<&[OperationResult]> {
		match &self.result {
			TransactionResultResult::TxSuccess(ops) | TransactionResultResult::TxFailed(ops) => Some(&ops[..]),
			TransactionResultResult::TxFeeBumpInnerSuccess(pair) | TransactionResultResult::TxFeeBumpInnerFailed(pair) => {
				match &pair.result.result {
					InnerTransactionResultResult::TxSuccess(ops) | InnerTransactionResultResult::TxFailed(ops) => Some(&ops[..]),
					_ => None,
				}
			}
			_ => None,
		}
	}
}

xdr_struct! {
	/// Transaction result keyed by transaction hash.
	pub struct TransactionResultPair {
		/// Hash of the transaction.
		pub transaction_hash: Hash,
		/// Transaction result.
		pub result: TransactionResult,
	}
}
