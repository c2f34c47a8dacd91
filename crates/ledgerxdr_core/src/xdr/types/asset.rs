//! Assets, prices, and muxed accounts.

use crate::xdr::macros::{xdr_enum, xdr_opaque, xdr_struct, xdr_union};
use crate::xdr::types::{AccountId, CryptoKeyType, PoolId, Uint256};

xdr_opaque! {
	/// Asset code of one to four characters, zero-padded.
	pub struct AssetCode4([u8; 4]);
}

xdr_opaque! {
	/// Asset code of five to twelve characters, zero-padded.
	pub struct AssetCode12([u8; 12]);
}

xdr_enum! {
	/// Asset kinds.
	pub enum AssetType {
		/// Lumens.
		Native = 0,
		/// Issued asset, code of 1 to 4 characters.
		CreditAlphanum4 = 1,
		/// Issued asset, code of 5 to 12 characters.
		CreditAlphanum12 = 2,
		/// Liquidity pool shares.
		PoolShare = 3,
	}
}

xdr_union! {
	/// Issued asset code without issuer.
	pub enum AssetCode switch (AssetType) {
		/// Issued asset, code of 1 to 4 characters.
		CreditAlphanum4(AssetType::CreditAlphanum4) => AssetCode4,
		/// Issued asset, code of 5 to 12 characters.
		CreditAlphanum12(AssetType::CreditAlphanum12) => AssetCode12,
	}
}

xdr_struct! {
	/// Short-code issued asset.
	pub struct AlphaNum4 {
		/// Code, zero padded.
		pub asset_code: AssetCode4,
		/// Issuing account.
		pub issuer: AccountId,
	}
}

xdr_struct! {
	/// Long-code issued asset.
	pub struct AlphaNum12 {
		/// Code, zero padded.
		pub asset_code: AssetCode12,
		/// Issuing account.
		pub issuer: AccountId,
	}
}

xdr_union! {
	/// Native lumens or an issued credit.
	pub enum Asset switch (AssetType) {
		/// Lumens.
		Native(AssetType::Native),
		/// Issued asset, code of 1 to 4 characters.
		CreditAlphanum4(AssetType::CreditAlphanum4) => AlphaNum4,
		/// Issued asset, code of 5 to 12 characters.
		CreditAlphanum12(AssetType::CreditAlphanum12) => AlphaNum12,
	}
}

impl Asset {
	/// Asset code with trailing zero bytes removed; `None` for native.
	pub fn code(&self) -> Option<&[u8]> {
		let raw: &[u8] = match self {
			Self::Native => return None,
			Self::CreditAlphanum4(a) => &a.asset_code.0,
			Self::CreditAlphanum12(a) => &a.asset_code.0,
		};
		let end = raw.iter().rposition(|b| *b != 0).map_or(0, |i| i + 1);
		Some(&raw[..end])
	}

	/// Issuing account; `None` for native.
	pub fn issuer(&self) -> Option<&AccountId> {
		match self {
			Self::Native => None,
			Self::CreditAlphanum4(a) => Some(&a.issuer),
			Self::CreditAlphanum12(a) => Some(&a.issuer),
		}
	}
}

xdr_struct! {
	/// Price as a fraction `n / d`.
	pub struct Price {
		/// Numerator.
		pub n: i32,
		/// Denominator.
		pub d: i32,
	}
}

xdr_struct! {
	/// Amounts reserved by open offers.
	pub struct Liabilities {
		/// Outstanding buying liabilities.
		pub buying: i64,
		/// Outstanding selling liabilities.
		pub selling: i64,
	}
}

xdr_enum! {
	/// Liquidity pool kinds.
	pub enum LiquidityPoolType {
		/// Constant product pool.
		ConstantProduct = 0,
	}
}

xdr_struct! {
	/// Constant-product pool definition.
	pub struct LiquidityPoolConstantProductParameters {
		/// Lesser asset in canonical order.
		pub asset_a: Asset,
		/// Second pool asset; sorts after `asset_a`.
		pub asset_b: Asset,
		/// Fee in basis points.
		pub fee: i32,
	}
}

xdr_union! {
	/// Pool definition by kind.
	pub enum LiquidityPoolParameters switch (LiquidityPoolType) {
		/// Constant product pool.
		ConstantProduct(LiquidityPoolType::ConstantProduct) => LiquidityPoolConstantProductParameters,
	}
}

xdr_union! {
	/// Asset held by a trust line; pool shares are referenced by pool id.
	pub enum TrustLineAsset switch (AssetType) {
		/// Lumens.
		Native(AssetType::Native),
		/// Issued asset, code of 1 to 4 characters.
		CreditAlphanum4(AssetType::CreditAlphanum4) => AlphaNum4,
		/// Issued asset, code of 5 to 12 characters.
		CreditAlphanum12(AssetType::CreditAlphanum12) => AlphaNum12,
		/// Liquidity pool shares.
		PoolShare(AssetType::PoolShare) => PoolId,
	}
}

xdr_union! {
	/// Asset named by a change-trust operation; pool shares carry full parameters.
	pub enum ChangeTrustAsset switch (AssetType) {
		/// Lumens.
		Native(AssetType::Native),
		/// Issued asset, code of 1 to 4 characters.
		CreditAlphanum4(AssetType::CreditAlphanum4) => AlphaNum4,
		/// Issued asset, code of 5 to 12 characters.
		CreditAlphanum12(AssetType::CreditAlphanum12) => AlphaNum12,
		/// Liquidity pool shares.
		PoolShare(AssetType::PoolShare) => LiquidityPoolParameters,
	}
}

impl From<Asset> for TrustLineAsset {
	fn from(value: Asset) -> Self {
		match value {
			Asset::Native => Self::Native,
			Asset::CreditAlphanum4(a) => Self::CreditAlphanum4(a),
			Asset::CreditAlphanum12(a) => Self::CreditAlphanum12(a),
		}
	}
}

impl From<Asset> for ChangeTrustAsset {
	fn from(value: Asset) -> Self {
		match value {
			Asset::Native => Self::Native,
			Asset::CreditAlphanum4(a) => Self::CreditAlphanum4(a),
			Asset::CreditAlphanum12(a) => Self::CreditAlphanum12(a),
		}
	}
}

xdr_struct! {
	/// Ed25519 account with a 64-bit sub-account id.
	pub struct MuxedAccountMed25519 {
		/// Multiplexed id.
		pub id: u64,
		/// Ed25519 public key.
		pub ed25519: Uint256,
	}
}

xdr_union! {
	/// Plain or multiplexed account reference.
	pub enum MuxedAccount switch (CryptoKeyType) {
		/// Ed25519 key.
		Ed25519(CryptoKeyType::Ed25519) => Uint256,
		/// Multiplexed Ed25519 key.
		MuxedEd25519(CryptoKeyType::MuxedEd25519) => MuxedAccountMed25519,
	}
}

impl MuxedAccount {
	/// Underlying account, dropping any sub-account id.
	pub fn account_id(&self) -> AccountId {
		match self {
			Self::Ed25519(key) => AccountId::Ed25519(*key),
			Self::MuxedEd25519(muxed) => AccountId::Ed25519(muxed.ed25519),
		}
	}
}

impl From<AccountId> for MuxedAccount {
	fn from(value: AccountId) -> Self {
		match value {
			AccountId::Ed25519(key) => Self::Ed25519(key),
		}
	}
}
