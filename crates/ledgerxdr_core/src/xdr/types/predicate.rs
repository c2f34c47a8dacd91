//! Claim predicates and claimable balance identities.
//!
//! [`ClaimPredicate`] is the one self-referential type in the schema. Its
//! nesting is bounded on decode by `DecodeOptions::max_depth`, since every
//! union level enters one `Reader::nested` frame.

use crate::xdr::macros::{xdr_enum, xdr_struct, xdr_union};
use crate::xdr::types::{AccountId, Hash};
use crate::xdr::{Result, VecM};

xdr_enum! {
	/// Predicate kinds.
	pub enum ClaimPredicateType {
		/// Always true.
		Unconditional = 0,
		/// Conjunction.
		And = 1,
		/// Disjunction.
		Or = 2,
		/// Negation.
		Not = 3,
		/// Before a Unix time.
		BeforeAbsoluteTime = 4,
		/// Within seconds of creation.
		BeforeRelativeTime = 5,
	}
}

xdr_union! {
	/// Condition under which a claimant may claim a balance.
	pub enum ClaimPredicate switch (ClaimPredicateType) {
		/// Always true.
		Unconditional(ClaimPredicateType::Unconditional),
		/// Both children must hold.
		And(ClaimPredicateType::And) => VecM<ClaimPredicate, 2>,
		/// Either child must hold.
		Or(ClaimPredicateType::Or) => VecM<ClaimPredicate, 2>,
		/// Child must not hold.
		Not(ClaimPredicateType::Not) => Option<Box<ClaimPredicate>>,
		/// Unix time before which the claim is allowed.
		BeforeAbsoluteTime(ClaimPredicateType::BeforeAbsoluteTime) => i64,
		/// Seconds after balance creation before which the claim is allowed.
		BeforeRelativeTime(ClaimPredicateType::BeforeRelativeTime) => i64,
	}
}

impl ClaimPredicate {
	/// Conjunction of two predicates.
	pub fn and(left: Self, right: Self) -> Result<Self> {
		Ok(Self::And(VecM::try_from(vec![left, right])?))
	}

	/// Disjunction of two predicates.
	pub fn or(left: Self, right: Self) -> Result<Self> {
		Ok(Self::Or(VecM::try_from(vec![left, right])?))
	}

	/// Negation of a predicate.
	pub fn negate(inner: Self) -> Self {
		Self::Not(Some(Box::new(inner)))
	}

	/// Nesting depth; leaves have depth 1.
	pub fn depth(&self) -> usize {
		let mut max = 0;
		let mut stack = vec![(self, 1_usize)];
		while let Some((node, depth)) = stack.pop() {
			max = max.max(depth);
			match node {
				Self::And(children) | Self::Or(children) => {
					stack.extend(children.iter().map(|child| (child, depth + 1)));
				}
				Self::Not(Some(child)) => stack.push((child.as_ref(), depth + 1)),
				_ => {}
			}
		}
		max
	}

	/// Evaluate against absolute `now` for a balance created at `created`.
	pub fn is_satisfied(&self, now: i64, created: i64) -> bool {
		match self {
			Self::Unconditional => true,
			Self::And(children) => children.iter().all(|c| c.is_satisfied(now, created)),
			Self::Or(children) => children.iter().any(|c| c.is_satisfied(now, created)),
			Self::Not(Some(child)) => !child.is_satisfied(now, created),
			Self::Not(None) => false,
			Self::BeforeAbsoluteTime(limit) => now < *limit,
			Self::BeforeRelativeTime(span) => now < created.saturating_add(*span),
		}
	}
}

xdr_enum! {
	/// Claimant kinds.
	pub enum ClaimantType {
		/// Account with predicate.
		V0 = 0,
	}
}

xdr_struct! {
	/// Destination and predicate of a claimant.
	pub struct ClaimantV0 {
		/// Account allowed to claim.
		pub destination: AccountId,
		/// Condition for claiming.
		pub predicate: ClaimPredicate,
	}
}

xdr_union! {
	/// Account allowed to claim a balance.
	pub enum Claimant switch (ClaimantType) {
		/// Account with predicate.
		V0(ClaimantType::V0) => ClaimantV0,
	}
}

xdr_enum! {
	/// Claimable balance id kinds.
	pub enum ClaimableBalanceIdType {
		/// Hash of the creating operation.
		V0 = 0,
	}
}

xdr_union! {
	/// Claimable balance identifier.
	pub enum ClaimableBalanceId switch (ClaimableBalanceIdType) {
		/// Hash of the creating operation.
		V0(ClaimableBalanceIdType::V0) => Hash,
	}
}

#[cfg(test)]
mod tests {
	use super::ClaimPredicate;
	use crate::xdr::{DecodeOptions, ReadXdr, WriteXdr, XdrError, decode_with};

	fn nested_not(levels: usize) -> ClaimPredicate {
		let mut pred = ClaimPredicate::Unconditional;
		for _ in 0..levels {
			pred = ClaimPredicate::negate(pred);
		}
		pred
	}

	#[test]
	fn not_wraps_optional_child() {
		let pred = ClaimPredicate::negate(ClaimPredicate::Unconditional);
		assert_eq!(pred.to_xdr(), vec![0, 0, 0, 3, 0, 0, 0, 1, 0, 0, 0, 0]);
		assert_eq!(pred.depth(), 2);
	}

	#[test]
	fn and_requires_two_children_at_most() {
		let bytes = [0, 0, 0, 1, 0, 0, 0, 3];
		let err = ClaimPredicate::from_xdr(&bytes).expect_err("three children");
		assert!(matches!(err, XdrError::LengthMismatch { declared: 3, max: 2, .. }));
	}

	#[test]
	fn deep_nesting_hits_depth_limit() {
		let bytes = nested_not(64).to_xdr();
		let options = DecodeOptions::default().with_max_depth(32);
		let err = decode_with::<ClaimPredicate>(&bytes, &options).expect_err("too deep");
		assert!(matches!(err, XdrError::RecursionLimitExceeded { max_depth: 32 }));

		let back = ClaimPredicate::from_xdr(&bytes).expect("default limit");
		assert_eq!(back.depth(), 65);
	}

	#[test]
	fn evaluation_follows_time_bounds() {
		let pred = ClaimPredicate::or(ClaimPredicate::BeforeAbsoluteTime(100), ClaimPredicate::BeforeRelativeTime(10))
			.expect("two children");
		assert!(pred.is_satisfied(50, 0));
		assert!(pred.is_satisfied(150, 145));
		assert!(!pred.is_satisfied(150, 0));
		assert!(!ClaimPredicate::negate(ClaimPredicate::Unconditional).is_satisfied(0, 0));
	}
}
