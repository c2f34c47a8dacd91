#![allow(missing_docs)]

use std::thread;

use ledgerxdr::xdr::{ClaimPredicate, DEFAULT_MAX_DEPTH, ReadXdr, ScVal, SorobanAuthorizedInvocation, XdrError};
use ledgerxdr_testkit::WireBuilder;

const SMALL_STACK: usize = 2 << 20;

/// Run `f` on a thread with a 2 MiB stack.
fn on_small_stack<T: Send + 'static>(f: impl FnOnce() -> T + Send + 'static) -> T {
	thread::Builder::new()
		.stack_size(SMALL_STACK)
		.spawn(f)
		.expect("thread spawns")
		.join()
		.expect("decode thread did not panic")
}

/// `levels` nested `ScVal::Vec` wrappers around a `Void` leaf.
fn nested_sc_vec(levels: u32) -> Vec<u8> {
	let mut wire = WireBuilder::new();
	for _ in 0..levels {
		wire = wire.u32(16).u32(1).u32(1);
	}
	wire.u32(1).build()
}

/// `levels` nested invocations, each calling a contract with no arguments.
fn nested_invocations(levels: u32) -> Vec<u8> {
	let mut wire = WireBuilder::new();
	for level in 0..levels {
		let children = u32::from(level + 1 < levels);
		wire = wire.u32(0).u32(1).fixed(&[7; 32]).var(b"").u32(0).u32(children);
	}
	wire.build()
}

fn sc_vec_depth(value: &ScVal) -> u32 {
	let mut depth = 1;
	let mut cur = value;
	while let ScVal::Vec(Some(items)) = cur {
		depth += 1;
		cur = &items[0];
	}
	depth
}

#[test]
fn deepest_allowed_sc_val_decodes_on_small_stack() {
	let depth = on_small_stack(|| {
		let value = ScVal::from_xdr(&nested_sc_vec(DEFAULT_MAX_DEPTH - 1)).expect("within limit");
		sc_vec_depth(&value)
	});
	assert_eq!(depth, DEFAULT_MAX_DEPTH);
}

#[test]
fn sc_val_one_level_too_deep_is_rejected_on_small_stack() {
	let err = on_small_stack(|| ScVal::from_xdr(&nested_sc_vec(DEFAULT_MAX_DEPTH)).expect_err("over limit"));
	assert!(matches!(
		err,
		XdrError::RecursionLimitExceeded { max_depth } if max_depth == DEFAULT_MAX_DEPTH
	));
}

#[test]
fn adversarial_sc_val_chain_fails_cleanly() {
	let err = on_small_stack(|| ScVal::from_xdr(&nested_sc_vec(10_000)).expect_err("over limit"));
	assert!(matches!(err, XdrError::RecursionLimitExceeded { .. }));
}

#[test]
fn invocation_tree_depth_is_bounded_on_small_stack() {
	// Each invocation adds one level; its contract call adds three more at the leaf.
	let ok = on_small_stack(|| SorobanAuthorizedInvocation::from_xdr(&nested_invocations(DEFAULT_MAX_DEPTH - 3)).is_ok());
	assert!(ok);

	let err = on_small_stack(|| {
		SorobanAuthorizedInvocation::from_xdr(&nested_invocations(DEFAULT_MAX_DEPTH)).expect_err("over limit")
	});
	assert!(matches!(err, XdrError::RecursionLimitExceeded { .. }));
}

#[test]
fn deepest_allowed_predicate_decodes_on_small_stack() {
	let bytes = {
		let mut wire = WireBuilder::new();
		for _ in 0..DEFAULT_MAX_DEPTH - 1 {
			wire = wire.u32(3).u32(1);
		}
		wire.u32(0).build()
	};
	let depth = on_small_stack(move || ClaimPredicate::from_xdr(&bytes).expect("within limit").depth());
	assert_eq!(depth, DEFAULT_MAX_DEPTH as usize);
}
