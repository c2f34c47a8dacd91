//! Ledger, transaction, and contract schema types.

mod asset;
mod base;
mod config;
mod contract;
mod entries;
mod ledger;
mod meta;
mod operation;
mod predicate;
mod result;
mod transaction;

pub use asset::*;
pub use base::*;
pub use config::*;
pub use contract::*;
pub use entries::*;
pub use ledger::*;
pub use meta::*;
pub use operation::*;
pub use predicate::*;
pub use result::*;
pub use transaction::*;
