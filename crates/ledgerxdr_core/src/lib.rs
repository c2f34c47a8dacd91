//! Canonical XDR codec for ledger, transaction, and smart contract data.
//!
//! Every schema type implements [`xdr::ReadXdr`] and [`xdr::WriteXdr`];
//! encoding a decoded value reproduces the input bytes exactly.

/// Wire codec, schema types, type registry, and stream helpers.
pub mod xdr;
