mod macros;

mod bytes;
mod codec;
mod composite;
mod compression;
mod error;
mod ext;
mod frame;
mod primitive;
mod registry;
mod schema;
mod types;
mod wide;

/// Bounds-checked read cursor and append-only write buffer.
pub use bytes::{Cursor, Sink, padding_len};
/// Codec traits, decode options, and top-level entry points.
pub use codec::{DEFAULT_MAX_DEPTH, DecodeOptions, ReadXdr, Reader, WriteXdr, XdrDiscriminant, decode, decode_with, encode};
/// Bounded variable-length vector.
pub use composite::VecM;
/// Compression detection for exported inputs.
pub use compression::{Compression, ZSTD_MAGIC, decompress};
/// Error and result aliases.
pub use error::{Result, XdrError};
/// Versioned extension points.
pub use ext::{Extension, ExtensionPoint};
/// Record-marked stream reading and writing.
pub use frame::{Frames, Record, RecordIter, write_framed, write_record};
/// Bounded opaque and string containers plus fixed opaque helpers.
pub use primitive::{BytesM, StringM, read_fixed_opaque, write_fixed_opaque};
/// Name-indexed access to every schema type.
pub use registry::{Type, TypeVariant};
/// Static schema metadata.
pub use schema::{EnumMember, FieldDescriptor, Shape, TypeDescriptor, UnionArm, XdrSchema};
/// Ledger, transaction, and contract schema types.
pub use types::*;
/// Multi-limb wide integers.
pub use wide::{Int128Parts, Int256Parts, UInt128Parts, UInt256Parts};
