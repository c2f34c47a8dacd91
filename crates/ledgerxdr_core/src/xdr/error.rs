use thiserror::Error;

/// Crate-local result type.
pub type Result<T> = std::result::Result<T, XdrError>;

/// Errors produced while decoding, constructing, or framing XDR data.
#[derive(Debug, Error)]
pub enum XdrError {
	/// Not enough bytes remained for a requested read.
	#[error("truncated input at offset {at}, need {need} bytes, remaining {rem}")]
	TruncatedInput {
		/// Byte offset where the read was attempted.
		at: usize,
		/// Requested bytes.
		need: usize,
		/// Bytes still available.
		rem: usize,
	},
	/// Enum or union discriminant outside the declared set.
	#[error("unrecognized discriminant {value} for {type_name}")]
	UnrecognizedDiscriminant {
		/// Schema type being decoded.
		type_name: &'static str,
		/// Raw discriminant value read from the wire.
		value: i32,
	},
	/// Boolean slot held something other than 0 or 1.
	#[error("invalid boolean encoding {value} at offset {at}")]
	InvalidBooleanEncoding {
		/// Byte offset of the boolean word.
		at: usize,
		/// Raw 4-byte value.
		value: u32,
	},
	/// Length prefix exceeded the bound declared by the schema.
	#[error("length {declared} at offset {at} exceeds maximum {max}")]
	LengthMismatch {
		/// Byte offset of the length prefix.
		at: usize,
		/// Declared element or byte count.
		declared: u32,
		/// Maximum permitted by the schema.
		max: u32,
	},
	/// Nesting depth exceeded the configured limit.
	#[error("recursion limit exceeded (max={max_depth})")]
	RecursionLimitExceeded {
		/// Configured depth ceiling.
		max_depth: u32,
	},
	/// Padding after variable data was not zero.
	#[error("non-zero padding at offset {at}")]
	NonZeroPadding {
		/// Byte offset of the first offending padding byte.
		at: usize,
	},
	/// Input remained after the value was fully decoded.
	#[error("{leftover} trailing bytes after value")]
	TrailingBytes {
		/// Unconsumed bytes.
		leftover: usize,
	},
	/// Bounded container built beyond its schema limit.
	#[error("invariant violation: {type_name} length {len} exceeds maximum {max}")]
	InvariantViolation {
		/// Container kind being constructed.
		type_name: &'static str,
		/// Requested length.
		len: usize,
		/// Maximum permitted length.
		max: u32,
	},
	/// Base64 text could not be decoded.
	#[error("base64: {0}")]
	Base64(#[from] base64::DecodeError),
	/// Stream or decompression IO failure.
	#[error("io: {0}")]
	Io(#[from] std::io::Error),
	/// Registry lookup by name failed.
	#[error("unknown type name: {name}")]
	UnknownTypeName {
		/// Requested name.
		name: String,
	},
	/// Decompression output exceeded configured safety limit.
	#[error("decompressed output exceeded limit {limit} bytes")]
	DecompressedTooLarge {
		/// Maximum allowed output bytes.
		limit: usize,
	},
	/// Record-marked stream fragment was malformed.
	#[error("invalid frame at offset {at}: {reason}")]
	InvalidFrame {
		/// Byte offset of the record mark.
		at: usize,
		/// Short description of the problem.
		reason: &'static str,
	},
}
