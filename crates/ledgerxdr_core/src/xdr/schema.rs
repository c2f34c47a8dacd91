/// Static description of one schema type.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TypeDescriptor {
	/// Schema type name.
	pub name: &'static str,
	/// Structural shape.
	pub shape: Shape,
}

/// Structural shape of a schema type.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Shape {
	/// Ordered field sequence.
	Struct {
		/// Fields in wire order.
		fields: &'static [FieldDescriptor],
	},
	/// Integer-backed enumeration.
	Enum {
		/// Declared members.
		members: &'static [EnumMember],
	},
	/// Discriminated union.
	Union {
		/// Discriminant type name.
		discriminant: &'static str,
		/// Declared arms.
		arms: &'static [UnionArm],
	},
	/// Fixed-length opaque bytes.
	FixedOpaque {
		/// Byte length before padding.
		len: usize,
	},
}

impl Shape {
	/// Stable lowercase label.
	pub fn as_str(self) -> &'static str {
		match self {
			Self::Struct { .. } => "struct",
			Self::Enum { .. } => "enum",
			Self::Union { .. } => "union",
			Self::FixedOpaque { .. } => "opaque",
		}
	}
}

/// One struct field.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FieldDescriptor {
	/// Field identifier.
	pub name: &'static str,
	/// Field type as declared.
	pub type_name: &'static str,
}

/// One enum member.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct EnumMember {
	/// Member identifier.
	pub name: &'static str,
	/// Wire value.
	pub value: i32,
}

/// One union arm.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct UnionArm {
	/// Discriminant case expression.
	pub case: &'static str,
	/// Variant identifier.
	pub variant: &'static str,
	/// Payload type, `None` for void arms.
	pub payload: Option<&'static str>,
}

/// Types that carry a static schema descriptor.
pub trait XdrSchema {
	/// Descriptor for this type.
	const DESCRIPTOR: TypeDescriptor;
}
