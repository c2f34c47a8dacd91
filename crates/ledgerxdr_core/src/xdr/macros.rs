//! Declaration macros for schema types.
//!
//! Each macro emits the Rust type, its `ReadXdr`/`WriteXdr` impls, and its
//! `XdrSchema` descriptor from one declaration.

/// Declare a struct whose fields are coded in declaration order.
macro_rules! xdr_struct {
	(
		$(#[$meta:meta])*
		pub struct $name:ident {
			$(
				$(#[$fmeta:meta])*
				pub $field:ident : $ty:ty
			),* $(,)?
		}
	) => {
		$(#[$meta])*
		#[derive(Debug, Clone, PartialEq, Eq, ::core::hash::Hash)]
		#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
		pub struct $name {
			$( $(#[$fmeta])* pub $field: $ty, )*
		}

		impl $crate::xdr::ReadXdr for $name {
			fn read_xdr(r: &mut $crate::xdr::Reader<'_>) -> $crate::xdr::Result<Self> {
				r.nested(|r| {
					Ok(Self {
						$( $field: <$ty as $crate::xdr::ReadXdr>::read_xdr(r)?, )*
					})
				})
			}
		}

		impl $crate::xdr::WriteXdr for $name {
			fn write_xdr(&self, w: &mut $crate::xdr::Sink) {
				$( <$ty as $crate::xdr::WriteXdr>::write_xdr(&self.$field, w); )*
			}
		}

		impl $crate::xdr::XdrSchema for $name {
			const DESCRIPTOR: $crate::xdr::TypeDescriptor = $crate::xdr::TypeDescriptor {
				name: stringify!($name),
				shape: $crate::xdr::Shape::Struct {
					fields: &[$( $crate::xdr::FieldDescriptor {
						name: stringify!($field),
						type_name: stringify!($ty),
					}, )*],
				},
			};
		}
	};
}

/// Declare an `i32`-backed enumeration with a closed member set.
macro_rules! xdr_enum {
	(
		$(#[$meta:meta])*
		pub enum $name:ident {
			$(
				$(#[$vmeta:meta])*
				$variant:ident = $value:literal
			),* $(,)?
		}
	) => {
		$(#[$meta])*
		#[repr(i32)]
		#[derive(Debug, Clone, Copy, PartialEq, Eq, ::core::hash::Hash, PartialOrd, Ord)]
		#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize), serde(rename_all = "snake_case"))]
		pub enum $name {
			$( $(#[$vmeta])* $variant = $value, )*
		}

		impl $name {
			/// Every declared member in declaration order.
			pub const VARIANTS: &'static [Self] = &[$( Self::$variant, )*];

			/// Raw wire value.
			pub const fn value(self) -> i32 {
				self as i32
			}

			/// Member identifier.
			pub const fn name(self) -> &'static str {
				match self {
					$( Self::$variant => stringify!($variant), )*
				}
			}
		}

		impl TryFrom<i32> for $name {
			type Error = $crate::xdr::XdrError;

			fn try_from(value: i32) -> $crate::xdr::Result<Self> {
				match value {
					$( $value => Ok(Self::$variant), )*
					_ => Err($crate::xdr::XdrError::UnrecognizedDiscriminant {
						type_name: stringify!($name),
						value,
					}),
				}
			}
		}

		impl From<$name> for i32 {
			fn from(value: $name) -> i32 {
				value as i32
			}
		}

		impl std::fmt::Display for $name {
			fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
				f.write_str(self.name())
			}
		}

		impl $crate::xdr::XdrDiscriminant for $name {
			fn as_i32(&self) -> i32 {
				*self as i32
			}
		}

		impl $crate::xdr::ReadXdr for $name {
			fn read_xdr(r: &mut $crate::xdr::Reader<'_>) -> $crate::xdr::Result<Self> {
				let value = r.cursor().read_i32()?;
				Self::try_from(value)
			}
		}

		impl $crate::xdr::WriteXdr for $name {
			fn write_xdr(&self, w: &mut $crate::xdr::Sink) {
				w.write_i32(*self as i32);
			}
		}

		impl $crate::xdr::XdrSchema for $name {
			const DESCRIPTOR: $crate::xdr::TypeDescriptor = $crate::xdr::TypeDescriptor {
				name: stringify!($name),
				shape: $crate::xdr::Shape::Enum {
					members: &[$( $crate::xdr::EnumMember {
						name: stringify!($variant),
						value: $value,
					}, )*],
				},
			};
		}
	};
}

/// Declare a discriminated union.
///
/// Each arm names its variant, the discriminant value selecting it, and an
/// optional payload type; arms without `=> Type` carry no payload.
macro_rules! xdr_union {
	(@bind $binding:ident $payload:ty) => {
		$binding
	};
	(@ignore $payload:ty) => {
		_
	};
	(@payload) => {
		None
	};
	(@payload $payload:ty) => {
		Some(stringify!($payload))
	};
	(
		$(#[$meta:meta])*
		pub enum $name:ident switch ($dty:ty) {
			$(
				$(#[$vmeta:meta])*
				$variant:ident ($disc:expr) $(=> $payload:ty)?
			),* $(,)?
		}
	) => {
		$(#[$meta])*
		#[derive(Debug, Clone, PartialEq, Eq, ::core::hash::Hash)]
		#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize), serde(rename_all = "snake_case"))]
		pub enum $name {
			$( $(#[$vmeta])* $variant $( ($payload) )?, )*
		}

		impl $name {
			/// Discriminant selecting the active arm.
			pub fn discriminant(&self) -> $dty {
				match self {
					$( Self::$variant $( ($crate::xdr::macros::xdr_union!(@ignore $payload)) )? => $disc, )*
				}
			}

			/// Identifier of the active arm.
			pub fn arm_name(&self) -> &'static str {
				match self {
					$( Self::$variant $( ($crate::xdr::macros::xdr_union!(@ignore $payload)) )? => stringify!($variant), )*
				}
			}
		}

		impl $crate::xdr::ReadXdr for $name {
			fn read_xdr(r: &mut $crate::xdr::Reader<'_>) -> $crate::xdr::Result<Self> {
				r.nested(|r| {
					let disc = <$dty as $crate::xdr::ReadXdr>::read_xdr(r)?;
					$(
						if disc == $disc {
							return Ok(Self::$variant $( (<$payload as $crate::xdr::ReadXdr>::read_xdr(r)?) )?);
						}
					)*
					Err($crate::xdr::XdrError::UnrecognizedDiscriminant {
						type_name: stringify!($name),
						value: $crate::xdr::XdrDiscriminant::as_i32(&disc),
					})
				})
			}
		}

		impl $crate::xdr::WriteXdr for $name {
			fn write_xdr(&self, w: &mut $crate::xdr::Sink) {
				match self {
					$(
						Self::$variant $( ($crate::xdr::macros::xdr_union!(@bind value $payload)) )? => {
							<$dty as $crate::xdr::WriteXdr>::write_xdr(&$disc, w);
							$( <$payload as $crate::xdr::WriteXdr>::write_xdr(value, w); )?
						}
					)*
				}
			}
		}

		impl $crate::xdr::XdrSchema for $name {
			const DESCRIPTOR: $crate::xdr::TypeDescriptor = $crate::xdr::TypeDescriptor {
				name: stringify!($name),
				shape: $crate::xdr::Shape::Union {
					discriminant: stringify!($dty),
					arms: &[$( $crate::xdr::UnionArm {
						case: stringify!($disc),
						variant: stringify!($variant),
						payload: $crate::xdr::macros::xdr_union!(@payload $($payload)?),
					}, )*],
				},
			};
		}
	};
}

/// Declare a fixed-length opaque newtype.
macro_rules! xdr_opaque {
	(
		$(#[$meta:meta])*
		pub struct $name:ident([u8; $len:literal]);
	) => {
		$(#[$meta])*
		#[derive(Clone, Copy, Default, PartialEq, Eq, ::core::hash::Hash, PartialOrd, Ord)]
		pub struct $name(pub [u8; $len]);

		impl $name {
			/// Byte length before padding.
			pub const LEN: usize = $len;

			/// Parse from a hex string of exactly `LEN` bytes.
			pub fn from_hex(text: &str) -> Option<Self> {
				let bytes = hex::decode(text).ok()?;
				<[u8; $len]>::try_from(bytes.as_slice()).ok().map(Self)
			}
		}

		impl From<[u8; $len]> for $name {
			fn from(value: [u8; $len]) -> Self {
				Self(value)
			}
		}

		impl AsRef<[u8]> for $name {
			fn as_ref(&self) -> &[u8] {
				&self.0
			}
		}

		impl std::fmt::Debug for $name {
			fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
				write!(f, "{}({})", stringify!($name), hex::encode(self.0))
			}
		}

		impl std::fmt::Display for $name {
			fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
				f.write_str(&hex::encode(self.0))
			}
		}

		impl $crate::xdr::ReadXdr for $name {
			fn read_xdr(r: &mut $crate::xdr::Reader<'_>) -> $crate::xdr::Result<Self> {
				$crate::xdr::primitive::read_fixed_opaque::<$len>(r).map(Self)
			}
		}

		impl $crate::xdr::WriteXdr for $name {
			fn write_xdr(&self, w: &mut $crate::xdr::Sink) {
				$crate::xdr::primitive::write_fixed_opaque(&self.0, w);
			}
		}

		impl $crate::xdr::XdrSchema for $name {
			const DESCRIPTOR: $crate::xdr::TypeDescriptor = $crate::xdr::TypeDescriptor {
				name: stringify!($name),
				shape: $crate::xdr::Shape::FixedOpaque { len: $len },
			};
		}

		#[cfg(feature = "serde")]
		impl serde::Serialize for $name {
			fn serialize<S: serde::Serializer>(&self, serializer: S) -> std::result::Result<S::Ok, S::Error> {
				serializer.serialize_str(&hex::encode(self.0))
			}
		}

		#[cfg(feature = "serde")]
		impl<'de> serde::Deserialize<'de> for $name {
			fn deserialize<D: serde::Deserializer<'de>>(deserializer: D) -> std::result::Result<Self, D::Error> {
				let text = <String as serde::Deserialize>::deserialize(deserializer)?;
				Self::from_hex(&text).ok_or_else(|| {
					<D::Error as serde::de::Error>::custom(concat!("expected ", stringify!($len), " hex-encoded bytes"))
				})
			}
		}
	};
}

pub(crate) use {xdr_enum, xdr_opaque, xdr_struct, xdr_union};
