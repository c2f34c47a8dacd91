use ledgerxdr::xdr::{Result, Shape, TypeDescriptor};

use crate::cmd::util::{emit_json, parse_variant};

#[derive(clap::Args)]
pub struct Args {
	/// Type name, e.g. `TransactionEnvelope` or `transaction_envelope`.
	pub type_name: String,
	#[arg(long)]
	pub json: bool,
}

/// Print the declared fields, members, or arms of a type.
pub fn run(args: Args) -> Result<()> {
	let Args { type_name, json } = args;
	let descriptor = parse_variant(&type_name)?.descriptor();

	if json {
		return emit_json(&SchemaJson::from(descriptor));
	}

	println!("name: {}", descriptor.name);
	println!("shape: {}", descriptor.shape.as_str());
	match descriptor.shape {
		Shape::Struct { fields } => {
			println!("fields:");
			for field in fields {
				println!("  {}: {}", field.name, field.type_name);
			}
		}
		Shape::Enum { members } => {
			println!("members:");
			for member in members {
				println!("  {} = {}", member.name, member.value);
			}
		}
		Shape::Union { discriminant, arms } => {
			println!("discriminant: {discriminant}");
			println!("arms:");
			for arm in arms {
				println!("  {} => {}({})", arm.case, arm.variant, arm.payload.unwrap_or("void"));
			}
		}
		Shape::FixedOpaque { len } => println!("len: {len}"),
	}
	Ok(())
}

#[derive(serde::Serialize)]
struct SchemaJson {
	name: &'static str,
	shape: &'static str,
	#[serde(skip_serializing_if = "Vec::is_empty")]
	fields: Vec<FieldJson>,
	#[serde(skip_serializing_if = "Vec::is_empty")]
	members: Vec<MemberJson>,
	#[serde(skip_serializing_if = "Option::is_none")]
	discriminant: Option<&'static str>,
	#[serde(skip_serializing_if = "Vec::is_empty")]
	arms: Vec<ArmJson>,
	#[serde(skip_serializing_if = "Option::is_none")]
	len: Option<usize>,
}

#[derive(serde::Serialize)]
struct FieldJson {
	name: &'static str,
	#[serde(rename = "type")]
	type_name: &'static str,
}

#[derive(serde::Serialize)]
struct MemberJson {
	name: &'static str,
	value: i32,
}

#[derive(serde::Serialize)]
struct ArmJson {
	case: &'static str,
	variant: &'static str,
	payload: Option<&'static str>,
}

impl From<TypeDescriptor> for SchemaJson {
	fn from(descriptor: TypeDescriptor) -> Self {
		let mut out = Self {
			name: descriptor.name,
			shape: descriptor.shape.as_str(),
			fields: Vec::new(),
			members: Vec::new(),
			discriminant: None,
			arms: Vec::new(),
			len: None,
		};
		match descriptor.shape {
			Shape::Struct { fields } => {
				out.fields = fields
					.iter()
					.map(|field| FieldJson {
						name: field.name,
						type_name: field.type_name,
					})
					.collect();
			}
			Shape::Enum { members } => {
				out.members = members
					.iter()
					.map(|member| MemberJson {
						name: member.name,
						value: member.value,
					})
					.collect();
			}
			Shape::Union { discriminant, arms } => {
				out.discriminant = Some(discriminant);
				out.arms = arms
					.iter()
					.map(|arm| ArmJson {
						case: arm.case,
						variant: arm.variant,
						payload: arm.payload,
					})
					.collect();
			}
			Shape::FixedOpaque { len } => out.len = Some(len),
		}
		out
	}
}
