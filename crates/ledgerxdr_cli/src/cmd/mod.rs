/// Single-value decode command.
pub mod decode;
/// JSON to XDR encode command.
pub mod encode;
/// Record-marked stream command.
pub mod frames;
/// Type layout command.
pub mod schema;
/// Type listing command.
pub mod types;

mod util;

#[cfg(test)]
pub(crate) mod test_support;
