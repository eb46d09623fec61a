//! JSON emission with stable number formatting
//!
//! Integral values print without a fractional part (`100`, not `100.0`) and
//! non-finite values print as `null`, so a document serializes identically no
//! matter how its coordinates were computed.

use crate::io::configuration::{JSON_INDENT, MAX_SAFE_INTEGER};
use crate::io::error::Result;
use serde::{Serialize, Serializer};
use serde_json::ser::PrettyFormatter;
use std::io::Write;

/// An `f64` that serializes with integral values as JSON integers
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct JsonNumber(pub f64);

impl Serialize for JsonNumber {
    fn serialize<S: Serializer>(&self, serializer: S) -> std::result::Result<S::Ok, S::Error> {
        number(&self.0, serializer)
    }
}

/// Serialize an `f64` field through [`JsonNumber`] formatting
///
/// For use with `#[serde(serialize_with = "...")]`.
///
/// # Errors
///
/// Propagates serializer errors
// serde's serialize_with contract passes fields by reference
#[allow(clippy::trivially_copy_pass_by_ref)]
pub fn number<S: Serializer>(value: &f64, serializer: S) -> std::result::Result<S::Ok, S::Error> {
    let value = *value;
    if !value.is_finite() {
        return serializer.serialize_none();
    }
    if value.fract() == 0.0 && value.abs() <= MAX_SAFE_INTEGER {
        // Exact: the value is integral and within the f64 integer range
        return serializer.serialize_i64(value as i64);
    }
    serializer.serialize_f64(value)
}

/// Write `value` as pretty-printed JSON followed by a newline
///
/// # Errors
///
/// Returns an error if serialization fails or the writer rejects output
pub fn write_pretty<W: Write, T: Serialize>(mut writer: W, value: &T) -> Result<()> {
    let formatter = PrettyFormatter::with_indent(JSON_INDENT);
    let mut serializer = serde_json::Serializer::with_formatter(&mut writer, formatter);
    value.serialize(&mut serializer)?;
    writer.write_all(b"\n")?;
    writer.flush()?;
    Ok(())
}

/// Render `value` as the same pretty-printed JSON [`write_pretty`] emits
///
/// # Errors
///
/// Returns an error if serialization fails
pub fn to_pretty_string<T: Serialize>(value: &T) -> Result<String> {
    let mut buffer = Vec::new();
    write_pretty(&mut buffer, value)?;
    // serde_json only emits UTF-8
    Ok(String::from_utf8_lossy(&buffer).into_owned())
}
