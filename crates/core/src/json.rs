//! JSON rendering shared by the manifest and settings writers.

use serde::Serialize;
use serde_json::ser::{PrettyFormatter, Serializer};

use crate::types::BnPlugResult;

/// Serialize `value` pretty-printed with four-space indentation
pub fn to_pretty_json<T: Serialize + ?Sized>(value: &T) -> BnPlugResult<String> {
    let mut buf = Vec::new();
    let mut serializer = Serializer::with_formatter(&mut buf, PrettyFormatter::with_indent(b"    "));
    value.serialize(&mut serializer)?;
    // serde_json only ever emits valid UTF-8
    Ok(String::from_utf8_lossy(&buf).into_owned())
}
