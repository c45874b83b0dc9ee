//! Flat text serialization of a composite's scalar properties.
//!
//! The format is a brace-delimited, comma-separated list of
//! `"Name":"value"` entries in property table order:
//!
//! ```text
//! {
//! "Model":"W111","Manufacturer":"Mercedes","Power":"550",}
//! ```
//!
//! Parsing is positional: entry *i* is assigned to property *i*. Only scalar
//! properties are representable. A value may not contain `,` or `"`, and may
//! not end in `{`, `}`, `\r` or `\n`, since parsing strips those; `serialize`
//! rejects such values rather than write text that would not read back.

use thiserror::Error;

use crate::inspect::Composite;

#[derive(Debug, Error, PartialEq, Eq)]
pub enum FlatError {
    #[error("Property {0} is not a scalar and has no flat form")]
    Unrepresentable(&'static str),
    #[error("Value {value:?} of property {property} cannot be written in flat form")]
    UnrepresentableValue { property: &'static str, value: String },
    #[error("Missing entry {index} for property {property}")]
    MissingProperty { index: usize, property: &'static str },
    #[error("Invalid value {value:?} for property {property}: {reason}")]
    InvalidValue {
        property: &'static str,
        value: String,
        reason: String,
    },
}

const TRIM: &[char] = &['{', '\r', '\n', '}'];

pub fn serialize<T: Composite>(value: &T) -> Result<String, FlatError> {
    let mut out = String::from("{\n");

    for property in T::properties() {
        let text = property
            .read_text(value)
            .ok_or(FlatError::Unrepresentable(property.name()))?
            .unwrap_or_default();
        if !is_representable(&text) {
            return Err(FlatError::UnrepresentableValue {
                property: property.name(),
                value: text,
            });
        }
        out.push_str(&format!("\"{}\":\"{}\",", property.name(), text));
    }

    out.push_str("}\n");
    Ok(out)
}

fn is_representable(text: &str) -> bool {
    !text.contains([',', '"']) && !text.ends_with(TRIM)
}

pub fn deserialize<T: Composite + Default>(text: &str) -> Result<T, FlatError> {
    let entries: Vec<String> = text
        .split(',')
        .filter(|piece| piece.contains(':'))
        .map(|piece| piece.replace('"', "").trim_matches(TRIM).to_string())
        .collect();

    let mut value = T::default();

    for (index, property) in T::properties().iter().enumerate() {
        let entry = entries.get(index).ok_or(FlatError::MissingProperty {
            index,
            property: property.name(),
        })?;
        // Everything after the first ':' is the value.
        let raw = entry.split_once(':').map_or("", |(_, raw)| raw);

        property
            .write_text(&mut value, raw)
            .ok_or(FlatError::Unrepresentable(property.name()))?
            .map_err(|reason| FlatError::InvalidValue {
                property: property.name(),
                value: raw.to_string(),
                reason,
            })?;
    }

    Ok(value)
}
