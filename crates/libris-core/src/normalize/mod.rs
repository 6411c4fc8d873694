//! Best-effort conversion of model output into structured data.
//!
//! Models wrap their JSON in prose, code fences, or answer with Python-style
//! dicts. [`normalize`] extracts the outermost brace-delimited region, strips
//! fence markers, and tries strict JSON followed by the permissive literal
//! grammar in [`literal`]. If neither parses, the untouched input is returned
//! as [`Normalized::Raw`] so the caller can still pass it on.

mod literal;

use serde::Serialize;
use serde_json::Value;

pub use literal::{LiteralError, parse_literal};

const FENCE_JSON: &str = "```json";
const FENCE: &str = "```";

/// Outcome of normalization. Never an error.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(untagged)]
pub enum Normalized {
    /// The input (or its brace-delimited core) parsed into a value.
    Structured(Value),
    /// Parsing failed; the original input, byte for byte.
    Raw(String),
}

impl Normalized {
    #[must_use]
    pub const fn is_structured(&self) -> bool {
        matches!(self, Self::Structured(_))
    }

    /// Convert to a JSON value. `Raw` becomes a JSON string.
    #[must_use]
    pub fn into_value(self) -> Value {
        match self {
            Self::Structured(value) => value,
            Self::Raw(text) => Value::String(text),
        }
    }
}

/// Normalize raw model output.
///
/// 1. Slice from the first `{` through the last `}` (see [`brace_region`]).
/// 2. Remove every "```json" marker, then every "```" marker.
/// 3. Parse as JSON; on failure parse as a Python-style literal.
/// 4. If both fail, return `Raw` holding the original input.
pub fn normalize(input: &str) -> Normalized {
    let candidate = brace_region(input)
        .replace(FENCE_JSON, "")
        .replace(FENCE, "");

    match serde_json::from_str::<Value>(&candidate) {
        Ok(value) => return Normalized::Structured(value),
        Err(e) => tracing::debug!(error = %e, "Model output is not strict JSON"),
    }

    match parse_literal(&candidate) {
        Ok(value) => Normalized::Structured(value),
        Err(e) => {
            tracing::warn!(
                error = %e,
                input_len = input.len(),
                "Model output could not be parsed, returning raw text"
            );
            Normalized::Raw(input.to_string())
        }
    }
}

/// Slice `input` between its first `{` and last `}` (inclusive).
///
/// Only an opening brace: slice to the end. Only a closing brace: slice from
/// the start. Neither: the whole input. A closing brace that precedes the
/// opening one yields an empty slice.
fn brace_region(input: &str) -> &str {
    match (input.find('{'), input.rfind('}')) {
        (Some(start), Some(end)) if end >= start => &input[start..=end],
        (Some(_), Some(_)) => "",
        (Some(start), None) => &input[start..],
        (None, Some(end)) => &input[..=end],
        (None, None) => input,
    }
}
