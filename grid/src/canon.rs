//! Canonical JSON bytes for hashing.
//!
//! All digests over JSON (search reports, policy echoes) go through
//! [`canonical_json_bytes`]. The rules:
//!
//! 1. Object keys sorted lexicographically by byte order, at every depth.
//! 2. Compact form, no whitespace.
//! 3. Numbers must be integers; floats are rejected so output never depends
//!    on float formatting.
//! 4. Strings and literals are written by `serde_json` (RFC 8259 escaping).

use serde_json::Value;

/// Error type for canonical JSON serialization.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum CanonError {
    /// A JSON number was not representable as `i64` or `u64`.
    NonIntegerNumber { raw: String },
    /// `serde_json` failed to write a scalar.
    Write { detail: String },
}

impl std::fmt::Display for CanonError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::NonIntegerNumber { raw } => {
                write!(f, "non-integer number in canonical JSON: {raw}")
            }
            Self::Write { detail } => write!(f, "canonical JSON write failed: {detail}"),
        }
    }
}

impl std::error::Error for CanonError {}

/// Produce canonical JSON bytes from a `serde_json::Value`.
///
/// # Errors
///
/// Returns [`CanonError::NonIntegerNumber`] for any float, and
/// [`CanonError::Write`] if `serde_json` fails to encode a scalar.
pub fn canonical_json_bytes(value: &Value) -> Result<Vec<u8>, CanonError> {
    let mut out = Vec::new();
    write_canonical(&mut out, value)?;
    Ok(out)
}

fn write_canonical(out: &mut Vec<u8>, value: &Value) -> Result<(), CanonError> {
    match value {
        Value::Object(map) => {
            let mut entries: Vec<(&String, &Value)> = map.iter().collect();
            entries.sort_unstable_by(|a, b| a.0.as_bytes().cmp(b.0.as_bytes()));
            out.push(b'{');
            for (i, (key, item)) in entries.into_iter().enumerate() {
                if i > 0 {
                    out.push(b',');
                }
                write_scalar(out, key)?;
                out.push(b':');
                write_canonical(out, item)?;
            }
            out.push(b'}');
        }
        Value::Array(items) => {
            out.push(b'[');
            for (i, item) in items.iter().enumerate() {
                if i > 0 {
                    out.push(b',');
                }
                write_canonical(out, item)?;
            }
            out.push(b']');
        }
        Value::Number(n) if !(n.is_i64() || n.is_u64()) => {
            return Err(CanonError::NonIntegerNumber { raw: n.to_string() });
        }
        scalar => write_scalar(out, scalar)?,
    }
    Ok(())
}

fn write_scalar<T>(out: &mut Vec<u8>, value: &T) -> Result<(), CanonError>
where
    T: serde::Serialize + ?Sized,
{
    serde_json::to_writer(&mut *out, value).map_err(|e| CanonError::Write {
        detail: e.to_string(),
    })
}
