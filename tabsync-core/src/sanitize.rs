//! Value sanitization for incoming field updates.
//!
//! The store may be rendered by a spreadsheet UI, so string values that
//! would be interpreted as formulas are refused before they are written.
//! Rules compose: each one can reject independently, and new rules slot
//! into [`RULES`] without touching the callers.

use serde_json::Value;

use crate::error::SanitizeError;

type Rule = fn(&str, &Value) -> Result<(), SanitizeError>;

/// Ordered rule list; the first rejection wins.
const RULES: &[Rule] = &[reject_formula];

/// Validate a value before it is written under `field`.
///
/// Passing values are returned unchanged.
pub fn sanitize<'v>(field: &str, value: &'v Value) -> Result<&'v Value, SanitizeError> {
    for rule in RULES {
        rule(field, value)?;
    }
    Ok(value)
}

fn reject_formula(field: &str, value: &Value) -> Result<(), SanitizeError> {
    if let Value::String(s) = value {
        if s.trim().starts_with('=') {
            return Err(SanitizeError::RejectedFormula {
                field: field.to_string(),
            });
        }
    }
    Ok(())
}
