//! SQL Placeholder Rewriter
//!
//! Replaces named placeholders with positional `?` marks and flattens the
//! bound values into the matching left-to-right order.

use std::collections::HashMap;

use qbind_core::{BoundValue, Value};
use thiserror::Error;

use super::extractor::NAMED_TOKEN_REGEX;

/// Errors that can occur during checked rewriting.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum RewriteError {
    /// A placeholder key has no entry in the binding map.
    #[error("missing parameter: {0}")]
    MissingParameter(String),
}

/// Result type for checked rewriting operations.
pub type RewriteResult<T> = Result<T, RewriteError>;

/// Result of rewriting named placeholders in a SQL query.
#[derive(Debug, Clone, PartialEq)]
pub struct RewrittenQuery {
    /// The SQL with recognized placeholders replaced by `?` marks.
    pub sql: String,
    /// The bound values, in left-to-right order of the `?` marks.
    pub params: Vec<Value>,
}

/// Rewrites named placeholders (`:name`) to positional placeholders (`?`).
///
/// Scans `sql` left to right for tokens matching `:[A-Za-z0-9_]+`. For each
/// token whose key is present in `bindings`:
///
/// - a [`BoundValue::Scalar`] emits a single `?` and appends the value;
/// - a [`BoundValue::List`] of length n emits `(` followed by n
///   comma-separated `?` marks followed by `)` and appends the n values in
///   their original order. An empty list emits `()` and appends nothing.
///
/// A token whose key is absent from `bindings` passes through verbatim; all
/// text outside tokens is preserved byte-for-byte. The number of `?` marks
/// in the output always equals `params.len()`.
///
/// This function never fails. Each occurrence of a repeated key is resolved
/// independently, so a scalar key used three times appends its value three
/// times.
///
/// # Example
///
/// ```
/// use qbind::rewrite::rewrite;
/// use qbind::{BoundValue, Value};
/// use std::collections::HashMap;
///
/// let mut bindings = HashMap::new();
/// bindings.insert("id".to_string(), BoundValue::Scalar(Value::Int64(42)));
///
/// let query = rewrite("SELECT * FROM users WHERE id = :id", &bindings);
///
/// assert_eq!(query.sql, "SELECT * FROM users WHERE id = ?");
/// assert_eq!(query.params, vec![Value::Int64(42)]);
/// ```
pub fn rewrite(sql: &str, bindings: &HashMap<String, BoundValue>) -> RewrittenQuery {
    let mut result = String::with_capacity(sql.len());
    let mut params: Vec<Value> = Vec::new();
    let mut resolved = 0usize;
    let mut last_end = 0;

    for cap in NAMED_TOKEN_REGEX.captures_iter(sql) {
        let (full, key) = match (cap.get(0), cap.get(1)) {
            (Some(full), Some(key)) => (full, key),
            _ => continue,
        };

        // Append text before this token
        result.push_str(&sql[last_end..full.start()]);

        match bindings.get(key.as_str()) {
            Some(BoundValue::Scalar(value)) => {
                result.push('?');
                params.push(value.clone());
                resolved += 1;
            }
            Some(BoundValue::List(values)) => {
                result.push('(');
                for (i, value) in values.iter().enumerate() {
                    if i > 0 {
                        result.push_str(", ");
                    }
                    result.push('?');
                    params.push(value.clone());
                }
                result.push(')');
                resolved += 1;
            }
            // Unknown key: the token passes through unchanged
            None => result.push_str(full.as_str()),
        }

        last_end = full.end();
    }

    // Append remaining text
    result.push_str(&sql[last_end..]);

    tracing::trace!(
        resolved,
        params = params.len(),
        "rewrote named placeholders"
    );

    RewrittenQuery {
        sql: result,
        params,
    }
}

/// Rewrites named placeholders, requiring every key to be bound.
///
/// Identical to [`rewrite`], except that a token whose key is absent from
/// `bindings` is an error rather than a pass-through. The first missing key
/// in scan order is reported.
///
/// # Example
///
/// ```
/// use qbind::rewrite::{RewriteError, rewrite_checked};
/// use std::collections::HashMap;
///
/// let err = rewrite_checked("SELECT :a", &HashMap::new()).unwrap_err();
/// assert_eq!(err, RewriteError::MissingParameter("a".to_string()));
/// ```
pub fn rewrite_checked(
    sql: &str,
    bindings: &HashMap<String, BoundValue>,
) -> RewriteResult<RewrittenQuery> {
    for cap in NAMED_TOKEN_REGEX.captures_iter(sql) {
        if let Some(key) = cap.get(1) {
            if !bindings.contains_key(key.as_str()) {
                return Err(RewriteError::MissingParameter(key.as_str().to_string()));
            }
        }
    }

    Ok(rewrite(sql, bindings))
}
