//! SQL Placeholder Rewriting
//!
//! This module rewrites SQL written with named placeholders (`:name`) into
//! SQL using positional placeholders (`?`), producing the bound values in
//! the matching left-to-right order.
//!
//! The rewriter has no SQL-awareness: it does not parse the statement and
//! will rewrite `:name`-shaped text inside string literals and comments.
//! That is a documented property of this module, not a bug.
//!
//! # Example
//!
//! ```
//! use qbind::rewrite::rewrite;
//! use qbind::{BoundValue, Value};
//! use std::collections::HashMap;
//!
//! let mut bindings = HashMap::new();
//! bindings.insert(
//!     "ids".to_string(),
//!     BoundValue::List(vec![Value::Int64(1), Value::Int64(2)]),
//! );
//!
//! let query = rewrite("SELECT * FROM t WHERE id IN :ids", &bindings);
//! assert_eq!(query.sql, "SELECT * FROM t WHERE id IN (?, ?)");
//! ```

pub mod rewriter;
mod extractor;

pub use extractor::placeholder_keys;
pub use rewriter::{RewriteError, RewriteResult, RewrittenQuery, rewrite, rewrite_checked};
