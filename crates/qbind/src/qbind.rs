//! qbind - named-placeholder SQL rewriting for positional drivers
//!
//! Callers write SQL with self-documenting `:name` placeholders; drivers
//! that only understand positional `?` marks execute the rewritten form.
//! List-valued bindings expand to a parenthesized group of marks, which
//! makes `WHERE id IN :ids` work without manual string building.
//!
//! # Example
//!
//! ```
//! use qbind::{rewrite, BoundValue, Value};
//! use std::collections::HashMap;
//!
//! let mut bindings = HashMap::new();
//! bindings.insert("id".to_string(), BoundValue::Scalar(Value::Int64(5)));
//!
//! let query = rewrite("SELECT * FROM t WHERE id = :id", &bindings);
//! assert_eq!(query.sql, "SELECT * FROM t WHERE id = ?");
//! assert_eq!(query.params, vec![Value::Int64(5)]);
//! ```

pub mod rewrite;

pub use qbind_core::{BoundValue, Value};
pub use rewrite::{
    RewriteError, RewriteResult, RewrittenQuery, placeholder_keys, rewrite, rewrite_checked,
};
