//! qbind Core - value model for the qbind rewriter
//!
//! This crate defines the types shared by everything that binds query
//! parameters:
//!
//! - `Value` - the closed union of scalar kinds a parameter can carry
//! - `BoundValue` - a scalar or an ordered list of scalars, as supplied
//!   in a binding map

mod types;

pub use types::*;
