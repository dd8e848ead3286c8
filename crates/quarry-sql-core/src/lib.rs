//! # quarry-sql-core
//!
//! Engine-agnostic contracts for the quarry-sql persistence toolkit.
//!
//! This crate provides:
//! - A closed enumeration of semantic column types and the descriptor
//!   callers build per column
//! - The [`Dialect`] trait that each database engine implements: type-name
//!   resolution, identifier and value quoting, identity syntax, paging
//! - A statement builder holding the mutable selector and trailing-clause
//!   slots that dialects rewrite
//!
//! Engine crates (for example `quarry-sql-mysql`) supply the concrete
//! dialects; the caller picks one at configuration time and hands it to the
//! builder. Dialects are stateless after construction and safe to share
//! across threads.
//!
//! ## Describing a column
//!
//! ```rust
//! use quarry_sql_core::{ColumnDescriptor, ColumnType};
//!
//! let username = ColumnDescriptor::new(ColumnType::String).with_length(255);
//! let balance = ColumnDescriptor::new(ColumnType::Decimal).with_precision_scale(10, 2);
//!
//! assert_eq!(username.length, Some(255));
//! assert_eq!(balance.scale, Some(2));
//! ```

pub mod builder;
pub mod column;
pub mod dialect;
pub mod error;

pub use builder::SqlBuilder;
pub use column::{ColumnDescriptor, ColumnType};
pub use dialect::Dialect;
pub use error::{DialectError, Result};
