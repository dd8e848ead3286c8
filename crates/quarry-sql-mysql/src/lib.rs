//! # quarry-sql-mysql
//!
//! MySQL dialect for `quarry-sql-core`.
//!
//! # How MySQL differs from other dialects
//!
//! - **Identifier quoting**: MySQL uses backticks (`` ` ``) rather than the
//!   standard double quotes.
//! - **Identity columns**: declared with `AUTO_INCREMENT`; the generated
//!   value is read back with `LAST_INSERT_ID()` appended after the INSERT.
//! - **Empty inserts**: `INSERT INTO t VALUES()` rather than
//!   `DEFAULT VALUES`.
//! - **Inline column width**: string and binary columns declared longer
//!   than 4000 degrade to `TEXT`/`BLOB` instead of a parameterized
//!   `varchar`/`varbinary`.
//! - **Paging**: a bare `limit n` when no rows are skipped, the standard
//!   `OFFSET ... ROWS FETCH FIRST ... ROWS ONLY` clause otherwise.
//! - **Dropping foreign keys**: `ALTER TABLE ... DROP FOREIGN KEY name`,
//!   not `DROP CONSTRAINT`.
//!
//! ## Example
//!
//! ```rust
//! use quarry_sql_core::{ColumnDescriptor, ColumnType, Dialect, SqlBuilder};
//! use quarry_sql_mysql::MySqlDialect;
//!
//! let dialect = MySqlDialect::new();
//!
//! let name = dialect
//!     .type_name(&ColumnDescriptor::new(ColumnType::String).with_length(50))
//!     .unwrap();
//! assert_eq!(name, "varchar(50)");
//!
//! let mut builder = SqlBuilder::with_selector("SELECT * FROM `users`");
//! dialect.apply_paging(&mut builder, 0, 10);
//! assert_eq!(builder.to_sql(), "SELECT * FROM `users` limit 10");
//! ```

mod dialect;

pub use dialect::MySqlDialect;
