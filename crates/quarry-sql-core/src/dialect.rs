//! SQL dialect support.
//!
//! Different databases have different type names, quoting rules, identity
//! syntax and paging clauses. This module provides the trait each engine
//! implements; the statement builder delegates every engine-specific
//! fragment to the dialect it was configured with.

use crate::builder::SqlBuilder;
use crate::column::ColumnDescriptor;
use crate::error::Result;

/// Trait for dialect-specific SQL generation.
///
/// One implementation exists per target database engine, constructed once
/// and held for the life of the process. Implementations hold no mutable
/// state after construction, so a single instance may be shared freely
/// across threads.
///
/// Provided methods default to ANSI-flavored behavior; engines override the
/// ones where their syntax diverges.
pub trait Dialect: Send + Sync {
    /// Returns the dialect name, used for dispatch and logging.
    fn name(&self) -> &'static str;

    /// SQL fragment appended after an INSERT to read back the generated
    /// identity value.
    fn identity_select_string(&self) -> &'static str;

    /// SQL fragment declaring an auto-incrementing primary-key column.
    fn identity_column_string(&self) -> &'static str;

    /// Whether `IF EXISTS` precedes the table name in DROP TABLE statements
    /// (as opposed to following it).
    fn supports_if_exists_before_table_name(&self) -> bool {
        false
    }

    /// SQL fragment for an INSERT with no explicit column values.
    fn default_values_insert(&self) -> &'static str {
        "DEFAULT VALUES"
    }

    /// Returns the identifier quote character.
    fn identifier_quote(&self) -> char {
        '"'
    }

    /// Returns the string-literal quote character.
    fn value_quote(&self) -> char {
        '\''
    }

    /// Maps a column descriptor to the engine's SQL type name.
    ///
    /// Deterministic, pure function of (type tag, length, precision, scale).
    ///
    /// # Errors
    ///
    /// Returns [`UnsupportedTypeMapping`](crate::error::DialectError::UnsupportedTypeMapping)
    /// when no mapping rule applies to the descriptor's tag. Callers must
    /// abort statement construction on this error.
    fn type_name(&self, descriptor: &ColumnDescriptor) -> Result<String>;

    /// Returns the clause dropping a named foreign-key constraint, ready to
    /// concatenate after an `ALTER TABLE <table>` prefix.
    fn drop_foreign_key_clause(&self, name: &str) -> String;

    /// Rewrites the builder's selector or trailing clause to page the result
    /// set to `limit` rows starting at `offset`.
    ///
    /// With both arguments zero this is a no-op. Arguments are passed
    /// through unvalidated; rejecting negative values is the caller's
    /// responsibility.
    fn apply_paging(&self, builder: &mut SqlBuilder, offset: i64, limit: i64);

    /// Quotes a column name. Embedded quote characters are not escaped;
    /// identifiers are trusted input.
    fn quote_column_name(&self, name: &str) -> String {
        let q = self.identifier_quote();
        format!("{q}{name}{q}")
    }

    /// Quotes a table name. Same trust model as [`Self::quote_column_name`].
    fn quote_table_name(&self, name: &str) -> String {
        let q = self.identifier_quote();
        format!("{q}{name}{q}")
    }

    /// Quotes a literal value, escaping embedded quote characters by
    /// doubling them. All literals must pass through here; this is the only
    /// injection-safe path for inline values.
    fn quote_value(&self, value: &str) -> String {
        let q = self.value_quote();
        let escape = format!("{q}{q}");
        format!("{q}{}{q}", value.replace(q, &escape))
    }

    /// DROP TABLE statement, placing `IF EXISTS` before or after the table
    /// name according to [`Self::supports_if_exists_before_table_name`].
    fn drop_table_statement(&self, table: &str) -> String {
        let table = self.quote_table_name(table);
        if self.supports_if_exists_before_table_name() {
            format!("DROP TABLE IF EXISTS {table}")
        } else {
            format!("DROP TABLE {table} IF EXISTS")
        }
    }

    /// INSERT statement for a row with no explicit column values.
    fn insert_default_values_statement(&self, table: &str) -> String {
        format!(
            "INSERT INTO {} {}",
            self.quote_table_name(table),
            self.default_values_insert()
        )
    }

    /// Appends the identity-select fragment to a rendered INSERT so the
    /// generated key comes back with the same round trip.
    fn insert_returning_identity_statement(&self, insert: &str) -> String {
        format!("{insert}{}", self.identity_select_string())
    }
}
