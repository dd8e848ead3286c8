//! MySQL dialect implementation.

use std::collections::HashMap;

use quarry_sql_core::builder::SqlBuilder;
use quarry_sql_core::column::{ColumnDescriptor, ColumnType};
use quarry_sql_core::dialect::Dialect;
use quarry_sql_core::error::{DialectError, Result};

/// Declared lengths above this render as unbounded TEXT/BLOB instead of a
/// parameterized varchar/varbinary. Matches the widest column MySQL will
/// keep inline and indexable.
const MAX_INLINE_LENGTH: u32 = 4000;

/// Canonical SQL type for each tag, `None` when MySQL has no mapping.
///
/// Exhaustive on purpose: a new [`ColumnType`] variant fails to compile
/// here until this dialect handles or explicitly declines it.
const fn base_type_name(tag: ColumnType) -> Option<&'static str> {
    match tag {
        ColumnType::Guid => Some("char(36)"),
        ColumnType::Binary => Some("varbinary"),
        ColumnType::Time => Some("time"),
        ColumnType::Date
        | ColumnType::DateTime
        | ColumnType::DateTime2
        | ColumnType::DateTimeOffset => Some("datetime"),
        ColumnType::Boolean => Some("bit"),
        ColumnType::Byte => Some("tinyint unsigned"),
        ColumnType::Decimal => Some("decimal(65, 30)"),
        ColumnType::Double => Some("double"),
        ColumnType::Int16 => Some("smallint"),
        ColumnType::UInt16 => Some("smallint unsigned"),
        ColumnType::Int32 => Some("int"),
        ColumnType::UInt32 => Some("int unsigned"),
        ColumnType::Int64 => Some("bigint"),
        ColumnType::UInt64 => Some("bigint unsigned"),
        ColumnType::AnsiStringFixed => Some("char"),
        ColumnType::AnsiString => Some("varchar(127)"),
        ColumnType::StringFixed => Some("varchar"),
        ColumnType::String => Some("varchar(255)"),
        ColumnType::SByte | ColumnType::Single | ColumnType::Xml | ColumnType::Object => None,
    }
}

/// MySQL dialect.
///
/// Holds the tag-to-type-name table, built once in [`MySqlDialect::new`]
/// and read-only thereafter.
#[derive(Debug, Clone)]
pub struct MySqlDialect {
    column_types: HashMap<ColumnType, &'static str>,
}

impl MySqlDialect {
    /// Creates a new MySQL dialect.
    #[must_use]
    pub fn new() -> Self {
        let column_types = ColumnType::ALL
            .into_iter()
            .filter_map(|tag| base_type_name(tag).map(|name| (tag, name)))
            .collect();
        Self { column_types }
    }
}

impl Default for MySqlDialect {
    fn default() -> Self {
        Self::new()
    }
}

impl Dialect for MySqlDialect {
    fn name(&self) -> &'static str {
        "mysql"
    }

    fn identity_select_string(&self) -> &'static str {
        "; select LAST_INSERT_ID()"
    }

    fn identity_column_string(&self) -> &'static str {
        "int AUTO_INCREMENT primary key"
    }

    fn supports_if_exists_before_table_name(&self) -> bool {
        true
    }

    fn default_values_insert(&self) -> &'static str {
        "VALUES()"
    }

    fn identifier_quote(&self) -> char {
        '`'
    }

    /// Maps a descriptor to MySQL's type name.
    ///
    /// Precision and scale are accepted but unused: decimal width is fixed
    /// at `decimal(65, 30)`, the widest MySQL accepts.
    ///
    /// # Errors
    ///
    /// Returns [`DialectError::UnsupportedTypeMapping`] for tags MySQL has
    /// no type for (`SByte`, `Single`, `Xml`, `Object`).
    fn type_name(&self, descriptor: &ColumnDescriptor) -> Result<String> {
        if let Some(length) = descriptor.length {
            if length > MAX_INLINE_LENGTH {
                match descriptor.column_type {
                    ColumnType::String | ColumnType::AnsiString => return Ok("TEXT".to_string()),
                    ColumnType::Binary => return Ok("BLOB".to_string()),
                    _ => {}
                }
            } else {
                match descriptor.column_type {
                    ColumnType::String | ColumnType::AnsiString => {
                        return Ok(format!("varchar({length})"));
                    }
                    ColumnType::Binary => return Ok(format!("varbinary({length})")),
                    _ => {}
                }
            }
        }

        self.column_types
            .get(&descriptor.column_type)
            .map(|name| (*name).to_string())
            .ok_or(DialectError::UnsupportedTypeMapping(descriptor.column_type))
    }

    fn drop_foreign_key_clause(&self, name: &str) -> String {
        format!(" drop foreign key {name}")
    }

    fn apply_paging(&self, builder: &mut SqlBuilder, offset: i64, limit: i64) {
        if offset == 0 && limit != 0 {
            // No rows skipped: a bare LIMIT after the selection is cheaper
            // than OFFSET/FETCH syntax.
            let selector = format!(" {} limit {limit}", builder.selector());
            builder.set_selector(selector);
        } else if offset != 0 || limit != 0 {
            builder.set_trail(format!(
                "OFFSET {offset} ROWS FETCH FIRST {limit} ROWS ONLY"
            ));
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn type_name(dialect: &MySqlDialect, tag: ColumnType) -> Result<String> {
        dialect.type_name(&ColumnDescriptor::new(tag))
    }

    #[test]
    fn test_type_table_entries() {
        let dialect = MySqlDialect::new();
        let expected = [
            (ColumnType::Guid, "char(36)"),
            (ColumnType::Binary, "varbinary"),
            (ColumnType::Time, "time"),
            (ColumnType::Date, "datetime"),
            (ColumnType::DateTime, "datetime"),
            (ColumnType::DateTime2, "datetime"),
            (ColumnType::DateTimeOffset, "datetime"),
            (ColumnType::Boolean, "bit"),
            (ColumnType::Byte, "tinyint unsigned"),
            (ColumnType::Decimal, "decimal(65, 30)"),
            (ColumnType::Double, "double"),
            (ColumnType::Int16, "smallint"),
            (ColumnType::UInt16, "smallint unsigned"),
            (ColumnType::Int32, "int"),
            (ColumnType::UInt32, "int unsigned"),
            (ColumnType::Int64, "bigint"),
            (ColumnType::UInt64, "bigint unsigned"),
            (ColumnType::AnsiStringFixed, "char"),
            (ColumnType::AnsiString, "varchar(127)"),
            (ColumnType::StringFixed, "varchar"),
            (ColumnType::String, "varchar(255)"),
        ];
        for (tag, name) in expected {
            assert_eq!(type_name(&dialect, tag).unwrap(), name, "tag {tag:?}");
        }
    }

    #[test]
    fn test_length_parameterized_forms() {
        let dialect = MySqlDialect::new();
        assert_eq!(
            dialect
                .type_name(&ColumnDescriptor::new(ColumnType::String).with_length(50))
                .unwrap(),
            "varchar(50)"
        );
        assert_eq!(
            dialect
                .type_name(&ColumnDescriptor::new(ColumnType::AnsiString).with_length(127))
                .unwrap(),
            "varchar(127)"
        );
        assert_eq!(
            dialect
                .type_name(&ColumnDescriptor::new(ColumnType::Binary).with_length(16))
                .unwrap(),
            "varbinary(16)"
        );
        // 4000 is the last inline length.
        assert_eq!(
            dialect
                .type_name(&ColumnDescriptor::new(ColumnType::String).with_length(4000))
                .unwrap(),
            "varchar(4000)"
        );
    }

    #[test]
    fn test_large_object_forms() {
        let dialect = MySqlDialect::new();
        assert_eq!(
            dialect
                .type_name(&ColumnDescriptor::new(ColumnType::String).with_length(5000))
                .unwrap(),
            "TEXT"
        );
        assert_eq!(
            dialect
                .type_name(&ColumnDescriptor::new(ColumnType::AnsiString).with_length(4001))
                .unwrap(),
            "TEXT"
        );
        assert_eq!(
            dialect
                .type_name(&ColumnDescriptor::new(ColumnType::Binary).with_length(5000))
                .unwrap(),
            "BLOB"
        );
    }

    #[test]
    fn test_length_on_non_string_tag_falls_back_to_table() {
        let dialect = MySqlDialect::new();
        // Length rules only apply to String/AnsiString/Binary.
        assert_eq!(
            dialect
                .type_name(&ColumnDescriptor::new(ColumnType::Int32).with_length(11))
                .unwrap(),
            "int"
        );
    }

    #[test]
    fn test_unmapped_tags_error() {
        let dialect = MySqlDialect::new();
        for tag in [
            ColumnType::SByte,
            ColumnType::Single,
            ColumnType::Xml,
            ColumnType::Object,
        ] {
            assert_eq!(
                type_name(&dialect, tag),
                Err(DialectError::UnsupportedTypeMapping(tag))
            );
        }
    }

    #[test]
    fn test_precision_and_scale_are_ignored() {
        let dialect = MySqlDialect::new();
        assert_eq!(
            dialect
                .type_name(&ColumnDescriptor::new(ColumnType::Decimal).with_precision_scale(10, 2))
                .unwrap(),
            "decimal(65, 30)"
        );
    }

    #[test]
    fn test_paging_limit_only_rewrites_selector() {
        let dialect = MySqlDialect::new();
        let mut builder = SqlBuilder::with_selector("SELECT * FROM t");
        dialect.apply_paging(&mut builder, 0, 10);
        assert_eq!(builder.selector(), " SELECT * FROM t limit 10");
        assert_eq!(builder.trail(), "");
    }

    #[test]
    fn test_paging_with_offset_sets_trail() {
        let dialect = MySqlDialect::new();
        let mut builder = SqlBuilder::with_selector("SELECT * FROM t");
        dialect.apply_paging(&mut builder, 5, 10);
        assert_eq!(builder.selector(), "SELECT * FROM t");
        assert_eq!(builder.trail(), "OFFSET 5 ROWS FETCH FIRST 10 ROWS ONLY");
    }

    #[test]
    fn test_paging_offset_without_limit_sets_trail() {
        let dialect = MySqlDialect::new();
        let mut builder = SqlBuilder::with_selector("SELECT * FROM t");
        dialect.apply_paging(&mut builder, 20, 0);
        assert_eq!(builder.trail(), "OFFSET 20 ROWS FETCH FIRST 0 ROWS ONLY");
    }

    #[test]
    fn test_paging_zero_zero_is_noop() {
        let dialect = MySqlDialect::new();
        let mut builder = SqlBuilder::with_selector("SELECT * FROM t");
        dialect.apply_paging(&mut builder, 0, 0);
        assert_eq!(builder.selector(), "SELECT * FROM t");
        assert_eq!(builder.trail(), "");
    }

    #[test]
    fn test_paging_passes_negative_values_through() {
        // Validation is the caller's job; the dialect formats what it gets.
        let dialect = MySqlDialect::new();
        let mut builder = SqlBuilder::with_selector("SELECT * FROM t");
        dialect.apply_paging(&mut builder, -5, -10);
        assert_eq!(builder.trail(), "OFFSET -5 ROWS FETCH FIRST -10 ROWS ONLY");
    }

    #[test]
    fn test_identifier_quoting_uses_backticks() {
        let dialect = MySqlDialect::new();
        assert_eq!(dialect.quote_column_name("id"), "`id`");
        assert_eq!(dialect.quote_table_name("Users"), "`Users`");
    }

    #[test]
    fn test_value_quoting_doubles_single_quotes() {
        let dialect = MySqlDialect::new();
        assert_eq!(dialect.quote_value("O'Brien"), "'O''Brien'");
    }

    #[test]
    fn test_drop_foreign_key_clause() {
        let dialect = MySqlDialect::new();
        assert_eq!(
            dialect.drop_foreign_key_clause("FK_X"),
            " drop foreign key FK_X"
        );
    }

    #[test]
    fn test_constants() {
        let dialect = MySqlDialect::new();
        assert_eq!(dialect.name(), "mysql");
        assert_eq!(dialect.identity_select_string(), "; select LAST_INSERT_ID()");
        assert_eq!(
            dialect.identity_column_string(),
            "int AUTO_INCREMENT primary key"
        );
        assert!(dialect.supports_if_exists_before_table_name());
        assert_eq!(dialect.default_values_insert(), "VALUES()");
    }
}
