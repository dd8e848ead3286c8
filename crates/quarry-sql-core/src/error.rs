//! Error types for dialect operations.

use crate::column::ColumnType;

/// Errors raised while generating dialect-specific SQL.
#[derive(Debug, Clone, Copy, PartialEq, Eq, thiserror::Error)]
pub enum DialectError {
    /// The dialect has no SQL type for the given column type tag.
    ///
    /// Raised by [`Dialect::type_name`](crate::dialect::Dialect::type_name)
    /// when a descriptor matches no length rule and has no type-table entry.
    /// This is a configuration error, not a recoverable runtime condition:
    /// the statement builder must abort construction rather than emit
    /// partially-correct SQL.
    #[error("no SQL type mapping for column type {0:?}")]
    UnsupportedTypeMapping(ColumnType),
}

/// Result type for dialect operations.
pub type Result<T> = std::result::Result<T, DialectError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_display_names_the_tag() {
        let err = DialectError::UnsupportedTypeMapping(ColumnType::Xml);
        assert_eq!(err.to_string(), "no SQL type mapping for column type Xml");
    }
}
