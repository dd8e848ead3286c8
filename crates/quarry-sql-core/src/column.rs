//! Database-agnostic column type descriptors.
//!
//! Callers describe a column once, in engine-neutral terms, and each
//! [`Dialect`](crate::dialect::Dialect) decides how that description renders
//! as DDL for its engine.

/// Semantic column type tags.
///
/// A closed enumeration: dialects match on it exhaustively, so adding a
/// variant forces every dialect to handle or explicitly decline it. Not
/// every engine maps every tag; resolution of an unmapped tag is an
/// [`UnsupportedTypeMapping`](crate::error::DialectError::UnsupportedTypeMapping)
/// error, never a silent substitution.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ColumnType {
    /// Globally unique identifier, typically stored as a 36-char string.
    Guid,
    /// Variable-length binary data.
    Binary,
    /// Time of day without a date component.
    Time,
    /// Calendar date.
    Date,
    /// Date and time of day.
    DateTime,
    /// Date and time with sub-second precision.
    DateTime2,
    /// Date and time with a UTC offset.
    DateTimeOffset,
    /// True/false flag.
    Boolean,
    /// 8-bit unsigned integer.
    Byte,
    /// 8-bit signed integer.
    SByte,
    /// 16-bit signed integer.
    Int16,
    /// 16-bit unsigned integer.
    UInt16,
    /// 32-bit signed integer.
    Int32,
    /// 32-bit unsigned integer.
    UInt32,
    /// 64-bit signed integer.
    Int64,
    /// 64-bit unsigned integer.
    UInt64,
    /// Single-precision floating point.
    Single,
    /// Double-precision floating point.
    Double,
    /// Exact fixed-point numeric.
    Decimal,
    /// Fixed-length single-byte character string.
    AnsiStringFixed,
    /// Variable-length single-byte character string.
    AnsiString,
    /// Fixed-length character string.
    StringFixed,
    /// Variable-length character string.
    String,
    /// XML document.
    Xml,
    /// Opaque serialized object.
    Object,
}

impl ColumnType {
    /// Every tag, in declaration order. Used to populate per-dialect type
    /// tables and to enumerate cases in tests.
    pub const ALL: [Self; 25] = [
        Self::Guid,
        Self::Binary,
        Self::Time,
        Self::Date,
        Self::DateTime,
        Self::DateTime2,
        Self::DateTimeOffset,
        Self::Boolean,
        Self::Byte,
        Self::SByte,
        Self::Int16,
        Self::UInt16,
        Self::Int32,
        Self::UInt32,
        Self::Int64,
        Self::UInt64,
        Self::Single,
        Self::Double,
        Self::Decimal,
        Self::AnsiStringFixed,
        Self::AnsiString,
        Self::StringFixed,
        Self::String,
        Self::Xml,
        Self::Object,
    ];
}

/// An engine-neutral description of one column's storage type.
///
/// Immutable value type, constructed per column by the caller. Length,
/// precision and scale are all optional; a dialect applies the ones its
/// mapping rules consult and ignores the rest.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ColumnDescriptor {
    /// The semantic type tag.
    pub column_type: ColumnType,
    /// Declared length for string and binary types.
    pub length: Option<u32>,
    /// Numeric precision. Accepted for interface uniformity; dialects with a
    /// fixed decimal width ignore it.
    pub precision: Option<u8>,
    /// Numeric scale. Same caveat as `precision`.
    pub scale: Option<u8>,
}

impl ColumnDescriptor {
    /// Creates a descriptor with no length, precision or scale.
    #[must_use]
    pub const fn new(column_type: ColumnType) -> Self {
        Self {
            column_type,
            length: None,
            precision: None,
            scale: None,
        }
    }

    /// Sets the declared length.
    #[must_use]
    pub const fn with_length(mut self, length: u32) -> Self {
        self.length = Some(length);
        self
    }

    /// Sets numeric precision and scale.
    #[must_use]
    pub const fn with_precision_scale(mut self, precision: u8, scale: u8) -> Self {
        self.precision = Some(precision);
        self.scale = Some(scale);
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_descriptor_defaults() {
        let desc = ColumnDescriptor::new(ColumnType::Int32);
        assert_eq!(desc.column_type, ColumnType::Int32);
        assert_eq!(desc.length, None);
        assert_eq!(desc.precision, None);
        assert_eq!(desc.scale, None);
    }

    #[test]
    fn test_descriptor_builders() {
        let desc = ColumnDescriptor::new(ColumnType::String).with_length(50);
        assert_eq!(desc.length, Some(50));

        let desc = ColumnDescriptor::new(ColumnType::Decimal).with_precision_scale(10, 2);
        assert_eq!(desc.precision, Some(10));
        assert_eq!(desc.scale, Some(2));
    }

    #[test]
    fn test_all_tags_are_distinct() {
        let mut seen = std::collections::HashSet::new();
        for tag in ColumnType::ALL {
            assert!(seen.insert(tag), "duplicate tag in ALL: {tag:?}");
        }
        assert_eq!(seen.len(), 25);
    }
}
