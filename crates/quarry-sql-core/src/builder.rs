//! In-progress SQL statement assembly.
//!
//! The builder holds the pieces of one statement while a
//! [`Dialect`](crate::dialect::Dialect) rewrites the engine-specific parts.
//! It performs no validation of its own: paging arguments, identifiers and
//! clause text are taken as given.

use tracing::debug;

/// A SQL statement under construction.
///
/// Two mutable slots matter to dialects: the *selector* (the statement text
/// accumulated so far, typically `SELECT ... FROM ...`) and the *trail* (a
/// clause appended after everything else, such as an OFFSET/FETCH clause).
#[derive(Debug, Clone, Default)]
pub struct SqlBuilder {
    selector: String,
    trail: String,
}

impl SqlBuilder {
    /// Creates an empty builder.
    #[must_use]
    pub const fn new() -> Self {
        Self {
            selector: String::new(),
            trail: String::new(),
        }
    }

    /// Creates a builder whose selector is already populated.
    #[must_use]
    pub fn with_selector(selector: impl Into<String>) -> Self {
        Self {
            selector: selector.into(),
            trail: String::new(),
        }
    }

    /// Returns the current selector text.
    #[must_use]
    pub fn selector(&self) -> &str {
        &self.selector
    }

    /// Replaces the selector text.
    pub fn set_selector(&mut self, selector: impl Into<String>) {
        self.selector = selector.into();
    }

    /// Returns the current trailing clause. Empty when no trail is set.
    #[must_use]
    pub fn trail(&self) -> &str {
        &self.trail
    }

    /// Replaces the trailing clause.
    pub fn set_trail(&mut self, trail: impl Into<String>) {
        self.trail = trail.into();
    }

    /// Flattens the statement into its final SQL text.
    #[must_use]
    pub fn to_sql(&self) -> String {
        let sql = if self.trail.is_empty() {
            self.selector.trim().to_string()
        } else {
            format!("{} {}", self.selector.trim(), self.trail)
        };
        debug!(sql = %sql, "assembled statement");
        sql
    }
}
