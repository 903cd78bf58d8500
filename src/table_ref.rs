//! Schema-qualified table references.

use std::fmt;

/// A `schema.table` pair read from an input list.
///
/// Both parts are trimmed and non-empty. Ordering is plain string ordering on
/// `(schema, table)`, but callers keep the input order.
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct TableRef {
    pub schema: String,
    pub table: String,
}

impl TableRef {
    /// Build a reference from already-validated parts.
    pub fn new(schema: impl Into<String>, table: impl Into<String>) -> Self {
        Self {
            schema: schema.into(),
            table: table.into(),
        }
    }
}

impl fmt::Display for TableRef {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}.{}", self.schema, self.table)
    }
}

impl From<(&str, &str)> for TableRef {
    fn from((schema, table): (&str, &str)) -> Self {
        Self::new(schema, table)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_display_is_qualified_name() {
        let t = TableRef::new("FINANCE_DW", "TGL_ACCOUNT_DIM");
        assert_eq!(t.to_string(), "FINANCE_DW.TGL_ACCOUNT_DIM");
    }

    #[test]
    fn test_ordering_is_schema_then_table() {
        let a = TableRef::from(("a", "z"));
        let b = TableRef::from(("b", "a"));
        assert!(a < b);
        assert!(TableRef::from(("a", "a")) < a);
    }
}
