//! Filter predicates and sort specifications handed to a data source.
//!
//! Filters are plain data. A store either translates them into its own query
//! language (see [`crate::sql`]) or evaluates them row by row with
//! [`FilterExpr::matches`].

use std::cmp::Ordering;

use crate::record::Record;
use crate::value::Value;

/// Comparison operators.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Operator {
    /// Equal: `=`
    Eq,
    /// Not equal: `!=`
    Ne,
    /// Greater than: `>`
    Gt,
    /// Greater than or equal: `>=`
    Gte,
    /// Less than: `<`
    Lt,
    /// Less than or equal: `<=`
    Lte,
    /// In array: `IN`
    In,
    /// Not in array: `NOT IN`
    NotIn,
}

impl Operator {
    /// SQL spelling of the operator.
    #[must_use]
    pub const fn as_sql(self) -> &'static str {
        match self {
            Self::Eq => "=",
            Self::Ne => "!=",
            Self::Gt => ">",
            Self::Gte => ">=",
            Self::Lt => "<",
            Self::Lte => "<=",
            Self::In => "IN",
            Self::NotIn => "NOT IN",
        }
    }
}

/// Logical operators for compound filters.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LogicalOp {
    /// All conditions must match: `AND`
    And,
    /// At least one condition must match: `OR`
    Or,
    /// Negate the condition: `NOT`
    Not,
}

/// A single field comparison.
#[derive(Debug, Clone, PartialEq)]
pub struct Filter {
    pub field: String,
    pub op: Operator,
    pub value: Value,
}

/// A compound filter combining multiple expressions with a logical operator.
#[derive(Debug, Clone, PartialEq)]
pub struct CompoundFilter {
    pub op: LogicalOp,
    pub filters: Vec<FilterExpr>,
}

impl CompoundFilter {
    /// Create an AND compound filter.
    #[must_use]
    pub const fn and(filters: Vec<FilterExpr>) -> Self {
        Self {
            op: LogicalOp::And,
            filters,
        }
    }

    /// Create an OR compound filter.
    #[must_use]
    pub const fn or(filters: Vec<FilterExpr>) -> Self {
        Self {
            op: LogicalOp::Or,
            filters,
        }
    }

    /// Create a NOT compound filter (wraps a single filter).
    #[must_use]
    pub fn not(filter: FilterExpr) -> Self {
        Self {
            op: LogicalOp::Not,
            filters: vec![filter],
        }
    }
}

/// A filter expression that can be simple or compound.
#[derive(Debug, Clone, PartialEq)]
pub enum FilterExpr {
    /// A simple field comparison.
    Simple(Filter),
    /// A compound filter with logical operator.
    Compound(CompoundFilter),
}

impl FilterExpr {
    /// Evaluate the expression against a row.
    ///
    /// Comparisons involving `Null`, a missing field, or values of different
    /// kinds are false, as in SQL. `NOT` of such a comparison is true, which
    /// differs from SQL's three-valued logic; stores needing exact SQL
    /// semantics should render the filter instead.
    pub fn matches<R: Record + ?Sized>(&self, row: &R) -> bool {
        match self {
            Self::Simple(filter) => filter.matches(row),
            Self::Compound(compound) => match compound.op {
                LogicalOp::And => compound.filters.iter().all(|f| f.matches(row)),
                LogicalOp::Or => compound.filters.iter().any(|f| f.matches(row)),
                LogicalOp::Not => !compound.filters.iter().all(|f| f.matches(row)),
            },
        }
    }
}

impl Filter {
    /// Evaluate this comparison against a row.
    pub fn matches<R: Record + ?Sized>(&self, row: &R) -> bool {
        let Some(actual) = row.field(&self.field) else {
            return false;
        };

        match (self.op, &self.value) {
            (Operator::In, Value::Array(items)) => items
                .iter()
                .any(|item| actual.compare(item) == Some(Ordering::Equal)),
            (Operator::NotIn, Value::Array(items)) => {
                !actual.is_null()
                    && items
                        .iter()
                        .all(|item| actual.compare(item).is_some_and(Ordering::is_ne))
            },
            (Operator::In | Operator::NotIn, _) => false,
            (op, expected) => {
                let Some(ord) = actual.compare(expected) else {
                    return false;
                };
                match op {
                    Operator::Eq => ord.is_eq(),
                    Operator::Ne => ord.is_ne(),
                    Operator::Gt => ord.is_gt(),
                    Operator::Gte => ord.is_ge(),
                    Operator::Lt => ord.is_lt(),
                    Operator::Lte => ord.is_le(),
                    Operator::In | Operator::NotIn => false,
                }
            },
        }
    }
}

/// Sort direction.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum SortDir {
    /// Smallest first.
    #[default]
    Asc,
    /// Largest first.
    Desc,
}

impl SortDir {
    /// SQL keyword for this direction.
    #[must_use]
    pub const fn as_sql(self) -> &'static str {
        match self {
            Self::Asc => "ASC",
            Self::Desc => "DESC",
        }
    }
}

/// Sort field with direction.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SortField {
    /// Field to sort on.
    pub field: String,
    /// Direction.
    pub dir: SortDir,
}

impl SortField {
    /// Create a new sort field.
    pub fn new(field: impl Into<String>, dir: SortDir) -> Self {
        Self {
            field: field.into(),
            dir,
        }
    }

    /// Compare two rows on this field, honoring the direction.
    ///
    /// Incomparable values (missing fields, `Null`, mixed kinds) compare equal
    /// so that a stable sort leaves them in their original order.
    pub fn compare_rows<R: Record + ?Sized>(&self, a: &R, b: &R) -> Ordering {
        let ord = match (a.field(&self.field), b.field(&self.field)) {
            (Some(x), Some(y)) => x.compare(&y).unwrap_or(Ordering::Equal),
            _ => Ordering::Equal,
        };
        match self.dir {
            SortDir::Asc => ord,
            SortDir::Desc => ord.reverse(),
        }
    }
}

/// Helper function to create a simple filter expression.
pub fn simple(field: impl Into<String>, op: Operator, value: impl Into<Value>) -> FilterExpr {
    FilterExpr::Simple(Filter {
        field: field.into(),
        op,
        value: value.into(),
    })
}

/// Helper function to create an AND compound filter.
#[must_use]
pub const fn and(filters: Vec<FilterExpr>) -> FilterExpr {
    FilterExpr::Compound(CompoundFilter::and(filters))
}

/// Helper function to create an OR compound filter.
#[must_use]
pub const fn or(filters: Vec<FilterExpr>) -> FilterExpr {
    FilterExpr::Compound(CompoundFilter::or(filters))
}

/// Helper function to create a NOT filter.
#[must_use]
pub fn not(filter: FilterExpr) -> FilterExpr {
    FilterExpr::Compound(CompoundFilter::not(filter))
}
