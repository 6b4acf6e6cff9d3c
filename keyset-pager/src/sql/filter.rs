//! Filter expression rendering.

use crate::dialect::Dialect;
use crate::filter::{CompoundFilter, Filter, FilterExpr, LogicalOp, Operator};
use crate::validate::is_valid_sql_identifier;
use crate::value::Value;

use super::SqlError;

/// Rendered fragment, its parameters and the next free placeholder index.
pub(super) type Fragment = (String, Vec<Value>, usize);

pub(super) fn build_filter_expr<D: Dialect>(
    dialect: &D,
    expr: &FilterExpr,
    start_idx: usize,
) -> Result<Fragment, SqlError> {
    match expr {
        FilterExpr::Simple(filter) => build_condition(dialect, filter, start_idx),
        FilterExpr::Compound(compound) => build_compound_filter(dialect, compound, start_idx),
    }
}

fn build_compound_filter<D: Dialect>(
    dialect: &D,
    compound: &CompoundFilter,
    start_idx: usize,
) -> Result<Fragment, SqlError> {
    let mut idx = start_idx;
    let mut all_params = Vec::new();
    let mut conditions = Vec::with_capacity(compound.filters.len());

    for filter_expr in &compound.filters {
        let (condition, params, new_idx) = build_filter_expr(dialect, filter_expr, idx)?;
        conditions.push(condition);
        all_params.extend(params);
        idx = new_idx;
    }

    let sql = match (compound.op, conditions.as_slice()) {
        (LogicalOp::And | LogicalOp::Not, []) => "1=1".to_string(),
        (LogicalOp::Or, []) => "1=0".to_string(),
        (LogicalOp::And | LogicalOp::Or, [single]) => single.clone(),
        (LogicalOp::And, _) => format!("({})", conditions.join(" AND ")),
        (LogicalOp::Or, _) => format!("({})", conditions.join(" OR ")),
        (LogicalOp::Not, _) => format!("NOT ({})", conditions.join(" AND ")),
    };

    Ok((sql, all_params, idx))
}

fn build_condition<D: Dialect>(
    dialect: &D,
    filter: &Filter,
    idx: usize,
) -> Result<Fragment, SqlError> {
    let field = filter.field.as_str();
    if !is_valid_sql_identifier(field) {
        return Err(SqlError::InvalidIdentifier(field.to_string()));
    }

    let fragment = match (filter.op, &filter.value) {
        (Operator::Eq, Value::Null) => (format!("{field} IS NULL"), vec![], idx),
        (Operator::Ne, Value::Null) => (format!("{field} IS NOT NULL"), vec![], idx),

        (Operator::In, Value::Array(values)) => {
            let (sql, params) = dialect.in_clause(field, values, idx);
            let new_idx = idx + params.len();
            (sql, params, new_idx)
        },
        (Operator::NotIn, Value::Array(values)) => {
            let (sql, params) = dialect.not_in_clause(field, values, idx);
            let new_idx = idx + params.len();
            (sql, params, new_idx)
        },
        (Operator::In | Operator::NotIn, _) => {
            return Err(SqlError::ExpectedArray(field.to_string()));
        },

        (op, value) => {
            let sql = format!("{field} {} {}", op.as_sql(), dialect.param(idx));
            (sql, vec![value.clone()], idx + 1)
        },
    };
    Ok(fragment)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::dialect::{Postgres, Sqlite};
    use crate::filter::{and, not, or, simple};

    #[test]
    fn test_null_comparisons() {
        let (sql, params, idx) =
            build_filter_expr(&Postgres, &simple("deleted_at", Operator::Eq, Value::Null), 1)
                .unwrap();
        assert_eq!(sql, "deleted_at IS NULL");
        assert!(params.is_empty());
        assert_eq!(idx, 1);

        let (sql, ..) =
            build_filter_expr(&Sqlite, &simple("deleted_at", Operator::Ne, Value::Null), 1)
                .unwrap();
        assert_eq!(sql, "deleted_at IS NOT NULL");
    }

    #[test]
    fn test_tie_break_shape() {
        let expr = or(vec![
            simple("score", Operator::Gt, 20i64),
            and(vec![
                simple("score", Operator::Eq, 20i64),
                simple("id", Operator::Gt, 2i64),
            ]),
        ]);
        let (sql, params, idx) = build_filter_expr(&Postgres, &expr, 1).unwrap();

        assert_eq!(sql, "(score > $1 OR (score = $2 AND id > $3))");
        assert_eq!(params, vec![Value::Int(20), Value::Int(20), Value::Int(2)]);
        assert_eq!(idx, 4);
    }

    #[test]
    fn test_in_advances_placeholders() {
        let expr = and(vec![
            simple("id", Operator::In, vec![1i64, 2, 3]),
            simple("score", Operator::Lt, 5i64),
        ]);

        let (sql, _, idx) = build_filter_expr(&Sqlite, &expr, 1).unwrap();
        assert_eq!(sql, "(id IN (?1, ?2, ?3) AND score < ?4)");
        assert_eq!(idx, 5);

        let (sql, _, idx) = build_filter_expr(&Postgres, &expr, 1).unwrap();
        assert_eq!(sql, "(id = ANY($1) AND score < $2)");
        assert_eq!(idx, 3);
    }

    #[test]
    fn test_not_and_empty_compounds() {
        let (sql, ..) =
            build_filter_expr(&Sqlite, &not(simple("draft", Operator::Eq, true)), 1).unwrap();
        assert_eq!(sql, "NOT (draft = ?1)");

        assert_eq!(build_filter_expr(&Sqlite, &and(vec![]), 1).unwrap().0, "1=1");
        assert_eq!(build_filter_expr(&Sqlite, &or(vec![]), 1).unwrap().0, "1=0");
    }

    #[test]
    fn test_rejects_bad_input() {
        let err = build_filter_expr(&Postgres, &simple("id) OR (1", Operator::Eq, 1i64), 1)
            .unwrap_err();
        assert!(matches!(err, SqlError::InvalidIdentifier(_)));

        let err = build_filter_expr(&Postgres, &simple("id", Operator::In, 1i64), 1).unwrap_err();
        assert!(matches!(err, SqlError::ExpectedArray(_)));
    }
}
