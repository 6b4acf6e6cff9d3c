//! SQL rendering of a [`FetchQuery`].
//!
//! Turns the query produced by the planner into a parameterized `SELECT` for
//! stores backed by Postgres or `SQLite`. Values always travel as parameters;
//! table and field names are checked with [`is_valid_sql_identifier`] before
//! they reach the SQL text.
//!
//! ```
//! use keyset_pager::{PaginateConfig, PaginationRequest, Planner, sql};
//!
//! let request = PaginationRequest::new(20).paginate_by("created_at").desc(true);
//! let planner = Planner::new(&PaginateConfig::default(), &request).unwrap();
//! let result = sql::postgres("posts", &planner.build_query(&request)).unwrap();
//!
//! assert_eq!(
//!     result.sql,
//!     "SELECT * FROM posts ORDER BY created_at DESC, id DESC LIMIT 21"
//! );
//! ```

mod filter;

use crate::dialect::{Dialect, Postgres, Sqlite};
use crate::source::FetchQuery;
use crate::validate::is_valid_sql_identifier;
use crate::value::Value;

/// Query result with SQL string and parameters.
#[derive(Debug, Clone, PartialEq)]
#[must_use = "QueryResult must be used to execute the query"]
pub struct QueryResult {
    /// SQL text with dialect placeholders.
    pub sql: String,
    /// Parameters, in placeholder order.
    pub params: Vec<Value>,
}

/// Errors raised while rendering SQL.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[non_exhaustive]
pub enum SqlError {
    /// A table or field name is not a plain SQL identifier.
    #[error("invalid SQL identifier `{0}`")]
    InvalidIdentifier(String),
    /// `In`/`NotIn` was given a non-array operand.
    #[error("`{0}` IN/NOT IN needs an array operand")]
    ExpectedArray(String),
}

fn identifier(name: &str) -> Result<&str, SqlError> {
    if is_valid_sql_identifier(name) {
        Ok(name)
    } else {
        Err(SqlError::InvalidIdentifier(name.to_string()))
    }
}

/// Render `query` as a `SELECT` against `table`.
///
/// The projection comes from `query.attributes` (`*` when empty). `include`
/// and the raw/sub-query hints are not SQL concerns and are ignored.
pub fn select<D: Dialect>(
    dialect: &D,
    table: &str,
    query: &FetchQuery,
) -> Result<QueryResult, SqlError> {
    let table = identifier(table)?;
    let columns = if query.attributes.is_empty() {
        "*".to_string()
    } else {
        query
            .attributes
            .iter()
            .map(|a| identifier(a))
            .collect::<Result<Vec<_>, _>>()?
            .join(", ")
    };

    let mut sql = format!("SELECT {columns} FROM {table}");
    let mut params = Vec::new();

    if let Some(expr) = &query.filter {
        let (condition, filter_params, _) = filter::build_filter_expr(dialect, expr, 1)?;
        sql.push_str(" WHERE ");
        sql.push_str(&condition);
        params = filter_params;
    }

    if !query.sort.is_empty() {
        let order = query
            .sort
            .iter()
            .map(|s| Ok(format!("{} {}", identifier(&s.field)?, s.dir.as_sql())))
            .collect::<Result<Vec<_>, SqlError>>()?;
        sql.push_str(" ORDER BY ");
        sql.push_str(&order.join(", "));
    }

    sql.push_str(&format!(" LIMIT {}", query.limit));

    Ok(QueryResult { sql, params })
}

/// Render for Postgres (`$1`, `$2`, ...).
pub fn postgres(table: &str, query: &FetchQuery) -> Result<QueryResult, SqlError> {
    select(&Postgres, table, query)
}

/// Render for `SQLite` (`?1`, `?2`, ...).
pub fn sqlite(table: &str, query: &FetchQuery) -> Result<QueryResult, SqlError> {
    select(&Sqlite, table, query)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::PaginateConfig;
    use crate::filter::{Operator, simple};
    use crate::pagination::{Cursor, Planner};
    use crate::request::PaginationRequest;

    fn plan(request: &PaginationRequest) -> FetchQuery {
        Planner::new(&PaginateConfig::default(), request)
            .unwrap()
            .build_query(request)
    }

    #[test]
    fn test_first_page() {
        let query = plan(&PaginationRequest::new(10));
        let result = postgres("posts", &query).unwrap();

        insta::assert_snapshot!(result.sql, @"SELECT * FROM posts ORDER BY id ASC LIMIT 11");
        assert!(result.params.is_empty());
    }

    #[test]
    fn test_after_cursor_with_base_filter() {
        let after = Cursor::Composite(Value::Int(20), Value::Int(2)).encode();
        let query = plan(
            &PaginationRequest::new(2)
                .paginate_by("score")
                .filter(simple("published", Operator::Eq, true))
                .attributes(&["title"])
                .after(after),
        );

        let result = postgres("posts", &query).unwrap();
        insta::assert_snapshot!(
            result.sql,
            @"SELECT title, score, id FROM posts WHERE ((score > $1 OR (score = $2 AND id > $3)) AND published = $4) ORDER BY score ASC, id ASC LIMIT 3"
        );
        assert_eq!(
            result.params,
            vec![Value::Int(20), Value::Int(20), Value::Int(2), Value::Bool(true)]
        );
    }

    #[test]
    fn test_before_cursor_sqlite() {
        let before = Cursor::Single(Value::Int(40)).encode();
        let query = plan(&PaginationRequest::new(5).desc(true).before(before));

        let result = sqlite("posts", &query).unwrap();
        insta::assert_snapshot!(
            result.sql,
            @"SELECT * FROM posts WHERE id > ?1 ORDER BY id ASC LIMIT 6"
        );
        assert_eq!(result.params, vec![Value::Int(40)]);
    }

    #[test]
    fn test_rejects_unsafe_names() {
        let query = plan(&PaginationRequest::new(5));
        assert_eq!(
            postgres("posts; DROP TABLE posts", &query).unwrap_err(),
            SqlError::InvalidIdentifier("posts; DROP TABLE posts".into())
        );

        let query = plan(&PaginationRequest::new(5).paginate_by("score desc"));
        assert!(matches!(
            sqlite("posts", &query),
            Err(SqlError::InvalidIdentifier(_))
        ));
    }
}
