//! Identifier checks for rendered SQL.

/// Maximum length for SQL identifiers (`PostgreSQL` limit is 63).
const MAX_IDENTIFIER_LENGTH: usize = 63;

/// Whether `s` can be spliced into SQL as a table or column name.
///
/// Accepts ASCII letters, digits and underscores, not starting with a digit,
/// 1 to 63 characters long. Quotes, dots, whitespace and comment markers are
/// all rejected, which keeps caller-chosen field names out of the SQL text.
///
/// ```
/// use keyset_pager::is_valid_sql_identifier;
///
/// assert!(is_valid_sql_identifier("created_at"));
/// assert!(!is_valid_sql_identifier("score; DROP TABLE posts"));
/// ```
#[inline]
#[must_use]
pub fn is_valid_sql_identifier(s: &str) -> bool {
    if s.is_empty() || s.len() > MAX_IDENTIFIER_LENGTH {
        return false;
    }

    let mut chars = s.chars();
    match chars.next() {
        Some(c) if c.is_ascii_alphabetic() || c == '_' => {},
        _ => return false,
    }
    chars.all(|c| c.is_ascii_alphanumeric() || c == '_')
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_valid_identifiers() {
        for ident in ["id", "score", "_hidden", "Post2", "created_at"] {
            assert!(is_valid_sql_identifier(ident), "{ident}");
        }
    }

    #[test]
    fn test_invalid_identifiers() {
        for ident in [
            "",
            "1st",
            "user-name",
            "posts.id",
            "a b",
            "id'",
            "id\"",
            "id`",
            "score--",
            "score/*",
            "id; DROP TABLE posts",
            "naïve",
        ] {
            assert!(!is_valid_sql_identifier(ident), "{ident}");
        }
    }

    #[test]
    fn test_length_limit() {
        assert!(is_valid_sql_identifier(&"a".repeat(63)));
        assert!(!is_valid_sql_identifier(&"a".repeat(64)));
    }
}
