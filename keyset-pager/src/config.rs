//! Paginator configuration.
//!
//! ```
//! use keyset_pager::PaginateConfig;
//!
//! let config = PaginateConfig::from_toml_str(r#"primary_key_field = "uuid""#).unwrap();
//! assert_eq!(config.primary_key_field, "uuid");
//! assert_eq!(config.method_name, "paginate");
//! ```

use serde::Deserialize;

/// Default name of the generated pagination method.
pub const DEFAULT_METHOD_NAME: &str = "paginate";

/// Default primary key field.
pub const DEFAULT_PRIMARY_KEY_FIELD: &str = "id";

/// Setup options for a paginator.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct PaginateConfig {
    /// Name the paginate operation is exposed under. `#[derive(Paginate)]`
    /// uses it as the method identifier; logs report it as `method`.
    pub method_name: String,
    /// Unique, totally ordered field used as tie-breaker.
    pub primary_key_field: String,
}

impl Default for PaginateConfig {
    fn default() -> Self {
        Self {
            method_name: DEFAULT_METHOD_NAME.to_string(),
            primary_key_field: DEFAULT_PRIMARY_KEY_FIELD.to_string(),
        }
    }
}

impl PaginateConfig {
    /// Create a config with the defaults (`paginate`, `id`).
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the method name.
    #[must_use]
    pub fn method_name(mut self, name: impl Into<String>) -> Self {
        self.method_name = name.into();
        self
    }

    /// Set the primary key field.
    #[must_use]
    pub fn primary_key_field(mut self, field: impl Into<String>) -> Self {
        self.primary_key_field = field.into();
        self
    }

    /// Parse a config from TOML; missing keys take their defaults.
    pub fn from_toml_str(s: &str) -> Result<Self, ConfigError> {
        let config: Self = toml::from_str(s)?;
        config.validate()?;
        Ok(config)
    }

    /// Reject empty names.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.method_name.trim().is_empty() {
            return Err(ConfigError::Empty("method_name"));
        }
        if self.primary_key_field.trim().is_empty() {
            return Err(ConfigError::Empty("primary_key_field"));
        }
        Ok(())
    }
}

/// Errors raised while loading a [`PaginateConfig`].
#[derive(Debug, thiserror::Error)]
#[non_exhaustive]
pub enum ConfigError {
    /// The TOML input could not be parsed.
    #[error("invalid pagination config: {0}")]
    Parse(#[from] toml::de::Error),
    /// A required name was empty.
    #[error("`{0}` must not be empty")]
    Empty(&'static str),
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let config = PaginateConfig::default();
        assert_eq!(config.method_name, "paginate");
        assert_eq!(config.primary_key_field, "id");
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_builder() {
        let config = PaginateConfig::new()
            .method_name("page_posts")
            .primary_key_field("post_id");
        assert_eq!(config.method_name, "page_posts");
        assert_eq!(config.primary_key_field, "post_id");
    }

    #[test]
    fn test_from_toml_full() {
        let config = PaginateConfig::from_toml_str(
            r#"
            method_name = "list"
            primary_key_field = "uuid"
            "#,
        )
        .unwrap();
        assert_eq!(config, PaginateConfig::new().method_name("list").primary_key_field("uuid"));
    }

    #[test]
    fn test_from_toml_empty_uses_defaults() {
        assert_eq!(PaginateConfig::from_toml_str("").unwrap(), PaginateConfig::default());
    }

    #[test]
    fn test_from_toml_rejects_unknown_and_empty() {
        assert!(matches!(
            PaginateConfig::from_toml_str("page_size = 10"),
            Err(ConfigError::Parse(_))
        ));
        assert!(matches!(
            PaginateConfig::from_toml_str(r#"primary_key_field = """#),
            Err(ConfigError::Empty("primary_key_field"))
        ));
    }
}
