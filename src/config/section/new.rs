//! `[new]` section configuration.
//!
//! ```toml
//! [new]
//! collection = "blog"
//! categories = ["Development", "Business", "Speaking", "Personal"]
//! ```

use serde::{Deserialize, Serialize};

use crate::config::{ConfigDiagnostics, FieldPath};

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct NewConfig {
    /// Collection new posts are written to.
    pub collection: String,
    /// Allowed categories. The first is the default.
    pub categories: Vec<String>,
}

impl Default for NewConfig {
    fn default() -> Self {
        Self {
            collection: "blog".into(),
            categories: ["Development", "Business", "Speaking", "Personal"]
                .map(String::from)
                .to_vec(),
        }
    }
}

impl NewConfig {
    pub const COLLECTION: FieldPath = FieldPath::new("new.collection");
    pub const CATEGORIES: FieldPath = FieldPath::new("new.categories");

    /// Resolve a user-supplied category to its configured spelling.
    ///
    /// `None` picks the default category.
    pub fn resolve_category(&self, requested: Option<&str>) -> Option<&str> {
        match requested {
            None => self.categories.first().map(String::as_str),
            Some(name) => self
                .categories
                .iter()
                .find(|c| c.eq_ignore_ascii_case(name.trim()))
                .map(String::as_str),
        }
    }

    pub fn validate(&self, collections: &[String], diag: &mut ConfigDiagnostics) {
        if !collections.iter().any(|c| *c == self.collection) {
            diag.error_with_hint(
                Self::COLLECTION,
                format!("`{}` is not one of `index.collections`", self.collection),
                format!("add \"{}\" to `index.collections`", self.collection),
            );
        }
        if self.categories.is_empty() {
            diag.error(Self::CATEGORIES, "at least one category is required");
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::test_parse_config;

    #[test]
    fn test_new_config_defaults() {
        let config = test_parse_config("");
        assert_eq!(config.new.collection, "blog");
        assert_eq!(
            config.new.categories,
            ["Development", "Business", "Speaking", "Personal"]
        );
    }

    #[test]
    fn test_resolve_category() {
        let new = NewConfig::default();
        assert_eq!(new.resolve_category(None), Some("Development"));
        assert_eq!(new.resolve_category(Some("speaking")), Some("Speaking"));
        assert_eq!(new.resolve_category(Some(" BUSINESS ")), Some("Business"));
        assert_eq!(new.resolve_category(Some("Cooking")), None);
    }

    #[test]
    fn test_collection_must_be_indexed() {
        let new = NewConfig {
            collection: "notes".into(),
            categories: Vec::new(),
        };
        let mut diag = ConfigDiagnostics::new();
        new.validate(&["blog".into(), "docs".into()], &mut diag);

        let fields: Vec<_> = diag.errors().iter().map(|d| d.field).collect();
        assert_eq!(fields, [NewConfig::COLLECTION, NewConfig::CATEGORIES]);
    }
}
