//! `[validate]` section configuration.
//!
//! Description length thresholds (in characters) and image reference checks
//! for `blogdex validate`.
//!
//! ```toml
//! [validate]
//! min_length = 100       # Error below this
//! recommended_min = 120  # Warning below this
//! recommended_max = 160  # Warning above this
//!
//! [validate.images]
//! enable = true          # Check ![alt](path) references
//! public = "public"      # Where local image paths resolve, relative to project root
//! ```

use serde::{Deserialize, Serialize};
use std::path::PathBuf;

use crate::config::{ConfigDiagnostics, FieldPath};

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct ValidateConfig {
    pub min_length: usize,
    pub recommended_min: usize,
    pub recommended_max: usize,
    pub images: ImagesConfig,
}

impl Default for ValidateConfig {
    fn default() -> Self {
        Self {
            min_length: 100,
            recommended_min: 120,
            recommended_max: 160,
            images: ImagesConfig::default(),
        }
    }
}

/// `[validate.images]`
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct ImagesConfig {
    pub enable: bool,
    /// Static files directory. `/img/a.png` resolves to `{public}/img/a.png`.
    pub public: PathBuf,
}

impl Default for ImagesConfig {
    fn default() -> Self {
        Self {
            enable: true,
            public: "public".into(),
        }
    }
}

impl ValidateConfig {
    pub const RECOMMENDED_MIN: FieldPath = FieldPath::new("validate.recommended_min");
    pub const RECOMMENDED_MAX: FieldPath = FieldPath::new("validate.recommended_max");

    pub fn validate(&self, diag: &mut ConfigDiagnostics) {
        if self.recommended_min < self.min_length {
            diag.error_with_hint(
                Self::RECOMMENDED_MIN,
                format!(
                    "{} is below `validate.min_length` ({})",
                    self.recommended_min, self.min_length
                ),
                "thresholds must satisfy min_length <= recommended_min <= recommended_max",
            );
        }
        if self.recommended_max < self.recommended_min {
            diag.error(
                Self::RECOMMENDED_MAX,
                format!(
                    "{} is below `validate.recommended_min` ({})",
                    self.recommended_max, self.recommended_min
                ),
            );
        }
    }
}
