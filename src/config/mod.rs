//! Screen configuration loading and management
//!
//! List screens are declared in YAML: which fields the free-text search
//! covers, which fields offer category filters, which date field the range
//! filter binds to, and the page size. Toggle rules carry code (predicates)
//! and are attached in code after a [`ScreenConfig`] is turned into a
//! [`ListConfig`].

use crate::core::error::{ConfigError, GraderResult};
use crate::core::record::Record;
use crate::query::config::ListConfig;
use serde::{Deserialize, Serialize};
use std::collections::HashSet;

fn default_page_size() -> usize {
    20
}

/// Declarative configuration for one list screen
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ScreenConfig {
    /// Screen name (e.g., "orders", "claims")
    pub screen: String,

    /// String fields matched by the free-text query
    #[serde(default)]
    pub searchable_fields: Vec<String>,

    /// Fields offered as multi-select category filters
    #[serde(default)]
    pub category_fields: Vec<String>,

    /// Field the date-range filter applies to
    #[serde(default)]
    pub date_field: Option<String>,

    /// Items per page
    #[serde(default = "default_page_size")]
    pub page_size: usize,
}

impl ScreenConfig {
    /// Check that every field this screen references resolves on the record
    /// type driving it.
    ///
    /// [`ScreensConfig::validate`] cannot do this itself: the YAML does not
    /// say which record type a screen lists, so field references are checked
    /// here, where the type is known.
    pub fn validate_for<T: Record>(&self) -> GraderResult<()> {
        let known = T::field_names();
        let referenced = self
            .searchable_fields
            .iter()
            .chain(self.category_fields.iter())
            .chain(self.date_field.iter());
        for field in referenced {
            if !known.contains(&field.as_str()) {
                return Err(ConfigError::UnknownField {
                    screen: self.screen.clone(),
                    field: field.clone(),
                }
                .into());
            }
        }
        Ok(())
    }

    /// Build the pipeline configuration for a record type.
    ///
    /// Field references are not re-checked here; call
    /// [`validate_for`](ScreenConfig::validate_for) first when the
    /// configuration comes from untrusted YAML. Toggle rules are code, not
    /// data; attach them afterwards with [`ListConfig::with_toggle`].
    pub fn to_list_config<T: Record>(&self) -> ListConfig<T> {
        let mut config = ListConfig::new(self.screen.clone())
            .with_searchable_fields(self.searchable_fields.iter().cloned())
            .with_category_fields(self.category_fields.iter().cloned())
            .with_page_size(self.page_size);
        config.date_field = self.date_field.clone();
        config
    }
}

/// Complete configuration for the dashboard's list screens
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ScreensConfig {
    /// List of screen configurations
    pub screens: Vec<ScreenConfig>,
}

impl ScreensConfig {
    /// Load configuration from a YAML file
    pub fn from_yaml_file(path: &str) -> GraderResult<Self> {
        if !std::path::Path::new(path).exists() {
            return Err(ConfigError::FileNotFound {
                path: path.to_string(),
            }
            .into());
        }
        let content = std::fs::read_to_string(path)?;
        let config: Self = serde_yaml::from_str(&content).map_err(|e| ConfigError::ParseError {
            file: Some(path.to_string()),
            message: e.to_string(),
        })?;
        config.validate()?;
        Ok(config)
    }

    /// Load configuration from a YAML string
    pub fn from_yaml_str(yaml: &str) -> GraderResult<Self> {
        let config: Self = serde_yaml::from_str(yaml)?;
        config.validate()?;
        Ok(config)
    }

    /// Find a screen by name
    pub fn screen(&self, name: &str) -> Option<&ScreenConfig> {
        self.screens.iter().find(|s| s.screen == name)
    }

    /// Check type-independent semantic constraints: unique screen names and
    /// non-zero page sizes. Field references need the record type and are
    /// checked per screen by [`ScreenConfig::validate_for`].
    pub fn validate(&self) -> GraderResult<()> {
        let mut seen = HashSet::new();
        for screen in &self.screens {
            if !seen.insert(screen.screen.as_str()) {
                return Err(ConfigError::DuplicateScreen {
                    screen: screen.screen.clone(),
                }
                .into());
            }
            if screen.page_size == 0 {
                return Err(ConfigError::InvalidValue {
                    field: format!("{}.page_size", screen.screen),
                    value: "0".to_string(),
                    message: "must be at least 1".to_string(),
                }
                .into());
            }
        }
        Ok(())
    }

    /// The four stock dashboard screens
    pub fn default_config() -> Self {
        Self {
            screens: vec![
                ScreenConfig {
                    screen: "orders".to_string(),
                    searchable_fields: vec![
                        "order_number".to_string(),
                        "customer".to_string(),
                        "species".to_string(),
                    ],
                    category_fields: vec!["status".to_string(), "species".to_string()],
                    date_field: Some("created_at".to_string()),
                    page_size: 10,
                },
                ScreenConfig {
                    screen: "boards".to_string(),
                    searchable_fields: vec!["batch_id".to_string(), "species".to_string()],
                    category_fields: vec!["grade".to_string(), "status".to_string()],
                    date_field: Some("scanned_at".to_string()),
                    page_size: 25,
                },
                ScreenConfig {
                    screen: "claims".to_string(),
                    searchable_fields: vec![
                        "claim_number".to_string(),
                        "customer".to_string(),
                        "description".to_string(),
                    ],
                    category_fields: vec!["status".to_string()],
                    date_field: Some("filed_at".to_string()),
                    page_size: 10,
                },
                ScreenConfig {
                    screen: "holidays".to_string(),
                    searchable_fields: vec!["name".to_string()],
                    category_fields: vec!["region".to_string()],
                    date_field: Some("date".to_string()),
                    page_size: 20,
                },
            ],
        }
    }
}
