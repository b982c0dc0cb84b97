//! Per-screen pipeline configuration
//!
//! A [`ListConfig`] tells the pipeline which fields a screen searches,
//! filters and date-bounds. It is the one parametrization point that lets a
//! single tested pipeline serve every list screen instead of N per-screen
//! copies.

use crate::core::record::Record;
use std::fmt;
use std::sync::Arc;

/// A named toggle with a caller-defined record predicate.
///
/// When the toggle is off, only records satisfying the predicate pass the
/// filter; when it is on, the restriction is lifted and every record passes.
/// The classic example is "show processed": off means only active records
/// are listed, on widens the list to everything.
pub struct ToggleRule<T> {
    name: String,
    predicate: Arc<dyn Fn(&T) -> bool + Send + Sync>,
}

impl<T> ToggleRule<T> {
    pub fn new(
        name: impl Into<String>,
        predicate: impl Fn(&T) -> bool + Send + Sync + 'static,
    ) -> Self {
        Self {
            name: name.into(),
            predicate: Arc::new(predicate),
        }
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    /// Whether a record passes this rule given the toggle state
    pub fn allows(&self, record: &T, enabled: bool) -> bool {
        enabled || (self.predicate)(record)
    }
}

impl<T> Clone for ToggleRule<T> {
    fn clone(&self) -> Self {
        Self {
            name: self.name.clone(),
            predicate: Arc::clone(&self.predicate),
        }
    }
}

impl<T> fmt::Debug for ToggleRule<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ToggleRule")
            .field("name", &self.name)
            .finish_non_exhaustive()
    }
}

/// Configuration of the list-query pipeline for one screen
#[derive(Debug, Clone)]
pub struct ListConfig<T> {
    /// Screen name, used in log events
    pub screen: String,

    /// String fields matched by the free-text query
    pub searchable_fields: Vec<String>,

    /// Fields offered as multi-select category filters
    pub category_fields: Vec<String>,

    /// Field the date-range criterion applies to
    pub date_field: Option<String>,

    /// Items per page
    pub page_size: usize,

    /// Toggle rules registered for this screen
    pub toggle_rules: Vec<ToggleRule<T>>,
}

impl<T: Record> ListConfig<T> {
    pub fn new(screen: impl Into<String>) -> Self {
        Self {
            screen: screen.into(),
            searchable_fields: Vec::new(),
            category_fields: Vec::new(),
            date_field: None,
            page_size: 20,
            toggle_rules: Vec::new(),
        }
    }

    pub fn with_searchable_fields(
        mut self,
        fields: impl IntoIterator<Item = impl Into<String>>,
    ) -> Self {
        self.searchable_fields = fields.into_iter().map(Into::into).collect();
        self
    }

    pub fn with_category_fields(
        mut self,
        fields: impl IntoIterator<Item = impl Into<String>>,
    ) -> Self {
        self.category_fields = fields.into_iter().map(Into::into).collect();
        self
    }

    pub fn with_date_field(mut self, field: impl Into<String>) -> Self {
        self.date_field = Some(field.into());
        self
    }

    pub fn with_page_size(mut self, page_size: usize) -> Self {
        self.page_size = page_size;
        self
    }

    pub fn with_toggle(
        mut self,
        name: impl Into<String>,
        predicate: impl Fn(&T) -> bool + Send + Sync + 'static,
    ) -> Self {
        self.toggle_rules.push(ToggleRule::new(name, predicate));
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::field::FieldValue;

    #[derive(Clone)]
    struct Item {
        id: String,
        processed: bool,
    }

    impl Record for Item {
        fn record_type() -> &'static str {
            "item"
        }

        fn id(&self) -> &str {
            &self.id
        }

        fn field_value(&self, field: &str) -> Option<FieldValue> {
            match field {
                "processed" => Some(FieldValue::Boolean(self.processed)),
                _ => None,
            }
        }

        fn field_names() -> &'static [&'static str] {
            &["id", "processed"]
        }
    }

    #[test]
    fn test_toggle_rule_semantics() {
        let rule = ToggleRule::new("show_processed", |item: &Item| !item.processed);
        let active = Item {
            id: "1".to_string(),
            processed: false,
        };
        let processed = Item {
            id: "2".to_string(),
            processed: true,
        };

        // Off: restriction enforced
        assert!(rule.allows(&active, false));
        assert!(!rule.allows(&processed, false));

        // On: restriction lifted
        assert!(rule.allows(&active, true));
        assert!(rule.allows(&processed, true));
    }

    #[test]
    fn test_builder() {
        let config = ListConfig::<Item>::new("items")
            .with_searchable_fields(["name"])
            .with_category_fields(["status"])
            .with_date_field("created_at")
            .with_page_size(5)
            .with_toggle("show_processed", |item: &Item| !item.processed);

        assert_eq!(config.screen, "items");
        assert_eq!(config.page_size, 5);
        assert_eq!(config.date_field.as_deref(), Some("created_at"));
        assert_eq!(config.toggle_rules.len(), 1);
        assert_eq!(config.toggle_rules[0].name(), "show_processed");
    }
}
