//! Field value types used as filter and sort keys

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::cmp::Ordering;
use std::fmt;

/// A polymorphic field value that can hold different types
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(untagged)]
pub enum FieldValue {
    String(String),
    Integer(i64),
    Float(f64),
    Boolean(bool),
    DateTime(DateTime<Utc>),
    Null,
}

impl FieldValue {
    /// Get the value as a string if possible
    pub fn as_string(&self) -> Option<&str> {
        match self {
            FieldValue::String(s) => Some(s),
            _ => None,
        }
    }

    /// Get the value as an integer if possible
    pub fn as_integer(&self) -> Option<i64> {
        match self {
            FieldValue::Integer(i) => Some(*i),
            _ => None,
        }
    }

    /// Get the value as a float if possible
    pub fn as_float(&self) -> Option<f64> {
        match self {
            FieldValue::Float(f) => Some(*f),
            _ => None,
        }
    }

    /// Get the value as a boolean if possible
    pub fn as_boolean(&self) -> Option<bool> {
        match self {
            FieldValue::Boolean(b) => Some(*b),
            _ => None,
        }
    }

    /// Get the value as a datetime if possible
    pub fn as_datetime(&self) -> Option<DateTime<Utc>> {
        match self {
            FieldValue::DateTime(dt) => Some(*dt),
            _ => None,
        }
    }

    /// Check if the value is null
    pub fn is_null(&self) -> bool {
        matches!(self, FieldValue::Null)
    }

    /// Total ordering used by the sort pipeline.
    ///
    /// Same-variant values compare naturally. `Integer` and `Float` compare
    /// numerically with each other. `Null` orders before everything else;
    /// any other mixed-variant pair falls back to a fixed variant rank so
    /// the ordering stays total. Float `NaN` compares equal.
    pub fn compare(&self, other: &FieldValue) -> Ordering {
        use FieldValue::*;
        match (self, other) {
            (String(a), String(b)) => a.cmp(b),
            (Integer(a), Integer(b)) => a.cmp(b),
            (Float(a), Float(b)) => a.partial_cmp(b).unwrap_or(Ordering::Equal),
            (Integer(a), Float(b)) => (*a as f64).partial_cmp(b).unwrap_or(Ordering::Equal),
            (Float(a), Integer(b)) => a.partial_cmp(&(*b as f64)).unwrap_or(Ordering::Equal),
            (Boolean(a), Boolean(b)) => a.cmp(b),
            (DateTime(a), DateTime(b)) => a.cmp(b),
            (Null, Null) => Ordering::Equal,
            _ => self.rank().cmp(&other.rank()),
        }
    }

    /// Check whether this value matches a category-selection token.
    ///
    /// Strings compare directly; other variants compare against their
    /// display form. `Null` never matches.
    pub fn matches_token(&self, token: &str) -> bool {
        match self {
            FieldValue::String(s) => s == token,
            FieldValue::Null => false,
            other => other.to_string() == token,
        }
    }

    fn rank(&self) -> u8 {
        match self {
            FieldValue::Null => 0,
            FieldValue::Boolean(_) => 1,
            FieldValue::Integer(_) | FieldValue::Float(_) => 2,
            FieldValue::String(_) => 3,
            FieldValue::DateTime(_) => 4,
        }
    }
}

impl fmt::Display for FieldValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            FieldValue::String(s) => write!(f, "{}", s),
            FieldValue::Integer(i) => write!(f, "{}", i),
            FieldValue::Float(x) => write!(f, "{}", x),
            FieldValue::Boolean(b) => write!(f, "{}", b),
            FieldValue::DateTime(dt) => write!(f, "{}", dt.to_rfc3339()),
            FieldValue::Null => Ok(()),
        }
    }
}

/// Conversion into a [`FieldValue`], implemented by every type that can
/// appear as a record field
pub trait ToFieldValue {
    fn to_field_value(&self) -> FieldValue;
}

impl ToFieldValue for String {
    fn to_field_value(&self) -> FieldValue {
        FieldValue::String(self.clone())
    }
}

impl ToFieldValue for i64 {
    fn to_field_value(&self) -> FieldValue {
        FieldValue::Integer(*self)
    }
}

impl ToFieldValue for f64 {
    fn to_field_value(&self) -> FieldValue {
        FieldValue::Float(*self)
    }
}

impl ToFieldValue for bool {
    fn to_field_value(&self) -> FieldValue {
        FieldValue::Boolean(*self)
    }
}

impl ToFieldValue for DateTime<Utc> {
    fn to_field_value(&self) -> FieldValue {
        FieldValue::DateTime(*self)
    }
}

impl<T: ToFieldValue> ToFieldValue for Option<T> {
    fn to_field_value(&self) -> FieldValue {
        match self {
            Some(value) => value.to_field_value(),
            None => FieldValue::Null,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_field_value_string() {
        let value = FieldValue::String("test".to_string());
        assert_eq!(value.as_string(), Some("test"));
        assert_eq!(value.as_integer(), None);
        assert!(!value.is_null());
    }

    #[test]
    fn test_field_value_null() {
        let value = FieldValue::Null;
        assert!(value.is_null());
        assert_eq!(value.as_string(), None);
    }

    #[test]
    fn test_compare_same_variant() {
        let a = FieldValue::String("alder".to_string());
        let b = FieldValue::String("oak".to_string());
        assert_eq!(a.compare(&b), Ordering::Less);

        let a = FieldValue::Integer(3);
        let b = FieldValue::Integer(7);
        assert_eq!(b.compare(&a), Ordering::Greater);
    }

    #[test]
    fn test_compare_numeric_cross_variant() {
        let int = FieldValue::Integer(2);
        let float = FieldValue::Float(2.5);
        assert_eq!(int.compare(&float), Ordering::Less);
        assert_eq!(float.compare(&int), Ordering::Greater);

        let equal = FieldValue::Float(2.0);
        assert_eq!(int.compare(&equal), Ordering::Equal);
    }

    #[test]
    fn test_compare_null_orders_first() {
        let null = FieldValue::Null;
        assert_eq!(null.compare(&FieldValue::Integer(0)), Ordering::Less);
        assert_eq!(
            FieldValue::String(String::new()).compare(&null),
            Ordering::Greater
        );
        assert_eq!(null.compare(&FieldValue::Null), Ordering::Equal);
    }

    #[test]
    fn test_compare_datetime() {
        let earlier = FieldValue::DateTime(DateTime::from_timestamp(1_000, 0).unwrap());
        let later = FieldValue::DateTime(DateTime::from_timestamp(2_000, 0).unwrap());
        assert_eq!(earlier.compare(&later), Ordering::Less);
    }

    #[test]
    fn test_matches_token() {
        assert!(FieldValue::String("graded".to_string()).matches_token("graded"));
        assert!(!FieldValue::String("graded".to_string()).matches_token("Graded"));
        assert!(FieldValue::Integer(4).matches_token("4"));
        assert!(FieldValue::Boolean(true).matches_token("true"));
        assert!(!FieldValue::Null.matches_token(""));
    }

    #[test]
    fn test_option_to_field_value() {
        let some: Option<i64> = Some(9);
        let none: Option<i64> = None;
        assert_eq!(some.to_field_value(), FieldValue::Integer(9));
        assert!(none.to_field_value().is_null());
    }

    #[test]
    fn test_serde_roundtrip() {
        let original = FieldValue::Integer(42);
        let json = serde_json::to_string(&original).expect("serialize should succeed");
        let restored: FieldValue =
            serde_json::from_str(&json).expect("deserialize should succeed");
        assert_eq!(original, restored);
    }
}
