//! Macros for reducing boilerplate when defining records
//!
//! Every list screen works with a record type that differs only in its field
//! set; the macro generates the struct, a constructor, and the field-dispatch
//! `Record` implementation.

/// Create a record type with an automatic [`Record`](crate::core::Record)
/// implementation.
///
/// # Example
///
/// ```rust,ignore
/// use grader::impl_record_entity;
///
/// impl_record_entity!(
///     Shift,
///     "shift",
///     {
///         crew: String,
///         starts_at: ::chrono::DateTime<::chrono::Utc>,
///     }
/// );
///
/// let shift = Shift::new("SH-1", "night crew".to_string(), starts_at);
/// assert_eq!(shift.field_value("crew").unwrap().as_string(), Some("night crew"));
/// ```
#[macro_export]
macro_rules! impl_record_entity {
    (
        $type:ident,
        $type_name:expr,
        {
            $( $field:ident : $field_ty:ty ),* $(,)?
        }
    ) => {
        #[derive(Debug, Clone, PartialEq, ::serde::Serialize, ::serde::Deserialize)]
        pub struct $type {
            /// Stable unique identifier for this record
            pub id: String,

            $( pub $field : $field_ty, )*
        }

        impl $type {
            pub fn new(id: impl Into<String>, $( $field : $field_ty, )*) -> Self {
                Self {
                    id: id.into(),
                    $( $field, )*
                }
            }
        }

        impl $crate::core::record::Record for $type {
            fn record_type() -> &'static str {
                $type_name
            }

            fn id(&self) -> &str {
                &self.id
            }

            fn field_value(&self, field: &str) -> Option<$crate::core::field::FieldValue> {
                match field {
                    "id" => Some($crate::core::field::FieldValue::String(self.id.clone())),
                    $(
                        stringify!($field) => Some(
                            $crate::core::field::ToFieldValue::to_field_value(&self.$field),
                        ),
                    )*
                    _ => None,
                }
            }

            fn field_names() -> &'static [&'static str] {
                &["id", $( stringify!($field), )*]
            }
        }
    };
}
