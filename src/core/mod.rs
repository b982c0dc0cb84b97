//! Core module containing fundamental traits and types

pub mod error;
pub mod field;
pub mod record;

pub use error::{ConfigError, GraderError, GraderResult};
pub use field::{FieldValue, ToFieldValue};
pub use record::Record;
