//! default-naming - records generated under a fixed field naming convention.
//!
//! [`Value`] keeps its field as `foo_bar` and maps it to the `fooBar` key of a
//! JSON object through a compile-time [`FieldKey`] table.

pub mod error;
pub mod field;
pub mod lower_camel;

pub use error::ValueError;
pub use field::FieldKey;
pub use lower_camel::Value;
