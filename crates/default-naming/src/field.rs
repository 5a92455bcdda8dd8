//! Compile-time field-to-key tables.

/// One record field and the key it is stored under on the wire.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct FieldKey {
    /// Internal field name.
    pub name: &'static str,
    /// External object key.
    pub key: &'static str,
}

impl FieldKey {
    pub const fn new(name: &'static str, key: &'static str) -> Self {
        Self { name, key }
    }
}
