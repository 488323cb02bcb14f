use crate::field::FieldNode;
use crate::method::MethodNode;

/// A mutable class record: the unit a transform operates on.
///
/// Members keep declaration order; rule matching depends on it
/// (first structural match wins).
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ClassNode {
    /// Internal class name, e.g. `com/example/Foo`.
    pub name: String,
    /// Raw access-flag word of the class itself.
    pub access: u16,
    /// Fields in declaration order.
    pub fields: Vec<FieldNode>,
    /// Methods in declaration order.
    pub methods: Vec<MethodNode>,
}

impl ClassNode {
    pub fn new(name: impl Into<String>, access: u16) -> Self {
        Self {
            name: name.into(),
            access,
            fields: Vec::new(),
            methods: Vec::new(),
        }
    }
}
