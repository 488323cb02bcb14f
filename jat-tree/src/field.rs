/// A field record in the class tree.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FieldNode {
    /// Field name.
    pub name: String,
    /// Field descriptor, e.g. `I` or `Ljava/lang/String;`.
    pub desc: String,
    /// Raw access-flag word.
    pub access: u16,
}

impl FieldNode {
    pub fn new(name: impl Into<String>, desc: impl Into<String>, access: u16) -> Self {
        Self {
            name: name.into(),
            desc: desc.into(),
            access,
        }
    }
}
