use crate::insn::Insn;

/// Reserved name of JVM instance initializers.
pub const CONSTRUCTOR_NAME: &str = "<init>";

/// A method record in the class tree.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MethodNode {
    /// Method name (`<init>` for constructors).
    pub name: String,
    /// Method descriptor, e.g. `(Ljava/lang/String;)V`.
    pub desc: String,
    /// Raw access-flag word.
    pub access: u16,
    /// Method body, in bytecode order. Empty for abstract/native methods.
    pub instructions: Vec<Insn>,
}

impl MethodNode {
    pub fn new(name: impl Into<String>, desc: impl Into<String>, access: u16) -> Self {
        Self {
            name: name.into(),
            desc: desc.into(),
            access,
            instructions: Vec::new(),
        }
    }

    /// Whether this method is an instance initializer. Constructors are
    /// always invoked via `invokespecial` regardless of visibility.
    pub fn is_constructor(&self) -> bool {
        self.name == CONSTRUCTOR_NAME
    }
}
