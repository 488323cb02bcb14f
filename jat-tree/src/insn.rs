//! Instruction subset relevant to dispatch repair.
//!
//! Only invocation instructions are modeled structurally; everything
//! else is opaque to the access transform and carries just its opcode.

/// How an invocation instruction resolves its target at runtime.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum InvokeKind {
    /// `invokespecial` — non-virtual binding: constructors, super calls,
    /// private methods.
    Special,
    /// `invokevirtual` — virtual dispatch through the receiver class.
    Virtual,
    /// `invokestatic` — no receiver.
    Static,
    /// `invokeinterface` — virtual dispatch through an interface.
    Interface,
}

impl InvokeKind {
    /// The JVM opcode byte for this dispatch kind.
    pub fn opcode(self) -> u8 {
        match self {
            InvokeKind::Virtual => 0xb6,
            InvokeKind::Special => 0xb7,
            InvokeKind::Static => 0xb8,
            InvokeKind::Interface => 0xb9,
        }
    }
}

/// An invocation instruction with a mutable dispatch kind.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MethodInsn {
    /// Current dispatch kind; rewritten in place by the retarget pass.
    pub kind: InvokeKind,
    /// Internal name of the class owning the target method.
    pub owner: String,
    /// Target method name.
    pub name: String,
    /// Target method descriptor, e.g. `(I)V`.
    pub desc: String,
}

impl MethodInsn {
    pub fn new(
        kind: InvokeKind,
        owner: impl Into<String>,
        name: impl Into<String>,
        desc: impl Into<String>,
    ) -> Self {
        Self {
            kind,
            owner: owner.into(),
            name: name.into(),
            desc: desc.into(),
        }
    }
}

/// A single instruction in a method body.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Insn {
    /// An invocation instruction.
    Invoke(MethodInsn),
    /// Any other instruction, identified only by its opcode byte.
    Other(u8),
}

impl Insn {
    /// The invocation payload, if this is an invocation instruction.
    pub fn as_invoke(&self) -> Option<&MethodInsn> {
        match self {
            Insn::Invoke(m) => Some(m),
            Insn::Other(_) => None,
        }
    }
}
