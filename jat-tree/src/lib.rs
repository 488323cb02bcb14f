//! Mutable class-tree model for JVM access transformation.
//!
//! This crate provides the structured, in-memory representation a
//! transform pass mutates: classes, methods, fields, and the
//! invocation-instruction subset needed for dispatch repair. It never
//! touches the binary class-file format; parsing and serialization
//! belong to the surrounding pipeline.

pub mod class;
pub mod field;
pub mod flags;
pub mod insn;
pub mod method;

pub use class::ClassNode;
pub use field::FieldNode;
pub use insn::{Insn, InvokeKind, MethodInsn};
pub use method::{CONSTRUCTOR_NAME, MethodNode};
