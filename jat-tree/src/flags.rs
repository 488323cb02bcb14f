//! Access flag constants from the JVM class file specification.
//!
//! These match the `ACC_*` values in JVMS table 4.1-B / 4.5-A / 4.6-A.

/// Public access — field, method, class.
pub const ACC_PUBLIC: u16 = 0x0001;
/// Private access — field, method.
pub const ACC_PRIVATE: u16 = 0x0002;
/// Protected access — field, method.
pub const ACC_PROTECTED: u16 = 0x0004;
/// Static — field, method.
pub const ACC_STATIC: u16 = 0x0008;
/// Final — field, method, class.
pub const ACC_FINAL: u16 = 0x0010;
/// Super — class.
pub const ACC_SUPER: u16 = 0x0020;
/// Synchronized — method (same bit as ACC_SUPER).
pub const ACC_SYNCHRONIZED: u16 = 0x0020;
/// Bridge method (same bit as ACC_VOLATILE).
pub const ACC_BRIDGE: u16 = 0x0040;
/// Volatile field (same bit as ACC_BRIDGE).
pub const ACC_VOLATILE: u16 = 0x0040;
/// Transient field (same bit as ACC_VARARGS).
pub const ACC_TRANSIENT: u16 = 0x0080;
/// Varargs method (same bit as ACC_TRANSIENT).
pub const ACC_VARARGS: u16 = 0x0080;
/// Native method.
pub const ACC_NATIVE: u16 = 0x0100;
/// Interface — class.
pub const ACC_INTERFACE: u16 = 0x0200;
/// Abstract — method, class.
pub const ACC_ABSTRACT: u16 = 0x0400;
/// Strict floating-point — method.
pub const ACC_STRICT: u16 = 0x0800;
/// Synthetic — field, method, class.
pub const ACC_SYNTHETIC: u16 = 0x1000;
/// Annotation type — class.
pub const ACC_ANNOTATION: u16 = 0x2000;
/// Enum — field, class.
pub const ACC_ENUM: u16 = 0x4000;

/// Mask for the three declared-visibility bits. A valid flag word sets
/// at most one of them; package-local members set none.
pub const VISIBILITY_MASK: u16 = ACC_PUBLIC | ACC_PRIVATE | ACC_PROTECTED;
