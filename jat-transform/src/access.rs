//! Ranked visibility lattice over raw JVM access-flag words.

use crate::error::AmbiguousBits;
use jat_tree::flags::{ACC_FINAL, ACC_PRIVATE, ACC_PROTECTED, ACC_PUBLIC, VISIBILITY_MASK};

type Result<T> = std::result::Result<T, AmbiguousBits>;

/// One of the four declared visibility levels, ordered from most to
/// least restrictive.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum AccessLevel {
    Private,
    PackageLocal,
    Protected,
    Public,
}

impl AccessLevel {
    /// Position in the widening order: `Private < PackageLocal <
    /// Protected < Public`.
    pub fn rank(self) -> u8 {
        match self {
            AccessLevel::Private => 0,
            AccessLevel::PackageLocal => 1,
            AccessLevel::Protected => 2,
            AccessLevel::Public => 3,
        }
    }

    /// The visibility bit this level owns. Package-local visibility has
    /// no bit of its own; it is the absence of the other three.
    pub fn flag_bit(self) -> u16 {
        match self {
            AccessLevel::Private => ACC_PRIVATE,
            AccessLevel::PackageLocal => 0,
            AccessLevel::Protected => ACC_PROTECTED,
            AccessLevel::Public => ACC_PUBLIC,
        }
    }

    /// Decode the visibility level of a raw access word.
    ///
    /// Exactly one level matches any valid word. A word with two or
    /// more visibility bits set is malformed input and yields
    /// [`AmbiguousBits`].
    pub fn from_flags(flags: u16) -> Result<Self> {
        match flags & VISIBILITY_MASK {
            0 => Ok(AccessLevel::PackageLocal),
            ACC_PUBLIC => Ok(AccessLevel::Public),
            ACC_PRIVATE => Ok(AccessLevel::Private),
            ACC_PROTECTED => Ok(AccessLevel::Protected),
            _ => Err(AmbiguousBits(flags)),
        }
    }
}

/// Raise the visibility of `flags` to `desired` if that is actually a
/// widening; otherwise return `flags` unchanged. All non-visibility
/// bits (static, synthetic, bridge, ...) are preserved either way.
pub fn widen(flags: u16, desired: AccessLevel) -> Result<u16> {
    let current = AccessLevel::from_flags(flags)?;
    if desired.rank() > current.rank() {
        Ok((flags & !current.flag_bit()) | desired.flag_bit())
    } else {
        Ok(flags)
    }
}

/// Whether the finality bit is set. Independent of visibility.
pub fn is_final(flags: u16) -> bool {
    flags & ACC_FINAL != 0
}

/// Clear the finality bit.
pub fn remove_final(flags: u16) -> u16 {
    flags & !ACC_FINAL
}

/// A requested access change: a visibility floor, plus optionally
/// stripping finality. Never narrows — applying a transform whose
/// level does not outrank the current one leaves visibility untouched.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct AccessTransform {
    /// Visibility the target should at least have.
    pub level: AccessLevel,
    /// Also clear `ACC_FINAL` on the target.
    pub remove_final: bool,
}

impl AccessTransform {
    pub fn new(level: AccessLevel, remove_final: bool) -> Self {
        Self { level, remove_final }
    }

    /// Plain widening, finality left alone.
    pub fn widen_to(level: AccessLevel) -> Self {
        Self::new(level, false)
    }

    /// Apply this transform to a raw access word.
    pub fn apply(&self, flags: u16) -> Result<u16> {
        let mut flags = widen(flags, self.level)?;
        if self.remove_final {
            flags = remove_final(flags);
        }
        Ok(flags)
    }
}
