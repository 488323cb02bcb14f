use thiserror::Error;

/// Lattice-level invariant violation: more than one of the three
/// visibility bits is set in a raw access word. Carries no ownership
/// context; the transform layer wraps it into [`Error`] with the
/// class and member it came from.
#[derive(Debug, Error)]
#[error("ambiguous visibility bits in access word {0:#06x}")]
pub struct AmbiguousBits(pub u16);

#[derive(Debug, Error)]
pub enum Error {
    /// More than one of the three visibility bits is set. The class
    /// file format guarantees this never happens for valid input, so
    /// hitting it means the class is malformed or already corrupted by
    /// an earlier pass. Processing of this class must stop; other
    /// classes in a batch are unaffected.
    #[error("ambiguous visibility bits {flags:#06x} on {owner}.{member}")]
    AmbiguousVisibility {
        owner: String,
        member: String,
        flags: u16,
    },
}

pub type Result<T> = std::result::Result<T, Error>;
