//! Access-widening transform for JVM class trees.
//!
//! Given a read-only table of access rules, this crate raises the
//! declared visibility (and optionally strips the finality) of
//! selected classes, methods, and fields, and repairs `invokespecial`
//! call sites that a widening out of `private` would otherwise leave
//! statically bound.
//!
//! The crate operates purely on the mutable tree model from
//! [`jat_tree`]; class-file parsing, serialization, and rule-file
//! loading belong to the surrounding pipeline.

pub mod access;
pub mod error;
pub mod rules;
pub mod transform;

pub use access::{AccessLevel, AccessTransform};
pub use error::{AmbiguousBits, Error, Result};
pub use rules::{RuleTable, Selector};
pub use transform::{AccessWidener, ClassTransformer, transform_batch};
