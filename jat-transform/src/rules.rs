//! Rule model: which members of which classes get widened, and to what.
//!
//! Rule files are parsed by the surrounding pipeline; this module only
//! holds the resolved table and the selector grammar shared with it.

use crate::access::AccessTransform;
use std::collections::HashMap;

/// Identifies a transform's target within one class.
///
/// The textual rule format encodes targets as a single string: empty
/// for the class itself, name followed by descriptor for a method
/// (descriptors always begin with `(`, and method names never contain
/// one), a bare name for a field.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum Selector {
    /// The class's own access word.
    Class,
    /// A method, matched by name and descriptor.
    Method { name: String, desc: String },
    /// A field, matched by exact name.
    Field { name: String },
}

impl Selector {
    /// Parse a selector from its rule-file string form.
    pub fn parse(s: &str) -> Self {
        if s.is_empty() {
            Selector::Class
        } else if let Some(paren) = s.find('(') {
            Selector::Method {
                name: s[..paren].to_string(),
                desc: s[paren..].to_string(),
            }
        } else {
            Selector::Field {
                name: s.to_string(),
            }
        }
    }
}

/// Read-only table of access rules, keyed by owner-class internal name.
///
/// Rows keep insertion order and hold at most one transform per
/// selector. The table is built once by the host and then shared
/// freely across worker threads; nothing here mutates during a
/// transform pass.
#[derive(Debug, Clone, Default)]
pub struct RuleTable {
    rows: HashMap<String, Vec<(Selector, AccessTransform)>>,
}

impl RuleTable {
    pub fn new() -> Self {
        Self::default()
    }

    /// Add a rule. A second insert for the same (owner, selector) pair
    /// replaces the earlier transform in place, keeping row order.
    pub fn insert(&mut self, owner: impl Into<String>, selector: Selector, at: AccessTransform) {
        let row = self.rows.entry(owner.into()).or_default();
        match row.iter_mut().find(|(s, _)| *s == selector) {
            Some(slot) => slot.1 = at,
            None => row.push((selector, at)),
        }
    }

    /// Whether any rule targets the given class. Cheap; lets the host
    /// skip non-matching classes without further work.
    pub fn applies(&self, owner: &str) -> bool {
        self.rows.contains_key(owner)
    }

    /// The ordered rule row for a class, if any.
    pub fn row(&self, owner: &str) -> Option<&[(Selector, AccessTransform)]> {
        self.rows.get(owner).map(Vec::as_slice)
    }

    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }

    /// Number of classes with at least one rule.
    pub fn len(&self) -> usize {
        self.rows.len()
    }
}
