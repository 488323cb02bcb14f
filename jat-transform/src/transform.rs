//! The per-class transform: rule resolution, member widening, and
//! call-site dispatch repair.

use crate::access::AccessLevel;
use crate::error::{AmbiguousBits, Error, Result};
use crate::rules::{RuleTable, Selector};
use jat_tree::{ClassNode, Insn, InvokeKind};
use std::collections::HashSet;

/// A tree-mutating class transform driven by the host pipeline.
pub trait ClassTransformer {
    /// Whether this transform has any work for the named class. Hosts
    /// call this before handing over the tree so non-matching classes
    /// pass through untouched.
    fn applies(&self, class_name: &str) -> bool;

    /// Mutate the class in place. On error the class must be
    /// discarded; it may have been partially modified.
    fn transform(&self, class_name: &str, class: &mut ClassNode) -> Result<()>;
}

/// Applies an access-rule table to classes, widening the visibility of
/// selected members and repairing invocation dispatch afterwards.
///
/// Widening a method out of `private` makes it overridable, but any
/// call site that bound to it while it was private used
/// `invokespecial` and would keep bypassing subclass overrides. Those
/// call sites are rewritten to `invokevirtual`. Only this class needs
/// scanning: no other class could have issued a non-virtual call to a
/// method that used to be private. Constructors stay on
/// `invokespecial` at any visibility.
///
/// The pass is idempotent: widening saturates, so a second run with
/// the same table finds nothing left to change.
pub struct AccessWidener<'r> {
    rules: &'r RuleTable,
}

impl<'r> AccessWidener<'r> {
    pub fn new(rules: &'r RuleTable) -> Self {
        Self { rules }
    }
}

/// Attach the owning class and member to a lattice-level decode error.
fn member_context(owner: &str, member: impl Into<String>) -> impl FnOnce(AmbiguousBits) -> Error {
    let owner = owner.to_string();
    let member = member.into();
    move |e| Error::AmbiguousVisibility {
        owner,
        member,
        flags: e.0,
    }
}

impl ClassTransformer for AccessWidener<'_> {
    fn applies(&self, class_name: &str) -> bool {
        self.rules.applies(class_name)
    }

    fn transform(&self, class_name: &str, class: &mut ClassNode) -> Result<()> {
        let Some(row) = self.rules.row(class_name) else {
            return Ok(());
        };

        // Methods that left `private` during this pass, minus
        // constructors. Consumed once by the retarget scan below.
        let mut overridable: HashSet<(String, String)> = HashSet::new();

        for (selector, at) in row {
            match selector {
                Selector::Class => {
                    class.access = at
                        .apply(class.access)
                        .map_err(member_context(class_name, "<class>"))?;
                    log::debug!("{class_name}: class access now {:#06x}", class.access);
                }
                Selector::Method { name, desc } => {
                    // First declaration-order match wins.
                    let Some(method) = class
                        .methods
                        .iter_mut()
                        .find(|m| m.name == *name && m.desc == *desc)
                    else {
                        log::debug!("{class_name}: no method {name}{desc}, rule dropped");
                        continue;
                    };

                    let context = || format!("{name}{desc}");
                    let was_private = AccessLevel::from_flags(method.access)
                        .map_err(member_context(class_name, context()))?
                        == AccessLevel::Private;
                    method.access = at
                        .apply(method.access)
                        .map_err(member_context(class_name, context()))?;
                    log::debug!(
                        "{class_name}: method {name}{desc} access now {:#06x}",
                        method.access
                    );

                    if was_private
                        && AccessLevel::from_flags(method.access)
                            .map_err(member_context(class_name, context()))?
                            != AccessLevel::Private
                        && !method.is_constructor()
                    {
                        overridable.insert((method.name.clone(), method.desc.clone()));
                    }
                }
                Selector::Field { name } => {
                    match class.fields.iter_mut().find(|f| f.name == *name) {
                        Some(field) => {
                            field.access = at
                                .apply(field.access)
                                .map_err(member_context(class_name, name.clone()))?;
                            log::debug!(
                                "{class_name}: field {name} access now {:#06x}",
                                field.access
                            );
                        }
                        None => {
                            log::debug!("{class_name}: no field {name}, rule dropped");
                        }
                    }
                }
            }
        }

        if !overridable.is_empty() {
            retarget_special_calls(class, &overridable);
        }

        Ok(())
    }
}

/// Rewrite every `invokespecial` to a newly overridable method as
/// `invokevirtual`, across all method bodies of the class.
fn retarget_special_calls(class: &mut ClassNode, overridable: &HashSet<(String, String)>) {
    for method in &mut class.methods {
        for insn in &mut method.instructions {
            let Insn::Invoke(call) = insn else { continue };
            if call.kind == InvokeKind::Special
                && overridable
                    .iter()
                    .any(|(n, d)| n == &call.name && d == &call.desc)
            {
                log::debug!(
                    "{}: retargeting {}.{}{} to virtual dispatch",
                    class.name,
                    call.owner,
                    call.name,
                    call.desc
                );
                call.kind = InvokeKind::Virtual;
            }
        }
    }
}

/// Run a transformer over a batch of classes.
///
/// Failures stay local to one class: the transform runs on a working
/// copy which is committed back only on success, so a class whose
/// transform errors is logged and left exactly as it was. The rest of
/// the batch proceeds. Returns the number of classes transformed.
pub fn transform_batch<'a, T, I>(transformer: &T, classes: I) -> usize
where
    T: ClassTransformer,
    I: IntoIterator<Item = &'a mut ClassNode>,
{
    let mut transformed = 0;
    for class in classes {
        if !transformer.applies(&class.name) {
            continue;
        }
        let mut updated = class.clone();
        match transformer.transform(&class.name, &mut updated) {
            Ok(()) => {
                *class = updated;
                transformed += 1;
            }
            Err(err) => log::warn!("skipping class {}: {err}", class.name),
        }
    }
    transformed
}
