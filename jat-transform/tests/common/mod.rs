//! Shared fixture: a small class with private members and the call
//! sites that bind to them.

use jat_transform::{AccessTransform, RuleTable, Selector};
use jat_tree::flags::*;
use jat_tree::{ClassNode, FieldNode, Insn, InvokeKind, MethodInsn, MethodNode};

pub const WIDGET: &str = "com/example/Widget";

const ALOAD_0: u8 = 0x2a;
const RETURN: u8 = 0xb1;

fn special(name: &str, desc: &str) -> Insn {
    Insn::Invoke(MethodInsn::new(InvokeKind::Special, WIDGET, name, desc))
}

/// A class shaped like typical javac output:
///
/// ```text
/// public class Widget {
///     private int counter;
///     String label;
///     private Widget() { super(); }
///     private void helper() {}
///     public void render() { helper(); }
///     void tick() { helper(); refresh(); }
///     static void refresh() {}
/// }
/// ```
///
/// `render` and `tick` each hold one `invokespecial` to `helper`.
pub fn widget_class() -> ClassNode {
    let mut class = ClassNode::new(WIDGET, ACC_PUBLIC | ACC_SUPER);

    class.fields.push(FieldNode::new("counter", "I", ACC_PRIVATE));
    class
        .fields
        .push(FieldNode::new("label", "Ljava/lang/String;", 0));

    let mut ctor = MethodNode::new("<init>", "()V", ACC_PRIVATE);
    ctor.instructions = vec![
        Insn::Other(ALOAD_0),
        Insn::Invoke(MethodInsn::new(
            InvokeKind::Special,
            "java/lang/Object",
            "<init>",
            "()V",
        )),
        Insn::Other(RETURN),
    ];
    class.methods.push(ctor);

    let mut helper = MethodNode::new("helper", "()V", ACC_PRIVATE);
    helper.instructions = vec![Insn::Other(RETURN)];
    class.methods.push(helper);

    let mut render = MethodNode::new("render", "()V", ACC_PUBLIC);
    render.instructions = vec![
        Insn::Other(ALOAD_0),
        special("helper", "()V"),
        Insn::Other(RETURN),
    ];
    class.methods.push(render);

    let mut tick = MethodNode::new("tick", "()V", 0);
    tick.instructions = vec![
        Insn::Other(ALOAD_0),
        special("helper", "()V"),
        Insn::Invoke(MethodInsn::new(InvokeKind::Static, WIDGET, "refresh", "()V")),
        Insn::Other(RETURN),
    ];
    class.methods.push(tick);

    class
        .methods
        .push(MethodNode::new("refresh", "()V", ACC_STATIC));

    class
}

/// A one-rule table for the fixture class.
pub fn single_rule(selector: &str, at: AccessTransform) -> RuleTable {
    let mut table = RuleTable::new();
    table.insert(WIDGET, Selector::parse(selector), at);
    table
}

/// Look up a method of the fixture by name.
pub fn method<'c>(class: &'c ClassNode, name: &str) -> &'c MethodNode {
    class
        .methods
        .iter()
        .find(|m| m.name == name)
        .unwrap_or_else(|| panic!("fixture has no method {name}"))
}

/// Collect the dispatch kinds of every invocation in a method body.
pub fn invoke_kinds(method: &MethodNode) -> Vec<InvokeKind> {
    method
        .instructions
        .iter()
        .filter_map(|i| i.as_invoke())
        .map(|m| m.kind)
        .collect()
}
