//! Accessor emitter: the single expression that rebuilds the records from
//! an untyped value.
//!
//! Scalars read through a chain of `.get(key, {})` steps, lists become
//! comprehensions with a fresh loop variable, records become constructor
//! calls with one keyword argument per field.
use crate::ir::{NodeId, Tree, Ty};
use crate::naming::py_str_literal;

/// Expression for node `id`. `binding` is the loop variable of the nearest
/// enclosing comprehension, `input` the parameter of `translate`.
pub fn emit_accessor(tree: &Tree<'_>, id: NodeId, binding: Option<&str>, input: &str) -> String {
    let node = tree.node(id);
    match &node.ty {
        Ty::Str | Ty::Int | Ty::Float | Ty::Bool | Ty::Null => lookup_chain(tree, id, binding, input, None),
        Ty::List => list_accessor(tree, id, binding, input),
        // the element itself, untyped
        Ty::Any => binding.map(str::to_string).unwrap_or_else(|| Ty::Any.binding()),
        Ty::Record(name) => {
            let mut out = format!("{name}(");
            for &sub in &node.subnodes {
                let ident = tree.node(sub).ident.as_deref().unwrap_or_default();
                let value = emit_accessor(tree, sub, binding, input);
                out.push_str(&format!("{ident}={value},"));
            }
            out.push(')');
            out
        }
    }
}

fn list_accessor(tree: &Tree<'_>, id: NodeId, binding: Option<&str>, input: &str) -> String {
    let node = tree.node(id);
    let source = lookup_chain(tree, id, binding, input, Some("[]"));
    let Some(&element) = node.subnodes.first() else {
        return format!("list({source})");
    };
    let var = node.subtype.as_ref().unwrap_or(&Ty::Any).binding();
    let value = emit_accessor(tree, element, Some(&var), input);
    format!("[{value} for {var} in {source}]")
}

/// `base.get('outer', {})...get('key'[, default])`.
///
/// Walks up from `id` until the root or a list node. Named ancestors each
/// add a step that falls back to `{}`. The base is `input` when the root was
/// reached, otherwise the enclosing loop variable. A node without a key (an
/// element directly inside a list) is the base itself.
pub fn lookup_chain(
    tree: &Tree<'_>,
    id: NodeId,
    binding: Option<&str>,
    input: &str,
    default: Option<&str>,
) -> String {
    let node = tree.node(id);
    let mut steps = Vec::new();
    if let Some(key) = &node.name {
        steps.push(match default {
            Some(default) => format!(".get({}, {default})", py_str_literal(key)),
            None => format!(".get({})", py_str_literal(key)),
        });
    }

    let mut cursor = node.parent;
    while let Some(parent_id) = cursor {
        let parent = tree.node(parent_id);
        if parent.ty == Ty::List {
            break;
        }
        if let Some(key) = &parent.name {
            steps.push(format!(".get({}, {{}})", py_str_literal(key)));
        }
        cursor = parent.parent;
    }

    let base = match cursor {
        None => input,
        Some(_) => binding.unwrap_or(input),
    };
    let mut out = base.to_string();
    for step in steps.iter().rev() {
        out.push_str(step);
    }
    out
}
