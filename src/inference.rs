//! Tree builder.
//!
//! Walks a single JSON example and produces the typed node tree consumed by
//! the resolver and both emitters.
//!
//! Rules:
//! - Objects become records named after the key that holds them (the root is
//!   named after the structure name).
//! - Arrays become list nodes with exactly one representative child built
//!   from element 0. Later elements are never inspected.
//! - Empty arrays get a single `Any` placeholder child.
//! - Scalars and nulls are leaves.
pub mod arr;
pub mod obj;

use serde_json::Value;
use tracing::debug;

use crate::error::{Error, Result};
use crate::ir::{Node, NodeId, Tree, Ty};
use crate::naming::{capitalize, record_type_name};

// ------------------------------- Front API -------------------------------- //

/// Build and fully expand the tree for `example`.
pub fn build_tree<'a>(name: &str, example: &'a Value) -> Result<Tree<'a>> {
    let mut tree = Tree::with_root(root_node(name, example)?);
    expand(&mut tree, Tree::ROOT);
    debug!(structure = name, nodes = tree.len(), "built type tree");
    Ok(tree)
}

/// Unexpanded root: a record named after `name`, or a list whose element
/// type starts out as that same name.
pub fn root_node<'a>(name: &str, example: &'a Value) -> Result<Node<'a>> {
    let name = name.trim();
    if name.is_empty() {
        return Err(Error::EmptyName);
    }
    let record = Ty::Record(record_type_name(&capitalize(name)));
    let (ty, subtype) = match example {
        Value::Object(_) => (record, None),
        Value::Array(_) => (Ty::List, Some(record)),
        other => return Err(Error::UnsupportedRoot { kind: kind_of(other) }),
    };
    Ok(Node {
        parent: None,
        data: Some(example),
        ty,
        subtype,
        name: None,
        ident: None,
        subnodes: Vec::new(),
    })
}

// ------------------------------- Expansion -------------------------------- //

pub(crate) fn expand<'a>(tree: &mut Tree<'a>, id: NodeId) {
    let Some(data) = tree.node(id).data else { return };
    match data {
        Value::Array(items) => arr::expand_array(tree, id, items),
        Value::Object(map) => obj::expand_object(tree, id, map),
        _ => {}
    }
}

/// Type of a value at a child position; objects take the name produced
/// by `record_name`.
pub(crate) fn value_ty(value: &Value, record_name: impl FnOnce() -> String) -> Ty {
    match value {
        Value::Null => Ty::Null,
        Value::Bool(_) => Ty::Bool,
        Value::Number(n) if n.is_i64() || n.is_u64() => Ty::Int,
        Value::Number(_) => Ty::Float,
        Value::String(_) => Ty::Str,
        Value::Array(_) => Ty::List,
        Value::Object(_) => Ty::Record(record_name()),
    }
}

fn kind_of(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "boolean",
        Value::Number(_) => "number",
        Value::String(_) => "string",
        Value::Array(_) => "array",
        Value::Object(_) => "object",
    }
}

// ------------------------------- Tests ------------------------------------ //
