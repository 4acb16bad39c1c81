use std::collections::HashSet;

use serde_json::{Map, Value};

use super::{expand, value_ty};
use crate::ir::{Node, NodeId, Tree};
use crate::naming::{capitalize, field_ident, record_type_name};

/// One child per key, in insertion order. Nested objects are records named
/// after their key.
pub(crate) fn expand_object<'a>(tree: &mut Tree<'a>, id: NodeId, map: &'a Map<String, Value>) {
    let mut taken = HashSet::new();
    for (key, value) in map {
        let ty = value_ty(value, || record_type_name(&capitalize(key)));
        let ident = unique_ident(&mut taken, field_ident(key));
        let child = tree.push(Node {
            parent: Some(id),
            data: Some(value),
            ty,
            subtype: None,
            name: Some(key.clone()),
            ident: Some(ident),
            subnodes: Vec::new(),
        });
        expand(tree, child);
    }
}

/// Keys that sanitize to the same identifier get `_2`, `_3`, ...
fn unique_ident(taken: &mut HashSet<String>, ident: String) -> String {
    if taken.insert(ident.clone()) {
        return ident;
    }
    let mut n = 2;
    loop {
        let candidate = format!("{ident}_{n}");
        if taken.insert(candidate.clone()) {
            return candidate;
        }
        n += 1;
    }
}
