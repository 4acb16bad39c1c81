//! Collision resolver.
//!
//! Two unrelated objects can infer the same record name (two `meta` keys in
//! different places, say). Every node whose record name occurs more than
//! once is qualified with its parent's name: `A.meta` → `AMeta`. For an
//! element of a list the parent's subtype is the qualifier, and the subtype
//! follows the rename.
//!
//! Single pass, no fixed point: a qualified name that collides again is left
//! as is and only reported through `tracing`.
use std::collections::HashSet;

use indexmap::IndexMap;
use tracing::{debug, warn};

use crate::ir::{Tree, Ty};
use crate::naming::{capitalize, escape_type_name};

/// Rename colliding records in place; returns how many nodes were renamed.
pub fn resolve_collisions(tree: &mut Tree<'_>) -> usize {
    let order = tree.post_order();
    let colliding: HashSet<String> = record_counts(tree)
        .into_iter()
        .filter(|(_, count)| *count > 1)
        .map(|(name, _)| name)
        .collect();
    if colliding.is_empty() {
        return 0;
    }

    let mut renamed = 0;
    for id in order {
        let node = tree.node(id);
        let Ty::Record(name) = &node.ty else { continue };
        if !colliding.contains(name) {
            continue;
        }
        let Some(parent_id) = node.parent else { continue };
        let parent = tree.node(parent_id);

        let in_list = parent.ty == Ty::List;
        let qualifier = if in_list {
            parent.subtype.as_ref().map(Ty::annotation).unwrap_or_default()
        } else {
            parent.ty.annotation()
        };
        let new_name = qualify(qualifier, name);
        debug!(from = %name, to = %new_name, "renamed colliding record");

        let new_ty = Ty::Record(new_name);
        if in_list {
            tree.node_mut(parent_id).subtype = Some(new_ty.clone());
        }
        tree.node_mut(id).ty = new_ty;
        renamed += 1;
    }

    let leftover: Vec<String> = record_counts(tree)
        .into_iter()
        .filter(|(_, count)| *count > 1)
        .map(|(name, _)| name)
        .collect();
    if !leftover.is_empty() {
        warn!(names = ?leftover, "record names still collide after qualification");
    }
    renamed
}

/// Occurrences of every record name, in first-seen (post-order) order.
pub fn record_counts(tree: &Tree<'_>) -> IndexMap<String, usize> {
    let mut counts = IndexMap::new();
    for id in tree.post_order() {
        if let Ty::Record(name) = &tree.node(id).ty {
            *counts.entry(name.clone()).or_insert(0) += 1;
        }
    }
    counts
}

fn qualify(qualifier: &str, name: &str) -> String {
    escape_type_name(capitalize(qualifier) + &capitalize(name))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::inference::build_tree;
    use serde_json::json;

    fn record_names(tree: &Tree<'_>) -> Vec<String> {
        record_counts(tree).into_keys().collect()
    }

    #[test]
    fn no_collisions_no_changes() {
        let data = json!({"field1": {"field2": {"field3": "fin"}}});
        let mut tree = build_tree("Test", &data).unwrap();
        assert_eq!(resolve_collisions(&mut tree), 0);
        assert_eq!(record_names(&tree), ["Field2", "Field1", "Test"]);
    }

    #[test]
    fn sibling_records_are_qualified_by_parent() {
        let data = json!({
            "a": {"meta": {"x": 1}},
            "b": {"meta": {"y": "s"}}
        });
        let mut tree = build_tree("Test", &data).unwrap();
        assert_eq!(resolve_collisions(&mut tree), 2);
        assert_eq!(record_names(&tree), ["AMeta", "A", "BMeta", "B", "Test"]);
    }

    #[test]
    fn list_element_rename_updates_parent_subtype() {
        let data = json!({
            "item": {"id": 1},
            "items": [{"id": 2}]
        });
        let mut tree = build_tree("Test", &data).unwrap();
        resolve_collisions(&mut tree);
        let items = tree.node(tree.root().subnodes[1]);
        let element = tree.node(items.subnodes[0]);
        assert_eq!(element.ty, Ty::Record("ItemItem".into()));
        assert_eq!(items.subtype, Some(element.ty.clone()));
        assert_eq!(tree.node(tree.root().subnodes[0]).ty, Ty::Record("TestItem".into()));
    }

    #[test]
    fn parent_name_is_read_before_it_is_renamed() {
        // `Inner` sits under both `Wrap` records, which collide themselves.
        let data = json!({
            "one": {"wrap": {"inner": {"a": 1}}},
            "two": {"wrap": {"inner": {"b": 2}}}
        });
        let mut tree = build_tree("Test", &data).unwrap();
        resolve_collisions(&mut tree);
        assert_eq!(
            record_names(&tree),
            ["WrapInner", "OneWrap", "One", "TwoWrap", "Two", "Test"]
        );
    }

    #[test]
    fn single_pass_leaves_secondary_collision() {
        let data = json!({
            "a": {"data": [{"x": 1}]},
            "b": {"data": [{"y": 2}]}
        });
        let mut tree = build_tree("Test", &data).unwrap();
        resolve_collisions(&mut tree);
        let counts = record_counts(&tree);
        assert_eq!(counts.get("DataData"), Some(&2));
    }

    #[test]
    fn qualified_keyword_is_escaped() {
        assert_eq!(qualify("Is", "In"), "IsIn");
        assert_eq!(qualify("", "Class"), "Class_");
    }
}
