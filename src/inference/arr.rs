use serde_json::Value;

use super::{expand, value_ty};
use crate::ir::{Node, NodeId, Tree, Ty};
use crate::naming::{capitalize, record_type_name, singular_type_name};

/// Attach the single representative child of a list node.
///
/// Only `items[0]` is looked at. If it is an object, its record is named
/// after the list's field (singular), or after the list's current subtype
/// when the list has no field name (the root, or a list inside a list).
pub(crate) fn expand_array<'a>(tree: &mut Tree<'a>, id: NodeId, items: &'a [Value]) {
    let Some(first) = items.first() else {
        tree.push(placeholder(id));
        tree.node_mut(id).subtype = Some(Ty::Any);
        return;
    };

    let node = tree.node(id);
    let element_name = match (&node.name, &node.subtype) {
        (Some(field), _) => singular_type_name(field),
        (None, Some(hint)) => record_type_name(&capitalize(hint.annotation())),
        (None, None) => record_type_name(""),
    };

    let ty = value_ty(first, || element_name.clone());
    // an inner list names its own elements from the same hint
    let subtype = matches!(ty, Ty::List).then(|| Ty::Record(element_name));
    let child = tree.push(Node {
        parent: Some(id),
        data: Some(first),
        ty: ty.clone(),
        subtype,
        name: None,
        ident: None,
        subnodes: Vec::new(),
    });
    tree.node_mut(id).subtype = Some(ty);
    expand(tree, child);
}

fn placeholder<'a>(parent: NodeId) -> Node<'a> {
    Node {
        parent: Some(parent),
        data: None,
        ty: Ty::Any,
        subtype: None,
        name: None,
        ident: None,
        subnodes: Vec::new(),
    }
}

#[cfg(test)]
mod tests {
    use crate::inference::build_tree;
    use crate::ir::{Tree, Ty};
    use serde_json::json;

    #[test]
    fn element_named_after_singular_field() {
        let data = json!({"members": [{"login": "a"}, {"login": "b"}]});
        let tree = build_tree("Team", &data).unwrap();
        let members = tree.node(tree.root().subnodes[0]);
        assert_eq!(members.subtype, Some(Ty::Record("Member".into())));
        assert_eq!(tree.node(members.subnodes[0]).ty, Ty::Record("Member".into()));
    }

    #[test]
    fn root_element_named_after_structure() {
        let data = json!([{"id": 1}]);
        let tree = build_tree("event", &data).unwrap();
        assert_eq!(tree.root().subtype, Some(Ty::Record("Event".into())));
        assert_eq!(tree.node(tree.root().subnodes[0]).ty, Ty::Record("Event".into()));
    }

    #[test]
    fn scalar_elements_set_primitive_subtype() {
        let data = json!({"tags": ["a", "b"], "scores": [1.5], "ids": [1, 2]});
        let tree = build_tree("Test", &data).unwrap();
        let subtypes: Vec<Option<Ty>> = tree.root().subnodes.iter().map(|&id| tree.node(id).subtype.clone()).collect();
        assert_eq!(subtypes, [Some(Ty::Str), Some(Ty::Float), Some(Ty::Int)]);
    }

    #[test]
    fn only_first_element_is_inspected() {
        let data = json!({"items": [{"a": 1}, {"b": "x", "c": true}]});
        let tree = build_tree("Test", &data).unwrap();
        let items = tree.node(tree.root().subnodes[0]);
        let element = tree.node(items.subnodes[0]);
        assert_eq!(items.subnodes.len(), 1);
        assert_eq!(element.subnodes.len(), 1);
        assert_eq!(tree.node(element.subnodes[0]).name.as_deref(), Some("a"));
    }

    #[test]
    fn nested_lists_inherit_element_name() {
        let data = json!({"rows": [[{"v": 1}]]});
        let tree = build_tree("Grid", &data).unwrap();
        let rows = tree.node(tree.root().subnodes[0]);
        assert_eq!(rows.subtype, Some(Ty::List));
        let inner = tree.node(rows.subnodes[0]);
        assert_eq!(inner.ty, Ty::List);
        assert_eq!(inner.subtype, Some(Ty::Record("Row".into())));
        assert_eq!(tree.node(inner.subnodes[0]).ty, Ty::Record("Row".into()));
    }

    #[test]
    fn empty_root_list() {
        let data = json!([]);
        let tree = build_tree("Test", &data).unwrap();
        assert_eq!(tree.root().subtype, Some(Ty::Any));
        assert_eq!(tree.node(tree.root().subnodes[0]).ty, Ty::Any);
        assert_eq!(tree.len(), 2);
        assert_eq!(tree.root().subnodes[0].0, Tree::ROOT.0 + 1);
    }
}
