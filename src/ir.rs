// Type tree for codegen: an arena of nodes addressed by `NodeId`.
use serde::Serialize;
use serde_json::Value;
use std::fmt;

#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum Ty {
    Str,
    Int,
    Float,
    Bool,
    Null,
    Any,                     // element of an empty array, nothing to infer from
    List,                    // the element type lives in `Node::subtype`
    Record(String),
}

impl Ty {
    /// Primitives and sentinels never get their own declaration.
    pub fn is_record(&self) -> bool {
        matches!(self, Ty::Record(_))
    }

    /// Annotation used inside a declaration.
    pub fn annotation(&self) -> &str {
        match self {
            Ty::Str => "str",
            Ty::Int => "int",
            Ty::Float => "float",
            Ty::Bool => "bool",
            Ty::Null => "None",
            Ty::Any => "Any",
            Ty::List => "list",
            Ty::Record(name) => name,
        }
    }

    /// Loop variable for a comprehension over elements of this type.
    /// Never equal to a record's own name (`_x`, `名前`), which would hide
    /// the class inside the comprehension.
    pub fn binding(&self) -> String {
        match self {
            Ty::Null => "none".to_string(),
            Ty::Record(name) => {
                let lower = name.to_lowercase();
                if lower == *name { lower + "_item" } else { lower }
            }
            other => other.annotation().to_lowercase(),
        }
    }
}

impl fmt::Display for Ty {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Ty::Str => f.write_str("string"),
            Ty::Int => f.write_str("integer"),
            Ty::Float => f.write_str("float"),
            Ty::Bool => f.write_str("boolean"),
            Ty::Null => f.write_str("null-type"),
            Ty::Any => f.write_str("any-type"),
            Ty::List => f.write_str("list-type"),
            Ty::Record(name) => f.write_str(name),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct NodeId(pub usize);

#[derive(Debug, Clone)]
pub struct Node<'a> {
    pub parent: Option<NodeId>,
    pub data: Option<&'a Value>,       // None only for the placeholder of an empty array
    pub ty: Ty,
    pub subtype: Option<Ty>,           // element type, list nodes only
    pub name: Option<String>,          // JSON key that produced this node
    pub ident: Option<String>,         // attribute name derived from `name`
    pub subnodes: Vec<NodeId>,
}

#[derive(Debug, Clone)]
pub struct Tree<'a> {
    nodes: Vec<Node<'a>>,
}

impl<'a> Tree<'a> {
    pub const ROOT: NodeId = NodeId(0);

    pub fn with_root(root: Node<'a>) -> Self {
        Self { nodes: vec![root] }
    }

    pub fn push(&mut self, node: Node<'a>) -> NodeId {
        let id = NodeId(self.nodes.len());
        if let Some(parent) = node.parent {
            self.nodes[parent.0].subnodes.push(id);
        }
        self.nodes.push(node);
        id
    }

    pub fn root(&self) -> &Node<'a> {
        &self.nodes[Self::ROOT.0]
    }

    pub fn node(&self, id: NodeId) -> &Node<'a> {
        &self.nodes[id.0]
    }

    pub fn node_mut(&mut self, id: NodeId) -> &mut Node<'a> {
        &mut self.nodes[id.0]
    }

    pub fn len(&self) -> usize {
        self.nodes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.nodes.is_empty()
    }

    pub fn parent(&self, id: NodeId) -> Option<&Node<'a>> {
        self.node(id).parent.map(|p| self.node(p))
    }

    /// Children before parents, siblings in field order.
    pub fn post_order(&self) -> Vec<NodeId> {
        let mut out = Vec::with_capacity(self.nodes.len());
        self.walk(Self::ROOT, false, &mut out);
        out
    }

    /// Parents before children, siblings in field order.
    pub fn pre_order(&self) -> Vec<NodeId> {
        let mut out = Vec::with_capacity(self.nodes.len());
        self.walk(Self::ROOT, true, &mut out);
        out
    }

    fn walk(&self, id: NodeId, head_first: bool, out: &mut Vec<NodeId>) {
        if head_first {
            out.push(id);
        }
        for &child in &self.node(id).subnodes {
            self.walk(child, head_first, out);
        }
        if !head_first {
            out.push(id);
        }
    }
}

// ------------------------------ Debug view -------------------------------- //

#[derive(Debug, Serialize)]
pub struct NodeView {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    #[serde(rename = "type")]
    pub ty: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub subtype: Option<String>,
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub subnodes: Vec<NodeView>,
}

/// Serializable snapshot of the tree, used by the `tree` subcommand.
pub fn view(tree: &Tree<'_>, id: NodeId) -> NodeView {
    let node = tree.node(id);
    NodeView {
        name: node.name.clone(),
        ty: node.ty.to_string(),
        subtype: node.subtype.as_ref().map(Ty::to_string),
        subnodes: node.subnodes.iter().map(|&child| view(tree, child)).collect(),
    }
}
