//! Declaration emitter: one `@dataclass` block per distinct record.
use indexmap::IndexSet;

use crate::ir::{Node, NodeId, Tree, Ty};

#[derive(Debug, Default)]
pub struct Declarations {
    /// Unique blocks in first-seen post-order.
    pub blocks: IndexSet<String>,
    /// Some block annotates a field with `Any`.
    pub uses_any: bool,
}

/// Walk children before parents so every class is defined before use.
/// Identical blocks (same name and same fields) collapse to the first one.
pub fn emit_declarations(tree: &Tree<'_>, indent: &str) -> Declarations {
    let mut out = Declarations::default();
    for id in tree.post_order() {
        if !tree.node(id).ty.is_record() {
            continue;
        }
        out.uses_any |= declares_any(tree, id);
        out.blocks.insert(declaration(tree, id, indent));
    }
    out
}

pub fn declaration(tree: &Tree<'_>, id: NodeId, indent: &str) -> String {
    let node = tree.node(id);
    let mut content = format!("@dataclass\nclass {}:\n", node.ty.annotation());
    for &sub in &node.subnodes {
        content.push_str(indent);
        content.push_str(&field_line(tree.node(sub)));
        content.push('\n');
    }
    if node.subnodes.is_empty() {
        content.push_str(indent);
        content.push_str("pass\n");
    }
    content + "\n\n"
}

fn field_line(sub: &Node<'_>) -> String {
    let ident = sub.ident.as_deref().unwrap_or_default();
    match &sub.ty {
        Ty::Null => format!("{ident}: Any = None"),
        Ty::List => format!(
            "{ident}: List[{}] = field(default_factory=list)",
            sub.subtype.as_ref().unwrap_or(&Ty::Any).annotation()
        ),
        other => format!("{ident}: {} = None", other.annotation()),
    }
}

fn declares_any(tree: &Tree<'_>, id: NodeId) -> bool {
    tree.node(id).subnodes.iter().any(|&sub| {
        let sub = tree.node(sub);
        match sub.ty {
            Ty::Null => true,
            Ty::List => matches!(sub.subtype, None | Some(Ty::Any)),
            _ => false,
        }
    })
}
