//! Code assembler: header, declarations and the `translate` function as one
//! Python module.
pub mod accessor;
pub mod decl;

use std::fmt;

use tracing::debug;

use crate::ir::Tree;
use crate::naming::field_ident;

// ------------------------------- Options --------------------------------- //

pub const DEFAULT_INPUT_BINDING: &str = "response";

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Indent {
    #[default]
    Tab,
    Spaces(u8),
}

impl fmt::Display for Indent {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Indent::Tab => f.write_str("\t"),
            Indent::Spaces(n) => write!(f, "{:width$}", "", width = *n as usize),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Options {
    /// Parameter name of the generated `translate` function.
    pub input_binding: String,
    pub indent: Indent,
}

impl Default for Options {
    fn default() -> Self {
        Self {
            input_binding: DEFAULT_INPUT_BINDING.to_string(),
            indent: Indent::default(),
        }
    }
}

// ------------------------------- Codegen --------------------------------- //

pub struct Codegen {
    options: Options,
    out: String,
}

impl Codegen {
    pub fn new(options: Options) -> Self {
        Self { options, out: String::new() }
    }

    /// Append the module for a resolved tree.
    pub fn emit(&mut self, tree: &Tree<'_>) {
        let indent = self.options.indent.to_string();
        let input = field_ident(&self.options.input_binding);

        let decls = decl::emit_declarations(tree, &indent);
        debug!(declarations = decls.blocks.len(), uses_any = decls.uses_any, "emitted declarations");
        let body = accessor::emit_accessor(tree, Tree::ROOT, None, &input);

        self.out.push_str("from dataclasses import dataclass, field\nfrom typing import List");
        if decls.uses_any {
            self.out.push_str(", Any");
        }
        self.out.push_str("\n\n\n");
        for block in &decls.blocks {
            self.out.push_str(block);
        }
        self.out.push_str(&format!("def translate({input}):\n{indent}return {body}\n"));
    }

    pub fn into_string(self) -> String {
        self.out
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::inference::build_tree;
    use crate::resolve::resolve_collisions;
    use serde_json::json;

    fn render(name: &str, data: &serde_json::Value, options: Options) -> String {
        let mut tree = build_tree(name, data).unwrap();
        resolve_collisions(&mut tree);
        let mut cg = Codegen::new(options);
        cg.emit(&tree);
        cg.into_string()
    }

    #[test]
    fn indent_renders() {
        assert_eq!(Indent::Tab.to_string(), "\t");
        assert_eq!(Indent::Spaces(4).to_string(), "    ");
        assert_eq!(Indent::Spaces(0).to_string(), "");
    }

    #[test]
    fn full_module_for_nested_objects() {
        let data = json!({"field1": {"field2": {"field3": "fin"}}});
        let src = render("Test", &data, Options::default());
        assert_eq!(
            src,
            "from dataclasses import dataclass, field\nfrom typing import List\n\n\n\
             @dataclass\nclass Field2:\n\tfield3: str = None\n\n\n\
             @dataclass\nclass Field1:\n\tfield2: Field2 = None\n\n\n\
             @dataclass\nclass Test:\n\tfield1: Field1 = None\n\n\n\
             def translate(response):\n\treturn Test(field1=Field1(field2=Field2(field3=\
             response.get('field1', {}).get('field2', {}).get('field3'),),),)\n"
        );
    }

    #[test]
    fn any_import_only_when_needed() {
        let with_any = render("Test", &json!({"members": []}), Options::default());
        assert!(with_any.starts_with("from dataclasses import dataclass, field\nfrom typing import List, Any\n\n\n"));
        let without = render("Test", &json!({"count": 1}), Options::default());
        assert!(without.starts_with("from dataclasses import dataclass, field\nfrom typing import List\n\n\n"));
    }

    #[test]
    fn options_change_binding_and_indent() {
        let options = Options { input_binding: "payload".into(), indent: Indent::Spaces(4) };
        let src = render("Test", &json!({"a": 1}), options);
        assert!(src.contains("class Test:\n    a: int = None\n"));
        assert!(src.ends_with("def translate(payload):\n    return Test(a=payload.get('a'),)\n"));
    }

    #[test]
    fn binding_is_made_legal() {
        let options = Options { input_binding: "from".into(), ..Options::default() };
        let src = render("Test", &json!({"a": 1}), options);
        assert!(src.contains("def translate(from_):\n\treturn Test(a=from_.get('a'),)\n"));
    }

    #[test]
    fn root_list_of_scalars_has_no_declarations() {
        let src = render("Test", &json!([1, 2, 3]), Options::default());
        assert_eq!(
            src,
            "from dataclasses import dataclass, field\nfrom typing import List\n\n\n\
             def translate(response):\n\treturn [int for int in response]\n"
        );
    }
}
