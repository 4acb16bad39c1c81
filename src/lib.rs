//! # json-dataclass
//!
//! Infer Python `@dataclass` models from one example JSON document, together
//! with a `translate(response)` function that maps an untyped parsed value
//! onto those models with safe defaults.
//!
//! Pipeline:
//!
//! 1. [`inference::build_tree`] walks the example and types every position.
//! 2. [`resolve::resolve_collisions`] qualifies record names that clash.
//! 3. [`codegen::Codegen`] emits the declarations and the accessor expression.
//!
//! ```rust
//! use serde_json::json;
//!
//! let example = json!({"user": {"login": "octocat", "id": 1}});
//! let src = json_dataclass::generate("Event", &example, None).unwrap();
//! assert!(src.contains("class User:\n\tlogin: str = None\n\tid: int = None\n"));
//! assert!(src.contains("def translate(response):"));
//! ```
//!
//! Known limits, kept on purpose:
//! - Arrays are typed from their first element only.
//! - Collision renaming is a single pass; a qualified name can still clash.
//! - Every stage recurses along the document's nesting, which `serde_json`
//!   caps at 128 levels when parsing text.
pub mod codegen;
pub mod error;
pub mod inference;
pub mod ir;
pub mod naming;
pub mod resolve;

use serde_json::Value;

pub use codegen::{Codegen, Indent, Options};
pub use error::{Error, Result};

/// Generate the Python module for `example`, with `input_binding` (default
/// `response`) as the parameter of `translate`.
pub fn generate(name: &str, example: &Value, input_binding: Option<&str>) -> Result<String> {
    let mut options = Options::default();
    if let Some(binding) = input_binding {
        options.input_binding = binding.to_string();
    }
    generate_with(name, example, options)
}

pub fn generate_with(name: &str, example: &Value, options: Options) -> Result<String> {
    let mut tree = inference::build_tree(name, example)?;
    resolve::resolve_collisions(&mut tree);
    let mut cg = Codegen::new(options);
    cg.emit(&tree);
    Ok(cg.into_string())
}

/// Resolved type tree as JSON, for inspecting what the generator inferred.
pub fn describe(name: &str, example: &Value) -> Result<Value> {
    let mut tree = inference::build_tree(name, example)?;
    resolve::resolve_collisions(&mut tree);
    Ok(serde_json::to_value(ir::view(&tree, ir::Tree::ROOT))?)
}
