//! Identifier policy for the generated Python: capitalization, singular
//! element names, keyword escaping and string literal quoting.
use once_cell::sync::Lazy;
use regex::Regex;

const PY_KEYWORDS: &[&str] = &[
    "false", "none", "true", "and", "as", "assert", "async", "await", "break",
    "class", "continue", "def", "del", "elif", "else", "except", "finally",
    "for", "from", "global", "if", "import", "in", "is", "lambda", "nonlocal",
    "not", "or", "pass", "raise", "return", "try", "while", "with", "yield",
];

/// Names brought into scope by the generated header.
const IMPORTED_NAMES: &[&str] = &["List", "Any"];

/// Names a class body must not rebind: later field lines still use them.
const HEADER_NAMES: &[&str] = &["List", "Any", "field", "dataclass"];

// Unicode word characters: Python 3 accepts non-ASCII identifiers.
static IDENTIFIER: Lazy<Regex> = Lazy::new(|| Regex::new(r"^[^\W\d]\w*$").unwrap());
static NON_IDENT_CHAR: Lazy<Regex> = Lazy::new(|| Regex::new(r"\W").unwrap());

/// First character upper-cased, the remainder lower-cased (`userInfo` → `Userinfo`).
pub fn capitalize(s: &str) -> String {
    let mut chars = s.chars();
    match chars.next() {
        None => String::new(),
        Some(first) => first.to_uppercase().chain(chars.flat_map(char::to_lowercase)).collect(),
    }
}

/// Element type name for an array found under `field`: `members` → `Member`.
pub fn singular_type_name(field: &str) -> String {
    let mut name = capitalize(field);
    if name.ends_with('s') {
        name.pop();
    }
    record_type_name(&name)
}

/// Turn an already capitalized name into a legal, non-shadowing class name.
pub fn record_type_name(name: &str) -> String {
    escape_type_name(sanitize(name))
}

/// Type names compare case-insensitively against the keyword list, so
/// `None` and `Class` both get the suffix.
pub fn escape_type_name(name: String) -> String {
    let lower = name.to_lowercase();
    if PY_KEYWORDS.contains(&lower.as_str()) || IMPORTED_NAMES.contains(&name.as_str()) {
        name + "_"
    } else {
        name
    }
}

/// Attribute name for a JSON key. Keywords are case-sensitive here:
/// `None` is escaped but `none` is a valid attribute.
pub fn field_ident(key: &str) -> String {
    let ident = sanitize(key);
    if is_keyword(&ident) || HEADER_NAMES.contains(&ident.as_str()) {
        ident + "_"
    } else {
        ident
    }
}

fn is_keyword(ident: &str) -> bool {
    match ident {
        "False" | "None" | "True" => true,
        _ => ident.chars().all(|c| c.is_ascii_lowercase()) && PY_KEYWORDS.contains(&ident),
    }
}

pub fn sanitize(raw: &str) -> String {
    if IDENTIFIER.is_match(raw) {
        return raw.to_string();
    }
    let mut out = NON_IDENT_CHAR.replace_all(raw, "_").into_owned();
    if out.is_empty() || out.starts_with(char::is_numeric) {
        out.insert(0, '_');
    }
    out
}

/// Single-quoted Python string literal.
pub fn py_str_literal(s: &str) -> String {
    let mut out = String::with_capacity(s.len() + 2);
    out.push('\'');
    for c in s.chars() {
        match c {
            '\\' => out.push_str("\\\\"),
            '\'' => out.push_str("\\'"),
            '\n' => out.push_str("\\n"),
            '\r' => out.push_str("\\r"),
            '\t' => out.push_str("\\t"),
            c if c.is_control() => out.push_str(&format!("\\u{:04x}", c as u32)),
            c => out.push(c),
        }
    }
    out.push('\'');
    out
}
