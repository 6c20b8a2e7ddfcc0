//! Directive grammars and classification.
//!
//! Five directive shapes exist in theme markup:
//!
//! - `{name}` / `{select:name}` - variable substitution
//! - `{block:Photo}...{/block:Photo}` - typed block (fixed post-type set)
//! - `{block:IfName}` / `{block:IfNotName}` - boolean conditional
//! - `{block:Name}` - definedness conditional (catch-all)
//! - `{block:Posts}` / `{block:Tags}` - iteration
//!
//! All block grammars share one tag shape; classification of the captured
//! name picks the evaluator. The classification order is load-bearing:
//! iteration and typed names would otherwise be swallowed by the generic
//! definedness grammar.

/// Post types recognized by typed blocks.
pub(crate) const TYPED_BLOCK_NAMES: &[&str] = &[
    "Text",
    "Photo",
    "Panorama",
    "Photoset",
    "Quote",
    "Link",
    "Chat",
    "Video",
    "Audio",
];

/// Block names that iterate a sequence-valued option.
pub(crate) const ITERATION_BLOCK_NAMES: &[&str] = &["Posts", "Tags"];

/// How a block directive is evaluated, derived from its captured name.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) enum BlockKind<'a> {
    /// `{block:Posts}` / `{block:Tags}`.
    Iteration,
    /// `{block:Photo}` and friends, gated on the current post type.
    Typed,
    /// `{block:IfName}` / `{block:IfNotName}`, gated on a boolean option.
    Conditional { key: &'a str, negated: bool },
    /// Any other `{block:Name}`, gated on truthiness of the option.
    Definedness,
}

/// A parsed opening block tag.
#[derive(Debug, Clone, Copy)]
pub(crate) struct OpenTag<'a> {
    /// Full captured name, e.g. `IfNotShowTitle`.
    pub name: &'a str,
    /// Byte length of the whole tag, braces included.
    pub len: usize,
    pub kind: BlockKind<'a>,
}

// Block names take no spaces, unlike variable names.
fn is_block_name_char(c: char) -> bool {
    c.is_ascii_alphanumeric() || c == '-' || c == '_'
}

fn is_variable_name_char(c: char) -> bool {
    c.is_ascii_alphanumeric() || c == ' ' || c == '-' || c == '_'
}

/// Parses an opening block tag at the start of `input`.
pub(crate) fn parse_open_tag(input: &str) -> Option<OpenTag<'_>> {
    let rest = input.strip_prefix("{block:")?;
    let name_len = rest.find(|c: char| !is_block_name_char(c))?;
    if name_len == 0 || !rest[name_len..].starts_with('}') {
        return None;
    }
    let name = &rest[..name_len];
    Some(OpenTag {
        name,
        len: "{block:".len() + name_len + 1,
        kind: classify(name),
    })
}

/// Parses a closing block tag at the start of `input`, returning the
/// captured name and the tag's byte length.
pub(crate) fn parse_close_tag(input: &str) -> Option<(&str, usize)> {
    let rest = input.strip_prefix("{/block:")?;
    let name_len = rest.find(|c: char| !is_block_name_char(c))?;
    if name_len == 0 || !rest[name_len..].starts_with('}') {
        return None;
    }
    Some((&rest[..name_len], "{/block:".len() + name_len + 1))
}

/// Parses a variable placeholder at the start of `input`, returning the
/// lookup key and the placeholder's byte length.
///
/// The optional `select:` prefix is part of the lookup key: `{select:Foo}`
/// resolves the literal key `select:Foo`, not `Foo`.
pub(crate) fn parse_variable(input: &str) -> Option<(&str, usize)> {
    let rest = input.strip_prefix('{')?;
    let after_prefix = rest.strip_prefix("select:").unwrap_or(rest);
    let name_len = after_prefix.find(|c: char| !is_variable_name_char(c))?;
    if name_len == 0 || !after_prefix[name_len..].starts_with('}') {
        return None;
    }
    let key_len = (rest.len() - after_prefix.len()) + name_len;
    Some((&rest[..key_len], key_len + 2))
}

fn classify(name: &str) -> BlockKind<'_> {
    if ITERATION_BLOCK_NAMES.contains(&name) {
        return BlockKind::Iteration;
    }
    if TYPED_BLOCK_NAMES.contains(&name) {
        return BlockKind::Typed;
    }
    if let Some(rest) = name.strip_prefix("If") {
        if let Some(key) = rest.strip_prefix("Not") {
            // `{block:IfNot}` has no key left and falls through to the
            // definedness grammar, same as `{block:If}`.
            if !key.is_empty() {
                return BlockKind::Conditional { key, negated: true };
            }
        } else if !rest.is_empty() {
            return BlockKind::Conditional { key: rest, negated: false };
        }
    }
    BlockKind::Definedness
}
