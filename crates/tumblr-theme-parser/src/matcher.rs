//! Balanced close-tag matching.
//!
//! Given the text following an opening block tag, the matcher finds the
//! closing tag whose captured name is character-identical to the opening
//! tag's name, scanning forward past close tags with other names.

use crate::directive::{parse_close_tag, parse_open_tag};

/// How the matcher pairs an opening tag with its close.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum CloseMatching {
    /// The first same-name closing tag wins, regardless of nesting.
    ///
    /// This is the historical behavior of Tumblr theme parsing: a block
    /// nested inside a block of the same name truncates the outer body at
    /// the inner closing tag. Self-nesting an identical block name is
    /// unsupported in this mode.
    #[default]
    FirstMatch,

    /// Counts same-name opening tags and accepts a closing tag only at
    /// depth zero, so identically named blocks may nest.
    DepthAware,
}

/// Finds the matching close for an open tag named `name`.
///
/// `rest` is the template text immediately after the opening tag. Returns
/// `(body_len, close_len)` where `rest[..body_len]` is the block body and
/// the close tag occupies the next `close_len` bytes. Returns `None` when no
/// matching close exists, in which case the directive fails to match and its
/// text falls through as literal output.
pub(crate) fn find_matching_close(
    rest: &str,
    name: &str,
    mode: CloseMatching,
) -> Option<(usize, usize)> {
    let mut depth = 0usize;
    let mut search = 0usize;
    while let Some(off) = rest[search..].find('{') {
        let at = search + off;
        let tail = &rest[at..];
        if let Some((close_name, close_len)) = parse_close_tag(tail) {
            if close_name == name {
                if depth == 0 {
                    return Some((at, close_len));
                }
                depth -= 1;
            }
            search = at + close_len;
            continue;
        }
        if mode == CloseMatching::DepthAware {
            if let Some(open) = parse_open_tag(tail) {
                if open.name == name {
                    depth += 1;
                    search = at + open.len;
                    continue;
                }
            }
        }
        search = at + 1;
    }
    None
}
