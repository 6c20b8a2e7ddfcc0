//! The recursive template-rewriting engine.
//!
//! [`ThemeParser`] scans template text left to right. At each position it
//! tries the directive grammars in a fixed priority order: iteration blocks,
//! then typed blocks, then boolean conditionals, then definedness blocks,
//! then variables. The first grammar that matches consumes its span and the
//! evaluator's output replaces it; text no grammar claims is emitted
//! verbatim, one character at a time. Block bodies are re-rendered
//! recursively with the appropriate scope, which is how nesting and
//! per-item iteration scopes propagate.
//!
//! A render is a pure function of (template, options): no I/O, no shared
//! state, and independent renders may run in parallel. The only hard
//! failure is the recursion depth bound.

use serde_json::Value;

use crate::directive::{parse_open_tag, parse_variable, BlockKind};
use crate::error::RenderError;
use crate::matcher::{find_matching_close, CloseMatching};
use crate::meta::extract_meta_options;
use crate::options::{is_truthy, item_scope, variable_text, Options, POST_TYPE_KEY};

/// Default bound on block nesting depth.
pub const DEFAULT_MAX_DEPTH: usize = 64;

/// A Tumblr theme template renderer.
///
/// # Example
///
/// ```rust
/// use tumblr_theme_parser::{Options, ThemeParser};
/// use serde_json::json;
///
/// let mut options = Options::new();
/// options.insert("Title".into(), json!("My blog"));
///
/// let parser = ThemeParser::new();
/// let output = parser.render(&options, "<h1>{Title}</h1>").unwrap();
/// assert_eq!(output, "<h1>My blog</h1>");
/// ```
#[derive(Debug, Clone)]
pub struct ThemeParser {
    max_depth: usize,
    close_matching: CloseMatching,
}

impl ThemeParser {
    /// Creates a parser with the default depth bound and legacy
    /// first-match close-tag pairing.
    pub fn new() -> Self {
        Self {
            max_depth: DEFAULT_MAX_DEPTH,
            close_matching: CloseMatching::FirstMatch,
        }
    }

    /// Sets the maximum block nesting depth.
    pub fn max_depth(mut self, max_depth: usize) -> Self {
        self.max_depth = max_depth;
        self
    }

    /// Sets how opening tags are paired with closing tags.
    pub fn close_matching(mut self, mode: CloseMatching) -> Self {
        self.close_matching = mode;
        self
    }

    /// Renders a template against an options scope.
    ///
    /// Unmatched placeholders resolve to the empty string and unresolvable
    /// block syntax passes through as literal text; the only error is
    /// [`RenderError::TemplateTooDeep`].
    pub fn render(&self, options: &Options, template: &str) -> Result<String, RenderError> {
        self.render_scope(options, template, 0)
    }

    /// Extracts meta options from the template, overlays them on the given
    /// scope (meta wins on collision), and renders.
    ///
    /// The meta tags themselves contain no directive syntax and pass
    /// through to the output unchanged.
    pub fn render_theme(&self, options: &Options, template: &str) -> Result<String, RenderError> {
        let mut scope = options.clone();
        for (key, value) in extract_meta_options(template) {
            scope.insert(key, value);
        }
        self.render_scope(&scope, template, 0)
    }

    fn render_scope(
        &self,
        options: &Options,
        template: &str,
        depth: usize,
    ) -> Result<String, RenderError> {
        if depth > self.max_depth {
            return Err(RenderError::TemplateTooDeep(self.max_depth));
        }

        let mut output = String::with_capacity(template.len());
        let mut pos = 0;
        while pos < template.len() {
            let rest = &template[pos..];
            if rest.starts_with('{') {
                if let Some(consumed) = self.apply_directive(options, rest, depth, &mut output)? {
                    pos += consumed;
                    continue;
                }
            }
            let Some(ch) = rest.chars().next() else { break };
            output.push(ch);
            pos += ch.len_utf8();
        }
        Ok(output)
    }

    /// Tries the directive grammars at the start of `input`. On a match,
    /// appends the evaluated replacement to `output` and returns the number
    /// of bytes consumed.
    fn apply_directive(
        &self,
        options: &Options,
        input: &str,
        depth: usize,
        output: &mut String,
    ) -> Result<Option<usize>, RenderError> {
        if let Some(open) = parse_open_tag(input) {
            let rest = &input[open.len..];
            if let Some((body_len, close_len)) =
                find_matching_close(rest, open.name, self.close_matching)
            {
                let body = &rest[..body_len];
                let consumed = open.len + body_len + close_len;
                let rendered = match open.kind {
                    BlockKind::Iteration => {
                        match self.expand_iteration(options, open.name, body, depth)? {
                            Some(text) => text,
                            // An iteration block with no backing sequence is
                            // left unresolved: its directive text passes
                            // through unchanged, body unrendered.
                            None => input[..consumed].to_string(),
                        }
                    }
                    BlockKind::Typed => self.eval_typed(options, open.name, body, depth)?,
                    BlockKind::Conditional { key, negated } => {
                        self.eval_conditional(options, key, negated, body, depth)?
                    }
                    BlockKind::Definedness => {
                        self.eval_definedness(options, open.name, body, depth)?
                    }
                };
                output.push_str(&rendered);
                return Ok(Some(consumed));
            }
            // An opening tag with no matching close is not a directive;
            // the text falls through as literal characters.
        }

        if let Some((key, len)) = parse_variable(input) {
            if let Some(text) = options.get(key).and_then(variable_text) {
                output.push_str(&text);
            }
            return Ok(Some(len));
        }

        Ok(None)
    }

    /// `{block:Posts}` / `{block:Tags}`: one rendered body per sequence
    /// item, in order, no separator. Returns `None` when the key is absent
    /// or does not hold a sequence.
    fn expand_iteration(
        &self,
        options: &Options,
        name: &str,
        body: &str,
        depth: usize,
    ) -> Result<Option<String>, RenderError> {
        let Some(Value::Array(items)) = options.get(name) else {
            return Ok(None);
        };
        let mut rendered = String::new();
        for item in items {
            let scope = item_scope(options, name, item);
            rendered.push_str(&self.render_scope(&scope, body, depth + 1)?);
        }
        Ok(Some(rendered))
    }

    /// `{block:Photo}` and friends: render iff the reserved post-type
    /// option equals the block name exactly.
    fn eval_typed(
        &self,
        options: &Options,
        name: &str,
        body: &str,
        depth: usize,
    ) -> Result<String, RenderError> {
        if options.get(POST_TYPE_KEY).and_then(Value::as_str) == Some(name) {
            self.render_scope(options, body, depth + 1)
        } else {
            Ok(String::new())
        }
    }

    /// `{block:IfName}` / `{block:IfNotName}`.
    ///
    /// The positive form renders iff the option is present and `true`. The
    /// negative form falls through to rendering whenever the strict
    /// present-and-`false` check fails, so an `IfNot` block always renders
    /// its body. Kept bit-for-bit for compatibility with existing themes.
    fn eval_conditional(
        &self,
        options: &Options,
        key: &str,
        negated: bool,
        body: &str,
        depth: usize,
    ) -> Result<String, RenderError> {
        let expected = !negated;
        if options.get(key).and_then(Value::as_bool) == Some(expected) {
            return self.render_scope(options, body, depth + 1);
        }
        if negated {
            return self.render_scope(options, body, depth + 1);
        }
        Ok(String::new())
    }

    /// Generic `{block:Name}`: render iff the option value is truthy.
    fn eval_definedness(
        &self,
        options: &Options,
        name: &str,
        body: &str,
        depth: usize,
    ) -> Result<String, RenderError> {
        if options.get(name).map(is_truthy).unwrap_or(false) {
            self.render_scope(options, body, depth + 1)
        } else {
            Ok(String::new())
        }
    }
}

impl Default for ThemeParser {
    fn default() -> Self {
        Self::new()
    }
}

/// Renders a template with a default [`ThemeParser`].
pub fn render(options: &Options, template: &str) -> Result<String, RenderError> {
    ThemeParser::new().render(options, template)
}

/// Extracts meta options and renders with a default [`ThemeParser`].
///
/// See [`ThemeParser::render_theme`].
pub fn render_theme(options: &Options, template: &str) -> Result<String, RenderError> {
    ThemeParser::new().render_theme(options, template)
}
