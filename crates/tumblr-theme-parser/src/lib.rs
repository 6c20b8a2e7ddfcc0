//! # Tumblr Theme Parser
//!
//! A renderer for Tumblr-style theme templates. A theme is plain markup
//! sprinkled with directives; rendering substitutes them against a
//! caller-supplied options scope and returns the final text.
//!
//! ## Directive Syntax
//!
//! - `{Title}` / `{select:Color}` - variable substitution (the `select:`
//!   prefix is part of the lookup key)
//! - `{block:Photo}...{/block:Photo}` - typed block, rendered when the
//!   `PostType` option equals the block name
//! - `{block:IfShowTitle}...` / `{block:IfNotShowTitle}...` - boolean
//!   conditional on the `ShowTitle` option
//! - `{block:Caption}...{/block:Caption}` - definedness block, rendered
//!   when the option is truthy
//! - `{block:Posts}...{/block:Posts}` / `{block:Tags}...` - iteration over
//!   a sequence-valued option, body rendered once per item with the item's
//!   keys overlaid on the outer scope
//!
//! Unmatched placeholders render as the empty string; block syntax that
//! never finds its closing tag passes through as literal text. The one
//! exception is an iteration block whose option is missing: its directive
//! text is left in the output unchanged.
//!
//! ## Quick Start
//!
//! ```rust
//! use tumblr_theme_parser::{render, Options};
//! use serde_json::json;
//!
//! let mut options = Options::new();
//! options.insert("Title".into(), json!("My blog"));
//! options.insert("Posts".into(), json!([
//!     {"PostType": "Photo", "PhotoURL": "a.png"},
//!     {"PostType": "Text", "Body": "hello"},
//! ]));
//!
//! let template = "\
//! <h1>{Title}</h1>\
//! {block:Posts}\
//! {block:Photo}<img src=\"{PhotoURL}\">{/block:Photo}\
//! {block:Text}<p>{Body}</p>{/block:Text}\
//! {/block:Posts}";
//!
//! let output = render(&options, template).unwrap();
//! assert_eq!(output, "<h1>My blog</h1><img src=\"a.png\"><p>hello</p>");
//! ```
//!
//! ## Meta Options
//!
//! Themes declare customization hooks as `<meta>` tags in their own markup.
//! [`extract_meta_options`] scans for them, and [`render_theme`] overlays
//! them on the caller's scope before rendering.
//!
//! ## Compatibility Notes
//!
//! Two historical behaviors are preserved deliberately:
//!
//! - `{block:IfNotName}` renders its body regardless of the option's value.
//! - Closing tags are paired with the first same-name close ahead in the
//!   text, so a block nested inside a block of the same name truncates at
//!   the inner close. [`CloseMatching::DepthAware`] opts into strict
//!   nesting-aware pairing.

mod directive;
mod engine;
mod error;
mod matcher;
mod meta;
mod options;

pub use engine::{render, render_theme, ThemeParser, DEFAULT_MAX_DEPTH};
pub use error::RenderError;
pub use matcher::CloseMatching;
pub use meta::extract_meta_options;
pub use options::{is_truthy, Options, POST_TYPE_KEY};
