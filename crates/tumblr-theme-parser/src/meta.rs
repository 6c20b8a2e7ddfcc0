//! Meta-option extraction from theme markup.
//!
//! Themes declare customization hooks as HTML meta tags in their own
//! markup, e.g. `<meta name="color:Background" content="#eee">` or
//! `<meta name="if:Show Tags" content="1">`. This pre-step scans the
//! template once and produces the key/value pairs that seed the starting
//! options scope; only names containing `:` contribute.
//!
//! Keys are the full meta names, prefix included, so `if:Show Tags` is
//! stored under `"if:Show Tags"`. `if:` names carry booleans parsed from an
//! integer content (`"1"` is true, `"0"` is false); tags whose `if:`
//! content is not an integer are skipped. Everything else stores the raw
//! content string.

use serde_json::Value;

use crate::options::Options;

/// Scans theme markup for meta tags and returns the options they declare.
///
/// Attributes may appear in either order and use single or double quotes.
/// Tags without both a `name` and a `content` attribute are ignored, as are
/// names without a `:`.
///
/// # Example
///
/// ```rust
/// use tumblr_theme_parser::extract_meta_options;
/// use serde_json::json;
///
/// let markup = r##"<meta name="color:Background" content="#fff">
/// <meta name="if:Show Tags" content="1">"##;
///
/// let options = extract_meta_options(markup);
/// assert_eq!(options.get("color:Background"), Some(&json!("#fff")));
/// assert_eq!(options.get("if:Show Tags"), Some(&json!(true)));
/// ```
pub fn extract_meta_options(template: &str) -> Options {
    let mut options = Options::new();
    let mut search = 0;
    while let Some(off) = template[search..].find("<meta") {
        search += off + "<meta".len();
        let after = &template[search..];
        if !after.starts_with(|c: char| c.is_ascii_whitespace()) {
            continue;
        }
        // Attribute values are assumed not to contain '>'.
        let Some(end) = after.find('>') else { break };
        let tag = &after[..end];
        search += end + 1;

        let (Some(name), Some(content)) = (attr_value(tag, "name"), attr_value(tag, "content"))
        else {
            continue;
        };
        if !name.contains(':') {
            continue;
        }
        let value = if name.starts_with("if:") {
            match content.trim().parse::<i64>() {
                Ok(n) => Value::Bool(n != 0),
                Err(_) => continue,
            }
        } else {
            Value::String(content.to_string())
        };
        options.insert(name.to_string(), value);
    }
    options
}

/// Extracts a quoted attribute value from the interior of a tag.
fn attr_value<'a>(tag: &'a str, attr: &str) -> Option<&'a str> {
    let mut search = 0;
    while let Some(off) = tag[search..].find(attr) {
        let at = search + off;
        search = at + attr.len();
        // The attribute name must follow whitespace, so `name` does not
        // match inside `data-name`.
        if !tag[..at].ends_with(|c: char| c.is_ascii_whitespace()) {
            continue;
        }
        let rest = tag[at + attr.len()..].trim_start();
        let Some(rest) = rest.strip_prefix('=') else { continue };
        let rest = rest.trim_start();
        let quote = match rest.chars().next() {
            Some(q @ ('"' | '\'')) => q,
            _ => continue,
        };
        let value = &rest[1..];
        let end = value.find(quote)?;
        return Some(&value[..end]);
    }
    None
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn string_option() {
        let options = extract_meta_options(r##"<meta name="color:Background" content="#fff">"##);
        assert_eq!(options.get("color:Background"), Some(&json!("#fff")));
    }

    #[test]
    fn boolean_options() {
        let options = extract_meta_options(
            r#"<meta name="if:Show Tags" content="1">
               <meta name="if:Show People" content="0">"#,
        );
        assert_eq!(options.get("if:Show Tags"), Some(&json!(true)));
        assert_eq!(options.get("if:Show People"), Some(&json!(false)));
    }

    #[test]
    fn non_integer_boolean_content_is_skipped() {
        let options = extract_meta_options(r#"<meta name="if:Show Tags" content="yes">"#);
        assert!(options.is_empty());
    }

    #[test]
    fn names_without_colon_are_ignored() {
        let options = extract_meta_options(r#"<meta name="description" content="a blog">"#);
        assert!(options.is_empty());
    }

    #[test]
    fn attribute_order_and_quoting_are_flexible() {
        let options =
            extract_meta_options(r#"<meta content='Arial' name='font:Body' class="x">"#);
        assert_eq!(options.get("font:Body"), Some(&json!("Arial")));
    }

    #[test]
    fn self_closing_and_spaced_tags() {
        let options = extract_meta_options(
            r##"<meta  name = "color:Text"  content = "#333" />"##,
        );
        assert_eq!(options.get("color:Text"), Some(&json!("#333")));
    }

    #[test]
    fn incomplete_tags_are_ignored() {
        assert!(extract_meta_options(r#"<meta name="color:X">"#).is_empty());
        assert!(extract_meta_options(r#"<meta content="x">"#).is_empty());
        assert!(extract_meta_options("<metadata>").is_empty());
        assert!(extract_meta_options("<meta").is_empty());
    }

    #[test]
    fn later_tags_win_on_duplicate_names() {
        let options = extract_meta_options(
            r#"<meta name="color:X" content="a"><meta name="color:X" content="b">"#,
        );
        assert_eq!(options.get("color:X"), Some(&json!("b")));
    }
}
