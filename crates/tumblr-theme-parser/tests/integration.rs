use serde_json::json;
use tumblr_theme_parser::{
    render, render_theme, CloseMatching, Options, RenderError, ThemeParser,
};

fn opts(value: serde_json::Value) -> Options {
    match value {
        serde_json::Value::Object(map) => map,
        other => panic!("test options must be a mapping, got {}", other),
    }
}

#[test]
fn test_full_theme_render() {
    let options = opts(json!({
        "Title": "A photoblog",
        "Description": "pictures and words",
        "Posts": [
            {
                "PostType": "Photo",
                "PhotoURL": "1.png",
                "Caption": "first",
                "Tags": [{"Tag": "art"}, {"Tag": "film"}],
            },
            {
                "PostType": "Text",
                "Body": "plain words",
                "Tags": [],
            },
        ],
    }));

    let template = "\
<h1>{Title}</h1>\
{block:Description}<p>{Description}</p>{/block:Description}\
{block:Posts}<article>\
{block:Photo}<img src=\"{PhotoURL}\">{block:Caption}<em>{Caption}</em>{/block:Caption}{/block:Photo}\
{block:Text}<p>{Body}</p>{/block:Text}\
{block:Tags}<a>#{Tag}</a>{/block:Tags}\
</article>{/block:Posts}";

    let output = render(&options, template).unwrap();
    assert_eq!(
        output,
        "<h1>A photoblog</h1>\
         <p>pictures and words</p>\
         <article><img src=\"1.png\"><em>first</em><a>#art</a><a>#film</a></article>\
         <article><p>plain words</p></article>"
    );
}

#[test]
fn test_render_theme_reads_meta_options() {
    // The `select:` placeholder looks up the literal compound key, which is
    // exactly what a select meta tag declares.
    let template = "\
<meta name=\"select:Layout\" content=\"grid\">\
<div class=\"{select:Layout}\">{Title}</div>";

    let options = opts(json!({"Title": "Hi"}));
    let output = render_theme(&options, template).unwrap();

    // The meta tag itself carries no directive syntax and passes through.
    assert_eq!(
        output,
        "<meta name=\"select:Layout\" content=\"grid\"><div class=\"grid\">Hi</div>"
    );
}

#[test]
fn test_meta_options_override_caller_scope() {
    let template = "<meta name=\"select:Layout\" content=\"grid\">{select:Layout}";
    let options = opts(json!({"select:Layout": "list"}));

    let output = render_theme(&options, template).unwrap();
    assert_eq!(output, "<meta name=\"select:Layout\" content=\"grid\">grid");
}

#[test]
fn test_pure_render_ignores_meta_tags() {
    let template = "<meta name=\"select:Layout\" content=\"grid\">{select:Layout}";
    let output = render(&Options::new(), template).unwrap();
    assert_eq!(output, "<meta name=\"select:Layout\" content=\"grid\">");
}

#[test]
fn test_ifnot_blocks_always_render() {
    let template = "{block:IfNotHideFooter}<footer/>{/block:IfNotHideFooter}";
    for options in [json!({}), json!({"HideFooter": true}), json!({"HideFooter": false})] {
        assert_eq!(render(&opts(options), template).unwrap(), "<footer/>");
    }
}

#[test]
fn test_garbled_templates_never_fail() {
    let inputs = [
        "{",
        "}{",
        "{block:",
        "{block:Photo}",
        "{/block:Photo}",
        "{block:Photo}no close",
        "{block:A}{/block:B}",
        "{select:}",
        "{block:}",
        "{a.b}",
    ];
    for input in inputs {
        let output = render(&opts(json!({"PostType": "Photo"})), input).unwrap();
        assert_eq!(output, input, "garbled input should pass through verbatim");
    }
}

#[test]
fn test_unresolved_iteration_survives_rerendering() {
    // Rendering output that still contains an unresolved iteration
    // directive reproduces it again: rendering is stable on its own output.
    let template = "{block:Posts}{Title}{/block:Posts}";
    let first = render(&Options::new(), template).unwrap();
    let second = render(&Options::new(), &first).unwrap();
    assert_eq!(first, template);
    assert_eq!(second, template);
}

#[test]
fn test_depth_bound_is_a_hard_error() {
    let parser = ThemeParser::new()
        .max_depth(4)
        .close_matching(CloseMatching::DepthAware);

    let mut template = "x".to_string();
    for _ in 0..6 {
        template = format!("{{block:Caption}}{template}{{/block:Caption}}");
    }

    let err = parser
        .render(&opts(json!({"Caption": "y"})), &template)
        .unwrap_err();
    assert_eq!(err, RenderError::TemplateTooDeep(4));
}
