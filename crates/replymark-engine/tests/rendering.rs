use pretty_assertions::assert_eq;
use replymark_engine::{
    Block, HtmlOptions, HtmlRenderer, InlineOptions, Reply, Row, RowsRenderer, format_inline,
    parse_document, render,
};

#[test]
fn heading_paragraph_list_reply() {
    let html = render("# Title\n\nSome **bold** and *italic* text.\n\n- one\n- two");
    insta::assert_snapshot!(html, @"<h1>Title</h1><p>Some <strong>bold</strong> and <em>italic</em> text.</p><ul><li>one</li><li>two</li></ul>");
}

#[test]
fn fenced_code_reply() {
    let doc = parse_document("```js\nconst x = 1;\n```");
    assert_eq!(
        doc.blocks,
        vec![Block::CodeBlock {
            lang: "js".into(),
            text: "const x = 1;".into()
        }]
    );
    insta::assert_snapshot!(
        HtmlRenderer::default().render(&doc.blocks),
        @r#"<div class="code-wrap"><div class="code-label">js</div><pre><code>const x = 1;</code></pre></div>"#
    );
}

#[test]
fn mixed_reply() {
    let html = render(
        "Here's the plan:\n\n\
         1. **Read** the file\n\
         2. Parse it\n\n\
         | Step | Cost |\n\
         |---|---|\n\
         | read | `O(n)` |\n\n\
         > Tip: see [docs](https://docs.rs/regex).",
    );
    insta::assert_snapshot!(html, @r#"<p>Here&#39;s the plan:</p><ol><li><strong>Read</strong> the file</li><li>Parse it</li></ol><div class="table-wrap"><table><thead><tr><th>Step</th><th>Cost</th></tr></thead><tbody><tr><td>read</td><td><code>O(n)</code></td></tr></tbody></table></div><blockquote>Tip: see <a href="https://docs.rs/regex" target="_blank" rel="noopener noreferrer">docs</a>.</blockquote>"#);
}

#[test]
fn unsafe_link_degrades_to_label() {
    assert_eq!(render("[site](javascript:alert(1))"), "<p>site</p>");
    assert_eq!(format_inline("[site](javascript:alert(1))"), "site");
}

#[test]
fn code_span_in_link_url_degrades_to_label() {
    let html = render("See [a](https://x.io/`y`) and [`b`](https://x.io).");
    assert!(!html.contains(['\u{E000}', '\u{E001}']));
    insta::assert_snapshot!(html, @r#"<p>See a and <a href="https://x.io" target="_blank" rel="noopener noreferrer"><code>b</code></a>.</p>"#);
}

#[test]
fn hash_only_line_is_not_a_heading() {
    assert_eq!(render("# \nnext"), "<p>#<br>next</p>");
}

#[test]
fn fenced_code_keeps_asterisks() {
    insta::assert_snapshot!(
        render("```sh\nls *\n```"),
        @r#"<div class="code-wrap"><div class="code-label">sh</div><pre><code>ls *</code></pre></div>"#
    );
}

#[test]
fn empty_reply_renders_placeholder() {
    assert_eq!(parse_document("").blocks, vec![Block::NoContent]);
    assert_eq!(render(""), "<p>No response returned.</p>");
    assert_eq!(render(" \n\u{200b}\n "), "<p>No response returned.</p>");
}

#[test]
fn code_span_content_is_literal() {
    assert_eq!(render("`*not bold*`"), "<p><code>*not bold*</code></p>");
}

#[test]
fn pipes_without_divider_are_a_paragraph() {
    assert_eq!(render("a|b\ntext|text"), "<p>a|b<br>text|text</p>");
}

#[test]
fn plain_text_is_only_escaped() {
    for text in ["Just words, nothing else", "Tom & \"Jerry\" <3 'x'", "a > b"] {
        assert_eq!(
            format_inline(text),
            replymark_engine::parsing::inline::escape_html(text),
            "{text:?}"
        );
    }
}

#[test]
fn special_characters_escaped_exactly_once() {
    let html = render("Tom & \"Jerry\" <3 'x' [a&b](https://x.io/?q=1&r=2)");
    insta::assert_snapshot!(html, @r#"<p>Tom &amp; &quot;Jerry&quot; &lt;3 &#39;x&#39; <a href="https://x.io/?q=1&amp;r=2" target="_blank" rel="noopener noreferrer">a&amp;b</a></p>"#);
    assert!(!html.contains("&amp;amp;"));
}

#[test]
fn no_unpaired_markers_next_to_whitespace() {
    let samples = [
        "a * b",
        "**x",
        "x **",
        "_y",
        "y_ z",
        "**bold** and *it",
        "**unfinished and *dangling",
        "mixed *_ markers",
        "__ under __",
        "- item **\n- *other",
    ];
    for sample in samples {
        let html = render(sample);
        for bad in [" *", "* ", " _", "_ ", ">*", "*<", ">_", "_<"] {
            assert!(!html.contains(bad), "{sample:?} rendered {html:?}");
        }
    }
    assert_eq!(render("**unfinished and *dangling"), "<p>unfinished and dangling</p>");
}

#[test]
fn configured_renderer() {
    let renderer = HtmlRenderer::new(HtmlOptions {
        empty_placeholder: "Nothing yet.".into(),
        code_labels: false,
        inline: InlineOptions {
            external_links: false,
        },
    });
    insta::assert_snapshot!(
        renderer.render_source("See [x](http://x.io)\n\n```sh\nls\n```"),
        @r#"<p>See <a href="http://x.io">x</a></p><div class="code-wrap"><pre><code>ls</code></pre></div>"#
    );
    assert_eq!(renderer.render_source("   "), "<p>Nothing yet.</p>");
}

#[test]
fn json_reply_to_html_and_rows() {
    let reply = Reply::from_json_str(
        r###"{"model": "m-1", "response": "## Hi\n\n- *a*\n- b", "usage": {"tokens": 12}}"###,
    )
    .unwrap();

    assert_eq!(render(&reply.text), "<h2>Hi</h2><ul><li><em>a</em></li><li>b</li></ul>");

    let rows = RowsRenderer::default().render(&parse_document(&reply.text).blocks);
    assert_eq!(
        rows,
        vec![
            Row::new("heading", "Hi", 120),
            Row::new("list", "<em>a</em>", 120),
            Row::new("list", "b", 120),
        ]
    );

    assert_eq!(
        reply.metadata,
        vec![
            Row::new("model", "m-1", 120),
            Row::new("usage", "{\n  \"tokens\": 12\n}", 120),
        ]
    );
    assert!(reply.metadata[1].long);
}
