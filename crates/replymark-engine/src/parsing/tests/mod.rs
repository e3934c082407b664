//! Document-level tests for the parsing module.
//!
//! Every document parsed here is also run through the span invariant checker.


use pretty_assertions::assert_eq;

use crate::parsing::{
    blocks::{Block, BlockBuilder},
    inline::format_inline,
    parse_document,
    source::normalize_source,
};

fn parse_checked(md: &str) -> Vec<Block> {
    let normalized = normalize_source(md);
    let spanned = BlockBuilder::new(&normalized).finish_spanned();
    invariants::check(&normalized, &spanned);

    let blocks = parse_document(md).blocks;
    assert_eq!(
        blocks,
        spanned.into_iter().map(|sb| sb.block).collect::<Vec<_>>()
    );
    blocks
}

fn para(text: &str) -> Block {
    Block::Paragraph { text: text.into() }
}

#[test]
fn heading_paragraph_and_list() {
    let blocks = parse_checked("# Title\n\nSome **bold** and *italic* text.\n\n- one\n- two");
    assert_eq!(
        blocks,
        vec![
            Block::Heading {
                level: 1,
                text: "Title".into()
            },
            para("Some **bold** and *italic* text."),
            Block::List {
                ordered: false,
                items: vec!["one".into(), "two".into()]
            },
        ]
    );

    let Block::Paragraph { text } = &blocks[1] else {
        panic!("expected paragraph");
    };
    assert_eq!(
        format_inline(text),
        "Some <strong>bold</strong> and <em>italic</em> text."
    );
}

#[test]
fn fenced_code_with_language() {
    assert_eq!(
        parse_checked("```js\nconst x = 1;\n```"),
        vec![Block::CodeBlock {
            lang: "js".into(),
            text: "const x = 1;".into()
        }]
    );
}

#[test]
fn fence_is_a_raw_zone() {
    let blocks = parse_checked("```\n# not a heading\n- not a list\n| a | b |\n|---|---|\n```\nafter");
    assert_eq!(
        blocks,
        vec![
            Block::CodeBlock {
                lang: String::new(),
                text: "# not a heading\n- not a list\n| a | b |\n|---|---|".into()
            },
            para("after"),
        ]
    );
}

#[test]
fn unterminated_fence_runs_to_end() {
    assert_eq!(
        parse_checked("intro\n```py\nprint(1)\n\nprint(2)"),
        vec![
            para("intro"),
            Block::CodeBlock {
                lang: "py".into(),
                text: "print(1)\n\nprint(2)".into()
            },
        ]
    );
}

#[test]
fn fenced_asterisks_are_kept() {
    assert_eq!(
        parse_checked("```sh\nls *\necho 2 * 3\n```\n2 * 3"),
        vec![
            Block::CodeBlock {
                lang: "sh".into(),
                text: "ls *\necho 2 * 3".into()
            },
            para("2  3"),
        ]
    );
}

#[test]
fn hashes_without_text_are_a_paragraph() {
    assert_eq!(
        parse_checked("a\n\n# \n\nb"),
        vec![para("a"), para("#"), para("b")]
    );
}

#[test]
fn pipes_without_divider_stay_a_paragraph() {
    assert_eq!(parse_checked("a|b\ntext|text"), vec![para("a|b\ntext|text")]);
}

#[test]
fn table_ends_at_non_pipe_line() {
    assert_eq!(
        parse_checked("Name | Age\n--- | ---\nAda | 36\nBob\n"),
        vec![
            Block::Table {
                header: vec!["Name".into(), "Age".into()],
                rows: vec![vec!["Ada".into(), "36".into()]],
            },
            para("Bob"),
        ]
    );
}

#[test]
fn paragraph_stops_at_block_start() {
    assert_eq!(
        parse_checked("first line\nsecond line\n> quoted\n1. item"),
        vec![
            para("first line\nsecond line"),
            Block::BlockQuote {
                text: "quoted".into()
            },
            Block::List {
                ordered: true,
                items: vec!["item".into()]
            },
        ]
    );
}

#[test]
fn quote_lines_are_joined() {
    assert_eq!(
        parse_checked("> one\n>two\n >  three"),
        vec![Block::BlockQuote {
            text: "one\ntwo\n three".into()
        }]
    );
}

#[test]
fn list_split_by_blank_line_stays_one_list() {
    assert_eq!(
        parse_checked("- a\n\n- b\n\n\n\n- c"),
        vec![Block::List {
            ordered: false,
            items: vec!["a".into(), "b".into(), "c".into()]
        }]
    );
}

#[test]
fn switching_list_kind_starts_new_list() {
    assert_eq!(
        parse_checked("- a\n1. b"),
        vec![
            Block::List {
                ordered: false,
                items: vec!["a".into()]
            },
            Block::List {
                ordered: true,
                items: vec!["b".into()]
            },
        ]
    );
}

#[test]
fn bullet_asterisk_survives_normalization() {
    assert_eq!(
        parse_checked("* first\n* second"),
        vec![Block::List {
            ordered: false,
            items: vec!["first".into(), "second".into()]
        }]
    );
}

#[test]
fn crlf_and_zero_width_are_normalized() {
    assert_eq!(
        parse_checked("\u{feff}# Hi\r\n\r\nbody\u{200b}"),
        vec![
            Block::Heading {
                level: 1,
                text: "Hi".into()
            },
            para("body"),
        ]
    );
}

#[test]
fn empty_and_blank_input_yield_no_content() {
    for src in ["", "   ", "\n\n\t\n", "***", " * \n *"] {
        assert_eq!(parse_checked(src), vec![Block::NoContent], "source {src:?}");
    }
}

#[test]
fn mixed_document_keeps_source_order() {
    let md = "## Plan\n\
              Steps below.\n\
              \n\
              1. fetch\n\
              2) parse\n\
              \n\
              | k | v |\n\
              |:-|-:|\n\
              | a | 1 |\n\
              \n\
              ```\n\
              raw\n\
              ```\n\
              > done";
    let kinds: Vec<_> = parse_checked(md).iter().map(Block::kind_name).collect();
    assert_eq!(
        kinds,
        vec![
            "heading",
            "paragraph",
            "ordered_list",
            "table",
            "code",
            "blockquote"
        ]
    );
}
