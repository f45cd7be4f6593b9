//! Integration tests for the flattening engine.
//!
//! The offset invariants are checked wholesale over a small fixture corpus;
//! the semantic tests pin down the spacing, wrapping and index-stamping
//! behavior on exact strings.

use html_flatten::{
    COLUMN_INDEX_ATTR, DocumentContent, FlattenOptions, LINE_INDEX_ATTR, ROW_INDEX_ATTR,
    flatten_html,
};
use url::Url;

fn flatten(html: &str) -> DocumentContent {
    flatten_html(html, &FlattenOptions::default()).expect("flattening failed")
}

/// Every tag satisfies the offset contract, and no two spans cross.
fn assert_invariants(content: &DocumentContent) {
    for tag in &content.tags {
        assert!(tag.begin <= tag.end, "<{}> begins after it ends", tag.name);
        assert!(
            tag.end <= content.text.len(),
            "<{}> ends past the text",
            tag.name
        );
        assert_eq!(
            &content.text[tag.begin..tag.end],
            tag.text,
            "<{}> covered text does not match its span",
            tag.name
        );
    }
    // Tags are emitted in open order, so begins are non-decreasing and any
    // later tag starting inside an earlier span must be fully contained.
    for (i, outer) in content.tags.iter().enumerate() {
        for inner in &content.tags[i + 1..] {
            assert!(outer.begin <= inner.begin, "tag list is out of open order");
            if inner.begin < outer.end {
                assert!(
                    inner.end <= outer.end,
                    "<{}> span crosses <{}> span",
                    inner.name,
                    outer.name
                );
            }
        }
    }
}

#[test]
fn invariants_hold_across_a_fixture_corpus() {
    let corpus = [
        "<p>Hello</p><p>World</p>",
        "<h1>Title</h1><p>Some body text that goes on for a while and will certainly wrap at the default width of eighty chars.</p>",
        "<ul><li>One</li><li>Two</li><li>Three</li></ul>",
        "<dl><dt>Term</dt><dd>Definition</dd></dl>",
        "<table><tr><th>H</th></tr><tr><td>A</td><td>B</td></tr></table>",
        "<table><tr><td><table><tr><td>inner</td></tr></table></td><td>outer</td></tr></table>",
        "<line>first</line><line>second</line>",
        "<p>h\u{e9}llo w\u{f6}rld \u{2014} unicode text</p>",
        "<div><p>nested <a href=\"https://example.com/\">link</a> here</p><br></div>",
        "",
    ];
    for html in corpus {
        let content = flatten(html);
        assert_invariants(&content);
    }
}

#[test]
fn paragraphs_get_their_own_lines() {
    let content = flatten("<p>Hello</p><p>World</p>");
    assert_eq!(content.text, "\nHello\n\nWorld\n");

    let paragraphs: Vec<_> = content.tags_named("p").collect();
    assert_eq!(paragraphs.len(), 2);
    assert_eq!(paragraphs[0].text.trim(), "Hello");
    assert_eq!(paragraphs[1].text.trim(), "World");
    assert_invariants(&content);
}

#[test]
fn parser_synthesized_elements_are_tagged_too() {
    let content = flatten("<p>x</p>");
    for name in ["html", "head", "body", "p"] {
        assert_eq!(content.tags_named(name).count(), 1, "missing <{name}> tag");
    }
    // The body span covers the paragraph span.
    let body = content.tags_named("body").next().unwrap();
    let p = content.tags_named("p").next().unwrap();
    assert!(body.begin <= p.begin && p.end <= body.end);
}

#[test]
fn cells_are_stamped_row_then_column() {
    let content =
        flatten("<table><tr><td>A</td><td>B</td></tr><tr><td>C</td></tr></table>");
    assert_eq!(content.text, "\nAB\nC");

    let cells: Vec<_> = content.tags_named("td").collect();
    let stamped: Vec<(&str, &str)> = cells
        .iter()
        .map(|tag| {
            (
                tag.attribute(ROW_INDEX_ATTR).unwrap(),
                tag.attribute(COLUMN_INDEX_ATTR).unwrap(),
            )
        })
        .collect();
    assert_eq!(stamped, [("0", "0"), ("0", "1"), ("1", "0")]);

    let rows: Vec<_> = content.tags_named("tr").collect();
    assert_eq!(rows[0].attribute(ROW_INDEX_ATTR), Some("0"));
    assert_eq!(rows[1].attribute(ROW_INDEX_ATTR), Some("1"));
    assert_invariants(&content);
}

#[test]
fn header_cells_count_like_data_cells() {
    let content = flatten("<table><tr><th>H1</th><th>H2</th></tr><tr><td>A</td></tr></table>");
    let th: Vec<_> = content.tags_named("th").collect();
    assert_eq!(th[0].attribute(COLUMN_INDEX_ATTR), Some("0"));
    assert_eq!(th[1].attribute(COLUMN_INDEX_ATTR), Some("1"));
    let td = content.tags_named("td").next().unwrap();
    assert_eq!(td.attribute(ROW_INDEX_ATTR), Some("1"));
    assert_eq!(td.attribute(COLUMN_INDEX_ATTR), Some("0"));
}

#[test]
fn sibling_tables_restart_their_counters() {
    let content = flatten(
        "<table><tr><td>A</td></tr><tr><td>B</td></tr></table>\
         <table><tr><td>C</td></tr></table>",
    );
    let rows: Vec<_> = content.tags_named("tr").collect();
    assert_eq!(rows[0].attribute(ROW_INDEX_ATTR), Some("0"));
    assert_eq!(rows[1].attribute(ROW_INDEX_ATTR), Some("1"));
    assert_eq!(rows[2].attribute(ROW_INDEX_ATTR), Some("0"));

    let cells: Vec<_> = content.tags_named("td").collect();
    assert_eq!(cells[2].attribute(ROW_INDEX_ATTR), Some("0"));
    assert_eq!(cells[2].attribute(COLUMN_INDEX_ATTR), Some("0"));
}

#[test]
fn nested_tables_do_not_leak_counters() {
    let content = flatten(
        "<table>\
           <tr><td><table><tr><td>i</td></tr></table></td><td>x</td></tr>\
           <tr><td>y</td></tr>\
         </table>",
    );

    // Open order: outer first cell, inner cell, outer second cell, outer
    // second-row cell.
    let cells: Vec<_> = content.tags_named("td").collect();
    let stamped: Vec<(&str, &str)> = cells
        .iter()
        .map(|tag| {
            (
                tag.attribute(ROW_INDEX_ATTR).unwrap(),
                tag.attribute(COLUMN_INDEX_ATTR).unwrap(),
            )
        })
        .collect();
    assert_eq!(stamped, [("0", "0"), ("0", "0"), ("0", "1"), ("1", "0")]);
    assert_invariants(&content);
}

#[test]
fn line_markers_count_flat_across_nesting() {
    let content = flatten(
        "<line>one</line><div><line>two</line></div><line>three</line>",
    );
    let indices: Vec<_> = content
        .tags_named("line")
        .map(|tag| tag.attribute(LINE_INDEX_ATTR).unwrap().to_owned())
        .collect();
    assert_eq!(indices, ["0", "1", "2"]);
}

#[test]
fn list_items_get_bullet_markers() {
    let content = flatten("<ul><li>One</li><li>Two</li></ul>");
    assert_eq!(content.text, "\n * One\n * Two");
}

#[test]
fn definition_lists_indent_terms() {
    let content = flatten("<dl><dt>Term</dt><dd>Definition</dd></dl>");
    assert_eq!(content.text, "  Term\nDefinition\n");
}

#[test]
fn headings_and_breaks_insert_newlines() {
    let content = flatten("<h1>Title</h1>text<br>more");
    assert_eq!(content.text, "\nTitle\ntext\nmore");
}

#[test]
fn h6_does_not_break_the_line() {
    let content = flatten("a<h6>b</h6>c");
    assert_eq!(content.text, "abc");
    assert_eq!(content.tags_named("h6").count(), 1);
}

#[test]
fn anchors_append_resolved_targets() {
    let options = FlattenOptions::default()
        .with_base_url(Url::parse("https://example.com/dir/page.html").unwrap());
    let content = flatten_html("<a href=\"../other\">link</a>", &options).unwrap();
    assert_eq!(content.text, "link <https://example.com/other>");

    // The suffix belongs to the anchor's span.
    let anchor = content.tags_named("a").next().unwrap();
    assert_eq!(anchor.text, "link <https://example.com/other>");
}

#[test]
fn unresolvable_anchors_emit_empty_targets() {
    let content = flatten("<a href=\"/relative\">see</a>");
    assert_eq!(content.text, "see <>");

    let content = flatten("<a>plain</a>");
    assert_eq!(content.text, "plain <>");

    let content = flatten("<a href=\"https://example.com/x\">abs</a>");
    assert_eq!(content.text, "abs <https://example.com/x>");
}

#[test]
fn anchor_attributes_survive_on_the_tag() {
    let content = flatten("<a href=\"/x\" title=\"t\">go</a>");
    let anchor = content.tags_named("a").next().unwrap();
    assert_eq!(anchor.attribute("href"), Some("/x"));
    assert_eq!(anchor.attribute("title"), Some("t"));
}

#[test]
fn long_paragraphs_wrap_at_the_configured_width() {
    let options = FlattenOptions::default().with_wrap_width(10);
    let content = flatten_html("<p>aaa bbb ccc ddd</p>", &options).unwrap();
    assert_eq!(content.text, "\naaa bbb \nccc ddd\n");
    for line in content.text.lines() {
        assert!(line.chars().count() <= 10, "line too long: {line:?}");
    }
    assert_invariants(&content);
}

#[test]
fn default_width_keeps_lines_under_eighty() {
    let words = vec!["word"; 60].join(" ");
    let content = flatten(&format!("<p>{words}</p>"));
    for line in content.text.lines() {
        assert!(line.chars().count() <= 80, "line too long: {line:?}");
    }
    assert_invariants(&content);
}

#[test]
fn unbreakable_tokens_exceed_the_width_alone() {
    let options = FlattenOptions::default().with_wrap_width(5);
    let content = flatten_html("<p>abcdefgh</p>", &options).unwrap();
    assert_eq!(content.text, "\n\nabcdefgh\n");
}

#[test]
fn inter_element_whitespace_collapses() {
    let content = flatten("<p>A</p>\n   <p>B</p>");
    assert_eq!(content.text, "\nA\n\nB\n");

    let content = flatten("<p>Hello   \n   World</p>");
    assert_eq!(content.text, "\nHello World\n");
}

#[test]
fn script_and_style_text_is_not_content() {
    let content = flatten("<p>before</p><script>var x = 1;</script><style>p{}</style><p>after</p>");
    assert_eq!(content.text, "\nbefore\n\nafter\n");
    // The elements themselves are still tagged, spanning no text.
    let script = content.tags_named("script").next().unwrap();
    assert_eq!(script.begin, script.end);
}

#[test]
fn empty_input_flattens_to_empty_text() {
    let content = flatten("");
    assert_eq!(content.text, "");
    // The parser still synthesizes the document scaffolding.
    assert!(content.tags_named("html").count() == 1);
    for tag in &content.tags {
        assert_eq!(tag.begin, 0);
        assert_eq!(tag.end, 0);
    }
}
