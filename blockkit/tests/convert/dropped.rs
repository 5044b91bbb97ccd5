//! Tables, images and raw HTML produce no output

use super::{blocks_of, fixture, single_section};
use blockkit::Block;

#[test]
fn test_unsupported_content_is_dropped() {
    assert_eq!(
        blocks_of(&fixture("dropped.md")),
        vec![Block::section(
            "Before the table.\n\n\n\nAfter the table.\n\n"
        )]
    );
}

#[test]
fn test_image_alt_text_is_dropped() {
    assert_eq!(
        single_section("see ![alt text](x.png) here"),
        "see  here\n\n"
    );
}

#[test]
fn test_inline_html_tags_are_dropped() {
    assert_eq!(single_section("a <b>bold</b> c"), "a bold c\n\n");
}

#[test]
fn test_html_block_alone_produces_nothing() {
    assert!(blocks_of("<div>\nhi\n</div>\n").is_empty());
}

#[test]
fn test_table_cell_text_is_dropped() {
    assert!(blocks_of("| secret |\n|--------|\n| value  |\n").is_empty());
}
