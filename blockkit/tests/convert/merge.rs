//! Section coalescing and heading isolation

use super::{blocks_of, fixture};
use blockkit::Block;

#[test]
fn test_adjacent_content_collapses_into_one_section() {
    let md = "para\n\n- item\n\n> quote\n\n```\ncode\n```\n";
    assert_eq!(
        blocks_of(md),
        vec![Block::section(
            "para\n\n- item\n> quote\n\n```\ncode\n```\n\n"
        )]
    );
}

#[test]
fn test_headings_are_never_merged() {
    assert_eq!(
        blocks_of("a\n\n# H\n\nb\n\n# H2\n"),
        vec![
            Block::section("a\n\n"),
            Block::header("H"),
            Block::Divider,
            Block::section("b\n\n"),
            Block::header("H2"),
            Block::Divider,
        ]
    );
}

#[test]
fn test_consecutive_headings() {
    assert_eq!(
        blocks_of("# A\n## B\n"),
        vec![
            Block::header("A"),
            Block::Divider,
            Block::header("B"),
            Block::Divider,
        ]
    );
}

#[test]
fn test_thematic_break_is_a_standalone_divider() {
    assert_eq!(
        blocks_of("a\n\n***\n\n---\n\nb\n"),
        vec![
            Block::section("a\n\n"),
            Block::Divider,
            Block::Divider,
            Block::section("b\n\n"),
        ]
    );
}

#[test]
fn test_kitchensink() {
    assert_eq!(
        blocks_of(&fixture("kitchensink.md")),
        vec![
            Block::header("Release notes"),
            Block::Divider,
            Block::section("Version _2.0_ ships *today*.\n\n"),
            Block::header("Changes"),
            Block::Divider,
            Block::section(
                "- Faster `parse` &amp; render\n\
                 - Nested:\n   \
                 1. first\n   \
                 2. second\n\
                 - ~Removed~ legacy flag\n\
                 > Quote line one\n\
                 > line two\n\n"
            ),
            Block::Divider,
            Block::section(
                "```\nmake &lt;target&gt;\n```\n\n\
                 See <https://example.com/docs|docs>.\n\n"
            ),
        ]
    );
}
