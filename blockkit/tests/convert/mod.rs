//! Conversion tests
//!
//! Markdown in, Block Kit layout out. Inputs are parsed with the default
//! [`ParseOptions`] (tables, strikethrough and autolinks on).

mod dropped;
mod lists;
mod merge;
mod properties;
mod unsupported;

use blockkit::{markdown_to_layout, Block, Layout, ParseOptions, TextType};
use std::path::PathBuf;

pub fn layout_of(md: &str) -> Layout {
    markdown_to_layout(md, &ParseOptions::default()).expect("Should convert markdown")
}

pub fn blocks_of(md: &str) -> Vec<Block> {
    layout_of(md).blocks
}

/// Text of the only block produced for `md`, which must be a section.
pub fn single_section(md: &str) -> String {
    let blocks = blocks_of(md);
    assert_eq!(blocks.len(), 1, "expected exactly one block for {md:?}: {blocks:?}");
    match &blocks[0] {
        Block::Section { text } => {
            assert_eq!(text.kind, TextType::Mrkdwn);
            text.text.clone()
        }
        other => panic!("expected a section block, got {other:?}"),
    }
}

pub fn fixture(name: &str) -> String {
    let path = PathBuf::from(env!("CARGO_MANIFEST_DIR"))
        .join("tests")
        .join("fixtures")
        .join(name);
    std::fs::read_to_string(&path).unwrap_or_else(|e| panic!("Failed to read {path:?}: {e}"))
}
