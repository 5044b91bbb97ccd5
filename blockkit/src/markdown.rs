//! Markdown parsing front-end
//!
//! Parsing is done by `comrak`; this module only decides which extensions are
//! turned on. The converter understands the nodes produced by tables,
//! strikethrough and autolinks. Extensions that introduce other node kinds
//! (task lists, footnotes, front matter, ...) are never enabled here because
//! the converter would reject their nodes.

use crate::convert::Converter;
use crate::error::ConvertError;
use crate::layout::Layout;
use comrak::nodes::AstNode;
use comrak::{parse_document, Arena, ComrakOptions};

/// Parser extensions.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ParseOptions {
    pub strikethrough: bool,
    pub table: bool,
    pub autolink: bool,
}

impl Default for ParseOptions {
    fn default() -> Self {
        ParseOptions {
            strikethrough: true,
            table: true,
            autolink: true,
        }
    }
}

impl ParseOptions {
    fn to_comrak(self) -> ComrakOptions<'static> {
        let mut options = ComrakOptions::default();
        options.extension.strikethrough = self.strikethrough;
        options.extension.table = self.table;
        options.extension.autolink = self.autolink;
        options
    }
}

/// Parse Markdown into a comrak tree allocated in `arena`.
pub fn parse_markdown<'a>(
    arena: &'a Arena<AstNode<'a>>,
    source: &str,
    options: &ParseOptions,
) -> &'a AstNode<'a> {
    parse_document(arena, source, &options.to_comrak())
}

/// Parse and convert Markdown in one step.
pub fn markdown_to_layout(source: &str, options: &ParseOptions) -> Result<Layout, ConvertError> {
    markdown_to_layout_with(source, options, Converter::new())
}

/// Parse and convert Markdown with a configured [`Converter`].
pub fn markdown_to_layout_with(
    source: &str,
    options: &ParseOptions,
    converter: Converter,
) -> Result<Layout, ConvertError> {
    let arena = Arena::new();
    let root = parse_markdown(&arena, source, options);
    converter.convert(root)
}
