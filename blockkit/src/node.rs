//! Node classification and relation queries
//!
//! comrak's `NodeValue` covers every CommonMark/GFM extension it knows about.
//! The converter only understands a subset of them, so every node is first
//! classified into a [`NodeKind`]: one variant per supported kind plus an
//! explicit [`IgnoredKind`] group for content that is deliberately dropped.
//! Anything else fails classification with [`ConvertError::UnsupportedNode`].
//!
//! | comrak `NodeValue`                       | `NodeKind`                  |
//! |------------------------------------------|-----------------------------|
//! | Document                                 | Document                    |
//! | Heading                                  | Heading                     |
//! | Paragraph                                | Paragraph                   |
//! | Text                                     | Text                        |
//! | SoftBreak / LineBreak                    | SoftBreak / LineBreak       |
//! | Emph / Strong / Strikethrough            | Emphasis / Strong / Strikethrough |
//! | Link                                     | Link                        |
//! | Code                                     | InlineCode                  |
//! | CodeBlock                                | CodeBlock                   |
//! | List / Item                              | List / Item                 |
//! | BlockQuote                               | BlockQuote                  |
//! | ThematicBreak                            | HorizontalRule              |
//! | Table / TableRow / TableCell             | Ignored(Table)              |
//! | Image                                    | Ignored(Image)              |
//! | HtmlBlock / HtmlInline                   | Ignored(RawMarkup)          |
//!
//! Relations to neighbouring nodes are only ever looked up, never stored: see
//! [`related_is`].

use crate::error::ConvertError;
use comrak::nodes::{AstNode, ListDelimType, ListType, NodeList, NodeValue};

/// List metadata shared by List and Item nodes.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ListMeta {
    pub ordered: bool,
    /// Character printed after an ordinal (`.` or `)`).
    pub delimiter: char,
}

impl From<&NodeList> for ListMeta {
    fn from(list: &NodeList) -> Self {
        ListMeta {
            ordered: matches!(list.list_type, ListType::Ordered),
            delimiter: match list.delimiter {
                ListDelimType::Period => '.',
                ListDelimType::Paren => ')',
            },
        }
    }
}

/// Node kinds that are known but produce no output.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum IgnoredKind {
    Table,
    Image,
    RawMarkup,
}

/// Classified view over a comrak node value.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NodeKind<'v> {
    Document,
    Heading,
    Paragraph,
    Text(&'v str),
    SoftBreak,
    LineBreak,
    Emphasis,
    Strong,
    Strikethrough,
    /// Destination is `None` when the link has an empty URL.
    Link(Option<&'v str>),
    InlineCode(&'v str),
    CodeBlock(&'v str),
    List(ListMeta),
    Item(ListMeta),
    BlockQuote,
    HorizontalRule,
    Ignored(IgnoredKind),
}

impl<'v> NodeKind<'v> {
    /// Classify a comrak node value.
    pub fn classify(value: &'v NodeValue) -> Result<Self, ConvertError> {
        let kind = match value {
            NodeValue::Document => NodeKind::Document,
            NodeValue::Heading(_) => NodeKind::Heading,
            NodeValue::Paragraph => NodeKind::Paragraph,
            NodeValue::Text(text) => NodeKind::Text(text),
            NodeValue::SoftBreak => NodeKind::SoftBreak,
            NodeValue::LineBreak => NodeKind::LineBreak,
            NodeValue::Emph => NodeKind::Emphasis,
            NodeValue::Strong => NodeKind::Strong,
            NodeValue::Strikethrough => NodeKind::Strikethrough,
            NodeValue::Link(link) => {
                let url: &str = &link.url;
                NodeKind::Link(if url.is_empty() { None } else { Some(url) })
            }
            NodeValue::Code(code) => NodeKind::InlineCode(&code.literal),
            NodeValue::CodeBlock(block) => NodeKind::CodeBlock(&block.literal),
            NodeValue::List(list) => NodeKind::List(ListMeta::from(list)),
            NodeValue::Item(list) => NodeKind::Item(ListMeta::from(list)),
            NodeValue::BlockQuote => NodeKind::BlockQuote,
            NodeValue::ThematicBreak => NodeKind::HorizontalRule,
            NodeValue::Table(_) | NodeValue::TableRow(_) | NodeValue::TableCell => {
                NodeKind::Ignored(IgnoredKind::Table)
            }
            NodeValue::Image(_) => NodeKind::Ignored(IgnoredKind::Image),
            NodeValue::HtmlBlock(_) | NodeValue::HtmlInline(_) => {
                NodeKind::Ignored(IgnoredKind::RawMarkup)
            }
            other => {
                return Err(ConvertError::UnsupportedNode {
                    kind: comrak_kind_name(other),
                })
            }
        };
        Ok(kind)
    }

    /// Leaves get a single visit, everything else is entered and exited.
    pub fn is_leaf(&self) -> bool {
        matches!(
            self,
            NodeKind::Text(_)
                | NodeKind::SoftBreak
                | NodeKind::LineBreak
                | NodeKind::InlineCode(_)
                | NodeKind::CodeBlock(_)
                | NodeKind::HorizontalRule
        )
    }

    /// Short name used in trace output.
    pub fn name(&self) -> &'static str {
        match self {
            NodeKind::Document => "Document",
            NodeKind::Heading => "Heading",
            NodeKind::Paragraph => "Paragraph",
            NodeKind::Text(_) => "Text",
            NodeKind::SoftBreak => "SoftBreak",
            NodeKind::LineBreak => "LineBreak",
            NodeKind::Emphasis => "Emphasis",
            NodeKind::Strong => "Strong",
            NodeKind::Strikethrough => "Strikethrough",
            NodeKind::Link(_) => "Link",
            NodeKind::InlineCode(_) => "InlineCode",
            NodeKind::CodeBlock(_) => "CodeBlock",
            NodeKind::List(_) => "List",
            NodeKind::Item(_) => "Item",
            NodeKind::BlockQuote => "BlockQuote",
            NodeKind::HorizontalRule => "HorizontalRule",
            NodeKind::Ignored(IgnoredKind::Table) => "Table",
            NodeKind::Ignored(IgnoredKind::Image) => "Image",
            NodeKind::Ignored(IgnoredKind::RawMarkup) => "RawMarkup",
        }
    }

    /// Literal payload of text-bearing leaves.
    pub fn literal(&self) -> Option<&'v str> {
        match *self {
            NodeKind::Text(text) | NodeKind::InlineCode(text) | NodeKind::CodeBlock(text) => {
                Some(text)
            }
            _ => None,
        }
    }
}

/// comrak's own name for a node kind, as used in its XML output.
///
/// Error messages and tree dumps use it for nodes that have no [`NodeKind`].
pub fn comrak_kind_name(value: &NodeValue) -> &'static str {
    match value {
        NodeValue::Document => "document",
        NodeValue::FrontMatter(_) => "frontmatter",
        NodeValue::BlockQuote => "block_quote",
        NodeValue::List(_) => "list",
        NodeValue::Item(_) => "item",
        NodeValue::DescriptionList => "description_list",
        NodeValue::DescriptionItem(_) => "description_item",
        NodeValue::DescriptionTerm => "description_term",
        NodeValue::DescriptionDetails => "description_details",
        NodeValue::CodeBlock(_) => "code_block",
        NodeValue::HtmlBlock(_) => "html_block",
        NodeValue::Paragraph => "paragraph",
        NodeValue::Heading(_) => "heading",
        NodeValue::ThematicBreak => "thematic_break",
        NodeValue::FootnoteDefinition(_) => "footnote_definition",
        NodeValue::Table(_) => "table",
        NodeValue::TableRow(_) => "table_row",
        NodeValue::TableCell => "table_cell",
        NodeValue::Text(_) => "text",
        NodeValue::TaskItem(_) => "taskitem",
        NodeValue::SoftBreak => "softbreak",
        NodeValue::LineBreak => "linebreak",
        NodeValue::Code(_) => "code",
        NodeValue::HtmlInline(_) => "html_inline",
        NodeValue::Emph => "emph",
        NodeValue::Strong => "strong",
        NodeValue::Strikethrough => "strikethrough",
        NodeValue::Superscript => "superscript",
        NodeValue::Link(_) => "link",
        NodeValue::Image(_) => "image",
        NodeValue::FootnoteReference(_) => "footnote_reference",
        NodeValue::Math(_) => "math",
        NodeValue::MultilineBlockQuote(_) => "multiline_block_quote",
        NodeValue::Escaped => "escaped",
        NodeValue::WikiLink(_) => "wikilink",
        NodeValue::Underline => "underline",
        NodeValue::SpoileredText => "spoiler",
        NodeValue::EscapedTag(_) => "escaped_tag",
        // Only reachable when comrak is built with its `shortcodes` feature.
        #[allow(unreachable_patterns)]
        _ => "shortcode",
    }
}

/// A neighbour of a node in the tree.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Relation {
    Parent,
    PreviousSibling,
    NextSibling,
}

fn related<'a>(node: &'a AstNode<'a>, relation: Relation) -> Option<&'a AstNode<'a>> {
    match relation {
        Relation::Parent => node.parent(),
        Relation::PreviousSibling => node.previous_sibling(),
        Relation::NextSibling => node.next_sibling(),
    }
}

/// Whether the neighbour of `node` exists and its value satisfies `probe`.
pub fn related_is<'a>(
    node: &'a AstNode<'a>,
    relation: Relation,
    probe: impl Fn(&NodeValue) -> bool,
) -> bool {
    related(node, relation).is_some_and(|other| probe(&other.data.borrow().value))
}

pub fn is_block_quote(value: &NodeValue) -> bool {
    matches!(value, NodeValue::BlockQuote)
}

pub fn is_item(value: &NodeValue) -> bool {
    matches!(value, NodeValue::Item(_))
}

pub fn is_list(value: &NodeValue) -> bool {
    matches!(value, NodeValue::List(_))
}

pub fn is_paragraph(value: &NodeValue) -> bool {
    matches!(value, NodeValue::Paragraph)
}
