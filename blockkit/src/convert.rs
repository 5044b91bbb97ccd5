//! Markdown tree → Block Kit layout
//!
//! The converter walks the comrak tree depth-first. Containers are visited
//! twice (entering and exiting), leaves once. Inline content is formatted into
//! a text buffer; at block boundaries the buffer is handed to the [`Layout`]:
//!
//! - Paragraph exit and code blocks commit the buffer as section text, which
//!   merges with a preceding section.
//! - Heading exit pushes a header followed by a divider.
//! - Horizontal rules push a divider.
//!
//! All traversal state lives in [`Walk`], created fresh for every call to
//! [`Converter::convert`] and threaded through [`visit`] by mutable reference.
//! The walk is iterative, so deeply nested documents cannot exhaust the stack.

use crate::error::ConvertError;
use crate::escape::escape_into;
use crate::inline::{self, Span};
use crate::layout::Layout;
use crate::list::ListNesting;
use crate::node::{
    is_block_quote, is_item, is_list, is_paragraph, related_is, ListMeta, NodeKind, Relation,
};
use crate::treeviz::to_treeviz_str;
use comrak::arena_tree::NodeEdge;
use comrak::nodes::AstNode;
use tracing::{debug, trace};

/// Prefix for every line of a quoted paragraph.
pub const QUOTE_MARKER: &str = "> ";

/// Converts comrak trees into [`Layout`]s.
///
/// The converter itself is stateless configuration; it can be reused and
/// shared, each conversion builds its own traversal state.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Converter {
    trace: bool,
}

impl Converter {
    pub fn new() -> Self {
        Self::default()
    }

    /// Enable trace mode: log the tree, every visit, and the resulting layout.
    ///
    /// Tracing goes through `tracing` only and never changes the output.
    pub fn trace(mut self, enabled: bool) -> Self {
        self.trace = enabled;
        self
    }

    /// Convert the tree rooted at `root`.
    ///
    /// # Errors
    ///
    /// Returns [`ConvertError::UnsupportedNode`] as soon as a node outside the
    /// supported taxonomy is reached. No partial layout is returned.
    pub fn convert<'a>(&self, root: &'a AstNode<'a>) -> Result<Layout, ConvertError> {
        if self.trace {
            debug!("tree:\n{}", to_treeviz_str(root));
        }

        let mut walk = Walk::new(self.trace);
        visit(root, &mut walk)?;
        let layout = walk.finish();

        if self.trace {
            debug!(blocks = layout.len(), "layout:\n{layout:#?}");
        }

        Ok(layout)
    }
}

/// Convert a tree with the default converter.
pub fn convert<'a>(root: &'a AstNode<'a>) -> Result<Layout, ConvertError> {
    Converter::new().convert(root)
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Visit {
    Entering,
    Exiting,
    Leaf,
    Skipped,
}

/// Traversal state of a single conversion.
#[derive(Debug)]
struct Walk {
    buf: String,
    lists: ListNesting,
    layout: Layout,
    trace: bool,
}

/// Walk the tree rooted at `root`.
///
/// Driven by comrak's edge iterator instead of recursion, so nesting depth is
/// bounded by memory rather than by the call stack. Every node yields a start
/// and an end edge; leaves act on the start edge only.
fn visit<'a>(root: &'a AstNode<'a>, walk: &mut Walk) -> Result<(), ConvertError> {
    // Ignored node whose subtree is being skipped.
    let mut skipping: Option<&'a AstNode<'a>> = None;

    for edge in root.traverse() {
        match edge {
            NodeEdge::Start(node) => {
                if skipping.is_some() {
                    continue;
                }
                let ast = node.data.borrow();
                let kind = NodeKind::classify(&ast.value)?;
                match kind {
                    NodeKind::Ignored(_) => {
                        walk.log(kind, Visit::Skipped);
                        skipping = Some(node);
                    }
                    _ if kind.is_leaf() => {
                        walk.log(kind, Visit::Leaf);
                        walk.leaf(kind);
                    }
                    _ => {
                        walk.log(kind, Visit::Entering);
                        walk.enter(node, kind);
                    }
                }
            }
            NodeEdge::End(node) => {
                if let Some(ignored) = skipping {
                    if std::ptr::eq(ignored, node) {
                        skipping = None;
                    }
                    continue;
                }
                let ast = node.data.borrow();
                let kind = NodeKind::classify(&ast.value)?;
                if !kind.is_leaf() {
                    walk.log(kind, Visit::Exiting);
                    walk.exit(node, kind);
                }
            }
        }
    }

    Ok(())
}

impl Walk {
    fn new(trace: bool) -> Self {
        Walk {
            buf: String::new(),
            lists: ListNesting::new(),
            layout: Layout::new(),
            trace,
        }
    }

    fn finish(self) -> Layout {
        self.layout
    }

    fn log(&self, kind: NodeKind<'_>, visit: Visit) {
        if self.trace {
            trace!(
                node = kind.name(),
                ?visit,
                depth = self.lists.depth(),
                literal = kind.literal().unwrap_or_default(),
                "walk"
            );
        }
    }

    /// Commit the buffer as section text and clear it.
    fn commit(&mut self) {
        self.layout.commit(&self.buf);
        self.buf.clear();
    }

    fn enter<'a>(&mut self, node: &'a AstNode<'a>, kind: NodeKind<'_>) {
        match kind {
            NodeKind::Emphasis => self.span(Span::Emphasis),
            NodeKind::Strong => self.span(Span::Strong),
            NodeKind::Strikethrough => self.span(Span::Strikethrough),
            NodeKind::Link(destination) => inline::write_link_open(&mut self.buf, destination),
            NodeKind::List(meta) => self.lists.enter_list(meta),
            NodeKind::Item(meta) => self.item(meta),
            NodeKind::Paragraph => self.enter_paragraph(node),
            // Heading text is carried by its Text children.
            NodeKind::Heading | NodeKind::Document | NodeKind::BlockQuote => {}
            NodeKind::Text(_)
            | NodeKind::SoftBreak
            | NodeKind::LineBreak
            | NodeKind::InlineCode(_)
            | NodeKind::CodeBlock(_)
            | NodeKind::HorizontalRule
            | NodeKind::Ignored(_) => {}
        }
    }

    fn exit<'a>(&mut self, node: &'a AstNode<'a>, kind: NodeKind<'_>) {
        match kind {
            NodeKind::Emphasis => self.span(Span::Emphasis),
            NodeKind::Strong => self.span(Span::Strong),
            NodeKind::Strikethrough => self.span(Span::Strikethrough),
            NodeKind::Link(_) => inline::write_link_close(&mut self.buf),
            NodeKind::List(_) => self.lists.exit_list(),
            NodeKind::Paragraph => self.exit_paragraph(node),
            NodeKind::Heading => self.exit_heading(),
            NodeKind::Item(_) | NodeKind::Document | NodeKind::BlockQuote => {}
            NodeKind::Text(_)
            | NodeKind::SoftBreak
            | NodeKind::LineBreak
            | NodeKind::InlineCode(_)
            | NodeKind::CodeBlock(_)
            | NodeKind::HorizontalRule
            | NodeKind::Ignored(_) => {}
        }
    }

    fn leaf(&mut self, kind: NodeKind<'_>) {
        match kind {
            NodeKind::Text(text) => escape_into(&mut self.buf, text),
            NodeKind::SoftBreak | NodeKind::LineBreak => self.buf.push('\n'),
            NodeKind::InlineCode(literal) => inline::write_inline_code(&mut self.buf, literal),
            NodeKind::CodeBlock(literal) => {
                inline::write_code_block(&mut self.buf, literal);
                self.commit();
            }
            NodeKind::HorizontalRule => self.layout.push_divider(),
            NodeKind::Document
            | NodeKind::Heading
            | NodeKind::Paragraph
            | NodeKind::Emphasis
            | NodeKind::Strong
            | NodeKind::Strikethrough
            | NodeKind::Link(_)
            | NodeKind::List(_)
            | NodeKind::Item(_)
            | NodeKind::BlockQuote
            | NodeKind::Ignored(_) => {}
        }
    }

    fn span(&mut self, span: Span) {
        self.buf.push_str(span.marker());
    }

    fn item(&mut self, meta: ListMeta) {
        self.lists.write_item_marker(&mut self.buf, meta);
    }

    fn exit_heading(&mut self) {
        let text = std::mem::take(&mut self.buf);
        self.layout.push_header(text);
        self.layout.push_divider();
    }

    fn enter_paragraph<'a>(&mut self, node: &'a AstNode<'a>) {
        if related_is(node, Relation::Parent, is_block_quote) {
            self.buf.push_str(QUOTE_MARKER);
        }
        // Separate list output from the paragraph that follows it.
        if related_is(node, Relation::PreviousSibling, is_list) {
            self.buf.push('\n');
        }
    }

    fn exit_paragraph<'a>(&mut self, node: &'a AstNode<'a>) {
        let quoted = related_is(node, Relation::Parent, is_block_quote);

        if quoted {
            self.buf = self.buf.replace('\n', "\n> ");
        }

        // List items keep their text on the marker line.
        if !related_is(node, Relation::Parent, is_item) {
            self.buf.push('\n');
        }

        // Blank quoted line between consecutive quoted paragraphs.
        if quoted && related_is(node, Relation::NextSibling, is_paragraph) {
            self.buf.push_str(QUOTE_MARKER);
        }

        self.buf.push('\n');
        self.commit();
    }
}
