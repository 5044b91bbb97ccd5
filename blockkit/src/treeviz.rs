//! Treeviz dump of a comrak tree
//!
//! Used by trace mode to show the tree the converter is about to walk. One
//! line per node, two spaces of indentation per level of nesting:
//!
//! `<indentation><icon> <kind> <literal, truncated to 30 characters>`
//!
//! Example:
//!
//! ```text
//! ⧉ Document
//!   § Heading
//!     ◦ Text Heading 1
//!   ¶ Paragraph
//!     ◦ Text Hello
//!   ☰ List
//!     • Item
//!       ¶ Paragraph
//!         ◦ Text a
//! ```
//!
//! Nodes the converter would reject are still printed (with a `?` icon and the
//! comrak kind name) so the dump is useful when tracking them down.

use crate::node::{comrak_kind_name, IgnoredKind, NodeKind};
use comrak::arena_tree::NodeEdge;
use comrak::nodes::AstNode;

const MAX_LITERAL: usize = 30;

fn icon(kind: &NodeKind<'_>) -> &'static str {
    match kind {
        NodeKind::Document => "⧉",
        NodeKind::Heading => "§",
        NodeKind::Paragraph => "¶",
        NodeKind::Text(_) => "◦",
        NodeKind::SoftBreak | NodeKind::LineBreak => "↵",
        NodeKind::Emphasis => "𝐼",
        NodeKind::Strong => "𝐁",
        NodeKind::Strikethrough => "∼",
        NodeKind::Link(_) => "⊕",
        NodeKind::InlineCode(_) => "ƒ",
        NodeKind::CodeBlock(_) => "𝒱",
        NodeKind::List(_) => "☰",
        NodeKind::Item(_) => "•",
        NodeKind::BlockQuote => "\"",
        NodeKind::HorizontalRule => "─",
        NodeKind::Ignored(IgnoredKind::Table)
        | NodeKind::Ignored(IgnoredKind::Image)
        | NodeKind::Ignored(IgnoredKind::RawMarkup) => "∅",
    }
}

fn truncate(text: &str) -> String {
    let flat = text.replace('\n', "⏎");
    if flat.chars().count() <= MAX_LITERAL {
        return flat;
    }
    let mut short: String = flat.chars().take(MAX_LITERAL - 1).collect();
    short.push('…');
    short
}

fn format_node(kind_or_name: Result<NodeKind<'_>, &'static str>, depth: usize, out: &mut String) {
    for _ in 0..depth {
        out.push_str("  ");
    }

    match kind_or_name {
        Ok(kind) => {
            out.push_str(icon(&kind));
            out.push(' ');
            out.push_str(kind.name());
            let detail = match kind {
                NodeKind::Link(Some(destination)) => Some(destination),
                _ => kind.literal(),
            };
            if let Some(detail) = detail {
                out.push(' ');
                out.push_str(&truncate(detail));
            }
        }
        Err(name) => {
            out.push_str("? ");
            out.push_str(name);
        }
    }
    out.push('\n');
}

/// Render the tree rooted at `root`.
///
/// Walks with comrak's edge iterator rather than recursion, so arbitrarily
/// deep trees can be dumped.
pub fn to_treeviz_str<'a>(root: &'a AstNode<'a>) -> String {
    let mut out = String::new();
    let mut depth = 0;

    for edge in root.traverse() {
        match edge {
            NodeEdge::Start(node) => {
                let ast = node.data.borrow();
                let kind = NodeKind::classify(&ast.value).map_err(|_| comrak_kind_name(&ast.value));
                format_node(kind, depth, &mut out);
                depth += 1;
            }
            NodeEdge::End(_) => depth -= 1,
        }
    }

    out
}
