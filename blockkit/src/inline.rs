//! mrkdwn inline formatting
//!
//! Emphasis, strong and strikethrough use symmetric markers: the same marker
//! is written when the node is entered and when it is exited, so nesting
//! balances itself (`***abc***` becomes `_*abc*_`).

use crate::escape::escape_into;

pub const ITALIC: &str = "_";
pub const STRONG: &str = "*";
pub const STRIKE: &str = "~";
pub const CODE: &str = "`";
pub const CODE_FENCE: &str = "```";
pub const LINK_OPEN: &str = "<";
pub const LINK_CLOSE: &str = ">";
pub const LINK_SEPARATOR: &str = "|";

/// Inline spans with a symmetric marker.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Span {
    Emphasis,
    Strong,
    Strikethrough,
}

impl Span {
    pub fn marker(self) -> &'static str {
        match self {
            Span::Emphasis => ITALIC,
            Span::Strong => STRONG,
            Span::Strikethrough => STRIKE,
        }
    }
}

/// Write `` `literal` ``.
pub fn write_inline_code(out: &mut String, literal: &str) {
    out.push_str(CODE);
    escape_into(out, literal);
    out.push_str(CODE);
}

/// Write a fenced code block, followed by a blank line.
pub fn write_code_block(out: &mut String, literal: &str) {
    out.push_str(CODE_FENCE);
    out.push('\n');
    escape_into(out, literal);
    out.push_str(CODE_FENCE);
    out.push_str("\n\n");
}

/// Opening half of `<destination|text>`. Without a destination only `<` is
/// written and the link text ends up wrapped in bare angle brackets.
pub fn write_link_open(out: &mut String, destination: Option<&str>) {
    out.push_str(LINK_OPEN);
    if let Some(destination) = destination {
        out.push_str(destination);
        out.push_str(LINK_SEPARATOR);
    }
}

pub fn write_link_close(out: &mut String) {
    out.push_str(LINK_CLOSE);
}
