//! Markdown to Slack Block Kit conversion
//!
//! ```text
//! This crate turns a Markdown document into a Slack Block Kit layout: a list of
//! header, divider and section blocks, with section text written in Slack's
//! `mrkdwn` dialect.
//! ```
//!
//! ```text
//! Parsing is left to comrak. The crate consumes comrak's tree and never parses
//! Markdown itself. Like the rest of the library it is shell agnostic: no code
//! here reads stdin, prints, or looks at env vars. That is the job of
//! blockkit-cli.
//! ```
//!
//! Architecture
//!
//! ```text
//! .
//! ├── error.rs        # ConvertError
//! ├── escape.rs       # & < > entity escaping
//! ├── inline.rs       # mrkdwn markers (emphasis, code, links)
//! ├── list.rs         # list depth and per-depth ordinals
//! ├── layout.rs       # Block / Layout and the section merge rule
//! ├── node.rs         # comrak NodeValue -> NodeKind classification
//! ├── convert.rs      # the tree walker
//! ├── markdown.rs     # comrak options + parse helpers
//! └── treeviz.rs      # tree dump for trace mode
//! ```
//!
//! Core Algorithm
//!
//! ```text
//! The walker visits the tree depth-first, containers on the way in and on the way
//! out, leaves once. Inline nodes write into a text buffer. Block boundaries hand
//! the buffer to the layout: paragraphs and code blocks are committed as section
//! text, merging with the section before them, while headings and thematic breaks
//! push their own blocks and so end the current section.
//! ```
//!
//! ```text
//! Tables, images and raw HTML are known but dropped, including anything nested in
//! them. Any other node kind the parser may produce aborts the conversion with
//! [`ConvertError::UnsupportedNode`].
//! ```
//!
//! Testing
//! ```text
//! tests
//! ├── lib.rs
//! ├── convert
//! │   └── <area>.rs
//! └── fixtures
//!     └── <docname>.md
//! ```
pub mod convert;
pub mod error;
pub mod escape;
pub mod inline;
pub mod layout;
pub mod list;
pub mod markdown;
pub mod node;
pub mod treeviz;

pub use convert::{convert, Converter};
pub use error::ConvertError;
pub use layout::{Block, Layout, Text, TextType};
pub use markdown::{markdown_to_layout, parse_markdown, ParseOptions};
