//! Block Kit layout model
//!
//! A [`Layout`] is what Slack's `blocks` payload expects. Only the three block
//! types the converter produces are modelled:
//!
//! | Block     | JSON `type` | Text object                 |
//! |-----------|-------------|-----------------------------|
//! | Header    | `header`    | `plain_text`                |
//! | Divider   | `divider`   | none (field omitted)        |
//! | Section   | `section`   | `mrkdwn`                    |
//!
//! The layout is append-only while a conversion runs. Text destined for
//! sections always goes through [`Layout::commit`], which coalesces adjacent
//! section content into a single block.

use serde::Serialize;

/// Formatting dialect of a [`Text`] object.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum TextType {
    #[serde(rename = "plain_text")]
    PlainText,
    #[serde(rename = "mrkdwn")]
    Mrkdwn,
}

/// A Block Kit text object.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Text {
    #[serde(rename = "type")]
    pub kind: TextType,
    pub text: String,
}

impl Text {
    pub fn plain(text: impl Into<String>) -> Self {
        Text {
            kind: TextType::PlainText,
            text: text.into(),
        }
    }

    pub fn mrkdwn(text: impl Into<String>) -> Self {
        Text {
            kind: TextType::Mrkdwn,
            text: text.into(),
        }
    }
}

/// One unit of the output layout.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "type", rename_all = "lowercase")]
pub enum Block {
    Header { text: Text },
    Divider,
    Section { text: Text },
}

impl Block {
    pub fn header(text: impl Into<String>) -> Self {
        Block::Header {
            text: Text::plain(text),
        }
    }

    pub fn section(text: impl Into<String>) -> Self {
        Block::Section {
            text: Text::mrkdwn(text),
        }
    }
}

/// Ordered sequence of blocks, serialisable as a Slack `blocks` payload.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct Layout {
    pub blocks: Vec<Block>,
}

impl Layout {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn is_empty(&self) -> bool {
        self.blocks.is_empty()
    }

    pub fn len(&self) -> usize {
        self.blocks.len()
    }

    /// Add section text to the layout.
    ///
    /// Extends the last block when it is a section, otherwise starts a new
    /// section. Headers and dividers therefore always end a run of sections.
    pub fn commit(&mut self, text: &str) {
        if let Some(Block::Section { text: last }) = self.blocks.last_mut() {
            last.text.push_str(text);
            return;
        }
        self.blocks.push(Block::section(text));
    }

    pub fn push_header(&mut self, text: impl Into<String>) {
        self.blocks.push(Block::header(text));
    }

    pub fn push_divider(&mut self) {
        self.blocks.push(Block::Divider);
    }
}
