//! Nested list tracking
//!
//! Keeps the current list depth and, for ordered lists, the next ordinal per
//! depth:
//!
//! ```text
//! 1.            # depth 1 -> 1
//! 2.            # depth 1 -> 2
//!    1.         # depth 2 -> 1
//!    2.         # depth 2 -> 2
//!       1.      # depth 3 -> 1
//! ```
//!
//! The ordinal of a depth is dropped when its list ends, so a sibling list at
//! the same depth starts counting from 1 again.

use crate::node::ListMeta;
use std::collections::HashMap;

/// Bullet printed for unordered items.
pub const BULLET: &str = "-";

/// Indentation per nesting level beyond the first.
pub const INDENT: &str = "   ";

#[derive(Debug, Default)]
pub struct ListNesting {
    depth: usize,
    ordinals: HashMap<usize, usize>,
}

impl ListNesting {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn depth(&self) -> usize {
        self.depth
    }

    pub fn enter_list(&mut self, meta: ListMeta) {
        self.depth += 1;
        if meta.ordered {
            self.ordinals.insert(self.depth, 1);
        }
    }

    pub fn exit_list(&mut self) {
        self.ordinals.remove(&self.depth);
        self.depth = self.depth.saturating_sub(1);
    }

    /// Write the indentation and marker for an item, followed by one space.
    pub fn write_item_marker(&mut self, out: &mut String, meta: ListMeta) {
        for _ in 1..self.depth {
            out.push_str(INDENT);
        }

        if meta.ordered {
            let ordinal = self.ordinals.entry(self.depth).or_insert(1);
            out.push_str(&ordinal.to_string());
            out.push(meta.delimiter);
            *ordinal += 1;
        } else {
            out.push_str(BULLET);
        }

        out.push(' ');
    }
}
