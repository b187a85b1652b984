//! Leaf node kinds that sit next to elements in a child list

use crate::node::{NodeBase, NodeKind, ParseNode};

/// Character data between tags, kept verbatim
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct TextNode {
    base: NodeBase,
    text: String,
}

impl TextNode {
    pub fn new(text: impl Into<String>, start: usize, end: usize) -> Self {
        TextNode {
            base: NodeBase::leaf(NodeKind::Text, start, end),
            text: text.into(),
        }
    }

    #[inline]
    pub fn text(&self) -> &str {
        &self.text
    }
}

impl ParseNode for TextNode {
    fn base(&self) -> &NodeBase {
        &self.base
    }

    fn serialize(&self) -> String {
        self.text.clone()
    }
}

/// `<!-- ... -->`; `text` is the content between the markers
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct CommentNode {
    base: NodeBase,
    text: String,
}

impl CommentNode {
    pub fn new(text: impl Into<String>, start: usize, end: usize) -> Self {
        CommentNode {
            base: NodeBase::leaf(NodeKind::Comment, start, end),
            text: text.into(),
        }
    }

    #[inline]
    pub fn text(&self) -> &str {
        &self.text
    }
}

impl ParseNode for CommentNode {
    fn base(&self) -> &NodeBase {
        &self.base
    }

    fn serialize(&self) -> String {
        format!("<!--{}-->", self.text)
    }
}
