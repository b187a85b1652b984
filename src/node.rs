//! Base parse-tree node capability
//!
//! Every node kind carries a [`NodeBase`]: its type discriminator, its
//! source range and its ordered children. The derived equality and hash on
//! `NodeBase` are the default structural comparison; node kinds with extra
//! state compare the base first and then fold in their own fields.

use std::fmt;

use crate::element::ElementNode;
use crate::error::MarkupError;
use crate::text::{CommentNode, TextNode};

/// Type of parse-tree node
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum NodeKind {
    /// Markup element (`<div>...</div>`)
    Element,
    /// Character data between tags
    Text,
    /// `<!-- ... -->`
    Comment,
}

/// Half-open source range `[start, end)` in document offsets
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub struct Range {
    start: usize,
    end: usize,
}

impl Range {
    /// Create a range, clamping `end` up to `start` if it is inverted
    pub fn new(start: usize, end: usize) -> Self {
        if end < start {
            #[cfg(feature = "tracing")]
            tracing::debug!(start, end, "inverted range, clamping end to start");
            return Range { start, end: start };
        }
        Range { start, end }
    }

    /// Create a range, rejecting inverted bounds
    pub fn try_new(start: usize, end: usize) -> Result<Self, MarkupError> {
        if end < start {
            return Err(MarkupError::InvertedRange { start, end });
        }
        Ok(Range { start, end })
    }

    #[inline]
    pub const fn start(&self) -> usize {
        self.start
    }

    #[inline]
    pub const fn end(&self) -> usize {
        self.end
    }

    #[inline]
    pub const fn len(&self) -> usize {
        self.end - self.start
    }

    #[inline]
    pub const fn is_empty(&self) -> bool {
        self.start == self.end
    }

    /// Check whether `offset` falls inside the range
    #[inline]
    pub const fn contains(&self, offset: usize) -> bool {
        self.start <= offset && offset < self.end
    }
}

impl fmt::Display for Range {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "[{}, {})", self.start, self.end)
    }
}

/// State shared by every node kind
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct NodeBase {
    kind: NodeKind,
    range: Range,
    children: Vec<HtmlNode>,
}

impl NodeBase {
    pub fn new(kind: NodeKind, children: Vec<HtmlNode>, start: usize, end: usize) -> Self {
        NodeBase {
            kind,
            range: Range::new(start, end),
            children,
        }
    }

    /// A base with no children
    pub fn leaf(kind: NodeKind, start: usize, end: usize) -> Self {
        Self::new(kind, Vec::new(), start, end)
    }
}

/// Read access to a parse-tree node
pub trait ParseNode {
    /// The shared base state
    fn base(&self) -> &NodeBase;

    /// Reconstruct the source text for this node and its subtree
    fn serialize(&self) -> String;

    fn kind(&self) -> NodeKind {
        self.base().kind
    }

    fn range(&self) -> Range {
        self.base().range
    }

    fn start(&self) -> usize {
        self.base().range.start
    }

    fn end(&self) -> usize {
        self.base().range.end
    }

    fn children(&self) -> &[HtmlNode] {
        &self.base().children
    }

    fn child_count(&self) -> usize {
        self.base().children.len()
    }

    fn child(&self, index: usize) -> Option<&HtmlNode> {
        self.base().children.get(index)
    }

    /// Deepest descendant whose range contains `offset`
    fn node_at_offset(&self, offset: usize) -> Option<&HtmlNode> {
        let child = self
            .children()
            .iter()
            .find(|child| child.range().contains(offset))?;
        child.node_at_offset(offset).or(Some(child))
    }
}

/// A node of any kind, as stored in a parent's child list
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum HtmlNode {
    Element(ElementNode),
    Text(TextNode),
    Comment(CommentNode),
}

impl HtmlNode {
    pub fn as_element(&self) -> Option<&ElementNode> {
        match self {
            HtmlNode::Element(e) => Some(e),
            _ => None,
        }
    }
}

impl ParseNode for HtmlNode {
    fn base(&self) -> &NodeBase {
        match self {
            HtmlNode::Element(e) => e.base(),
            HtmlNode::Text(t) => t.base(),
            HtmlNode::Comment(c) => c.base(),
        }
    }

    fn serialize(&self) -> String {
        match self {
            HtmlNode::Element(e) => e.serialize(),
            HtmlNode::Text(t) => t.serialize(),
            HtmlNode::Comment(c) => c.serialize(),
        }
    }
}

impl From<ElementNode> for HtmlNode {
    fn from(node: ElementNode) -> Self {
        HtmlNode::Element(node)
    }
}

impl From<TextNode> for HtmlNode {
    fn from(node: TextNode) -> Self {
        HtmlNode::Text(node)
    }
}

impl From<CommentNode> for HtmlNode {
    fn from(node: CommentNode) -> Self {
        HtmlNode::Comment(node)
    }
}

impl fmt::Display for HtmlNode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.serialize())
    }
}
