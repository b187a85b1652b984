//! Element nodes
//!
//! One `ElementNode` is built per opening tag. The parser then feeds it
//! attributes as it consumes them; after that the node is only read.

use std::fmt;
use std::hash::{Hash, Hasher};

use crate::attributes::AttributeStore;
use crate::name::{tag_name, NameValue};
use crate::node::{HtmlNode, NodeBase, NodeKind, ParseNode, Range};
use crate::token::TagSymbol;

const ID: &str = "id";
const CLASS: &str = "class";

/// A markup element and its subtree
#[derive(Debug, Clone)]
pub struct ElementNode {
    base: NodeBase,
    name: NameValue,
    attributes: AttributeStore,
}

impl ElementNode {
    /// Create a childless element spanning `[start, end)`
    pub fn new<T: TagSymbol>(tag: T, start: usize, end: usize) -> Self {
        Self::with_children(tag, Vec::new(), start, end)
    }

    /// Create an element from its opening tag token and children
    ///
    /// The name range is the tag token's own span, not `[start, end)`.
    pub fn with_children<T: TagSymbol>(
        tag: T,
        children: Vec<HtmlNode>,
        start: usize,
        end: usize,
    ) -> Self {
        let name = tag_name(tag.text());
        if name.is_empty() {
            #[cfg(feature = "tracing")]
            tracing::debug!(
                tag = tag.text(),
                start = tag.start(),
                end = tag.end(),
                "malformed tag text, using empty element name"
            );
        }

        ElementNode {
            base: NodeBase::new(NodeKind::Element, children, start, end),
            name: NameValue::new(name, tag.start(), tag.end()),
            attributes: AttributeStore::new(),
        }
    }

    #[inline]
    pub fn name(&self) -> &str {
        self.name.name()
    }

    #[inline]
    pub fn name_value(&self) -> &NameValue {
        &self.name
    }

    /// Range of the opening tag the name came from
    #[inline]
    pub fn name_range(&self) -> Range {
        self.name.range()
    }

    #[inline]
    pub fn attribute(&self, key: &str) -> Option<&str> {
        self.attributes.get(key)
    }

    #[inline]
    pub fn id(&self) -> Option<&str> {
        self.attribute(ID)
    }

    #[inline]
    pub fn css_class(&self) -> Option<&str> {
        self.attribute(CLASS)
    }

    pub fn attributes(&self) -> &AttributeStore {
        &self.attributes
    }

    /// Insert or overwrite an attribute; the last write for a key wins
    pub fn set_attribute(&mut self, key: impl Into<String>, value: impl Into<String>) {
        let key = key.into();
        if self.attributes.contains_key(&key) {
            trace_overwrite(self.name(), &key);
        }
        self.attributes.set(key, value);
    }

    /// Short descriptor for outline display: `name#id.class`
    ///
    /// The class value is used verbatim, even when it lists several classes.
    pub fn label(&self) -> String {
        let mut text = String::from(self.name());
        if let Some(id) = self.id() {
            text.push('#');
            text.push_str(id);
        }
        if let Some(class) = self.css_class() {
            text.push('.');
            text.push_str(class);
        }
        text
    }
}

#[cfg(feature = "tracing")]
fn trace_overwrite(element: &str, key: &str) {
    tracing::trace!(element, key, "attribute overwritten");
}

#[cfg(not(feature = "tracing"))]
fn trace_overwrite(_element: &str, _key: &str) {}

impl ParseNode for ElementNode {
    fn base(&self) -> &NodeBase {
        &self.base
    }

    /// Rebuild `<name k="v"...>children</name>`
    ///
    /// An element with an empty name yields `""`, and its children are not
    /// emitted either.
    fn serialize(&self) -> String {
        let name = self.name();
        if name.is_empty() {
            return String::new();
        }

        let mut text = String::with_capacity(2 * name.len() + 5);
        text.push('<');
        text.push_str(name);
        for (key, value) in self.attributes.iter() {
            text.push(' ');
            text.push_str(key);
            text.push_str("=\"");
            text.push_str(value);
            text.push('"');
        }
        text.push('>');
        for child in self.children() {
            text.push_str(&child.serialize());
        }
        text.push_str("</");
        text.push_str(name);
        text.push('>');
        text
    }
}

impl PartialEq for ElementNode {
    fn eq(&self, other: &Self) -> bool {
        self.base == other.base
            && self.name() == other.name()
            && self.attributes == other.attributes
    }
}

impl Eq for ElementNode {}

impl Hash for ElementNode {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.base.hash(state);
        self.name().hash(state);
        self.attributes.hash(state);
    }
}

impl fmt::Display for ElementNode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.serialize())
    }
}
