//! htmlast - Element nodes for an error-tolerant HTML parse tree
//!
//! Modules:
//! - node: base node capability (kind, range, children, structural equality)
//! - token: tag tokens as handed over by the lexer
//! - name: tag name extraction and the name/range value
//! - attributes: insertion-ordered attribute store
//! - element: the element node (accessors, label, serialization)
//! - text: text and comment siblings
//!
//! Nothing on the public surface fails: malformed tag text degrades to an
//! empty element name and missing attributes read as `None`. Strict
//! variants returning [`MarkupError`] exist for callers that want to report
//! broken markup.

pub mod attributes;
pub mod element;
pub mod error;
pub mod name;
pub mod node;
pub mod text;
pub mod token;

pub use attributes::AttributeStore;
pub use element::ElementNode;
pub use error::MarkupError;
pub use name::{tag_name, tag_name_strict, NameValue};
pub use node::{HtmlNode, NodeBase, NodeKind, ParseNode, Range};
pub use text::{CommentNode, TextNode};
pub use token::{TagSymbol, TagToken};
