use std::collections::HashSet;
use std::sync::Arc;
use std::thread;

use htmlast::{CommentNode, ElementNode, HtmlNode, NodeKind, ParseNode, TagToken, TextNode};

/// `<ul id="nav"><li class="a">one</li><!--x--><li>two</li></ul>`
fn build_list(reversed_attrs: bool) -> ElementNode {
    let mut first = ElementNode::with_children(
        TagToken::new("<li class=\"a\">", 14, 28),
        vec![TextNode::new("one", 28, 31).into()],
        14,
        36,
    );
    first.set_attribute("class", "a");

    let second = ElementNode::with_children(
        TagToken::new("<li>", 44, 48),
        vec![TextNode::new("two", 48, 51).into()],
        44,
        56,
    );

    let mut list = ElementNode::with_children(
        TagToken::new("<ul id=\"nav\">", 0, 14),
        vec![
            first.into(),
            CommentNode::new("x", 36, 44).into(),
            second.into(),
        ],
        0,
        61,
    );
    if reversed_attrs {
        list.set_attribute("data-k", "1");
        list.set_attribute("id", "nav");
    } else {
        list.set_attribute("id", "nav");
        list.set_attribute("data-k", "1");
    }
    list
}

#[test]
fn test_tree_serialization() {
    let list = build_list(false);
    assert_eq!(
        list.serialize(),
        "<ul id=\"nav\" data-k=\"1\"><li class=\"a\">one</li><!--x--><li>two</li></ul>"
    );
    assert_eq!(list.label(), "ul#nav");
}

#[test]
fn test_child_access() {
    let list = build_list(false);
    assert_eq!(list.child_count(), 3);
    let kinds: Vec<NodeKind> = list.children().iter().map(|c| c.kind()).collect();
    assert_eq!(kinds, vec![NodeKind::Element, NodeKind::Comment, NodeKind::Element]);

    let labels: Vec<String> = list
        .children()
        .iter()
        .filter_map(HtmlNode::as_element)
        .map(ElementNode::label)
        .collect();
    assert_eq!(labels, vec!["li.a".to_string(), "li".to_string()]);
}

#[test]
fn test_structural_equality_through_hash_set() {
    let mut seen = HashSet::new();
    seen.insert(build_list(false));
    assert!(seen.contains(&build_list(true)));

    let mut changed = build_list(false);
    changed.set_attribute("data-k", "2");
    assert!(!seen.contains(&changed));
}

#[test]
fn test_nested_child_difference_breaks_equality() {
    let a = build_list(false);
    let b = ElementNode::with_children(
        TagToken::new("<ul>", 0, 4),
        vec![TextNode::new("one", 28, 31).into()],
        0,
        61,
    );
    assert_ne!(a, b);
}

#[test]
fn test_malformed_child_vanishes_from_serialization() {
    let broken = ElementNode::with_children(
        TagToken::new("<", 3, 4),
        vec![TextNode::new("gone", 4, 8).into()],
        3,
        8,
    );
    let parent = ElementNode::with_children(
        TagToken::new("<p>", 0, 3),
        vec![broken.into(), TextNode::new("kept", 8, 12).into()],
        0,
        16,
    );
    assert_eq!(parent.serialize(), "<p>kept</p>");
}

#[test]
fn test_frozen_tree_shared_across_threads() {
    let list = Arc::new(build_list(false));
    let handles: Vec<_> = (0..4)
        .map(|_| {
            let list = Arc::clone(&list);
            thread::spawn(move || list.label())
        })
        .collect();
    for handle in handles {
        assert_eq!(handle.join().unwrap(), "ul#nav");
    }
}
