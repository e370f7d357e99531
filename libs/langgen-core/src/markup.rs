//! Markup row model.
//!
//! The extractor only needs two things from parsed markup: find a
//! descendant by tag and class, and read an element's text with some
//! nested tags left out. [`MarkupRow`] and [`MarkupElement`] capture
//! exactly that. [`TableRow`] is an in-memory implementation that an
//! external parser can hand over as JSON.
//!
//! # Format
//! ```json
//! {
//!   "classes": ["even"],
//!   "cells": [
//!     {"tag": "td", "classes": ["FrWrd"], "children": [
//!       {"tag": "strong", "children": ["chat"]},
//!       {"tag": "em", "classes": ["POS2"], "children": ["nm"]}
//!     ]},
//!     {"tag": "td", "classes": ["ToWrd"], "children": ["cat"]}
//!   ]
//! }
//! ```

use crate::types::Group;
use serde::{Deserialize, Serialize};

/// A parsed element whose text can be read.
pub trait MarkupElement {
    fn tag(&self) -> &str;

    fn classes(&self) -> &[String];

    /// Push every descendant text node in document order, skipping the
    /// subtrees of nested elements whose tag is in `exclude`.
    fn fragments<'a>(&'a self, exclude: &[&str], out: &mut Vec<&'a str>);

    fn has_class(&self, class: &str) -> bool {
        self.classes().iter().any(|c| c == class)
    }

    /// Concatenated descendant text.
    fn text(&self, exclude: &[&str]) -> String {
        let mut out = Vec::new();
        self.fragments(exclude, &mut out);
        out.concat()
    }

    /// Descendant text with each fragment trimmed and blank ones dropped.
    fn stripped_text(&self, exclude: &[&str]) -> String {
        let mut out = Vec::new();
        self.fragments(exclude, &mut out);
        out.iter()
            .map(|fragment| fragment.trim())
            .filter(|fragment| !fragment.is_empty())
            .collect()
    }
}

/// A table row that may belong to one of the two alternating groups.
pub trait MarkupRow {
    type Element: MarkupElement;

    /// Group of the row, if it carries a recognised group class.
    fn group(&self) -> Option<Group>;

    /// First descendant with the given tag and class, in document order.
    fn find(&self, tag: &str, class: &str) -> Option<&Self::Element>;
}

/// A child of an element.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum Node {
    Text(String),
    Element(Element),
}

/// An in-memory element.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Element {
    pub tag: String,
    #[serde(default)]
    pub classes: Vec<String>,
    #[serde(default)]
    pub children: Vec<Node>,
}

impl Element {
    pub fn new(tag: impl Into<String>) -> Self {
        Self {
            tag: tag.into(),
            ..Default::default()
        }
    }

    pub fn with_class(mut self, class: impl Into<String>) -> Self {
        self.classes.push(class.into());
        self
    }

    pub fn with_text(mut self, text: impl Into<String>) -> Self {
        self.children.push(Node::Text(text.into()));
        self
    }

    pub fn with_child(mut self, child: Element) -> Self {
        self.children.push(Node::Element(child));
        self
    }

    fn matches(&self, tag: &str, class: &str) -> bool {
        self.tag == tag && self.has_class(class)
    }

    /// First descendant (not including self) with the given tag and class.
    pub fn find_descendant(&self, tag: &str, class: &str) -> Option<&Element> {
        find_in(&self.children, tag, class)
    }
}

fn find_in<'a>(nodes: &'a [Node], tag: &str, class: &str) -> Option<&'a Element> {
    for node in nodes {
        if let Node::Element(element) = node {
            if element.matches(tag, class) {
                return Some(element);
            }
            if let Some(found) = find_in(&element.children, tag, class) {
                return Some(found);
            }
        }
    }
    None
}

fn collect_fragments<'a>(nodes: &'a [Node], exclude: &[&str], out: &mut Vec<&'a str>) {
    for node in nodes {
        match node {
            Node::Text(text) => out.push(text),
            Node::Element(element) => {
                if !exclude.contains(&element.tag.as_str()) {
                    collect_fragments(&element.children, exclude, out);
                }
            }
        }
    }
}

impl MarkupElement for Element {
    fn tag(&self) -> &str {
        &self.tag
    }

    fn classes(&self) -> &[String] {
        &self.classes
    }

    fn fragments<'a>(&'a self, exclude: &[&str], out: &mut Vec<&'a str>) {
        collect_fragments(&self.children, exclude, out);
    }
}

/// An in-memory table row: its classes and its cells.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct TableRow {
    #[serde(default)]
    pub classes: Vec<String>,
    #[serde(default)]
    pub cells: Vec<Element>,
}

impl TableRow {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_class(mut self, class: impl Into<String>) -> Self {
        self.classes.push(class.into());
        self
    }

    pub fn with_cell(mut self, cell: Element) -> Self {
        self.cells.push(cell);
        self
    }
}

impl MarkupRow for TableRow {
    type Element = Element;

    fn group(&self) -> Option<Group> {
        self.classes
            .first()
            .and_then(|class| Group::from_class(class))
    }

    fn find(&self, tag: &str, class: &str) -> Option<&Element> {
        for cell in &self.cells {
            if cell.matches(tag, class) {
                return Some(cell);
            }
            if let Some(found) = cell.find_descendant(tag, class) {
                return Some(found);
            }
        }
        None
    }
}
