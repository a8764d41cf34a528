// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! A single component of a selector path.

use alloc::string::{String, ToString};
use alloc::vec::Vec;
use core::fmt::{self, Write};

use crate::escape::write_ident;
use crate::tree::ElementTree;

/// One path component describing a single element.
///
/// A segment is qualified by the element's id when it has one, otherwise by
/// its class tokens. A segment with neither is *vague*: only its tag (and an
/// optional `:nth-child()` position) tells it apart from its neighbours.
///
/// [`Display`](fmt::Display) produces the selector text, e.g. `li.item:nth-child(2)`.
#[derive(Clone, Debug, Default, PartialEq, Eq, Hash)]
pub struct Segment {
    /// Lowercase tag name.
    pub tag: String,
    /// Id qualifier, if the element has a non-empty `id`.
    pub id: Option<String>,
    /// Class tokens, in attribute order. Empty when `id` is set.
    pub classes: Vec<String>,
    /// One-based `:nth-child()` position, when disambiguation applied.
    pub nth_child: Option<usize>,
}

impl Segment {
    /// Describes `element` as a segment without any positional qualifier.
    pub fn describe<T: ElementTree + ?Sized>(tree: &T, element: &T::Element) -> Self {
        let tag = tree.tag_name(element).to_ascii_lowercase();
        let id = tree.id(element);
        if !id.is_empty() {
            return Self {
                tag,
                id: Some(id.into_owned()),
                classes: Vec::new(),
                nth_child: None,
            };
        }
        let classes = tree
            .class_name(element)
            .split_ascii_whitespace()
            .map(ToString::to_string)
            .collect();
        Self {
            tag,
            id: None,
            classes,
            nth_child: None,
        }
    }

    /// Returns `true` if the segment is qualified by an id.
    #[must_use]
    pub fn has_id(&self) -> bool {
        self.id.is_some()
    }

    /// Returns `true` if the segment has neither an id nor classes.
    #[must_use]
    pub fn is_vague(&self) -> bool {
        self.id.is_none() && self.classes.is_empty()
    }

    /// Returns `true` for a bare `html` or `body` segment.
    ///
    /// Those elements are unique in a document, so they never need a position.
    #[must_use]
    pub fn is_document_element(&self) -> bool {
        self.is_vague() && matches!(self.tag.as_str(), "html" | "body")
    }
}

impl fmt::Display for Segment {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.tag)?;
        if let Some(id) = &self.id {
            f.write_char('#')?;
            write_ident(f, id)?;
        }
        for class in &self.classes {
            f.write_char('.')?;
            write_ident(f, class)?;
        }
        if let Some(nth) = self.nth_child {
            write!(f, ":nth-child({nth})")?;
        }
        Ok(())
    }
}
