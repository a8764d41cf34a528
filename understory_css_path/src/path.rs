// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Selector path construction.
//!
//! ## Algorithm
//!
//! 1) Walk from the target towards the document root, describing each element
//!    as a [`Segment`]. With [`PathOptions::full_path`] unset, the walk stops at
//!    the first element that has an id; otherwise it stops below the document.
//! 2) Emit the segments root→target, separated by descendant combinators.
//! 3) With [`PathOptions::use_nth_child`] set, qualify a segment with its
//!    `:nth-child()` position when the selector assembled so far matches more
//!    than one element, or when the segment is vague and the element has
//!    siblings. Id segments and bare `html`/`body` segments are never qualified.
//!
//! Uniqueness is best effort: descendant combinators can match elements in
//! repeated substructures elsewhere in the document.

use alloc::string::String;
use alloc::vec::Vec;
use core::fmt::Write;

use smallvec::SmallVec;

use crate::segment::Segment;
use crate::tree::{ElementTree, has_element_siblings, nth_child_index};

/// Options controlling the shape of a selector path.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
pub struct PathOptions {
    /// Walk all the way to the document root instead of stopping at the
    /// nearest ancestor (or self) with an id.
    pub full_path: bool,
    /// Disambiguate same-tag or same-class siblings with `:nth-child()`.
    pub use_nth_child: bool,
}

impl Default for PathOptions {
    fn default() -> Self {
        Self {
            full_path: false,
            use_nth_child: true,
        }
    }
}

/// Builds the selector path for `target`.
///
/// Never fails: a target without id, classes or siblings still produces a
/// (less specific) tag chain. Leading and trailing spaces and tabs are trimmed,
/// including the terminator of a hex escape at the very end.
///
/// ```
/// use understory_css_path::{PathOptions, css_path};
/// use understory_dom_tree::{ElementDesc, MemoryDocument};
///
/// let mut doc = MemoryDocument::new();
/// let app = doc.append_root(ElementDesc::new("div").with_id("app"));
/// let list = doc.append_child(app, ElementDesc::new("ul"));
/// doc.append_child(list, ElementDesc::new("li").with_class("item"));
/// let second = doc.append_child(list, ElementDesc::new("li").with_class("item"));
///
/// let path = css_path(&doc, &second, PathOptions::default());
/// assert_eq!(path, "div#app ul li.item:nth-child(2)");
/// ```
pub fn css_path<T: ElementTree + ?Sized>(
    tree: &T,
    target: &T::Element,
    options: PathOptions,
) -> String {
    let mut out = String::new();
    for segment in css_path_segments(tree, target, options) {
        if !out.is_empty() {
            out.push(' ');
        }
        // Writing into a `String` cannot fail.
        let _ = write!(out, "{segment}");
    }
    let trimmed = out.trim_matches([' ', '\t']);
    if trimmed.len() == out.len() {
        out
    } else {
        String::from(trimmed)
    }
}

/// Builds the root→target segments of the selector path for `target`.
///
/// Joining the returned segments with single spaces and trimming the result
/// yields [`css_path`].
pub fn css_path_segments<T: ElementTree + ?Sized>(
    tree: &T,
    target: &T::Element,
    options: PathOptions,
) -> Vec<Segment> {
    let mut steps: SmallVec<[(Segment, T::Element); 8]> = SmallVec::new();
    let mut cursor = Some(target.clone());
    while let Some(element) = cursor {
        let segment = Segment::describe(tree, &element);
        cursor = if segment.has_id() && !options.full_path {
            None
        } else {
            tree.parent_element(&element)
        };
        steps.push((segment, element));
    }
    steps.reverse();

    let mut assembled = String::new();
    let mut segments = Vec::with_capacity(steps.len());
    for (mut segment, element) in steps {
        if !assembled.is_empty() {
            assembled.push(' ');
        }
        let _ = write!(assembled, "{segment}");
        if options.use_nth_child
            && !segment.has_id()
            && !segment.is_document_element()
            && needs_position(tree, &segment, &element, &assembled)
        {
            let nth = nth_child_index(tree, &element);
            let _ = write!(assembled, ":nth-child({nth})");
            segment.nth_child = Some(nth);
        }
        segments.push(segment);
    }
    segments
}

fn needs_position<T: ElementTree + ?Sized>(
    tree: &T,
    segment: &Segment,
    element: &T::Element,
    assembled: &str,
) -> bool {
    (segment.is_vague() && has_element_siblings(tree, element))
        || tree.count_matches(assembled) > 1
}
