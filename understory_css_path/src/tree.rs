// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! The lookup trait selector paths are computed against.

use alloc::borrow::Cow;

/// Read access to a document's element tree.
///
/// Implementors hand out lightweight element handles (for example an arena
/// index, or a reference-counted DOM node) and answer structural questions
/// about them. The path builder never mutates the tree.
///
/// String accessors return the raw attribute value; an empty string means the
/// attribute is absent.
pub trait ElementTree {
    /// Handle type identifying one element of the tree.
    type Element: Clone;

    /// The element's tag name, in any case.
    fn tag_name(&self, element: &Self::Element) -> Cow<'_, str>;

    /// The element's `id` attribute, or an empty string.
    fn id(&self, element: &Self::Element) -> Cow<'_, str>;

    /// The element's raw `class` attribute, or an empty string.
    fn class_name(&self, element: &Self::Element) -> Cow<'_, str>;

    /// The parent element.
    ///
    /// Returns `None` when the parent is the document itself (or the element
    /// is detached), so the document root never appears in a path.
    fn parent_element(&self, element: &Self::Element) -> Option<Self::Element>;

    /// The closest preceding sibling that is an element.
    fn previous_element_sibling(&self, element: &Self::Element) -> Option<Self::Element>;

    /// The closest following sibling that is an element.
    fn next_element_sibling(&self, element: &Self::Element) -> Option<Self::Element>;

    /// Number of elements in the whole document matched by `selector`.
    ///
    /// Implementations should return `0` for selectors they cannot parse.
    fn count_matches(&self, selector: &str) -> usize;
}

/// One-based position of `element` among its parent's element children.
///
/// This is the argument an `:nth-child()` pseudo-class needs to select it.
pub fn nth_child_index<T: ElementTree + ?Sized>(tree: &T, element: &T::Element) -> usize {
    let mut nth = 1;
    let mut cursor = tree.previous_element_sibling(element);
    while let Some(prev) = cursor {
        nth += 1;
        cursor = tree.previous_element_sibling(&prev);
    }
    nth
}

/// Returns `true` if `element` has at least one sibling element.
pub fn has_element_siblings<T: ElementTree + ?Sized>(tree: &T, element: &T::Element) -> bool {
    tree.previous_element_sibling(element).is_some() || tree.next_element_sibling(element).is_some()
}
