// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

// After you edit the crate's doc comment, run this command, then check README.md for any missing links
// cargo rdme --workspace-project=understory_css_path --heading-base-level=0

//! Understory CSS Path: selector strings that identify an element of a document.
//!
//! Given an element handle, [`css_path`] walks up the element tree and emits a
//! space-separated chain of selector segments (`tag`, `#id`, `.class`,
//! `:nth-child(n)`) that identifies the element, so it can be found again with
//! `querySelector` or any matcher for the same dialect.
//!
//! The crate does not own a document model. Instead, implement [`ElementTree`]
//! for your document (a browser DOM binding, an arena of parsed nodes, a test
//! fixture) and hand the builder element handles.
//!
//! ## Example
//!
//! ```rust
//! use understory_css_path::{PathOptions, css_path};
//! use understory_dom_tree::{ElementDesc, MemoryDocument};
//!
//! let mut doc = MemoryDocument::new();
//! let html = doc.append_root(ElementDesc::new("html"));
//! let body = doc.append_child(html, ElementDesc::new("body"));
//! let nav = doc.append_child(body, ElementDesc::new("nav").with_class("top bar"));
//! let link = doc.append_child(nav, ElementDesc::new("a"));
//! doc.append_child(nav, ElementDesc::new("a"));
//!
//! // Short paths stop at the closest element with an id; without one, the
//! // walk reaches the document element.
//! assert_eq!(
//!     css_path(&doc, &link, PathOptions::default()),
//!     "html body nav.top.bar a:nth-child(1)",
//! );
//! ```
//!
//! ## Options
//!
//! - [`PathOptions::full_path`]: keep walking past elements with ids, up to the
//!   document element.
//! - [`PathOptions::use_nth_child`]: append `:nth-child()` to segments that are
//!   ambiguous among their siblings.
//!
//! Selector uniqueness is a heuristic, not a guarantee: descendant combinators
//! can match look-alike elements elsewhere in documents with repeated
//! structure, and with `use_nth_child` disabled structurally identical
//! siblings produce identical paths.
//!
//! This crate is `no_std` and uses `alloc`.

#![no_std]

extern crate alloc;

mod escape;
mod path;
mod segment;
mod tree;

pub use escape::{escape_ident, write_ident};
pub use path::{PathOptions, css_path, css_path_segments};
pub use segment::Segment;
pub use tree::{ElementTree, has_element_siblings, nth_child_index};
