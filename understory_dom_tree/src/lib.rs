// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

// After you edit the crate's doc comment, run this command, then check README.md for any missing links
// cargo rdme --workspace-project=understory_dom_tree --heading-base-level=0

//! Understory DOM Tree: a headless element tree for inspectors.
//!
//! [`MemoryDocument`] is an append-only arena of elements (tag, `id` and
//! `class`) that implements both [`ElementTree`](understory_css_path::ElementTree)
//! and [`DocumentAdapter`](understory_dom_inspector::DocumentAdapter). It
//! records listener registrations and inline styles instead of touching a real
//! page, which makes it a good fit for tests, benchmarks and server-side
//! tooling.
//!
//! It also understands the selector dialect `understory_css_path` emits
//! (type, `#id`, `.class`, `:nth-child(n)` and descendant combinators), so
//! generated selectors can be checked by running them back against the tree:
//!
//! ```rust
//! use understory_css_path::{PathOptions, css_path};
//! use understory_dom_tree::{ElementDesc, MemoryDocument};
//!
//! let mut doc = MemoryDocument::new();
//! let html = doc.append_root(ElementDesc::new("html"));
//! let body = doc.append_child(html, ElementDesc::new("body"));
//! let first = doc.append_child(body, ElementDesc::new("p").with_class("note"));
//! let second = doc.append_child(body, ElementDesc::new("p").with_class("note"));
//!
//! let path = css_path(&doc, &second, PathOptions::default());
//! assert_eq!(path, "html body p.note:nth-child(2)");
//! assert_eq!(doc.query_selector_all(&path).unwrap(), [second]);
//! # let _ = first;
//! ```
//!
//! The [`dispatch`] module delivers synthetic events to an inspector the way a
//! browser would, honouring the listeners it has registered.
//!
//! This crate is `no_std` and uses `alloc`.

#![no_std]

extern crate alloc;

mod adapter;
pub mod dispatch;
mod document;
mod selector;

pub use adapter::MemoryEvent;
pub use document::{ElementDesc, Listener, MemoryDocument, NodeId};
pub use selector::{Compound, Selector, SelectorError};
