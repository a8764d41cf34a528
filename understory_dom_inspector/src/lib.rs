// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

// After you edit the crate's doc comment, run this command, then check README.md for any missing links
// cargo rdme --workspace-project=understory_dom_inspector --heading-base-level=0

//! Understory DOM Inspector: an interactive element picker.
//!
//! An [`Inspector`] outlines whatever element the pointer hovers over and, on
//! click, computes a selector path for that element (via
//! [`understory_css_path`]) and hands it to a callback.
//!
//! ## Lifecycle
//!
//! An inspector is either [`SessionState::Idle`] or
//! [`SessionState::Inspecting`], and it is inspecting exactly while its
//! listeners are subscribed on the document.
//!
//! - [`Inspector::start`]: subscribe pointer-enter, pointer-leave and click on
//!   the document and key-down on the key context. Fails with
//!   [`ConfigurationError::DocumentRequired`] if there is no document.
//! - [`Inspector::stop`]: unsubscribe everything, clear the hover highlight and
//!   run the `on_stop` callback. Idempotent.
//! - [`Inspector::initialise`]: stop, reset, merge new options over the
//!   defaults and (by default) start again.
//!
//! ## Host integration
//!
//! The inspector does not know about any concrete DOM. Implement
//! [`DocumentAdapter`] for your document: it answers element lookups,
//! (un)subscribes listeners, and sets inline styles. Then forward each event
//! your listeners receive to the matching `handle_*` method.
//!
//! ```rust
//! use understory_dom_inspector::{Inspector, InspectorOptions};
//! use understory_dom_tree::{ElementDesc, MemoryDocument, MemoryEvent};
//!
//! let mut doc = MemoryDocument::new();
//! let app = doc.append_root(ElementDesc::new("div").with_id("app"));
//! let list = doc.append_child(app, ElementDesc::new("ul"));
//! doc.append_child(list, ElementDesc::new("li").with_class("item"));
//! let second = doc.append_child(list, ElementDesc::new("li").with_class("item"));
//!
//! let mut inspector = Inspector::new(InspectorOptions::new().document(doc)).unwrap();
//! assert!(inspector.is_inspecting());
//!
//! inspector.handle_pointer_enter(second);
//! inspector.handle_click(second, &mut MemoryEvent::pointer());
//! assert_eq!(inspector.path(), Some("div#app ul li.item:nth-child(2)"));
//!
//! inspector.handle_key_down(&MemoryEvent::escape());
//! assert!(!inspector.is_inspecting());
//! ```
//!
//! ## Options
//!
//! See [`InspectorOptions`] and the table in the [`options`] module for every
//! recognised option and its default. Options are merged key by key over the
//! defaults, including the nested path and highlight groups.
//!
//! This crate is `no_std` and uses `alloc`.

#![no_std]

extern crate alloc;

mod adapter;
mod error;
pub mod options;
mod session;

pub use adapter::{DocumentAdapter, EventKind, InputEvent, ListenerTarget, StyleProperty};
pub use error::ConfigurationError;
pub use options::{HighlightOverrides, InspectorOptions, PathOverrides};
pub use session::{ClickData, Inspector, SessionState};
pub use understory_css_path::{ElementTree, PathOptions};
