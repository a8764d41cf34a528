// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

// After you edit the crate's doc comment, run this command, then check README.md for any missing links
// cargo rdme --workspace-project=understory_dom_inspector_web --heading-base-level=0

//! Browser binding for the Understory DOM inspector.
//!
//! When targeting `wasm32`, this crate provides:
//!
//! - [`WebDocument`]: a `DocumentAdapter` over a `web_sys::Document`. Element
//!   lookups use the live DOM, `count_matches` uses `querySelectorAll`, and
//!   highlight styles go through `HTMLElement.style`.
//! - [`WebInspector`]: an inspector wired to real `mouseover`, `mouseout`,
//!   `click` and `keydown` listeners.
//!
//! ```no_run
//! #[cfg(target_arch = "wasm32")]
//! fn pick() -> Result<understory_dom_inspector_web::WebInspector, understory_dom_inspector::ConfigurationError> {
//!     use understory_dom_inspector::InspectorOptions;
//!
//!     // The window's document is used when none is configured.
//!     understory_dom_inspector_web::WebInspector::new(
//!         InspectorOptions::new()
//!             .stop_on_click(true)
//!             .on_click(|data| tracing::info!(path = data.path, "picked")),
//!     )
//! }
//! ```
//!
//! Notes:
//! - Event listeners are created once, when a `WebInspector` is built, and
//!   reused by every session of that inspector, including after
//!   `reinitialise`. Sessions only add them to or remove them from the page.
//! - A session whose listeners cannot be attached fails to start and stays
//!   idle.
//! - `WebInspector::stop` may be called from inside the inspector's own
//!   callbacks; the stop then takes effect once the current event is handled.
//! - Events that arrive while the inspector is already borrowed (for example
//!   a synthetic click dispatched from inside a callback) are dropped with a
//!   warning.
//! - On other targets this crate is empty.

#![no_std]

extern crate alloc;

#[cfg(target_arch = "wasm32")]
mod web;

#[cfg(target_arch = "wasm32")]
pub use web::{WebDocument, WebEvent, WebInspector};
