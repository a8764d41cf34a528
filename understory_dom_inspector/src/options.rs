// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Inspector configuration.
//!
//! [`InspectorOptions`] is the caller-facing, partial configuration: every
//! field is optional. When an inspector is (re)initialised the options are
//! merged key by key over the documented defaults, including the nested
//! [`PathOverrides`] and [`HighlightOverrides`] groups, so setting one nested
//! key never resets its siblings.
//!
//! | Option | Default |
//! |---|---|
//! | `document` | [`DocumentAdapter::ambient`] |
//! | `key_context` | the document |
//! | `path.full_path` | `false` |
//! | `path.use_nth_child` | `true` |
//! | `stop_on_click` | `false` |
//! | `stop_on_escape` | `true` |
//! | `start_on_initialise` | `true` |
//! | `highlight.outline` | [`DEFAULT_OUTLINE`] |
//! | `highlight.cursor` | [`DEFAULT_CURSOR`] |
//! | `on_click` | log the path at `info` level |
//! | `on_stop` | none |
//! | `on_key_down` | none |

use alloc::boxed::Box;
use alloc::string::String;
use core::fmt;

use understory_css_path::PathOptions;

use crate::adapter::DocumentAdapter;
use crate::session::ClickData;

/// Outline applied to the hovered element by default.
pub const DEFAULT_OUTLINE: &str = "1px solid red";

/// Cursor applied to the hovered element by default.
pub const DEFAULT_CURSOR: &str = "pointer";

/// Callback invoked with the result of a click.
pub type ClickCallback<D> = Box<dyn FnMut(&ClickData<'_, D>)>;

/// Callback invoked after a session stops.
pub type StopCallback = Box<dyn FnMut()>;

/// Callback invoked with every key-down event observed while inspecting.
pub type KeyDownCallback<D> = Box<dyn FnMut(&<D as DocumentAdapter>::Event)>;

/// Partial overrides for [`PathOptions`].
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq)]
pub struct PathOverrides {
    /// Overrides [`PathOptions::full_path`].
    pub full_path: Option<bool>,
    /// Overrides [`PathOptions::use_nth_child`].
    pub use_nth_child: Option<bool>,
}

impl PathOverrides {
    /// Overlays `other` on `self`; keys set in `other` win.
    #[must_use]
    pub fn merge(self, other: Self) -> Self {
        Self {
            full_path: other.full_path.or(self.full_path),
            use_nth_child: other.use_nth_child.or(self.use_nth_child),
        }
    }

    /// Applies the overrides to `base`.
    #[must_use]
    pub fn apply(self, base: PathOptions) -> PathOptions {
        PathOptions {
            full_path: self.full_path.unwrap_or(base.full_path),
            use_nth_child: self.use_nth_child.unwrap_or(base.use_nth_child),
        }
    }
}

/// Partial overrides for the hover highlight styles.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct HighlightOverrides {
    /// CSS `outline` value for the hovered element.
    pub outline: Option<String>,
    /// CSS `cursor` value for the hovered element.
    pub cursor: Option<String>,
}

impl HighlightOverrides {
    /// Overlays `other` on `self`; keys set in `other` win.
    #[must_use]
    pub fn merge(self, other: Self) -> Self {
        Self {
            outline: other.outline.or(self.outline),
            cursor: other.cursor.or(self.cursor),
        }
    }
}

/// Caller-supplied inspector configuration.
///
/// Build with the chained setters, then pass to
/// [`Inspector::new`](crate::Inspector::new) or
/// [`Inspector::initialise`](crate::Inspector::initialise).
pub struct InspectorOptions<D: DocumentAdapter> {
    /// Document to observe.
    pub document: Option<D>,
    /// Context key events are observed on, instead of the document.
    pub key_context: Option<D::KeyContext>,
    /// Selector path shape.
    pub path: PathOverrides,
    /// Hover highlight styles.
    pub highlight: HighlightOverrides,
    /// Stop inspecting after the first click.
    pub stop_on_click: Option<bool>,
    /// Stop inspecting when Escape is pressed.
    pub stop_on_escape: Option<bool>,
    /// Start inspecting as soon as the options are applied.
    pub start_on_initialise: Option<bool>,
    /// Click callback.
    pub on_click: Option<ClickCallback<D>>,
    /// Stop callback.
    pub on_stop: Option<StopCallback>,
    /// Key-down callback.
    pub on_key_down: Option<KeyDownCallback<D>>,
}

impl<D: DocumentAdapter> Default for InspectorOptions<D> {
    fn default() -> Self {
        Self {
            document: None,
            key_context: None,
            path: PathOverrides::default(),
            highlight: HighlightOverrides::default(),
            stop_on_click: None,
            stop_on_escape: None,
            start_on_initialise: None,
            on_click: None,
            on_stop: None,
            on_key_down: None,
        }
    }
}

impl<D: DocumentAdapter> fmt::Debug for InspectorOptions<D> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("InspectorOptions")
            .field("document", &self.document.is_some())
            .field("key_context", &self.key_context.is_some())
            .field("path", &self.path)
            .field("highlight", &self.highlight)
            .field("stop_on_click", &self.stop_on_click)
            .field("stop_on_escape", &self.stop_on_escape)
            .field("start_on_initialise", &self.start_on_initialise)
            .field("on_click", &self.on_click.is_some())
            .field("on_stop", &self.on_stop.is_some())
            .field("on_key_down", &self.on_key_down.is_some())
            .finish()
    }
}

impl<D: DocumentAdapter> InspectorOptions<D> {
    /// Empty options: every key falls back to its default.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Overlays `other` on `self`, key by key; keys set in `other` win.
    #[must_use]
    pub fn merge(self, other: Self) -> Self {
        Self {
            document: other.document.or(self.document),
            key_context: other.key_context.or(self.key_context),
            path: self.path.merge(other.path),
            highlight: self.highlight.merge(other.highlight),
            stop_on_click: other.stop_on_click.or(self.stop_on_click),
            stop_on_escape: other.stop_on_escape.or(self.stop_on_escape),
            start_on_initialise: other.start_on_initialise.or(self.start_on_initialise),
            on_click: other.on_click.or(self.on_click),
            on_stop: other.on_stop.or(self.on_stop),
            on_key_down: other.on_key_down.or(self.on_key_down),
        }
    }

    /// Sets the document to observe.
    #[must_use]
    pub fn document(mut self, document: D) -> Self {
        self.document = Some(document);
        self
    }

    /// Observes key events on `context` instead of the document.
    #[must_use]
    pub fn key_context(mut self, context: D::KeyContext) -> Self {
        self.key_context = Some(context);
        self
    }

    /// Sets [`PathOptions::full_path`].
    #[must_use]
    pub fn full_path(mut self, full_path: bool) -> Self {
        self.path.full_path = Some(full_path);
        self
    }

    /// Sets [`PathOptions::use_nth_child`].
    #[must_use]
    pub fn use_nth_child(mut self, use_nth_child: bool) -> Self {
        self.path.use_nth_child = Some(use_nth_child);
        self
    }

    /// Sets whether a click ends the session.
    #[must_use]
    pub fn stop_on_click(mut self, stop: bool) -> Self {
        self.stop_on_click = Some(stop);
        self
    }

    /// Sets whether Escape ends the session.
    #[must_use]
    pub fn stop_on_escape(mut self, stop: bool) -> Self {
        self.stop_on_escape = Some(stop);
        self
    }

    /// Sets whether initialising starts the session.
    #[must_use]
    pub fn start_on_initialise(mut self, start: bool) -> Self {
        self.start_on_initialise = Some(start);
        self
    }

    /// Sets the outline applied to the hovered element.
    #[must_use]
    pub fn outline(mut self, outline: impl Into<String>) -> Self {
        self.highlight.outline = Some(outline.into());
        self
    }

    /// Sets the cursor applied to the hovered element.
    #[must_use]
    pub fn cursor(mut self, cursor: impl Into<String>) -> Self {
        self.highlight.cursor = Some(cursor.into());
        self
    }

    /// Sets the click callback, replacing the default logger.
    #[must_use]
    pub fn on_click(mut self, callback: impl FnMut(&ClickData<'_, D>) + 'static) -> Self {
        self.on_click = Some(Box::new(callback));
        self
    }

    /// Sets the callback run after the session stops.
    #[must_use]
    pub fn on_stop(mut self, callback: impl FnMut() + 'static) -> Self {
        self.on_stop = Some(Box::new(callback));
        self
    }

    /// Sets the callback run for every key-down event while inspecting.
    #[must_use]
    pub fn on_key_down(mut self, callback: impl FnMut(&D::Event) + 'static) -> Self {
        self.on_key_down = Some(Box::new(callback));
        self
    }

    /// Splits off the document and merges everything else over the defaults.
    pub(crate) fn resolve(self) -> (Option<D>, Settings<D>) {
        let settings = Settings {
            key_context: self.key_context,
            path: self.path.apply(PathOptions::default()),
            outline: self
                .highlight
                .outline
                .unwrap_or_else(|| DEFAULT_OUTLINE.into()),
            cursor: self
                .highlight
                .cursor
                .unwrap_or_else(|| DEFAULT_CURSOR.into()),
            stop_on_click: self.stop_on_click.unwrap_or(false),
            stop_on_escape: self.stop_on_escape.unwrap_or(true),
            start_on_initialise: self.start_on_initialise.unwrap_or(true),
            on_click: self.on_click,
            on_stop: self.on_stop,
            on_key_down: self.on_key_down,
        };
        (self.document, settings)
    }
}

/// Options after merging over the defaults.
pub(crate) struct Settings<D: DocumentAdapter> {
    pub(crate) key_context: Option<D::KeyContext>,
    pub(crate) path: PathOptions,
    pub(crate) outline: String,
    pub(crate) cursor: String,
    pub(crate) stop_on_click: bool,
    pub(crate) stop_on_escape: bool,
    pub(crate) start_on_initialise: bool,
    /// `None` logs the path.
    pub(crate) on_click: Option<ClickCallback<D>>,
    pub(crate) on_stop: Option<StopCallback>,
    pub(crate) on_key_down: Option<KeyDownCallback<D>>,
}

impl<D: DocumentAdapter> Default for Settings<D> {
    fn default() -> Self {
        InspectorOptions::default().resolve().1
    }
}
