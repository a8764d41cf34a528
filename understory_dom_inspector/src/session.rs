// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! The inspection session state machine.
//!
//! ## Usage
//!
//! 1) Build an [`Inspector`] from [`InspectorOptions`]; unless told otherwise it
//!    starts inspecting right away and subscribes its listeners on the document.
//! 2) Forward host events to [`Inspector::handle_pointer_enter`],
//!    [`Inspector::handle_pointer_leave`], [`Inspector::handle_click`] and
//!    [`Inspector::handle_key_down`]. Events that arrive while idle are ignored.
//! 3) Read the last computed selector with [`Inspector::path`].
//! 4) End the session with [`Inspector::stop`], Escape, or a click when
//!    `stop_on_click` is set.

use alloc::string::String;
use core::fmt;

use tracing::{debug, info, trace, warn};
use understory_css_path::{PathOptions, css_path};

use crate::adapter::{DocumentAdapter, EventKind, InputEvent, ListenerTarget, StyleProperty};
use crate::error::ConfigurationError;
use crate::options::{InspectorOptions, Settings};

/// Lifecycle state of an [`Inspector`].
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq, Hash)]
pub enum SessionState {
    /// No listeners are attached.
    #[default]
    Idle,
    /// Listeners are attached and events are being handled.
    Inspecting,
}

/// What a click produced, handed to the click callback.
pub struct ClickData<'a, D: DocumentAdapter> {
    /// The selector path computed for `element`.
    pub path: &'a str,
    /// The clicked element.
    pub element: &'a D::Element,
    /// The host event that triggered the click.
    pub event: &'a D::Event,
}

impl<D> fmt::Debug for ClickData<'_, D>
where
    D: DocumentAdapter,
    D::Element: fmt::Debug,
    D::Event: fmt::Debug,
{
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ClickData")
            .field("path", &self.path)
            .field("element", self.element)
            .field("event", self.event)
            .finish()
    }
}

/// An interactive element picker bound to one document.
///
/// While inspecting, the hovered element is outlined and a click computes its
/// selector path. Each inspector owns its own session state.
pub struct Inspector<D: DocumentAdapter> {
    settings: Settings<D>,
    document: Option<D>,
    state: SessionState,
    last_hovered: Option<D::Element>,
    path: Option<String>,
    element: Option<D::Element>,
}

impl<D: DocumentAdapter> Default for Inspector<D> {
    /// An idle inspector with no document.
    fn default() -> Self {
        Self {
            settings: Settings::default(),
            document: None,
            state: SessionState::Idle,
            last_hovered: None,
            path: None,
            element: None,
        }
    }
}

impl<D> fmt::Debug for Inspector<D>
where
    D: DocumentAdapter + fmt::Debug,
    D::Element: fmt::Debug,
{
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Inspector")
            .field("state", &self.state)
            .field("document", &self.document)
            .field("path_options", &self.settings.path)
            .field("last_hovered", &self.last_hovered)
            .field("path", &self.path)
            .field("element", &self.element)
            .finish_non_exhaustive()
    }
}

impl<D: DocumentAdapter> Inspector<D> {
    /// Creates an inspector and applies `options` as [`Inspector::initialise`] does.
    pub fn new(options: InspectorOptions<D>) -> Result<Self, ConfigurationError> {
        let mut inspector = Self::default();
        inspector.initialise(options)?;
        Ok(inspector)
    }

    /// Tears down the current session and applies a fresh configuration.
    ///
    /// Listeners are detached first, then all session fields are cleared and
    /// `options` are merged over the defaults (previous options do not carry
    /// over). The document is resolved from the options, falling back to
    /// [`DocumentAdapter::ambient`]. If a document is available and
    /// `start_on_initialise` is not `false`, inspection starts.
    ///
    /// Without a document the inspector stays idle; a later
    /// [`start`](Self::start) reports [`ConfigurationError::DocumentRequired`].
    pub fn initialise(&mut self, options: InspectorOptions<D>) -> Result<(), ConfigurationError> {
        self.stop();

        let (document, settings) = options.resolve();
        self.settings = settings;
        self.document = document.or_else(D::ambient);
        self.state = SessionState::Idle;
        self.last_hovered = None;
        self.path = None;
        self.element = None;
        debug!(
            has_document = self.document.is_some(),
            start = self.settings.start_on_initialise,
            "inspector initialised"
        );

        if self.document.is_some() && self.settings.start_on_initialise {
            self.start()?;
        }
        Ok(())
    }

    /// Same as [`initialise`](Self::initialise).
    pub fn reinitialise(&mut self, options: InspectorOptions<D>) -> Result<(), ConfigurationError> {
        self.initialise(options)
    }

    /// Starts inspecting: subscribes pointer and click listeners on the
    /// document and the key-down listener on the key context.
    ///
    /// Starting an inspector that is already inspecting is a no-op.
    ///
    /// # Errors
    ///
    /// - [`ConfigurationError::DocumentRequired`] if there is no document.
    /// - [`ConfigurationError::ListenerRejected`] if the document refuses a
    ///   listener. Listeners attached so far are detached and the inspector
    ///   stays idle.
    pub fn start(&mut self) -> Result<(), ConfigurationError> {
        let Some(document) = self.document.as_mut() else {
            return Err(ConfigurationError::DocumentRequired);
        };
        if self.state == SessionState::Inspecting {
            return Ok(());
        }

        let subscriptions = subscriptions::<D>(self.settings.key_context.as_ref());
        for (attached, (target, kind)) in subscriptions.iter().enumerate() {
            if let Err(err) = document.subscribe(*target, *kind) {
                for (target, kind) in &subscriptions[..attached] {
                    document.unsubscribe(*target, *kind);
                }
                warn!(%err, "inspection not started");
                return Err(err);
            }
        }
        self.state = SessionState::Inspecting;
        debug!("inspection started");
        Ok(())
    }

    /// Stops inspecting: detaches all listeners, clears the highlight on the
    /// last hovered element and runs the stop callback.
    ///
    /// Stopping an idle inspector is a no-op.
    pub fn stop(&mut self) {
        if self.state == SessionState::Idle {
            return;
        }
        self.state = SessionState::Idle;

        if let Some(document) = self.document.as_mut() {
            for (target, kind) in subscriptions::<D>(self.settings.key_context.as_ref()) {
                document.unsubscribe(target, kind);
            }
            if let Some(last) = &self.last_hovered {
                clear_highlight(document, last);
            }
        }
        debug!("inspection stopped");

        if let Some(on_stop) = self.settings.on_stop.as_mut() {
            on_stop();
        }
    }

    /// Highlights `element` and remembers it as the last hovered element.
    pub fn handle_pointer_enter(&mut self, element: D::Element) {
        if self.state != SessionState::Inspecting {
            return;
        }
        let Some(document) = self.document.as_mut() else {
            return;
        };
        document.set_style(&element, StyleProperty::Outline, &self.settings.outline);
        document.set_style(&element, StyleProperty::Cursor, &self.settings.cursor);
        trace!("highlighted hovered element");
        self.last_hovered = Some(element);
    }

    /// Clears the highlight from `element`.
    pub fn handle_pointer_leave(&mut self, element: &D::Element) {
        if self.state != SessionState::Inspecting {
            return;
        }
        if let Some(document) = self.document.as_mut() {
            clear_highlight(document, element);
        }
    }

    /// Computes the selector path of `element` and hands it to the click callback.
    ///
    /// The host's default action is suppressed. With `stop_on_click` set the
    /// session stops afterwards.
    pub fn handle_click(&mut self, element: D::Element, event: &mut D::Event) {
        if self.state != SessionState::Inspecting {
            return;
        }
        let Some(document) = self.document.as_ref() else {
            return;
        };
        event.prevent_default();

        let path = css_path(document, &element, self.settings.path);
        let data = ClickData {
            path: &path,
            element: &element,
            event,
        };
        match self.settings.on_click.as_mut() {
            Some(on_click) => on_click(&data),
            None => info!(path = %data.path, "element picked"),
        }
        self.path = Some(path);
        self.element = Some(element);

        if self.settings.stop_on_click {
            self.stop();
        }
    }

    /// Stops on Escape (when `stop_on_escape` is set), then passes the event
    /// to the key-down callback whatever key was pressed.
    pub fn handle_key_down(&mut self, event: &D::Event) {
        if self.state != SessionState::Inspecting {
            return;
        }
        if event.is_escape() && self.settings.stop_on_escape {
            self.stop();
        }
        if let Some(on_key_down) = self.settings.on_key_down.as_mut() {
            on_key_down(event);
        }
    }

    /// The selector path computed by the last click of this session.
    #[must_use]
    pub fn path(&self) -> Option<&str> {
        self.path.as_deref()
    }

    /// The element clicked last in this session.
    #[must_use]
    pub fn element(&self) -> Option<&D::Element> {
        self.element.as_ref()
    }

    /// The element the pointer entered last.
    #[must_use]
    pub fn last_hovered(&self) -> Option<&D::Element> {
        self.last_hovered.as_ref()
    }

    /// Current lifecycle state.
    #[must_use]
    pub fn state(&self) -> SessionState {
        self.state
    }

    /// Returns `true` while listeners are attached.
    #[must_use]
    pub fn is_inspecting(&self) -> bool {
        self.state == SessionState::Inspecting
    }

    /// Path options in effect for this session.
    #[must_use]
    pub fn path_options(&self) -> PathOptions {
        self.settings.path
    }

    /// The observed document, if any.
    #[must_use]
    pub fn document(&self) -> Option<&D> {
        self.document.as_ref()
    }

    /// Mutable access to the observed document.
    #[must_use]
    pub fn document_mut(&mut self) -> Option<&mut D> {
        self.document.as_mut()
    }
}

/// Every listener a session holds while inspecting.
fn subscriptions<D: DocumentAdapter>(
    key_context: Option<&D::KeyContext>,
) -> [(ListenerTarget<'_, D::KeyContext>, EventKind); 4] {
    let key_target = match key_context {
        Some(context) => ListenerTarget::KeyContext(context),
        None => ListenerTarget::Document,
    };
    let [enter, leave, click] = EventKind::POINTER;
    [
        (ListenerTarget::Document, enter),
        (ListenerTarget::Document, leave),
        (ListenerTarget::Document, click),
        (key_target, EventKind::KeyDown),
    ]
}

fn clear_highlight<D: DocumentAdapter>(document: &mut D, element: &D::Element) {
    document.set_style(element, StyleProperty::Outline, "");
    document.set_style(element, StyleProperty::Cursor, "");
}
