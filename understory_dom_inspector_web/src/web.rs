// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

use alloc::borrow::Cow;
use alloc::boxed::Box;
use alloc::rc::{Rc, Weak};
use alloc::string::String;
use core::cell::{Cell, RefCell};
use core::fmt;

use tracing::{debug, trace, warn};
use understory_css_path::ElementTree;
use understory_dom_inspector::{
    ConfigurationError, DocumentAdapter, EventKind, InputEvent, Inspector, InspectorOptions,
    ListenerTarget, SessionState, StyleProperty,
};
use wasm_bindgen::JsCast;
use wasm_bindgen::closure::Closure;
use web_sys::{Document, Element, Event, EventTarget, HtmlElement, KeyboardEvent};

type Handler = Closure<dyn FnMut(Event)>;

/// What the JS callbacks and the [`WebInspector`] handle share.
struct Shared {
    inspector: RefCell<Inspector<WebDocument>>,
    /// Set by [`WebInspector::stop`] while an event is being handled; the
    /// handler stops the session once it returns.
    stop_requested: Cell<bool>,
}

/// A DOM event as seen by an inspector.
#[derive(Clone, Debug)]
pub struct WebEvent(pub Event);

impl InputEvent for WebEvent {
    fn prevent_default(&mut self) {
        self.0.prevent_default();
    }

    fn is_escape(&self) -> bool {
        self.0
            .dyn_ref::<KeyboardEvent>()
            .is_some_and(|event| event.key() == "Escape")
    }
}

/// One JS callback per event kind, all routed to the same inspector.
struct Listeners {
    pointer_enter: Handler,
    pointer_leave: Handler,
    click: Handler,
    key_down: Handler,
}

impl Listeners {
    fn new(inspector: &Weak<Shared>) -> Self {
        Self {
            pointer_enter: handler(inspector, EventKind::PointerEnter),
            pointer_leave: handler(inspector, EventKind::PointerLeave),
            click: handler(inspector, EventKind::Click),
            key_down: handler(inspector, EventKind::KeyDown),
        }
    }

    fn get(&self, kind: EventKind) -> &js_sys::Function {
        let handler = match kind {
            EventKind::PointerEnter => &self.pointer_enter,
            EventKind::PointerLeave => &self.pointer_leave,
            EventKind::Click => &self.click,
            EventKind::KeyDown => &self.key_down,
        };
        handler.as_ref().unchecked_ref()
    }
}

fn handler(shared: &Weak<Shared>, kind: EventKind) -> Handler {
    let shared = shared.clone();
    Closure::wrap(Box::new(move |event: Event| {
        let Some(shared) = shared.upgrade() else {
            return;
        };
        let Ok(mut inspector) = shared.inspector.try_borrow_mut() else {
            warn!(event = kind.dom_name(), "inspector busy, event dropped");
            return;
        };
        deliver(&mut inspector, kind, event);
        if shared.stop_requested.take() {
            inspector.stop();
        }
    }) as Box<dyn FnMut(Event)>)
}

fn deliver(inspector: &mut Inspector<WebDocument>, kind: EventKind, event: Event) {
    let target = event
        .target()
        .and_then(|target| target.dyn_into::<Element>().ok());
    match (kind, target) {
        (EventKind::PointerEnter, Some(element)) => inspector.handle_pointer_enter(element),
        (EventKind::PointerLeave, Some(element)) => inspector.handle_pointer_leave(&element),
        (EventKind::Click, Some(element)) => {
            inspector.handle_click(element, &mut WebEvent(event));
        }
        (EventKind::KeyDown, _) => inspector.handle_key_down(&WebEvent(event)),
        (_, None) => trace!(event = kind.dom_name(), "event without element target"),
    }
}

/// A [`DocumentAdapter`] over a live browser document.
///
/// A `WebDocument` built with [`WebDocument::new`] answers lookups and applies
/// styles but has no listeners to attach, so starting a plain [`Inspector`] on
/// it fails with [`ConfigurationError::ListenerRejected`] and the inspector
/// stays idle. [`WebInspector`] attaches the listeners it needs.
pub struct WebDocument {
    document: Document,
    listeners: Option<Rc<Listeners>>,
}

impl fmt::Debug for WebDocument {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("WebDocument")
            .field("document", &self.document)
            .field("listeners", &self.listeners.is_some())
            .finish()
    }
}

impl WebDocument {
    /// Wraps `document`.
    #[must_use]
    pub fn new(document: Document) -> Self {
        Self {
            document,
            listeners: None,
        }
    }

    /// The wrapped document.
    #[must_use]
    pub fn document(&self) -> &Document {
        &self.document
    }

    fn target<'a>(&'a self, target: ListenerTarget<'a, EventTarget>) -> &'a EventTarget {
        match target {
            ListenerTarget::Document => &self.document,
            ListenerTarget::KeyContext(context) => context,
        }
    }
}

impl ElementTree for WebDocument {
    type Element = Element;

    fn tag_name(&self, element: &Element) -> Cow<'_, str> {
        Cow::Owned(element.tag_name())
    }

    fn id(&self, element: &Element) -> Cow<'_, str> {
        Cow::Owned(element.id())
    }

    fn class_name(&self, element: &Element) -> Cow<'_, str> {
        // `className` is not a string on SVG elements; the attribute always is.
        Cow::Owned(element.get_attribute("class").unwrap_or_default())
    }

    fn parent_element(&self, element: &Element) -> Option<Element> {
        element.parent_element()
    }

    fn previous_element_sibling(&self, element: &Element) -> Option<Element> {
        element.previous_element_sibling()
    }

    fn next_element_sibling(&self, element: &Element) -> Option<Element> {
        element.next_element_sibling()
    }

    fn count_matches(&self, selector: &str) -> usize {
        match self.document.query_selector_all(selector) {
            Ok(list) => list.length() as usize,
            Err(err) => {
                warn!(selector, ?err, "querySelectorAll rejected selector");
                0
            }
        }
    }
}

impl DocumentAdapter for WebDocument {
    type KeyContext = EventTarget;
    type Event = WebEvent;

    fn ambient() -> Option<Self> {
        web_sys::window()?.document().map(Self::new)
    }

    fn subscribe(
        &mut self,
        target: ListenerTarget<'_, EventTarget>,
        kind: EventKind,
    ) -> Result<(), ConfigurationError> {
        let rejected = ConfigurationError::ListenerRejected {
            event: kind.dom_name(),
        };
        let Some(listeners) = self.listeners.as_ref() else {
            warn!(event = kind.dom_name(), "document has no listeners to attach");
            return Err(rejected);
        };
        self.target(target)
            .add_event_listener_with_callback(kind.dom_name(), listeners.get(kind))
            .map_err(|err| {
                warn!(event = kind.dom_name(), ?err, "addEventListener failed");
                rejected
            })
    }

    fn unsubscribe(&mut self, target: ListenerTarget<'_, EventTarget>, kind: EventKind) {
        let Some(listeners) = self.listeners.as_ref() else {
            return;
        };
        let result = self
            .target(target)
            .remove_event_listener_with_callback(kind.dom_name(), listeners.get(kind));
        if let Err(err) = result {
            warn!(event = kind.dom_name(), ?err, "removeEventListener failed");
        }
    }

    fn set_style(&mut self, element: &Element, property: StyleProperty, value: &str) {
        let Some(element) = element.dyn_ref::<HtmlElement>() else {
            trace!(property = property.css_name(), "not an HTML element, style skipped");
            return;
        };
        let style = element.style();
        let result = if value.is_empty() {
            style.remove_property(property.css_name()).map(drop)
        } else {
            style.set_property(property.css_name(), value)
        };
        if let Err(err) = result {
            warn!(property = property.css_name(), ?err, "inline style update failed");
        }
    }
}

/// An [`Inspector`] attached to real browser events.
///
/// The four JS listeners are created once, in [`WebInspector::new`], and
/// reused by every later session. Dropping a `WebInspector` stops its session
/// and releases them.
///
/// [`stop`](Self::stop) may be called from inside the inspector's own
/// callbacks; the session then stops as soon as the current event has been
/// handled.
///
/// # Panics
///
/// The other methods panic if called from inside one of this inspector's own
/// callbacks.
pub struct WebInspector {
    shared: Rc<Shared>,
    listeners: Rc<Listeners>,
}

impl fmt::Debug for WebInspector {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.shared.inspector.try_borrow() {
            Ok(inspector) => fmt::Debug::fmt(&*inspector, f),
            Err(_) => f.write_str("WebInspector { <busy> }"),
        }
    }
}

impl WebInspector {
    /// Creates an inspector; see [`Inspector::initialise`].
    pub fn new(options: InspectorOptions<WebDocument>) -> Result<Self, ConfigurationError> {
        let shared = Rc::new(Shared {
            inspector: RefCell::new(Inspector::default()),
            stop_requested: Cell::new(false),
        });
        let listeners = Rc::new(Listeners::new(&Rc::downgrade(&shared)));
        let inspector = Self { shared, listeners };
        inspector.reinitialise(options)?;
        Ok(inspector)
    }

    /// Tears down the current session and applies `options`.
    ///
    /// The window's document is used when `options` has none.
    pub fn reinitialise(
        &self,
        mut options: InspectorOptions<WebDocument>,
    ) -> Result<(), ConfigurationError> {
        options.document = options
            .document
            .take()
            .or_else(WebDocument::ambient)
            .map(|mut document| {
                document.listeners = Some(self.listeners.clone());
                document
            });
        self.shared.stop_requested.set(false);
        self.shared.inspector.borrow_mut().initialise(options)
    }

    /// See [`Inspector::start`].
    pub fn start(&self) -> Result<(), ConfigurationError> {
        self.shared.stop_requested.set(false);
        self.shared.inspector.borrow_mut().start()
    }

    /// See [`Inspector::stop`].
    ///
    /// Inside one of the inspector's callbacks the stop is deferred until the
    /// current event has been handled.
    pub fn stop(&self) {
        match self.shared.inspector.try_borrow_mut() {
            Ok(mut inspector) => {
                self.shared.stop_requested.set(false);
                inspector.stop();
            }
            Err(_) => {
                debug!("inspector busy, stop deferred");
                self.shared.stop_requested.set(true);
            }
        }
    }

    /// The selector path computed by the last click.
    #[must_use]
    pub fn path(&self) -> Option<String> {
        self.shared.inspector.borrow().path().map(String::from)
    }

    /// The element clicked last.
    #[must_use]
    pub fn element(&self) -> Option<Element> {
        self.shared.inspector.borrow().element().cloned()
    }

    /// Current lifecycle state.
    #[must_use]
    pub fn state(&self) -> SessionState {
        self.shared.inspector.borrow().state()
    }

    /// Returns `true` while listeners are attached.
    #[must_use]
    pub fn is_inspecting(&self) -> bool {
        self.shared.inspector.borrow().is_inspecting()
    }
}

impl Drop for WebInspector {
    fn drop(&mut self) {
        if let Ok(mut inspector) = self.shared.inspector.try_borrow_mut() {
            inspector.stop();
        }
    }
}
