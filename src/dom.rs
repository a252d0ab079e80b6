//! Element Builder
//!
//! Builds detached DOM elements from a tag, attributes, children and event
//! listeners. The resulting [`View`] keeps the listener closures (and any
//! components mounted inside it) alive for as long as it is retained.

use std::any::Any;
use std::rc::Rc;

use wasm_bindgen::closure::Closure;
use wasm_bindgen::JsCast;
use web_sys::{Document, Element, Event, Node};

use crate::error::UiError;

pub fn document() -> Result<Document, UiError> {
    web_sys::window()
        .and_then(|win| win.document())
        .ok_or(UiError::NoDocument)
}

/// An event type paired with the closure handling it
pub struct Listener {
    event_type: &'static str,
    closure: Closure<dyn FnMut(Event)>,
}

impl Listener {
    pub fn new<F>(event_type: &'static str, handler: F) -> Self
    where
        F: FnMut(Event) + 'static,
    {
        Self {
            event_type,
            closure: Closure::<dyn FnMut(Event)>::new(handler),
        }
    }

    pub fn event_type(&self) -> &'static str {
        self.event_type
    }
}

/// One entry of a children list
pub enum Child {
    Text(String),
    /// An existing node, adopted as-is
    Node(Node),
    /// Output of a nested `create_element` call
    View(View),
    /// A component's node together with the component that rendered it
    Mounted { node: Node, owner: Rc<dyn Any> },
}

/// Children of an element: nothing, one text node, one node, or a list
pub enum Children {
    Empty,
    Text(String),
    One(Child),
    Many(Vec<Child>),
}

impl From<&str> for Child {
    fn from(text: &str) -> Self {
        Child::Text(text.to_string())
    }
}

impl From<String> for Child {
    fn from(text: String) -> Self {
        Child::Text(text)
    }
}

impl From<Node> for Child {
    fn from(node: Node) -> Self {
        Child::Node(node)
    }
}

impl From<View> for Child {
    fn from(view: View) -> Self {
        Child::View(view)
    }
}

impl From<()> for Children {
    fn from(_: ()) -> Self {
        Children::Empty
    }
}

impl From<&str> for Children {
    fn from(text: &str) -> Self {
        Children::Text(text.to_string())
    }
}

impl From<String> for Children {
    fn from(text: String) -> Self {
        Children::Text(text)
    }
}

impl From<Child> for Children {
    fn from(child: Child) -> Self {
        Children::One(child)
    }
}

impl From<Node> for Children {
    fn from(node: Node) -> Self {
        Children::One(Child::Node(node))
    }
}

impl From<View> for Children {
    fn from(view: View) -> Self {
        Children::One(Child::View(view))
    }
}

impl From<Vec<Child>> for Children {
    fn from(children: Vec<Child>) -> Self {
        Children::Many(children)
    }
}

/// A built element plus everything that has to outlive it
pub struct View {
    element: Element,
    listeners: Vec<Listener>,
    owners: Vec<Rc<dyn Any>>,
}

impl View {
    fn new(element: Element) -> Self {
        Self {
            element,
            listeners: Vec::new(),
            owners: Vec::new(),
        }
    }

    pub fn element(&self) -> &Element {
        &self.element
    }

    pub fn node(&self) -> Node {
        self.element.clone().into()
    }

    /// Listeners attached to this element and its nested builder children
    pub fn listener_count(&self) -> usize {
        self.listeners.len()
    }

    fn append(&mut self, document: &Document, child: Child) -> Result<(), UiError> {
        match child {
            Child::Text(text) => {
                let node = document.create_text_node(&text);
                self.element.append_child(&node)?;
            }
            Child::Node(node) => {
                self.element.append_child(&node)?;
            }
            Child::View(view) => {
                self.element.append_child(&view.element)?;
                self.listeners.extend(view.listeners);
                self.owners.extend(view.owners);
            }
            Child::Mounted { node, owner } => {
                self.element.append_child(&node)?;
                self.owners.push(owner);
            }
        }
        Ok(())
    }

    fn listen(&mut self, listener: Listener) -> Result<(), UiError> {
        self.element.add_event_listener_with_callback(
            listener.event_type,
            listener.closure.as_ref().unchecked_ref(),
        )?;
        self.listeners.push(listener);
        Ok(())
    }
}

/// Build a detached element.
///
/// Attributes go through `setAttribute`, so values are plain strings
/// (inline styles included). Listeners are wired immediately.
pub fn create_element(
    tag: &str,
    attributes: &[(&str, &str)],
    children: impl Into<Children>,
    listeners: Vec<Listener>,
) -> Result<View, UiError> {
    let document = document()?;
    let element = document.create_element(tag)?;

    for (name, value) in attributes {
        element.set_attribute(name, value)?;
    }

    let mut view = View::new(element);
    match children.into() {
        Children::Empty => {}
        Children::Text(text) => view.append(&document, Child::Text(text))?,
        Children::One(child) => view.append(&document, child)?,
        Children::Many(children) => {
            for child in children {
                view.append(&document, child)?;
            }
        }
    }

    for listener in listeners {
        view.listen(listener)?;
    }

    Ok(view)
}
