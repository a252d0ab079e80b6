//! Component Lifecycle
//!
//! `render` is supplied per component; `mount` and `update` are shared.
//! A component is either unmounted or mounted, and every `update` swaps
//! its rendered element for a freshly rendered one in the same position.

use std::cell::RefCell;
use std::rc::Rc;

use web_sys::Node;

use crate::dom::{Child, View};
use crate::error::UiError;

/// Holds the view a component last rendered
#[derive(Default)]
pub struct Slot {
    current: RefCell<Option<View>>,
}

impl Slot {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn is_mounted(&self) -> bool {
        self.current.borrow().is_some()
    }

    pub fn node(&self) -> Option<Node> {
        self.current.borrow().as_ref().map(View::node)
    }

    fn store(&self, view: View) -> Node {
        let node = view.node();
        *self.current.borrow_mut() = Some(view);
        node
    }

    fn replace(&self, name: &'static str, view: View) -> Result<(), UiError> {
        let mut current = self.current.borrow_mut();
        let old = current.as_ref().ok_or(UiError::NotMounted(name))?;
        old.element().replace_with_with_node_1(&view.node())?;
        // Dropping the old view releases its listeners and child components
        *current = Some(view);
        Ok(())
    }
}

pub trait Component: Sized + 'static {
    /// Name used in diagnostics
    const NAME: &'static str;

    fn slot(&self) -> &Slot;

    fn render(self: &Rc<Self>) -> Result<View, UiError>;

    /// Render and remember the result. Mounting again renders again.
    fn mount(self: &Rc<Self>) -> Result<Node, UiError> {
        let view = self.render()?;
        Ok(self.slot().store(view))
    }

    /// Re-render and replace the current element in place.
    fn update(self: &Rc<Self>) -> Result<(), UiError> {
        if !self.slot().is_mounted() {
            return Err(UiError::NotMounted(Self::NAME));
        }
        let view = self.render()?;
        self.slot().replace(Self::NAME, view)
    }

    /// Mount as a child of a parent under construction; the parent's view
    /// keeps the component alive.
    fn into_child(self: Rc<Self>) -> Result<Child, UiError> {
        let node = self.mount()?;
        Ok(Child::Mounted { node, owner: self })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    struct Probe {
        slot: Slot,
    }

    impl Component for Probe {
        const NAME: &'static str = "Probe";

        fn slot(&self) -> &Slot {
            &self.slot
        }

        fn render(self: &Rc<Self>) -> Result<View, UiError> {
            unreachable!("an unmounted probe must not render")
        }
    }

    #[test]
    fn test_update_before_mount_fails() {
        let probe = Rc::new(Probe { slot: Slot::new() });
        assert!(!probe.slot().is_mounted());
        let err = probe.update().unwrap_err();
        assert!(matches!(err, UiError::NotMounted("Probe")));
        assert_eq!(err.to_string(), "Probe updated before it was mounted");
    }
}
