//! Single-event pub/sub primitive
//!
//! An `Action` carries one typed payload per firing. The action hub owns the
//! instances; stores hold non-owning references to the bundles they were
//! constructed with and subscribe transition callbacks during `initialize()`.
//!
//! Invoking an action with no listeners is a documented no-op, never an
//! error - a hub variant that does not host a given store must still be able
//! to wire (and fire) the full action catalog.

use std::cell::RefCell;

type Listener<T> = Box<dyn Fn(&T)>;

/// A typed single-event action with a synchronous listener list.
///
/// Listeners are invoked in registration order, which is what pins the
/// transition/notification ordering guarantee of the store layer: firing
/// action A and then action B in the same turn always reaches subscribers
/// in that order.
pub struct Action<T> {
    listeners: RefCell<Vec<Listener<T>>>,
}

impl<T> Action<T> {
    pub fn new() -> Self {
        Self {
            listeners: RefCell::new(Vec::new()),
        }
    }

    /// Register a listener for this action.
    ///
    /// Multiple listeners are supported; each registration appends. All
    /// registration happens during store `initialize()` - registering from
    /// inside a running `invoke` is a wiring error and will panic on the
    /// interior borrow.
    pub fn register_callback(&self, listener: impl Fn(&T) + 'static) {
        self.listeners.borrow_mut().push(Box::new(listener));
    }

    /// Fire the action, invoking every registered listener synchronously with
    /// `payload`, in registration order. No listeners means no-op.
    pub fn invoke(&self, payload: &T) {
        for listener in self.listeners.borrow().iter() {
            listener(payload);
        }
    }

    /// Number of registered listeners. Used by wiring diagnostics.
    pub fn listener_count(&self) -> usize {
        self.listeners.borrow().len()
    }
}

impl<T> Default for Action<T> {
    fn default() -> Self {
        Self::new()
    }
}
