//! Store mechanics shared by every domain store
//!
//! A store owns one state snapshot and only ever replaces it through a
//! transition triggered by a subscribed action. `StoreCore` holds the state
//! cell and the changed-listener list; concrete stores embed one core and
//! register their transitions onto the actions they were constructed with.
//!
//! Invariants enforced here:
//! - `initialize` runs exactly once before any subscribed action fires;
//!   initializing twice is a programmer error and panics.
//! - listeners are notified synchronously after a transition completes,
//!   never before, one notification per completed transition (no batching).
//! - `get_state` hands out a snapshot by clone; callers can never reach the
//!   live state.

use std::cell::RefCell;
use std::rc::Rc;

use strum::Display;

/// Identifies a domain store inside a hub.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Display)]
pub enum StoreId {
    Tab,
    Visualization,
    VisualizationScanResult,
    DevTool,
    DetailsView,
    Inspect,
    PathSnippet,
    UnifiedScanResult,
    FeatureFlag,
    LaunchPanel,
}

/// The store surface a hub exposes to consumers that do not care about the
/// concrete state type (change broadcasting, diagnostics).
pub trait Store {
    fn id(&self) -> StoreId;
    /// Register an observer invoked once per completed transition.
    fn add_changed_listener(&self, listener: Box<dyn Fn()>);
}

struct CoreInner<S> {
    state: RefCell<Option<S>>,
    listeners: RefCell<Vec<Box<dyn Fn()>>>,
}

/// State cell + listener list for one store. Cloning yields another handle
/// onto the same cell, which is what transition closures capture.
pub struct StoreCore<S> {
    inner: Rc<CoreInner<S>>,
}

impl<S> Clone for StoreCore<S> {
    fn clone(&self) -> Self {
        Self {
            inner: Rc::clone(&self.inner),
        }
    }
}

impl<S: Clone> StoreCore<S> {
    pub fn new() -> Self {
        Self {
            inner: Rc::new(CoreInner {
                state: RefCell::new(None),
                listeners: RefCell::new(Vec::new()),
            }),
        }
    }

    /// Establish the starting snapshot. Called from `initialize()` only.
    ///
    /// # Panics
    ///
    /// Panics if the store was already initialized - a second `initialize()`
    /// is a wiring error, fatal at hub construction time.
    pub fn set_initial(&self, state: S) {
        let mut slot = self.inner.state.borrow_mut();
        assert!(slot.is_none(), "store initialized twice");
        *slot = Some(state);
    }

    pub fn is_initialized(&self) -> bool {
        self.inner.state.borrow().is_some()
    }

    /// Current snapshot, by clone.
    ///
    /// # Panics
    ///
    /// Panics if called before `initialize()`.
    pub fn get_state(&self) -> S {
        self.inner
            .state
            .borrow()
            .as_ref()
            .expect("get_state called before initialize")
            .clone()
    }

    /// Apply a transition to the current state, then notify every changed
    /// listener synchronously. The state borrow is released before listeners
    /// run, so a listener may read the new snapshot.
    pub fn transition(&self, f: impl FnOnce(&mut S)) {
        {
            let mut slot = self.inner.state.borrow_mut();
            let state = slot
                .as_mut()
                .expect("action fired before store initialize");
            f(state);
        }
        log::trace!("transition applied: {}", std::any::type_name::<S>());
        for listener in self.inner.listeners.borrow().iter() {
            listener();
        }
    }

    pub fn add_changed_listener(&self, listener: Box<dyn Fn()>) {
        self.inner.listeners.borrow_mut().push(listener);
    }
}

impl<S: Clone> Default for StoreCore<S> {
    fn default() -> Self {
        Self::new()
    }
}
