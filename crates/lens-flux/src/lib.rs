//! Typed action/store substrate for the a11y-lens background context
//!
//! Unidirectional data flow: UI intent becomes an action invocation, each
//! subscribed store applies a deterministic transition, and store listeners
//! are notified synchronously afterwards. One [`ActionHub`] and one or more
//! store hubs exist per execution context.

pub mod action;
pub mod action_hub;
pub mod actions;
pub mod store;
pub mod store_hub;
pub mod stores;

pub use action::Action;
pub use action_hub::ActionHub;
pub use store::{Store, StoreCore, StoreId};
pub use store_hub::{GlobalStoreHub, ShellKind, StoreHub, StoreType, TabContextStoreHub};
