//! Action creators
//!
//! Façades the UI surfaces call instead of touching actions or the transport
//! directly. Each creator owns the wiring for one feature area: which message
//! to dispatch, which telemetry to attach and from which source surface.

mod device_connect;
mod issue_filing;
mod tab;

pub use device_connect::DeviceConnectActionCreator;
pub use issue_filing::IssueFilingActionMessageCreator;
pub use tab::TabActionCreator;
