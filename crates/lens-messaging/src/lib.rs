//! Cross-context messaging for the accessibility lens core
//!
//! UI contexts talk to the background context through three layers living
//! here: a typed message catalog with a JSON wire shape, a fire-and-forget
//! dispatcher riding an in-process channel, and action creators that pair
//! each user gesture with its message and telemetry. On the receiving side
//! the router maps messages onto the action hub.

pub mod creators;
pub mod dispatcher;
pub mod message;
pub mod router;
pub mod telemetry;

pub use dispatcher::{ActionMessageDispatcher, ChannelMessageDispatcher, Transport};
pub use message::{decode_message, IssueDetailsData, Message};
pub use router::MessageRouter;
pub use telemetry::{
    CoreTelemetryEventHandler, LoggingTelemetryClient, TelemetryClient, TelemetryData,
    TelemetryDataFactory, TelemetryEventHandler, TelemetryEventSource, TriggeredBy,
};
