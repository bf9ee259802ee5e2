use std::rc::Rc;

use crate::telemetry::{
    TelemetryData, TelemetryEventHandler, TelemetryEventSource, VALIDATE_PORT,
};

/// Creator for the device-connect surface. Port validation is observable
/// through telemetry only; no store state changes until a scan completes.
pub struct DeviceConnectActionCreator {
    telemetry_event_handler: Rc<dyn TelemetryEventHandler>,
}

impl DeviceConnectActionCreator {
    pub fn new(telemetry_event_handler: Rc<dyn TelemetryEventHandler>) -> Self {
        Self {
            telemetry_event_handler,
        }
    }

    pub fn validate_port(&self, port: u16) {
        let data = TelemetryData::Port {
            port,
            source: TelemetryEventSource::ElectronDeviceConnect,
        };
        self.telemetry_event_handler
            .publish_telemetry(VALIDATE_PORT, &data);
    }
}
