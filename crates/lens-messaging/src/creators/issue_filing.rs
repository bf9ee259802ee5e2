use std::rc::Rc;

use crate::dispatcher::ActionMessageDispatcher;
use crate::message::{IssueDetailsData, Message};
use crate::telemetry::{TelemetryDataFactory, TelemetryEventSource, TriggeredBy, FILE_ISSUE_CLICK};

/// Creator for the issue-filing surface. Lives in a UI context, so every
/// state change leaves as a dispatched message; telemetry for a bare click
/// (no filing) rides the transport without a message.
pub struct IssueFilingActionMessageCreator {
    dispatcher: Rc<dyn ActionMessageDispatcher>,
    telemetry_factory: TelemetryDataFactory,
    source: TelemetryEventSource,
}

impl IssueFilingActionMessageCreator {
    pub fn new(
        dispatcher: Rc<dyn ActionMessageDispatcher>,
        telemetry_factory: TelemetryDataFactory,
        source: TelemetryEventSource,
    ) -> Self {
        Self {
            dispatcher,
            telemetry_factory,
            source,
        }
    }

    pub fn open_settings_panel(&self, triggered_by: TriggeredBy, source_item: &str) {
        let telemetry =
            self.telemetry_factory
                .for_settings_panel_open(triggered_by, self.source, source_item);
        self.dispatcher
            .dispatch_message(Message::SettingsPanelOpen { telemetry });
    }

    pub fn track_file_issue_click(&self, triggered_by: TriggeredBy, service: &str) {
        let telemetry =
            self.telemetry_factory
                .for_file_issue_click(triggered_by, self.source, service);
        self.dispatcher.send_telemetry(FILE_ISSUE_CLICK, telemetry);
    }

    pub fn file_issue(
        &self,
        triggered_by: TriggeredBy,
        service: &str,
        issue_data: IssueDetailsData,
    ) {
        let telemetry =
            self.telemetry_factory
                .for_file_issue_click(triggered_by, self.source, service);
        self.dispatcher.dispatch_message(Message::FileIssue {
            service: service.to_string(),
            issue_data,
            telemetry,
        });
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::dispatcher::test_support::RecordingDispatcher;
    use crate::dispatcher::Transport;
    use crate::telemetry::TelemetryData;

    fn issue_data() -> IssueDetailsData {
        IssueDetailsData {
            page_title: "Example".to_string(),
            page_url: "https://example.test/".to_string(),
            rule_id: "color-contrast".to_string(),
            help: "Elements must have sufficient color contrast".to_string(),
            help_url: "https://example.test/rules/color-contrast".to_string(),
            selector: "#low-contrast".to_string(),
            snippet: "<span id=\"low-contrast\">hi</span>".to_string(),
            failure_summary: "Fix the following: contrast ratio".to_string(),
        }
    }

    #[test]
    fn open_settings_panel_dispatches_with_telemetry() {
        let dispatcher = Rc::new(RecordingDispatcher::default());
        let creator = IssueFilingActionMessageCreator::new(
            Rc::clone(&dispatcher) as Rc<dyn ActionMessageDispatcher>,
            TelemetryDataFactory,
            TelemetryEventSource::DetailsView,
        );

        creator.open_settings_panel(TriggeredBy::MouseClick, "issue-filing-settings");

        let dispatched = dispatcher.dispatched.lock().unwrap();
        assert_eq!(
            *dispatched,
            vec![Transport::Message(Message::SettingsPanelOpen {
                telemetry: TelemetryData::SettingsPanelOpen {
                    triggered_by: TriggeredBy::MouseClick,
                    source: TelemetryEventSource::DetailsView,
                    source_item: "issue-filing-settings".to_string(),
                },
            })]
        );
    }

    #[test]
    fn track_file_issue_click_sends_telemetry_only() {
        let dispatcher = Rc::new(RecordingDispatcher::default());
        let creator = IssueFilingActionMessageCreator::new(
            Rc::clone(&dispatcher) as Rc<dyn ActionMessageDispatcher>,
            TelemetryDataFactory,
            TelemetryEventSource::TargetPage,
        );

        creator.track_file_issue_click(TriggeredBy::Keypress, "gitlab");

        let dispatched = dispatcher.dispatched.lock().unwrap();
        assert_eq!(
            *dispatched,
            vec![Transport::Telemetry {
                event: FILE_ISSUE_CLICK.to_string(),
                data: TelemetryData::FileIssueClick {
                    triggered_by: TriggeredBy::Keypress,
                    source: TelemetryEventSource::TargetPage,
                    service: "gitlab".to_string(),
                },
            }]
        );
    }

    #[test]
    fn file_issue_carries_the_issue_details() {
        let dispatcher = Rc::new(RecordingDispatcher::default());
        let creator = IssueFilingActionMessageCreator::new(
            Rc::clone(&dispatcher) as Rc<dyn ActionMessageDispatcher>,
            TelemetryDataFactory,
            TelemetryEventSource::DetailsView,
        );

        creator.file_issue(TriggeredBy::MouseClick, "github", issue_data());

        let dispatched = dispatcher.dispatched.lock().unwrap();
        match &dispatched[0] {
            Transport::Message(Message::FileIssue {
                service,
                issue_data,
                ..
            }) => {
                assert_eq!(service, "github");
                assert_eq!(issue_data.rule_id, "color-contrast");
            }
            other => panic!("unexpected envelope: {other:?}"),
        }
    }
}
