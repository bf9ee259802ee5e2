use std::rc::Rc;

use lens_flux::actions::{TabActions, TabPayload, TabVisibilityPayload};

/// Background-context creator for the tab lifecycle. This one invokes
/// actions directly: the browser event layer already lives in the same
/// context as the stores, so there is no transport hop.
pub struct TabActionCreator {
    tab_actions: Rc<TabActions>,
}

impl TabActionCreator {
    pub fn new(tab_actions: Rc<TabActions>) -> Self {
        Self { tab_actions }
    }

    pub fn on_new_tab(&self, payload: TabPayload) {
        log::debug!("tab opened: {} ({})", payload.tab_id, payload.url);
        self.tab_actions.new_tab.invoke(&payload);
    }

    pub fn on_tab_updated(&self, payload: TabPayload) {
        self.tab_actions.tab_updated.invoke(&payload);
    }

    pub fn on_tab_removed(&self) {
        self.tab_actions.tab_removed.invoke(&());
    }

    pub fn on_visibility_changed(&self, hidden: bool) {
        self.tab_actions
            .visibility_changed
            .invoke(&TabVisibilityPayload { hidden });
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use lens_flux::stores::VisualizationDefaults;
    use lens_flux::{ActionHub, TabContextStoreHub};

    #[test]
    fn tab_events_flow_into_the_tab_store() {
        let actions = ActionHub::new();
        let hub = TabContextStoreHub::new(&actions, VisualizationDefaults::default());
        let creator = TabActionCreator::new(Rc::clone(&actions.tab));

        creator.on_new_tab(TabPayload {
            tab_id: 7,
            url: "https://example.test/".to_string(),
            title: "Example".to_string(),
        });
        creator.on_visibility_changed(true);

        let state = hub.tab_store.get_state();
        assert_eq!(state.id, Some(7));
        assert!(state.is_page_hidden);
    }
}
