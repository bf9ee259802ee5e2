//! Store hubs: per-context ownership and initialization of the store set
//!
//! A hub constructs each of its stores with the narrow action slices they
//! declare and initializes them strictly in the declared order. The store set
//! is immutable after construction; there is no dynamic add/remove and no
//! teardown beyond context exit. A construction failure is fatal - there is
//! no partial-hub recovery.

use std::rc::Rc;

use strum::Display;

use crate::action_hub::ActionHub;
use crate::store::Store;
use crate::stores::{
    DetailsViewStore, DevToolStore, FeatureFlagDefaults, FeatureFlagStore, InspectStore,
    LaunchPanelStore, PathSnippetStore, TabStore, UnifiedScanResultStore, VisualizationDefaults,
    VisualizationScanResultStore, VisualizationStore,
};

/// Discriminates hub variants when a process hosts more than one, so message
/// routing can pick the hub that owns the addressed domain.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Display)]
pub enum StoreType {
    TabContext,
    Global,
}

/// Which shell this context runs under. The browser shell hosts the launch
/// panel popup; the desktop shell has no such surface and does not
/// instantiate its store.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ShellKind {
    Browser,
    Desktop,
}

pub trait StoreHub {
    /// Every store this hub variant instantiated. Never contains absent
    /// entries; a domain missing from the result is simply not supported in
    /// this context.
    fn all_stores(&self) -> Vec<Rc<dyn Store>>;
    fn store_type(&self) -> StoreType;
}

/// The per-tab store set: everything scoped to one target page.
pub struct TabContextStoreHub {
    pub visualization_store: Rc<VisualizationStore>,
    pub visualization_scan_result_store: Rc<VisualizationScanResultStore>,
    pub tab_store: Rc<TabStore>,
    pub dev_tool_store: Rc<DevToolStore>,
    pub details_view_store: Rc<DetailsViewStore>,
    pub inspect_store: Rc<InspectStore>,
    pub path_snippet_store: Rc<PathSnippetStore>,
    pub unified_scan_result_store: Rc<UnifiedScanResultStore>,
}

impl TabContextStoreHub {
    /// Construct and initialize every tab-scoped store, in the declared
    /// order. Order matters only for stores whose starting snapshot derives
    /// from construction-time configuration; there are no live cross-store
    /// reads.
    pub fn new(actions: &ActionHub, visualization_defaults: VisualizationDefaults) -> Self {
        let visualization_store = Rc::new(VisualizationStore::new(
            Rc::clone(&actions.visualization),
            Rc::clone(&actions.tab),
            visualization_defaults,
        ));
        visualization_store.initialize();

        let visualization_scan_result_store = Rc::new(VisualizationScanResultStore::new(
            Rc::clone(&actions.visualization_scan_result),
            Rc::clone(&actions.tab),
        ));
        visualization_scan_result_store.initialize();

        let tab_store = Rc::new(TabStore::new(Rc::clone(&actions.tab)));
        tab_store.initialize();

        let dev_tool_store = Rc::new(DevToolStore::new(Rc::clone(&actions.dev_tool)));
        dev_tool_store.initialize();

        let details_view_store = Rc::new(DetailsViewStore::new(Rc::clone(&actions.details_view)));
        details_view_store.initialize();

        let inspect_store = Rc::new(InspectStore::new(
            Rc::clone(&actions.inspect),
            Rc::clone(&actions.tab),
        ));
        inspect_store.initialize();

        let path_snippet_store =
            Rc::new(PathSnippetStore::new(Rc::clone(&actions.path_snippet)));
        path_snippet_store.initialize();

        let unified_scan_result_store = Rc::new(UnifiedScanResultStore::new(Rc::clone(
            &actions.unified_scan_result,
        )));
        unified_scan_result_store.initialize();

        Self {
            visualization_store,
            visualization_scan_result_store,
            tab_store,
            dev_tool_store,
            details_view_store,
            inspect_store,
            path_snippet_store,
            unified_scan_result_store,
        }
    }
}

impl StoreHub for TabContextStoreHub {
    fn all_stores(&self) -> Vec<Rc<dyn Store>> {
        vec![
            Rc::clone(&self.tab_store) as Rc<dyn Store>,
            Rc::clone(&self.visualization_store) as Rc<dyn Store>,
            Rc::clone(&self.visualization_scan_result_store) as Rc<dyn Store>,
            Rc::clone(&self.dev_tool_store) as Rc<dyn Store>,
            Rc::clone(&self.details_view_store) as Rc<dyn Store>,
            Rc::clone(&self.inspect_store) as Rc<dyn Store>,
            Rc::clone(&self.path_snippet_store) as Rc<dyn Store>,
            Rc::clone(&self.unified_scan_result_store) as Rc<dyn Store>,
        ]
    }

    fn store_type(&self) -> StoreType {
        StoreType::TabContext
    }
}

/// The context-wide store set shared by every tab.
pub struct GlobalStoreHub {
    pub feature_flag_store: Rc<FeatureFlagStore>,
    /// Absent on the desktop shell.
    pub launch_panel_store: Option<Rc<LaunchPanelStore>>,
}

impl GlobalStoreHub {
    pub fn new(actions: &ActionHub, shell: ShellKind) -> Self {
        let feature_flag_store = Rc::new(FeatureFlagStore::new(
            Rc::clone(&actions.feature_flag),
            FeatureFlagDefaults::default(),
        ));
        feature_flag_store.initialize();

        let launch_panel_store = match shell {
            ShellKind::Browser => {
                let store = Rc::new(LaunchPanelStore::new(Rc::clone(&actions.launch_panel)));
                store.initialize();
                Some(store)
            }
            ShellKind::Desktop => None,
        };

        Self {
            feature_flag_store,
            launch_panel_store,
        }
    }
}

impl StoreHub for GlobalStoreHub {
    fn all_stores(&self) -> Vec<Rc<dyn Store>> {
        let launch_panel = self
            .launch_panel_store
            .as_ref()
            .map(|store| Rc::clone(store) as Rc<dyn Store>);
        [
            Some(Rc::clone(&self.feature_flag_store) as Rc<dyn Store>),
            launch_panel,
        ]
        .into_iter()
        .flatten()
        .collect()
    }

    fn store_type(&self) -> StoreType {
        StoreType::Global
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::store::StoreId;

    #[test]
    fn tab_context_hub_owns_all_eight_domains() {
        let actions = ActionHub::new();
        let hub = TabContextStoreHub::new(&actions, VisualizationDefaults::default());

        let stores = hub.all_stores();
        assert_eq!(stores.len(), 8);
        assert_eq!(hub.store_type(), StoreType::TabContext);
    }

    #[test]
    fn browser_global_hub_hosts_the_launch_panel() {
        let actions = ActionHub::new();
        let hub = GlobalStoreHub::new(&actions, ShellKind::Browser);

        let ids: Vec<StoreId> = hub.all_stores().iter().map(|s| s.id()).collect();
        assert_eq!(ids, vec![StoreId::FeatureFlag, StoreId::LaunchPanel]);
        assert_eq!(hub.store_type(), StoreType::Global);
    }

    #[test]
    fn desktop_global_hub_reports_no_absent_entries() {
        let actions = ActionHub::new();
        let hub = GlobalStoreHub::new(&actions, ShellKind::Desktop);

        let ids: Vec<StoreId> = hub.all_stores().iter().map(|s| s.id()).collect();
        assert_eq!(ids, vec![StoreId::FeatureFlag]);
    }

    #[test]
    fn actions_fired_in_one_turn_notify_subscribers_in_firing_order() {
        use std::cell::RefCell;
        use std::rc::Rc;

        let actions = ActionHub::new();
        let hub = TabContextStoreHub::new(&actions, VisualizationDefaults::default());

        let order = Rc::new(RefCell::new(Vec::new()));
        for store in hub.all_stores() {
            let order = Rc::clone(&order);
            let id = store.id();
            store.add_changed_listener(Box::new(move || order.borrow_mut().push(id)));
        }

        actions.path_snippet.clear_data.invoke(&());
        actions.tab.tab_removed.invoke(&());

        // PathSnippet subscribes only to path-snippet actions; Tab,
        // VisualizationScanResult subscribe to tab_removed. Notifications
        // arrive strictly in firing order, never interleaved.
        assert_eq!(
            *order.borrow(),
            vec![
                StoreId::PathSnippet,
                StoreId::VisualizationScanResult,
                StoreId::Tab,
            ]
        );
    }

    #[test]
    fn both_hub_variants_share_one_action_catalog() {
        let actions = ActionHub::new();
        let tab_hub = TabContextStoreHub::new(&actions, VisualizationDefaults::default());
        let global_hub = GlobalStoreHub::new(&actions, ShellKind::Browser);

        // Firing a tab action must not disturb global stores, and both hubs
        // stay independently readable.
        actions.tab.tab_removed.invoke(&());
        assert!(tab_hub.tab_store.get_state().is_closed);
        assert!(!global_hub
            .feature_flag_store
            .get_state()
            .flags
            .is_empty());
    }
}
