use std::collections::HashMap;

use crate::model::component::TicketComponent;

/// Routing table from component custom ids to the components they belong to.
///
/// Rebuilt at every start. Routing only depends on the custom id, so a message
/// posted by a previous process routes exactly like one posted by this one.
pub struct ComponentRegistry {
    routes: HashMap<&'static str, TicketComponent>,
}

impl ComponentRegistry {
    /// Creates a registry with every persistent component registered.
    pub fn new() -> Self {
        let mut registry = Self {
            routes: HashMap::new(),
        };
        for component in TicketComponent::ALL {
            registry.register(component);
        }
        registry
    }

    /// Registers a component under its custom id.
    ///
    /// Registering the same component again leaves the registry unchanged.
    ///
    /// # Returns
    /// - `true` - Component was not registered before
    /// - `false` - Component was already registered
    pub fn register(&mut self, component: TicketComponent) -> bool {
        self.routes.insert(component.custom_id(), component).is_none()
    }

    pub fn resolve(&self, custom_id: &str) -> Option<TicketComponent> {
        self.routes.get(custom_id).copied()
    }

    /// Registered custom ids in lexical order.
    pub fn custom_ids(&self) -> Vec<&'static str> {
        let mut ids: Vec<&'static str> = self.routes.keys().copied().collect();
        ids.sort_unstable();
        ids
    }
}

impl Default for ComponentRegistry {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::component::{CATEGORY_SELECT_ID, CLOSE_BUTTON_ID};

    /// Tests that two independent initializations expose the same ids.
    ///
    /// Expected: identical ids, matching the ids of already posted messages
    #[test]
    fn ids_are_stable_across_initializations() {
        let first = ComponentRegistry::new();
        let second = ComponentRegistry::new();

        assert_eq!(first.custom_ids(), second.custom_ids());
        assert_eq!(first.custom_ids(), vec![CLOSE_BUTTON_ID, CATEGORY_SELECT_ID]);
        assert_eq!(CATEGORY_SELECT_ID, "void_select");
        assert_eq!(CLOSE_BUTTON_ID, "close_ticket");
    }

    /// Expected: re-registration reports no change and keeps the size
    #[test]
    fn registration_is_idempotent() {
        let mut registry = ComponentRegistry::new();

        assert!(!registry.register(TicketComponent::CloseButton));
        assert!(!registry.register(TicketComponent::CategorySelect));
        assert_eq!(registry.custom_ids().len(), 2);
    }

    #[test]
    fn resolves_registered_ids() {
        let registry = ComponentRegistry::new();

        assert_eq!(
            registry.resolve("void_select"),
            Some(TicketComponent::CategorySelect)
        );
        assert_eq!(
            registry.resolve("close_ticket"),
            Some(TicketComponent::CloseButton)
        );
        assert_eq!(registry.resolve("open_ticket"), None);
    }
}
