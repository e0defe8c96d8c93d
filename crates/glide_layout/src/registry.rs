//! Selector registry for headless documents

use rustc_hash::FxHashMap;
use smallvec::SmallVec;

use crate::document::NodeId;

/// Registry mapping selectors to nodes
///
/// Selectors are opaque keys (`.carousel-window`, `#strip`); there is no CSS
/// matching. Several nodes may share a selector, and lookups return the one
/// registered first, mirroring `querySelector` document order.
#[derive(Debug, Default)]
pub struct ElementRegistry {
    /// Selector → nodes in registration order
    selectors: FxHashMap<String, Vec<NodeId>>,
    /// Node → selectors it was registered under
    reverse: FxHashMap<NodeId, SmallVec<[String; 2]>>,
}

impl ElementRegistry {
    /// Create a new empty registry
    pub fn new() -> Self {
        Self::default()
    }

    /// Register a node under a selector
    pub fn register(&mut self, selector: impl Into<String>, node: NodeId) {
        let selector = selector.into().trim().to_string();
        let nodes = self.selectors.entry(selector.clone()).or_default();
        if nodes.contains(&node) {
            return;
        }
        nodes.push(node);
        self.reverse.entry(node).or_default().push(selector);
    }

    /// Look up the first node for a selector
    pub fn get(&self, selector: &str) -> Option<NodeId> {
        self.selectors
            .get(selector.trim())
            .and_then(|nodes| nodes.first().copied())
    }

    /// Remove a node from every selector it was registered under
    pub fn unregister_node(&mut self, node: NodeId) {
        let Some(selectors) = self.reverse.remove(&node) else {
            return;
        };
        for selector in selectors {
            if let Some(nodes) = self.selectors.get_mut(&selector) {
                nodes.retain(|n| *n != node);
                if nodes.is_empty() {
                    self.selectors.remove(&selector);
                }
            }
        }
    }

    /// Number of distinct selectors
    pub fn len(&self) -> usize {
        self.selectors.len()
    }

    /// Check if the registry is empty
    pub fn is_empty(&self) -> bool {
        self.selectors.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use slotmap::SlotMap;

    fn nodes(n: usize) -> Vec<NodeId> {
        let mut sm: SlotMap<NodeId, ()> = SlotMap::with_key();
        (0..n).map(|_| sm.insert(())).collect()
    }

    #[test]
    fn test_register_and_lookup() {
        let ids = nodes(2);
        let mut registry = ElementRegistry::new();

        registry.register(".carousel-window", ids[0]);
        registry.register(".skills-carousel", ids[1]);

        assert_eq!(registry.get(".carousel-window"), Some(ids[0]));
        assert_eq!(registry.get(" .skills-carousel "), Some(ids[1]));
        assert_eq!(registry.get(".missing"), None);
        assert_eq!(registry.len(), 2);
    }

    #[test]
    fn test_first_registration_wins() {
        let ids = nodes(2);
        let mut registry = ElementRegistry::new();

        registry.register(".strip", ids[0]);
        registry.register(".strip", ids[1]);

        assert_eq!(registry.get(".strip"), Some(ids[0]));
        assert_eq!(registry.len(), 1);

        // Removing the first match promotes the next one
        registry.unregister_node(ids[0]);
        assert_eq!(registry.get(".strip"), Some(ids[1]));
    }

    #[test]
    fn test_unregister_clears_all_selectors() {
        let ids = nodes(1);
        let mut registry = ElementRegistry::new();

        registry.register(".carousel-window", ids[0]);
        registry.register("#hero", ids[0]);
        assert_eq!(registry.len(), 2);

        registry.unregister_node(ids[0]);
        assert!(registry.is_empty());
        assert_eq!(registry.get("#hero"), None);
    }
}
