use super::{FeatureStore, StoreError};
use std::collections::HashMap;
use std::sync::Arc;

/// Name -> store dispatch table shared by every task of a run
#[derive(Clone, Default)]
pub struct StoreRegistry {
    map: HashMap<String, Arc<dyn FeatureStore>>,
}

impl StoreRegistry {
    pub fn new() -> Self {
        Self::default()
    }

    /// Register a store under its own name, replacing any previous entry
    pub fn register(&mut self, store: impl FeatureStore + 'static) {
        self.register_shared(Arc::new(store));
    }

    pub fn register_shared(&mut self, store: Arc<dyn FeatureStore>) {
        self.map.insert(store.name().to_string(), store);
    }

    pub fn get(&self, name: &str) -> Option<Arc<dyn FeatureStore>> {
        self.map.get(name).cloned()
    }

    pub fn contains(&self, name: &str) -> bool {
        self.map.contains_key(name)
    }

    /// Look up every name in order, failing on the first unknown one
    pub fn resolve(&self, names: &[String]) -> Result<Vec<Arc<dyn FeatureStore>>, StoreError> {
        names
            .iter()
            .map(|name| {
                self.get(name)
                    .ok_or_else(|| StoreError::UnknownStore(name.clone()))
            })
            .collect()
    }

    pub fn store_count(&self) -> usize {
        self.map.len()
    }

    /// Registered names, sorted
    pub fn registered_names(&self) -> Vec<&str> {
        let mut names: Vec<&str> = self.map.keys().map(|s| s.as_str()).collect();
        names.sort_unstable();
        names
    }
}
