//! Registry of the behaviors an agent may currently pick from.

use std::collections::HashMap;
use std::sync::Arc;

use crate::behavior::Behavior;

/// Named set of enabled behaviors, keyed by behavior name.
///
/// Behaviors are held through [`Arc`] so several agents can share one
/// configured behavior. Iteration order is unspecified. The set does no
/// scoring of its own.
#[derive(Debug)]
pub struct BehaviorSet<A = ()> {
    name: String,
    enabled: HashMap<String, Arc<Behavior<A>>>,
}

impl<A> Clone for BehaviorSet<A> {
    fn clone(&self) -> Self {
        Self {
            name: self.name.clone(),
            enabled: self.enabled.clone(),
        }
    }
}

impl<A> BehaviorSet<A> {
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            enabled: HashMap::new(),
        }
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    /// Enables `behavior`, replacing any enabled behavior with the same name.
    ///
    /// Returns the replaced behavior.
    pub fn enable(&mut self, behavior: impl Into<Arc<Behavior<A>>>) -> Option<Arc<Behavior<A>>> {
        let behavior = behavior.into();
        self.enabled.insert(behavior.name().to_string(), behavior)
    }

    /// Enables a behavior (builder pattern).
    #[must_use]
    pub fn with(mut self, behavior: impl Into<Arc<Behavior<A>>>) -> Self {
        self.enable(behavior);
        self
    }

    pub fn disable(&mut self, name: &str) -> Option<Arc<Behavior<A>>> {
        self.enabled.remove(name)
    }

    pub fn is_enabled(&self, name: &str) -> bool {
        self.enabled.contains_key(name)
    }

    pub fn get(&self, name: &str) -> Option<&Arc<Behavior<A>>> {
        self.enabled.get(name)
    }

    pub fn iter(&self) -> impl Iterator<Item = &Arc<Behavior<A>>> {
        self.enabled.values()
    }

    pub fn names(&self) -> impl Iterator<Item = &str> {
        self.enabled.keys().map(String::as_str)
    }

    pub fn len(&self) -> usize {
        self.enabled.len()
    }

    pub fn is_empty(&self) -> bool {
        self.enabled.is_empty()
    }

    pub fn clear(&mut self) {
        self.enabled.clear();
    }
}

impl<'a, A> IntoIterator for &'a BehaviorSet<A> {
    type Item = &'a Arc<Behavior<A>>;
    type IntoIter = std::collections::hash_map::Values<'a, String, Arc<Behavior<A>>>;

    fn into_iter(self) -> Self::IntoIter {
        self.enabled.values()
    }
}
