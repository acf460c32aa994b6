//! Name-to-strategy registry.
//!
//! Strategies are registered as factories so each `chunk()` call can
//! build a strategy bound to its own `ChunkConfig`. New strategies are
//! added here without touching the orchestrator.

use std::collections::BTreeMap;
use std::fmt;
use std::sync::Arc;

use crate::core::error::{ChunkError, Result};
use crate::core::strategies::{
    LegalStrategy, SegmentationStrategy, SemanticStrategy, SimpleStrategy,
};
use crate::core::types::ChunkConfig;

/// Builds a strategy for a given configuration
pub type StrategyFactory =
    Arc<dyn Fn(&ChunkConfig) -> Box<dyn SegmentationStrategy> + Send + Sync>;

/// Registry of segmentation strategies
///
/// Backed by a `BTreeMap` so listings are sorted and deterministic.
#[derive(Clone, Default)]
pub struct StrategyRegistry {
    factories: BTreeMap<String, StrategyFactory>,
}

impl StrategyRegistry {
    /// Create an empty registry
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a registry holding the built-in strategies
    ///
    /// # Example
    ///
    /// ```
    /// use segmenta::StrategyRegistry;
    ///
    /// let registry = StrategyRegistry::with_builtins();
    /// assert_eq!(registry.names(), vec!["legal", "semantic", "simple"]);
    /// ```
    pub fn with_builtins() -> Self {
        let mut registry = Self::new();
        registry.register(SimpleStrategy::NAME, |config: &ChunkConfig| {
            Box::new(SimpleStrategy::new(config)) as Box<dyn SegmentationStrategy>
        });
        registry.register(LegalStrategy::NAME, |config: &ChunkConfig| {
            Box::new(LegalStrategy::new(config)) as Box<dyn SegmentationStrategy>
        });
        registry.register(SemanticStrategy::NAME, |config: &ChunkConfig| {
            Box::new(SemanticStrategy::new(config)) as Box<dyn SegmentationStrategy>
        });
        registry
    }

    /// Register a factory under `name`, replacing any previous entry
    pub fn register<F>(&mut self, name: impl Into<String>, factory: F)
    where
        F: Fn(&ChunkConfig) -> Box<dyn SegmentationStrategy> + Send + Sync + 'static,
    {
        let name = name.into();
        if self.factories.contains_key(&name) {
            tracing::debug!("Replacing strategy '{}'", name);
        } else {
            tracing::debug!("Registering strategy '{}'", name);
        }
        self.factories.insert(name, Arc::new(factory));
    }

    /// Look up the factory registered under `name`
    ///
    /// # Errors
    ///
    /// Returns `ChunkError::UnknownStrategy` if nothing is registered
    /// under that name. There is no fallback to a default strategy.
    pub fn resolve(&self, name: &str) -> Result<&StrategyFactory> {
        self.factories
            .get(name)
            .ok_or_else(|| ChunkError::UnknownStrategy(name.to_string()))
    }

    pub fn contains(&self, name: &str) -> bool {
        self.factories.contains_key(name)
    }

    /// Registered names in sorted order
    pub fn names(&self) -> Vec<&str> {
        self.factories.keys().map(String::as_str).collect()
    }

    pub fn len(&self) -> usize {
        self.factories.len()
    }

    pub fn is_empty(&self) -> bool {
        self.factories.is_empty()
    }
}

impl fmt::Debug for StrategyRegistry {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("StrategyRegistry")
            .field("strategies", &self.names())
            .finish()
    }
}
