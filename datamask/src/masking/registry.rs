//! Registry of user-supplied masking strategies.
//!
//! Strategies are registered by identifier at startup and instantiated
//! lazily, at most once per identifier, on first use. The instance cache is
//! process-wide and never evicted: construction cost is traded for idempotent
//! lookups for the remainder of the process lifetime.

use std::{collections::HashMap, sync::Arc};

use dashmap::{mapref::entry::Entry, DashMap};

use super::error::{BoxError, MaskError};

/// A user-supplied masking implementation.
///
/// Implementations must be pure, side-effect-free string transformations:
/// the engine invokes a single shared instance concurrently from arbitrary
/// caller threads without additional locking.
pub trait CustomMaskingStrategy: Send + Sync {
    /// Masks `value`, returning the redacted representation.
    fn mask(&self, value: &str) -> String;
}

/// Zero-argument construction path for a custom strategy.
type StrategyFactory = Box<dyn Fn() -> Result<Box<dyn CustomMaskingStrategy>, BoxError> + Send + Sync>;

/// Maps strategy identifiers to lazily constructed, shared instances.
///
/// Factories are registered through `&mut self` before the registry is shared
/// (typically behind an `Arc` handed to the engine), so the factory table is
/// immutable once masking begins. The instance cache supports concurrent
/// resolve calls; the first caller for an identifier constructs under the
/// cache's entry lock, and exactly that instance is retained and returned to
/// every later caller.
#[derive(Default)]
pub struct StrategyRegistry {
    factories: HashMap<String, StrategyFactory>,
    instances: DashMap<String, Arc<dyn CustomMaskingStrategy>>,
}

impl StrategyRegistry {
    /// Creates an empty registry.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Registers a strategy constructed via its `Default` implementation.
    ///
    /// Replaces any factory previously registered under `id`. Instances
    /// already cached for `id` are not invalidated.
    pub fn register<S>(&mut self, id: impl Into<String>)
    where
        S: CustomMaskingStrategy + Default + 'static,
    {
        self.register_with(id, || Ok(Box::new(S::default())));
    }

    /// Registers a fallible zero-argument factory for a strategy.
    ///
    /// A factory failure at resolve time is wrapped into
    /// [`MaskError::StrategyConstruction`] with the cause preserved, and
    /// nothing is cached for the identifier.
    pub fn register_with<F>(&mut self, id: impl Into<String>, factory: F)
    where
        F: Fn() -> Result<Box<dyn CustomMaskingStrategy>, BoxError> + Send + Sync + 'static,
    {
        self.factories.insert(id.into(), Box::new(factory));
    }

    /// Returns the shared instance for `id`, constructing it on first use.
    pub fn resolve(&self, id: &str) -> Result<Arc<dyn CustomMaskingStrategy>, MaskError> {
        if let Some(existing) = self.instances.get(id) {
            return Ok(Arc::clone(&existing));
        }
        match self.instances.entry(id.to_owned()) {
            Entry::Occupied(occupied) => Ok(Arc::clone(occupied.get())),
            Entry::Vacant(vacant) => {
                let factory = self
                    .factories
                    .get(id)
                    .ok_or_else(|| MaskError::UnknownStrategy { id: id.to_owned() })?;
                let instance: Arc<dyn CustomMaskingStrategy> =
                    Arc::from(factory().map_err(|source| MaskError::StrategyConstruction {
                        id: id.to_owned(),
                        source,
                    })?);
                vacant.insert(Arc::clone(&instance));
                Ok(instance)
            }
        }
    }
}

impl std::fmt::Debug for dyn CustomMaskingStrategy {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str("CustomMaskingStrategy")
    }
}

impl std::fmt::Debug for StrategyRegistry {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("StrategyRegistry")
            .field("registered", &self.factories.len())
            .field("instantiated", &self.instances.len())
            .finish()
    }
}
