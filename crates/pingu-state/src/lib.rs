//! # pingu-state
//!
//! Reactive state for the PINGU analytics dashboard.
//! Each page owns a [`PageSelection`]; the dataset registry is shared
//! read-only through context.

pub mod nav;
pub mod selection;

pub use nav::*;
pub use selection::*;

use std::sync::Arc;

use leptos::prelude::*;
use pingu_core::Registry;

// ============================================================================
// CONTEXT HELPERS
// ============================================================================

/// Shared, immutable dataset registry
#[derive(Debug, Clone)]
pub struct RegistryContext(pub Arc<Registry>);

/// Provide the registry to the component tree
pub fn provide_registry(registry: Arc<Registry>) -> Arc<Registry> {
    provide_context(RegistryContext(registry.clone()));
    registry
}

/// Use the registry from context
pub fn use_registry() -> Arc<Registry> {
    expect_context::<RegistryContext>().0
}

/// Try to get the registry from context (returns None if not provided)
pub fn try_use_registry() -> Option<Arc<Registry>> {
    use_context::<RegistryContext>().map(|ctx| ctx.0)
}

#[cfg(test)]
mod tests {
    use super::*;
    use leptos::reactive::owner::Owner;

    #[test]
    fn test_registry_context_roundtrip() {
        let owner = Owner::new();
        owner.set();

        assert!(try_use_registry().is_none());

        let registry = Arc::new(pingu_core::sample_registry().unwrap());
        provide_registry(registry.clone());

        let found = use_registry();
        assert!(Arc::ptr_eq(&found, &registry));
    }
}
