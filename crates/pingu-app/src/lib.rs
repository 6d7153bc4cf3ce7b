//! # pingu-app
//!
//! Application shell: logging, the shared registry and the router.

use std::sync::Arc;

use leptos::prelude::*;
use leptos_meta::{provide_meta_context, Title};
use leptos_router::{
    components::{Route, Router, Routes},
    path,
};
use pingu_components::{Commercial, Customer, NotFound, Operations, Overview};
use pingu_core::{sample_registry, Registry};
use pingu_state::provide_registry;

pub const APP_TITLE: &str = "PINGU Analytics";

/// Install the global tracing subscriber
pub fn init_logging() {
    #[cfg(target_arch = "wasm32")]
    tracing_wasm::set_as_global_default_with_config(
        tracing_wasm::WASMLayerConfigBuilder::new()
            .set_max_level(tracing::Level::DEBUG)
            .build(),
    );

    #[cfg(not(target_arch = "wasm32"))]
    {
        let _ = tracing_subscriber::fmt()
            .with_max_level(tracing::Level::DEBUG)
            .try_init();
    }
}

/// Build the dataset registry. A malformed registry is logged and replaced
/// by an empty one, so every chart falls back to its placeholder.
pub fn load_registry() -> Arc<Registry> {
    match sample_registry() {
        Ok(registry) => Arc::new(registry),
        Err(e) => {
            tracing::error!(error = %e, "Failed to build dataset registry");
            Arc::new(Registry::empty())
        }
    }
}

#[component]
pub fn App() -> impl IntoView {
    provide_meta_context();
    provide_registry(load_registry());

    view! {
        <Title text=APP_TITLE />
        <Router>
            <main class="app">
                <Routes fallback=|| view! { <NotFound /> }>
                    <Route path=path!("/") view=Overview />
                    <Route path=path!("/commercial") view=Commercial />
                    <Route path=path!("/operations") view=Operations />
                    <Route path=path!("/customer") view=Customer />
                </Routes>
            </main>
        </Router>
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_load_registry() {
        let registry = load_registry();
        assert!(!registry.is_empty());
        assert_eq!(registry.categories().count(), pingu_core::Category::all().len());
    }
}
