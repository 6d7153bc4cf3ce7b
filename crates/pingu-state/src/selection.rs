//! Page-scoped filter selection

use std::sync::Arc;

use leptos::prelude::*;
use pingu_core::{resolve, Category, Dimension, Record, Registry, Selection};

/// Reactive selection for one page.
///
/// Created inside the page component, so it lives exactly as long as the
/// page's reactive owner. The resolved series is a [`Memo`] over
/// [`resolve`] and recomputes synchronously when a filter changes.
#[derive(Clone, Copy)]
pub struct PageSelection {
    category: Category,
    selection: RwSignal<Selection>,
    records: Memo<Vec<Record>>,
}

impl PageSelection {
    /// Start at every dimension's default value
    pub fn new(registry: Arc<Registry>, category: Category) -> Self {
        let selection = RwSignal::new(Selection::defaults_for(category));
        let records = Memo::new(move |_| {
            selection.with(|selection| resolve(&registry, category, selection))
        });

        Self {
            category,
            selection,
            records,
        }
    }

    pub fn category(&self) -> Category {
        self.category
    }

    /// Field the page's chart plots, `None` for list-only categories
    pub fn metric(&self) -> Option<&'static str> {
        self.category.metric()
    }

    /// Choose a value for `dimension`; re-selecting the current value is a no-op
    pub fn set(&self, dimension: Dimension, value: impl Into<String>) {
        let value = value.into();
        let mut changed = false;
        self.selection.maybe_update(|selection| {
            changed = selection.set(dimension, value.clone());
            changed
        });

        if changed {
            tracing::debug!(
                category = %self.category,
                dimension = dimension.label(),
                value = %value,
                "Selection changed"
            );
        }
    }

    /// Current value for `dimension`, empty when unset
    pub fn value(&self, dimension: Dimension) -> Signal<String> {
        let selection = self.selection;
        Signal::derive(move || {
            selection.with(|s| s.get(dimension).unwrap_or_default().to_string())
        })
    }

    /// Resolved record series for the current selection
    pub fn records(&self) -> Memo<Vec<Record>> {
        self.records
    }

    /// Untracked copy of the current selection
    pub fn snapshot(&self) -> Selection {
        self.selection.get_untracked()
    }
}
