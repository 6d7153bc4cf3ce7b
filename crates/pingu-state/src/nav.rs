//! Top-level routes and the nav bar model

use serde::Serialize;

/// A dashboard page
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Route {
    Overview,
    Commercial,
    Operations,
    Customer,
}

impl Route {
    pub fn path(&self) -> &'static str {
        match self {
            Self::Overview => "/",
            Self::Commercial => "/commercial",
            Self::Operations => "/operations",
            Self::Customer => "/customer",
        }
    }

    /// Nav bar label
    pub fn label(&self) -> &'static str {
        match self {
            Self::Overview => "Overview",
            Self::Commercial => "Commercial",
            Self::Operations => "Operations",
            Self::Customer => "Customer",
        }
    }

    /// Section heading shown on the page
    pub fn title(&self) -> &'static str {
        match self {
            Self::Overview => "OVERVIEW",
            Self::Commercial => "COMMERCIAL ANALYTICS",
            Self::Operations => "OPERATIONS & INVENTORY",
            Self::Customer => "CUSTOMER INSIGHTS",
        }
    }

    /// Exact, case-sensitive
    pub fn from_path(path: &str) -> Option<Self> {
        Self::all().iter().copied().find(|r| r.path() == path)
    }

    pub fn all() -> &'static [Self] {
        &[Self::Overview, Self::Commercial, Self::Operations, Self::Customer]
    }
}

/// One link in the nav bar
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct NavEntry {
    pub label: &'static str,
    pub path: &'static str,
    pub active: bool,
}

/// Nav bar links with the one matching `current_path` marked active.
/// An unknown path leaves every entry inactive.
pub fn nav_entries(current_path: &str) -> Vec<NavEntry> {
    let current = Route::from_path(current_path);
    Route::all()
        .iter()
        .map(|route| NavEntry {
            label: route.label(),
            path: route.path(),
            active: current == Some(*route),
        })
        .collect()
}
