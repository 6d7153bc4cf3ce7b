//! Operations page

use leptos::prelude::*;
use pingu_charts::BarChart;
use pingu_core::{Category, OPERATIONS_KPIS};
use pingu_state::{use_registry, PageSelection, Route};

use crate::{Header, KpiRow, NavBar, SectionTitle};

#[component]
pub fn Operations() -> impl IntoView {
    let seasonal = PageSelection::new(use_registry(), Category::SeasonalTrends);
    tracing::debug!(route = Route::Operations.path(), "Page opened");

    view! {
        <div class="container">
            <Header />
            <SectionTitle route=Route::Operations />
            <KpiRow kpis=OPERATIONS_KPIS />

            <div class="graph-section">
                <h3 class="graph-title">"SEASONAL DEMAND TRENDS"</h3>
                <div class="graph-box">
                    <BarChart records=seasonal.records() metric=seasonal.metric() />
                </div>
            </div>

            <NavBar />
        </div>
    }
}
