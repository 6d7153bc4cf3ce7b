//! Overview page: time range and city filters over daily/monthly revenue

use leptos::prelude::*;
use pingu_charts::BarChart;
use pingu_core::{Category, Dimension, OVERVIEW_KPIS};
use pingu_state::{use_registry, PageSelection, Route};

use crate::{FilterSelect, Header, KpiRow, NavBar, SectionTitle};

#[component]
pub fn Overview() -> impl IntoView {
    let page = PageSelection::new(use_registry(), Category::Overview);
    tracing::debug!(route = Route::Overview.path(), "Page opened");

    view! {
        <div class="container">
            <Header>
                <FilterSelect page=page dimension=Dimension::TimeRange />
                <FilterSelect page=page dimension=Dimension::City />
            </Header>

            <SectionTitle route=Route::Overview />
            <KpiRow kpis=OVERVIEW_KPIS />

            <div class="graph-section">
                <div class="graph-box">
                    <BarChart records=page.records() metric=page.metric() />
                </div>
            </div>

            <NavBar />
        </div>
    }
}
