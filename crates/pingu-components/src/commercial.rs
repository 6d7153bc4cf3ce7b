//! Commercial page: monthly revenue by city and the top products list

use leptos::prelude::*;
use pingu_charts::BarChart;
use pingu_core::{Category, Dimension};
use pingu_state::{use_registry, PageSelection, Route};

use crate::{FilterSelect, Header, NavBar, SectionTitle, TopProductsList};

#[component]
pub fn Commercial() -> impl IntoView {
    let registry = use_registry();
    let revenue = PageSelection::new(registry.clone(), Category::Commercial);
    let products = PageSelection::new(registry, Category::TopProducts);
    tracing::debug!(route = Route::Commercial.path(), "Page opened");

    view! {
        <div class="container">
            <Header />
            <SectionTitle route=Route::Commercial />

            <div class="split-layout">
                <div class="panel-left">
                    <div class="panel-head">
                        <h3 class="panel-title">"MONTHLY REVENUE"</h3>
                        <FilterSelect page=revenue dimension=Dimension::City />
                    </div>
                    <div class="chart-container borderless">
                        <BarChart records=revenue.records() metric=revenue.metric() />
                    </div>
                </div>

                <div class="panel-right">
                    <h3 class="panel-title centered">"TOP PRODUCTS"</h3>
                    <TopProductsList records=products.records() />
                </div>
            </div>

            <NavBar />
        </div>
    }
}
