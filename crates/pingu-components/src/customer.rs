//! Customer page: segmentation donut, CLV trend and market basket pairs

use leptos::prelude::*;
use pingu_charts::{DonutChart, LineChart};
use pingu_core::Category;
use pingu_state::{use_registry, PageSelection, Route};

use crate::{ChartPanel, Header, MarketBasketList, NavBar, SectionTitle};

#[component]
pub fn Customer() -> impl IntoView {
    let registry = use_registry();
    let segments = PageSelection::new(registry.clone(), Category::NewVsReturning);
    let clv = PageSelection::new(registry.clone(), Category::ClvTrend);
    let basket = PageSelection::new(registry, Category::MarketBasket);
    tracing::debug!(route = Route::Customer.path(), "Page opened");

    view! {
        <div class="container">
            <Header />
            <SectionTitle route=Route::Customer />

            <div class="split-layout">
                <div class="panel-left">
                    <ChartPanel title="NEW VS RETURNING">
                        <DonutChart records=segments.records() metric=segments.metric() />
                    </ChartPanel>
                    <ChartPanel title="AVG CUSTOMER LIFETIME VALUE (TREND)">
                        <LineChart records=clv.records() metric=clv.metric() />
                    </ChartPanel>
                </div>

                <div class="panel-right">
                    <h3 class="panel-title centered">"MARKET BASKET"</h3>
                    <p class="panel-note">"Items frequently bought together"</p>
                    <MarketBasketList records=basket.records() />
                </div>
            </div>

            <NavBar />
        </div>
    }
}
