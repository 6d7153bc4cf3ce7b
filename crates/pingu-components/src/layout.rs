//! Header, nav bar, filters and KPI cards shared by every page

use leptos::prelude::*;
use leptos_router::hooks::use_location;
use pingu_core::{Dimension, Kpi};
use pingu_state::{nav_entries, PageSelection, Route};

/// Logo bar, with optional controls on the right
#[component]
pub fn Header(#[prop(optional)] children: Option<Children>) -> impl IntoView {
    view! {
        <div class="header">
            <div class="logo">"PINGU"</div>
            {children.map(|children| view! { <div class="controls">{children()}</div> })}
        </div>
    }
}

#[component]
pub fn SectionTitle(route: Route) -> impl IntoView {
    view! { <h2 class="section-title">{route.title()}</h2> }
}

/// Page links; the one for the current location is underlined
#[component]
pub fn NavBar() -> impl IntoView {
    let pathname = use_location().pathname;

    view! {
        <nav class="navbar">
            {move || {
                nav_entries(&pathname.get())
                    .into_iter()
                    .map(|entry| {
                        let class = if entry.active { "nav-link active" } else { "nav-link" };
                        view! {
                            <a href=entry.path class=class>
                                {entry.label}
                            </a>
                        }
                    })
                    .collect_view()
            }}
        </nav>
    }
}

/// Dropdown bound to one dimension of a page selection
#[component]
pub fn FilterSelect(page: PageSelection, dimension: Dimension) -> impl IntoView {
    let value = page.value(dimension);

    view! {
        <select
            class="dropdown"
            aria-label=dimension.label()
            prop:value=move || value.get()
            on:change=move |ev| page.set(dimension, event_target_value(&ev))
        >
            {dimension
                .options()
                .iter()
                .map(|&option| {
                    let selected = move || value.get() == option;
                    view! {
                        <option value=option selected=selected>
                            {option}
                        </option>
                    }
                })
                .collect_view()}
        </select>
    }
}

#[component]
pub fn KpiCard(kpi: Kpi) -> impl IntoView {
    view! {
        <div class="kpi-card">
            <div class="kpi-badge">{kpi.value}</div>
            <div class="kpi-label">{kpi.label}</div>
        </div>
    }
}

#[component]
pub fn KpiRow(kpis: &'static [Kpi]) -> impl IntoView {
    view! {
        <div class="kpi-container">
            {kpis.iter().map(|kpi| view! { <KpiCard kpi=*kpi /> }).collect_view()}
        </div>
    }
}

/// Titled box around a chart
#[component]
pub fn ChartPanel(title: &'static str, children: Children) -> impl IntoView {
    view! {
        <div class="chart-container">
            <h3 class="chart-title">{title}</h3>
            {children()}
        </div>
    }
}
