//! Not-found panel for unknown routes

use leptos::prelude::*;
use leptos_router::hooks::use_location;

use crate::{Header, NavBar};

/// Fallback for paths outside the four pages
#[component]
pub fn NotFound() -> impl IntoView {
    let pathname = use_location().pathname;
    tracing::debug!(path = %pathname.get_untracked(), "No page for path");

    view! {
        <div class="container">
            <Header />
            <h2 class="section-title">"PAGE NOT FOUND"</h2>
            <p class="not-found">{move || format!("Nothing lives at {}", pathname.get())}</p>
            <NavBar />
        </div>
    }
}
