//! Top navigation bar component.

use leptos::prelude::*;

/// Site-wide navigation bar.
#[component]
pub fn Nav() -> impl IntoView {
    view! {
        <nav class="nav-bar">
            <div class="nav-brand">
                <a href="/" class="nav-logo">"Pokemon Explorer"</a>
            </div>
            <div class="nav-links">
                <a href="/" class="nav-link">"All Pokemon"</a>
            </div>
        </nav>
    }
}
