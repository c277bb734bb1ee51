//! Full-page notice with a way back to the list.

use leptos::prelude::*;

/// Used for every "there is nothing to show here" outcome.  Server-rendered
/// notices are answered with 404.
#[component]
pub fn Notice(title: &'static str, #[prop(into)] message: String) -> impl IntoView {
    #[cfg(feature = "ssr")]
    {
        if let Some(response) = use_context::<leptos_axum::ResponseOptions>() {
            response.set_status(http::StatusCode::NOT_FOUND);
        }
    }

    view! {
        <div class="notice-page">
            <h1>{title}</h1>
            <p class="notice-message">{message}</p>
            <a href="/" class="home-button">"Go back to Home"</a>
        </div>
    }
}
