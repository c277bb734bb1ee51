//! The site router: Leptos pages, static assets and the 404 fallback.

use axum::Router;
use leptos::prelude::*;
use leptos_axum::{generate_route_list_with_exclusions_and_ssg_and_context, LeptosRoutes};
use tower_http::{services::ServeDir, trace::TraceLayer};

use crate::app::{shell, AppState};

/// Generate the static detail pages recorded at start-up, then build the
/// router serving the whole site.
pub async fn build(state: AppState, leptos_options: LeptosOptions) -> Router {
    let context = move || provide_context(state.clone());

    let (routes, static_routes) = generate_route_list_with_exclusions_and_ssg_and_context(
        {
            let leptos_options = leptos_options.clone();
            move || shell(leptos_options.clone())
        },
        None,
        context.clone(),
    );
    static_routes.generate(&leptos_options).await;

    let site_root = leptos_options.site_root.clone();
    Router::new()
        .leptos_routes_with_context(&leptos_options, routes, context.clone(), {
            let leptos_options = leptos_options.clone();
            move || shell(leptos_options.clone())
        })
        // Serve static assets (WASM bundle, CSS)
        .nest_service("/pkg", ServeDir::new(format!("{site_root}/pkg")))
        .fallback(leptos_axum::file_and_error_handler_with_context(context, shell))
        .layer(TraceLayer::new_for_http())
        .with_state(leptos_options)
}

// ─── tests ───────────────────────────────────────────────────────────────
