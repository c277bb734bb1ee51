//! Root Leptos application component with routing.

use leptos::prelude::*;
use leptos_meta::*;
use leptos_router::components::{Route, Router, Routes};
use leptos_router::static_routes::StaticRoute;
use leptos_router::{path, SsrMode};

use crate::components::nav::Nav;
use crate::components::notice::Notice;
use crate::pages::{
    home::Home,
    pokemon::{list_prerender_ids, PokemonPage},
};

/// Server-side application state, provided as Leptos context for server functions.
#[derive(Clone, Debug)]
#[cfg(feature = "ssr")]
pub struct AppState {
    pub api: crate::server::pokeapi::PokeApi,
    pub config: std::sync::Arc<pokex_common::config::Config>,
}

/// HTML document wrapping `<App/>` for server rendering.
pub fn shell(options: LeptosOptions) -> impl IntoView {
    view! {
        <!DOCTYPE html>
        <html lang="en">
            <head>
                <meta charset="utf-8" />
                <meta name="viewport" content="width=device-width, initial-scale=1" />
                <AutoReload options=options.clone() />
                <HydrationScripts options />
                <MetaTags />
            </head>
            <body>
                <App />
            </body>
        </html>
    }
}

/// The root `<App/>` component.
#[component]
pub fn App() -> impl IntoView {
    provide_meta_context();

    view! {
        <Stylesheet id="leptos" href="/pkg/pokex-web.css" />
        <Title text="Pokemon Explorer" />
        <Meta name="description" content="Browse and search the Pokemon catalog" />

        <Router>
            <Nav />
            <main class="main-content">
                <Routes fallback=|| view! {
                    <Notice title="Page Not Found" message="There is nothing at this address." />
                }>
                    <Route path=path!("/") view=Home />
                    // Rendered whole so the notice can set the status.
                    <Route path=path!("/pokemon") view=PokemonPage ssr=SsrMode::Async />
                    <Route
                        path=path!("/pokemon/:id")
                        view=PokemonPage
                        ssr=SsrMode::Static(
                            StaticRoute::new().prerender_params(|| async move {
                                [(String::from("id"), list_prerender_ids().await.unwrap_or_default())]
                                    .into_iter()
                                    .collect()
                            }),
                        )
                    />
                </Routes>
            </main>
        </Router>
    }
}
