//! Server entry-point – Axum + Leptos SSR.
//!
//! `pokex-web` generates the static detail pages and then serves the site.
//! `pokex-web prerender` stops after generation.

#[cfg(feature = "ssr")]
#[tokio::main]
async fn main() {
    use std::path::PathBuf;
    use std::sync::Arc;

    use leptos::prelude::*;

    use pokex_common::config::{self, Config};
    use pokex_web::app::AppState;
    use pokex_web::server::{pokeapi::PokeApi, prerender, site};

    // ── Tracing ──────────────────────────────────────────────────────────
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "pokex_web=info,pokex_common=info,tower_http=info".into()),
        )
        .init();

    let prerender_only = std::env::args().nth(1).as_deref() == Some("prerender");

    // ── Configuration ────────────────────────────────────────────────────
    let conf_path = PathBuf::from(
        std::env::var("POKEX_CONF").unwrap_or_else(|_| Config::default_path().into()),
    );
    let config = match config::load_or_default(&conf_path) {
        Ok(config) => config,
        Err(e) => {
            tracing::error!("{e:#}");
            std::process::exit(1);
        }
    };

    let api = match PokeApi::from_config(&config) {
        Ok(api) => api,
        Err(e) => {
            tracing::error!("{e:#}");
            std::process::exit(1);
        }
    };

    let leptos_options = match get_configuration(None) {
        Ok(conf) => conf.leptos_options,
        Err(e) => {
            tracing::error!("Cannot read Leptos configuration: {e}");
            std::process::exit(1);
        }
    };
    let addr = leptos_options.site_addr;
    let site_root = leptos_options.site_root.clone();

    // ── Route enumeration ────────────────────────────────────────────────
    // Only `prerender` treats an unusable catalog as fatal; serving goes on
    // with detail pages rendered on demand.
    if config.prerender {
        match prerender::startup(&api, config.prerender_limit, prerender_only).await {
            Ok(count) => tracing::info!("Generating {count} detail pages"),
            Err(e) => {
                tracing::error!("Cannot enumerate detail routes: {e:#}");
                std::process::exit(1);
            }
        }
    } else if prerender_only {
        tracing::error!("Static generation is disabled (PRERENDER=false)");
        std::process::exit(1);
    } else {
        tracing::info!("Static generation disabled, detail pages render on demand");
    }

    let state = AppState {
        api,
        config: Arc::new(config),
    };

    // ── Routes ───────────────────────────────────────────────────────────
    let app = site::build(state, leptos_options).await;

    if prerender_only {
        tracing::info!("Static pages written under {site_root}");
        return;
    }

    tracing::info!("Pokex Web listening on http://{addr}");

    let listener = match tokio::net::TcpListener::bind(&addr).await {
        Ok(listener) => listener,
        Err(e) => {
            tracing::error!("Cannot bind {addr}: {e}");
            std::process::exit(1);
        }
    };
    if let Err(e) = axum::serve(listener, app.into_make_service()).await {
        tracing::error!("Server error: {e}");
        std::process::exit(1);
    }
}

#[cfg(not(feature = "ssr"))]
fn main() {
    // This binary is only built with the `ssr` feature.
    // The WASM entry point is `lib::hydrate()`.
}
