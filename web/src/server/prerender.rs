//! Build-time enumeration of the detail routes to generate.
//!
//! Runs once at start-up, before any request is served.  The result is kept
//! for the lifetime of the process so the static route can read it back.

use std::sync::OnceLock;

use anyhow::Result;
use tracing::{info, warn};

use pokex_common::prerender::route_ids;

use super::pokeapi::PokeApi;

static ROUTE_IDS: OnceLock<Vec<String>> = OnceLock::new();

/// Fetch the first `limit` entries and record their identifiers.
///
/// Fails when no entry yields an identifier, which is also what a failed
/// listing looks like.
pub async fn enumerate(api: &PokeApi, limit: u32) -> Result<&'static [String]> {
    let items = api.fetch_pokemons(limit, 0).await;
    let ids = route_ids(&items)?;
    info!("Enumerated {} of {} entries for static generation", ids.len(), items.len());
    Ok(ROUTE_IDS.get_or_init(|| ids).as_slice())
}

/// [`enumerate`] as run at start-up.  Returns how many detail pages will be
/// generated.
///
/// With `strict` a failed enumeration is an error.  Otherwise it is logged and
/// no page is generated; detail routes then render on demand.
pub async fn startup(api: &PokeApi, limit: u32, strict: bool) -> Result<usize> {
    match enumerate(api, limit).await {
        Ok(ids) => Ok(ids.len()),
        Err(e) if strict => Err(e),
        Err(e) => {
            warn!("No detail pages generated, they will render on demand: {e:#}");
            Ok(0)
        }
    }
}

/// Identifiers recorded by [`enumerate`], empty if it never ran.
pub fn recorded_ids() -> Vec<String> {
    ROUTE_IDS.get().cloned().unwrap_or_default()
}

// ─── tests ───────────────────────────────────────────────────────────────

#[cfg(test)]
mod tests {
    use super::*;

    async fn unreachable_api() -> PokeApi {
        let listener = tokio::net::TcpListener::bind("127.0.0.1:0").await.unwrap();
        let addr = listener.local_addr().unwrap();
        drop(listener);
        PokeApi::new(&format!("http://{addr}"), None).unwrap()
    }

    #[tokio::test]
    async fn test_startup_tolerates_unreachable_catalog() {
        let api = unreachable_api().await;
        assert_eq!(startup(&api, 151, false).await.unwrap(), 0);
    }

    #[tokio::test]
    async fn test_startup_strict_fails_on_unreachable_catalog() {
        let api = unreachable_api().await;
        let err = startup(&api, 151, true).await.unwrap_err();
        assert!(err.to_string().contains("none of the 0 listed entries"));
    }
}
