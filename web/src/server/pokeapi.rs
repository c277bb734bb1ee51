//! PokeAPI client.
//!
//! Two read-only calls over one shared `reqwest::Client`.  Failures never
//! reach the caller: they are logged and turned into an empty listing or
//! `None`.

use anyhow::{bail, Context, Result};
use reqwest::Url;
use serde::de::DeserializeOwned;
use tracing::{debug, warn};

use pokex_common::catalog::{ListItem, PokemonDetail, PokemonList};
use pokex_common::config::Config;

/// Handle to the remote catalog.  Cheap to clone.
#[derive(Clone, Debug)]
pub struct PokeApi {
    client: reqwest::Client,
    base_url: Url,
}

impl PokeApi {
    /// Without a `user_agent` the client sends none.
    pub fn new(base_url: &str, user_agent: Option<&str>) -> Result<Self> {
        let base_url = Url::parse(base_url)
            .with_context(|| format!("Invalid catalog URL {base_url:?}"))?;
        if base_url.cannot_be_a_base() {
            bail!("Catalog URL {base_url} cannot carry a path");
        }

        let mut builder = reqwest::Client::builder();
        if let Some(user_agent) = user_agent {
            builder = builder.user_agent(user_agent);
        }
        let client = builder.build().context("Cannot create HTTP client")?;
        Ok(PokeApi { client, base_url })
    }

    pub fn from_config(config: &Config) -> Result<Self> {
        Self::new(&config.api_base_url, config.user_agent.as_deref())
    }

    /// One page of the catalog index.  Empty on any failure.
    pub async fn fetch_pokemons(&self, limit: u32, offset: u32) -> Vec<ListItem> {
        let mut url = self.endpoint(&["pokemon"]);
        url.query_pairs_mut()
            .append_pair("limit", &limit.to_string())
            .append_pair("offset", &offset.to_string());
        match self.get_json::<PokemonList>(url.clone()).await {
            Ok(list) => {
                debug!("Fetched {} Pokemons from {url}", list.results.len());
                list.results
            }
            Err(e) => {
                warn!("Failed to fetch Pokemons: {e}");
                Vec::new()
            }
        }
    }

    /// Full record for one entry, by numeric id or name.  `None` on any
    /// failure, including "no such entry".
    ///
    /// `id_or_name` always stays a single path segment under `pokemon/`.
    pub async fn fetch_pokemon_details(&self, id_or_name: &str) -> Option<PokemonDetail> {
        // Dot segments would be dropped rather than encoded.
        if matches!(id_or_name, "" | "." | "..") {
            warn!("Refusing to look up Pokemon {id_or_name:?}");
            return None;
        }
        let url = self.endpoint(&["pokemon", id_or_name]);
        match self.get_json::<PokemonDetail>(url).await {
            Ok(detail) => Some(detail),
            Err(e) => {
                warn!("Failed to fetch Pokemon details for {id_or_name}: {e}");
                None
            }
        }
    }

    /// `segments` appended to the base path, each percent-encoded
    /// (`/` included).
    fn endpoint(&self, segments: &[&str]) -> Url {
        let mut url = self.base_url.clone();
        // Checked in `new`.
        if let Ok(mut path) = url.path_segments_mut() {
            path.pop_if_empty().extend(segments);
        }
        url
    }

    async fn get_json<T: DeserializeOwned>(&self, url: Url) -> Result<T, reqwest::Error> {
        self.client
            .get(url)
            .send()
            .await
            .and_then(reqwest::Response::error_for_status)?
            .json::<T>()
            .await
    }
}

// ─── tests ───────────────────────────────────────────────────────────────
