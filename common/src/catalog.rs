//! Typed records for the PokeAPI catalog plus the small amount of shaping the
//! views need: identifier derivation, name search, artwork choice.
//!
//! Everything here is pure so it compiles for both the server and the WASM
//! client.

use serde::{Deserialize, Serialize};

// ─── Paging endpoint ─────────────────────────────────────────────────────────

/// Body of `GET {base}/pokemon?limit=&offset=`. Only `results` is kept.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct PokemonList {
    #[serde(default)]
    pub results: Vec<ListItem>,
}

/// Reference to one catalog entry as returned by the paging endpoint.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ListItem {
    #[serde(default)]
    pub name: String,
    /// Resource locator, e.g. `https://pokeapi.co/api/v2/pokemon/25/`.
    #[serde(default)]
    pub url: String,
}

impl ListItem {
    /// Identifier carried by the trailing path segment of `url`.
    pub fn id(&self) -> Option<&str> {
        derive_id(&self.url)
    }

    /// Distinguishes entries within one listing.  Names alone may repeat,
    /// the empty name included.
    pub fn key(&self) -> (String, String) {
        (self.name.clone(), self.url.clone())
    }
}

/// Last non-empty `/`-separated segment of a resource locator.
pub fn derive_id(url: &str) -> Option<&str> {
    url.split('/').filter(|segment| !segment.is_empty()).last()
}

/// Entries whose name contains `term`, ignoring case. An empty term keeps
/// everything.
pub fn filter_by_name(items: &[ListItem], term: &str) -> Vec<ListItem> {
    if term.is_empty() {
        return items.to_vec();
    }
    let needle = term.to_lowercase();
    items
        .iter()
        .filter(|item| item.name.to_lowercase().contains(&needle))
        .cloned()
        .collect()
}

/// Small sprite used by the list grid.
pub fn sprite_url(sprite_base: &str, id: &str) -> String {
    format!("{}/sprites/pokemon/{id}.png", sprite_base.trim_end_matches('/'))
}

// ─── Detail endpoint ─────────────────────────────────────────────────────────

/// Body of `GET {base}/pokemon/{idOrName}`, reduced to the fields we render.
///
/// Collections that are missing from the payload decode as empty.
#[derive(Debug, Clone, Deserialize)]
pub struct PokemonDetail {
    pub id: u32,
    pub name: String,
    #[serde(default)]
    pub sprites: Sprites,
    #[serde(default)]
    pub abilities: Vec<AbilitySlot>,
    #[serde(default)]
    pub types: Vec<TypeSlot>,
    #[serde(default)]
    pub stats: Vec<StatSlot>,
    #[serde(default)]
    pub moves: Vec<MoveSlot>,
}

#[derive(Debug, Clone, Default, Deserialize)]
pub struct Sprites {
    pub front_default: Option<String>,
    pub other: Option<OtherSprites>,
}

#[derive(Debug, Clone, Default, Deserialize)]
pub struct OtherSprites {
    #[serde(rename = "official-artwork")]
    pub official_artwork: Option<ArtworkSprite>,
}

#[derive(Debug, Clone, Default, Deserialize)]
pub struct ArtworkSprite {
    pub front_default: Option<String>,
}

/// `{ "name": ..., "url": ... }` reference used throughout the API.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct NamedResource {
    pub name: String,
}

#[derive(Debug, Clone, Deserialize)]
pub struct AbilitySlot {
    pub ability: NamedResource,
}

#[derive(Debug, Clone, Deserialize)]
pub struct TypeSlot {
    #[serde(rename = "type")]
    pub kind: NamedResource,
}

#[derive(Debug, Clone, Deserialize)]
pub struct StatSlot {
    pub stat: NamedResource,
    pub base_stat: u32,
}

#[derive(Debug, Clone, Deserialize)]
pub struct MoveSlot {
    #[serde(rename = "move")]
    pub action: NamedResource,
}

// ─── Display helpers ─────────────────────────────────────────────────────────

/// Image chosen for the detail page.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub enum Artwork {
    Official(String),
    Sprite(String),
    Missing,
}

impl Sprites {
    /// Official artwork, then the primary sprite, then nothing.
    pub fn artwork(&self) -> Artwork {
        self.artwork_where(|_| true)
    }

    /// Like [`Sprites::artwork`], but URLs rejected by `allowed` count as
    /// absent.
    pub fn artwork_where(&self, allowed: impl Fn(&str) -> bool) -> Artwork {
        let usable = |url: &Option<String>| {
            url.as_deref()
                .filter(|u| !u.is_empty() && allowed(*u))
                .map(str::to_owned)
        };

        let official = self
            .other
            .as_ref()
            .and_then(|o| o.official_artwork.as_ref())
            .and_then(|a| usable(&a.front_default));

        if let Some(url) = official {
            Artwork::Official(url)
        } else if let Some(url) = usable(&self.front_default) {
            Artwork::Sprite(url)
        } else {
            Artwork::Missing
        }
    }
}

/// API names are kebab-case (`special-attack`); show them with spaces.
pub fn display_name(raw: &str) -> String {
    raw.replace('-', " ")
}

/// Host part of an absolute URL, without credentials or port.
pub fn image_host(url: &str) -> Option<&str> {
    let (_, rest) = url.split_once("://")?;
    let authority = rest.split(['/', '?', '#']).next()?;
    let host = authority.rsplit('@').next()?;
    let host = host.split(':').next()?;
    (!host.is_empty()).then_some(host)
}

// ─── tests ───────────────────────────────────────────────────────────────
