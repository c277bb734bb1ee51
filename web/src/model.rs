//! Shared data-transfer objects used by both server and client.

use serde::{Deserialize, Serialize};

use pokex_common::catalog::{Artwork, ListItem};

// ─── List view ───────────────────────────────────────────────────────────────

/// Catalog index handed to the list view.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct PokemonIndex {
    pub items: Vec<ListItem>,
    /// Root the grid sprites are loaded from.
    pub sprite_base: String,
}

// ─── Detail view ─────────────────────────────────────────────────────────────

/// One detail record, shaped for display.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PokemonDetailView {
    pub id: u32,
    pub name: String,
    pub artwork: Artwork,
    pub types: Vec<String>,
    pub abilities: Vec<String>,
    pub stats: Vec<StatLine>,
    pub moves: Vec<String>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct StatLine {
    pub name: String,
    pub base_stat: u32,
}

/// What one navigation to `/pokemon/...` resolved to.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub enum DetailLookup {
    /// No usable route parameter; nothing was fetched.
    InvalidId,
    /// The catalog returned nothing for this id (or was unreachable).
    NotFound(String),
    Found(PokemonDetailView),
}

#[cfg(feature = "ssr")]
impl PokemonDetailView {
    /// Shape a decoded record: pick the artwork, clean up names, keep the
    /// first `config.moves_shown` moves.
    pub fn from_detail(
        detail: pokex_common::catalog::PokemonDetail,
        config: &pokex_common::config::Config,
    ) -> Self {
        use pokex_common::catalog::display_name;

        PokemonDetailView {
            id: detail.id,
            artwork: detail.sprites.artwork_where(|url| config.allows_image(url)),
            name: detail.name,
            types: detail.types.into_iter().map(|t| t.kind.name).collect(),
            abilities: detail
                .abilities
                .iter()
                .map(|a| display_name(&a.ability.name))
                .collect(),
            stats: detail
                .stats
                .iter()
                .map(|s| StatLine {
                    name: display_name(&s.stat.name),
                    base_stat: s.base_stat,
                })
                .collect(),
            moves: detail
                .moves
                .iter()
                .take(config.moves_shown)
                .map(|m| display_name(&m.action.name))
                .collect(),
        }
    }
}

// ─── tests ───────────────────────────────────────────────────────────────

#[cfg(all(test, feature = "ssr"))]
mod tests {
    use super::*;
    use pokex_common::catalog::PokemonDetail;
    use pokex_common::config::Config;

    fn detail(moves: usize) -> PokemonDetail {
        let moves: Vec<_> = (0..moves)
            .map(|i| serde_json::json!({ "move": { "name": format!("move-number-{i}") } }))
            .collect();
        serde_json::from_value(serde_json::json!({
            "id": 6,
            "name": "charizard",
            "sprites": {
                "front_default": "https://raw.githubusercontent.com/PokeAPI/sprites/master/sprites/pokemon/6.png",
                "other": { "official-artwork": { "front_default": "https://cdn.example.com/6.png" } }
            },
            "abilities": [{ "ability": { "name": "solar-power" } }],
            "types": [{ "type": { "name": "fire" } }, { "type": { "name": "flying" } }],
            "stats": [{ "stat": { "name": "special-attack" }, "base_stat": 109 }],
            "moves": moves
        }))
        .unwrap()
    }

    #[test]
    fn test_from_detail_shapes_names() {
        let view = PokemonDetailView::from_detail(detail(3), &Config::default());
        assert_eq!(view.name, "charizard");
        assert_eq!(view.types, ["fire", "flying"]);
        assert_eq!(view.abilities, ["solar power"]);
        assert_eq!(
            view.stats,
            [StatLine { name: "special attack".into(), base_stat: 109 }]
        );
        assert_eq!(view.moves[0], "move number 0");
    }

    #[test]
    fn test_from_detail_truncates_moves() {
        let config = Config::default();
        let view = PokemonDetailView::from_detail(detail(25), &config);
        assert_eq!(view.moves.len(), 10);
        assert_eq!(view.moves[9], "move number 9");

        let view = PokemonDetailView::from_detail(detail(4), &config);
        assert_eq!(view.moves.len(), 4);
    }

    #[test]
    fn test_from_detail_respects_image_hosts() {
        // Official artwork lives on a host that is not allow-listed.
        let view = PokemonDetailView::from_detail(detail(0), &Config::default());
        assert!(matches!(view.artwork, Artwork::Sprite(_)));

        let open = Config {
            image_hosts: Vec::new(),
            ..Config::default()
        };
        let view = PokemonDetailView::from_detail(detail(0), &open);
        assert_eq!(
            view.artwork,
            Artwork::Official("https://cdn.example.com/6.png".into())
        );
    }
}
