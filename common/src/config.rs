//! Configuration parsing – reads a `KEY=VALUE` file (`pokex.conf`).
//!
//! Every key is optional; a missing file means "all defaults".

use std::collections::HashMap;
use std::path::Path;

use anyhow::{Context, Result};
use tracing::info;

use crate::catalog::image_host;

/// Application configuration for the web server.
#[derive(Debug, Clone)]
pub struct Config {
    // ── remote catalog ───────────────────────────────────────────────
    /// Root of the catalog REST API, without a trailing slash.
    pub api_base_url: String,
    /// Root of the sprite repository used by the list grid.
    pub sprite_base_url: String,
    /// Sent with every catalog request when set.
    pub user_agent: Option<String>,

    // ── views ────────────────────────────────────────────────────────
    /// Entries requested by the list view.
    pub list_limit: u32,
    /// Moves shown on the detail page.
    pub moves_shown: usize,
    /// Hosts artwork may be loaded from.  Empty allows any host.
    pub image_hosts: Vec<String>,

    // ── static generation ────────────────────────────────────────────
    pub prerender: bool,
    /// Entries enumerated for the statically generated detail routes.
    pub prerender_limit: u32,
}

impl Default for Config {
    fn default() -> Self {
        Config {
            api_base_url: "https://pokeapi.co/api/v2".into(),
            sprite_base_url: "https://raw.githubusercontent.com/PokeAPI/sprites/master".into(),
            user_agent: None,
            list_limit: 1300,
            moves_shown: 10,
            image_hosts: vec!["raw.githubusercontent.com".into()],
            prerender: true,
            prerender_limit: 151,
        }
    }
}

impl Config {
    /// Default config path.
    pub fn default_path() -> &'static str {
        "/etc/pokex/pokex.conf"
    }

    /// Whether an image URL points at an allow-listed host.
    pub fn allows_image(&self, url: &str) -> bool {
        if self.image_hosts.is_empty() {
            return true;
        }
        image_host(url).is_some_and(|host| {
            self.image_hosts
                .iter()
                .any(|allowed| allowed.eq_ignore_ascii_case(host))
        })
    }
}

/// Load `path` if it exists, otherwise fall back to [`Config::default`].
pub fn load_or_default(path: &Path) -> Result<Config> {
    if path.exists() {
        load(path)
    } else {
        info!("No config at {}, using defaults", path.display());
        Ok(Config::default())
    }
}

/// Parse a `KEY=VALUE` configuration file.
///
/// Lines starting with `#` are comments.  Values may be optionally
/// double-quoted.  Unknown keys are silently ignored.
pub fn load(path: &Path) -> Result<Config> {
    let text = std::fs::read_to_string(path)
        .with_context(|| format!("Cannot read config: {}", path.display()))?;

    let config = from_map(&parse_conf(&text));
    info!("Loaded config from {}", path.display());
    Ok(config)
}

fn from_map(map: &HashMap<String, String>) -> Config {
    let defaults = Config::default();

    let get = |key: &str| -> Option<String> { map.get(key).cloned().filter(|v| !v.is_empty()) };
    let get_u32 = |key: &str, default: u32| -> u32 {
        get(key).and_then(|v| v.parse().ok()).unwrap_or(default)
    };
    let url = |key: &str, default: String| -> String {
        get(key)
            .map(|v| v.trim_end_matches('/').to_string())
            .unwrap_or(default)
    };

    let image_hosts = match map.get("IMAGE_HOSTS") {
        Some(hosts) => hosts
            .split(',')
            .map(|h| h.trim().to_string())
            .filter(|h| !h.is_empty())
            .collect(),
        None => defaults.image_hosts,
    };

    Config {
        api_base_url: url("API_BASE_URL", defaults.api_base_url),
        sprite_base_url: url("SPRITE_BASE_URL", defaults.sprite_base_url),
        user_agent: get("USER_AGENT").or(defaults.user_agent),
        list_limit: get_u32("LIST_LIMIT", defaults.list_limit),
        moves_shown: get("MOVES_SHOWN")
            .and_then(|v| v.parse().ok())
            .unwrap_or(defaults.moves_shown),
        image_hosts,
        prerender: get("PRERENDER")
            .map(|v| v == "1" || v.eq_ignore_ascii_case("true"))
            .unwrap_or(defaults.prerender),
        prerender_limit: get_u32("PRERENDER_LIMIT", defaults.prerender_limit),
    }
}

/// Parse `KEY=VALUE` lines into a map, stripping optional double-quotes.
fn parse_conf(text: &str) -> HashMap<String, String> {
    let mut map = HashMap::new();
    for line in text.lines() {
        let line = line.trim();
        if line.is_empty() || line.starts_with('#') {
            continue;
        }
        if let Some((key, val)) = line.split_once('=') {
            let key = key.trim();
            let val = val.trim().trim_matches('"');
            map.insert(key.to_string(), val.to_string());
        }
    }
    map
}

// ─── tests ───────────────────────────────────────────────────────────────

#[cfg(test)]
mod tests {
    use super::*;
    use std::path::PathBuf;

    #[test]
    fn test_parse_conf() {
        let text = r#"
# comment
API_BASE_URL="https://pokeapi.co/api/v2/"
LIST_LIMIT=20
IMAGE_HOSTS="raw.githubusercontent.com, img.example.org"
"#;
        let map = parse_conf(text);
        assert_eq!(map["API_BASE_URL"], "https://pokeapi.co/api/v2/");
        assert_eq!(map["LIST_LIMIT"], "20");

        let config = from_map(&map);
        assert_eq!(config.api_base_url, "https://pokeapi.co/api/v2");
        assert_eq!(config.list_limit, 20);
        assert_eq!(config.prerender_limit, 151);
        assert_eq!(config.user_agent, None);
        assert_eq!(
            config.image_hosts,
            ["raw.githubusercontent.com", "img.example.org"]
        );
    }

    #[test]
    fn test_bad_numbers_keep_defaults() {
        let config = from_map(&parse_conf("LIST_LIMIT=lots\nMOVES_SHOWN=-1\nPRERENDER=no\n"));
        assert_eq!(config.list_limit, 1300);
        assert_eq!(config.moves_shown, 10);
        assert!(!config.prerender);
    }

    #[test]
    fn test_user_agent_is_optional() {
        let config = from_map(&parse_conf("USER_AGENT=\n"));
        assert_eq!(config.user_agent, None);

        let config = from_map(&parse_conf("USER_AGENT=\"pokex/2.0 (ops@example.org)\"\n"));
        assert_eq!(config.user_agent.as_deref(), Some("pokex/2.0 (ops@example.org)"));
    }

    #[test]
    fn test_allows_image() {
        let config = Config::default();
        assert!(config.allows_image(
            "https://raw.githubusercontent.com/PokeAPI/sprites/master/sprites/pokemon/1.png"
        ));
        assert!(!config.allows_image("https://elsewhere.net/1.png"));

        let open = from_map(&parse_conf("IMAGE_HOSTS=\n"));
        assert!(open.image_hosts.is_empty());
        assert!(open.allows_image("https://elsewhere.net/1.png"));
    }

    #[test]
    fn test_load_or_default_missing_file() {
        let path = PathBuf::from("/nonexistent/pokex/pokex.conf");
        let config = load_or_default(&path).unwrap();
        assert_eq!(config.api_base_url, "https://pokeapi.co/api/v2");
    }

    #[test]
    fn test_load_file() {
        let tmp = tempfile("SPRITE_BASE_URL=http://localhost:9000/\nMOVES_SHOWN=4\n");
        let config = load(tmp.as_path()).unwrap();
        assert_eq!(config.sprite_base_url, "http://localhost:9000");
        assert_eq!(config.moves_shown, 4);
    }

    fn tempfile(content: &str) -> PathBuf {
        let dir = std::env::temp_dir().join("pokex_test");
        std::fs::create_dir_all(&dir).unwrap();
        let path = dir.join("test.conf");
        std::fs::write(&path, content).unwrap();
        path
    }
}
