//! Route enumeration for the statically generated detail pages.

use thiserror::Error;
use tracing::warn;

use crate::catalog::ListItem;

#[derive(Debug, Error)]
pub enum PrerenderError {
    #[error("none of the {fetched} listed entries has a numeric identifier")]
    NoRoutes { fetched: usize },
}

/// Numeric identifiers of `items`, in listing order.
///
/// Entries without one are dropped with a warning.  An empty result is an
/// error: generating zero pages means the listing itself failed.
pub fn route_ids(items: &[ListItem]) -> Result<Vec<String>, PrerenderError> {
    let ids: Vec<String> = items
        .iter()
        .filter_map(|item| match item.id() {
            Some(id) if id.parse::<u32>().is_ok() => Some(id.to_string()),
            _ => {
                warn!("Skipping {:?}: no identifier in {:?}", item.name, item.url);
                None
            }
        })
        .collect();

    if ids.is_empty() {
        return Err(PrerenderError::NoRoutes {
            fetched: items.len(),
        });
    }
    Ok(ids)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn item(name: &str, url: &str) -> ListItem {
        ListItem {
            name: name.into(),
            url: url.into(),
        }
    }

    #[test]
    fn test_route_ids_keeps_order() {
        let items = vec![
            item("bulbasaur", "https://pokeapi.co/api/v2/pokemon/1/"),
            item("ivysaur", "https://pokeapi.co/api/v2/pokemon/2/"),
        ];
        assert_eq!(route_ids(&items).unwrap(), ["1", "2"]);
    }

    #[test]
    fn test_route_ids_drops_unparsable() {
        let items = vec![
            item("missingno", ""),
            item("glitch", "https://pokeapi.co/api/v2/pokemon/glitch/"),
            item("pikachu", "https://pokeapi.co/api/v2/pokemon/25/"),
        ];
        assert_eq!(route_ids(&items).unwrap(), ["25"]);
    }

    #[test]
    fn test_route_ids_empty_is_error() {
        let err = route_ids(&[]).unwrap_err();
        assert!(matches!(err, PrerenderError::NoRoutes { fetched: 0 }));

        let err = route_ids(&[item("missingno", "/")]).unwrap_err();
        assert_eq!(
            err.to_string(),
            "none of the 1 listed entries has a numeric identifier"
        );
    }
}
