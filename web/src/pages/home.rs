//! Home page – searchable grid of every catalog entry.

use leptos::prelude::*;

use pokex_common::catalog::{filter_by_name, ListItem};

use crate::components::pokemon_card::PokemonCard;
use crate::model::PokemonIndex;

// ─── Server functions ────────────────────────────────────────────────────────

/// The catalog index, fetched once per page load.  Empty when the catalog
/// is unreachable.
#[server]
pub async fn list_pokemons() -> Result<PokemonIndex, ServerFnError> {
    let state = use_context::<crate::app::AppState>()
        .ok_or_else(|| ServerFnError::new("Missing AppState"))?;
    let items = state.api.fetch_pokemons(state.config.list_limit, 0).await;
    Ok(PokemonIndex {
        items,
        sprite_base: state.config.sprite_base_url.clone(),
    })
}

// ─── Page component ──────────────────────────────────────────────────────────

#[component]
pub fn Home() -> impl IntoView {
    // A failed call looks the same as an empty catalog.
    let index = Resource::new(
        || (),
        |_| async {
            list_pokemons().await.unwrap_or_else(|e| {
                leptos::logging::warn!("Cannot load Pokemon index: {e}");
                PokemonIndex::default()
            })
        },
    );

    view! {
        <div class="home-page">
            <h1 class="page-title">"Pokemon Explorer"</h1>
            <Suspense fallback=move || view! { <p class="loading">"Loading Pokemons..."</p> }>
                {move || index.get().map(|index| view! { <PokemonBrowser index=index /> })}
            </Suspense>
        </div>
    }
}

/// Search box plus the filtered grid.  Searching never refetches.
#[component]
fn PokemonBrowser(index: PokemonIndex) -> impl IntoView {
    let PokemonIndex { items, sprite_base } = index;
    let items = StoredValue::new(items);
    let sprite_base = StoredValue::new(sprite_base);

    let (search, set_search) = signal(String::new());
    let shown = Memo::new(move |_| {
        search.with(|term| items.with_value(|all| filter_by_name(all, term)))
    });
    let nothing_matches = move || shown.with(Vec::is_empty) && search.with(|t| !t.is_empty());

    view! {
        <div class="search-bar">
            <input
                type="text"
                placeholder="Search Pokemons..."
                class="search-input"
                prop:value=move || search.get()
                on:input=move |ev| set_search.set(event_target_value(&ev))
            />
        </div>

        <div class="pokemon-grid">
            <Show
                when=move || !nothing_matches()
                fallback=move || view! {
                    <p class="no-matches">
                        "No Pokemons found matching \"" {move || search.get()} "\""
                    </p>
                }
            >
                <For
                    each=move || shown.get()
                    key=|item: &ListItem| item.key()
                    children=move |item: ListItem| {
                        // Entries without an identifier have nowhere to link to.
                        let id = item.id().map(str::to_owned);
                        id.map(|id| view! {
                            <PokemonCard
                                name=item.name
                                id=id
                                sprite_base=sprite_base.get_value()
                            />
                        })
                    }
                />
            </Show>
        </div>
    }
}
