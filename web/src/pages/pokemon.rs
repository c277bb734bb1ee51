//! Detail page – artwork, types, abilities, stats and a sample of moves.

use leptos::prelude::*;
use leptos_router::hooks::use_params_map;

use crate::components::artwork::ArtworkImage;
use crate::components::notice::Notice;
use crate::model::{DetailLookup, PokemonDetailView, StatLine};

// ─── Server functions ────────────────────────────────────────────────────────

#[server]
pub async fn get_pokemon_details(id_or_name: String) -> Result<DetailLookup, ServerFnError> {
    let state = use_context::<crate::app::AppState>()
        .ok_or_else(|| ServerFnError::new("Missing AppState"))?;
    let lookup = match state.api.fetch_pokemon_details(&id_or_name).await {
        Some(detail) => DetailLookup::Found(PokemonDetailView::from_detail(detail, &state.config)),
        None => DetailLookup::NotFound(id_or_name),
    };
    Ok(lookup)
}

/// Identifiers enumerated at start-up for static generation.
#[server]
pub async fn list_prerender_ids() -> Result<Vec<String>, ServerFnError> {
    Ok(crate::server::prerender::recorded_ids())
}

// ─── Page component ──────────────────────────────────────────────────────────

/// Serves both `/pokemon` and `/pokemon/:id`.
#[component]
pub fn PokemonPage() -> impl IntoView {
    let params = use_params_map();
    let requested = move || {
        params.with(|p| p.get("id").filter(|id| !id.trim().is_empty()))
    };

    let lookup = Resource::new(requested, |requested| async move {
        let Some(id) = requested else {
            return DetailLookup::InvalidId;
        };
        get_pokemon_details(id.clone()).await.unwrap_or_else(|e| {
            leptos::logging::warn!("Cannot load Pokemon {id}: {e}");
            DetailLookup::NotFound(id)
        })
    });

    view! {
        <Suspense fallback=move || view! { <p class="loading">"Loading..."</p> }>
            {move || lookup.get().map(|lookup| match lookup {
                DetailLookup::InvalidId => view! {
                    <Notice
                        title="Invalid Pokemon ID"
                        message="Please provide a valid Pokemon ID in the URL."
                    />
                }.into_any(),
                DetailLookup::NotFound(id) => view! {
                    <Notice
                        title="Pokemon Not Found"
                        message=format!("Could not find details for Pokemon with ID: {id}")
                    />
                }.into_any(),
                DetailLookup::Found(pokemon) => view! { <PokemonDetail pokemon=pokemon /> }.into_any(),
            })}
        </Suspense>
    }
}

#[component]
fn PokemonDetail(pokemon: PokemonDetailView) -> impl IntoView {
    let PokemonDetailView {
        name,
        artwork,
        types,
        abilities,
        stats,
        moves,
        ..
    } = pokemon;
    let heading = name.clone();

    view! {
        <div class="pokemon-page">
            <a href="/" class="back-link">"← Back to Home"</a>

            <div class="pokemon-detail">
                <h1 class="pokemon-name">{heading}</h1>
                <ArtworkImage artwork=artwork alt=name />

                <div class="detail-sections">
                    <section class="detail-section">
                        <h2>"Types"</h2>
                        <ul class="name-list">
                            {types.into_iter().map(|t| view! { <li>{t}</li> }).collect_view()}
                        </ul>
                    </section>

                    <section class="detail-section">
                        <h2>"Abilities"</h2>
                        <ul class="name-list">
                            {abilities.into_iter().map(|a| view! { <li>{a}</li> }).collect_view()}
                        </ul>
                    </section>

                    <section class="detail-section wide">
                        <h2>"Stats"</h2>
                        <div class="stat-grid">
                            {stats.into_iter().map(|stat| view! { <StatRow stat=stat /> }).collect_view()}
                        </div>
                    </section>

                    <section class="detail-section wide">
                        <h2>"Some Moves"</h2>
                        <ul class="move-grid">
                            {moves.into_iter().map(|m| view! { <li class="move">{m}</li> }).collect_view()}
                        </ul>
                    </section>
                </div>
            </div>
        </div>
    }
}

#[component]
fn StatRow(stat: StatLine) -> impl IntoView {
    view! {
        <div class="stat-row">
            <span class="stat-label">{stat.name} ":"</span>
            <span class="stat-value">{stat.base_stat}</span>
        </div>
    }
}
