//! Grid card linking to one entry's detail page.

use leptos::prelude::*;

use pokex_common::catalog::sprite_url;

/// A compact card showing the sprite and name.
#[component]
pub fn PokemonCard(name: String, id: String, sprite_base: String) -> impl IntoView {
    let href = format!("/pokemon/{id}");
    let img_src = sprite_url(&sprite_base, &id);
    let alt = name.clone();

    view! {
        <a href=href class="pokemon-card">
            <h2 class="pokemon-card-name">{name}</h2>
            <div class="pokemon-img-wrap">
                <img src=img_src alt=alt class="pokemon-img" loading="lazy" />
            </div>
        </a>
    }
}
