use leptos::prelude::*;

use pokex_common::catalog::Artwork;

/// Detail-page image, or a "No Image" placeholder.
#[component]
pub fn ArtworkImage(artwork: Artwork, #[prop(into)] alt: String) -> impl IntoView {
    match artwork {
        Artwork::Official(src) => view! {
            <img src=src alt=alt width="200" height="200" class="artwork" />
        }
        .into_any(),
        Artwork::Sprite(src) => view! {
            <img src=src alt=alt width="150" height="150" class="artwork" />
        }
        .into_any(),
        Artwork::Missing => view! {
            <div class="artwork artwork-missing">"No Image"</div>
        }
        .into_any(),
    }
}
