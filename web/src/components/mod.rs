pub mod artwork;
pub mod nav;
pub mod notice;
pub mod pokemon_card;
