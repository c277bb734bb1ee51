//! Server-only code: the catalog client, the pre-render step and the site
//! router.

pub mod pokeapi;
pub mod prerender;
pub mod site;

#[cfg(test)]
pub(crate) mod stub;
