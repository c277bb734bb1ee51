//! Pokex common – catalog records, configuration and route enumeration shared
//! by the server binary and the WASM client.

pub mod catalog;
pub mod config;
pub mod prerender;
