//! Wanderlust: browse, create, edit and delete property listings, and attach
//! reviews to them.
//!
//! Pages are rendered on the server with leptos components. With the `ssr`
//! feature (on by default) the crate also provides the actix-web routes, the
//! SQLite-backed store and the error funnel that turns every failure into a
//! rendered error page.
pub mod components;
pub mod config;
pub mod models;
pub mod seed;
pub mod validation;

#[cfg(feature = "ssr")]
pub mod db;
#[cfg(feature = "ssr")]
pub mod error;
#[cfg(feature = "ssr")]
pub mod render;
#[cfg(feature = "ssr")]
pub mod routes;
#[cfg(feature = "ssr")]
pub mod telemetry;
