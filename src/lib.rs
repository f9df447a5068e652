//! Scroll-driven logo choreography.
//!
//! A pure resolver maps scroll offset, viewport and a fresh snapshot of
//! anchor geometry to the visual state of a two-layer background logo,
//! the header logo crossfade, the light mode switch and header
//! visibility. The impure shell ([`host`]) reads geometry from a page
//! (simulated, or the browser DOM with the `web` feature) and writes the
//! result back.
//!
//! Pure Core / Impure Shell: [`resolver`] and [`reveal`] never log and
//! never touch the page; [`host`], [`integration`] and the CLI do.

pub mod config;
pub mod host;
pub mod logging;
pub mod model;
pub mod resolver;
pub mod reveal;

// Simulated timeline used by the CLI
pub mod integration;

#[cfg(test)]
mod test_harness;

#[cfg(test)]
mod tests;
