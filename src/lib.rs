//! Rules for a simplified game of Go: stone placement on a square board and
//! removal of surrounded groups.
//!
//! - [`go`]: board state, capture resolution and the [`go::GoGame`] entry point
//! - [`generation`]: seeded random playouts
//! - [`config`]: TOML configuration
//! - [`error`]: error types

pub mod config;
pub mod error;
pub mod generation;
pub mod go;
