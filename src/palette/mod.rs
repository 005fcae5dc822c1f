//! AI palette generation.
//!
//! A free-text description goes to a generative model that answers with a
//! role-tagged palette. The feature shares nothing with the game.

pub mod client;
pub mod error;
pub mod job;
pub mod schema;

pub use client::{GeminiClient, PaletteGenerator};
pub use error::PaletteError;
pub use job::{GenerationJob, JobStatus};
pub use schema::decode_palette;
