//! Push managed policy to the devices a Panorama controller reports as out of sync.

pub mod cancel;
pub mod config;
pub mod gate;
pub mod output;
pub mod panorama_client;
pub mod pipeline;
pub mod types;

pub use pipeline::{Pipeline, RunOutcome};
pub use types::PanoramaError;
