pub mod analysis;
pub mod config;
pub mod error;
pub mod inspector;
pub mod llm;
pub mod server;
pub mod telemetry;

pub use error::{Error, Result};
