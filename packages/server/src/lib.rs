// Community Showcase - API Core
//
// Accepts project submissions, moderates them with an LLM and publishes
// approved ones as cards on the showcase page in the site repository.

pub mod common;
pub mod config;
pub mod domains;
pub mod kernel;
pub mod server;

pub use config::*;
