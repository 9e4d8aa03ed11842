//! Kernel module - server infrastructure and dependencies.

pub mod deps;
pub mod test_dependencies;
pub mod traits;

pub use deps::{AnthropicAdapter, GitHubContentStore, ServerDeps};
pub use test_dependencies::{MockAI, MockContentStore, TestDependencies};
pub use traits::*;
