// HTTP routes
pub mod health;
pub mod submit;

pub use health::*;
pub use submit::*;
