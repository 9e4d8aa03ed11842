pub mod submit;

pub use submit::{submit_project, SUCCESS_MESSAGE};
