//! The showcase page: card rendering and publishing.

pub mod card;
pub mod publisher;

pub use card::{render_card, render_card_with_placeholder, LinkSource, PLACEHOLDER_VARIANTS};
pub use publisher::{commit_message, splice_card, Publisher, CARD_ANCHOR};
