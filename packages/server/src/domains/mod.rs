// Business domains
pub mod moderation;
pub mod showcase;
pub mod submissions;
