pub mod addresses;
pub mod conversations;
pub mod messages;
pub mod sessions;
