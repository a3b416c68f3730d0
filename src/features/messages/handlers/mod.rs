pub mod message_handler;

pub use message_handler::{__path_send_message, send_message};
