pub mod address_handler;

pub use address_handler::{__path_search_addresses, search_addresses};
