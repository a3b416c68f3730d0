//! Inbound chat messages
//!
//! | Method | Path | Description |
//! |--------|------|-------------|
//! | POST | `/api/messages` | Command, dialogue answer or directory search |

pub mod dtos;
pub mod handlers;
pub mod routes;
pub mod services;

pub use services::MessageService;
