//! Postal-code directory
//!
//! | Method | Path | Description |
//! |--------|------|-------------|
//! | GET | `/api/addresses?q=&page=` | Stateless directory search, paged |

pub mod dtos;
pub mod handlers;
pub mod models;
pub mod routes;
pub mod services;

pub use services::DirectoryService;
