//! Per-user search sessions
//!
//! Caches each user's last result set and selected record for a limited
//! idle time. A background [`workers::SessionSweeper`] evicts idle sessions.
//!
//! | Method | Path | Description |
//! |--------|------|-------------|
//! | GET | `/api/sessions/results?page=` | Page through cached results |
//! | POST | `/api/sessions/selection` | Select a record by its number |
//! | GET | `/api/sessions/selection` | Selected record detail |
//! | GET | `/api/sessions/selection/shipping-estimates` | Shipping rates to the selection |

pub mod dtos;
pub mod handlers;
pub mod models;
pub mod routes;
pub mod services;
pub mod workers;

pub use services::SessionStore;
pub use workers::SessionSweeper;
