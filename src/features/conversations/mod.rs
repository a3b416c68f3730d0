//! Shipping label (resi) dialogue
//!
//! Collects name, phone, address, courier and COD choice one answer at a
//! time, then renders a label for the user's selected address.
//!
//! | Method | Path | Description |
//! |--------|------|-------------|
//! | GET | `/api/conversations` | Current dialogue step |
//! | POST | `/api/conversations` | Start the dialogue |
//! | POST | `/api/conversations/courier` | Choose the courier |
//! | POST | `/api/conversations/cod` | Choose COD and generate the label |
//! | DELETE | `/api/conversations` | Abandon the dialogue |
//!
//! Free-text answers (name, phone, address) arrive through `/api/messages`.

pub mod dtos;
pub mod handlers;
pub mod models;
pub mod routes;
pub mod services;

pub use services::ConversationService;
