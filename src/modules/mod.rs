//! Modules layer - Infrastructure components for external integrations
//!
//! Contains the collaborators the core hands work to: shipping-rate lookup
//! and shipping label rendering.

pub mod labels;
pub mod shipping;
