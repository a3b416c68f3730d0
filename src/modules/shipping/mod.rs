//! Shipping-rate lookup
//!
//! Providers answer with either per-courier rates or a human-readable reason
//! why no rates are available; both are valid outcomes for the caller.

mod mengantar_client;

use std::collections::BTreeMap;

use async_trait::async_trait;
use serde::Serialize;
use utoipa::ToSchema;

pub use mengantar_client::MengantarClient;

/// Price and delivery estimate offered by one courier
#[derive(Debug, Clone, PartialEq, Eq, Serialize, ToSchema)]
pub struct CourierRate {
    pub price: Option<String>,
    pub estimate_delivery: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ShippingEstimate {
    /// Rates keyed by courier name
    Rates(BTreeMap<String, CourierRate>),
    /// Provider message explaining why no rates are available
    Unavailable(String),
}

/// Shipping-rate collaborator keyed by destination postal code
#[async_trait]
pub trait ShippingRateProvider: Send + Sync {
    async fn estimate(&self, postal_code: &str) -> ShippingEstimate;
}
