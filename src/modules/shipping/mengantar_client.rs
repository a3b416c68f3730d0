use std::collections::BTreeMap;

use async_trait::async_trait;
use serde::Deserialize;

use super::{CourierRate, ShippingEstimate, ShippingRateProvider};
use crate::core::config::ShippingConfig;

const PROVIDER_UNREACHABLE: &str = "Terjadi kesalahan saat menghubungi API Mengantar.";
const NO_MATCHING_ADDRESS: &str = "Tidak ditemukan alamat yang cocok di Mengantar.";
const ESTIMATE_FAILED: &str = "Gagal mendapatkan estimasi biaya pengiriman.";
const NO_ESTIMATES: &str = "Tidak ada estimasi biaya pengiriman yang tersedia.";

/// Response of `GET /api/address/autofill`.
///
/// A failed lookup may carry `null`, an object or nothing at all in `data`.
#[derive(Debug, Deserialize)]
struct AutofillResponse {
    #[serde(default)]
    success: Option<bool>,
    #[serde(default)]
    data: serde_json::Value,
}

/// Response of `GET /api/order/allEstimatePublic`
#[derive(Debug, Deserialize)]
struct EstimateResponse {
    #[serde(default)]
    success: Option<bool>,
    #[serde(default)]
    data: serde_json::Value,
}

impl AutofillResponse {
    /// First destination id, if the lookup succeeded
    fn destination_id(self) -> Option<String> {
        if self.success != Some(true) {
            return None;
        }
        match self.data {
            serde_json::Value::Array(destinations) => destinations
                .first()
                .and_then(|destination| scalar_to_string(destination.get("_id"))),
            _ => None,
        }
    }
}

impl EstimateResponse {
    fn into_estimate(self) -> ShippingEstimate {
        let success = self.success == Some(true);
        let rates = match self.data {
            serde_json::Value::Object(couriers) if success && !couriers.is_empty() => couriers,
            _ => return ShippingEstimate::Unavailable(NO_ESTIMATES.to_string()),
        };

        let rates: BTreeMap<String, CourierRate> = rates
            .into_iter()
            .map(|(courier, info)| {
                let rate = CourierRate {
                    price: scalar_to_string(info.get("price")),
                    estimate_delivery: scalar_to_string(info.get("estimate_delivery")),
                };
                (courier, rate)
            })
            .collect();

        ShippingEstimate::Rates(rates)
    }
}

fn scalar_to_string(value: Option<&serde_json::Value>) -> Option<String> {
    match value? {
        serde_json::Value::String(s) => Some(s.clone()),
        serde_json::Value::Number(n) => Some(n.to_string()),
        _ => None,
    }
}

/// Client for the public Mengantar shipping estimate API
pub struct MengantarClient {
    client: reqwest::Client,
    base_url: String,
    origin_id: String,
    weight_kg: u32,
}

impl MengantarClient {
    pub fn new(config: &ShippingConfig) -> Result<Self, reqwest::Error> {
        let client = reqwest::Client::builder()
            .user_agent("KodeposCore/1.0 (shipping-label-service)")
            .timeout(config.timeout)
            .build()?;

        Ok(Self {
            client,
            base_url: config.base_url.clone(),
            origin_id: config.origin_id.clone(),
            weight_kg: config.weight_kg,
        })
    }

    async fn fetch_estimate(&self, postal_code: &str) -> Result<ShippingEstimate, reqwest::Error> {
        let autofill_url = format!(
            "{}/api/address/autofill?keyword={}",
            self.base_url,
            urlencoding::encode(postal_code)
        );
        tracing::debug!("Mengantar autofill: {}", autofill_url);

        let response = self.client.get(&autofill_url).send().await?;
        if !response.status().is_success() {
            tracing::warn!("Mengantar autofill returned status: {}", response.status());
            return Ok(ShippingEstimate::Unavailable(
                PROVIDER_UNREACHABLE.to_string(),
            ));
        }

        let autofill: AutofillResponse = response.json().await?;
        let Some(destination_id) = autofill.destination_id() else {
            return Ok(ShippingEstimate::Unavailable(
                NO_MATCHING_ADDRESS.to_string(),
            ));
        };

        let estimate_url = format!(
            "{}/api/order/allEstimatePublic?origin_id={}&destination_id={}&weight={}",
            self.base_url,
            urlencoding::encode(&self.origin_id),
            urlencoding::encode(&destination_id),
            self.weight_kg
        );
        tracing::debug!("Mengantar estimate: {}", estimate_url);

        let response = self.client.get(&estimate_url).send().await?;
        if !response.status().is_success() {
            tracing::warn!("Mengantar estimate returned status: {}", response.status());
            return Ok(ShippingEstimate::Unavailable(ESTIMATE_FAILED.to_string()));
        }

        let estimate: EstimateResponse = response.json().await?;
        Ok(estimate.into_estimate())
    }
}

#[async_trait]
impl ShippingRateProvider for MengantarClient {
    async fn estimate(&self, postal_code: &str) -> ShippingEstimate {
        match self.fetch_estimate(postal_code).await {
            Ok(estimate) => estimate,
            Err(e) => {
                tracing::error!("Mengantar request failed for {}: {:?}", postal_code, e);
                ShippingEstimate::Unavailable(format!("Error: {}", e))
            }
        }
    }
}
