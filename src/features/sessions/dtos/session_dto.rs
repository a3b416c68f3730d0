use serde::{Deserialize, Serialize};
use utoipa::ToSchema;
use validator::Validate;

use crate::modules::shipping::{CourierRate, ShippingEstimate};

const UNKNOWN: &str = "Tidak diketahui";

/// Request DTO for selecting a record from the cached results
#[derive(Debug, Clone, Deserialize, Validate, ToSchema)]
pub struct SelectAddressDto {
    /// 1-based number shown next to the record on its result page
    #[validate(range(min = 1, message = "Number must be at least 1"))]
    pub number: usize,
}

/// Shipping offer of one courier
#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct CourierRateDto {
    pub courier: String,
    pub price: String,
    pub estimate_delivery: String,
}

impl CourierRateDto {
    fn new(courier: String, rate: CourierRate) -> Self {
        Self {
            courier,
            price: rate.price.unwrap_or_else(|| UNKNOWN.to_string()),
            estimate_delivery: rate.estimate_delivery.unwrap_or_else(|| UNKNOWN.to_string()),
        }
    }
}

/// Shipping estimate for the selected postal code.
///
/// When the provider has no rates, `rates` is empty and `message` carries the
/// provider's explanation.
#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct ShippingEstimateDto {
    pub postal_code: String,
    pub available: bool,
    pub rates: Vec<CourierRateDto>,
    pub message: Option<String>,
}

impl ShippingEstimateDto {
    pub fn new(postal_code: String, estimate: ShippingEstimate) -> Self {
        match estimate {
            ShippingEstimate::Rates(rates) => Self {
                postal_code,
                available: true,
                rates: rates
                    .into_iter()
                    .map(|(courier, rate)| CourierRateDto::new(courier, rate))
                    .collect(),
                message: None,
            },
            ShippingEstimate::Unavailable(message) => Self {
                postal_code,
                available: false,
                rates: Vec::new(),
                message: Some(message),
            },
        }
    }
}

#[cfg(test)]
mod tests {
    use std::collections::BTreeMap;

    use super::*;

    #[test]
    fn test_missing_rate_fields_render_unknown() {
        let mut rates = BTreeMap::new();
        rates.insert(
            "JNE".to_string(),
            CourierRate {
                price: Some("18000".to_string()),
                estimate_delivery: None,
            },
        );

        let dto = ShippingEstimateDto::new("23773".to_string(), ShippingEstimate::Rates(rates));
        assert!(dto.available);
        assert_eq!(dto.rates[0].price, "18000");
        assert_eq!(dto.rates[0].estimate_delivery, UNKNOWN);
    }

    #[test]
    fn test_unavailable_message_kept_verbatim() {
        let dto = ShippingEstimateDto::new(
            "23773".to_string(),
            ShippingEstimate::Unavailable("Error: timed out".to_string()),
        );
        assert!(!dto.available);
        assert!(dto.rates.is_empty());
        assert_eq!(dto.message.as_deref(), Some("Error: timed out"));
    }
}
