#[cfg(test)]
use crate::features::addresses::{models::AddressRecord, services::DirectoryService};
#[cfg(test)]
use crate::features::conversations::models::ShipmentRequest;
#[cfg(test)]
use crate::modules::labels::{GeneratedLabel, LabelError, LabelGenerator};
#[cfg(test)]
use crate::modules::shipping::{ShippingEstimate, ShippingRateProvider};

#[cfg(test)]
pub fn record(
    kelurahan: &str,
    kecamatan: &str,
    kota: &str,
    provinsi: &str,
    kode_pos: &str,
) -> AddressRecord {
    AddressRecord {
        kelurahan: kelurahan.to_string(),
        kecamatan: kecamatan.to_string(),
        kota: kota.to_string(),
        provinsi: provinsi.to_string(),
        kode_pos: kode_pos.to_string(),
        kode_kemendagri: format!("{}.0001", kode_pos),
    }
}

/// Seven records over three provinces, deliberately out of order.
///
/// Sorted they read: Keude Bakongan, Lamteumen Barat, Gondangdia, Menteng,
/// Bakongan Baru, Cipedes, Sukajadi.
#[cfg(test)]
pub fn sample_records() -> Vec<AddressRecord> {
    vec![
        record("Menteng", "Menteng", "Jakarta Pusat", "DKI Jakarta", "10310"),
        record("Sukajadi", "Sukajadi", "Bandung", "Jawa Barat", "40162"),
        record("Keude Bakongan", "Bakongan", "Aceh Selatan", "Aceh", "23773"),
        record("Cipedes", "Sukajadi", "Bandung", "Jawa Barat", "40162"),
        record("Lamteumen Barat", "Jaya Baru", "Banda Aceh", "Aceh", "23232"),
        record("Gondangdia", "Menteng", "Jakarta Pusat", "DKI Jakarta", "10350"),
        record("Bakongan Baru", "Sukajadi", "Bandung", "Jawa Barat", "40162"),
    ]
}

#[cfg(test)]
pub fn sample_directory() -> DirectoryService {
    DirectoryService::new(sample_records())
}

/// Label generator that renders a fixed plain-text layout without touching disk
#[cfg(test)]
pub struct StaticLabelGenerator;

#[cfg(test)]
#[async_trait::async_trait]
impl LabelGenerator for StaticLabelGenerator {
    async fn generate(&self, request: &ShipmentRequest) -> Result<GeneratedLabel, LabelError> {
        let generated_at = chrono::Utc::now();
        Ok(GeneratedLabel {
            file_name: format!("resi_{}_{}.txt", request.name, generated_at.timestamp()),
            content: format!(
                "{}|{}|{}|{}|{}|{}",
                request.name,
                request.phone,
                request.full_address,
                request.postal_code,
                request.courier,
                request.cod_label()
            ),
            generated_at,
        })
    }
}

#[cfg(test)]
pub struct FailingLabelGenerator;

#[cfg(test)]
#[async_trait::async_trait]
impl LabelGenerator for FailingLabelGenerator {
    async fn generate(&self, _request: &ShipmentRequest) -> Result<GeneratedLabel, LabelError> {
        Err(LabelError::TemplateNotFound("label.txt.jinja".to_string()))
    }
}

/// Shipping provider answering every postal code with the same estimate
#[cfg(test)]
pub struct StaticShippingProvider(pub ShippingEstimate);

#[cfg(test)]
#[async_trait::async_trait]
impl ShippingRateProvider for StaticShippingProvider {
    async fn estimate(&self, _postal_code: &str) -> ShippingEstimate {
        self.0.clone()
    }
}
