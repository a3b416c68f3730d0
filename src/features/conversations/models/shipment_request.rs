use serde::Serialize;
use utoipa::ToSchema;

use super::{ConversationForm, Courier};
use crate::features::addresses::models::AddressRecord;

/// Everything the shipping label needs, assembled from a finished dialogue
/// and the user's selected address record
#[derive(Debug, Clone, PartialEq, Eq, Serialize, ToSchema)]
pub struct ShipmentRequest {
    pub name: String,
    pub phone: String,
    /// Typed street address followed by kelurahan, kecamatan, kota, provinsi
    pub full_address: String,
    pub postal_code: String,
    pub courier: Courier,
    pub cod: bool,
}

impl ShipmentRequest {
    pub fn new(form: ConversationForm, record: &AddressRecord) -> Self {
        Self {
            full_address: format!("{}, {}", form.address, record.administrative_area()),
            postal_code: record.kode_pos.clone(),
            name: form.name,
            phone: form.phone,
            courier: form.courier,
            cod: form.cod,
        }
    }

    /// COD flag as printed on the label
    pub fn cod_label(&self) -> &'static str {
        if self.cod {
            "IYA"
        } else {
            "TIDAK"
        }
    }
}
