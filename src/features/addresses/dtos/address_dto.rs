use std::sync::Arc;

use serde::{Deserialize, Serialize};
use utoipa::{IntoParams, ToSchema};

use crate::features::addresses::models::AddressRecord;
use crate::shared::constants::{ITEMS_PER_PAGE, MAX_PAGE_SIZE};
use crate::shared::pagination::Page;

/// Full detail of one address record
#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct AddressDetailDto {
    pub kelurahan: String,
    pub kecamatan: String,
    pub kota: String,
    pub provinsi: String,
    pub kode_pos: String,
    pub kode_kemendagri: String,
}

impl From<&AddressRecord> for AddressDetailDto {
    fn from(r: &AddressRecord) -> Self {
        Self {
            kelurahan: r.kelurahan.clone(),
            kecamatan: r.kecamatan.clone(),
            kota: r.kota.clone(),
            provinsi: r.provinsi.clone(),
            kode_pos: r.kode_pos.clone(),
            kode_kemendagri: r.kode_kemendagri.clone(),
        }
    }
}

/// One row of a result page, numbered globally across pages
#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct AddressSummaryDto {
    /// 1-based number used to select this record
    pub number: usize,
    pub kelurahan: String,
    pub kecamatan: String,
    pub kota: String,
    pub provinsi: String,
    pub kode_pos: String,
}

/// One page of search results
#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct AddressPageDto {
    pub items: Vec<AddressSummaryDto>,
    pub page: usize,
    pub total_items: usize,
    pub total_pages: usize,
    pub has_prev: bool,
    pub has_next: bool,
}

impl From<Page<'_, Arc<AddressRecord>>> for AddressPageDto {
    fn from(page: Page<'_, Arc<AddressRecord>>) -> Self {
        let items = page
            .numbered()
            .map(|(number, r)| AddressSummaryDto {
                number,
                kelurahan: r.kelurahan.clone(),
                kecamatan: r.kecamatan.clone(),
                kota: r.kota.clone(),
                provinsi: r.provinsi.clone(),
                kode_pos: r.kode_pos.clone(),
            })
            .collect();

        Self {
            items,
            page: page.page,
            total_items: page.total_items,
            total_pages: page.total_pages,
            has_prev: page.has_prev,
            has_next: page.has_next,
        }
    }
}

/// Query params for the stateless directory search
#[derive(Debug, Clone, Deserialize, IntoParams)]
#[serde(rename_all = "camelCase")]
pub struct SearchAddressesQuery {
    /// Search text, e.g. `Bakongan provinsi:Aceh` or `23773`
    #[serde(default)]
    pub q: String,

    /// Page number (1-indexed, default: 1)
    #[serde(default = "default_page")]
    #[param(minimum = 1)]
    pub page: usize,

    /// Number of items per page (default: 5, max: 50)
    #[serde(default = "default_page_size")]
    #[param(minimum = 1, maximum = 50)]
    pub page_size: usize,
}

impl SearchAddressesQuery {
    pub fn limit(&self) -> usize {
        self.page_size.clamp(1, MAX_PAGE_SIZE)
    }
}

fn default_page() -> usize {
    1
}

fn default_page_size() -> usize {
    ITEMS_PER_PAGE
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::shared::pagination::paginate;
    use crate::shared::test_helpers::sample_directory;

    #[test]
    fn test_page_dto_numbers_continue_across_pages() {
        let results = sample_directory().search("provinsi:a");
        let dto = AddressPageDto::from(paginate(&results, 2, ITEMS_PER_PAGE));

        let numbers: Vec<usize> = dto.items.iter().map(|item| item.number).collect();
        assert_eq!(numbers, vec![6, 7]);
        assert_eq!(dto.items[0].kelurahan, "Cipedes");
        assert!(dto.has_prev);
        assert!(!dto.has_next);
        assert_eq!(dto.total_pages, 2);
    }
}
