pub mod address_dto;

pub use address_dto::{AddressDetailDto, AddressPageDto, AddressSummaryDto, SearchAddressesQuery};
