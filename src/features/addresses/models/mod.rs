mod address_record;
mod query_filter;

pub use address_record::AddressRecord;
pub use query_filter::{FilterField, QueryFilter};
