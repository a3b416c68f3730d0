use std::path::Path;
use std::sync::Arc;

use crate::features::addresses::models::{AddressRecord, FilterField, QueryFilter};

#[derive(Debug, thiserror::Error)]
pub enum DirectoryError {
    #[error("Failed to read address dataset: {0}")]
    Io(#[from] std::io::Error),

    #[error("Failed to parse address dataset: {0}")]
    Parse(#[from] serde_json::Error),
}

/// A record with its searchable fields lower-cased once at load time
struct IndexedRecord {
    record: Arc<AddressRecord>,
    kelurahan: String,
    kecamatan: String,
    kota: String,
    provinsi: String,
    kode_pos: String,
    /// kelurahan, kecamatan, kota and provinsi joined by spaces
    searchable: String,
}

impl IndexedRecord {
    fn new(record: AddressRecord) -> Self {
        let kelurahan = record.kelurahan.to_lowercase();
        let kecamatan = record.kecamatan.to_lowercase();
        let kota = record.kota.to_lowercase();
        let provinsi = record.provinsi.to_lowercase();
        let searchable = format!("{} {} {} {}", kelurahan, kecamatan, kota, provinsi);

        Self {
            kode_pos: record.kode_pos.to_lowercase(),
            record: Arc::new(record),
            kelurahan,
            kecamatan,
            kota,
            provinsi,
            searchable,
        }
    }

    fn field(&self, field: FilterField) -> &str {
        match field {
            FilterField::Kelurahan => &self.kelurahan,
            FilterField::Kecamatan => &self.kecamatan,
            FilterField::Kota => &self.kota,
            FilterField::Provinsi => &self.provinsi,
            FilterField::KodePos => &self.kode_pos,
        }
    }

    fn matches(&self, query: &QueryFilter) -> bool {
        let filters_match = query.filters.iter().all(|(field, value)| {
            let actual = self.field(*field);
            if field.is_exact() {
                actual == value
            } else {
                actual.contains(value.as_str())
            }
        });

        filters_match
            && query
                .terms
                .iter()
                .all(|term| self.searchable.contains(term.as_str()))
    }
}

/// Read-only, in-memory index over the postal code dataset.
///
/// Records are kept sorted by (provinsi, kota, kecamatan, kelurahan), so a
/// linear filtering scan yields results already in display order.
pub struct DirectoryService {
    entries: Vec<IndexedRecord>,
    load_error: Option<String>,
}

impl DirectoryService {
    pub fn new(records: Vec<AddressRecord>) -> Self {
        let mut entries: Vec<IndexedRecord> = records.into_iter().map(IndexedRecord::new).collect();
        // Stable sort: records with identical keys keep dataset order
        entries.sort_by(|a, b| a.record.sort_key().cmp(&b.record.sort_key()));

        Self {
            entries,
            load_error: None,
        }
    }

    /// Load the dataset from a JSON array of records
    pub async fn load(path: &Path) -> Result<Self, DirectoryError> {
        let bytes = tokio::fs::read(path).await?;
        let records: Vec<AddressRecord> = serde_json::from_slice(&bytes)?;
        Ok(Self::new(records))
    }

    /// Load the dataset, degrading to an empty directory on failure.
    ///
    /// The failure is logged and kept so callers can report it.
    pub async fn load_or_empty(path: &Path) -> Self {
        match Self::load(path).await {
            Ok(directory) => {
                tracing::info!(
                    "Loaded {} address records from {}",
                    directory.len(),
                    path.display()
                );
                directory
            }
            Err(e) => {
                tracing::error!("Error loading address data from {}: {}", path.display(), e);
                Self {
                    entries: Vec::new(),
                    load_error: Some(e.to_string()),
                }
            }
        }
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Error message from the dataset load, if it failed
    pub fn load_error(&self) -> Option<&str> {
        self.load_error.as_deref()
    }

    /// Return every record matching the query, ordered by
    /// (provinsi, kota, kecamatan, kelurahan)
    pub fn query(&self, query: &QueryFilter) -> Vec<Arc<AddressRecord>> {
        self.entries
            .iter()
            .filter(|entry| entry.matches(query))
            .map(|entry| Arc::clone(&entry.record))
            .collect()
    }

    /// Parse a raw query string and run it
    pub fn search(&self, input: &str) -> Vec<Arc<AddressRecord>> {
        let query = QueryFilter::parse(input);
        tracing::debug!(
            "Directory search: filters={:?} terms={:?}",
            query.filters,
            query.terms
        );
        self.query(&query)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::shared::test_helpers::{record, sample_directory, sample_records};
    use fake::faker::address::en::{CityName, StateName};
    use fake::Fake;

    fn names(results: &[Arc<AddressRecord>]) -> Vec<&str> {
        results.iter().map(|r| r.kelurahan.as_str()).collect()
    }

    #[test]
    fn test_free_text_and_province_filter() {
        let directory = sample_directory();
        let results = directory.search("Bakongan provinsi:Aceh");
        assert_eq!(names(&results), vec!["Keude Bakongan"]);
    }

    #[test]
    fn test_postal_code_requires_exact_match() {
        let directory = sample_directory();

        let results = directory.search("kode_pos:40162");
        assert_eq!(results.len(), 3);
        assert!(results.iter().all(|r| r.kode_pos == "40162"));

        // A prefix is not enough for postal codes
        assert!(directory.search("kode_pos:401").is_empty());
    }

    #[test]
    fn test_substring_filter_is_case_insensitive() {
        let directory = sample_directory();
        let results = directory.search("provinsi:JAKARTA");
        assert_eq!(names(&results), vec!["Gondangdia", "Menteng"]);
    }

    #[test]
    fn test_all_terms_must_match() {
        let directory = sample_directory();
        assert_eq!(names(&directory.search("sukajadi cipedes")), vec!["Cipedes"]);
        assert!(directory.search("sukajadi menteng").is_empty());
    }

    #[test]
    fn test_terms_match_any_text_field() {
        let directory = sample_directory();
        // "banda" only appears in the kota of one record
        assert_eq!(names(&directory.search("BANDA")), vec!["Lamteumen Barat"]);
    }

    #[test]
    fn test_terms_do_not_match_postal_code() {
        let directory = sample_directory();
        assert!(directory.search("23773").is_empty());
    }

    #[test]
    fn test_unknown_field_is_treated_as_free_text() {
        let directory = sample_directory();
        assert!(directory.search("foo:bar").is_empty());

        let directory = DirectoryService::new(vec![record(
            "Foo:Bar", "Kecamatan", "Kota", "Provinsi", "11111",
        )]);
        assert_eq!(directory.search("foo:bar").len(), 1);
    }

    #[test]
    fn test_results_are_ordered_by_region_hierarchy() {
        let directory = sample_directory();
        let results = directory.search("provinsi:a");
        assert_eq!(
            names(&results),
            vec![
                "Keude Bakongan",
                "Lamteumen Barat",
                "Gondangdia",
                "Menteng",
                "Bakongan Baru",
                "Cipedes",
                "Sukajadi",
            ]
        );
    }

    #[test]
    fn test_ordering_holds_for_generated_records() {
        let records: Vec<AddressRecord> = (0..200)
            .map(|i| {
                let provinsi: String = StateName().fake();
                let kota: String = CityName().fake();
                record(
                    &format!("Desa {}", (0..1000u32).fake::<u32>()),
                    &format!("Kecamatan {}", i % 7),
                    &kota,
                    &provinsi,
                    &format!("{:05}", i),
                )
            })
            .collect();
        let directory = DirectoryService::new(records);

        let results = directory.query(&QueryFilter::default());
        assert_eq!(results.len(), 200);
        assert!(results
            .windows(2)
            .all(|pair| pair[0].sort_key() <= pair[1].sort_key()));
    }

    #[test]
    fn test_every_filtered_record_satisfies_filter() {
        let directory = DirectoryService::new(sample_records());
        let all = directory.query(&QueryFilter::default());

        for needle in ["aceh", "jawa", "dki", "x"] {
            let results = directory.search(&format!("provinsi:{}", needle));
            let expected: Vec<_> = all
                .iter()
                .filter(|r| r.provinsi.to_lowercase().contains(needle))
                .cloned()
                .collect();
            assert_eq!(results, expected, "provinsi:{}", needle);
        }
    }

    #[tokio::test]
    async fn test_load_missing_file_degrades_to_empty() {
        let directory =
            DirectoryService::load_or_empty(Path::new("definitely/not/here/kodepos.json")).await;
        assert!(directory.is_empty());
        assert!(directory.load_error().is_some());
        assert!(directory.search("Bakongan").is_empty());
    }
}
