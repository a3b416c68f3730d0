use serde::{Deserialize, Deserializer, Serialize};

/// A postal/administrative record from the kodepos dataset.
///
/// Records are loaded once at startup and never mutated; other components
/// share them through `Arc<AddressRecord>`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AddressRecord {
    /// Village (kelurahan/desa)
    pub kelurahan: String,
    /// District (kecamatan)
    pub kecamatan: String,
    /// City or regency (kota/kabupaten)
    pub kota: String,
    /// Province (provinsi)
    pub provinsi: String,
    #[serde(deserialize_with = "string_or_number")]
    pub kode_pos: String,
    /// Ministry of Home Affairs region code
    #[serde(default, deserialize_with = "string_or_number")]
    pub kode_kemendagri: String,
}

impl AddressRecord {
    /// Ordering key: province, city, district, village
    pub fn sort_key(&self) -> (&str, &str, &str, &str) {
        (&self.provinsi, &self.kota, &self.kecamatan, &self.kelurahan)
    }

    /// Village through province, comma separated
    pub fn administrative_area(&self) -> String {
        format!(
            "{}, {}, {}, {}",
            self.kelurahan, self.kecamatan, self.kota, self.provinsi
        )
    }
}

/// Some dataset exports store codes as JSON numbers (e.g. `23773`).
fn string_or_number<'de, D>(deserializer: D) -> Result<String, D::Error>
where
    D: Deserializer<'de>,
{
    match serde_json::Value::deserialize(deserializer)? {
        serde_json::Value::String(s) => Ok(s),
        serde_json::Value::Number(n) => Ok(n.to_string()),
        serde_json::Value::Null => Ok(String::new()),
        other => Err(serde::de::Error::custom(format!(
            "expected string or number, got {}",
            other
        ))),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_deserialize_numeric_postal_code() {
        let record: AddressRecord = serde_json::from_str(
            r#"{
                "kelurahan": "Keude Bakongan",
                "kecamatan": "Bakongan",
                "kota": "Aceh Selatan",
                "provinsi": "Aceh",
                "kode_pos": 23773,
                "kode_kemendagri": "11.01.01.2001"
            }"#,
        )
        .unwrap();

        assert_eq!(record.kode_pos, "23773");
        assert_eq!(record.kode_kemendagri, "11.01.01.2001");
    }

    #[test]
    fn test_missing_kemendagri_defaults_to_empty() {
        let record: AddressRecord = serde_json::from_str(
            r#"{"kelurahan":"Menteng","kecamatan":"Menteng","kota":"Jakarta Pusat","provinsi":"DKI Jakarta","kode_pos":"10310"}"#,
        )
        .unwrap();

        assert_eq!(record.kode_kemendagri, "");
    }

    #[test]
    fn test_rejects_non_scalar_postal_code() {
        let result = serde_json::from_str::<AddressRecord>(
            r#"{"kelurahan":"A","kecamatan":"B","kota":"C","provinsi":"D","kode_pos":[1]}"#,
        );
        assert!(result.is_err());
    }

    #[test]
    fn test_administrative_area() {
        let record = AddressRecord {
            kelurahan: "Menteng".to_string(),
            kecamatan: "Menteng".to_string(),
            kota: "Jakarta Pusat".to_string(),
            provinsi: "DKI Jakarta".to_string(),
            kode_pos: "10310".to_string(),
            kode_kemendagri: "31.71.06.1001".to_string(),
        };

        assert_eq!(
            record.administrative_area(),
            "Menteng, Menteng, Jakarta Pusat, DKI Jakarta"
        );
    }
}
