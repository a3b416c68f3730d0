use std::collections::BTreeMap;
use std::fmt;
use std::str::FromStr;

/// Separator between a field name and its value in a filter token
pub const FIELD_SEPARATOR: char = ':';

/// Record fields that can be targeted with a `field:value` token
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum FilterField {
    Kelurahan,
    Kecamatan,
    Kota,
    Provinsi,
    KodePos,
}

impl FilterField {
    pub const ALL: [FilterField; 5] = [
        FilterField::Kelurahan,
        FilterField::Kecamatan,
        FilterField::Kota,
        FilterField::Provinsi,
        FilterField::KodePos,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            FilterField::Kelurahan => "kelurahan",
            FilterField::Kecamatan => "kecamatan",
            FilterField::Kota => "kota",
            FilterField::Provinsi => "provinsi",
            FilterField::KodePos => "kode_pos",
        }
    }

    /// Postal codes must match exactly; every other field matches by substring
    pub fn is_exact(&self) -> bool {
        matches!(self, FilterField::KodePos)
    }
}

impl fmt::Display for FilterField {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for FilterField {
    type Err = ();

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let name = s.trim().to_lowercase();
        FilterField::ALL
            .into_iter()
            .find(|field| field.as_str() == name)
            .ok_or(())
    }
}

/// A parsed search query: field filters plus free-text terms.
///
/// All values are lower-cased at parse time. Matching is conjunctive: a record
/// must satisfy every filter and contain every term.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct QueryFilter {
    pub filters: BTreeMap<FilterField, String>,
    pub terms: Vec<String>,
}

impl QueryFilter {
    /// Parse whitespace-separated tokens.
    ///
    /// `field:value` with a recognized field sets (or replaces) that field's
    /// filter. Any other token, including `unknown:value`, is a free-text term.
    pub fn parse(input: &str) -> Self {
        let mut query = QueryFilter::default();

        for token in input.split_whitespace() {
            let filter = token
                .split_once(FIELD_SEPARATOR)
                .and_then(|(name, value)| Some((name.parse::<FilterField>().ok()?, value)));

            match filter {
                Some((field, value)) => {
                    query.filters.insert(field, value.trim().to_lowercase());
                }
                None => query.terms.push(token.to_lowercase()),
            }
        }

        query
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_free_text_only() {
        let query = QueryFilter::parse("  Bakongan   ACEH ");
        assert!(query.filters.is_empty());
        assert_eq!(query.terms, vec!["bakongan", "aceh"]);
    }

    #[test]
    fn test_parse_filters_and_terms() {
        let query = QueryFilter::parse("Bakongan provinsi:Aceh KODE_POS:23773");
        assert_eq!(query.terms, vec!["bakongan"]);
        assert_eq!(
            query.filters.get(&FilterField::Provinsi).map(String::as_str),
            Some("aceh")
        );
        assert_eq!(
            query.filters.get(&FilterField::KodePos).map(String::as_str),
            Some("23773")
        );
    }

    #[test]
    fn test_unrecognized_field_is_free_text() {
        let query = QueryFilter::parse("foo:Bar");
        assert!(query.filters.is_empty());
        assert_eq!(query.terms, vec!["foo:bar"]);
    }

    #[test]
    fn test_value_may_contain_separator() {
        let query = QueryFilter::parse("kota:a:b");
        assert_eq!(
            query.filters.get(&FilterField::Kota).map(String::as_str),
            Some("a:b")
        );
    }

    #[test]
    fn test_repeated_field_keeps_last_value() {
        let query = QueryFilter::parse("kota:bandung kota:jakarta");
        assert_eq!(query.filters.len(), 1);
        assert_eq!(
            query.filters.get(&FilterField::Kota).map(String::as_str),
            Some("jakarta")
        );
    }

    #[test]
    fn test_empty_input() {
        assert_eq!(QueryFilter::parse("   "), QueryFilter::default());
    }

    #[test]
    fn test_filter_field_from_str() {
        assert_eq!("Provinsi".parse::<FilterField>(), Ok(FilterField::Provinsi));
        assert_eq!("kode_pos".parse::<FilterField>(), Ok(FilterField::KodePos));
        assert!("kodepos".parse::<FilterField>().is_err());
    }
}
