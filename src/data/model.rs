use std::collections::BTreeSet;

use serde::Deserialize;

// ---------------------------------------------------------------------------
// PubRecord – one row of the source table
// ---------------------------------------------------------------------------

/// A single pub. Unknown input fields are ignored during deserialisation.
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct PubRecord {
    pub name: String,
    pub postcode: String,
    pub local_authority: String,
    /// Decimal degrees; finite after a successful load.
    pub latitude: f64,
    /// Decimal degrees; finite after a successful load.
    pub longitude: f64,
}

impl PubRecord {
    /// The pub's coordinate pair.
    pub fn location(&self) -> GeoPoint {
        GeoPoint {
            latitude: self.latitude,
            longitude: self.longitude,
        }
    }
}

/// A latitude/longitude pair in decimal degrees.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct GeoPoint {
    pub latitude: f64,
    pub longitude: f64,
}

// ---------------------------------------------------------------------------
// PubDataset – the complete loaded dataset
// ---------------------------------------------------------------------------

/// The full parsed dataset. Built once per load and never mutated; the
/// views only ever borrow it.
#[derive(Debug, Clone)]
pub struct PubDataset {
    /// All pubs, in source row order.
    pub records: Vec<PubRecord>,
    /// Sorted distinct local authorities, driving the closed-choice selector
    /// and the marker colours.
    pub local_authorities: Vec<String>,
}

impl PubDataset {
    /// Build the authority index from the loaded records.
    pub fn from_records(records: Vec<PubRecord>) -> Self {
        let distinct: BTreeSet<&str> = records
            .iter()
            .map(|r| r.local_authority.as_str())
            .collect();
        let local_authorities = distinct.into_iter().map(str::to_string).collect();

        PubDataset {
            records,
            local_authorities,
        }
    }

    /// Number of pubs.
    pub fn len(&self) -> usize {
        self.records.len()
    }

    /// Whether the dataset is empty.
    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    /// Aggregate counts for the Home page. Recomputed per render; the
    /// dataset is small enough that caching would buy nothing.
    pub fn summary(&self) -> DatasetSummary {
        let postcodes: BTreeSet<&str> =
            self.records.iter().map(|r| r.postcode.as_str()).collect();

        DatasetSummary {
            pubs: self.records.len(),
            local_authorities: self.local_authorities.len(),
            postcodes: postcodes.len(),
        }
    }
}

/// Row count plus distinct counts, as shown on the Home page.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DatasetSummary {
    pub pubs: usize,
    pub local_authorities: usize,
    pub postcodes: usize,
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;

    use super::*;

    fn record(name: &str, postcode: &str, authority: &str) -> PubRecord {
        PubRecord {
            name: name.to_string(),
            postcode: postcode.to_string(),
            local_authority: authority.to_string(),
            latitude: 53.0,
            longitude: -2.9,
        }
    }

    #[test]
    fn summary_counts_rows_and_distinct_values() {
        // 5 rows, 3 distinct postcodes, 2 distinct local authorities.
        let dataset = PubDataset::from_records(vec![
            record("Red Lion", "LL13 7LU", "Wrexham"),
            record("Elihu Yale", "LL11 1LE", "Wrexham"),
            record("Horse & Jockey", "LL13 7LU", "Wrexham"),
            record("The Clarence", "SW1A 2HP", "City of Westminster"),
            record("St Stephen's Tavern", "SW1A 2HP", "City of Westminster"),
        ]);

        assert_eq!(
            dataset.summary(),
            DatasetSummary {
                pubs: 5,
                local_authorities: 2,
                postcodes: 3,
            }
        );
    }

    #[test]
    fn local_authorities_are_sorted_and_distinct() {
        let dataset = PubDataset::from_records(vec![
            record("A", "P1 1AA", "Wrexham"),
            record("B", "P2 2BB", "Camden"),
            record("C", "P3 3CC", "Wrexham"),
        ]);

        assert_eq!(dataset.local_authorities, vec!["Camden", "Wrexham"]);
    }

    #[test]
    fn location_exposes_the_coordinate_pair() {
        let pub_ = record("Red Lion", "LL13 7LU", "Wrexham");
        assert_eq!(
            pub_.location(),
            GeoPoint {
                latitude: 53.0,
                longitude: -2.9,
            }
        );
    }

    #[test]
    fn empty_dataset_has_zero_counts() {
        let dataset = PubDataset::from_records(Vec::new());

        assert!(dataset.is_empty());
        assert_eq!(
            dataset.summary(),
            DatasetSummary {
                pubs: 0,
                local_authorities: 0,
                postcodes: 0,
            }
        );
    }
}
