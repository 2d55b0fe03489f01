use super::model::{PubDataset, PubRecord};

// ---------------------------------------------------------------------------
// Location queries: exact match on one field
// ---------------------------------------------------------------------------

/// Which field a location query matches against, with the query value.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum LocationQuery {
    ByPostcode(String),
    ByLocalAuthority(String),
}

impl LocationQuery {
    /// The query value as entered, for display in result messages.
    pub fn value(&self) -> &str {
        match self {
            LocationQuery::ByPostcode(value) | LocationQuery::ByLocalAuthority(value) => value,
        }
    }
}

/// Return the records matching the query exactly.
///
/// Comparisons are exact, case-sensitive string equality with no
/// normalisation. A query value absent from the dataset (including the
/// empty string) yields an empty subset; the caller reports that as a
/// zero-match message, never as an error.
pub fn filter_pubs<'a>(dataset: &'a PubDataset, query: &LocationQuery) -> Vec<&'a PubRecord> {
    // Linear scan; the dataset tops out at a few thousand rows.
    dataset
        .records
        .iter()
        .filter(|record| match query {
            LocationQuery::ByPostcode(postcode) => record.postcode == *postcode,
            LocationQuery::ByLocalAuthority(authority) => record.local_authority == *authority,
        })
        .collect()
}

/// One-line result message for the Pub Locations page.
pub fn result_message(count: usize, query: &LocationQuery) -> String {
    if count == 0 {
        "0 pubs found".to_string()
    } else {
        format!("We found {count} pubs in {}.", query.value())
    }
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

    fn sample() -> PubDataset {
        PubDataset::from_records(vec![
            record("Red Lion", "LL13 7LU", "Wrexham"),
            record("Elihu Yale", "LL11 1LE", "Wrexham"),
            record("The Clarence", "SW1A 2HP", "City of Westminster"),
        ])
    }

    #[test]
    fn postcode_query_returns_only_exact_matches() {
        let dataset = sample();
        let matches = filter_pubs(&dataset, &LocationQuery::ByPostcode("LL13 7LU".into()));

        assert_eq!(matches.len(), 1);
        assert_eq!(matches[0].name, "Red Lion");
        assert!(matches.iter().all(|r| r.postcode == "LL13 7LU"));
    }

    #[test]
    fn authority_query_returns_every_matching_row() {
        let dataset = sample();
        let matches = filter_pubs(&dataset, &LocationQuery::ByLocalAuthority("Wrexham".into()));

        let expected = dataset
            .records
            .iter()
            .filter(|r| r.local_authority == "Wrexham")
            .count();
        assert_eq!(matches.len(), expected);
        assert_eq!(matches.len(), 2);
    }

    #[test]
    fn matching_is_case_sensitive() {
        let dataset = sample();

        assert!(filter_pubs(&dataset, &LocationQuery::ByPostcode("ll13 7lu".into())).is_empty());
        assert!(
            filter_pubs(&dataset, &LocationQuery::ByLocalAuthority("wrexham".into())).is_empty()
        );
    }

    #[test]
    fn unknown_or_empty_query_yields_empty_subset() {
        let dataset = sample();

        assert!(filter_pubs(&dataset, &LocationQuery::ByPostcode("ZZ99 9ZZ".into())).is_empty());
        assert!(filter_pubs(&dataset, &LocationQuery::ByPostcode(String::new())).is_empty());
    }

    #[test]
    fn repeated_queries_are_identical() {
        let dataset = sample();
        let query = LocationQuery::ByLocalAuthority("Wrexham".into());

        assert_eq!(filter_pubs(&dataset, &query), filter_pubs(&dataset, &query));
    }

    #[test]
    fn zero_matches_reported_as_friendly_message() {
        let query = LocationQuery::ByPostcode("ZZ99 9ZZ".into());
        assert_eq!(result_message(0, &query), "0 pubs found");
    }

    #[test]
    fn match_count_reported_with_query_value() {
        let query = LocationQuery::ByLocalAuthority("Wrexham".into());
        assert_eq!(result_message(2, &query), "We found 2 pubs in Wrexham.");
    }
}
