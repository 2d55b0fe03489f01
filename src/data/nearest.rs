use crate::error::ValidationError;

use super::model::{GeoPoint, PubDataset, PubRecord};

// ---------------------------------------------------------------------------
// Nearest-pub ranking
// ---------------------------------------------------------------------------

/// Bounds on how many nearest pubs may be requested.
pub const MIN_NEAREST: usize = 1;
pub const MAX_NEAREST: usize = 10;
/// Slider default.
pub const DEFAULT_NEAREST: usize = 5;

/// A pub annotated with its computed distance from the query point.
#[derive(Debug, Clone, PartialEq)]
pub struct NearestPub<'a> {
    pub record: &'a PubRecord,
    pub distance: f64,
}

impl NearestPub<'_> {
    /// Display line for the results list.
    ///
    /// The unit label is nominal: the value is a degree-space distance, not
    /// kilometres. Kept verbatim for output compatibility.
    pub fn label(&self) -> String {
        format!("{} ({:.2} km)", self.record.name, self.distance)
    }
}

/// Euclidean distance computed directly on the latitude/longitude pair, as
/// if degrees were Cartesian coordinates. Deliberately not haversine; the
/// ranking must stay bit-identical across reruns and releases.
pub fn planar_distance(a: GeoPoint, b: GeoPoint) -> f64 {
    ((a.latitude - b.latitude).powi(2) + (a.longitude - b.longitude).powi(2)).sqrt()
}

/// Parse a coordinate text field into a finite `f64`.
pub fn parse_coordinate(input: &str, field: &'static str) -> Result<f64, ValidationError> {
    let value: f64 = input.trim().parse().map_err(|_| ValidationError::NotANumber {
        field,
        input: input.to_string(),
    })?;

    if !value.is_finite() {
        return Err(ValidationError::NotFinite { field });
    }
    Ok(value)
}

/// The `count` pubs closest to `target`, ascending by distance, ties kept
/// in source row order.  Yields `min(count, dataset size)` entries.
///
/// `count` outside `[MIN_NEAREST, MAX_NEAREST]` is rejected rather than
/// clamped: the slider cannot produce such values, so an out-of-range count
/// can only be a caller bug worth surfacing.
pub fn nearest_pubs<'a>(
    dataset: &'a PubDataset,
    target: GeoPoint,
    count: usize,
) -> Result<Vec<NearestPub<'a>>, ValidationError> {
    if !(MIN_NEAREST..=MAX_NEAREST).contains(&count) {
        return Err(ValidationError::CountOutOfRange {
            min: MIN_NEAREST,
            max: MAX_NEAREST,
            got: count,
        });
    }
    if !target.latitude.is_finite() || !target.longitude.is_finite() {
        return Err(ValidationError::NotFinite {
            field: "target coordinate",
        });
    }

    let mut ranked: Vec<NearestPub<'a>> = dataset
        .records
        .iter()
        .map(|record| NearestPub {
            record,
            distance: planar_distance(record.location(), target),
        })
        .collect();

    // Stable sort, so equidistant pubs stay in source row order.
    ranked.sort_by(|a, b| a.distance.total_cmp(&b.distance));
    ranked.truncate(count);
    Ok(ranked)
}
