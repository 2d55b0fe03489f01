use std::collections::BTreeMap;

use eframe::egui::{Color32, Ui};
use egui_plot::{Legend, MarkerShape, Plot, PlotBounds, PlotPoints, Points};

use crate::color::ColorMap;
use crate::data::model::{GeoPoint, PubRecord};
use crate::data::nearest::NearestPub;

// ---------------------------------------------------------------------------
// Scatter maps (longitude → x, latitude → y)
// ---------------------------------------------------------------------------

/// Half-width in degrees of the view window centred on the query point.
const VIEW_HALF_WIDTH: f64 = 0.05;

/// Plot a filtered subset as one marker series per local authority, so the
/// legend lists each authority once.
pub fn authority_markers(ui: &mut Ui, pubs: &[&PubRecord], colors: &ColorMap) {
    let mut by_authority: BTreeMap<&str, Vec<[f64; 2]>> = BTreeMap::new();
    for record in pubs {
        by_authority
            .entry(record.local_authority.as_str())
            .or_default()
            .push([record.longitude, record.latitude]);
    }

    Plot::new("locations_map")
        .legend(Legend::default())
        .x_axis_label("Longitude")
        .y_axis_label("Latitude")
        .height(380.0)
        .show(ui, |plot_ui| {
            for (authority, coordinates) in by_authority {
                let markers = Points::new(PlotPoints::from(coordinates))
                    .name(authority)
                    .color(colors.color_for(authority))
                    .filled(true)
                    .radius(4.0);
                plot_ui.points(markers);
            }
        });
}

/// Plot the ranked nearest pubs around the query point. Each pub is its own
/// named series so it shows up individually in the legend; the query point
/// is drawn as a cross.
pub fn nearest_map(
    ui: &mut Ui,
    pubs: &[NearestPub<'_>],
    target: GeoPoint,
    reset_view: bool,
    colors: &ColorMap,
) {
    Plot::new("nearest_map")
        .legend(Legend::default())
        .x_axis_label("Longitude")
        .y_axis_label("Latitude")
        .height(380.0)
        .show(ui, |plot_ui| {
            if reset_view {
                plot_ui.set_plot_bounds(PlotBounds::from_min_max(
                    [
                        target.longitude - VIEW_HALF_WIDTH,
                        target.latitude - VIEW_HALF_WIDTH,
                    ],
                    [
                        target.longitude + VIEW_HALF_WIDTH,
                        target.latitude + VIEW_HALF_WIDTH,
                    ],
                ));
            }

            for entry in pubs {
                let record = entry.record;
                let marker = Points::new(PlotPoints::from(vec![[
                    record.longitude,
                    record.latitude,
                ]]))
                .name(&record.name)
                .color(colors.color_for(&record.local_authority))
                .filled(true)
                .radius(5.0);
                plot_ui.points(marker);
            }

            let here = Points::new(PlotPoints::from(vec![[
                target.longitude,
                target.latitude,
            ]]))
            .name("Your location")
            .color(Color32::YELLOW)
            .shape(MarkerShape::Cross)
            .radius(7.0);
            plot_ui.points(here);
        });
}
