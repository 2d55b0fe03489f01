use eframe::egui::{self, Color32, RichText, Ui};

use crate::data::filter::{filter_pubs, result_message};
use crate::data::model::GeoPoint;
use crate::data::nearest::{nearest_pubs, parse_coordinate, MAX_NEAREST, MIN_NEAREST};
use crate::error::ValidationError;
use crate::state::{AppState, SearchMode};
use crate::ui::map;

// ---------------------------------------------------------------------------
// Shared page chrome
// ---------------------------------------------------------------------------

fn page_heading(ui: &mut Ui, text: &str, color: Color32) {
    ui.label(
        RichText::new(text)
            .size(28.0)
            .strong()
            .italics()
            .color(color),
    );
}

fn banner(ui: &mut Ui, image: egui::ImageSource<'static>) {
    ui.add(egui::Image::new(image).max_width(500.0).corner_radius(4.0));
    ui.add_space(8.0);
}

// ---------------------------------------------------------------------------
// Home – dataset summary
// ---------------------------------------------------------------------------

/// Render the Home page: banner plus aggregate dataset counts.
pub fn home(ui: &mut Ui, state: &AppState) {
    page_heading(ui, "Pub Finder App", Color32::BLUE);
    banner(ui, egui::include_image!("../../assets/home.png"));

    ui.label(
        "This app allows you to find pubs in the United Kingdom (UK) \
         and discover their locations.",
    );
    ui.add_space(4.0);

    let summary = state.dataset.summary();
    ui.label(format!(
        "We have {} pub locations in our database.",
        summary.pubs
    ));
    ui.label(format!(
        "- Number of unique local authorities: {}",
        summary.local_authorities
    ));
    ui.label(format!(
        "- Number of unique postal codes: {}",
        summary.postcodes
    ));

    ui.add_space(4.0);
    ui.label("Use the navigation sidebar to explore the app.");
}

// ---------------------------------------------------------------------------
// Pub Locations – filter by postcode or local authority
// ---------------------------------------------------------------------------

/// Render the Pub Locations page: mode selector, query input, result count
/// and the matching pubs on the map.
pub fn pub_locations(ui: &mut Ui, state: &mut AppState) {
    page_heading(ui, "Pub Locations", Color32::RED);
    banner(ui, egui::include_image!("../../assets/locations.png"));

    ui.label("Search by:");
    ui.horizontal(|ui: &mut Ui| {
        ui.radio_value(
            &mut state.locations.mode,
            SearchMode::Postcode,
            "Postal Code",
        );
        ui.radio_value(
            &mut state.locations.mode,
            SearchMode::LocalAuthority,
            "Local Authority",
        );
    });

    match state.locations.mode {
        SearchMode::Postcode => {
            ui.label("Enter Postal Code (e.g., LL13 7LU):");
            ui.text_edit_singleline(&mut state.locations.postcode);
        }
        SearchMode::LocalAuthority => {
            // Clone so the dataset can be read while the selection mutates.
            let authorities = state.dataset.local_authorities.clone();
            let selected = state.locations.local_authority.clone().unwrap_or_default();

            egui::ComboBox::from_label("Select Local Authority:")
                .selected_text(selected.as_str())
                .show_ui(ui, |ui: &mut Ui| {
                    for authority in &authorities {
                        if ui
                            .selectable_label(selected == *authority, authority)
                            .clicked()
                        {
                            state.locations.local_authority = Some(authority.clone());
                        }
                    }
                });
        }
    }
    ui.add_space(4.0);

    let query = state.locations.query();
    let subset = filter_pubs(&state.dataset, &query);
    ui.label(result_message(subset.len(), &query));

    map::authority_markers(ui, &subset, &state.color_map);
}

// ---------------------------------------------------------------------------
// Find the Nearest Pub – rank by planar distance
// ---------------------------------------------------------------------------

/// Render the nearest-pub page: coordinate inputs, count slider, map and
/// ranked list. Malformed input is shown inline and never crashes the view.
pub fn nearest_pub(ui: &mut Ui, state: &mut AppState) {
    page_heading(ui, "Find the Nearest Pub", Color32::DARK_GREEN);
    banner(ui, egui::include_image!("../../assets/nearest.png"));

    ui.label("Enter your Latitude:");
    ui.text_edit_singleline(&mut state.nearest.latitude);
    ui.label("Enter your Longitude:");
    ui.text_edit_singleline(&mut state.nearest.longitude);
    ui.add_space(4.0);
    ui.add(
        egui::Slider::new(&mut state.nearest.count, MIN_NEAREST..=MAX_NEAREST)
            .text("Number of nearest pubs to display"),
    );
    ui.add_space(4.0);

    let target = match parse_target(&state.nearest.latitude, &state.nearest.longitude) {
        Ok(point) => point,
        Err(e) => {
            ui.colored_label(Color32::RED, e.to_string());
            return;
        }
    };

    let ranked = match nearest_pubs(&state.dataset, target, state.nearest.count) {
        Ok(ranked) => ranked,
        Err(e) => {
            ui.colored_label(Color32::RED, e.to_string());
            return;
        }
    };

    // Recentre the map only when the target moves, so panning survives.
    let reset_view = state.nearest.centered_on != Some(target);
    map::nearest_map(ui, &ranked, target, reset_view, &state.color_map);
    state.nearest.centered_on = Some(target);

    ui.add_space(4.0);
    ui.label(format!(
        "The {} nearest pubs to your location:",
        state.nearest.count
    ));
    for entry in &ranked {
        ui.label(entry.label());
    }
}

fn parse_target(latitude: &str, longitude: &str) -> Result<GeoPoint, ValidationError> {
    Ok(GeoPoint {
        latitude: parse_coordinate(latitude, "latitude")?,
        longitude: parse_coordinate(longitude, "longitude")?,
    })
}
