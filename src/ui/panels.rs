use eframe::egui::{self, Color32, RichText, Ui};

use crate::state::{AppState, Page};

// ---------------------------------------------------------------------------
// Top bar
// ---------------------------------------------------------------------------

/// Render the top menu / toolbar.
pub fn top_bar(ui: &mut Ui, state: &mut AppState) {
    egui::menu::bar(ui, |ui: &mut Ui| {
        ui.menu_button("File", |ui: &mut Ui| {
            if ui.button("Open…").clicked() {
                open_file_dialog(state);
                ui.close_menu();
            }
        });

        ui.separator();

        let file = state
            .data_path
            .file_name()
            .and_then(|n| n.to_str())
            .unwrap_or("?");
        ui.label(format!("{} pubs loaded from {file}", state.dataset.len()));

        if let Some(msg) = &state.status_message {
            ui.separator();
            ui.label(RichText::new(msg).color(Color32::RED));
        }
    });
}

// ---------------------------------------------------------------------------
// Left side panel – navigation
// ---------------------------------------------------------------------------

/// Render the navigation panel: logo on top, one entry per page.
pub fn side_panel(ui: &mut Ui, state: &mut AppState) {
    // ---- Logo (centered) ----
    let logo = egui::include_image!("../../assets/logo.png");
    ui.vertical_centered(|ui: &mut Ui| {
        ui.add(
            egui::Image::new(logo)
                .max_width(ui.available_width() * 0.8)
                .max_height(120.0)
                .corner_radius(4.0),
        );
    });
    ui.add_space(4.0);

    ui.heading("Navigation");
    ui.separator();

    for page in Page::ALL {
        if ui
            .selectable_label(state.page == page, page.title())
            .clicked()
        {
            state.page = page;
        }
    }
}

// ---------------------------------------------------------------------------
// File dialog
// ---------------------------------------------------------------------------

/// Let the user pick a replacement dataset. A failed load keeps the current
/// dataset and surfaces the error in the top bar.
pub fn open_file_dialog(state: &mut AppState) {
    let file = rfd::FileDialog::new()
        .set_title("Open pub data")
        .add_filter("Supported files", &["csv", "json"])
        .add_filter("CSV", &["csv"])
        .add_filter("JSON", &["json"])
        .pick_file();

    if let Some(path) = file {
        match crate::data::loader::load_file(&path) {
            Ok(dataset) => {
                log::info!(
                    "Loaded {} pubs across {} local authorities",
                    dataset.len(),
                    dataset.local_authorities.len()
                );
                state.set_dataset(dataset, path);
            }
            Err(e) => {
                log::error!("Failed to load file: {e}");
                state.status_message = Some(format!("Error: {e}"));
            }
        }
    }
}
