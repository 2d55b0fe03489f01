use eframe::egui;

use crate::state::{AppState, Page};
use crate::ui::{pages, panels};

// ---------------------------------------------------------------------------
// eframe App implementation
// ---------------------------------------------------------------------------

pub struct PubFinderApp {
    pub state: AppState,
}

impl PubFinderApp {
    pub fn new(state: AppState) -> Self {
        Self { state }
    }
}

impl eframe::App for PubFinderApp {
    fn update(&mut self, ctx: &egui::Context, _frame: &mut eframe::Frame) {
        // ---- Top panel: menu bar ----
        egui::TopBottomPanel::top("top_bar").show(ctx, |ui| {
            panels::top_bar(ui, &mut self.state);
        });

        // ---- Left side panel: navigation ----
        egui::SidePanel::left("navigation_panel")
            .default_width(220.0)
            .resizable(true)
            .show(ctx, |ui| {
                panels::side_panel(ui, &mut self.state);
            });

        // ---- Central panel: the active page ----
        egui::CentralPanel::default().show(ctx, |ui| {
            egui::ScrollArea::vertical()
                .auto_shrink([false, false])
                .show(ui, |ui| match self.state.page {
                    Page::Home => pages::home(ui, &self.state),
                    Page::PubLocations => pages::pub_locations(ui, &mut self.state),
                    Page::NearestPub => pages::nearest_pub(ui, &mut self.state),
                });
        });
    }
}
