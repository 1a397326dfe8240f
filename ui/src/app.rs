use egui::RichText;

use crate::utils::colors::COLOR_RED;
use crate::{state::State, widgets};

pub struct TriggersApp {
    pub state: State,
}

impl TriggersApp {
    /// Called once before the first frame.
    pub fn new(state: State) -> Self {
        Self { state }
    }
}

impl eframe::App for TriggersApp {
    /// Called each time the UI needs repainting, which may be many times per second.
    fn update(&mut self, ctx: &egui::Context, _frame: &mut eframe::Frame) {
        egui::TopBottomPanel::top("top_panel").show(ctx, |ui| {
            egui::MenuBar::new().ui(ui, |ui| {
                ui.strong("Problems");
                ui.separator();

                let can_reload = self.state.config.snapshot_path().is_some();
                if ui
                    .add_enabled(can_reload, egui::Button::new("🔄 Reload"))
                    .clicked()
                {
                    self.state.reload();
                }

                if let Some(error) = &self.state.last_error {
                    ui.label(RichText::new(format!("Error: {error}")).color(COLOR_RED));
                }
            });
        });

        egui::CentralPanel::default().show(ctx, |ui| {
            widgets::problem_list(ui, &mut self.state.problems);
        });
    }
}
