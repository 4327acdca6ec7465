//! Settings section: where the mapping table and model artifact live

use std::path::PathBuf;

use eframe::egui::{self, Color32, RichText, Ui};
use motoprice_app::Config;

pub struct SettingsPanel {
    mapping_path: String,
    model_path: String,
    /// Last save result (message, is_error)
    status: Option<(String, bool)>,
}

impl SettingsPanel {
    pub fn new(config: &Config) -> Self {
        Self {
            mapping_path: config.mapping_path.display().to_string(),
            model_path: config.model_path.display().to_string(),
            status: None,
        }
    }

    /// Returns true when the config was changed and the form must be rebuilt
    pub fn ui(&mut self, ui: &mut Ui, config: &mut Config) -> bool {
        let mut changed = false;

        ui.collapsing("Pengaturan", |ui| {
            egui::Grid::new("settings_grid")
                .num_columns(3)
                .spacing([8.0, 6.0])
                .show(ui, |ui| {
                    ui.label("File mapping model (CSV):");
                    ui.text_edit_singleline(&mut self.mapping_path);
                    if ui.button("Pilih...").clicked() {
                        if let Some(path) = rfd::FileDialog::new()
                            .add_filter("CSV", &["csv"])
                            .pick_file()
                        {
                            self.mapping_path = path.display().to_string();
                        }
                    }
                    ui.end_row();

                    ui.label("File model (JSON):");
                    ui.text_edit_singleline(&mut self.model_path);
                    if ui.button("Pilih...").clicked() {
                        if let Some(path) = rfd::FileDialog::new()
                            .add_filter("JSON", &["json"])
                            .pick_file()
                        {
                            self.model_path = path.display().to_string();
                        }
                    }
                    ui.end_row();
                });

            ui.add_space(6.0);
            ui.horizontal(|ui| {
                if ui.button("Simpan & Muat Ulang").clicked() {
                    config.mapping_path = PathBuf::from(self.mapping_path.trim());
                    config.model_path = PathBuf::from(self.model_path.trim());
                    self.status = Some(match config.save() {
                        Ok(()) => ("Pengaturan disimpan.".to_string(), false),
                        Err(e) => {
                            tracing::error!("failed to save config: {}", e);
                            (format!("Gagal menyimpan pengaturan: {}", e), true)
                        }
                    });
                    changed = true;
                }
                if ui.button("Kembalikan Default").clicked() {
                    let defaults = Config::default();
                    self.mapping_path = defaults.mapping_path.display().to_string();
                    self.model_path = defaults.model_path.display().to_string();
                }
            });

            if let Some((msg, is_error)) = &self.status {
                let color = if *is_error {
                    Color32::LIGHT_RED
                } else {
                    Color32::LIGHT_GREEN
                };
                ui.label(RichText::new(msg).color(color));
            }
        });

        changed
    }
}
