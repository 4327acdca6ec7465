//! Main application window

use eframe::egui::{self, Color32, RichText};
use motoprice_app::{Config, PriceService};
use motoprice_infra::ArtifactPredictor;

use crate::form_panel::FormPanel;
use crate::settings_panel::SettingsPanel;

/// Main application state
pub struct MotopriceApp {
    /// Application configuration
    config: Config,
    /// Price service, or the reason it could not be built
    service: Result<PriceService<ArtifactPredictor>, String>,
    /// Form panel state
    form_panel: FormPanel,
    /// Settings panel state
    settings_panel: SettingsPanel,
}

impl MotopriceApp {
    /// Create a new application instance
    pub fn new(cc: &eframe::CreationContext<'_>) -> Self {
        let mut style = (*cc.egui_ctx.style()).clone();
        style.interaction.tooltip_delay = 0.5;
        style.animation_time = 0.1;
        cc.egui_ctx.set_style(style);

        let config = Config::load().unwrap_or_else(|e| {
            tracing::warn!("failed to load config, using defaults: {}", e);
            Config::default()
        });
        let service = open_service(&config);
        let form_panel = FormPanel::new(service.as_ref().ok());
        let settings_panel = SettingsPanel::new(&config);

        Self {
            config,
            service,
            form_panel,
            settings_panel,
        }
    }

    /// Rebuild the service after the file locations changed
    fn reload(&mut self) {
        self.service = open_service(&self.config);
        self.form_panel = FormPanel::new(self.service.as_ref().ok());
    }
}

fn open_service(config: &Config) -> Result<PriceService<ArtifactPredictor>, String> {
    PriceService::from_config(config).map_err(|e| {
        tracing::error!("failed to prepare price form: {}", e);
        format!("TERJADI ERROR: {}", e)
    })
}

impl eframe::App for MotopriceApp {
    fn update(&mut self, ctx: &egui::Context, _frame: &mut eframe::Frame) {
        egui::TopBottomPanel::top("title").show(ctx, |ui| {
            ui.add_space(6.0);
            ui.vertical_centered(|ui| {
                ui.heading("Prediksi Harga Motor Bekas");
                ui.label("Pilih spesifikasi motor untuk mengetahui estimasi harganya.");
            });
            ui.add_space(6.0);
        });

        egui::CentralPanel::default().show(ctx, |ui| {
            egui::ScrollArea::vertical().show(ui, |ui| {
                match &self.service {
                    Ok(service) => self.form_panel.ui(ui, service),
                    Err(msg) => {
                        ui.label(RichText::new(msg).color(Color32::LIGHT_RED));
                    }
                }

                ui.add_space(16.0);
                ui.separator();
                if self.settings_panel.ui(ui, &mut self.config) {
                    self.reload();
                }
            });
        });
    }
}
