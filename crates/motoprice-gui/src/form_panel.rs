//! The price form and its result region

use eframe::egui::{self, Color32, RichText, Ui};
use motoprice_app::messages::submission_error;
use motoprice_app::PriceService;
use motoprice_domain::model::{FormInput, YearBounds};
use motoprice_domain::{LookupTable, PricePredictor};
use motoprice_types::PriceQuote;

/// Result of the last submission
enum Outcome {
    Quote(PriceQuote),
    Failure(String),
}

/// Six inputs, one submit button, one result region
pub struct FormPanel {
    input: Option<FormInput>,
    /// Search text inside the model pick-list
    model_filter: String,
    outcome: Option<Outcome>,
}

impl FormPanel {
    pub fn new<P: PricePredictor>(service: Option<&PriceService<P>>) -> Self {
        Self {
            input: service.map(|s| s.default_form()),
            model_filter: String::new(),
            outcome: None,
        }
    }

    pub fn ui<P: PricePredictor>(&mut self, ui: &mut Ui, service: &PriceService<P>) {
        for warning in service.warnings() {
            ui.label(RichText::new(warning).color(Color32::LIGHT_RED).strong());
            ui.add_space(6.0);
        }

        let input = self.input.get_or_insert_with(|| service.default_form());
        let catalog = service.catalog();
        let bounds = service.year_bounds();

        ui.heading("Detail Kendaraan");
        ui.add_space(8.0);

        ui.columns(3, |cols| {
            pick_list(
                &mut cols[0],
                "Pilih Kisaran Tenaga (CC)",
                &catalog.engine_sizes,
                &mut input.engine_size,
            );

            cols[1].label("Jarak Tempuh (km)");
            cols[1].add(
                egui::DragValue::new(&mut input.mileage_km)
                    .range(0.0..=f64::MAX)
                    .speed(10.0)
                    .fixed_decimals(1),
            );

            year_input(&mut cols[2], &mut input.registration_year, bounds);
        });

        ui.add_space(12.0);

        let model_filter = &mut self.model_filter;
        ui.columns(3, |cols| {
            searchable_pick_list(
                &mut cols[0],
                "Cari & Pilih Model Motor",
                &catalog.models,
                &mut input.make_model,
                model_filter,
            );
            pick_list(
                &mut cols[1],
                "Pilih Jenis Bahan Bakar",
                &catalog.fuels,
                &mut input.fuel,
            );
            pick_list(
                &mut cols[2],
                "Pilih Jenis Transmisi",
                &catalog.gears,
                &mut input.gear,
            );
        });

        ui.add_space(12.0);

        if ui
            .button(RichText::new("✨ Prediksi Harga!").strong())
            .clicked()
        {
            self.outcome = Some(match service.handle_submit(input) {
                Ok(quote) => Outcome::Quote(quote),
                Err(e) => Outcome::Failure(submission_error(&e)),
            });
        }

        if let Some(outcome) = &self.outcome {
            ui.add_space(12.0);
            render_outcome(ui, outcome);
        }
    }
}

fn pick_list(ui: &mut Ui, label: &str, table: &LookupTable, selected: &mut String) {
    ui.label(label);
    egui::ComboBox::from_id_salt(label)
        .selected_text(selected.as_str())
        .width(ui.available_width())
        .show_ui(ui, |ui| {
            for choice in table.labels() {
                ui.selectable_value(selected, choice.to_string(), choice);
            }
        });
}

fn searchable_pick_list(
    ui: &mut Ui,
    label: &str,
    table: &LookupTable,
    selected: &mut String,
    filter: &mut String,
) {
    ui.label(label)
        .on_hover_text("Klik di dalam kotak ini dan ketik nama motor untuk mencari dengan mudah.");
    egui::ComboBox::from_id_salt(label)
        .selected_text(selected.as_str())
        .width(ui.available_width())
        .height(320.0)
        .show_ui(ui, |ui| {
            ui.add(egui::TextEdit::singleline(filter).hint_text("Ketik nama motor..."));
            let needle = filter.to_lowercase();
            for choice in table
                .labels()
                .filter(|l| needle.is_empty() || l.to_lowercase().contains(&needle))
            {
                ui.selectable_value(selected, choice.to_string(), choice);
            }
        });
}

fn year_input(ui: &mut Ui, year: &mut i32, bounds: YearBounds) {
    ui.label("Tahun Registrasi");
    ui.add(
        egui::DragValue::new(year)
            .range(bounds.min..=bounds.max)
            .speed(0.2),
    );
    *year = bounds.clamp(*year);
}

fn render_outcome(ui: &mut Ui, outcome: &Outcome) {
    match outcome {
        Outcome::Quote(quote) => {
            egui::Frame::group(ui.style())
                .fill(Color32::from_rgba_unmultiplied(0, 200, 0, 40))
                .show(ui, |ui| {
                    ui.set_width(ui.available_width());
                    ui.vertical_centered(|ui| {
                        ui.label(RichText::new("Kisaran Prediksi Harga Pasar:").size(18.0));
                        ui.label(RichText::new(&quote.range_text).size(32.0).strong());
                    });
                });
            ui.add_space(6.0);
            ui.label(RichText::new(&quote.note).italics());
        }
        Outcome::Failure(msg) => {
            ui.label(RichText::new(msg).color(Color32::LIGHT_RED).strong());
        }
    }
}
