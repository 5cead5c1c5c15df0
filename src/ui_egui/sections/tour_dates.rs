//! The tour date list. Every row is a ticket link; returns true when one
//! was clicked.

use crate::models::tour::TOUR_STOPS;
use crate::ui_egui::sections::section_label;
use crate::ui_egui::theme::TourTheme;

pub fn show(ui: &mut egui::Ui, theme: &TourTheme) -> bool {
    let mut clicked = false;

    section_label(ui, theme, "ДАТЫ ТУРА");
    for stop in &TOUR_STOPS {
        let row = ui.horizontal(|ui| {
            ui.label(
                egui::RichText::new(stop.date_label())
                    .monospace()
                    .size(13.0)
                    .strong()
                    .color(theme.text_primary),
            );
            ui.add_space(12.0);
            ui.label(
                egui::RichText::new(stop.city)
                    .monospace()
                    .size(13.0)
                    .color(theme.text_body),
            );
            ui.with_layout(egui::Layout::right_to_left(egui::Align::Center), |ui| {
                if ui
                    .add(egui::Button::new(
                        egui::RichText::new("БИЛЕТЫ").monospace().size(10.0),
                    ))
                    .clicked()
                {
                    clicked = true;
                }
            });
        });
        // Hairline between rows, like the page's list dividers.
        let rect = row.response.rect;
        ui.painter().hline(
            rect.x_range(),
            rect.bottom() + 4.0,
            egui::Stroke::new(1.0, theme.border),
        );
        ui.add_space(10.0);
    }

    clicked
}
