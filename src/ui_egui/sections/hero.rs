use crate::models::tour::{ARTIST_NAME, TOUR_TAGLINE, TOUR_TITLE};
use crate::ui_egui::theme::TourTheme;

pub fn show(ui: &mut egui::Ui, theme: &TourTheme) {
    ui.add_space(64.0);
    ui.vertical_centered(|ui| {
        ui.label(
            egui::RichText::new(ARTIST_NAME)
                .size(56.0)
                .strong()
                .color(theme.text_primary),
        );
        ui.add_space(4.0);
        ui.label(
            egui::RichText::new(TOUR_TITLE)
                .size(28.0)
                .strong()
                .color(theme.text_primary),
        );
        ui.add_space(16.0);
        ui.label(
            egui::RichText::new(TOUR_TAGLINE)
                .monospace()
                .size(12.0)
                .color(theme.text_body),
        );
    });
    ui.add_space(32.0);
}
