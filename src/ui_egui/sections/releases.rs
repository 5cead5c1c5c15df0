use crate::models::tour::RELEASES;
use crate::ui_egui::sections::{open_url, section_label};
use crate::ui_egui::theme::TourTheme;

pub fn show(ui: &mut egui::Ui, theme: &TourTheme) {
    section_label(ui, theme, "РЕЛИЗЫ");
    for release in &RELEASES {
        ui.label(
            egui::RichText::new(release.title)
                .size(18.0)
                .strong()
                .color(theme.text_primary),
        );
        ui.add_space(6.0);
        ui.label(
            egui::RichText::new(release.description)
                .size(12.0)
                .color(theme.text_body),
        );
        ui.add_space(8.0);
        if ui
            .add(egui::Button::new(
                egui::RichText::new("СЛУШАТЬ").monospace().size(11.0),
            ))
            .clicked()
        {
            open_url(release.listen_url);
        }
        ui.add_space(20.0);
    }
}
