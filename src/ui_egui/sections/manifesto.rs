use crate::models::tour::MANIFESTO_LINES;
use crate::ui_egui::sections::section_label;
use crate::ui_egui::theme::TourTheme;

pub fn show(ui: &mut egui::Ui, theme: &TourTheme) {
    section_label(ui, theme, "МАНИФЕСТ");
    for line in MANIFESTO_LINES {
        ui.label(
            egui::RichText::new(line)
                .monospace()
                .size(15.0)
                .color(theme.text_body),
        );
        ui.add_space(4.0);
    }
}
