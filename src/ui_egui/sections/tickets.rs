//! The tickets placeholder page. Returns true when the back link is
//! clicked.

use crate::ui_egui::theme::TourTheme;

pub fn show(ui: &mut egui::Ui, theme: &TourTheme) -> bool {
    let mut back = false;

    ui.add_space(ui.available_height() * 0.25);
    ui.vertical_centered(|ui| {
        ui.label(
            egui::RichText::new("СКОРО")
                .size(28.0)
                .strong()
                .color(theme.text_primary),
        );
        ui.add_space(12.0);
        ui.label(
            egui::RichText::new("Продажа билетов ещё не началась.")
                .monospace()
                .size(12.0)
                .color(theme.text_muted),
        );
        ui.label(
            egui::RichText::new("Дождитесь старта продаж.")
                .monospace()
                .size(12.0)
                .color(theme.text_muted),
        );
        ui.add_space(24.0);
        if ui
            .add(egui::Button::new(
                egui::RichText::new("← ВЕРНУТЬСЯ НА ГЛАВНУЮ")
                    .monospace()
                    .size(12.0)
                    .color(theme.text_body),
            ))
            .clicked()
        {
            back = true;
        }
    });

    back
}
