use crate::models::tour::{MERCH_ITEMS, MERCH_NOTE};
use crate::ui_egui::sections::section_label;
use crate::ui_egui::theme::TourTheme;

pub fn show(ui: &mut egui::Ui, theme: &TourTheme) {
    section_label(ui, theme, "МЕРЧ");
    ui.label(
        egui::RichText::new(MERCH_NOTE)
            .monospace()
            .size(11.0)
            .color(theme.text_muted),
    );
    ui.add_space(12.0);

    for item in &MERCH_ITEMS {
        let frame = egui::Frame::default()
            .fill(theme.card_background)
            .stroke(egui::Stroke::new(1.0, theme.border))
            .inner_margin(egui::Margin::same(14.0));
        frame.show(ui, |ui| {
            ui.set_width(ui.available_width());
            ui.label(
                egui::RichText::new(item.title)
                    .monospace()
                    .size(12.0)
                    .color(theme.text_body),
            );
            ui.label(
                egui::RichText::new(item.subtitle)
                    .monospace()
                    .size(10.0)
                    .color(theme.text_muted),
            );
        });
        ui.add_space(8.0);
    }
}
