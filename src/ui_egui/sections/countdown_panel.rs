//! The ticket-sale countdown card.
//!
//! Shows «Осталось N дней NN часов NN минут NN секунд» while counting and
//! switches to the sales-open state once the target passes. Returns true
//! when the buy button was clicked.

use crate::models::countdown::CountdownStatus;
use crate::services::countdown::labeled_units;
use crate::ui_egui::theme::TourTheme;

pub fn show(ui: &mut egui::Ui, theme: &TourTheme, status: CountdownStatus) -> bool {
    let mut buy_clicked = false;

    let frame = egui::Frame::default()
        .fill(theme.card_background)
        .stroke(egui::Stroke::new(1.0, theme.border))
        .rounding(egui::Rounding::same(12.0))
        .inner_margin(egui::Margin::same(20.0));

    frame.show(ui, |ui| {
        ui.vertical_centered(|ui| match status {
            CountdownStatus::Counting(breakdown) => {
                ui.label(
                    egui::RichText::new("ДО НАЧАЛА ПРОДАЖ")
                        .monospace()
                        .size(11.0)
                        .color(theme.text_muted),
                );
                ui.add_space(10.0);
                ui.horizontal_wrapped(|ui| {
                    ui.spacing_mut().item_spacing.x = 8.0;
                    ui.label(
                        egui::RichText::new("Осталось")
                            .monospace()
                            .size(13.0)
                            .color(theme.text_muted),
                    );
                    for (index, unit) in labeled_units(&breakdown).iter().enumerate() {
                        // Days are shown as-is, the smaller units zero-padded.
                        let value = if index == 0 {
                            unit.value.to_string()
                        } else {
                            format!("{:02}", unit.value)
                        };
                        ui.label(
                            egui::RichText::new(value)
                                .size(24.0)
                                .strong()
                                .color(theme.text_primary),
                        );
                        ui.label(
                            egui::RichText::new(unit.label)
                                .monospace()
                                .size(11.0)
                                .color(theme.text_muted),
                        );
                    }
                });
                ui.add_space(10.0);
                ui.label(
                    egui::RichText::new("Подпишись, чтобы не пропустить")
                        .monospace()
                        .size(10.0)
                        .color(theme.text_muted),
                );
            }
            CountdownStatus::Expired => {
                ui.label(
                    egui::RichText::new("ПРОДАЖА БИЛЕТОВ ОТКРЫТА")
                        .size(18.0)
                        .strong()
                        .color(theme.text_primary),
                );
                ui.add_space(12.0);
                let button = egui::Button::new(
                    egui::RichText::new("КУПИТЬ БИЛЕТ")
                        .monospace()
                        .size(13.0)
                        .strong()
                        .color(theme.text_primary),
                )
                .fill(theme.accent)
                .rounding(egui::Rounding::same(8.0));
                if ui.add(button).clicked() {
                    buy_clicked = true;
                }
            }
        });
    });

    buy_clicked
}
