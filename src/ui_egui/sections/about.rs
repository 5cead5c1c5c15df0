use crate::models::tour::ARTIST_PAGE_URL;
use crate::ui_egui::sections::open_url;
use crate::ui_egui::theme::TourTheme;

pub fn show(ui: &mut egui::Ui, theme: &TourTheme) {
    ui.add_space(40.0);
    ui.vertical_centered(|ui| {
        if ui
            .add(egui::Button::new(
                egui::RichText::new("ОБ АРТИСТЕ")
                    .monospace()
                    .size(12.0)
                    .color(theme.text_body),
            ))
            .clicked()
        {
            open_url(ARTIST_PAGE_URL);
        }
    });
}
