//! The landing page sections, top to bottom, plus the tickets page.

pub mod about;
pub mod countdown_panel;
pub mod hero;
pub mod manifesto;
pub mod merch;
pub mod releases;
pub mod tickets;
pub mod tour_dates;
pub mod tour_map;

use crate::models::tour::FOOTER_TEXT;
use crate::ui_egui::theme::TourTheme;

/// Open an external link in the system browser.
pub fn open_url(url: &str) {
    log::info!("Opening {url}");
    if let Err(e) = webbrowser::open(url) {
        log::warn!("Failed to open {url}: {e}");
    }
}

/// The small monospace caption that introduces every section.
pub(crate) fn section_label(ui: &mut egui::Ui, theme: &TourTheme, text: &str) {
    ui.add_space(28.0);
    ui.label(
        egui::RichText::new(text)
            .monospace()
            .size(11.0)
            .color(theme.text_muted),
    );
    ui.add_space(12.0);
}

pub fn footer(ui: &mut egui::Ui, theme: &TourTheme) {
    ui.add_space(32.0);
    ui.vertical_centered(|ui| {
        ui.label(
            egui::RichText::new(FOOTER_TEXT)
                .monospace()
                .size(10.0)
                .color(theme.text_muted),
        );
    });
    ui.add_space(16.0);
}
