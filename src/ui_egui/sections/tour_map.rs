//! Illustrative tour map: the nine stops projected onto a flat panel,
//! markers highlighted on hover. This is a sketch, not cartography, so a
//! plain equirectangular projection over the stop bounding box is enough.

use crate::models::tour::{TourStop, TOUR_STOPS};
use crate::ui_egui::sections::section_label;
use crate::ui_egui::theme::TourTheme;

const MARKER_RADIUS: f32 = 5.0;
const HOVER_RADIUS: f32 = 8.0;

pub fn show(ui: &mut egui::Ui, theme: &TourTheme) {
    section_label(ui, theme, "КАРТА ТУРА");

    let width = ui.available_width();
    let desired = egui::vec2(width, width * 10.0 / 16.0);
    let (response, painter) = ui.allocate_painter(desired, egui::Sense::hover());
    let rect = response.rect;

    painter.rect(
        rect,
        egui::Rounding::same(4.0),
        theme.card_background,
        egui::Stroke::new(1.0, theme.border),
    );

    let inner = rect.shrink(24.0);
    for (index, stop) in TOUR_STOPS.iter().enumerate() {
        let pos = project(stop, inner);
        let marker_rect = egui::Rect::from_center_size(pos, egui::Vec2::splat(HOVER_RADIUS * 2.0));
        let marker = ui.interact(
            marker_rect,
            response.id.with(index),
            egui::Sense::hover(),
        );

        let radius = if marker.hovered() {
            MARKER_RADIUS * 1.5
        } else {
            MARKER_RADIUS
        };
        painter.circle(pos, radius, theme.accent, egui::Stroke::new(1.5, theme.marker_ring));

        marker.on_hover_text(
            egui::RichText::new(format!("{}  {}", stop.date_label(), stop.city))
                .monospace()
                .size(11.0),
        );
    }

    ui.add_space(8.0);
    ui.vertical_centered(|ui| {
        ui.label(
            egui::RichText::new(format!("{} городов", TOUR_STOPS.len()))
                .monospace()
                .size(11.0)
                .color(theme.text_muted),
        );
        ui.label(
            egui::RichText::new("Январь — Февраль 2026")
                .monospace()
                .size(10.0)
                .color(theme.text_muted),
        );
    });
}

/// Map a stop into the panel. Longitude grows rightwards, latitude
/// upwards, both scaled to the bounding box of the whole tour.
fn project(stop: &TourStop, rect: egui::Rect) -> egui::Pos2 {
    let (lon_min, lon_max) = min_max(TOUR_STOPS.iter().map(|s| s.lon));
    let (lat_min, lat_max) = min_max(TOUR_STOPS.iter().map(|s| s.lat));

    let x = (stop.lon - lon_min) / (lon_max - lon_min);
    let y = (stop.lat - lat_min) / (lat_max - lat_min);
    egui::pos2(
        rect.left() + rect.width() * x as f32,
        rect.bottom() - rect.height() * y as f32,
    )
}

fn min_max(values: impl Iterator<Item = f64>) -> (f64, f64) {
    values.fold((f64::INFINITY, f64::NEG_INFINITY), |(lo, hi), v| {
        (lo.min(v), hi.max(v))
    })
}
