//! Theme module for the egui tour page
//!
//! Carries the original page's near-black palette with muted red accents.

use egui::Color32;

/// The page theme defining all colors used in the application
#[derive(Debug, Clone)]
pub struct TourTheme {
    /// Application background color
    pub background: Color32,

    /// Card/panel background color
    pub card_background: Color32,

    /// Hairline border color
    pub border: Color32,

    /// Primary text color (headings, countdown digits)
    pub text_primary: Color32,

    /// Body text color
    pub text_body: Color32,

    /// Secondary/muted text color
    pub text_muted: Color32,

    /// Accent color (markers, highlighted borders)
    pub accent: Color32,

    /// Marker ring color on the tour map
    pub marker_ring: Color32,
}

impl TourTheme {
    pub fn dark() -> Self {
        Self {
            background: Color32::from_rgb(10, 10, 10),
            card_background: Color32::from_rgb(18, 18, 18),
            border: Color32::from_rgb(38, 38, 38),
            text_primary: Color32::from_rgb(217, 217, 217),
            text_body: Color32::from_rgb(179, 179, 179),
            text_muted: Color32::from_rgb(115, 115, 115),
            accent: Color32::from_rgb(74, 28, 28),
            marker_ring: Color32::from_rgb(191, 191, 191),
        }
    }

    /// Push this theme into the egui visuals so stock widgets match.
    pub fn apply(&self, ctx: &egui::Context) {
        let mut visuals = egui::Visuals::dark();
        visuals.panel_fill = self.background;
        visuals.window_fill = self.card_background;
        visuals.override_text_color = Some(self.text_body);
        visuals.widgets.noninteractive.bg_stroke = egui::Stroke::new(1.0, self.border);
        visuals.widgets.inactive.bg_fill = self.card_background;
        visuals.widgets.inactive.bg_stroke = egui::Stroke::new(1.0, self.border);
        visuals.widgets.hovered.bg_stroke = egui::Stroke::new(1.0, self.accent);
        visuals.widgets.active.bg_fill = self.accent;
        ctx.set_visuals(visuals);
    }
}
