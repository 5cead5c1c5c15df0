use chrono::Utc;

use crate::models::countdown::CountdownStatus;
use crate::services::countdown::{CountdownService, TICK_PERIOD};
use crate::services::settings::Settings;
use crate::ui_egui::sections;
use crate::ui_egui::theme::TourTheme;

/// Which page is on screen.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ViewType {
    Landing,
    Tickets,
}

pub struct TourApp {
    settings: Settings,
    countdown: CountdownService,
    current_view: ViewType,
    theme: TourTheme,
}

impl TourApp {
    pub fn new(cc: &eframe::CreationContext<'_>, settings: Settings) -> Self {
        let theme = TourTheme::dark();
        theme.apply(&cc.egui_ctx);
        let countdown = CountdownService::new(settings.target);
        Self {
            settings,
            countdown,
            current_view: ViewType::Landing,
            theme,
        }
    }

    /// «КУПИТЬ БИЛЕТ»: open the shop if a URL is configured, otherwise
    /// fall through to the waiting page.
    fn buy_tickets(&mut self) {
        match self.settings.ticket_url.as_deref() {
            Some(url) => sections::open_url(url),
            None => self.current_view = ViewType::Tickets,
        }
    }

    fn show_landing(&mut self, ui: &mut egui::Ui, status: CountdownStatus) {
        egui::ScrollArea::vertical()
            .auto_shrink([false; 2])
            .show(ui, |ui| {
                sections::hero::show(ui, &self.theme);
                if sections::countdown_panel::show(ui, &self.theme, status) {
                    self.buy_tickets();
                }
                sections::manifesto::show(ui, &self.theme);
                if sections::tour_dates::show(ui, &self.theme) {
                    self.buy_tickets();
                }
                sections::tour_map::show(ui, &self.theme);
                sections::releases::show(ui, &self.theme);
                sections::merch::show(ui, &self.theme);
                sections::about::show(ui, &self.theme);
                sections::footer(ui, &self.theme);
            });
    }

    fn show_tickets(&mut self, ui: &mut egui::Ui) {
        if sections::tickets::show(ui, &self.theme) {
            self.current_view = ViewType::Landing;
        }
    }
}

impl eframe::App for TourApp {
    fn update(&mut self, ctx: &egui::Context, _frame: &mut eframe::Frame) {
        let status = self.countdown.status(Utc::now());

        // Tick once a second while counting; once expired there is
        // nothing left to re-evaluate on a timer.
        if !status.is_expired() {
            ctx.request_repaint_after(TICK_PERIOD);
        }

        let frame = egui::Frame::default()
            .fill(self.theme.background)
            .inner_margin(egui::Margin::symmetric(24.0, 12.0));
        egui::CentralPanel::default().frame(frame).show(ctx, |ui| {
            match self.current_view {
                ViewType::Landing => self.show_landing(ui, status),
                ViewType::Tickets => self.show_tickets(ui),
            }
        });
    }
}
