use std::time::Duration;

use campus_business::{SearchUsersCommand, UserSearchCompute, UsersPanelState};

use crate::{state::State, widgets};

/// How often to poll for a search result while no repaint hook is installed yet.
const IN_FLIGHT_REPAINT: Duration = Duration::from_millis(100);

pub struct CampusApp {
    pub state: State,
    repaint_hooked: bool,
}

impl CampusApp {
    /// Called once before the first frame. Starts the initial, unfiltered search.
    pub fn new(mut state: State) -> Self {
        state.ctx.dispatch::<SearchUsersCommand>();
        Self {
            state,
            repaint_hooked: false,
        }
    }

    fn hook_repaint(&mut self, ctx: &egui::Context) {
        if self.repaint_hooked {
            return;
        }
        let egui_ctx = ctx.clone();
        self.state
            .ctx
            .set_repaint_hook(move || egui_ctx.request_repaint());
        self.repaint_hooked = true;
    }
}

impl eframe::App for CampusApp {
    /// Called each time the UI needs repainting, which may be many times per second.
    fn update(&mut self, ctx: &egui::Context, _frame: &mut eframe::Frame) {
        self.hook_repaint(ctx);

        // Sync Compute for render
        self.state.ctx.sync_computes();

        egui::TopBottomPanel::top("top_panel").show(ctx, |ui| {
            ui.horizontal(|ui| {
                ui.heading("User directory");
            });
        });

        egui::CentralPanel::default().show(ctx, |ui| {
            widgets::users_panel(&mut self.state.ctx, ui);
        });

        if let Some(navigation) = self
            .state
            .ctx
            .state_mut::<UsersPanelState>()
            .take_navigation()
        {
            log::info!("navigating to {}", navigation.url);
            ctx.open_url(egui::OpenUrl::same_tab(navigation.url));
        }

        if self
            .state
            .ctx
            .cached::<UserSearchCompute>()
            .is_some_and(UserSearchCompute::is_loading)
        {
            ctx.request_repaint_after(IN_FLIGHT_REPAINT);
        }
    }
}
