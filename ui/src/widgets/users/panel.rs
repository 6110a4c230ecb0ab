//! Main users panel: toolbar, status line, table and dialogs.

use campus_business::{
    AdminAction, AdminLinks, BusinessConfig, SearchUsersCommand, UserSearchCompute, UserTable,
    UsersPanelState,
};
use campus_states::StateCtx;
use chrono::Local;
use egui::{Align, Color32, Layout, Ui};

use super::modals::{show_admin_modal, show_confirmation_dialog};
use super::search_bar::search_bar;
use super::table::users_table;

pub fn users_panel(state_ctx: &mut StateCtx, ui: &mut Ui) {
    let mut action: Option<AdminAction> = None;

    let search_requested = ui
        .horizontal(|ui| {
            let requested = search_bar(state_ctx, ui);
            ui.with_layout(Layout::right_to_left(Align::Center), |ui| {
                if ui.button(AdminAction::Create.label()).clicked() {
                    action = Some(AdminAction::Create);
                }
            });
            requested
        })
        .inner;

    if search_requested {
        state_ctx.dispatch::<SearchUsersCommand>();
    }

    ui.add_space(4.0);

    let table = {
        let default_avatar = state_ctx.state::<BusinessConfig>().default_avatar_url();
        match state_ctx.cached::<UserSearchCompute>() {
            Some(compute) => {
                status_line(ui, compute);
                UserTable::from_compute(compute, &default_avatar)
            }
            None => UserTable::Pending,
        }
    };

    ui.separator();

    if let Some(clicked) = users_table(ui, &table) {
        action = Some(clicked);
    }

    if let Some(action) = action {
        log::debug!("starting {action:?}");
        let links = AdminLinks::from_config(state_ctx.state::<BusinessConfig>());
        state_ctx
            .state_mut::<UsersPanelState>()
            .begin(action, &links);
    }

    let state = state_ctx.state_mut::<UsersPanelState>();
    show_admin_modal(state, ui);
    show_confirmation_dialog(state, ui);
}

fn status_line(ui: &mut Ui, compute: &UserSearchCompute) {
    ui.horizontal(|ui| {
        if compute.is_loading() {
            ui.spinner();
            ui.label("Searching...");
        } else if let Some(loaded_at) = compute.loaded_at {
            ui.weak(format!(
                "{} users, updated {}",
                compute.users.len(),
                loaded_at.with_timezone(&Local).format("%H:%M:%S")
            ));
        }

        if let Some(error) = compute.error_message() {
            ui.colored_label(Color32::RED, format!("Error: {error}"));
        }
    });
}
