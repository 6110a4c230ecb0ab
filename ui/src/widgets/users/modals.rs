//! Admin modal and confirmation dialog.

use campus_business::UsersPanelState;
use egui::{Align2, RichText, Ui, Window};

/// The redirect modal opened by Create and Edit.
pub fn show_admin_modal(state: &mut UsersPanelState, ui: &mut Ui) {
    let Some(modal) = &state.modal else {
        return;
    };

    let mut open = true;
    let mut follow = false;
    let mut cancel = false;

    Window::new(format!("{} {}", modal.icon, modal.title))
        .id(egui::Id::new("admin_modal"))
        .open(&mut open)
        .collapsible(false)
        .resizable(false)
        .anchor(Align2::CENTER_CENTER, [0.0, 0.0])
        .show(ui.ctx(), |ui| {
            ui.label(modal.body);
            ui.add_space(4.0);
            ui.label(RichText::new(&modal.link.url).monospace().weak());
            ui.add_space(8.0);
            ui.horizontal(|ui| {
                if ui.button("Continue").clicked() {
                    follow = true;
                }
                if ui.button("Cancel").clicked() {
                    cancel = true;
                }
            });
        });

    if follow {
        state.follow_modal_link();
    } else if cancel || !open {
        state.close_modal();
    }
}

/// Yes/no prompt; OK navigates, Cancel or closing does nothing.
pub fn show_confirmation_dialog(state: &mut UsersPanelState, ui: &mut Ui) {
    let Some(confirmation) = &state.confirmation else {
        return;
    };

    let mut open = true;
    let mut answer = None;

    Window::new("Confirm")
        .id(egui::Id::new("admin_confirmation"))
        .open(&mut open)
        .collapsible(false)
        .resizable(false)
        .anchor(Align2::CENTER_CENTER, [0.0, 0.0])
        .show(ui.ctx(), |ui| {
            ui.label(confirmation.prompt);
            ui.add_space(8.0);
            ui.horizontal(|ui| {
                if ui.button("OK").clicked() {
                    answer = Some(true);
                }
                if ui.button("Cancel").clicked() {
                    answer = Some(false);
                }
            });
        });

    if !open {
        answer = Some(false);
    }
    if let Some(accepted) = answer {
        state.resolve_confirmation(accepted);
    }
}
