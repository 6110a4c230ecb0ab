//! Cell rendering functions for the users table.

use campus_business::{AdminAction, Badge, BadgeTone, LastLogin};
use egui::{Button, Color32, CornerRadius, Frame, Image, Margin, RichText, Ui, vec2};

use super::columns::AVATAR_SIZE;

/// Bootstrap contextual colours.
#[inline]
pub fn tone_color(tone: BadgeTone) -> Color32 {
    match tone {
        BadgeTone::Danger => Color32::from_rgb(220, 53, 69),
        BadgeTone::Primary => Color32::from_rgb(13, 110, 253),
        BadgeTone::Success => Color32::from_rgb(25, 135, 84),
        BadgeTone::Secondary => Color32::from_rgb(108, 117, 125),
    }
}

/// Round avatar followed by the bold full name. The name is also the image alt text.
#[inline]
pub fn render_user_cell(ui: &mut Ui, avatar_url: &str, full_name: &str) {
    ui.horizontal(|ui| {
        ui.add(
            Image::from_uri(avatar_url.to_owned())
                .alt_text(full_name)
                .fit_to_exact_size(vec2(AVATAR_SIZE, AVATAR_SIZE))
                .corner_radius(AVATAR_SIZE / 2.0),
        );
        ui.label(RichText::new(full_name).strong());
    });
}

#[inline]
pub fn render_email_cell(ui: &mut Ui, email: &str) {
    ui.label(email);
}

/// Pill with white text on the tone colour.
#[inline]
pub fn render_badge(ui: &mut Ui, badge: &Badge) {
    Frame::NONE
        .fill(tone_color(badge.tone))
        .corner_radius(CornerRadius::same(6))
        .inner_margin(Margin::symmetric(6, 2))
        .show(ui, |ui| {
            ui.label(RichText::new(&badge.label).color(Color32::WHITE).small());
        });
}

#[inline]
pub fn render_last_login_cell(ui: &mut Ui, last_login: &LastLogin) {
    match last_login {
        LastLogin::At(at) => {
            ui.label(at);
        }
        LastLogin::Never => {
            ui.label(RichText::new(last_login.label()).italics().weak());
        }
    }
}

/// Edit, toggle and delete buttons.
///
/// Returns the action to start if any button was clicked.
#[inline]
pub fn render_action_buttons(ui: &mut Ui, actions: &[AdminAction]) -> Option<AdminAction> {
    let mut clicked = None;

    ui.horizontal(|ui| {
        for action in actions {
            let button = Button::new(RichText::new(action.label()).color(Color32::WHITE))
                .fill(tone_color(action.tone()));
            if ui.add(button).clicked() {
                clicked = Some(*action);
            }
        }
    });

    clicked
}
