//! Row rendering for the users table.

use campus_business::{AdminAction, UserRow};
use egui_extras::TableRow;

use super::cells::{
    render_action_buttons, render_badge, render_email_cell, render_last_login_cell,
    render_user_cell,
};

/// Renders one user; returns the action whose button was clicked, if any.
#[inline]
pub fn render_user_row(row: &mut TableRow<'_, '_>, user: &UserRow) -> Option<AdminAction> {
    let mut action = None;

    row.col(|ui| render_user_cell(ui, &user.avatar_url, &user.full_name));
    row.col(|ui| render_email_cell(ui, &user.email));
    row.col(|ui| render_badge(ui, &user.group));
    row.col(|ui| render_badge(ui, &user.status));
    row.col(|ui| render_last_login_cell(ui, &user.last_login));
    row.col(|ui| {
        action = render_action_buttons(ui, &user.actions);
    });

    action
}
