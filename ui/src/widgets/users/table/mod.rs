//! Table components for the users panel.
//!
//! - `columns`: Column definitions and widths
//! - `header`: Table header rendering
//! - `row`: Individual row rendering with cells
//! - `cells`: Cell rendering functions for each column type

mod cells;
mod columns;
mod header;
mod row;

use campus_business::{AdminAction, UserTable};
use egui::{Align, Frame, Layout, Margin, RichText, Ui};
use egui_extras::TableBuilder;

use columns::{HEADER_HEIGHT, ROW_HEIGHT, table_columns};
use header::render_table_header;
use row::render_user_row;

/// Draws `table`; returns the action of the clicked row button, if any.
pub fn users_table(ui: &mut Ui, table: &UserTable) -> Option<AdminAction> {
    let mut clicked = None;

    let builder = TableBuilder::new(ui)
        .id_salt("users_table")
        .striped(true)
        .resizable(false)
        .cell_layout(Layout::left_to_right(Align::Center));
    let builder = table_columns()
        .into_iter()
        .fold(builder, |builder, column| builder.column(column));

    builder
        .header(HEADER_HEIGHT, |mut header| {
            render_table_header(&mut header);
        })
        .body(|mut body| {
            if let UserTable::Rows(rows) = table {
                for user in rows {
                    body.row(ROW_HEIGHT, |mut row| {
                        if let Some(action) = render_user_row(&mut row, user) {
                            clicked = Some(action);
                        }
                    });
                }
            }
        });

    // Table rows cannot span columns; the informational row is drawn full width below the header.
    if let UserTable::Empty { message } = table {
        Frame::NONE
            .inner_margin(Margin::symmetric(8, 12))
            .show(ui, |ui| {
                ui.vertical_centered(|ui| {
                    ui.label(RichText::new(*message).weak());
                });
            });
    }

    clicked
}
