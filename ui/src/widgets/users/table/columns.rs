//! Column definitions for the users table.

use egui_extras::Column;

pub const EMAIL_MIN_WIDTH: f32 = 180.0;
pub const GROUP_WIDTH: f32 = 120.0;
pub const STATUS_WIDTH: f32 = 90.0;
pub const LAST_LOGIN_WIDTH: f32 = 130.0;
pub const ACTIONS_WIDTH: f32 = 250.0;
pub const AVATAR_SIZE: f32 = 32.0;
pub const ROW_HEIGHT: f32 = 40.0;
pub const HEADER_HEIGHT: f32 = 24.0;

/// In order: User, Email, Group, Status, Last login, Actions.
#[inline]
pub fn table_columns() -> Vec<Column> {
    vec![
        Column::remainder().at_least(200.0), // User - avatar + name
        Column::auto().at_least(EMAIL_MIN_WIDTH),
        Column::exact(GROUP_WIDTH),
        Column::exact(STATUS_WIDTH),
        Column::exact(LAST_LOGIN_WIDTH),
        Column::exact(ACTIONS_WIDTH),
    ]
}
