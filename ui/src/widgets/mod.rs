mod users;

pub use users::{search_bar, users_panel, users_table};
