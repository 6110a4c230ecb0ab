//! Users panel widgets.
//!
//! Widgets hold no domain state: they read `SearchFilters`, `UserSearchCompute`
//! and `UsersPanelState` from the `StateCtx` and report clicks back through it.

mod modals;
mod panel;
mod search_bar;
mod table;

pub use panel::users_panel;
pub use search_bar::search_bar;
pub use table::users_table;
