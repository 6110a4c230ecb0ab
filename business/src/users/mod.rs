//! Users domain module.
//!
//! - `model`: wire records of the search endpoint
//! - `query`: filter state and query-string construction
//! - `api` + `search_compute`: the search request and its cached result
//! - `table`: the view-model the table widget draws
//! - `admin` + `state`: action buttons, prompts and navigation into the admin interface
//!
//! UI code should only read via `ctx.cached::<T>()` / `ctx.state::<T>()` and trigger
//! changes via `ctx.dispatch::<Cmd>()` or the methods of `UsersPanelState`.

pub mod admin;
pub mod api;
pub mod model;
pub mod query;
pub mod search_compute;
pub mod state;
pub mod table;

pub use admin::{
    ActionPlan, AdminAction, AdminLinks, AdminModal, Confirmation, ModalKind, Navigation,
};
pub use api::{SearchError, search_users};
pub use model::{GroupKind, SearchUsersResponse, UserRecord};
pub use query::{ROLE_OPTIONS, STATUS_OPTIONS, SearchFilters, option_label};
pub use search_compute::{SearchUsersCommand, UserSearchCompute};
pub use state::UsersPanelState;
pub use table::{
    Badge, BadgeTone, COLUMNS, EMPTY_MESSAGE, GROUP_PLACEHOLDER, LastLogin, NEVER_LABEL,
    UserRow, UserTable,
};
