//! UI-independent core of the campus user directory.

mod config;
pub mod http;
pub mod users;

pub use config::{BusinessConfig, DEFAULT_API_BASE_URL, DEFAULT_SEARCH_PATH, ENV_PREFIX};
pub use users::{
    ActionPlan, AdminAction, AdminLinks, AdminModal, Badge, BadgeTone, COLUMNS, Confirmation,
    EMPTY_MESSAGE, GROUP_PLACEHOLDER, GroupKind, LastLogin, ModalKind, NEVER_LABEL, Navigation,
    ROLE_OPTIONS, STATUS_OPTIONS, SearchError, SearchFilters, SearchUsersCommand, UserRecord,
    UserRow, UserSearchCompute, UserTable, UsersPanelState, option_label,
};

use campus_states::StateCtx;

/// Registers every state, compute and command of the users panel.
pub fn register(ctx: &mut StateCtx, config: BusinessConfig) {
    ctx.add_state(config);
    ctx.add_state(SearchFilters::default());
    ctx.add_state(UsersPanelState::default());
    ctx.record_compute(UserSearchCompute::default());
    ctx.record_command(SearchUsersCommand);
}
