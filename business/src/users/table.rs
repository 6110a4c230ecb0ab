//! Table view-model: records in, rows of display cells out.
//!
//! Widgets only draw what is built here, so every rendering rule
//! (badges, placeholders, empty result) is testable without egui.

use crate::users::admin::AdminAction;
use crate::users::model::{GroupKind, UserRecord};
use crate::users::search_compute::UserSearchCompute;

pub const COLUMNS: [&str; 6] = ["User", "Email", "Group", "Status", "Last login", "Actions"];
pub const EMPTY_MESSAGE: &str = "No users found";
pub const NEVER_LABEL: &str = "Never";
pub const GROUP_PLACEHOLDER: &str = "—";

/// Bootstrap-style contextual colours used by badges.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BadgeTone {
    Danger,
    Primary,
    Success,
    Secondary,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Badge {
    pub label: String,
    pub tone: BadgeTone,
}

impl Badge {
    fn new(label: impl Into<String>, tone: BadgeTone) -> Self {
        Self {
            label: label.into(),
            tone,
        }
    }

    pub fn group(label: &str) -> Self {
        match GroupKind::classify(label) {
            GroupKind::Administrative => Self::new(label, BadgeTone::Danger),
            GroupKind::Professor => Self::new(label, BadgeTone::Primary),
            GroupKind::Other => Self::new(label, BadgeTone::Success),
            GroupKind::None => Self::new(GROUP_PLACEHOLDER, BadgeTone::Success),
        }
    }

    pub fn status(is_active: bool) -> Self {
        if is_active {
            Self::new("Active", BadgeTone::Success)
        } else {
            Self::new("Inactive", BadgeTone::Secondary)
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum LastLogin {
    At(String),
    /// Rendered muted and italic.
    Never,
}

impl LastLogin {
    pub fn label(&self) -> &str {
        match self {
            Self::At(text) => text,
            Self::Never => NEVER_LABEL,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UserRow {
    pub id: u64,
    pub avatar_url: String,
    /// Also the avatar's alt text.
    pub full_name: String,
    pub email: String,
    pub group: Badge,
    pub status: Badge,
    pub last_login: LastLogin,
    /// Edit, toggle, delete.
    pub actions: [AdminAction; 3],
}

impl UserRow {
    pub fn from_record(record: &UserRecord, default_avatar: &str) -> Self {
        let toggle = if record.is_active {
            AdminAction::Deactivate(record.id)
        } else {
            AdminAction::Activate(record.id)
        };

        Self {
            id: record.id,
            avatar_url: record.picture().unwrap_or(default_avatar).to_owned(),
            full_name: record.full_name.clone(),
            email: record.email.clone(),
            group: Badge::group(&record.group),
            status: Badge::status(record.is_active),
            last_login: record
                .last_login()
                .map_or(LastLogin::Never, |at| LastLogin::At(at.to_owned())),
            actions: [AdminAction::Edit(record.id), toggle, AdminAction::Delete(record.id)],
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum UserTable {
    /// No search has completed yet: header only.
    Pending,
    /// A single informational row across every column.
    Empty { message: &'static str },
    Rows(Vec<UserRow>),
}

impl UserTable {
    pub fn build(records: &[UserRecord], default_avatar: &str) -> Self {
        if records.is_empty() {
            return Self::Empty {
                message: EMPTY_MESSAGE,
            };
        }

        Self::Rows(
            records
                .iter()
                .map(|record| UserRow::from_record(record, default_avatar))
                .collect(),
        )
    }

    /// Table for the cached search result; `Pending` until a search has succeeded.
    pub fn from_compute(compute: &UserSearchCompute, default_avatar: &str) -> Self {
        if compute.loaded_at.is_none() {
            return Self::Pending;
        }
        Self::build(&compute.users, default_avatar)
    }

    pub fn row_count(&self) -> usize {
        match self {
            Self::Pending => 0,
            Self::Empty { .. } => 1,
            Self::Rows(rows) => rows.len(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const AVATAR: &str = "https://campus.example/static/img/default_profile.jpg";

    fn record(id: u64, group: &str, is_active: bool) -> UserRecord {
        UserRecord {
            id,
            full_name: format!("User {id}"),
            email: format!("user{id}@school.example"),
            group: group.to_owned(),
            is_active,
            last_login: Some("02/05/2024 10:30".to_owned()),
            profile_picture: Some(format!("/media/{id}.png")),
        }
    }

    #[test]
    fn test_empty_records_yield_single_spanning_row() {
        let table = UserTable::build(&[], AVATAR);
        assert_eq!(
            table,
            UserTable::Empty {
                message: "No users found",
            }
        );
        assert_eq!(table.row_count(), 1);
    }

    #[test]
    fn test_no_empty_row_before_first_search_completes() {
        let initial = UserSearchCompute::default();
        assert_eq!(UserTable::from_compute(&initial, AVATAR), UserTable::Pending);

        let first_in_flight = UserSearchCompute {
            in_flight: true,
            ..UserSearchCompute::default()
        };
        let table = UserTable::from_compute(&first_in_flight, AVATAR);
        assert_eq!(table, UserTable::Pending);
        assert_eq!(table.row_count(), 0);

        let loaded_empty = UserSearchCompute::loaded(Vec::new());
        assert!(matches!(
            UserTable::from_compute(&loaded_empty, AVATAR),
            UserTable::Empty { .. }
        ));

        let loaded = UserSearchCompute::loaded(vec![record(4, "Alumno", true)]);
        assert_eq!(UserTable::from_compute(&loaded, AVATAR).row_count(), 1);
    }

    #[test]
    fn test_one_row_per_record() {
        let records = vec![
            record(1, "Administrativo", true),
            record(2, "Profesor", false),
            record(3, "Alumno", true),
        ];
        let UserTable::Rows(rows) = UserTable::build(&records, AVATAR) else {
            panic!("expected rows");
        };

        assert_eq!(rows.len(), 3);
        assert_eq!(rows[0].avatar_url, "/media/1.png");
        assert_eq!(rows[0].full_name, "User 1");
        assert_eq!(rows[1].email, "user2@school.example");
        assert!(rows.iter().all(|row| row.actions.len() == 3));
    }

    #[test]
    fn test_group_badge_tones() {
        assert_eq!(Badge::group("Administrative").tone, BadgeTone::Danger);
        assert_eq!(Badge::group("Professor").tone, BadgeTone::Primary);
        assert_eq!(Badge::group("Alumno").tone, BadgeTone::Success);

        let empty = Badge::group("");
        assert_eq!(empty.label, "—");
        assert_eq!(empty.tone, BadgeTone::Success);
    }

    #[test]
    fn test_status_badge_and_toggle_follow_activity() {
        let active = UserRow::from_record(&record(5, "Alumno", true), AVATAR);
        assert_eq!(active.status, Badge::new("Active", BadgeTone::Success));
        assert_eq!(active.actions[1], AdminAction::Deactivate(5));

        let inactive = UserRow::from_record(&record(6, "Alumno", false), AVATAR);
        assert_eq!(inactive.status, Badge::new("Inactive", BadgeTone::Secondary));
        assert_eq!(inactive.actions[1], AdminAction::Activate(6));
    }

    #[test]
    fn test_missing_login_and_picture_use_fallbacks() {
        let mut user = record(9, "", true);
        user.last_login = None;
        user.profile_picture = None;

        let row = UserRow::from_record(&user, AVATAR);
        assert_eq!(row.last_login, LastLogin::Never);
        assert_eq!(row.last_login.label(), "Never");
        assert_eq!(row.avatar_url, AVATAR);
    }
}
