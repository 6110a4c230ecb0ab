//! Wire types of the user search endpoint.

use serde::{Deserialize, Deserializer};

/// One user as returned by the search endpoint.
///
/// Display data only; a new set replaces the old one on every successful search.
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
pub struct UserRecord {
    pub id: u64,
    #[serde(default, deserialize_with = "null_as_empty")]
    pub full_name: String,
    #[serde(default, deserialize_with = "null_as_empty")]
    pub email: String,
    /// First group of the user, empty when it has none.
    #[serde(default, deserialize_with = "null_as_empty")]
    pub group: String,
    pub is_active: bool,
    /// Pre-formatted by the server (`dd/mm/YYYY HH:MM`).
    #[serde(default)]
    pub last_login: Option<String>,
    #[serde(default)]
    pub profile_picture: Option<String>,
}

fn null_as_empty<'de, D>(deserializer: D) -> Result<String, D::Error>
where
    D: Deserializer<'de>,
{
    Ok(Option::<String>::deserialize(deserializer)?.unwrap_or_default())
}

impl UserRecord {
    pub fn group_kind(&self) -> GroupKind {
        GroupKind::classify(&self.group)
    }

    /// Picture URL, `None` when missing or blank.
    pub fn picture(&self) -> Option<&str> {
        self.profile_picture
            .as_deref()
            .filter(|url| !url.trim().is_empty())
    }

    pub fn last_login(&self) -> Option<&str> {
        self.last_login.as_deref().filter(|s| !s.trim().is_empty())
    }
}

/// Body of a successful search: `{ "usuarios": [...] }`.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct SearchUsersResponse {
    #[serde(rename = "usuarios")]
    pub users: Vec<UserRecord>,
}

/// Classification of a group label, used to pick the badge colour.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GroupKind {
    Administrative,
    Professor,
    Other,
    None,
}

impl GroupKind {
    pub fn classify(label: &str) -> Self {
        match label.trim() {
            "" => Self::None,
            "Administrative" | "Administrativo" => Self::Administrative,
            "Professor" | "Profesor" => Self::Professor,
            _ => Self::Other,
        }
    }
}
