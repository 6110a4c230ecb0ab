use std::any::Any;

use campus_states::{State, snapshot_clone};

/// Values of the three search controls. Free text, never validated.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SearchFilters {
    pub query: String,
    pub role: String,
    pub status: String,
}

impl SearchFilters {
    pub fn new(
        query: impl Into<String>,
        role: impl Into<String>,
        status: impl Into<String>,
    ) -> Self {
        Self {
            query: query.into(),
            role: role.into(),
            status: status.into(),
        }
    }

    /// `q=..&role=..&status=..`, always all three, always in this order.
    pub fn query_string(&self) -> String {
        format!(
            "q={}&role={}&status={}",
            urlencoding::encode(&self.query),
            urlencoding::encode(&self.role),
            urlencoding::encode(&self.status),
        )
    }

    pub fn search_url(&self, endpoint: &str) -> String {
        format!("{endpoint}?{}", self.query_string())
    }
}

impl State for SearchFilters {
    fn snapshot(&self) -> Option<Box<dyn Any + Send>> {
        snapshot_clone(self)
    }
}

/// `(value, label)` pairs for the role selector. Empty value means any.
pub const ROLE_OPTIONS: &[(&str, &str)] = &[
    ("", "All groups"),
    ("Administrativo", "Administrative"),
    ("Docente", "Teacher"),
    ("Alumno", "Student"),
];

/// `(value, label)` pairs for the status selector.
pub const STATUS_OPTIONS: &[(&str, &str)] = &[
    ("", "All statuses"),
    ("active", "Active"),
    ("inactive", "Inactive"),
];

/// Label shown for `value`, or the raw value when it is not a known option.
pub fn option_label<'a>(options: &'a [(&'a str, &'a str)], value: &'a str) -> &'a str {
    options
        .iter()
        .find(|(v, _)| *v == value)
        .map(|(_, label)| *label)
        .unwrap_or(value)
}
