//! Action buttons → plans → navigation into the external admin interface.
//!
//! Nothing here mutates users. Every action maps an id (or nothing) to a plan:
//! show the admin modal, or ask for confirmation and then navigate.

use crate::BusinessConfig;
use crate::users::table::BadgeTone;

/// URLs of the user pages in the admin interface.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AdminLinks {
    base: String,
}

impl AdminLinks {
    pub fn new(base: impl Into<String>) -> Self {
        Self {
            base: base.into().trim_end_matches('/').to_owned(),
        }
    }

    pub fn from_config(config: &BusinessConfig) -> Self {
        Self::new(config.admin_base_url())
    }

    pub fn add(&self) -> String {
        format!("{}/add/", self.base)
    }

    pub fn change(&self, id: u64) -> String {
        format!("{}/{id}/change/", self.base)
    }

    pub fn delete(&self, id: u64) -> String {
        format!("{}/{id}/delete/", self.base)
    }
}

/// A request to leave the app for `url`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Navigation {
    pub url: String,
}

impl Navigation {
    pub fn to(url: impl Into<String>) -> Self {
        Self { url: url.into() }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AdminAction {
    Create,
    Edit(u64),
    Activate(u64),
    Deactivate(u64),
    Delete(u64),
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ModalKind {
    Create,
    Edit,
}

/// The single admin modal, rewritten for each use.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AdminModal {
    pub kind: ModalKind,
    pub icon: &'static str,
    pub title: &'static str,
    pub body: &'static str,
    pub link: Navigation,
}

impl AdminModal {
    pub fn create(links: &AdminLinks) -> Self {
        Self {
            kind: ModalKind::Create,
            icon: "➕",
            title: "Create New User",
            body: "You will be redirected to the administration interface to create a new user.",
            link: Navigation::to(links.add()),
        }
    }

    pub fn edit(links: &AdminLinks, id: u64) -> Self {
        Self {
            kind: ModalKind::Edit,
            icon: "✏",
            title: "Edit User",
            body: "You will be redirected to the administration interface to edit this user.",
            link: Navigation::to(links.change(id)),
        }
    }
}

/// A yes/no prompt guarding a navigation.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Confirmation {
    pub action: AdminAction,
    pub prompt: &'static str,
    pub target: Navigation,
}

impl Confirmation {
    /// Rejection yields nothing; acceptance yields the guarded navigation.
    pub fn resolve(self, accepted: bool) -> Option<Navigation> {
        accepted.then_some(self.target)
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ActionPlan {
    Modal(AdminModal),
    Confirm(Confirmation),
}

impl AdminAction {
    pub fn plan(self, links: &AdminLinks) -> ActionPlan {
        match self {
            Self::Create => ActionPlan::Modal(AdminModal::create(links)),
            Self::Edit(id) => ActionPlan::Modal(AdminModal::edit(links, id)),
            Self::Activate(id) => ActionPlan::Confirm(Confirmation {
                action: self,
                prompt: "Activate this user? You will be redirected to the administration interface.",
                target: Navigation::to(links.change(id)),
            }),
            Self::Deactivate(id) => ActionPlan::Confirm(Confirmation {
                action: self,
                prompt: "Deactivate this user? You will be redirected to the administration interface.",
                target: Navigation::to(links.change(id)),
            }),
            Self::Delete(id) => ActionPlan::Confirm(Confirmation {
                action: self,
                prompt: "Delete this user? You will be redirected to the administration interface to confirm.",
                target: Navigation::to(links.delete(id)),
            }),
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            Self::Create => "➕ New user",
            Self::Edit(_) => "Edit",
            Self::Activate(_) => "Activate",
            Self::Deactivate(_) => "Deactivate",
            Self::Delete(_) => "Delete",
        }
    }

    pub fn tone(self) -> BadgeTone {
        match self {
            Self::Create | Self::Edit(_) => BadgeTone::Primary,
            Self::Activate(_) => BadgeTone::Success,
            Self::Deactivate(_) => BadgeTone::Secondary,
            Self::Delete(_) => BadgeTone::Danger,
        }
    }
}
