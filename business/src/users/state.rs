use campus_states::State;

use crate::users::admin::{ActionPlan, AdminAction, AdminLinks, AdminModal, Confirmation, Navigation};

/// UI-thread state of the users panel: the open modal or prompt, and the
/// navigation waiting to be executed by the app.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct UsersPanelState {
    pub modal: Option<AdminModal>,
    pub confirmation: Option<Confirmation>,
    pending_navigation: Option<Navigation>,
}

impl UsersPanelState {
    /// Starts `action`: opens the modal or the confirmation it plans for.
    pub fn begin(&mut self, action: AdminAction, links: &AdminLinks) {
        match action.plan(links) {
            ActionPlan::Modal(modal) => {
                self.confirmation = None;
                self.modal = Some(modal);
            }
            ActionPlan::Confirm(confirmation) => {
                self.modal = None;
                self.confirmation = Some(confirmation);
            }
        }
    }

    pub fn resolve_confirmation(&mut self, accepted: bool) {
        if let Some(confirmation) = self.confirmation.take()
            && let Some(navigation) = confirmation.resolve(accepted)
        {
            self.pending_navigation = Some(navigation);
        }
    }

    /// The modal's "Continue" link was followed.
    pub fn follow_modal_link(&mut self) {
        if let Some(modal) = self.modal.take() {
            self.pending_navigation = Some(modal.link);
        }
    }

    pub fn close_modal(&mut self) {
        self.modal = None;
    }

    pub fn pending_navigation(&self) -> Option<&Navigation> {
        self.pending_navigation.as_ref()
    }

    /// Hands the pending navigation to the caller, at most once.
    pub fn take_navigation(&mut self) -> Option<Navigation> {
        self.pending_navigation.take()
    }
}

impl State for UsersPanelState {}
