//! Steps of the friends screen: suggestions, then contacts, then invites.

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum InviteStep {
    #[default]
    Main,
    Contacts,
    Invite,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum InviteAction {
    /// Ask for contacts access before leaving the main step.
    ShowContactsPermission,
    Advance(InviteStep),
    /// Leave the screen.
    Finish,
}

impl InviteStep {
    /// Outcome of pressing the primary invite button on this step.
    pub fn on_invite(self) -> InviteAction {
        match self {
            InviteStep::Main => InviteAction::ShowContactsPermission,
            InviteStep::Contacts => InviteAction::Advance(InviteStep::Invite),
            InviteStep::Invite => InviteAction::Finish,
        }
    }

    pub fn after_contacts_allowed() -> InviteStep {
        InviteStep::Contacts
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn walks_main_contacts_invite_finish() {
        let mut step = InviteStep::default();
        assert_eq!(step.on_invite(), InviteAction::ShowContactsPermission);
        step = InviteStep::after_contacts_allowed();
        assert_eq!(step.on_invite(), InviteAction::Advance(InviteStep::Invite));
        step = InviteStep::Invite;
        assert_eq!(step.on_invite(), InviteAction::Finish);
    }
}
