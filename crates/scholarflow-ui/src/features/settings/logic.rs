//! Team invitations and notification switches.
//!
//! # Design
//! - Emails are compared lowercased; the stored invitation keeps the lowercased form.
//! - Validation is a shape check only. Delivery would belong to a backend.

use thiserror::Error;
use uuid::Uuid;

use crate::core::store::TeamState;
use crate::models::{Invitation, NotificationSettings, TeamRole};

/// Reasons an invitation is refused.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum InviteError {
    /// Email does not look like `local@domain.tld`.
    #[error("invalid email address")]
    InvalidEmail {
        /// Rejected input.
        email: String,
    },
    /// A pending invitation already exists.
    #[error("invitation already pending")]
    AlreadyInvited {
        /// Invitee email.
        email: String,
    },
    /// The address belongs to a current member.
    #[error("address already belongs to a member")]
    AlreadyMember {
        /// Member email.
        email: String,
    },
    /// Ownership cannot be granted by invitation.
    #[error("role cannot be invited")]
    RoleNotInvitable {
        /// Requested role.
        role: TeamRole,
    },
}

impl InviteError {
    /// Toast copy for the failure.
    #[must_use]
    pub fn user_message(&self) -> String {
        match self {
            Self::InvalidEmail { .. } => "Enter a valid email address.".to_string(),
            Self::AlreadyInvited { email } => format!("{email} already has a pending invite."),
            Self::AlreadyMember { email } => format!("{email} is already on the team."),
            Self::RoleNotInvitable { role } => format!("{} cannot be invited.", role.as_str()),
        }
    }
}

/// Shape check for `local@domain.tld`.
#[must_use]
pub fn is_valid_email(email: &str) -> bool {
    let Some((local, domain)) = email.split_once('@') else {
        return false;
    };
    !local.is_empty()
        && !domain.contains('@')
        && !email.chars().any(char::is_whitespace)
        && domain
            .split_once('.')
            .is_some_and(|(host, tld)| !host.is_empty() && !tld.is_empty())
        && !domain.ends_with('.')
}

/// Adds a pending invitation.
///
/// # Errors
///
/// Returns [`InviteError`] when the email is malformed, already invited, already a
/// member, or the role is [`TeamRole::Owner`].
pub fn invite(team: &mut TeamState, email: &str, role: TeamRole) -> Result<Invitation, InviteError> {
    let email = email.trim().to_lowercase();
    if !is_valid_email(&email) {
        return Err(InviteError::InvalidEmail { email });
    }
    if !TeamRole::invitable().contains(&role) {
        return Err(InviteError::RoleNotInvitable { role });
    }
    if team
        .members
        .iter()
        .any(|member| member.email.eq_ignore_ascii_case(&email))
    {
        return Err(InviteError::AlreadyMember { email });
    }
    if team.invitations.iter().any(|invite| invite.email == email) {
        return Err(InviteError::AlreadyInvited { email });
    }
    let invitation = Invitation {
        id: Uuid::new_v4(),
        email,
        role,
    };
    team.invitations.push(invitation.clone());
    Ok(invitation)
}

/// Removes a pending invitation, returning it when found.
pub fn revoke(team: &mut TeamState, id: Uuid) -> Option<Invitation> {
    let index = team.invitations.iter().position(|invite| invite.id == id)?;
    Some(team.invitations.remove(index))
}

/// Notification switches on the settings page.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum NotificationKind {
    /// Weekly digest.
    EmailDigest,
    /// Citation alerts.
    NewCitations,
    /// Collaborator activity.
    CollaboratorActivity,
    /// Product announcements.
    ProductUpdates,
}

impl NotificationKind {
    /// All switches in display order.
    #[must_use]
    pub const fn all() -> [Self; 4] {
        [
            Self::EmailDigest,
            Self::NewCitations,
            Self::CollaboratorActivity,
            Self::ProductUpdates,
        ]
    }

    /// Switch label.
    #[must_use]
    pub const fn label(self) -> &'static str {
        match self {
            Self::EmailDigest => "Weekly email digest",
            Self::NewCitations => "New citations of my papers",
            Self::CollaboratorActivity => "Collaborator activity",
            Self::ProductUpdates => "Product updates",
        }
    }

    /// Current value.
    #[must_use]
    pub const fn get(self, settings: &NotificationSettings) -> bool {
        match self {
            Self::EmailDigest => settings.email_digest,
            Self::NewCitations => settings.new_citations,
            Self::CollaboratorActivity => settings.collaborator_activity,
            Self::ProductUpdates => settings.product_updates,
        }
    }

    /// Stores a new value.
    pub fn set(self, settings: &mut NotificationSettings, value: bool) {
        match self {
            Self::EmailDigest => settings.email_digest = value,
            Self::NewCitations => settings.new_citations = value,
            Self::CollaboratorActivity => settings.collaborator_activity = value,
            Self::ProductUpdates => settings.product_updates = value,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::store::AppStore;

    fn team() -> TeamState {
        AppStore::default().team
    }

    #[test]
    fn email_shape_check() {
        assert!(is_valid_email("a@b.co"));
        assert!(!is_valid_email("a@b"));
        assert!(!is_valid_email("@b.co"));
        assert!(!is_valid_email("a@@b.co"));
        assert!(!is_valid_email("a b@c.io"));
        assert!(!is_valid_email("a@.io"));
        assert!(!is_valid_email("a@b.io."));
    }

    #[test]
    fn invite_normalises_and_rejects_duplicates() {
        let mut team = team();
        let pending = invite(&mut team, " New.Person@Lab.org ", TeamRole::Member).unwrap();
        assert_eq!(pending.email, "new.person@lab.org");
        assert_eq!(
            invite(&mut team, "new.person@lab.org", TeamRole::Viewer),
            Err(InviteError::AlreadyInvited {
                email: "new.person@lab.org".into()
            })
        );
        assert_eq!(team.invitations.len(), 1);
    }

    #[test]
    fn invite_rejects_members_and_owner_role() {
        let mut team = team();
        assert_eq!(
            invite(&mut team, "SAM.RIVERA@stanford.edu", TeamRole::Member),
            Err(InviteError::AlreadyMember {
                email: "sam.rivera@stanford.edu".into()
            })
        );
        assert_eq!(
            invite(&mut team, "x@y.io", TeamRole::Owner),
            Err(InviteError::RoleNotInvitable {
                role: TeamRole::Owner
            })
        );
        assert!(matches!(
            invite(&mut team, "nope", TeamRole::Member),
            Err(InviteError::InvalidEmail { .. })
        ));
    }

    #[test]
    fn revoke_removes_only_matching_invite() {
        let mut team = team();
        let first = invite(&mut team, "a@b.io", TeamRole::Member).unwrap();
        invite(&mut team, "c@d.io", TeamRole::Viewer).unwrap();
        assert_eq!(revoke(&mut team, first.id), Some(first));
        assert_eq!(revoke(&mut team, Uuid::nil()), None);
        assert_eq!(team.invitations.len(), 1);
    }

    #[test]
    fn notification_switches_round_trip() {
        let mut settings = NotificationSettings::default();
        for kind in NotificationKind::all() {
            let before = kind.get(&settings);
            kind.set(&mut settings, !before);
            assert_eq!(kind.get(&settings), !before);
        }
    }
}
