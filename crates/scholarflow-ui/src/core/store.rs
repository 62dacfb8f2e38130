//! App-wide yewdux store slices.
//!
//! # Design
//! - Keep shared UI state in one store instead of ambient globals.
//! - Use small, focused slices so reducers stay predictable.
//! - Slices are seeded from demo records and reset on reload.

use yewdux::store::Store;

use crate::core::theme::ThemeMode;
use crate::models::{
    Collaborator, Invitation, NotificationSettings, Paper, Profile, Recommendation, TeamMember,
    Toast, ToastKind, TrendingTopic, demo_collaborators, demo_papers, demo_profile,
    demo_recommendations, demo_team, demo_trending,
};

/// Global application store for shared state.
#[derive(Clone, Debug, PartialEq, Eq, Store)]
pub struct AppStore {
    /// Shell preferences.
    pub prefs: Preferences,
    /// Paper library.
    pub library: Vec<Paper>,
    /// Discover page data.
    pub discover: DiscoverState,
    /// Collaborator list.
    pub collaborators: Vec<Collaborator>,
    /// Researcher profile.
    pub profile: Profile,
    /// Workspace members, invitations and notifications.
    pub team: TeamState,
    /// Visible toasts.
    pub toasts: ToastQueue,
}

impl Default for AppStore {
    fn default() -> Self {
        Self {
            prefs: Preferences::default(),
            library: demo_papers(),
            discover: DiscoverState {
                recommendations: demo_recommendations(),
                trending: demo_trending(),
            },
            collaborators: demo_collaborators(),
            profile: demo_profile(),
            team: TeamState {
                members: demo_team(),
                invitations: Vec::new(),
                notifications: NotificationSettings::default(),
            },
            toasts: ToastQueue::default(),
        }
    }
}

/// Shell preferences that used to live in globals.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct Preferences {
    /// Active theme.
    pub theme: ThemeMode,
    /// Sidebar expanded on narrow screens.
    pub sidebar_open: bool,
}

/// Discover page slice.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct DiscoverState {
    /// Suggested papers.
    pub recommendations: Vec<Recommendation>,
    /// Topics gaining attention.
    pub trending: Vec<TrendingTopic>,
}

/// Team settings slice.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct TeamState {
    /// Current members.
    pub members: Vec<TeamMember>,
    /// Pending invitations.
    pub invitations: Vec<Invitation>,
    /// Notification switches.
    pub notifications: NotificationSettings,
}

/// Ordered toasts with monotonically increasing ids.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct ToastQueue {
    next_id: u64,
    items: Vec<Toast>,
}

impl ToastQueue {
    /// Appends a toast and returns its id.
    pub fn push(&mut self, kind: ToastKind, message: impl Into<String>) -> u64 {
        self.next_id += 1;
        let id = self.next_id;
        self.items.push(Toast {
            id,
            message: message.into(),
            kind,
        });
        id
    }

    /// Removes a toast. Unknown ids are ignored.
    pub fn dismiss(&mut self, id: u64) {
        self.items.retain(|toast| toast.id != id);
    }

    /// Visible toasts, oldest first.
    #[must_use]
    pub fn items(&self) -> &[Toast] {
        &self.items
    }
}

/// Flips the theme and returns the new mode.
pub fn toggle_theme(prefs: &mut Preferences) -> ThemeMode {
    prefs.theme = prefs.theme.toggled();
    prefs.theme
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_store_is_seeded() {
        let store = AppStore::default();
        assert!(!store.library.is_empty());
        assert!(!store.discover.recommendations.is_empty());
        assert!(store.team.invitations.is_empty());
        assert!(store.toasts.items().is_empty());
        assert!(!store.prefs.sidebar_open);
    }

    #[test]
    fn toast_ids_increase_and_dismiss_removes() {
        let mut queue = ToastQueue::default();
        let first = queue.push(ToastKind::Info, "one");
        let second = queue.push(ToastKind::Error, "two");
        assert!(second > first);
        queue.dismiss(first);
        queue.dismiss(999);
        assert_eq!(queue.items().len(), 1);
        assert_eq!(queue.items()[0].message, "two");
    }

    #[test]
    fn theme_toggle_updates_preferences() {
        let mut prefs = Preferences::default();
        assert_eq!(toggle_theme(&mut prefs), ThemeMode::Dark);
        assert_eq!(prefs.theme, ThemeMode::Dark);
    }
}
