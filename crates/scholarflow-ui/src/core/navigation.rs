//! Router navigation state machine.
//!
//! `Idle(current)` moves to `Transitioning { from }` on [`Navigator::navigate`] and back
//! to idle on [`Navigator::settle`]. The transition only drives the enter/exit
//! animation; the new page is current as soon as navigation starts.

use std::rc::Rc;

use tracing::debug;

use crate::core::routing::{Resolution, RouteTable};

/// Animation phase of the router.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum NavPhase {
    /// Showing the current page.
    Idle,
    /// Exit/enter animation from the previous path is running.
    Transitioning {
        /// Path that was current before the transition started.
        from: String,
    },
}

/// Result of a navigation request.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum NavOutcome {
    /// The requested path is already current.
    Unchanged,
    /// The current path changed and a transition started.
    Started,
}

/// Current path plus transition phase, owned by the top-level router.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Navigator {
    routes: Rc<RouteTable>,
    current: Resolution,
    phase: NavPhase,
}

impl Navigator {
    /// Starts idle on the resolution of `initial_path`.
    #[must_use]
    pub fn new(routes: Rc<RouteTable>, initial_path: &str) -> Self {
        let current = routes.resolve(initial_path);
        Self {
            routes,
            current,
            phase: NavPhase::Idle,
        }
    }

    /// Resolution of the current path.
    #[must_use]
    pub const fn current(&self) -> &Resolution {
        &self.current
    }

    /// Current animation phase.
    #[must_use]
    pub const fn phase(&self) -> &NavPhase {
        &self.phase
    }

    /// True while the enter/exit animation runs.
    #[must_use]
    pub const fn is_transitioning(&self) -> bool {
        matches!(self.phase, NavPhase::Transitioning { .. })
    }

    /// Replaces the current path. A request issued mid-transition retargets it.
    pub fn navigate(&mut self, path: &str) -> NavOutcome {
        let next = self.routes.resolve(path);
        if next.path == self.current.path {
            return NavOutcome::Unchanged;
        }
        debug!(from = %self.current.path, to = %next.path, page = ?next.page(), "navigate");
        let from = std::mem::replace(&mut self.current, next).path;
        self.phase = NavPhase::Transitioning { from };
        NavOutcome::Started
    }

    /// Ends the running transition. Returns `false` when already idle.
    pub fn settle(&mut self) -> bool {
        if self.is_transitioning() {
            self.phase = NavPhase::Idle;
            true
        } else {
            false
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::routing::Page;

    fn navigator(path: &str) -> Navigator {
        Navigator::new(Rc::new(RouteTable::scholarflow()), path)
    }

    #[test]
    fn starts_idle_on_initial_path() {
        let nav = navigator("/discover/ml");
        assert_eq!(nav.current().page(), Page::Discover);
        assert_eq!(nav.phase(), &NavPhase::Idle);
    }

    #[test]
    fn navigate_transitions_then_settles() {
        let mut nav = navigator("/");
        assert_eq!(nav.navigate("/papers"), NavOutcome::Started);
        assert_eq!(nav.current().page(), Page::Library);
        assert_eq!(
            nav.phase(),
            &NavPhase::Transitioning { from: "/".into() }
        );
        assert!(nav.settle());
        assert_eq!(nav.phase(), &NavPhase::Idle);
        assert!(!nav.settle());
    }

    #[test]
    fn navigating_to_current_path_is_a_no_op() {
        let mut nav = navigator("/settings");
        assert_eq!(nav.navigate("/settings/"), NavOutcome::Unchanged);
        assert!(!nav.is_transitioning());
    }

    #[test]
    fn navigate_mid_transition_retargets() {
        let mut nav = navigator("/");
        nav.navigate("/papers");
        nav.navigate("/profile");
        assert_eq!(nav.current().page(), Page::Profile);
        assert_eq!(
            nav.phase(),
            &NavPhase::Transitioning {
                from: "/papers".into()
            }
        );
    }

    #[test]
    fn unknown_paths_land_on_home_without_error() {
        let mut nav = navigator("/papers");
        assert_eq!(nav.navigate("/typo/path"), NavOutcome::Started);
        assert_eq!(nav.current().page(), Page::Dashboard);
        assert_eq!(nav.current().path, "/typo/path");
    }
}
