//! Path-to-page resolution for the ScholarFlow shell.
//!
//! # Design
//! - Entries are matched in declaration order and the first hit wins; tables are never re-sorted.
//! - Exact entries compare for equality, all others match as plain string prefixes.
//! - An unmatched path is retried once with its parent segment before falling back to home.
//! - Resolution never fails. Fallbacks are logged so mistyped links stay visible.

use std::collections::HashSet;

use thiserror::Error;
use tracing::warn;

/// Home path every route table must declare.
pub const HOME_PATH: &str = "/";

/// Screens the shell can render.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Page {
    /// Library overview and reading progress.
    Dashboard,
    /// Paper library with search, tags and bookmarks.
    Library,
    /// PDF upload flow.
    Upload,
    /// Recommendations and trending topics.
    Discover,
    /// Co-authors and followed researchers.
    Collaborators,
    /// Researcher profile editor.
    Profile,
    /// Appearance, notifications and team settings.
    Settings,
}

impl Page {
    /// Pages in sidebar order.
    #[must_use]
    pub const fn all() -> [Self; 7] {
        [
            Self::Dashboard,
            Self::Library,
            Self::Upload,
            Self::Discover,
            Self::Collaborators,
            Self::Profile,
            Self::Settings,
        ]
    }

    /// Sidebar label.
    #[must_use]
    pub const fn label(self) -> &'static str {
        match self {
            Self::Dashboard => "Dashboard",
            Self::Library => "My Papers",
            Self::Upload => "Upload",
            Self::Discover => "Discover",
            Self::Collaborators => "Collaborators",
            Self::Profile => "Profile",
            Self::Settings => "Settings",
        }
    }

    /// Lucide icon class used in navigation.
    #[must_use]
    pub const fn icon(self) -> &'static str {
        match self {
            Self::Dashboard => "lucide--layout-dashboard",
            Self::Library => "lucide--library",
            Self::Upload => "lucide--upload",
            Self::Discover => "lucide--compass",
            Self::Collaborators => "lucide--users",
            Self::Profile => "lucide--user",
            Self::Settings => "lucide--settings",
        }
    }
}

/// A declared mapping from a path (or path prefix) to a page.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct RouteEntry {
    /// Absolute path, starting with `/`.
    pub path: String,
    /// Page rendered when the entry matches.
    pub page: Page,
    /// Compare for equality instead of prefix.
    pub exact: bool,
    /// Page expects a signed-in researcher.
    pub requires_auth: bool,
    /// Document title shown while the page is active.
    pub title: Option<String>,
}

impl RouteEntry {
    /// Entry that only matches its own path.
    #[must_use]
    pub fn exact(path: impl Into<String>, page: Page) -> Self {
        Self {
            path: path.into(),
            page,
            exact: true,
            requires_auth: false,
            title: None,
        }
    }

    /// Entry that matches every path beginning with its path.
    #[must_use]
    pub fn prefix(path: impl Into<String>, page: Page) -> Self {
        Self {
            exact: false,
            ..Self::exact(path, page)
        }
    }

    /// Sets the document title.
    #[must_use]
    pub fn titled(mut self, title: impl Into<String>) -> Self {
        self.title = Some(title.into());
        self
    }

    /// Marks the entry as requiring a signed-in researcher.
    #[must_use]
    pub const fn authenticated(mut self) -> Self {
        self.requires_auth = true;
        self
    }

    /// Title to display, defaulting to the page label.
    #[must_use]
    pub fn display_title(&self) -> &str {
        self.title.as_deref().unwrap_or_else(|| self.page.label())
    }

    fn matches(&self, path: &str) -> bool {
        if self.exact {
            path == self.path
        } else {
            path.starts_with(self.path.as_str())
        }
    }
}

/// Errors raised while building a route table.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum RouteTableError {
    /// Path is empty or not absolute.
    #[error("route path must start with '/'")]
    InvalidPath {
        /// Offending path.
        path: String,
    },
    /// Path was declared more than once.
    #[error("route path declared twice")]
    DuplicatePath {
        /// Repeated path.
        path: String,
    },
    /// No entry is declared for `/`.
    #[error("route table has no home entry")]
    MissingHome,
}

/// How a resolution was reached.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum MatchKind {
    /// An exact entry equals the path.
    Exact,
    /// A prefix entry begins the path.
    Prefix,
    /// The path's parent segment matched.
    Parent,
    /// Nothing matched; home was used.
    Home,
}

/// Outcome of resolving a path against a table.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Resolution {
    /// Normalised path that was requested.
    pub path: String,
    /// Entry whose page is rendered.
    pub entry: RouteEntry,
    /// How the entry was selected.
    pub kind: MatchKind,
}

impl Resolution {
    /// Page to render.
    #[must_use]
    pub const fn page(&self) -> Page {
        self.entry.page
    }

    /// True when no entry matched the requested path itself.
    #[must_use]
    pub fn is_fallback(&self) -> bool {
        matches!(self.kind, MatchKind::Parent | MatchKind::Home)
    }

    /// Console message for a fallback resolution, `None` when the path itself matched.
    #[must_use]
    pub fn fallback_notice(&self) -> Option<String> {
        if !self.is_fallback() {
            return None;
        }
        let shown = if self.kind == MatchKind::Parent {
            format!("parent route {}", self.entry.path)
        } else {
            "home".to_string()
        };
        Some(format!("no route for {}, showing {shown}", self.path))
    }
}

/// An entry that can never be selected because an earlier prefix entry covers it.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ShadowedEntry {
    /// Path of the unreachable entry.
    pub path: String,
    /// Path of the earlier prefix entry that wins.
    pub shadowed_by: String,
}

/// Ordered, validated route table.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct RouteTable {
    entries: Vec<RouteEntry>,
    home: usize,
}

impl RouteTable {
    /// Validates and builds a table, keeping declaration order.
    ///
    /// # Errors
    ///
    /// Returns [`RouteTableError`] when a path is not absolute, a path repeats, or
    /// no entry is declared for `/`.
    pub fn new(entries: Vec<RouteEntry>) -> Result<Self, RouteTableError> {
        let mut seen = HashSet::with_capacity(entries.len());
        for entry in &entries {
            if !entry.path.starts_with('/') {
                return Err(RouteTableError::InvalidPath {
                    path: entry.path.clone(),
                });
            }
            if !seen.insert(entry.path.as_str()) {
                return Err(RouteTableError::DuplicatePath {
                    path: entry.path.clone(),
                });
            }
        }
        let home = entries
            .iter()
            .position(|entry| entry.path == HOME_PATH)
            .ok_or(RouteTableError::MissingHome)?;
        let table = Self { entries, home };
        for shadowed in table.shadowed() {
            warn!(
                path = %shadowed.path,
                shadowed_by = %shadowed.shadowed_by,
                "route entry is unreachable"
            );
        }
        Ok(table)
    }

    /// The ScholarFlow application routes.
    #[must_use]
    pub fn scholarflow() -> Self {
        Self {
            entries: vec![
                RouteEntry::exact("/", Page::Dashboard).titled("Dashboard"),
                RouteEntry::prefix("/papers", Page::Library)
                    .titled("My Papers")
                    .authenticated(),
                RouteEntry::exact("/upload", Page::Upload)
                    .titled("Upload Paper")
                    .authenticated(),
                RouteEntry::prefix("/discover", Page::Discover).titled("Discover"),
                RouteEntry::prefix("/collaborators", Page::Collaborators)
                    .titled("Collaborators")
                    .authenticated(),
                RouteEntry::exact("/profile", Page::Profile)
                    .titled("Profile")
                    .authenticated(),
                RouteEntry::prefix("/settings", Page::Settings)
                    .titled("Settings")
                    .authenticated(),
            ],
            home: 0,
        }
    }

    /// Entries in declaration order.
    #[must_use]
    pub fn entries(&self) -> &[RouteEntry] {
        &self.entries
    }

    /// Entry rendered when nothing else matches.
    #[must_use]
    pub fn home(&self) -> &RouteEntry {
        &self.entries[self.home]
    }

    /// First declared path for a page, used to build navigation links.
    #[must_use]
    pub fn path_for(&self, page: Page) -> Option<&str> {
        self.entries
            .iter()
            .find(|entry| entry.page == page)
            .map(|entry| entry.path.as_str())
    }

    /// Entries that an earlier prefix entry makes unreachable.
    #[must_use]
    pub fn shadowed(&self) -> Vec<ShadowedEntry> {
        let mut shadowed = Vec::new();
        for (index, entry) in self.entries.iter().enumerate() {
            let winner = self.entries[..index]
                .iter()
                .find(|earlier| !earlier.exact && entry.path.starts_with(earlier.path.as_str()));
            if let Some(winner) = winner {
                shadowed.push(ShadowedEntry {
                    path: entry.path.clone(),
                    shadowed_by: winner.path.clone(),
                });
            }
        }
        shadowed
    }

    /// Resolves a path to the page that should render it.
    #[must_use]
    pub fn resolve(&self, path: &str) -> Resolution {
        let normalized = normalize_path(path);
        if let Some(entry) = self.first_match(&normalized) {
            let kind = if entry.exact {
                MatchKind::Exact
            } else {
                MatchKind::Prefix
            };
            return Resolution {
                path: normalized,
                entry: entry.clone(),
                kind,
            };
        }

        let parent = parent_path(&normalized);
        if parent != normalized {
            if let Some(entry) = self.first_match(&parent) {
                warn!(path = %normalized, parent = %parent, "no route matched, using parent route");
                return Resolution {
                    path: normalized,
                    entry: entry.clone(),
                    kind: MatchKind::Parent,
                };
            }
        }

        warn!(path = %normalized, "no route matched, falling back to home");
        Resolution {
            path: normalized,
            entry: self.home().clone(),
            kind: MatchKind::Home,
        }
    }

    fn first_match(&self, path: &str) -> Option<&RouteEntry> {
        self.entries.iter().find(|entry| entry.matches(path))
    }
}

/// Drops query and fragment, forces a leading `/` and trims trailing slashes.
#[must_use]
pub fn normalize_path(path: &str) -> String {
    let end = path.find(['?', '#']).unwrap_or(path.len());
    let trimmed = path[..end].trim_end_matches('/');
    if trimmed.is_empty() {
        HOME_PATH.to_string()
    } else if trimmed.starts_with('/') {
        trimmed.to_string()
    } else {
        format!("/{trimmed}")
    }
}

/// Removes the last `/segment`; the parent of `/` is `/`.
#[must_use]
pub fn parent_path(path: &str) -> String {
    let normalized = normalize_path(path);
    match normalized.rfind('/') {
        Some(0) | None => HOME_PATH.to_string(),
        Some(index) => normalized[..index].to_string(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn table(entries: Vec<RouteEntry>) -> RouteTable {
        RouteTable::new(entries).expect("valid table")
    }

    #[test]
    fn scholarflow_table_is_valid_and_unshadowed() {
        let builtin = RouteTable::scholarflow();
        let rebuilt = RouteTable::new(builtin.entries().to_vec()).expect("valid table");
        assert_eq!(rebuilt, builtin);
        assert!(builtin.shadowed().is_empty());
        for page in Page::all() {
            assert!(builtin.path_for(page).is_some(), "{page:?} has no route");
        }
    }

    #[test]
    fn exact_and_prefix_entries_resolve() {
        let routes = RouteTable::scholarflow();
        let upload = routes.resolve("/upload");
        assert_eq!(upload.page(), Page::Upload);
        assert_eq!(upload.kind, MatchKind::Exact);

        let detail = routes.resolve("/papers/42");
        assert_eq!(detail.page(), Page::Library);
        assert_eq!(detail.kind, MatchKind::Prefix);
        assert!(detail.entry.requires_auth);
    }

    #[test]
    fn unmatched_child_of_exact_entry_uses_parent() {
        let routes = RouteTable::scholarflow();
        let resolved = routes.resolve("/profile/edit");
        assert_eq!(resolved.page(), Page::Profile);
        assert_eq!(resolved.kind, MatchKind::Parent);
        assert_eq!(resolved.path, "/profile/edit");
    }

    #[test]
    fn unknown_paths_fall_back_to_home() {
        let routes = RouteTable::scholarflow();
        let resolved = routes.resolve("/nope/deeper");
        assert_eq!(resolved.page(), Page::Dashboard);
        assert_eq!(resolved.kind, MatchKind::Home);
        assert!(resolved.is_fallback());
    }

    #[test]
    fn fallback_resolutions_carry_a_console_notice() {
        let routes = RouteTable::scholarflow();
        assert_eq!(
            routes.resolve("/typo/deep").fallback_notice().as_deref(),
            Some("no route for /typo/deep, showing home")
        );
        assert_eq!(
            routes.resolve("/profile/edit").fallback_notice().as_deref(),
            Some("no route for /profile/edit, showing parent route /profile")
        );
        assert_eq!(routes.resolve("/papers/42").fallback_notice(), None);
        assert_eq!(routes.resolve("/upload").fallback_notice(), None);
    }

    #[test]
    fn first_declared_prefix_wins() {
        let routes = table(vec![
            RouteEntry::exact("/", Page::Dashboard),
            RouteEntry::prefix("/papers", Page::Library),
            RouteEntry::prefix("/papers/upload", Page::Upload),
        ]);
        assert_eq!(routes.resolve("/papers/upload").page(), Page::Library);
        assert_eq!(
            routes.shadowed(),
            vec![ShadowedEntry {
                path: "/papers/upload".into(),
                shadowed_by: "/papers".into(),
            }]
        );
    }

    #[test]
    fn specific_entry_declared_first_wins() {
        let routes = table(vec![
            RouteEntry::exact("/", Page::Dashboard),
            RouteEntry::exact("/papers/upload", Page::Upload),
            RouteEntry::prefix("/papers", Page::Library),
        ]);
        assert_eq!(routes.resolve("/papers/upload").page(), Page::Upload);
        assert_eq!(routes.resolve("/papers/7").page(), Page::Library);
        assert!(routes.shadowed().is_empty());
    }

    #[test]
    fn prefix_match_is_plain_string_prefix() {
        let routes = RouteTable::scholarflow();
        assert_eq!(routes.resolve("/papersmith").page(), Page::Library);
    }

    #[test]
    fn normalisation_strips_query_fragment_and_trailing_slash() {
        assert_eq!(normalize_path(""), "/");
        assert_eq!(normalize_path("/"), "/");
        assert_eq!(normalize_path("///"), "/");
        assert_eq!(normalize_path("/upload/"), "/upload");
        assert_eq!(normalize_path("/upload?draft=1#top"), "/upload");
        assert_eq!(normalize_path("settings/team"), "/settings/team");
        let routes = RouteTable::scholarflow();
        assert_eq!(routes.resolve("/upload/?x=1").kind, MatchKind::Exact);
    }

    #[test]
    fn parent_path_drops_last_segment() {
        assert_eq!(parent_path("/a/b/c"), "/a/b");
        assert_eq!(parent_path("/a"), "/");
        assert_eq!(parent_path("/"), "/");
    }

    #[test]
    fn table_validation_rejects_bad_declarations() {
        assert_eq!(
            RouteTable::new(vec![RouteEntry::exact("papers", Page::Library)]),
            Err(RouteTableError::InvalidPath {
                path: "papers".into()
            })
        );
        assert_eq!(
            RouteTable::new(vec![
                RouteEntry::exact("/", Page::Dashboard),
                RouteEntry::exact("/", Page::Library),
            ]),
            Err(RouteTableError::DuplicatePath { path: "/".into() })
        );
        assert_eq!(
            RouteTable::new(vec![RouteEntry::prefix("/papers", Page::Library)]),
            Err(RouteTableError::MissingHome)
        );
    }

    #[test]
    fn display_title_defaults_to_page_label() {
        let entry = RouteEntry::exact("/", Page::Dashboard);
        assert_eq!(entry.display_title(), "Dashboard");
        assert_eq!(entry.titled("Home").display_title(), "Home");
    }
}
