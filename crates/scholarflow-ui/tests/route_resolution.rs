use proptest::prelude::*;
use scholarflow_ui::core::routing::{MatchKind, Page, RouteEntry, RouteTable, parent_path};

fn segment_strategy() -> impl Strategy<Value = String> {
    proptest::string::string_regex("[a-z0-9-]{1,8}").expect("valid regex")
}

fn path_strategy() -> impl Strategy<Value = String> {
    proptest::collection::vec(segment_strategy(), 1..4)
        .prop_map(|segments| format!("/{}", segments.join("/")))
}

fn page_strategy() -> impl Strategy<Value = Page> {
    prop_oneof![
        Just(Page::Library),
        Just(Page::Upload),
        Just(Page::Discover),
        Just(Page::Collaborators),
        Just(Page::Profile),
        Just(Page::Settings),
    ]
}

fn entries_strategy() -> impl Strategy<Value = Vec<RouteEntry>> {
    proptest::collection::vec((path_strategy(), page_strategy(), any::<bool>()), 0..8).prop_map(
        |raw| {
            let mut entries = vec![RouteEntry::exact("/", Page::Dashboard)];
            for (path, page, exact) in raw {
                if entries.iter().any(|entry| entry.path == path) {
                    continue;
                }
                entries.push(if exact {
                    RouteEntry::exact(path, page)
                } else {
                    RouteEntry::prefix(path, page)
                });
            }
            entries
        },
    )
}

fn first_match<'a>(entries: &'a [RouteEntry], path: &str) -> Option<&'a RouteEntry> {
    entries.iter().find(|entry| {
        if entry.exact {
            entry.path == path
        } else {
            path.starts_with(entry.path.as_str())
        }
    })
}

proptest! {
    #[test]
    fn exact_routes_resolve_to_themselves_unless_shadowed(entries in entries_strategy()) {
        let table = RouteTable::new(entries.clone()).expect("generated table is valid");
        let shadowed: Vec<String> = table.shadowed().into_iter().map(|s| s.path).collect();
        for entry in entries.iter().filter(|entry| entry.exact) {
            if shadowed.contains(&entry.path) {
                continue;
            }
            let resolved = table.resolve(&entry.path);
            prop_assert_eq!(resolved.page(), entry.page);
            prop_assert_eq!(resolved.kind, MatchKind::Exact);
        }
    }

    #[test]
    fn prefix_routes_cover_their_extensions(
        entries in entries_strategy(),
        suffix in proptest::collection::vec(segment_strategy(), 0..3),
    ) {
        let table = RouteTable::new(entries.clone()).expect("generated table is valid");
        for entry in entries.iter().filter(|entry| !entry.exact) {
            let mut path = entry.path.clone();
            for segment in &suffix {
                path.push('/');
                path.push_str(segment);
            }
            let expected = first_match(&entries, &path).expect("prefix entry matches");
            let resolved = table.resolve(&path);
            prop_assert_eq!(&resolved.entry, expected);
            if expected.path == entry.path {
                prop_assert_eq!(resolved.page(), entry.page);
            }
        }
    }

    #[test]
    fn unmatched_paths_with_unmatched_parent_go_home(
        entries in entries_strategy(),
        path in path_strategy(),
    ) {
        let table = RouteTable::new(entries.clone()).expect("generated table is valid");
        let parent = parent_path(&path);
        prop_assume!(first_match(&entries, &path).is_none());
        prop_assume!(parent == path || first_match(&entries, &parent).is_none());
        let resolved = table.resolve(&path);
        prop_assert_eq!(resolved.page(), Page::Dashboard);
        prop_assert_eq!(resolved.kind, MatchKind::Home);
    }

    #[test]
    fn resolution_never_panics(raw in ".{0,40}") {
        let table = RouteTable::scholarflow();
        let resolved = table.resolve(&raw);
        prop_assert!(resolved.path.starts_with('/'));
    }
}

#[test]
fn earlier_overlapping_prefix_wins() {
    let table = RouteTable::new(vec![
        RouteEntry::exact("/", Page::Dashboard),
        RouteEntry::prefix("/papers", Page::Library),
        RouteEntry::prefix("/papers/upload", Page::Upload),
    ])
    .expect("valid table");
    assert_eq!(table.resolve("/papers/upload").page(), Page::Library);

    let reordered = RouteTable::new(vec![
        RouteEntry::exact("/", Page::Dashboard),
        RouteEntry::prefix("/papers/upload", Page::Upload),
        RouteEntry::prefix("/papers", Page::Library),
    ])
    .expect("valid table");
    assert_eq!(reordered.resolve("/papers/upload").page(), Page::Upload);
    assert_eq!(reordered.resolve("/papers/upload/draft").page(), Page::Upload);
}
