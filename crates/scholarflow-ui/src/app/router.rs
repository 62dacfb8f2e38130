//! Browser-backed path router.
//!
//! # Design
//! - [`Navigator`] owns the current path and transition phase; this module only wires it
//!   to `history.pushState`, `popstate` and the document title.
//! - Pages request transitions through the returned `navigate` callback.

use std::rc::Rc;

use gloo::console;
use gloo::events::EventListener;
use gloo::utils::window;
use gloo_timers::callback::Timeout;
use yew::prelude::*;

use crate::app::browser;
use crate::core::navigation::{NavOutcome, Navigator};
use crate::core::routing::{Resolution, RouteTable, normalize_path};

#[derive(Clone, PartialEq)]
pub(crate) struct RouterState {
    navigator: Navigator,
}

pub(crate) enum RouterAction {
    Navigate(String),
    Settle,
}

impl Reducible for RouterState {
    type Action = RouterAction;

    fn reduce(self: Rc<Self>, action: Self::Action) -> Rc<Self> {
        let mut navigator = self.navigator.clone();
        let changed = match action {
            RouterAction::Navigate(path) => navigator.navigate(&path) == NavOutcome::Started,
            RouterAction::Settle => navigator.settle(),
        };
        if changed {
            Rc::new(Self { navigator })
        } else {
            self
        }
    }
}

/// Navigation state plus the callback pages use to change it.
pub(crate) struct PathRouter {
    pub navigator: Navigator,
    pub navigate: Callback<String>,
}

#[hook]
pub(crate) fn use_path_router(routes: Rc<RouteTable>, transition_ms: u32) -> PathRouter {
    let state = use_reducer(move || RouterState {
        navigator: Navigator::new(routes, &browser::location_path()),
    });
    let dispatcher = state.dispatcher();

    {
        let dispatcher = dispatcher.clone();
        use_effect_with_deps(
            move |_| {
                let listener = EventListener::new(&window(), "popstate", move |_| {
                    dispatcher.dispatch(RouterAction::Navigate(browser::location_path()));
                });
                move || drop(listener)
            },
            (),
        );
    }

    use_effect_with_deps(
        |current: &Resolution| {
            if let Some(notice) = current.fallback_notice() {
                console::warn!(notice);
            }
            || ()
        },
        state.navigator.current().clone(),
    );

    {
        let current = state.navigator.current().clone();
        let transitioning = state.navigator.is_transitioning();
        let dispatcher = dispatcher.clone();
        use_effect_with_deps(
            move |(current, transitioning)| {
                if normalize_path(&browser::location_path()) != current.path {
                    browser::push_history(&current.path);
                }
                browser::set_document_title(current.entry.display_title());
                let timer = if *transitioning {
                    if transition_ms == 0 {
                        dispatcher.dispatch(RouterAction::Settle);
                        None
                    } else {
                        Some(Timeout::new(transition_ms, move || {
                            dispatcher.dispatch(RouterAction::Settle);
                        }))
                    }
                } else {
                    None
                };
                move || drop(timer)
            },
            (current, transitioning),
        );
    }

    let navigate = Callback::from(move |path: String| {
        dispatcher.dispatch(RouterAction::Navigate(path));
    });

    PathRouter {
        navigator: state.navigator.clone(),
        navigate,
    }
}
