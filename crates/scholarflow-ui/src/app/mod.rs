//! Top-level Yew application.

use crate::components::page::ToastRequest;
use crate::components::shell::AppShell;
use crate::components::toast::ToastHost;
use crate::core::routing::{Page, RouteTable};
use crate::core::store::{AppStore, toggle_theme};
use crate::features::collaborators::view::CollaboratorsPage;
use crate::features::dashboard::view::DashboardPage;
use crate::features::discover::view::DiscoverPage;
use crate::features::library::view::LibraryPage;
use crate::features::profile::view::ProfilePage;
use crate::features::settings::view::SettingsPage;
use crate::features::upload::view::UploadPage;
use yew::prelude::*;
use yewdux::prelude::use_store;

pub(crate) mod browser;
mod router;

use router::use_path_router;

#[function_component(ScholarFlowApp)]
fn scholarflow_app() -> Html {
    let config = use_memo(|_| browser::load_config(), ());
    let routes = use_memo(|_| RouteTable::scholarflow(), ());
    let (store, dispatch) = use_store::<AppStore>();
    let router = use_path_router(routes.clone(), config.transition_ms);

    {
        let dispatch = dispatch.clone();
        let fallback = config.default_theme;
        use_effect_with_deps(
            move |_| {
                let theme = browser::initial_theme(fallback);
                dispatch.reduce_mut(|store| store.prefs.theme = theme);
                || ()
            },
            (),
        );
    }
    use_effect_with_deps(
        |theme| {
            browser::apply_theme(*theme);
            || ()
        },
        store.prefs.theme,
    );

    let on_toggle_theme: Callback<()> = dispatch.reduce_mut_callback(|store| {
        toggle_theme(&mut store.prefs);
    });
    let on_toggle_sidebar: Callback<()> = dispatch.reduce_mut_callback(|store| {
        store.prefs.sidebar_open = !store.prefs.sidebar_open;
    });
    let on_show_toast = dispatch.reduce_mut_callback_with(|store, (kind, message): ToastRequest| {
        store.toasts.push(kind, message);
    });
    let on_dismiss = dispatch.reduce_mut_callback_with(|store, id: u64| {
        store.toasts.dismiss(id);
    });
    let on_navigate = {
        let navigate = router.navigate.clone();
        let dispatch = dispatch.clone();
        Callback::from(move |path: String| {
            dispatch.reduce_mut(|store| store.prefs.sidebar_open = false);
            navigate.emit(path);
        })
    };

    let current = router.navigator.current();
    let page = render_page(current.page(), on_navigate.clone(), on_show_toast);
    let transition_class = if router.navigator.is_transitioning() {
        "page-enter"
    } else {
        "page-idle"
    };

    html! {
        <ContextProvider<crate::core::config::UiConfig> context={(*config).clone()}>
            <AppShell
                routes={routes.clone()}
                active={current.page()}
                title={AttrValue::from(current.entry.display_title().to_string())}
                requires_auth={current.entry.requires_auth}
                theme={store.prefs.theme}
                sidebar_open={store.prefs.sidebar_open}
                on_navigate={on_navigate}
                on_toggle_theme={on_toggle_theme}
                on_toggle_sidebar={on_toggle_sidebar}
            >
                <div key={current.path.clone()} class={classes!("page-transition", transition_class)}>
                    {page}
                </div>
            </AppShell>
            <ToastHost
                toasts={store.toasts.items().to_vec()}
                ttl_ms={config.toast_ttl_ms}
                on_dismiss={on_dismiss}
            />
        </ContextProvider<crate::core::config::UiConfig>>
    }
}

fn render_page(
    page: Page,
    on_navigate: Callback<String>,
    on_show_toast: Callback<ToastRequest>,
) -> Html {
    match page {
        Page::Dashboard => html! { <DashboardPage {on_navigate} {on_show_toast} /> },
        Page::Library => html! { <LibraryPage {on_navigate} {on_show_toast} /> },
        Page::Upload => html! { <UploadPage {on_navigate} {on_show_toast} /> },
        Page::Discover => html! { <DiscoverPage {on_navigate} {on_show_toast} /> },
        Page::Collaborators => html! { <CollaboratorsPage {on_navigate} {on_show_toast} /> },
        Page::Profile => html! { <ProfilePage {on_navigate} {on_show_toast} /> },
        Page::Settings => html! { <SettingsPage {on_navigate} {on_show_toast} /> },
    }
}

/// Entrypoint invoked by Trunk for wasm32 builds.
pub fn run_app() {
    console_error_panic_hook::set_once();
    if let Some(root) = gloo::utils::document().get_element_by_id("root") {
        yew::Renderer::<ScholarFlowApp>::with_root(root).render();
    } else {
        yew::Renderer::<ScholarFlowApp>::new().render();
    }
}
