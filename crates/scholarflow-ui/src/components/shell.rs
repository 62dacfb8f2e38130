//! Application frame: sidebar navigation, top bar and page slot.

use crate::components::daisy::{Badge, DaisyColor, DaisyVariant};
use crate::core::routing::{Page, RouteTable};
use crate::core::theme::ThemeMode;
use std::rc::Rc;
use yew::prelude::*;

#[derive(Properties, PartialEq)]
pub(crate) struct ShellProps {
    pub children: Children,
    pub routes: Rc<RouteTable>,
    pub active: Page,
    pub title: AttrValue,
    pub requires_auth: bool,
    pub theme: ThemeMode,
    pub sidebar_open: bool,
    pub on_navigate: Callback<String>,
    pub on_toggle_theme: Callback<()>,
    pub on_toggle_sidebar: Callback<()>,
}

#[function_component(AppShell)]
pub(crate) fn app_shell(props: &ShellProps) -> Html {
    let toggle_sidebar = {
        let cb = props.on_toggle_sidebar.clone();
        Callback::from(move |_: MouseEvent| cb.emit(()))
    };
    let toggle_theme = {
        let cb = props.on_toggle_theme.clone();
        Callback::from(move |_: MouseEvent| cb.emit(()))
    };
    let theme_icon = if props.theme.is_dark() {
        "lucide--sun"
    } else {
        "lucide--moon"
    };

    html! {
        <div class={classes!("app-shell", props.sidebar_open.then_some("sidebar-open"))}>
            <aside class="app-sidebar bg-base-100 shadow-sm">
                <div class="brand flex items-center gap-2 px-4 py-5">
                    <span class="iconify lucide--book-open-text size-6 text-primary"></span>
                    <strong class="text-lg">{"ScholarFlow"}</strong>
                    <button class="btn btn-ghost btn-sm mobile-only ml-auto" onclick={toggle_sidebar.clone()} aria-label="Close navigation">
                        <span class="iconify lucide--x size-4"></span>
                    </button>
                </div>
                <nav class="menu w-full">
                    {for Page::all().into_iter().filter_map(|page| {
                        props.routes.path_for(page).map(|path| {
                            nav_item(page, path, props.active, &props.on_navigate)
                        })
                    })}
                </nav>
            </aside>
            <div class="flex min-w-0 flex-col">
                <header class="topbar navbar bg-base-100 shadow-sm px-4 gap-2">
                    <button class="btn btn-ghost btn-sm mobile-only" aria-label="Open navigation" onclick={toggle_sidebar}>
                        <span class="iconify lucide--menu size-5"></span>
                    </button>
                    <h1 class="text-xl font-semibold flex-1">{props.title.clone()}</h1>
                    {props.requires_auth.then(|| html! {
                        <Badge tone={DaisyColor::Info} variant={DaisyVariant::Soft}>{"Signed in"}</Badge>
                    }).unwrap_or_default()}
                    <button class="btn btn-ghost btn-circle btn-sm" onclick={toggle_theme} aria-label="Toggle theme">
                        <span class={classes!("iconify", theme_icon, "size-5")}></span>
                    </button>
                </header>
                <main class="p-6">
                    {for props.children.iter()}
                </main>
            </div>
        </div>
    }
}

fn nav_item(page: Page, path: &str, active: Page, on_navigate: &Callback<String>) -> Html {
    let onclick = {
        let on_navigate = on_navigate.clone();
        let path = path.to_string();
        Callback::from(move |event: MouseEvent| {
            event.prevent_default();
            on_navigate.emit(path.clone());
        })
    };
    html! {
        <li>
            <a
                href={path.to_string()}
                class={classes!("nav-link", (active == page).then_some("menu-active active"))}
                aria-current={(active == page).then_some("page")}
                onclick={onclick}
            >
                <span class={classes!("iconify", page.icon(), "size-4")}></span>
                {page.label()}
            </a>
        </li>
    }
}
