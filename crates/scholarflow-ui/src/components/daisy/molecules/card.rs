//! Page panel with an optional header row and footer.
//!
//! The header row only renders when a title, subtitle, icon or header action is set.
//! `header_action` sits at the right of the title; `actions` is a footer row.

use yew::prelude::*;

#[derive(Properties, PartialEq)]
pub(crate) struct CardProps {
    #[prop_or_default]
    pub title: Option<AttrValue>,
    #[prop_or_default]
    pub subtitle: Option<AttrValue>,
    /// Lucide icon class shown before the title, e.g. `lucide--users`.
    #[prop_or_default]
    pub icon: Option<&'static str>,
    #[prop_or_default]
    pub header_action: Option<Html>,
    #[prop_or_default]
    pub actions: Option<Html>,
    #[prop_or_default]
    pub class: Classes,
    #[prop_or_default]
    pub children: Children,
}

#[function_component(Card)]
pub(crate) fn card(props: &CardProps) -> Html {
    let has_header = props.title.is_some()
        || props.subtitle.is_some()
        || props.icon.is_some()
        || props.header_action.is_some();

    let header = has_header.then(|| {
        html! {
            <header class="flex items-start gap-3 border-b border-base-200 px-6 py-4">
                if let Some(icon) = props.icon {
                    <span class={classes!("iconify", icon, "size-5", "mt-1", "text-primary")}></span>
                }
                <div class="min-w-0 flex-1">
                    if let Some(title) = props.title.clone() {
                        <h2 class="truncate text-base font-semibold">{title}</h2>
                    }
                    if let Some(subtitle) = props.subtitle.clone() {
                        <p class="text-sm text-base-content/60">{subtitle}</p>
                    }
                </div>
                if let Some(action) = props.header_action.clone() {
                    <div class="shrink-0">{action}</div>
                }
            </header>
        }
    });

    html! {
        <section class={classes!("card", "bg-base-100", "shadow-sm", props.class.clone())}>
            {header.unwrap_or_default()}
            <div class="card-body gap-4">
                { for props.children.iter() }
            </div>
            if let Some(actions) = props.actions.clone() {
                <footer class="card-actions justify-end border-t border-base-200 px-6 py-3">{actions}</footer>
            }
        </section>
    }
}
