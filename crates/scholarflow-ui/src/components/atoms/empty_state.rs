//! Empty state panel for list-like views.

use yew::prelude::*;

#[derive(Properties, PartialEq)]
pub(crate) struct EmptyStateProps {
    pub title: AttrValue,
    #[prop_or_default]
    pub description: Option<AttrValue>,
    #[prop_or_default]
    pub children: Children,
}

#[function_component(EmptyState)]
pub(crate) fn empty_state(props: &EmptyStateProps) -> Html {
    let has_actions = props.children.iter().next().is_some();
    html! {
        <div class="empty-state text-center py-10">
            <h4 class="font-semibold">{props.title.clone()}</h4>
            {props.description.clone().map(|text| html! {
                <p class="text-sm opacity-70">{text}</p>
            }).unwrap_or_default()}
            {if has_actions {
                html! { <div class="mt-4 flex justify-center gap-2">{ for props.children.iter() }</div> }
            } else {
                html! {}
            }}
        </div>
    }
}
