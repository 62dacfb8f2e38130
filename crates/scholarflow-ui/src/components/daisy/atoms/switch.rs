//! Toggle switch that works controlled or uncontrolled.
//!
//! Pass `checked` to drive the value from the caller; omit it and the switch keeps its
//! own state seeded from `default_checked`. Either way `onchange` receives the new value.

use crate::components::daisy::foundations::{DaisyColor, tone_class};
use crate::core::controls::SwitchState;
use yew::prelude::*;

#[derive(Properties, PartialEq)]
pub(crate) struct SwitchProps {
    #[prop_or_default]
    pub label: Option<AttrValue>,
    #[prop_or_default]
    pub description: Option<AttrValue>,
    #[prop_or_default]
    pub checked: Option<bool>,
    #[prop_or_default]
    pub default_checked: bool,
    #[prop_or_default]
    pub disabled: bool,
    #[prop_or_default]
    pub tone: Option<DaisyColor>,
    #[prop_or_default]
    pub class: Classes,
    #[prop_or_default]
    pub onchange: Callback<bool>,
}

#[function_component(Switch)]
pub(crate) fn switch(props: &SwitchProps) -> Html {
    let state = {
        let default_checked = props.default_checked;
        use_state(move || SwitchState::new(default_checked))
    };
    let checked = state.checked(props.checked);

    let onchange = {
        let state = state.clone();
        let controlled = props.checked;
        let disabled = props.disabled;
        let onchange = props.onchange.clone();
        Callback::from(move |_: Event| {
            let mut next = *state;
            next.toggle(controlled, disabled, |value| onchange.emit(value));
            state.set(next);
        })
    };

    html! {
        <label class={classes!("label", "cursor-pointer", "justify-between", "gap-4", props.class.clone())}>
            <span class="flex flex-col">
                {props.label.clone().map(|text| html! { <span class="font-medium">{text}</span> }).unwrap_or_default()}
                {props.description.clone().map(|text| html! { <span class="text-sm opacity-70">{text}</span> }).unwrap_or_default()}
            </span>
            <input
                type="checkbox"
                role="switch"
                class={classes!("toggle", tone_class("toggle", props.tone))}
                checked={checked}
                disabled={props.disabled}
                aria-checked={checked.to_string()}
                onchange={onchange}
            />
        </label>
    }
}
