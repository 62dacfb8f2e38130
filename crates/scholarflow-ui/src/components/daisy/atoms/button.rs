use crate::components::daisy::foundations::{DaisyColor, DaisySize, DaisyVariant, control_classes};
use yew::prelude::*;

#[derive(Properties, PartialEq)]
pub(crate) struct ButtonProps {
    #[prop_or_default]
    pub children: Children,
    #[prop_or_default]
    pub tone: Option<DaisyColor>,
    #[prop_or(DaisySize::Md)]
    pub size: DaisySize,
    #[prop_or_default]
    pub variant: DaisyVariant,
    #[prop_or_default]
    pub disabled: bool,
    #[prop_or_default]
    pub loading: bool,
    #[prop_or_default]
    pub class: Classes,
    #[prop_or_default]
    pub onclick: Callback<MouseEvent>,
}

#[function_component(Button)]
pub(crate) fn button(props: &ButtonProps) -> Html {
    let classes = control_classes("btn", props.size, props.variant, props.tone, &props.class);
    html! {
        <button
            type="button"
            class={classes}
            disabled={props.disabled || props.loading}
            onclick={props.onclick.clone()}
        >
            {props.loading.then(|| html! { <span class="loading loading-spinner loading-xs"></span> }).unwrap_or_default()}
            { for props.children.iter() }
        </button>
    }
}
