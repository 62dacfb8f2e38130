use crate::components::daisy::foundations::{DaisyColor, DaisySize, DaisyVariant, control_classes};
use yew::prelude::*;

#[derive(Properties, PartialEq)]
pub(crate) struct BadgeProps {
    #[prop_or_default]
    pub children: Children,
    #[prop_or_default]
    pub tone: Option<DaisyColor>,
    #[prop_or(DaisySize::Sm)]
    pub size: DaisySize,
    #[prop_or_default]
    pub variant: DaisyVariant,
    #[prop_or_default]
    pub class: Classes,
}

#[function_component(Badge)]
pub(crate) fn badge(props: &BadgeProps) -> Html {
    let classes = control_classes("badge", props.size, props.variant, props.tone, &props.class);
    html! {
        <span class={classes}>
            { for props.children.iter() }
        </span>
    }
}
