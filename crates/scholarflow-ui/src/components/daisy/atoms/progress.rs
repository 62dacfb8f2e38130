use crate::components::daisy::foundations::{DaisyColor, tone_class};
use crate::core::controls::percent;
use yew::prelude::*;

#[derive(Properties, PartialEq)]
pub(crate) struct ProgressProps {
    #[prop_or_default]
    pub value: f64,
    #[prop_or(100.0)]
    pub max: f64,
    #[prop_or_default]
    pub tone: Option<DaisyColor>,
    #[prop_or_default]
    pub label: Option<AttrValue>,
    #[prop_or_default]
    pub class: Classes,
}

#[function_component(Progress)]
pub(crate) fn progress(props: &ProgressProps) -> Html {
    let classes = classes!(
        "progress",
        tone_class("progress", props.tone),
        props.class.clone()
    );
    let pct = percent(props.value, props.max);
    html! {
        <progress
            class={classes}
            value={pct.to_string()}
            max="100"
            aria-label={props.label.clone()}
        />
    }
}
