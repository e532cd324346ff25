use crate::state::{format_value, BadgeValue};
use crate::util::class_names;
use yew::prelude::*;

#[derive(Properties, PartialEq, Clone)]
pub struct BadgeProps {
    /// Show a plain dot instead of the value.
    #[prop_or_default]
    pub dot: bool,
    #[prop_or_default]
    pub value: BadgeValue,
    /// Numbers above this render as `{max_value}+`.
    #[prop_or(99)]
    pub max_value: u32,
    #[prop_or_default]
    pub custom_style: AttrValue,
    #[prop_or_default]
    pub class_name: AttrValue,
    #[prop_or_default]
    pub children: Children,
}

#[function_component(Badge)]
pub fn badge(props: &BadgeProps) -> Html {
    let text = format_value(&props.value, props.max_value);
    let root_class = class_names(["at-badge", props.class_name.as_str()]);
    html! {<div class={root_class} style={props.custom_style.clone()}>
        { for props.children.iter() }
        if props.dot {
            <div class="at-badge__dot" />
        } else if text.is_visible() {
            <div><div class="at-badge__num">{ text.to_string() }</div></div>
        }
    </div>}
}
