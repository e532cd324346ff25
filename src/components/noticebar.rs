use crate::state::noticebar::{
    anim_element_id, icon_classes, inner_classes, root_classes, DEFAULT_MARQUEE_SECS,
    DEFAULT_MARQUEE_SPEED, MEASURE_DELAY_MS,
};
use crate::state::Marquee;
use crate::util::clog;
use wasm_bindgen::closure::Closure;
use wasm_bindgen::JsCast;
use yew::prelude::*;

#[derive(Properties, PartialEq, Clone)]
pub struct NoticeBarProps {
    /// Show the close button.
    #[prop_or_default]
    pub close: bool,
    /// Single line, ellipsized. Ignored when `marquee` is set.
    #[prop_or_default]
    pub single: bool,
    #[prop_or_default]
    pub marquee: bool,
    /// Marquee speed in px per second.
    #[prop_or(DEFAULT_MARQUEE_SPEED)]
    pub speed: f64,
    #[prop_or(AttrValue::Static("see details"))]
    pub more_text: AttrValue,
    #[prop_or_default]
    pub show_more: bool,
    #[prop_or_default]
    pub class_name: AttrValue,
    #[prop_or_default]
    pub icon: AttrValue,
    #[prop_or_default]
    pub custom_style: AttrValue,
    #[prop_or_default]
    pub on_goto_more: Callback<MouseEvent>,
    #[prop_or_default]
    pub on_close: Callback<MouseEvent>,
    #[prop_or_default]
    pub children: Children,
}

#[function_component(NoticeBar)]
pub fn notice_bar(props: &NoticeBarProps) -> Html {
    let show = use_state(|| true);
    let anim_id = use_state(|| anim_element_id(js_sys::Math::random()));
    let duration = use_state(|| DEFAULT_MARQUEE_SECS);
    let inner_ref = use_node_ref();

    // Measure the scrolling text shortly after mount to derive the animation duration
    {
        let duration = duration.clone();
        let inner_ref = inner_ref.clone();
        use_effect_with((props.marquee, props.speed), move |&(marquee, speed)| {
            let cleanup: Box<dyn FnOnce()> = match web_sys::window() {
                Some(window) if marquee => {
                    let measure = Closure::wrap(Box::new(move || {
                        let Some(elem) = inner_ref.cast::<web_sys::Element>() else {
                            return;
                        };
                        let width = elem.get_bounding_client_rect().width();
                        let mut m = Marquee {
                            enabled: true,
                            duration_secs: *duration,
                        };
                        if m.measure(width, speed) {
                            clog(&format!(
                                "noticebar marquee: width {width}px -> {}s",
                                m.duration_secs
                            ));
                            duration.set(m.duration_secs);
                        }
                    }) as Box<dyn FnMut()>);
                    let handle = window
                        .set_timeout_with_callback_and_timeout_and_arguments_0(
                            measure.as_ref().unchecked_ref(),
                            MEASURE_DELAY_MS,
                        )
                        .ok();
                    Box::new(move || {
                        if let Some(id) = handle {
                            window.clear_timeout_with_handle(id);
                        }
                        let _keep_alive = measure;
                    })
                }
                _ => Box::new(|| ()),
            };
            cleanup
        });
    }

    let close_cb = {
        let show = show.clone();
        let cb = props.on_close.clone();
        Callback::from(move |e: MouseEvent| {
            show.set(false);
            cb.emit(e);
        })
    };
    let more_cb = {
        let cb = props.on_goto_more.clone();
        Callback::from(move |e: MouseEvent| cb.emit(e))
    };

    if !*show {
        return html! {};
    }

    let marquee = Marquee {
        enabled: props.marquee,
        duration_secs: *duration,
    };
    let root_class = root_classes(props.marquee, props.single, props.class_name.as_str());
    let inner_class = inner_classes(props.marquee, anim_id.as_str());

    html! {<div class={root_class} style={props.custom_style.clone()}>
        if props.close {
            <div class="at-noticebar__close" onclick={close_cb}>
                <div class="at-icon at-icon-close" />
            </div>
        }
        <div class="at-noticebar__content">
            if !props.icon.is_empty() {
                <div class="at-noticebar__content-icon">
                    <div class={icon_classes(props.icon.as_str())} />
                </div>
            }
            <div class="at-noticebar__content-text">
                <div ref={inner_ref} class={inner_class} style={marquee.style()}>
                    { for props.children.iter() }
                </div>
            </div>
            if props.show_more {
                <div class="at-noticebar__more" onclick={more_cb}>
                    <div class="text">{ props.more_text.clone() }</div>
                </div>
            }
            <div class="at-noticebar__more-icon">
                <div class="at-icon at-icon-chevron-right" />
            </div>
        </div>
    </div>}
}
