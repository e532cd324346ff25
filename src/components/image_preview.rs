use crate::state::preview::{clamp_page, pagination_label};
use crate::state::{
    points_from_touch_list, GestureAction, GestureTracker, PreviewState, VisibilityChange,
};
use crate::config::GestureConfig;
use crate::util::{class_if, class_names, clog};
use yew::prelude::*;

#[derive(Properties, PartialEq, Clone)]
pub struct ImagePreviewProps {
    #[prop_or_default]
    pub class_name: AttrValue,
    #[prop_or_default]
    pub images: Vec<AttrValue>,
    #[prop_or_default]
    pub show: bool,
    /// Slide shown first; clamped into range.
    #[prop_or_default]
    pub start_position: usize,
    #[prop_or(true)]
    pub pagination_visible: bool,
    /// Pinch zoom bounds and thresholds. Invalid values fall back to the defaults.
    #[prop_or_default]
    pub gesture: GestureConfig,
    #[prop_or_default]
    pub on_open: Callback<()>,
    #[prop_or_default]
    pub on_close: Callback<()>,
}

fn notify(change: VisibilityChange, on_open: &Callback<()>, on_close: &Callback<()>) {
    match change {
        VisibilityChange::Opened => on_open.emit(()),
        VisibilityChange::Closed => on_close.emit(()),
    }
}

#[function_component(ImagePreview)]
pub fn image_preview(props: &ImagePreviewProps) -> Html {
    let tracker = {
        let config = props.gesture;
        use_reducer(move || {
            GestureTracker::with_config(config).unwrap_or_else(|e| {
                clog(&format!("image preview: {e}, using default gesture config"));
                GestureTracker::default()
            })
        })
    };
    let preview = {
        let (show, start, len) = (props.show, props.start_position, props.images.len());
        use_state(move || PreviewState::new(show, start, len))
    };

    // Follow the `show` prop
    {
        let preview = preview.clone();
        let on_open = props.on_open.clone();
        let on_close = props.on_close.clone();
        use_effect_with(props.show, move |show| {
            let mut next = *preview;
            if let Some(change) = next.sync_show(*show) {
                preview.set(next);
                notify(change, &on_open, &on_close);
            }
            || ()
        });
    }

    let toggle_visible = {
        let preview = preview.clone();
        let on_open = props.on_open.clone();
        let on_close = props.on_close.clone();
        Callback::from(move |_: MouseEvent| {
            let mut next = *preview;
            let change = next.toggle();
            preview.set(next);
            notify(change, &on_open, &on_close);
        })
    };

    // Gesture wiring
    let ontouchstart = {
        let tracker = tracker.clone();
        Callback::from(move |e: TouchEvent| {
            tracker.dispatch(GestureAction::TouchStart(points_from_touch_list(
                &e.target_touches(),
            )));
        })
    };
    let ontouchmove = {
        let tracker = tracker.clone();
        Callback::from(move |e: TouchEvent| {
            tracker.dispatch(GestureAction::TouchMove(points_from_touch_list(
                &e.changed_touches(),
            )));
        })
    };
    let ontouchend = {
        let tracker = tracker.clone();
        Callback::from(move |e: TouchEvent| {
            tracker.dispatch(GestureAction::TouchEnd(points_from_touch_list(
                &e.changed_touches(),
            )));
        })
    };
    let ondblclick = {
        let tracker = tracker.clone();
        Callback::from(move |_: MouseEvent| tracker.dispatch(GestureAction::DoubleTap))
    };

    let len = props.images.len();
    let prev_cb = {
        let preview = preview.clone();
        Callback::from(move |_: MouseEvent| {
            let mut next = *preview;
            next.prev(len);
            preview.set(next);
        })
    };
    let next_cb = {
        let preview = preview.clone();
        Callback::from(move |_: MouseEvent| {
            let mut next = *preview;
            next.next(len);
            preview.set(next);
        })
    };

    let root_class = class_names([
        "at-image-preview",
        props.class_name.as_str(),
        class_if(preview.visible, "at-image-preview-active"),
    ]);
    let page = clamp_page(preview.page, len);
    let track_style = format!(
        "display:flex; transform: translateX(-{}%); transition: transform 0.3s;",
        page * 100
    );
    let pagination = if props.pagination_visible {
        pagination_label(page, len)
    } else {
        None
    };

    html! {<div class={root_class}
        ontouchstart={ontouchstart}
        ontouchmove={ontouchmove}
        ontouchend={ontouchend.clone()}
        ontouchcancel={ontouchend}
        ondblclick={ondblclick}>
        <div class="at-image-preview-mask" onclick={toggle_visible}></div>
        <div class="at-image-preview-content" style={tracker.style().css()}>
            <div class="at-swiper" style="overflow:hidden;">
                <div class="at-swiper-track" style={track_style}>
                    { for props.images.iter().enumerate().map(|(i, src)| html! {
                        <div key={i} class="at-swiper-slide" style="flex:0 0 100%;">
                            <img src={src.clone()} style="max-width: 100%" />
                        </div>
                    }) }
                </div>
            </div>
            if let Some(label) = pagination {
                <div class="at-swiper-pagination" style="display:flex; justify-content:center; gap:8px;">
                    <button onclick={prev_cb}>{"‹"}</button>
                    <span>{ label }</span>
                    <button onclick={next_cb}>{"›"}</button>
                </div>
            }
        </div>
    </div>}
}
