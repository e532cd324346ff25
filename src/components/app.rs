use super::{badge::Badge, image_preview::ImagePreview, noticebar::NoticeBar};
use crate::state::BadgeValue;
use crate::util::clog;
use yew::prelude::*;

const DEMO_IMAGES: [&str; 3] = [
    "https://picsum.photos/id/10/800/600",
    "https://picsum.photos/id/20/800/600",
    "https://picsum.photos/id/30/800/600",
];

/// Demo gallery showing every component.
#[function_component(App)]
pub fn app() -> Html {
    let preview_open = use_state(|| false);
    let unread = use_state(|| 8u32);

    let open_preview = {
        let preview_open = preview_open.clone();
        Callback::from(move |_: MouseEvent| preview_open.set(true))
    };
    let on_preview_close = {
        let preview_open = preview_open.clone();
        Callback::from(move |_: ()| {
            clog("image preview closed");
            preview_open.set(false);
        })
    };
    let on_preview_open = Callback::from(|_: ()| clog("image preview opened"));
    let bump = {
        let unread = unread.clone();
        Callback::from(move |_: MouseEvent| unread.set(unread.saturating_add(4)))
    };
    let on_notice_close = Callback::from(|_: MouseEvent| clog("notice bar closed"));

    let images: Vec<AttrValue> = DEMO_IMAGES.iter().map(|s| AttrValue::from(*s)).collect();

    html! {<div style="display:flex; flex-direction:column; gap:16px; padding:16px;">
        <section>
            <h3>{"Badge"}</h3>
            <div style="display:flex; gap:24px; align-items:center;">
                <Badge value={BadgeValue::from(*unread)} max_value={9}>
                    <button onclick={bump}>{"Messages"}</button>
                </Badge>
                <Badge dot={true}><span>{"Updates"}</span></Badge>
                <Badge value={BadgeValue::from("new")}><span>{"Inbox"}</span></Badge>
            </div>
        </section>
        <section>
            <h3>{"NoticeBar"}</h3>
            <NoticeBar icon="volume" close={true} on_close={on_notice_close}>
                {"Closable notice with an icon."}
            </NoticeBar>
            <NoticeBar marquee={true} speed={60.0}>
                {"A long marquee notice that scrolls across the bar at a constant speed."}
            </NoticeBar>
            <NoticeBar single={true} show_more={true}>
                {"Single line notice that gets cut off with an ellipsis when too long."}
            </NoticeBar>
        </section>
        <section>
            <h3>{"ImagePreview"}</h3>
            <button onclick={open_preview}>{"Open preview"}</button>
            <ImagePreview
                images={images}
                show={*preview_open}
                start_position={1}
                on_open={on_preview_open}
                on_close={on_preview_close}
            />
        </section>
    </div>}
}
