use web_sys::HtmlVideoElement;
use yew::prelude::*;

use common::DayPart;

#[derive(Properties, PartialEq)]
pub struct Props {
    /// Local hour at the displayed location.
    pub hour: u32,
}

/// Ambient full-viewport video behind the dashboard. The source only
/// changes when the day part does, so re-renders never restart playback.
#[function_component(Background)]
pub fn background(props: &Props) -> Html {
    let part = DayPart::from_hour(props.hour);
    let video_ref = use_node_ref();

    use_effect_with(part, move |part| {
        if let Some(body) = web_sys::window()
            .and_then(|w| w.document())
            .and_then(|d| d.body())
        {
            body.set_class_name(part.css_class());
        }
        || ()
    });

    {
        let video_ref = video_ref.clone();
        use_effect_with(part, move |_| {
            if let Some(video) = video_ref.cast::<HtmlVideoElement>() {
                video.set_muted(true);
                video.set_loop(true);
                video.set_autoplay(true);
                if video.play().is_err() {
                    log::debug!("Background video autoplay blocked");
                }
            }
            || ()
        });
    }

    html! {
        <div class="background-layer">
            <video
                ref={video_ref}
                key={part.video_source()}
                class="bg-video"
                src={part.video_source()}
            />
        </div>
    }
}
