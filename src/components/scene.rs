use gloo_timers::callback::Timeout;
use log::{debug, warn};
use yew::prelude::*;

use crate::config;

const VIEWER_TAG: &str = "spline-viewer";

#[derive(Properties, PartialEq)]
pub struct SceneEmbedProps {
    pub url: AttrValue,
    #[prop_or_default]
    pub class: Classes,
}

fn viewer_registered() -> bool {
    web_sys::window()
        .map(|window| !window.custom_elements().get(VIEWER_TAG).is_undefined())
        .unwrap_or(false)
}

/// Hosted interactive 3D scene filling its container.
///
/// Rendering is left entirely to the viewer web component loaded from
/// `index.html`. If it never shows up the container keeps its background
/// colour and the rest of the page is unaffected.
#[function_component(SceneEmbed)]
pub fn scene_embed(props: &SceneEmbedProps) -> Html {
    {
        let url = props.url.clone();
        use_effect_with_deps(
            move |url| {
                let url = url.clone();
                let timeout = Timeout::new(config::scene_load_grace_ms(), move || {
                    if viewer_registered() {
                        debug!("Scene viewer ready for {}", url);
                    } else {
                        warn!("<{}> never registered; leaving {} blank", VIEWER_TAG, url);
                    }
                });
                move || drop(timeout)
            },
            url,
        );
    }

    html! {
        <div class={classes!("scene-embed", props.class.clone())}>
            <style>
                {r#"
                    .scene-embed {
                        width: 100%;
                        height: 100%;
                        background: #000;
                    }
                    .scene-embed spline-viewer {
                        display: block;
                        width: 100%;
                        height: 100%;
                    }
                "#}
            </style>
            <spline-viewer url={props.url.clone()}></spline-viewer>
        </div>
    }
}
