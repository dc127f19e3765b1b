use yew::prelude::*;

use crate::components::scene::SceneEmbed;
use crate::config;
use crate::content::{SectionAnchor, PREVIEW_BULLETS, SUMMARY_TILES};

#[function_component(Preview)]
pub fn preview() -> Html {
    html! {
        <section id={SectionAnchor::Preview.id()} class="preview anchored">
            <style>
                {r#"
                    .preview {
                        position: relative;
                        background: #000;
                        padding: 6rem 0;
                    }
                    .preview__grid {
                        display: grid;
                        grid-template-columns: 1fr;
                        gap: 2rem;
                        align-items: center;
                    }
                    .preview h2 {
                        margin: 0;
                        font-size: 1.875rem;
                        font-weight: 600;
                    }
                    .preview__bullets {
                        list-style: none;
                        margin: 1.5rem 0 0;
                        padding: 0;
                        display: flex;
                        flex-direction: column;
                        gap: 0.75rem;
                        color: rgba(255, 255, 255, 0.8);
                    }
                    .preview__bullets li {
                        display: flex;
                        align-items: flex-start;
                        gap: 0.75rem;
                    }
                    .preview__dot {
                        margin-top: 0.5rem;
                        flex: none;
                        height: 0.5rem;
                        width: 0.5rem;
                        border-radius: 9999px;
                        background: #34d399;
                    }
                    .preview__ctas {
                        margin-top: 2rem;
                        display: flex;
                        gap: 0.75rem;
                    }
                    .preview__frame {
                        border-radius: 0.75rem;
                        overflow: hidden;
                        border: 1px solid rgba(255, 255, 255, 0.1);
                        background: rgba(255, 255, 255, 0.05);
                        backdrop-filter: blur(8px);
                    }
                    .preview__stage {
                        position: relative;
                        width: 100%;
                        aspect-ratio: 16 / 9;
                        background: linear-gradient(to bottom right, #0f172a, #000);
                    }
                    .preview__scene {
                        position: absolute;
                        inset: 0;
                        opacity: 0.7;
                    }
                    .preview__shade {
                        position: absolute;
                        inset: 0;
                        background: linear-gradient(to top, rgba(0, 0, 0, 0.6), transparent);
                        pointer-events: none;
                    }
                    .preview__tiles {
                        position: absolute;
                        left: 0.75rem;
                        right: 0.75rem;
                        bottom: 0.75rem;
                        display: grid;
                        grid-template-columns: repeat(3, 1fr);
                        gap: 0.75rem;
                    }
                    .summary-tile {
                        border-radius: 0.375rem;
                        background: rgba(255, 255, 255, 0.1);
                        border: 1px solid rgba(255, 255, 255, 0.1);
                        padding: 0.75rem;
                    }
                    .summary-tile__label {
                        margin: 0;
                        font-size: 0.75rem;
                        color: rgba(255, 255, 255, 0.7);
                    }
                    .summary-tile__value {
                        margin: 0;
                        font-weight: 500;
                        color: #fff;
                    }
                    .scene-embed.dimmed {
                        background: transparent;
                    }
                    @media (min-width: 1024px) {
                        .preview__grid { grid-template-columns: repeat(2, 1fr); }
                    }
                "#}
            </style>
            <div class="container">
                <div class="preview__grid">
                    <div>
                        <h2>{"Cinematic dashboard in dark mode"}</h2>
                        <p class="muted">
                            {"Minimalist panels float over the scene with a frosty glass effect. Toggle overlays like contours, stability heatmaps, and fault lines. Click any pylon to update the side data instantly."}
                        </p>
                        <ul class="preview__bullets">
                            { for PREVIEW_BULLETS.iter().map(|bullet| html! {
                                <li><span class="preview__dot"></span>{*bullet}</li>
                            }) }
                        </ul>
                        <div class="preview__ctas">
                            <button class="btn btn-accent">{"Try it"}</button>
                            <button class="btn btn-outline">{"Learn more"}</button>
                        </div>
                    </div>
                    <div class="preview__frame">
                        <div class="preview__stage">
                            <div class="preview__scene">
                                <SceneEmbed url={config::scene_url()} class="dimmed" />
                            </div>
                            <div class="preview__shade"></div>
                            <div class="preview__tiles">
                                { for SUMMARY_TILES.iter().map(|tile| html! {
                                    <div class="summary-tile">
                                        <p class="summary-tile__label">{tile.label}</p>
                                        <p class="summary-tile__value">{tile.value}</p>
                                    </div>
                                }) }
                            </div>
                        </div>
                    </div>
                </div>
            </div>
        </section>
    }
}
