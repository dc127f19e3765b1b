use yew::prelude::*;

use crate::components::icon::{Icon, IconKind};
use crate::components::scene::SceneEmbed;
use crate::config;
use crate::content::SectionAnchor;
use crate::scroll::{hero_title_style, use_scroll_progress};

#[function_component(Hero)]
pub fn hero() -> Html {
    let progress = use_scroll_progress();

    html! {
        <section class="hero">
            <style>
                {r#"
                    .hero {
                        position: relative;
                        height: 120vh;
                        background: #000;
                        overflow: hidden;
                    }
                    .hero__scene {
                        position: absolute;
                        inset: 0;
                    }
                    .hero__glow {
                        position: absolute;
                        inset: 0;
                        pointer-events: none;
                        background:
                            radial-gradient(ellipse at top, rgba(16, 185, 129, 0.08), transparent 60%),
                            radial-gradient(ellipse at bottom, rgba(59, 130, 246, 0.06), transparent 60%);
                    }
                    .hero__content {
                        position: relative;
                        z-index: 10;
                        height: 100%;
                        display: flex;
                        flex-direction: column;
                        align-items: center;
                        justify-content: flex-end;
                        padding-bottom: 6rem;
                        pointer-events: none;
                    }
                    .hero__title-block {
                        text-align: center;
                        padding: 0 1.5rem;
                        will-change: transform, opacity;
                    }
                    .hero__badge {
                        display: inline-flex;
                        align-items: center;
                        gap: 0.5rem;
                        padding: 0.25rem 0.75rem;
                        border-radius: 9999px;
                        border: 1px solid rgba(255, 255, 255, 0.1);
                        background: rgba(255, 255, 255, 0.05);
                        backdrop-filter: blur(8px);
                        pointer-events: auto;
                        font-size: 0.75rem;
                        color: rgba(255, 255, 255, 0.7);
                    }
                    .hero__badge-dot {
                        height: 0.5rem;
                        width: 0.5rem;
                        border-radius: 9999px;
                        background: #34d399;
                        animation: pulse 2s cubic-bezier(0.4, 0, 0.6, 1) infinite;
                    }
                    .hero h1 {
                        margin: 1.5rem 0 0;
                        font-size: 2.25rem;
                        font-weight: 600;
                        letter-spacing: -0.025em;
                        color: #fff;
                        filter: drop-shadow(0 0 25px rgba(16, 185, 129, 0.15));
                    }
                    .hero__subtitle {
                        margin: 1rem auto 0;
                        max-width: 42rem;
                        color: rgba(255, 255, 255, 0.7);
                        font-size: 1rem;
                    }
                    .hero__ctas {
                        margin-top: 2rem;
                        display: flex;
                        align-items: center;
                        justify-content: center;
                        gap: 0.75rem;
                        pointer-events: auto;
                    }
                    .hero__scroll-hint {
                        margin-top: 4rem;
                        display: flex;
                        align-items: center;
                        gap: 0.5rem;
                        color: rgba(255, 255, 255, 0.7);
                        font-size: 0.875rem;
                        animation: bounce 1s infinite;
                    }
                    .hero__scroll-hint .icon {
                        height: 1.25rem;
                        width: 1.25rem;
                    }
                    .hero__fade {
                        position: absolute;
                        left: 0;
                        right: 0;
                        bottom: 0;
                        height: 10rem;
                        background: linear-gradient(to top, #000, transparent);
                        pointer-events: none;
                    }
                    @keyframes pulse {
                        50% { opacity: 0.5; }
                    }
                    @keyframes bounce {
                        0%, 100% {
                            transform: translateY(-25%);
                            animation-timing-function: cubic-bezier(0.8, 0, 1, 1);
                        }
                        50% {
                            transform: none;
                            animation-timing-function: cubic-bezier(0, 0, 0.2, 1);
                        }
                    }
                    @media (min-width: 640px) {
                        .hero h1 { font-size: 3.75rem; }
                        .hero__subtitle { font-size: 1.125rem; }
                    }
                    @media (min-width: 768px) {
                        .hero h1 { font-size: 4.5rem; }
                    }
                "#}
            </style>
            <div class="hero__scene">
                <SceneEmbed url={config::scene_url()} />
            </div>

            <div class="hero__glow"></div>

            <div class="hero__content">
                <div class="hero__title-block" style={hero_title_style(progress)}>
                    <div class="hero__badge">
                        <span class="hero__badge-dot"></span>
                        <span>{"Interactive 3D Topographic Map"}</span>
                    </div>
                    <h1>{"Civil Engineering, Reimagined"}</h1>
                    <p class="hero__subtitle">
                        {"Analyze geomorphic data, explore hazards, and redesign bridge structures in mountainous terrains — all in one minimalist, cinematic workspace."}
                    </p>
                    <div class="hero__ctas">
                        <a href={SectionAnchor::Preview.href()} class="btn btn-light">{"Live demo"}</a>
                        <a href={SectionAnchor::Features.href()} class="btn btn-outline">{"Explore features"}</a>
                    </div>
                </div>

                <div class="hero__scroll-hint">
                    <Icon kind={IconKind::ChevronDown} />
                    <span>{"Scroll"}</span>
                </div>
            </div>

            <div class="hero__fade"></div>
        </section>
    }
}
