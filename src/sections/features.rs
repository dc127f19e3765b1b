use yew::prelude::*;

use crate::components::feature_card::FeatureCard;
use crate::content::{SectionAnchor, FEATURES};

#[function_component(Features)]
pub fn features() -> Html {
    html! {
        <section id={SectionAnchor::Features.id()} class="features anchored">
            <style>
                {r#"
                    .features {
                        position: relative;
                        background: #000;
                        padding: 6rem 0;
                    }
                    .features__glow {
                        position: absolute;
                        inset: 0;
                        pointer-events: none;
                        background:
                            radial-gradient(circle at 20% 10%, rgba(16, 185, 129, 0.08), transparent 40%),
                            radial-gradient(circle at 80% 90%, rgba(59, 130, 246, 0.08), transparent 40%);
                    }
                    .features__intro {
                        max-width: 42rem;
                    }
                    .features__eyebrow {
                        margin: 0;
                        color: rgba(110, 231, 183, 0.8);
                        font-size: 0.875rem;
                        font-weight: 500;
                        letter-spacing: 0.1em;
                        text-transform: uppercase;
                    }
                    .features h2 {
                        margin: 0.75rem 0 0;
                        font-size: 1.875rem;
                        font-weight: 600;
                    }
                    .features__grid {
                        margin-top: 2.5rem;
                        display: grid;
                        grid-template-columns: 1fr;
                        gap: 1.5rem;
                    }
                    @media (min-width: 640px) {
                        .features h2 { font-size: 2.25rem; }
                        .features__grid { grid-template-columns: repeat(2, 1fr); }
                    }
                    @media (min-width: 1024px) {
                        .features__grid { grid-template-columns: repeat(4, 1fr); }
                    }
                "#}
            </style>
            <div class="features__glow"></div>
            <div class="container layered">
                <div class="features__intro">
                    <p class="features__eyebrow">{"Topographic • Structural • Geomorphic"}</p>
                    <h2>{"Layers that matter to engineers"}</h2>
                    <p class="muted">
                        {"Toggle data overlays directly on the 3D scene: contours, slope stability heatmaps, and mapped faults. Inspect any member; the side panel updates instantly."}
                    </p>
                </div>

                <div class="features__grid">
                    { for FEATURES.iter().map(|entry| html! {
                        <FeatureCard
                            icon={entry.icon}
                            title={entry.title}
                            description={entry.description}
                        />
                    }) }
                </div>
            </div>
        </section>
    }
}
