use yew::prelude::*;

use crate::components::icon::{Icon, IconKind};

#[derive(Properties, PartialEq)]
pub struct FeatureCardProps {
    pub icon: IconKind,
    pub title: AttrValue,
    pub description: AttrValue,
}

#[function_component(FeatureCard)]
pub fn feature_card(props: &FeatureCardProps) -> Html {
    html! {
        <div class="feature-card glass-card">
            <style>
                {r#"
                    .feature-card {
                        position: relative;
                        padding: 1.5rem;
                        transition: border-color 0.2s ease;
                    }
                    .feature-card:hover {
                        border-color: rgba(255, 255, 255, 0.2);
                    }
                    .feature-card__glow {
                        position: absolute;
                        inset: 0;
                        border-radius: inherit;
                        background: linear-gradient(to bottom, rgba(52, 211, 153, 0), rgba(52, 211, 153, 0) 50%, rgba(52, 211, 153, 0.1));
                        opacity: 0;
                        transition: opacity 0.2s ease;
                        pointer-events: none;
                    }
                    .feature-card:hover .feature-card__glow {
                        opacity: 1;
                    }
                    .feature-card__body {
                        position: relative;
                        z-index: 1;
                    }
                    .feature-card h3 {
                        margin: 1rem 0 0;
                        font-weight: 600;
                        color: #fff;
                    }
                    .feature-card p {
                        margin: 0.5rem 0 0;
                        font-size: 0.875rem;
                        color: rgba(255, 255, 255, 0.7);
                    }
                "#}
            </style>
            <div class="feature-card__glow"></div>
            <div class="feature-card__body">
                <div class="icon-tile">
                    <Icon kind={props.icon} />
                </div>
                <h3>{&props.title}</h3>
                <p>{&props.description}</p>
            </div>
        </div>
    }
}
