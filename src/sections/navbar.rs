use yew::prelude::*;

use crate::components::icon::{Icon, IconKind};
use crate::content::{BRAND, NAV_LINKS};

#[function_component(Navbar)]
pub fn navbar() -> Html {
    html! {
        <nav class="top-bar">
            <style>
                {r#"
                    .top-bar {
                        position: fixed;
                        top: 0;
                        left: 0;
                        right: 0;
                        z-index: 40;
                    }
                    .top-bar__inner {
                        display: flex;
                        align-items: center;
                        justify-content: space-between;
                        padding-top: 1rem;
                        padding-bottom: 1rem;
                    }
                    .brand {
                        display: flex;
                        align-items: center;
                        gap: 0.5rem;
                    }
                    .brand__mark {
                        height: 2rem;
                        width: 2rem;
                        border-radius: 0.375rem;
                        background: rgba(52, 211, 153, 0.2);
                        border: 1px solid rgba(110, 231, 183, 0.2);
                        display: grid;
                        place-items: center;
                        color: #6ee7b7;
                    }
                    .brand__mark .icon {
                        height: 1rem;
                        width: 1rem;
                    }
                    .brand__name {
                        color: rgba(255, 255, 255, 0.9);
                        font-weight: 600;
                        letter-spacing: 0.025em;
                    }
                    .top-bar__links {
                        display: none;
                        align-items: center;
                        gap: 1.5rem;
                        font-size: 0.875rem;
                    }
                    .top-bar__links a {
                        color: rgba(255, 255, 255, 0.7);
                        text-decoration: none;
                    }
                    .top-bar__links a:hover {
                        color: #fff;
                    }
                    .top-bar__actions {
                        display: flex;
                        align-items: center;
                        gap: 0.75rem;
                    }
                    .top-bar__actions .sign-in {
                        display: none;
                    }
                    @media (min-width: 640px) {
                        .top-bar__actions .sign-in {
                            display: inline-flex;
                        }
                    }
                    @media (min-width: 768px) {
                        .top-bar__links {
                            display: flex;
                        }
                    }
                "#}
            </style>
            <div class="container top-bar__inner">
                <div class="brand">
                    <div class="brand__mark">
                        <Icon kind={IconKind::Layers3} />
                    </div>
                    <span class="brand__name">{BRAND}</span>
                </div>
                <div class="top-bar__links">
                    { for NAV_LINKS.iter().map(|link| html! {
                        <a href={link.target.href()}>{link.label}</a>
                    }) }
                </div>
                <div class="top-bar__actions">
                    <button class="btn btn-outline btn-small sign-in">{"Sign in"}</button>
                    <button class="btn btn-accent btn-small">{"Get started"}</button>
                </div>
            </div>
        </nav>
    }
}
