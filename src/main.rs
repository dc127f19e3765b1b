use yew::prelude::*;
use log::info;

mod config;
mod content;
mod scroll;

mod components {
    pub mod icon;
    pub mod scene;
    pub mod feature_card;
}

mod sections {
    pub mod navbar;
    pub mod hero;
    pub mod features;
    pub mod workflow;
    pub mod preview;
    pub mod footer;
}

use sections::{
    navbar::Navbar,
    hero::Hero,
    features::Features,
    workflow::Workflow,
    preview::Preview,
    footer::Footer,
};


#[function_component]
fn App() -> Html {
    html! {
        <div class="page">
            <style>
                {r#"
                    html {
                        scroll-behavior: smooth;
                    }
                    body {
                        margin: 0;
                        background: #000;
                        color: #fff;
                        font-family: "Inter", -apple-system, BlinkMacSystemFont, "Segoe UI", Roboto, Helvetica, Arial, sans-serif;
                        -webkit-font-smoothing: antialiased;
                    }
                    .page {
                        min-height: 100vh;
                        background: #000;
                        color: #fff;
                    }
                    .container {
                        margin: 0 auto;
                        max-width: 80rem;
                        padding-left: 1.5rem;
                        padding-right: 1.5rem;
                        box-sizing: border-box;
                    }
                    .layered {
                        position: relative;
                        z-index: 10;
                    }
                    .anchored {
                        scroll-margin-top: 4.5rem;
                    }
                    .muted {
                        margin-top: 0.75rem;
                        color: rgba(255, 255, 255, 0.7);
                    }
                    .glass-card {
                        position: relative;
                        border-radius: 1rem;
                        background: rgba(255, 255, 255, 0.05);
                        border: 1px solid rgba(255, 255, 255, 0.1);
                        backdrop-filter: blur(8px);
                    }
                    .icon-tile {
                        height: 2.5rem;
                        width: 2.5rem;
                        border-radius: 0.5rem;
                        background: rgba(52, 211, 153, 0.15);
                        border: 1px solid rgba(110, 231, 183, 0.2);
                        display: grid;
                        place-items: center;
                        color: #6ee7b7;
                    }
                    .icon-tile .icon {
                        height: 1.25rem;
                        width: 1.25rem;
                    }
                    .btn {
                        display: inline-flex;
                        align-items: center;
                        padding: 0.75rem 1.25rem;
                        border-radius: 0.375rem;
                        font: inherit;
                        font-weight: 500;
                        text-decoration: none;
                        cursor: pointer;
                        border: 1px solid transparent;
                        transition: background-color 0.15s ease, border-color 0.15s ease;
                    }
                    .btn-small {
                        padding: 0.5rem 1rem;
                        font-size: 0.875rem;
                    }
                    .btn-light {
                        background: #fff;
                        color: #000;
                    }
                    .btn-light:hover {
                        background: rgba(255, 255, 255, 0.9);
                    }
                    .btn-accent {
                        background: rgba(16, 185, 129, 0.9);
                        color: #000;
                        box-shadow: 0 1px 3px rgba(0, 0, 0, 0.3);
                    }
                    .btn-accent:hover {
                        background: #34d399;
                    }
                    .btn-outline {
                        background: transparent;
                        color: rgba(255, 255, 255, 0.9);
                        border-color: rgba(255, 255, 255, 0.15);
                    }
                    .btn-outline:hover {
                        border-color: rgba(255, 255, 255, 0.3);
                    }
                "#}
            </style>
            <Navbar />
            <Hero />
            <Features />
            <Workflow />
            <Preview />
            <Footer />
        </div>
    }
}


fn main() {
    // Initialize console error panic hook for better error messages
    console_error_panic_hook::set_once();

    console_log::init_with_level(config::log_level()).expect("error initializing log");

    info!("Starting GeoBridge landing page");
    yew::Renderer::<App>::new().render();
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::content::{copyright_line, current_year};

    async fn render_page() -> String {
        yew::ServerRenderer::<App>::new()
            .hydratable(false)
            .render()
            .await
    }

    fn between<'a>(html: &'a str, start: &str, end: &str) -> &'a str {
        let from = html.find(start).expect("start marker missing");
        let to = html[from..].find(end).map(|i| from + i).expect("end marker missing");
        &html[from..to]
    }

    fn in_order(haystack: &str, needles: &[&str]) -> bool {
        let positions: Vec<_> = needles.iter().map(|n| haystack.find(n)).collect();
        positions.iter().all(Option::is_some) && positions.windows(2).all(|w| w[0] < w[1])
    }

    #[tokio::test]
    async fn each_anchor_names_one_section() {
        let html = render_page().await;
        for id in ["features", "flow", "preview"] {
            let attr = format!("id=\"{}\"", id);
            assert_eq!(html.matches(&attr).count(), 1, "{}", attr);
        }
        for href in ["#features", "#flow", "#preview"] {
            assert!(html.contains(&format!("href=\"{}\"", href)), "{}", href);
        }
    }

    #[tokio::test]
    async fn features_render_four_cards_in_order() {
        let html = render_page().await;
        let section = between(&html, "id=\"features\"", "id=\"flow\"");
        assert_eq!(section.matches("class=\"feature-card glass-card\"").count(), 4);
        assert!(in_order(section, &["Geomorphics", "Environmental", "Analysis", "Safety"]));
    }

    #[tokio::test]
    async fn workflow_renders_numbered_steps() {
        let html = render_page().await;
        let section = between(&html, "id=\"flow\"", "id=\"preview\"");
        assert_eq!(section.matches("class=\"step-card glass-card\"").count(), 4);
        assert!(in_order(
            section,
            &[
                "step-card__ordinal\">01<",
                "Input",
                "step-card__ordinal\">02<",
                "Analysis",
                "step-card__ordinal\">03<",
                "Design",
                "step-card__ordinal\">04<",
                "Report",
            ]
        ));
    }

    #[tokio::test]
    async fn footer_shows_this_year() {
        let html = render_page().await;
        let footer = between(&html, "<footer", "</footer>");
        assert!(footer.contains(&copyright_line(current_year())));
        assert!(footer.contains(&format!("© {} GeoBridge", current_year())));
    }

    #[tokio::test]
    async fn hero_title_starts_in_place_over_the_scene() {
        let html = render_page().await;
        assert!(html.contains("style=\"transform: translateY(0px); opacity: 1;\""));
        assert_eq!(html.matches("<spline-viewer").count(), 2);
    }

    #[tokio::test]
    async fn sections_follow_page_order() {
        let html = render_page().await;
        assert!(in_order(
            &html,
            &[
                "class=\"top-bar\"",
                "class=\"hero\"",
                "id=\"features\"",
                "id=\"flow\"",
                "id=\"preview\"",
                "<footer",
            ]
        ));
    }
}
