use yew::prelude::*;

use crate::content::{copyright_line, current_year, FOOTER_LINKS};

#[function_component(Footer)]
pub fn footer() -> Html {
    let year = current_year();

    html! {
        <footer class="site-footer">
            <style>
                {r#"
                    .site-footer {
                        background: rgba(0, 0, 0, 0.95);
                        border-top: 1px solid rgba(255, 255, 255, 0.1);
                    }
                    .site-footer__inner {
                        padding-top: 2.5rem;
                        padding-bottom: 2.5rem;
                        display: flex;
                        flex-direction: column;
                        align-items: center;
                        justify-content: space-between;
                        gap: 1rem;
                        font-size: 0.875rem;
                        color: rgba(255, 255, 255, 0.6);
                    }
                    .site-footer p {
                        margin: 0;
                    }
                    .site-footer__links {
                        display: flex;
                        align-items: center;
                        gap: 1rem;
                    }
                    .site-footer__links a {
                        color: inherit;
                        text-decoration: none;
                    }
                    .site-footer__links a:hover {
                        color: #fff;
                    }
                    @media (min-width: 640px) {
                        .site-footer__inner { flex-direction: row; }
                    }
                "#}
            </style>
            <div class="container site-footer__inner">
                <p>{copyright_line(year)}</p>
                <div class="site-footer__links">
                    { for FOOTER_LINKS.iter().map(|label| html! {
                        <a href="#">{*label}</a>
                    }) }
                </div>
            </div>
        </footer>
    }
}
