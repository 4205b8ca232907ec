use chrono::Datelike;
use yew::prelude::*;
use yew_router::prelude::*;

use crate::content::{footer_category_links, footer_quick_links, NavLink, FOOTER_ABOUT, SOCIAL_LINKS};
use crate::Route;

fn link_column(title: &'static str, links: Vec<NavLink>) -> Html {
    html! {
        <div>
            <h3 class="footer-heading">{ title }</h3>
            <ul class="footer-links">
                { for links.into_iter().map(|link| html! {
                    <li>
                        <Link<Route> to={link.route} classes="footer-link">{ link.label }</Link<Route>>
                    </li>
                }) }
            </ul>
        </div>
    }
}

#[function_component(Footer)]
pub fn footer() -> Html {
    let year = chrono::Local::now().year();

    html! {
        <footer class="site-footer">
            <div class="container">
                <div class="footer-grid">
                    <div>
                        <h3 class="footer-heading">{"About MONOBLOG"}</h3>
                        <p>{ FOOTER_ABOUT }</p>
                    </div>
                    { link_column("Quick Links", footer_quick_links()) }
                    { link_column("Categories", footer_category_links()) }
                    <div>
                        <h3 class="footer-heading">{"Connect"}</h3>
                        <ul class="footer-links">
                            { for SOCIAL_LINKS.iter().map(|name| html! {
                                <li><a href="#" class="footer-link">{ *name }</a></li>
                            }) }
                        </ul>
                    </div>
                </div>
                <div class="footer-bottom">
                    <p>{ format!("© {} MONOBLOG. All rights reserved.", year) }</p>
                </div>
            </div>
            <style>
                {r#"
                    .site-footer {
                        background: #000000;
                        color: #ffffff;
                        padding: 3rem 0;
                    }

                    .footer-grid {
                        display: grid;
                        grid-template-columns: repeat(4, 1fr);
                        gap: 2rem;
                    }

                    .footer-heading {
                        font-size: 1.125rem;
                        font-weight: 600;
                        margin: 0 0 1rem;
                    }

                    .footer-links {
                        list-style: none;
                        padding: 0;
                        margin: 0;
                    }

                    .footer-links li {
                        margin-bottom: 0.5rem;
                    }

                    .footer-link {
                        color: #ffffff;
                        text-decoration: none;
                        transition: color 0.2s ease;
                    }

                    .footer-link:hover {
                        color: #9ca3af;
                    }

                    .footer-bottom {
                        margin-top: 2rem;
                        padding-top: 2rem;
                        border-top: 1px solid #1f2937;
                        text-align: center;
                    }

                    @media (max-width: 768px) {
                        .footer-grid {
                            grid-template-columns: 1fr;
                        }
                    }
                "#}
            </style>
        </footer>
    }
}
