use log::debug;
use web_sys::MouseEvent;
use yew::prelude::*;
use yew_router::prelude::*;

use crate::components::icon::{Icon, IconKind};
use crate::content::nav_links;
use crate::hooks::use_scroll;
use crate::motion::header_is_solid;
use crate::Route;

#[function_component(Nav)]
pub fn nav() -> Html {
    let menu_open = use_state(|| false);
    let scroll = use_scroll();
    let is_solid = header_is_solid(scroll.y);

    let toggle_menu = {
        let menu_open = menu_open.clone();
        Callback::from(move |e: MouseEvent| {
            e.prevent_default();
            debug!("Mobile menu {}", if *menu_open { "closed" } else { "opened" });
            menu_open.set(!*menu_open);
        })
    };

    let close_menu = {
        let menu_open = menu_open.clone();
        Callback::from(move |_: MouseEvent| {
            menu_open.set(false);
        })
    };

    let links = nav_links();

    html! {
        <header class={classes!("top-nav", is_solid.then(|| "solid"))}>
            <div class="nav-content">
                <Link<Route> to={Route::Home} classes="nav-logo">
                    {"OceanInk"}
                </Link<Route>>

                <nav class="nav-desktop">
                    { for links.iter().map(|link| html! {
                        <Link<Route> to={link.route.clone()} classes="nav-link">
                            { link.label }
                        </Link<Route>>
                    }) }
                </nav>

                <button
                    class="menu-toggle"
                    onclick={toggle_menu}
                    aria-label={if *menu_open { "Close menu" } else { "Open menu" }}
                    aria-expanded={(*menu_open).to_string()}
                >
                    <Icon kind={if *menu_open { IconKind::X } else { IconKind::Menu }} />
                </button>
            </div>
            {
                if *menu_open {
                    html! {
                        <nav class="nav-mobile">
                            { for links.iter().map(|link| html! {
                                <div onclick={close_menu.clone()}>
                                    <Link<Route> to={link.route.clone()} classes="nav-link">
                                        { link.label }
                                    </Link<Route>>
                                </div>
                            }) }
                        </nav>
                    }
                } else {
                    html! {}
                }
            }
            <style>
                {r#"
                    .top-nav {
                        position: fixed;
                        top: 0;
                        left: 0;
                        width: 100%;
                        z-index: 50;
                        background: transparent;
                        transition: all 0.3s ease;
                    }

                    .top-nav.solid {
                        background: #ffffff;
                        box-shadow: 0 4px 6px -1px rgba(0, 0, 0, 0.1), 0 2px 4px -2px rgba(0, 0, 0, 0.1);
                    }

                    .nav-content {
                        max-width: 1280px;
                        margin: 0 auto;
                        padding: 1rem;
                        display: flex;
                        justify-content: space-between;
                        align-items: center;
                    }

                    .nav-logo {
                        font-size: 1.5rem;
                        font-weight: 700;
                        color: #000000;
                        text-decoration: none;
                    }

                    .nav-desktop {
                        display: flex;
                        gap: 1rem;
                    }

                    .nav-link {
                        color: #1e40af;
                        text-decoration: none;
                        transition: color 0.2s ease;
                    }

                    .nav-link:hover {
                        color: #2563eb;
                    }

                    .menu-toggle {
                        display: none;
                        background: none;
                        border: none;
                        padding: 0.5rem;
                        color: #2563eb;
                        cursor: pointer;
                        border-radius: 6px;
                    }

                    .menu-toggle:hover {
                        background: rgba(37, 99, 235, 0.08);
                    }

                    .menu-toggle .icon {
                        width: 24px;
                        height: 24px;
                    }

                    .nav-mobile {
                        display: none;
                        flex-direction: column;
                        gap: 0.5rem;
                        padding: 0.5rem 1rem;
                        background: #ffffff;
                        animation: menuSlideIn 0.3s ease forwards;
                    }

                    @keyframes menuSlideIn {
                        from { opacity: 0; transform: translateY(-20px); }
                        to { opacity: 1; transform: translateY(0); }
                    }

                    @media (max-width: 768px) {
                        .nav-desktop {
                            display: none;
                        }

                        .menu-toggle {
                            display: inline-flex;
                        }

                        .nav-mobile {
                            display: flex;
                        }
                    }
                "#}
            </style>
        </header>
    }
}
