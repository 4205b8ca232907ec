use yew::prelude::*;
use yew_router::prelude::*;

use crate::Route;

#[function_component(NotFound)]
pub fn not_found() -> Html {
    html! {
        <main class="not-found-page">
            <h1>{"This page hasn't been written yet"}</h1>
            <p>{"Every great journey begins with a single word, but this one is still a blank page."}</p>
            <Link<Route> to={Route::Home} classes="not-found-link">
                {"Back to OceanInk"}
            </Link<Route>>
            <style>
                {r#"
                    .not-found-page {
                        min-height: 100vh;
                        padding: 8rem 1rem 4rem;
                        text-align: center;
                    }

                    .not-found-page h1 {
                        font-size: 2.25rem;
                        font-weight: 700;
                        margin: 0 0 1rem;
                    }

                    .not-found-page p {
                        color: #4b5563;
                        margin: 0 0 2rem;
                    }

                    .not-found-link {
                        display: inline-block;
                        padding: 0.75rem 2rem;
                        background: #000000;
                        color: #ffffff;
                        border-radius: 6px;
                        text-decoration: none;
                    }
                "#}
            </style>
        </main>
    }
}
