use yew::prelude::*;
use yew_router::prelude::*;

use crate::config::HOME_META;
use crate::hooks::use_page_meta;
use crate::Route;

#[function_component(NotFound)]
pub fn not_found() -> Html {
    use_page_meta(HOME_META);

    html! {
        <div class="not-found">
            <p class="eyebrow">{"404"}</p>
            <h1>{"This path leads nowhere calm"}</h1>
            <Link<Route> to={Route::Home} classes="cta primary">
                {"Back to the oasis"}
            </Link<Route>>
            <style>
                {r#"
                .not-found {
                    min-height: 70vh;
                    display: flex;
                    flex-direction: column;
                    align-items: center;
                    justify-content: center;
                    gap: 1.5rem;
                    text-align: center;
                    padding: 4rem 1.5rem;
                }

                .not-found h1 {
                    font-family: var(--font-display);
                    color: #fff8ea;
                }
                "#}
            </style>
        </div>
    }
}
