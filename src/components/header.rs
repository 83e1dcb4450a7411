use yew::prelude::*;

#[function_component(Header)]
pub fn header() -> Html {
    html! {
        <header class="site-header">
            <style>
                {r#"
                .site-header {
                    width: 100%;
                    padding: 1.5rem 1rem;
                    box-sizing: border-box;
                }
                .site-header__inner {
                    max-width: 80rem;
                    margin: 0 auto;
                    display: flex;
                    align-items: center;
                    justify-content: space-between;
                    gap: 1rem;
                }
                .site-header__brand {
                    display: flex;
                    align-items: center;
                    gap: 0.75rem;
                }
                .site-header__icon {
                    font-size: 2rem;
                }
                .site-header h1 {
                    margin: 0;
                    font-size: 1.5rem;
                    font-weight: 700;
                    color: #0f172a;
                }
                .site-header__by {
                    margin: 0;
                    font-size: 0.875rem;
                    color: #475569;
                }
                .site-header__tagline {
                    color: #334155;
                    font-weight: 500;
                    text-align: right;
                }
                @media (max-width: 768px) {
                    .site-header__inner {
                        flex-direction: column;
                    }
                    .site-header__tagline {
                        text-align: center;
                    }
                }
                "#}
            </style>
            <div class="site-header__inner">
                <div class="site-header__brand">
                    <span class="site-header__icon">{"🧠"}</span>
                    <div>
                        <h1>{"Immo-Solutions AI"}</h1>
                        <p class="site-header__by">{"by Harvest Flow"}</p>
                    </div>
                </div>
                <p class="site-header__tagline">
                    {"Bring ChatGPT "}<strong>{"deine"}</strong>{" Schreibweise bei und spar dir Unmengen an Zeit"}
                </p>
            </div>
        </header>
    }
}
