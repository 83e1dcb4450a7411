use yew::prelude::*;

use crate::components::{
    header::Header,
    privacy_notice::PrivacyNotice,
    value_proposition::ValueProposition,
    video_section::VideoSection,
};
use crate::form::upload_form::UploadForm;

#[function_component(Home)]
pub fn home() -> Html {
    html! {
        <div class="landing">
            <style>
                {r#"
                body {
                    margin: 0;
                    font-family: -apple-system, BlinkMacSystemFont, "Segoe UI", Roboto, Helvetica, Arial, sans-serif;
                }
                .landing {
                    min-height: 100vh;
                    background: linear-gradient(to bottom right, #fb7185, #2dd4bf, #3b82f6);
                }
                .landing__veil {
                    min-height: 100vh;
                    background: rgba(255, 255, 255, 0.1);
                    backdrop-filter: blur(4px);
                }
                .landing main {
                    max-width: 80rem;
                    margin: 0 auto;
                    padding: 2rem 1rem 3rem 1rem;
                }
                .card {
                    background: rgba(255, 255, 255, 0.8);
                    backdrop-filter: blur(4px);
                    border-radius: 12px;
                    box-shadow: 0 4px 6px rgba(0, 0, 0, 0.1);
                    padding: 1.5rem;
                }
                .value-proposition {
                    max-width: 56rem;
                    margin: 0 auto 2rem auto;
                    box-sizing: border-box;
                }
                .value-proposition p {
                    margin: 0;
                    font-size: 1.125rem;
                    line-height: 1.6;
                    color: #334155;
                }
                .value-proposition a {
                    color: #2563eb;
                }
                .value-proposition a:hover {
                    color: #3b82f6;
                }
                .privacy-notice {
                    max-width: 36rem;
                    margin: 1rem auto 0 auto;
                    padding: 1rem;
                    display: flex;
                    align-items: center;
                    gap: 0.5rem;
                    border-radius: 8px;
                }
                .privacy-notice p {
                    margin: 0;
                    font-size: 0.875rem;
                    color: #334155;
                }
                .privacy-notice__icon {
                    flex-shrink: 0;
                }
                "#}
            </style>
            <div class="landing__veil">
                <Header />
                <main>
                    <ValueProposition />
                    <VideoSection />
                    <UploadForm />
                    <PrivacyNotice />
                </main>
            </div>
        </div>
    }
}
