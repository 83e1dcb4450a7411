use yew::prelude::*;

use crate::config;
use crate::counter::context::{CounterContext, SubmissionCount};

#[function_component(VideoSection)]
pub fn video_section() -> Html {
    let count = use_context::<CounterContext>()
        .map(|count| *count)
        .unwrap_or_default();
    let SubmissionCount(submissions) = count;

    html! {
        <div class="video-section">
            <style>
                {r#"
                .video-section {
                    max-width: 56rem;
                    margin: 0 auto 2rem auto;
                }
                .video-section h2 {
                    display: flex;
                    align-items: center;
                    gap: 0.5rem;
                    margin: 0 0 1rem 0;
                    font-size: 1.25rem;
                    font-weight: 600;
                    color: #0f172a;
                }
                .video-frame {
                    position: relative;
                    width: 100%;
                    padding-bottom: 56.25%;
                }
                .video-frame iframe {
                    position: absolute;
                    top: 0;
                    left: 0;
                    width: 100%;
                    height: 100%;
                    border: 0;
                    border-radius: 8px;
                }
                .video-caption {
                    margin-top: 0.75rem;
                    font-size: 0.875rem;
                    color: #475569;
                }
                .badges {
                    margin-top: 1.5rem;
                    display: flex;
                    flex-direction: column;
                    align-items: center;
                    gap: 0.75rem;
                }
                .badge {
                    display: flex;
                    align-items: center;
                    gap: 0.5rem;
                    padding: 0.5rem 1rem;
                    border-radius: 8px;
                    font-size: 0.875rem;
                    font-weight: 600;
                    box-shadow: 0 1px 2px rgba(0, 0, 0, 0.05);
                }
                .badge--model {
                    background: #eff6ff;
                    color: #1d4ed8;
                }
                .badge--count {
                    background: #ecfdf5;
                    color: #047857;
                }
                "#}
            </style>
            <div class="card">
                <h2>{"▶️ Wie funktioniert's?"}</h2>
                <div class="video-frame">
                    <iframe
                        src={config::VIDEO_EMBED_URL}
                        title="WriteMap Tutorial"
                        allow="accelerometer; autoplay; clipboard-write; encrypted-media; gyroscope; picture-in-picture; web-share"
                        allowfullscreen={true}
                    ></iframe>
                </div>
                <p class="video-caption">{"👉🏼 Beispiel und User-Guide im Video zu sehen"}</p>
            </div>
            <div class="badges">
                <div class="badge badge--model">{"⚡ Powered by GPT-4"}</div>
                <div class="badge badge--count">
                    {format!("📊 {} Analysen wurden bereits mit WriteMap erstellt", submissions)}
                </div>
            </div>
        </div>
    }
}
