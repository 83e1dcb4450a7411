use gloo_timers::callback::Interval;
use log::{error, info};
use wasm_bindgen_futures::spawn_local;
use web_sys::{HtmlInputElement, HtmlTextAreaElement};
use yew::prelude::*;

use crate::config;
use crate::counter::context::{CounterAction, CounterContext};
use crate::counter::store::CounterStore;
use crate::form::state::{FieldEdit, FormAction, FormState, SubmitStatus};
use crate::form::validator::Field;
use crate::submission::{deliver, WebhookClient};

fn field_class(state: &FormState, field: Field) -> Classes {
    classes!("form-input", state.errors.get(field).map(|_| "form-input--error"))
}

fn field_error(state: &FormState, field: Field) -> Html {
    match state.errors.get(field) {
        Some(message) => html! { <p class="field-error">{message}</p> },
        None => html! {},
    }
}

#[function_component(UploadForm)]
pub fn upload_form() -> Html {
    let form = use_reducer(FormState::default);
    let counter = use_context::<CounterContext>();
    let pending = form.status.is_pending();

    // Rotate the button message while a request is in flight. The interval
    // lives exactly as long as the pending state.
    {
        let form = form.clone();
        let interval_handle = use_mut_ref(|| None::<Interval>);
        use_effect_with_deps(
            move |pending: &bool| {
                let handle = interval_handle.clone();
                if *pending {
                    let interval = Interval::new(config::MESSAGE_ROTATE_MS, move || {
                        form.dispatch(FormAction::Tick);
                    });
                    *handle.borrow_mut() = Some(interval);
                }
                move || {
                    if let Some(interval) = handle.borrow_mut().take() {
                        drop(interval);
                    }
                }
            },
            pending,
        );
    }

    let on_name = {
        let form = form.clone();
        Callback::from(move |e: InputEvent| {
            let input: HtmlInputElement = e.target_unchecked_into();
            form.dispatch(FormAction::Edit(FieldEdit::Name(input.value())));
        })
    };

    let on_email = {
        let form = form.clone();
        Callback::from(move |e: InputEvent| {
            let input: HtmlInputElement = e.target_unchecked_into();
            form.dispatch(FormAction::Edit(FieldEdit::Email(input.value())));
        })
    };

    let on_firma = {
        let form = form.clone();
        Callback::from(move |e: InputEvent| {
            let input: HtmlInputElement = e.target_unchecked_into();
            form.dispatch(FormAction::Edit(FieldEdit::Firma(input.value())));
        })
    };

    let on_content = {
        let form = form.clone();
        Callback::from(move |e: InputEvent| {
            let input: HtmlTextAreaElement = e.target_unchecked_into();
            form.dispatch(FormAction::Edit(FieldEdit::Content(input.value())));
        })
    };

    let on_consent = {
        let form = form.clone();
        Callback::from(move |e: Event| {
            let input: HtmlInputElement = e.target_unchecked_into();
            form.dispatch(FormAction::Edit(FieldEdit::Consent(input.checked())));
        })
    };

    let on_submit = {
        let form = form.clone();
        let counter = counter.clone();
        Callback::from(move |e: SubmitEvent| {
            e.prevent_default();
            if form.status.is_pending() {
                return;
            }
            let submission = match form.accept() {
                Ok(submission) => submission,
                Err(errors) => {
                    info!("Submission blocked by {} invalid field(s)", errors.len());
                    form.dispatch(FormAction::Rejected(errors));
                    return;
                }
            };
            form.dispatch(FormAction::Started);

            let form = form.clone();
            let counter = counter.clone();
            spawn_local(async move {
                let client = WebhookClient::new(config::webhook_url());
                let store = CounterStore::browser();
                match deliver(&client, &store, &submission).await {
                    Ok(count) => {
                        if let Some(counter) = counter {
                            counter.dispatch(CounterAction::Recorded(count));
                        }
                        form.dispatch(FormAction::Succeeded);
                    }
                    Err(e) => {
                        error!("Submission failed: {}", e);
                        form.dispatch(FormAction::Failed);
                    }
                }
            });
        })
    };

    let values = &form.values;

    html! {
        <form class="upload-form card" onsubmit={on_submit} novalidate={true}>
            <style>
                {r#"
                .upload-form {
                    max-width: 36rem;
                    margin: 0 auto;
                    padding: 1.5rem;
                }
                .upload-form .form-group {
                    margin-bottom: 1rem;
                }
                .upload-form label {
                    display: block;
                    font-size: 0.875rem;
                    font-weight: 500;
                    color: #0f172a;
                }
                .form-input {
                    margin-top: 0.25rem;
                    display: block;
                    width: 100%;
                    box-sizing: border-box;
                    padding: 0.5rem 0.75rem;
                    border: 1px solid #d1d5db;
                    border-radius: 6px;
                    box-shadow: 0 1px 2px rgba(0, 0, 0, 0.05);
                    font: inherit;
                }
                .form-input:focus {
                    outline: none;
                    border-color: #3b82f6;
                    box-shadow: 0 0 0 2px rgba(59, 130, 246, 0.3);
                }
                .form-input--error {
                    border-color: #ef4444;
                }
                .field-error {
                    margin-top: 0.25rem;
                    font-size: 0.875rem;
                    color: #dc2626;
                }
                .content-hint {
                    display: flex;
                    align-items: center;
                    gap: 0.5rem;
                    margin: 0.25rem 0 0.5rem 0;
                    font-size: 0.875rem;
                    color: #475569;
                }
                .content-wrapper {
                    position: relative;
                }
                .word-counter {
                    position: absolute;
                    bottom: 0.5rem;
                    right: 0.5rem;
                    font-size: 0.875rem;
                    color: #64748b;
                }
                .banner {
                    padding: 0.75rem;
                    border-radius: 6px;
                    margin-bottom: 1rem;
                }
                .banner--error {
                    background: #fef2f2;
                    color: #b91c1c;
                }
                .banner--success {
                    background: #f0fdf4;
                    color: #15803d;
                }
                .submit-button {
                    width: 100%;
                    display: flex;
                    align-items: center;
                    justify-content: center;
                    padding: 0.5rem 1rem;
                    border: none;
                    border-radius: 6px;
                    background: #2563eb;
                    color: #fff;
                    font-size: 0.875rem;
                    font-weight: 500;
                    cursor: pointer;
                }
                .submit-button:hover {
                    background: #1d4ed8;
                }
                .submit-button:disabled {
                    opacity: 0.5;
                    cursor: default;
                }
                .loading-spinner {
                    display: inline-block;
                    width: 16px;
                    height: 16px;
                    margin-right: 0.5rem;
                    border: 2px solid rgba(255,255,255,.3);
                    border-radius: 50%;
                    border-top-color: #fff;
                    animation: spin 1s linear infinite;
                    flex-shrink: 0;
                }
                @keyframes spin { to { transform: rotate(360deg); } }
                .consent-row {
                    display: flex;
                    align-items: flex-start;
                    gap: 0.5rem;
                    margin-top: 1rem;
                    font-size: 0.875rem;
                    color: #334155;
                }
                "#}
            </style>

            <div class="form-group">
                <label for="name">{"Vollständiger Name"}</label>
                <input
                    type="text"
                    id="name"
                    class={field_class(&form, Field::Name)}
                    value={values.name.clone()}
                    oninput={on_name}
                />
                { field_error(&form, Field::Name) }
            </div>

            <div class="form-group">
                <label for="email">{"E-Mail Adresse"}</label>
                <input
                    type="email"
                    id="email"
                    class={field_class(&form, Field::Email)}
                    value={values.email.clone()}
                    oninput={on_email}
                />
                { field_error(&form, Field::Email) }
            </div>

            <div class="form-group">
                <label for="firma">{"Firma (optional)"}</label>
                <input
                    type="text"
                    id="firma"
                    class="form-input"
                    value={values.firma.clone()}
                    oninput={on_firma}
                />
            </div>

            <div class="form-group">
                <label for="content">{"Text eingeben"}</label>
                <div class="content-hint">
                    <span>{"ℹ️"}</span>
                    <p>{format!("Deine Eingabe sollte ein minimum von {} Wörtern haben, um eine Analyse erstellen zu können", config::MIN_CONTENT_WORDS)}</p>
                </div>
                <div class="content-wrapper">
                    <textarea
                        id="content"
                        rows="6"
                        class={field_class(&form, Field::Content)}
                        value={values.content.clone()}
                        oninput={on_content}
                    />
                    <div class="word-counter">
                        {format!("{}/{} Worte", form.word_count(), config::MIN_CONTENT_WORDS)}
                    </div>
                </div>
                { field_error(&form, Field::Content) }
            </div>

            if form.status == SubmitStatus::Failed {
                <div class="banner banner--error">
                    {"Es ist ein Fehler aufgetreten. Bitte versuche es erneut"}
                </div>
            }

            if form.status == SubmitStatus::Succeeded {
                <div class="banner banner--success">
                    {"Deine WriteMap ist fast fertig! Wir schicken dir in wenigen Minuten eine E-Mail 🎊 - Bitte schau in deine Spam, solltest du sie nicht im Postfach haben."}
                </div>
            }

            <button type="submit" class="submit-button" disabled={pending}>
                if pending {
                    <>
                        <span class="loading-spinner"></span>
                        { form.rota.message() }
                    </>
                } else {
                    {"Hochladen"}
                }
            </button>

            <div class="consent-row">
                <input
                    type="checkbox"
                    id="consent"
                    checked={values.consent}
                    onchange={on_consent}
                />
                <label for="consent">
                    {"Mit dem Hochladen bestätige ich, dass Harvest Flow mir E-Mails bezüglich WriteMap und anderen Produkten senden darf"}
                </label>
            </div>
            { field_error(&form, Field::Consent) }
        </form>
    }
}
