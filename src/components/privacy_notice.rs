use yew::prelude::*;

#[function_component(PrivacyNotice)]
pub fn privacy_notice() -> Html {
    html! {
        <div class="card privacy-notice">
            <span class="privacy-notice__icon">{"🛡️"}</span>
            <p>
                {"Deine hochgeladenen Texte werden nicht gespeichert, sondern sofort nach Bearbeitung gelöscht. Bitte stell trotzdem sicher, dass keine vertraulichen Daten Dritter in deinen Texten enthalten sind."}
            </p>
        </div>
    }
}
