use yew::prelude::*;

use crate::config;

#[function_component(ValueProposition)]
pub fn value_proposition() -> Html {
    html! {
        <div class="card value-proposition">
            <p>
                {"Mit unserer komplett kostenfreien 'WriteMap' lässt du KI in deinem Sprachstil sprechen - für E-Mails und mehr geeignet. Wir von "}
                <a href={config::MARKETING_URL}>{"Harvest Flow"}</a>
                {" haben uns gedacht, das ist was die Immobilienbranche braucht. Wir freuen uns auf dein Feedback."}
            </p>
        </div>
    }
}
