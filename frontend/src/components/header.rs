use yew::prelude::*;

use crate::state::HealthStatus;

#[derive(Properties, PartialEq)]
pub struct HeaderProps {
    pub health: HealthStatus,
}

/// Screen header with the API health badge. The badge reflects only
/// the health-check flow, never the balance fetch.
#[function_component(Header)]
pub fn header(props: &HeaderProps) -> Html {
    let (badge_class, badge_text) = match props.health {
        HealthStatus::Unknown => ("health-badge checking", "API: Checking..."),
        HealthStatus::Ok => ("health-badge healthy", "API: ✓ Connected"),
        HealthStatus::Error => ("health-badge unhealthy", "API: ✗ Disconnected"),
    };

    html! {
        <header class="header">
            <h1>{"💰 Wallet Management"}</h1>
            <div class={badge_class}>{badge_text}</div>
        </header>
    }
}
