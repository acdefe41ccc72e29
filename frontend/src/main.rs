use yew::prelude::*;

mod components;
mod hooks;
mod services;
mod state;

use components::balance_card::BalanceCard;
use components::header::Header;
use components::income_modal::IncomeModal;
use hooks::use_dashboard::use_dashboard;
use services::api::ApiClient;

#[function_component(App)]
fn app() -> Html {
    let api_client = ApiClient::new();
    let dashboard = use_dashboard(&api_client);
    let state = dashboard.state;
    let actions = dashboard.actions;

    html! {
        <div class="app">
            <Header health={state.health} />

            <main class="main">
                {if let Some(message) = state.success_message.as_ref() {
                    html! {
                        <div class="form-message success">
                            {message}
                        </div>
                    }
                } else { html! {} }}

                <BalanceCard
                    fetch_state={state.fetch_state}
                    error={state.fetch_error.clone()}
                    balance={state.balance.clone()}
                    on_retry={actions.fetch_balance.clone()}
                    on_refresh={actions.fetch_balance.clone()}
                    on_add_income={actions.open_income_form.clone()}
                />

                <IncomeModal
                    is_open={state.form_open}
                    draft={state.draft.clone()}
                    submission={state.submission}
                    form_error={state.form_error.clone()}
                    on_amount_change={actions.on_amount_change.clone()}
                    on_description_change={actions.on_description_change.clone()}
                    on_date_change={actions.on_date_change.clone()}
                    on_submit={actions.submit_income.clone()}
                    on_close={actions.close_income_form.clone()}
                />
            </main>

            <footer class="footer">
                <p>{"Wallet Management"}</p>
            </footer>
        </div>
    }
}

fn main() {
    yew::Renderer::<App>::new().render();
}
