use shared::WalletBalance;
use web_sys::MouseEvent;
use yew::prelude::*;

use crate::state::{balance_view, BalanceView, FetchState};

#[derive(Properties, PartialEq)]
pub struct BalanceCardProps {
    pub fetch_state: FetchState,
    pub error: Option<String>,
    pub balance: Option<WalletBalance>,

    pub on_retry: Callback<()>,
    pub on_refresh: Callback<()>,
    pub on_add_income: Callback<()>,
}

/// The balance card renders exactly one of error, loading or the
/// loaded amount, in that precedence. Retry and refresh both re-run
/// the same fetch flow.
#[function_component(BalanceCard)]
pub fn balance_card(props: &BalanceCardProps) -> Html {
    let view = balance_view(
        props.fetch_state,
        props.error.as_deref(),
        props.balance.as_ref(),
    );

    let on_retry = {
        let on_retry = props.on_retry.clone();
        Callback::from(move |_: MouseEvent| on_retry.emit(()))
    };
    let on_refresh = {
        let on_refresh = props.on_refresh.clone();
        Callback::from(move |_: MouseEvent| on_refresh.emit(()))
    };
    let on_add_income = {
        let on_add_income = props.on_add_income.clone();
        Callback::from(move |_: MouseEvent| on_add_income.emit(()))
    };

    html! {
        <section class="balance-card">
            <h2>{"Current Balance"}</h2>

            {match view {
                BalanceView::Failed(message) => html! {
                    <div class="error">
                        <p>{format!("⚠️ {}", message)}</p>
                        <button class="retry-btn" onclick={on_retry}>
                            {"Retry"}
                        </button>
                    </div>
                },
                BalanceView::Loading => html! {
                    <div class="loading">
                        <div class="spinner"></div>
                        <p>{"Loading..."}</p>
                    </div>
                },
                BalanceView::Ready(snapshot) => html! {
                    <>
                        <div class="balance-display">
                            <span class="amount">{format!("{:.2}", snapshot.balance)}</span>
                            <span class="currency">{snapshot.currency.clone()}</span>
                        </div>
                        <div class="balance-actions">
                            <button class="refresh-btn" onclick={on_refresh}>
                                {"🔄 Refresh"}
                            </button>
                            <button class="btn btn-primary add-income-btn" onclick={on_add_income}>
                                {"＋ Add Income"}
                            </button>
                        </div>
                    </>
                },
            }}
        </section>
    }
}
